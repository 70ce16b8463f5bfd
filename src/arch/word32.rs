/// Machine word.
pub(crate) type Word = u32;

/// Double-width word, used for widening multiply/divide.
pub(crate) type DoubleWord = u64;
