/// Machine word.
pub(crate) type Word = u64;

/// Double-width word, used for widening multiply/divide.
pub(crate) type DoubleWord = u128;
