//! Architecture-dependent word types and carry primitives.
//!
//! `Nat` is defined in terms of a single machine [`Word`](word32/word64) whose width is chosen
//! at compile time. The spec only ever claims `W` is 32 or 64 bits, so unlike a general-purpose
//! bignum crate we do not special-case individual CPU architectures or provide an asm fast path:
//! we pick the generic 32-bit or 64-bit implementation based on `target_pointer_width`, falling
//! back to 64 bits when the pointer width is anything else (e.g. 16-bit embedded targets, where
//! 64-bit words are still the right choice for arithmetic throughput).

#[cfg_attr(target_pointer_width = "32", path = "word32.rs")]
#[cfg_attr(not(target_pointer_width = "32"), path = "word64.rs")]
mod word_impl;

pub(crate) use word_impl::{DoubleWord, Word};

/// `a + b + carry`, returning `(result, carry_out)`.
#[inline]
pub(crate) fn add_with_carry(a: Word, b: Word, carry: bool) -> (Word, bool) {
    let (s1, o1) = a.overflowing_add(b);
    let (s2, o2) = s1.overflowing_add(carry as Word);
    (s2, o1 || o2)
}

/// `a - b - borrow`, returning `(result, borrow_out)`.
#[inline]
pub(crate) fn sub_with_borrow(a: Word, b: Word, borrow: bool) -> (Word, bool) {
    let (d1, o1) = a.overflowing_sub(b);
    let (d2, o2) = d1.overflowing_sub(borrow as Word);
    (d2, o1 || o2)
}
