//! Division (§4.5): short division by a single word, and Knuth Algorithm D for a multi-word
//! divisor.
//!
//! Division is not part of the constant-time surface (§6 lists no `c_div`): the quotient-digit
//! estimate in Knuth D is itself a data-dependent comparison, so there is no branchless variant
//! to offer here the way there is for `add`/`mul`/`shift`.

mod knuth;

use crate::arch::Word;
use crate::error;
use crate::nat::Nat;
use crate::word_ops;
use alloc::vec;
use core::cmp::Ordering;

impl Nat {
    /// `div_w(x, d) -> (q, r)`: divide `x` by the single non-zero word `d`.
    ///
    /// Fatal ("division by zero") if `d == 0`.
    pub fn div_w(&mut self, x: &Nat, d: Word) -> Word {
        if d == 0 {
            error::division_by_zero();
        }
        let n = x.len();
        if n == 0 {
            self.make(0);
            return 0;
        }
        if d == 1 {
            self.set(x);
            return 0;
        }
        let mut z = vec![0 as Word; n];
        let r = word_ops::div_wvw(&mut z, 0, x.words(), d);
        self.make(n);
        self.words_mut().copy_from_slice(&z);
        self.norm();
        r
    }

    /// `mod_w(d)`: the remainder of `self / d`, without computing the quotient.
    ///
    /// Fatal ("division by zero") if `d == 0`.
    pub fn mod_w(&self, d: Word) -> Word {
        if d == 0 {
            error::division_by_zero();
        }
        if d == 1 || self.len() == 0 {
            return 0;
        }
        let mut scratch = vec![0 as Word; self.len()];
        word_ops::div_wvw(&mut scratch, 0, self.words(), d)
    }

    /// `div(u, v) -> (q, r)`: `u = q*v + r` with `0 <= r < v`.
    ///
    /// Fatal ("division by zero") if `v` is zero. Dispatches on length: `u < v` is the trivial
    /// `(0, u)`; a one-word `v` delegates to [`Nat::div_w`]; otherwise Knuth Algorithm D
    /// (`knuth::div_large`).
    pub fn div(u: &Nat, v: &Nat) -> (Nat, Nat) {
        if v.is_zero() {
            error::division_by_zero();
        }
        if u.cmp_nat(v) == Ordering::Less {
            let mut r = Nat::zero();
            r.set(u);
            return (Nat::zero(), r);
        }
        if v.len() == 1 {
            let mut q = Nat::zero();
            let rem = q.div_w(u, v.words()[0]);
            let mut r = Nat::zero();
            r.set_word(rem);
            return (q, r);
        }
        knuth::div_large(u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_w_by_zero() {
        let mut x = Nat::zero();
        x.set_word(1);
        let mut z = Nat::zero();
        z.div_w(&x, 0);
    }

    #[test]
    fn test_div_w_basic() {
        let mut x = Nat::zero();
        x.set_uint64(100);
        let mut q = Nat::zero();
        let r = q.div_w(&x, 7);
        let mut expected = Nat::zero();
        expected.set_word(14);
        assert_eq!(q, expected);
        assert_eq!(r, 2);
    }

    #[test]
    fn test_div_w_by_one() {
        let mut x = Nat::zero();
        x.set_uint64(123456789);
        let mut q = Nat::zero();
        let r = q.div_w(&x, 1);
        assert_eq!(q, x);
        assert_eq!(r, 0);
    }

    #[test]
    fn test_mod_w() {
        let mut x = Nat::zero();
        x.set_uint64(100);
        assert_eq!(x.mod_w(7), 2);
        assert_eq!(x.mod_w(1), 0);
    }

    #[test]
    fn test_div_u_less_than_v() {
        let mut u = Nat::zero();
        u.set_word(3);
        let mut v = Nat::zero();
        v.set_word(10);
        let (q, r) = Nat::div(&u, &v);
        assert!(q.is_zero());
        assert_eq!(r, u);
    }

    #[test]
    fn test_div_single_word_divisor() {
        let mut u = Nat::zero();
        u.set_uint64(1_000_000);
        let mut v = Nat::zero();
        v.set_word(37);
        let (q, r) = Nat::div(&u, &v);
        let mut product = Nat::zero();
        product.mul(&q, &v);
        let mut reconstructed = Nat::zero();
        reconstructed.add(&product, &r);
        assert_eq!(reconstructed, u);
        assert!(r.cmp_nat(&v) == Ordering::Less);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_by_zero() {
        let mut u = Nat::zero();
        u.set_word(1);
        let v = Nat::zero();
        let _ = Nat::div(&u, &v);
    }
}
