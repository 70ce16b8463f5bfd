//! Multiplication (§4.4): grade-school, Karatsuba, and `mul_range`.

mod karatsuba;
mod simple;

use crate::arch::Word;
use crate::nat::Nat;
use crate::word_ops;
use alloc::vec;
use static_assertions::const_assert;

/// Below this length for the shorter operand, grade-school multiplication wins over Karatsuba
/// (§4.4, calibratable).
pub(crate) const KARATSUBA_THRESHOLD: usize = 40;

const_assert!(KARATSUBA_THRESHOLD >= 2);

impl Nat {
    /// `z = x * y`, variable-time.
    pub fn mul(&mut self, x: &Nat, y: &Nat) -> &mut Nat {
        self.c_mul(x, y, 0)
    }

    /// `z = x * y`, sized to `zcap` words when `zcap > 0`.
    ///
    /// Routing: zero operand short-circuits to zero; a one-word shorter operand delegates to
    /// [`Nat::mul_add_ww`]; below [`KARATSUBA_THRESHOLD`] (or in constant-time mode, where the
    /// branchless schoolbook loop is used unconditionally rather than Karatsuba's secret-dependent
    /// sign comparisons — see `DESIGN.md`) grade-school `basic_mul` is used; otherwise Karatsuba.
    pub fn c_mul(&mut self, x: &Nat, y: &Nat, zcap: usize) -> &mut Nat {
        if x.is_zero() || y.is_zero() {
            self.c_make(0, zcap);
            self.c_norm(zcap);
            return self;
        }
        let (short, long) = if x.len() <= y.len() { (x, y) } else { (y, x) };
        if zcap == 0 && short.len() == 1 {
            return self.c_mul_add_ww(long, short.words()[0], 0, zcap);
        }
        // `zcap > 0` is checked first (cheap, public) and forces the grade-school path
        // unconditionally: relying on `||` evaluating `zcap > 0` before `short.len() < threshold`
        // is what keeps this branch itself data-independent of the operands.
        if zcap > 0 || short.len() < KARATSUBA_THRESHOLD {
            return self.c_mul_basic(long, short, zcap);
        }
        self.c_mul_karatsuba(long, short, zcap);
        self
    }

    fn c_mul_basic(&mut self, long: &Nat, short: &Nat, zcap: usize) -> &mut Nat {
        let (m, n) = (long.len(), short.len());
        let mut z = vec![0 as Word; m + n];
        simple::basic_mul(&mut z, long.words(), short.words(), zcap > 0);
        self.c_make(m + n, zcap);
        // `self` may be wider than `z` when `zcap > m + n`; write into the natural-width prefix
        // rather than a whole-slice `copy_from_slice`, which would panic on a length mismatch.
        self.words_mut()[..z.len()].copy_from_slice(&z);
        self.c_norm(zcap);
        self
    }

    fn c_mul_karatsuba(&mut self, long: &Nat, short: &Nat, zcap: usize) {
        let k = karatsuba::karatsuba_len(short.len(), KARATSUBA_THRESHOLD);
        let x0 = karatsuba::low(long, k);
        let y0 = karatsuba::low(short, k);

        let mut acc = Nat::zero();
        acc.make(2 * k);
        {
            let mut z = vec![0 as Word; 2 * k];
            karatsuba::karatsuba_same_len(&mut z, &pad(&x0, k), &pad(&y0, k), KARATSUBA_THRESHOLD);
            acc.words_mut().copy_from_slice(&z);
            acc.norm();
        }

        if short.len() > k {
            let y1 = karatsuba::high(short, k);
            let mut cross = Nat::zero();
            cross.mul(&x0, &y1);
            karatsuba::add_at(&mut acc, &cross, k);
        }

        if long.len() > k {
            let mut offset = k;
            while offset < long.len() {
                let end = (offset + k).min(long.len());
                let xi = karatsuba::block(long, offset, end);

                let mut t0 = Nat::zero();
                t0.mul(&xi, &y0);
                karatsuba::add_at(&mut acc, &t0, offset);

                if short.len() > k {
                    let y1 = karatsuba::high(short, k);
                    let mut t1 = Nat::zero();
                    t1.mul(&xi, &y1);
                    karatsuba::add_at(&mut acc, &t1, offset + k);
                }
                offset = end;
            }
        }
        self.c_set(&acc, zcap);
    }

    /// `mul_add_ww(x, y, r)`: scalar fused-multiply-add `x * y + r`, variable-time.
    pub fn mul_add_ww(&mut self, x: &Nat, y: Word, r: Word) -> &mut Nat {
        self.c_mul_add_ww(x, y, r, 0)
    }

    pub(crate) fn c_mul_add_ww(&mut self, x: &Nat, y: Word, r: Word, zcap: usize) -> &mut Nat {
        let n = x.len();
        let mut z = vec![0 as Word; n + 1];
        let carry = word_ops::mul_add_vww(&mut z[..n], x.words(), y, r);
        z[n] = carry;
        self.c_make(n + 1, zcap);
        // Same fix as `c_mul_basic`: `self` may be wider than `z` when `zcap > n + 1`.
        self.words_mut()[..z.len()].copy_from_slice(&z);
        self.c_norm(zcap);
        self
    }

    /// `mul_range(a, b)`: product of every integer in `[a, b]`, `0` for an empty upper bound at
    /// `a == 0`, `1` for an empty range (`a > b`). Recurses by midpoint so the two subproducts
    /// stay balanced in length (important for Karatsuba to kick in on the combine).
    pub fn mul_range(&mut self, a: u64, b: u64) -> &mut Nat {
        if a > b {
            self.set_word(1);
            return self;
        }
        if a == 0 {
            self.set_word(0);
            return self;
        }
        mul_range_rec(self, a, b);
        self
    }
}

/// Pad (or truncate) `x`'s words out to exactly `len` words, zero-extending at the top.
fn pad(x: &Nat, len: usize) -> alloc::vec::Vec<Word> {
    let mut v = vec![0 as Word; len];
    let n = x.len().min(len);
    v[..n].copy_from_slice(&x.words()[..n]);
    v
}

fn mul_range_rec(dst: &mut Nat, a: u64, b: u64) {
    match b - a {
        0 => {
            dst.set_uint64(a);
        }
        1 => {
            let mut x = Nat::zero();
            x.set_uint64(a);
            let mut y = Nat::zero();
            y.set_uint64(b);
            dst.mul(&x, &y);
        }
        _ => {
            let mid = a + (b - a) / 2;
            let mut lo = Nat::zero();
            mul_range_rec(&mut lo, a, mid);
            let mut hi = Nat::zero();
            mul_range_rec(&mut hi, mid + 1, b);
            dst.mul(&lo, &hi);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_by_zero() {
        let mut x = Nat::zero();
        x.set_uint64(123456789);
        let zero = Nat::zero();
        let mut z = Nat::zero();
        z.mul(&x, &zero);
        assert!(z.is_zero());
    }

    #[test]
    fn test_mul_identity() {
        let mut x = Nat::zero();
        x.set_uint64(123456789);
        let mut one = Nat::zero();
        one.set_word(1);
        let mut z = Nat::zero();
        z.mul(&x, &one);
        assert_eq!(z, x);
    }

    #[test]
    fn test_mul_commutative_and_basic() {
        let mut x = Nat::zero();
        x.set_uint64(0xdead_beef_1234);
        let mut y = Nat::zero();
        y.set_uint64(0x1357_9bdf);
        let mut a = Nat::zero();
        a.mul(&x, &y);
        let mut b = Nat::zero();
        b.mul(&y, &x);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mul_triggers_karatsuba_matches_basic() {
        // 64 all-ones words, well above KARATSUBA_THRESHOLD.
        let mut x = Nat::zero();
        x.make(64);
        for w in x.words_mut() {
            *w = Word::MAX;
        }
        x.norm();
        let mut karatsuba_result = Nat::zero();
        karatsuba_result.mul(&x, &x);

        let mut basic_result = Nat::zero();
        basic_result.c_mul_basic(&x, &x, 0);

        assert_eq!(karatsuba_result, basic_result);
    }

    #[test]
    fn test_c_mul_basic_zcap_exceeds_natural_product_length() {
        // Regression: `c_mul_basic` used a whole-slice `copy_from_slice` into a buffer sized by
        // `c_make` to `max(m + n, zcap)`, which panicked on a length mismatch whenever the caller
        // asked for a `zcap` wider than the natural (unpadded) product length `m + n`.
        let mut x = Nat::zero();
        x.set_word(6);
        let mut y = Nat::zero();
        y.set_word(7);
        let mut z = Nat::zero();
        z.c_mul_basic(&x, &y, 5);
        let mut expected = Nat::zero();
        expected.c_set_word(42, 5);
        assert_eq!(z, expected);
    }

    #[test]
    fn test_c_mul_zcap_exceeds_natural_product_length() {
        let mut x = Nat::zero();
        x.set_word(6);
        let mut y = Nat::zero();
        y.set_word(7);
        let mut z = Nat::zero();
        z.c_mul(&x, &y, 5);
        let mut expected = Nat::zero();
        expected.c_set_word(42, 5);
        assert_eq!(z, expected);
    }

    #[test]
    fn test_c_mul_add_ww_zcap_exceeds_natural_length() {
        // Regression: same whole-slice `copy_from_slice` bug as `c_mul_basic`, here in the
        // `n + 1`-word scalar fused-multiply-add path.
        let mut x = Nat::zero();
        x.set_word(6);
        let mut z = Nat::zero();
        z.c_mul_add_ww(&x, 7, 1, 5);
        let mut expected = Nat::zero();
        expected.c_set_word(43, 5);
        assert_eq!(z, expected);
    }

    #[test]
    fn test_mul_range() {
        let mut z = Nat::zero();
        z.mul_range(1, 5);
        let mut expected = Nat::zero();
        expected.set_word(120); // 5!
        assert_eq!(z, expected);

        z.mul_range(5, 1);
        assert_eq!(z.words(), &[1]);

        z.mul_range(0, 10);
        assert!(z.is_zero());
    }
}
