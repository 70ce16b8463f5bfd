//! Shared helpers for building [`Nat`] values in integration tests without a parser: this crate
//! does not provide decimal/text parsing (§1 "out of scope"), so every large value here is built
//! from `set_uint64`/`shl`/`add`/`mul` instead of a macro or string literal.

#![allow(dead_code)]

use natnum::Nat;

pub fn nat(v: u64) -> Nat {
    let mut n = Nat::zero();
    n.set_uint64(v);
    n
}

/// `2^bits`, built by shifting `1` left rather than depending on any particular word width.
pub fn pow2(bits: usize) -> Nat {
    let mut one = Nat::zero();
    one.set_word(1);
    let mut z = Nat::zero();
    z.shl(&one, bits);
    z
}

/// Assemble a value from big-endian 64-bit limbs (`limbs[0]` most significant), independent of
/// the crate's internal word width.
pub fn from_be_limbs(limbs: &[u64]) -> Nat {
    let mut acc = Nat::zero();
    for &limb in limbs {
        let mut shifted = Nat::zero();
        shifted.shl(&acc, 64);
        let mut next = Nat::zero();
        next.add(&shifted, &nat(limb));
        acc = next;
    }
    acc
}

/// `base^exp` with no modulus, by repeated multiplication — an implementation independent of
/// `Nat::exp_nn`, used as a cross-check reference for small exponents.
pub fn ref_pow(base: &Nat, exp: u64) -> Nat {
    let mut result = nat(1);
    for _ in 0..exp {
        let mut next = Nat::zero();
        next.mul(&result, base);
        result = next;
    }
    result
}

/// `base^exp mod m`, by straightforward top-down square-and-multiply with div-based reduction —
/// independent of `Nat::exp_nn`'s routing between simple/windowed/Montgomery, used as a
/// cross-check reference for exponents too large for a linear [`ref_pow`]-style loop.
pub fn ref_pow_mod(base: &Nat, exp: u64, m: &Nat) -> Nat {
    let exponent = nat(exp);
    let mut result = nat(1);
    for i in (0..exponent.bit_len()).rev() {
        let mut squared = Nat::zero();
        squared.mul(&result, &result);
        let (_, r) = Nat::div(&squared, m);
        result = r;
        if exponent.bit(i) {
            let mut product = Nat::zero();
            product.mul(&result, base);
            let (_, r) = Nat::div(&product, m);
            result = r;
        }
    }
    result
}
