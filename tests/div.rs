mod common;

use common::{from_be_limbs, nat, pow2};
use core::cmp::Ordering;
use natnum::Nat;

fn check_div_identity(u: &Nat, v: &Nat) {
    let (q, r) = Nat::div(u, v);
    assert!(r.cmp_nat(v) == Ordering::Less, "remainder not reduced");
    let mut product = Nat::zero();
    product.mul(&q, v);
    let mut reconstructed = Nat::zero();
    reconstructed.add(&product, &r);
    assert_eq!(&reconstructed, u, "u != q*v + r");
}

#[test]
fn test_div_concrete_scenario() {
    // Concrete scenario from the design spec (§8.3): 10^50 / 10^25 = 10^25, remainder 0.
    let ten = nat(10);
    let mut p25 = Nat::zero();
    p25.exp_nn(&ten, &nat(25), &Nat::zero());
    let mut p50 = Nat::zero();
    p50.exp_nn(&ten, &nat(50), &Nat::zero());

    let (q, r) = Nat::div(&p50, &p25);
    assert_eq!(q, p25);
    assert!(r.is_zero());
}

#[test]
fn test_div_dividend_smaller_than_divisor() {
    let u = nat(3);
    let v = pow2(70);
    let (q, r) = Nat::div(&u, &v);
    assert!(q.is_zero());
    assert_eq!(r, u);
}

#[test]
fn test_div_single_word_divisor_identity() {
    let u = from_be_limbs(&[1, 2, 3, 4]);
    let v = nat(0xabcd_ef01);
    check_div_identity(&u, &v);
}

#[test]
fn test_div_knuth_multiword_divisor_identity() {
    let u = from_be_limbs(&[1, 2, 3, 4, 5, 6]);
    let v = from_be_limbs(&[0x1_0000, 0x7fff_ffff_ffff_ffff]);
    check_div_identity(&u, &v);
}

#[test]
fn test_div_knuth_triggers_add_back_path() {
    // A divisor whose top two words are both large makes the initial qhat estimate
    // systematically too big, forcing Knuth D's add-back correction (§4.5c).
    let v = from_be_limbs(&[1, u64::MAX, u64::MAX]);
    let mut u = Nat::zero();
    u.mul(&v, &nat(u64::MAX));
    let mut bumped = Nat::zero();
    bumped.add(&u, &nat(12345));
    check_div_identity(&bumped, &v);
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_by_zero_is_fatal() {
    let _ = Nat::div(&nat(1), &Nat::zero());
}

#[test]
fn test_div_w_and_mod_w_consistent_with_div() {
    let u = from_be_limbs(&[1, 2, 3]);
    // `div_w`'s divisor is the raw word type (`u32` or `u64` depending on target width), so the
    // literal is left untyped and inferred rather than named explicitly.
    let d = 97;
    let mut q = Nat::zero();
    let r = q.div_w(&u, d);
    let (full_q, full_r) = Nat::div(&u, &nat(d as u64));
    assert_eq!(q, full_q);
    assert_eq!(nat(r as u64), full_r);
    assert_eq!(u.mod_w(d), r);
}

#[test]
fn test_shift_right_matches_power_of_two_division() {
    let x = from_be_limbs(&[1, 2, 3, 4]);
    for s in [0usize, 1, 17, 64, 65, 127, 300] {
        let mut shifted = Nat::zero();
        shifted.shr(&x, s);
        let (q, _) = Nat::div(&x, &pow2(s));
        assert_eq!(shifted, q, "shr({}) != div by 2^{}", s, s);
    }
}
