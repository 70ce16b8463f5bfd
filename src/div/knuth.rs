//! Knuth Algorithm D (§4.5 `divLarge`): long division with a multi-word divisor, normalized
//! divisor, and two-word quotient-digit estimation (TAOCP vol. 2, §4.3.1).

use crate::arch::Word;
use crate::memory::{self, Memory, MemoryAllocation};
use crate::nat::Nat;
use crate::pool;
use crate::word_ops;

/// `greater_than(x1, x2, y1, y2)`: the two-word pair `(x1, x2)` is greater than `(y1, y2)`,
/// each read as a big-endian two-word value.
#[inline]
fn greater_than(x1: Word, x2: Word, y1: Word, y2: Word) -> bool {
    x1 > y1 || (x1 == y1 && x2 > y2)
}

/// `divLarge(u, v) -> (q, r)`. Requires `v.len() >= 2` and `u >= v` (checked by the caller,
/// `Nat::div`).
pub(crate) fn div_large(u_in: &Nat, v: &Nat) -> (Nat, Nat) {
    let n = v.len();
    let total = u_in.len();
    let m = total - n;

    let shift = word_ops::nlz(v.words()[n - 1]);

    // Normalize: left-shift both operands by `shift` bits so the divisor's top word has its
    // high bit set. `v1` is a pool-owned scratch copy — `v` is read-only and may be shared, so
    // it must never be mutated in place.
    let mut v1 = pool::get(n);
    {
        let carry = word_ops::shl_vu(v1.words_mut(), v.words(), shift);
        debug_assert_eq!(carry, 0, "shifting the divisor within its own length never overflows");
    }

    // `u` (one extra word of headroom for the normalization shift's carry-out) and `q` are
    // disjoint scratch regions of known size up front, so they share a single arena allocation
    // (§4.9) instead of two separate `Vec`s.
    let layout = memory::add_layout(memory::words_layout(total + 1), memory::words_layout(m + 1));
    let mut allocation = MemoryAllocation::new(layout);
    let mut arena = allocation.memory();
    let (u, mut rest) = arena.allocate_zeroed(total + 1);
    let (q, _) = rest.allocate_zeroed(m + 1);

    u[total] = word_ops::shl_vu(&mut u[..total], u_in.words(), shift);

    let mut qhatv = pool::get(n + 1);

    let v_top = v1.words()[n - 1];
    let v_top2 = v1.words()[n - 2];

    for j in (0..=m).rev() {
        // qhat estimate (§4.5a): `u[j+n] == v[n-1]` forces the single-word estimate to overflow
        // a word, so the quotient digit is pinned at all-ones without even computing `rhat` via
        // `div_ww`.
        let (mut qhat, mut rhat, mut rhat_overflowed) = if u[j + n] == v_top {
            let (rhat, overflow) = v_top.overflowing_add(u[j + n - 1]);
            (Word::MAX, rhat, overflow)
        } else {
            let (qhat, rhat) = word_ops::div_ww(u[j + n], u[j + n - 1], v_top);
            (qhat, rhat, false)
        };

        // Two-word refinement (§4.5b): stop as soon as `rhat` would overflow a word — at that
        // point it can never again be less than `qhat * v_top2`'s high word in the comparison
        // below, so the decrement must stop.
        while !rhat_overflowed {
            let (hi, lo) = word_ops::mul_ww(qhat, v_top2);
            if !greater_than(hi, lo, rhat, u[j + n - 2]) {
                break;
            }
            qhat -= 1;
            let (new_rhat, overflow) = rhat.overflowing_add(v_top);
            rhat = new_rhat;
            rhat_overflowed = overflow;
        }

        // Multiply-subtract (§4.5c): qhatv = v1 * qhat (length n+1), subtracted from
        // u[j..j+n+1).
        {
            let qv = qhatv.words_mut();
            let carry = word_ops::mul_add_vww(&mut qv[..n], v1.words(), qhat, 0);
            qv[n] = carry;
        }
        let borrow = word_ops::sub_from(&mut u[j..j + n + 1], qhatv.words());
        if borrow != 0 {
            // Add-back: qhat was one too large. The carry out of this addition exactly cancels
            // the borrow above, so `u[j+n]` is simply updated with it (no further adjustment).
            let carry = word_ops::add_into(&mut u[j..j + n], v1.words());
            u[j + n] = u[j + n].wrapping_add(carry);
            qhat -= 1;
        }
        q[j] = qhat;
    }

    pool::put(v1);
    pool::put(qhatv);

    // Denormalize: right-shift `u` by `shift` to recover the remainder.
    let mut r = Nat::zero();
    r.make(n);
    word_ops::shr_vu(r.words_mut(), &u[..n], shift);
    r.norm();

    let mut qn = Nat::zero();
    qn.make(m + 1);
    qn.words_mut().copy_from_slice(q);
    qn.norm();

    (qn, r)
}
