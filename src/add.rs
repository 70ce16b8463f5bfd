//! Linear addition and subtraction (§4.3).
//!
//! Both operations accept operands of unequal length — the shorter one is treated as having
//! implicit high zero words, mirroring the teacher's `add_in_place`/`sub_in_place` split into a
//! same-length prefix plus a carry/borrow-propagating suffix.

use crate::error;
use crate::nat::Nat;
use crate::word_ops;

impl Nat {
    /// `z = x + y`, variable-time.
    pub fn add(&mut self, x: &Nat, y: &Nat) -> &mut Nat {
        self.c_add(x, y, 0)
    }

    /// `z = x + y`, sized to `zcap` words when `zcap > 0`.
    pub fn c_add(&mut self, x: &Nat, y: &Nat, zcap: usize) -> &mut Nat {
        let (x, y) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let m = x.len();
        let n = y.len();
        self.c_make(m + 1, zcap);
        let carry = {
            let (z_lo, z_rest) = self.words_mut().split_at_mut(n);
            let c = word_ops::add_vv(z_lo, &x.words()[..n], y.words());
            if m > n {
                word_ops::add_vw(&mut z_rest[..m - n], &x.words()[n..m], c)
            } else {
                c
            }
        };
        self.words_mut()[m] = carry;
        self.c_norm(zcap);
        self
    }

    /// `z = x - y`, variable-time. Fatal ("underflow") if `x < y`.
    pub fn sub(&mut self, x: &Nat, y: &Nat) -> &mut Nat {
        self.c_sub(x, y, 0)
    }

    /// `z = x - y`, sized to `zcap` words when `zcap > 0`. Fatal ("underflow") if `x < y`.
    ///
    /// `y` may be denormalized with `len(y) > len(x)` as long as its excess high words are all
    /// zero — those words still have to be examined (via [`Nat::nonzero`] over the tail) to rule
    /// out a real underflow.
    pub fn c_sub(&mut self, x: &Nat, y: &Nat, zcap: usize) -> &mut Nat {
        let m = x.len();
        let n = y.len();
        self.c_make(m, zcap);
        let borrow = if m >= n {
            // `self` may be wider than `m` when `zcap > m`; slice both halves down to the
            // operands' natural widths the way `c_add` does, leaving any padding above `m`
            // untouched (`c_norm` below zero-checks/pads it).
            let (z_lo, z_rest) = self.words_mut()[..m].split_at_mut(n);
            let b = word_ops::sub_vv(z_lo, &x.words()[..n], y.words());
            if m > n {
                word_ops::sub_vw(z_rest, &x.words()[n..m], b)
            } else {
                b
            }
        } else {
            let b = word_ops::sub_vv(&mut self.words_mut()[..m], x.words(), &y.words()[..m]);
            let tail = y.words()[m..].iter().fold(0, |acc, &w| acc | w);
            b | (crate::nat::c_zero(tail) ^ 1)
        };
        if borrow != 0 {
            error::underflow();
        }
        self.c_norm(zcap);
        self
    }
}
