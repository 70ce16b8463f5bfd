//! Integer square root (§4.7), Brent & Zimmermann, *Modern Computer Arithmetic*, Algorithm 1.13
//! (`SqrtInt`).

use crate::nat::Nat;
use core::cmp::Ordering;

impl Nat {
    /// `sqrt(x)`: `floor(sqrt(x))`, variable-time.
    ///
    /// Starts from `z1 = 2^(bit_len(x)/2 + 1)`, an over-estimate, and iterates
    /// `z2 = floor((z1 + floor(x/z1)) / 2)` (Newton's method in integers) until the sequence
    /// stops decreasing. The sequence is monotonically non-increasing until it settles — or
    /// oscillates by exactly one when `x` is one below a perfect square, in which case `z1` is
    /// already the correct floor at the point the loop stops.
    pub fn sqrt(&mut self, x: &Nat) -> &mut Nat {
        if x.is_zero() {
            self.make(0);
            return self;
        }
        let mut one = Nat::zero();
        one.set_word(1);

        let mut z1 = Nat::zero();
        z1.shl(&one, x.bit_len() / 2 + 1);

        loop {
            let (q, _) = Nat::div(x, &z1);
            let mut sum = Nat::zero();
            sum.add(&z1, &q);
            let mut z2 = Nat::zero();
            z2.shr(&sum, 1);

            if z2.cmp_nat(&z1) != Ordering::Less {
                break;
            }
            z1 = z2;
        }
        self.set(&z1);
        self
    }
}
