//! Uniform random sampling (§4.8), gated behind the `rand` feature.
//!
//! `random(rng, limit, n)` draws uniformly from `[0, limit)` by rejection sampling against the
//! `rand::Rng` trait rather than inventing a bespoke RNG trait.

use crate::arch::Word;
use crate::nat::Nat;
use crate::primitive::WORD_BITS;
use core::cmp::Ordering;
use rand::Rng;

impl Nat {
    /// `random(rng, limit, n)`: uniform in `[0, limit)`, variable-time.
    ///
    /// `n` is the number of significant bits of `limit`; only the low `n mod W` bits of the
    /// freshly-drawn top word are kept, so a tightly-fitting `limit` does not force an
    /// exponentially unlikely number of rejections.
    pub fn random<R: Rng + ?Sized>(&mut self, rng: &mut R, limit: &Nat, n: usize) -> &mut Nat {
        self.c_random(rng, limit, n, 0)
    }

    /// `c_random(rng, limit, n, zcap)`: sized to `zcap` words when `zcap > 0`.
    pub fn c_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        limit: &Nat,
        n: usize,
        zcap: usize,
    ) -> &mut Nat {
        debug_assert!(!limit.is_zero());
        let len = limit.len();
        let mask_bits = (n as u32) % WORD_BITS;
        let top_mask: Word = if mask_bits == 0 {
            Word::MAX
        } else {
            ((1 as Word) << mask_bits) - 1
        };

        let mut candidate = Nat::zero();
        loop {
            candidate.make(len);
            for w in candidate.words_mut().iter_mut() {
                *w = rng.gen();
            }
            if let Some(top) = candidate.words_mut().last_mut() {
                *top &= top_mask;
            }
            candidate.norm();
            if candidate.cmp_nat(limit) == Ordering::Less {
                break;
            }
        }
        self.c_set(&candidate, zcap)
    }
}
