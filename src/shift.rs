//! Word-count-plus-bit-count shifts (§4.3).
//!
//! A shift by `s` bits splits into a whole-word part (`s / W`, handled here by slicing) and a
//! sub-word part (`s % W`, delegated to [`word_ops::shl_vu`]/[`word_ops::shr_vu`]).

use crate::nat::Nat;
use crate::primitive::WORD_BITS;
use crate::word_ops;

impl Nat {
    /// `z = x << s`, variable-time.
    pub fn shl(&mut self, x: &Nat, s: usize) -> &mut Nat {
        self.c_shl(x, s, 0)
    }

    /// `z = x << s`, sized to `zcap` words when `zcap > 0`.
    pub fn c_shl(&mut self, x: &Nat, s: usize, zcap: usize) -> &mut Nat {
        let word_shift = s / (WORD_BITS as usize);
        let bit_shift = (s % (WORD_BITS as usize)) as u32;
        let n = x.len();
        if n == 0 {
            self.c_make(0, zcap);
            self.c_norm(zcap);
            return self;
        }
        // Result length is `n + ceil(s/W)` (§4.3): the extra carry word above `word_shift` is
        // only needed when there is a sub-word shift to carry bits out of — `shl_vu` with a
        // zero sub-word shift always returns a zero carry, so omitting it here when
        // `bit_shift == 0` keeps a tightly-sized `zcap` from spuriously failing the "too small"
        // check below for a word-aligned shift.
        let extra = if bit_shift == 0 { 0 } else { 1 };
        self.c_make(n + word_shift + extra, zcap);
        {
            let z = self.words_mut();
            for w in &mut z[..word_shift] {
                *w = 0;
            }
            let carry = word_ops::shl_vu(&mut z[word_shift..word_shift + n], x.words(), bit_shift);
            if extra == 1 {
                z[word_shift + n] = carry;
            } else {
                debug_assert_eq!(carry, 0);
            }
        }
        self.c_norm(zcap);
        self
    }

    /// `z = x >> s`, variable-time.
    pub fn shr(&mut self, x: &Nat, s: usize) -> &mut Nat {
        self.c_shr(x, s, 0)
    }

    /// `z = x >> s`, sized to `zcap` words when `zcap > 0`.
    pub fn c_shr(&mut self, x: &Nat, s: usize, zcap: usize) -> &mut Nat {
        let word_shift = s / (WORD_BITS as usize);
        let bit_shift = (s % (WORD_BITS as usize)) as u32;
        let n = x.len();
        if word_shift >= n {
            self.c_make(0, zcap);
            self.c_norm(zcap);
            return self;
        }
        let m = n - word_shift;
        self.c_make(m, zcap);
        {
            // `self` may be wider than `m` when `zcap > m`; write only into the natural-width
            // prefix and leave the rest to `c_make`'s zero padding, the same fix already applied
            // to `c_shl`.
            let z = &mut self.words_mut()[..m];
            word_ops::shr_vu(z, &x.words()[word_shift..], bit_shift);
        }
        self.c_norm(zcap);
        self
    }
}
