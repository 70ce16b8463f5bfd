//! Bitwise operators and bit accessors (§4.3).

use crate::arch::Word;
use crate::error;
use crate::nat::Nat;
use crate::primitive::WORD_BITS;

impl Nat {
    /// `z = x & y`: per-word, length `min(len(x), len(y))`.
    pub fn and(&mut self, x: &Nat, y: &Nat) -> &mut Nat {
        self.c_and(x, y, 0)
    }

    /// `z = x & y`, sized to `zcap` words when `zcap > 0`. Operand lengths are public (§4.9), so
    /// branching on them here does not leak the operands' values.
    pub fn c_and(&mut self, x: &Nat, y: &Nat, zcap: usize) -> &mut Nat {
        let n = x.len().min(y.len());
        self.c_make(n, zcap);
        let z = &mut self.words_mut()[..n];
        for i in 0..n {
            z[i] = x.words()[i] & y.words()[i];
        }
        self.c_norm(zcap);
        self
    }

    /// `z = x & !y`: per-word, length `len(x)` (unmatched high words of `x` pass through).
    pub fn and_not(&mut self, x: &Nat, y: &Nat) -> &mut Nat {
        self.c_and_not(x, y, 0)
    }

    /// `z = x & !y`, sized to `zcap` words when `zcap > 0`.
    pub fn c_and_not(&mut self, x: &Nat, y: &Nat, zcap: usize) -> &mut Nat {
        let n = x.len();
        let k = n.min(y.len());
        self.c_make(n, zcap);
        let z = &mut self.words_mut()[..n];
        for i in 0..k {
            z[i] = x.words()[i] & !y.words()[i];
        }
        for i in k..n {
            z[i] = x.words()[i];
        }
        self.c_norm(zcap);
        self
    }

    /// `z = x | y`: per-word, length `max(len(x), len(y))`.
    pub fn or(&mut self, x: &Nat, y: &Nat) -> &mut Nat {
        self.c_or(x, y, 0)
    }

    /// `z = x | y`, sized to `zcap` words when `zcap > 0`.
    pub fn c_or(&mut self, x: &Nat, y: &Nat, zcap: usize) -> &mut Nat {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let n = long.len();
        let k = short.len();
        self.c_make(n, zcap);
        let z = &mut self.words_mut()[..n];
        for i in 0..k {
            z[i] = long.words()[i] | short.words()[i];
        }
        for i in k..n {
            z[i] = long.words()[i];
        }
        self.c_norm(zcap);
        self
    }

    /// `z = x ^ y`: per-word, length `max(len(x), len(y))`.
    pub fn xor(&mut self, x: &Nat, y: &Nat) -> &mut Nat {
        self.c_xor(x, y, 0)
    }

    /// `z = x ^ y`, sized to `zcap` words when `zcap > 0`.
    pub fn c_xor(&mut self, x: &Nat, y: &Nat, zcap: usize) -> &mut Nat {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let n = long.len();
        let k = short.len();
        self.c_make(n, zcap);
        let z = &mut self.words_mut()[..n];
        for i in 0..k {
            z[i] = long.words()[i] ^ short.words()[i];
        }
        for i in k..n {
            z[i] = long.words()[i];
        }
        self.c_norm(zcap);
        self
    }

    /// Returns `true` if bit `i` is set.
    pub fn bit(&self, i: usize) -> bool {
        let idx = i / (WORD_BITS as usize);
        let off = (i % (WORD_BITS as usize)) as u32;
        idx < self.len() && self.words()[idx] & (1 << off) != 0
    }

    /// Sets bit `i` to `v` (`v` must be `0` or `1`; anything else is fatal). Growing the value is
    /// permitted when `v == 1` and `i` is beyond the current length.
    pub fn set_bit(&mut self, x: &Nat, i: usize, v: Word) -> &mut Nat {
        self.c_set_bit(x, i, v, 0)
    }

    /// Sets bit `i` to `v`, sized to `zcap` words when `zcap > 0`.
    pub fn c_set_bit(&mut self, x: &Nat, i: usize, v: Word, zcap: usize) -> &mut Nat {
        if v != 0 && v != 1 {
            error::invalid_bit_value();
        }
        let idx = i / (WORD_BITS as usize);
        let off = (i % (WORD_BITS as usize)) as u32;
        let n = x.len().max(if v == 1 { idx + 1 } else { x.len() });
        self.c_make(n, zcap);
        let z = &mut self.words_mut()[..n];
        z[..x.len()].copy_from_slice(x.words());
        for w in &mut z[x.len()..n] {
            *w = 0;
        }
        if v == 1 {
            z[idx] |= 1 << off;
        } else if idx < n {
            z[idx] &= !(1 << off);
        }
        self.c_norm(zcap);
        self
    }

    /// Bit length: `0` for zero, otherwise the index of the top set bit plus one.
    pub fn bit_len(&self) -> usize {
        if self.len() == 0 {
            0
        } else {
            let top = self.words()[self.len() - 1];
            self.len() * (WORD_BITS as usize) - top.leading_zeros() as usize
        }
    }

    /// Number of trailing zero bits. `0` for zero (there is no bit to find).
    pub fn trailing_zero_bits(&self) -> usize {
        for (idx, &w) in self.words().iter().enumerate() {
            if w != 0 {
                return idx * (WORD_BITS as usize) + w.trailing_zeros() as usize;
            }
        }
        0
    }

    /// `sticky(i)`: `1` iff any of the low `i` bits is set, `0` otherwise. Used by rounding and
    /// division code that needs to know whether bits below a cut point were lost.
    pub fn sticky(&self, i: usize) -> Word {
        let idx = i / (WORD_BITS as usize);
        let off = (i % (WORD_BITS as usize)) as u32;
        let mut acc: Word = 0;
        for &w in self.words().iter().take(idx.min(self.len())) {
            acc |= w;
        }
        if off > 0 && idx < self.len() {
            acc |= self.words()[idx] & ((1 << off) - 1);
        }
        (acc != 0) as Word
    }
}
