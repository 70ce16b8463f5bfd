//! Big-endian byte serialization (§4.8).
//!
//! `bytes`/`set_bytes` pack `S` (= [`WORD_BYTES`]) bytes per word. Converting a whole word to or
//! from its byte representation needs to know `S` at the type level (`u32`/`u64`), so both
//! directions route through a runtime match on `WORD_BYTES` with a fatal ("unknown word size")
//! catch-all — unreachable on the 32- and 64-bit targets `arch` actually selects between, but the
//! failure surface documents it rather than leaving an unchecked assumption.

use crate::arch::Word;
use crate::error;
use crate::nat::Nat;
use crate::primitive::WORD_BYTES;

fn word_to_be_bytes(w: Word, out: &mut [u8]) {
    match WORD_BYTES {
        4 => out.copy_from_slice(&(w as u32).to_be_bytes()),
        8 => out.copy_from_slice(&(w as u64).to_be_bytes()),
        _ => error::unknown_word_size(),
    }
}

fn word_from_be_bytes(chunk: &[u8]) -> Word {
    match WORD_BYTES {
        4 => u32::from_be_bytes(chunk.try_into().unwrap()) as Word,
        8 => u64::from_be_bytes(chunk.try_into().unwrap()) as Word,
        _ => error::unknown_word_size(),
    }
}

impl Nat {
    /// `bytes(buf) -> i`: write `self` into `buf` as big-endian bytes, right-justified, and
    /// return the offset of the first non-zero byte (or `buf.len()` for zero).
    ///
    /// `buf` must be at least `len(self) * S` bytes — a caller precondition, checked only in
    /// debug builds, not part of the documented failure surface.
    pub fn bytes(&self, buf: &mut [u8]) -> usize {
        debug_assert!(buf.len() >= self.len() * WORD_BYTES);
        for b in buf.iter_mut() {
            *b = 0;
        }
        let mut offset = buf.len();
        for &word in self.words() {
            offset -= WORD_BYTES;
            word_to_be_bytes(word, &mut buf[offset..offset + WORD_BYTES]);
        }
        while offset < buf.len() && buf[offset] == 0 {
            offset += 1;
        }
        offset
    }

    /// Construct from big-endian bytes, variable-time. Consumes `buf` from the end, packing `S`
    /// bytes per word.
    pub fn set_bytes(&mut self, buf: &[u8]) -> &mut Nat {
        self.c_set_bytes(buf, 0)
    }

    /// Construct from big-endian bytes, sized to `zcap` words when `zcap > 0`.
    pub fn c_set_bytes(&mut self, buf: &[u8], zcap: usize) -> &mut Nat {
        let n = (buf.len() + WORD_BYTES - 1) / WORD_BYTES;
        self.c_make(n, zcap);
        let mut pos = buf.len();
        let mut padded = [0u8; 8];
        for i in 0..n {
            let start = pos.saturating_sub(WORD_BYTES);
            let chunk_len = pos - start;
            for b in padded[..WORD_BYTES].iter_mut() {
                *b = 0;
            }
            padded[WORD_BYTES - chunk_len..WORD_BYTES].copy_from_slice(&buf[start..pos]);
            self.words_mut()[i] = word_from_be_bytes(&padded[..WORD_BYTES]);
            pos = start;
        }
        self.c_norm(zcap);
        self
    }
}
