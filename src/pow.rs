//! Modular exponentiation (§4.6): dispatch between simple square-and-multiply, windowed
//! div-based reduction, and Montgomery exponentiation, chosen by the shape of the inputs alone
//! (never by their value, beyond the public length/parity checks below).

use crate::arch::Word;
use crate::montgomery;
use crate::nat::Nat;
use crate::primitive::WORD_BITS;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

const WINDOW: u32 = 4;
const TABLE_SIZE: usize = 1 << WINDOW;

fn le_one(n: &Nat) -> bool {
    n.len() == 0 || (n.len() == 1 && n.words()[0] <= 1)
}

impl Nat {
    /// `exp_nn(x, y, m)`: `x^y mod m`, or plain `x^y` when `m` is zero (no modulus).
    pub fn exp_nn(&mut self, x: &Nat, y: &Nat, m: &Nat) -> &mut Nat {
        self.c_exp_nn(x, y, m, 0)
    }

    /// `c_exp_nn(x, y, m, zcap)`: sized to `zcap` words when `zcap > 0`.
    ///
    /// Routing (§4.6): `m == 1` is always `0`; `y == 0` is always `1`; `y == 1` with a modulus is
    /// `x mod m`. A degenerate base, exponent, or absent modulus falls back to simple
    /// square-and-multiply. Otherwise an odd modulus takes the Montgomery path, an even one the
    /// windowed div-based path (Montgomery's inverse only exists mod an odd number).
    pub fn c_exp_nn(&mut self, x: &Nat, y: &Nat, m: &Nat, zcap: usize) -> &mut Nat {
        if m.len() == 1 && m.words()[0] == 1 {
            self.c_make(0, zcap);
            self.c_norm(zcap);
            return self;
        }
        if y.is_zero() {
            return self.c_set_word(1, zcap);
        }
        if !m.is_zero() && y.len() == 1 && y.words()[0] == 1 {
            let (_, r) = Nat::div(x, m);
            return self.c_set(&r, zcap);
        }
        if le_one(x) || le_one(y) || m.is_zero() {
            return self.c_exp_nn_simple(x, y, m, zcap);
        }
        if m.words()[0] & 1 == 1 {
            self.c_exp_nn_montgomery(x, y, m, zcap)
        } else {
            self.c_exp_nn_windowed(x, y, m, zcap)
        }
    }

    /// Square-and-multiply from the top bit down, reducing by division after every squaring and
    /// multiply whenever a modulus is present.
    fn c_exp_nn_simple(&mut self, x: &Nat, y: &Nat, m: &Nat, zcap: usize) -> &mut Nat {
        let mut z = Nat::zero();
        z.set_word(1);
        for i in (0..y.bit_len()).rev() {
            let mut sq = Nat::zero();
            sq.mul(&z, &z);
            z = reduce(sq, m);
            if y.bit(i) {
                let mut prod = Nat::zero();
                prod.mul(&z, x);
                z = reduce(prod, m);
            }
        }
        self.c_set(&z, zcap)
    }

    /// Windowed exponentiation with plain div-based reduction after every step (§4.6
    /// `exp_NN_windowed`), used for an even modulus (Montgomery's inverse requires `m` odd).
    fn c_exp_nn_windowed(&mut self, x: &Nat, y: &Nat, m: &Nat, zcap: usize) -> &mut Nat {
        let mut powers: Vec<Nat> = (0..TABLE_SIZE).map(|_| Nat::zero()).collect();
        powers[0].set_word(1);
        {
            let (_, r) = Nat::div(x, m);
            powers[1].set(&r);
        }
        for i in 1..(TABLE_SIZE / 2) {
            let mut sq = Nat::zero();
            sq.mul(&powers[i], &powers[i]);
            let squared = reduce(sq, m);

            let mut prod = Nat::zero();
            prod.mul(&squared, x);
            let multiplied = reduce(prod, m);

            powers[2 * i] = squared;
            powers[2 * i + 1] = multiplied;
        }

        let mut z = Nat::zero();
        z.set(&powers[0]);
        let word_bits = WORD_BITS as usize;
        let window = WINDOW as usize;
        for widx in (0..y.len()).rev() {
            let mut yi = y.words()[widx];
            let mut j = 0;
            while j < word_bits {
                if widx != y.len() - 1 || j != 0 {
                    for _ in 0..4 {
                        let mut sq = Nat::zero();
                        sq.mul(&z, &z);
                        z = reduce(sq, m);
                    }
                }
                let nibble = ((yi >> (word_bits - window)) as usize) & (TABLE_SIZE - 1);
                let mut prod = Nat::zero();
                prod.mul(&z, &powers[nibble]);
                z = reduce(prod, m);
                yi <<= window;
                j += window;
            }
        }
        self.c_set(&z, zcap)
    }

    /// Montgomery exponentiation (§4.6 `exp_NN_montgomery`), used for an odd modulus.
    fn c_exp_nn_montgomery(&mut self, x: &Nat, y: &Nat, m: &Nat, zcap: usize) -> &mut Nat {
        let n = m.len();
        let k = montgomery::inverse(m.words()[0]);
        let m_words = m.words().to_vec();
        let x_fixed = fixed_width(x, m, n);
        let rr = compute_rr(m, n);
        let mut one = vec![0 as Word; n];
        one[0] = 1;
        let ct = zcap > 0;

        let mut powers: Vec<Vec<Word>> = Vec::with_capacity(TABLE_SIZE);
        powers.push(montgomery::montgomery(&one, &rr, &m_words, k, n, ct));
        powers.push(montgomery::montgomery(&x_fixed, &rr, &m_words, k, n, ct));
        for i in 2..TABLE_SIZE {
            let next = montgomery::montgomery(&powers[i - 1], &powers[1], &m_words, k, n, ct);
            powers.push(next);
        }

        let mut z = powers[0].clone();
        let word_bits = WORD_BITS as usize;
        let window = WINDOW as usize;
        for widx in (0..y.len()).rev() {
            let mut yi = y.words()[widx];
            let mut j = 0;
            while j < word_bits {
                if widx != y.len() - 1 || j != 0 {
                    for _ in 0..4 {
                        z = montgomery::montgomery(&z, &z, &m_words, k, n, ct);
                    }
                }
                let nibble = ((yi >> (word_bits - window)) as usize) & (TABLE_SIZE - 1);
                z = montgomery::montgomery(&z, &powers[nibble], &m_words, k, n, ct);
                yi <<= window;
                j += window;
            }
        }

        let zz = montgomery::montgomery(&z, &one, &m_words, k, n, ct);
        let mut result = Nat::zero();
        result.make(n);
        result.words_mut().copy_from_slice(&zz);
        result.norm();

        // Almost Montgomery Multiplication only guarantees the result is below 2m; one last
        // reduction (golang.org/issue/13907's original motivation) brings it fully below m.
        if result.cmp_nat(m) != Ordering::Less {
            let mut reduced = Nat::zero();
            reduced.sub(&result, m);
            result = reduced;
            if result.cmp_nat(m) != Ordering::Less {
                let (_, r) = Nat::div(&result, m);
                result = r;
            }
        }
        self.c_set(&result, zcap)
    }
}

/// `x mod m` when `m` is non-zero, or `x` unchanged when there is no modulus.
fn reduce(x: Nat, m: &Nat) -> Nat {
    if m.is_zero() {
        x
    } else {
        let (_, r) = Nat::div(&x, m);
        r
    }
}

/// `x`'s words, reduced mod `m` first if it has more than `n` words, zero-padded/truncated to
/// exactly `n` words.
fn fixed_width(x: &Nat, m: &Nat, n: usize) -> Vec<Word> {
    let mut out = vec![0 as Word; n];
    if x.len() > n {
        let (_, r) = Nat::div(x, m);
        let copy_len = r.len().min(n);
        out[..copy_len].copy_from_slice(&r.words()[..copy_len]);
    } else {
        out[..x.len()].copy_from_slice(x.words());
    }
    out
}

/// `2^(2*n*W) mod m`, the Montgomery `RR` constant for an `n`-word modulus.
fn compute_rr(m: &Nat, n: usize) -> Vec<Word> {
    let mut one = Nat::zero();
    one.set_word(1);
    let mut shifted = Nat::zero();
    shifted.shl(&one, 2 * n * (WORD_BITS as usize));
    let (_, r) = Nat::div(&shifted, m);
    let mut out = vec![0 as Word; n];
    out[..r.len()].copy_from_slice(r.words());
    out
}
