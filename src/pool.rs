//! Process-wide free-list of reusable [`Nat`] scratch buffers (§4.8, design note "Global pool").
//!
//! Knuth division's `v1` (normalized divisor copy) and `qhatv` (per-step product) are exactly
//! the kind of short-lived scratch this pool exists for: allocated once per `divLarge` call,
//! discarded immediately after, and otherwise indistinguishable in shape from any other `Nat`.
//! `get` never zeroes the words it hands back — callers always overwrite every word they read
//! (Knuth D and Karatsuba both do) before treating the buffer as a real value.

use crate::nat::Nat;

#[cfg(feature = "std")]
mod global {
    use super::Nat;
    use std::sync::Mutex;
    use std::vec::Vec;

    static POOL: Mutex<Vec<Nat>> = Mutex::new(Vec::new());

    pub(crate) fn get(n: usize) -> Nat {
        let mut nat = POOL
            .lock()
            .map(|mut pool| pool.pop())
            .unwrap_or(None)
            .unwrap_or_else(Nat::zero);
        nat.make(n);
        nat
    }

    pub(crate) fn put(nat: Nat) {
        if let Ok(mut pool) = POOL.lock() {
            pool.push(nat);
        }
    }
}

/// `no_std` builds have no portable global mutex in `core`/`alloc`, so the pool degrades to
/// "always allocate, never keep" rather than pulling in an extra spinlock dependency.
#[cfg(not(feature = "std"))]
mod global {
    use super::Nat;

    pub(crate) fn get(n: usize) -> Nat {
        let mut nat = Nat::zero();
        nat.make(n);
        nat
    }

    pub(crate) fn put(_nat: Nat) {}
}

/// Borrow a scratch `Nat` of at least `n` words from the pool (or a fresh allocation if the
/// pool is empty). Its words are unspecified garbage, not zeroed.
pub(crate) fn get(n: usize) -> Nat {
    global::get(n)
}

/// Return a scratch `Nat` to the pool for later reuse.
pub(crate) fn put(nat: Nat) {
    global::put(nat)
}
