//! Fatal-error reporting.
//!
//! Per the kernel's error model, every failure mode here is a caller-contract breach (division
//! by zero, subtraction underflow, a malformed constant-time size, ...), never a recoverable
//! per-operation error. There is deliberately no `Result`/`Error` type: callers can check every
//! one of these preconditions in O(1) or O(log n) before calling, so the library does not
//! attempt graceful degradation. Each function below reports one fixed message from the
//! documented failure surface and never returns.

#[cold]
pub(crate) fn division_by_zero() -> ! {
    panic!("division by zero")
}

#[cold]
pub(crate) fn underflow() -> ! {
    panic!("underflow")
}

#[cold]
pub(crate) fn ct_result_too_large() -> ! {
    panic!("constant-time result too large")
}

#[cold]
pub(crate) fn ct_result_too_small() -> ! {
    panic!("constant-time result too small")
}

#[cold]
pub(crate) fn mismatched_montgomery_lengths() -> ! {
    panic!("mismatched montgomery number lengths")
}

#[cold]
pub(crate) fn invalid_bit_value() -> ! {
    panic!("set bit is not 0 or 1")
}

#[cold]
pub(crate) fn unknown_word_size() -> ! {
    panic!("unknown word size")
}
