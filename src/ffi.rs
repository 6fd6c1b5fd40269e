//! C ABI entry points returning status codes.
//!
//! These mirror [`subtract`](crate::subtract) and
//! [`shift_left`](crate::shift_left) for callers that hold raw pointers,
//! typically C code sharing the `bignum_t` layout of [`Number`]. They add
//! the one check safe references make impossible, a null pointer, and
//! report the outcome as a small closed set of integer codes instead of an
//! [`Error`].
//!
//! # Safety
//!
//! Every non-null pointer must point to a properly aligned `Number` that
//! stays valid for the duration of the call and is not written by another
//! thread meanwhile. Overlapping `result` and operand storage is allowed to
//! be passed; it is detected and rejected before anything is written.

use crate::error::{Error, ErrorCode, Operand, Result};
use crate::number::Number;

/// Outcome of [`fixed_bignum_sub`].
///
/// Converting an [`Error`] that subtraction cannot produce panics.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(i32)]
pub enum SubStatus {
    /// The difference was stored in `result`.
    Success = 0,
    /// One of the pointers was null.
    NullPtr = -1,
    /// `a < b`.
    NegativeResult = -2,
    /// The length of `a` or `b` was outside `1..=CAPACITY`.
    CapacityExceeded = -3,
    /// `result` overlapped `a` or `b`.
    BufferOverlap = -4,
}

/// Outcome of [`fixed_bignum_shift_left`].
///
/// Converting an [`Error`] that a shift cannot produce panics.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(i32)]
pub enum ShiftStatus {
    /// The number was shifted.
    Success = 0,
    /// The pointer was null.
    NullArg = -1,
    /// The shift would push significant bits past the capacity.
    Overflow = -2,
    /// The length of the number was outside `1..=CAPACITY`.
    CapacityExceeded = -3,
}

impl From<&Error> for SubStatus {
    fn from(err: &Error) -> Self {
        match err.code() {
            ErrorCode::NullArgument => SubStatus::NullPtr,
            ErrorCode::LengthOutOfRange(_) => SubStatus::CapacityExceeded,
            ErrorCode::BufferOverlap => SubStatus::BufferOverlap,
            ErrorCode::NegativeResult => SubStatus::NegativeResult,
            ErrorCode::Overflow => unreachable!("subtraction reported a shift overflow"),
        }
    }
}

impl From<Result<()>> for SubStatus {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => SubStatus::Success,
            Err(err) => SubStatus::from(&err),
        }
    }
}

impl From<&Error> for ShiftStatus {
    fn from(err: &Error) -> Self {
        match err.code() {
            ErrorCode::NullArgument => ShiftStatus::NullArg,
            ErrorCode::LengthOutOfRange(_) => ShiftStatus::CapacityExceeded,
            ErrorCode::Overflow => ShiftStatus::Overflow,
            ErrorCode::BufferOverlap | ErrorCode::NegativeResult => {
                unreachable!("shift reported a subtraction error: {}", err)
            }
        }
    }
}

impl From<Result<()>> for ShiftStatus {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => ShiftStatus::Success,
            Err(err) => ShiftStatus::from(&err),
        }
    }
}

/// Computes `*result = *a - *b`.
///
/// Checks, in order: null pointers, operand lengths, overlap of `result`
/// with `a` then `b`, and `a >= b`. `result` is untouched unless the call
/// returns [`SubStatus::Success`].
///
/// The overlap check covers each whole `Number`, length field included, so a
/// `result` starting right after the limbs of `a` or `b` is rejected even
/// though a limb-block-only check would let it through.
#[no_mangle]
pub unsafe extern "C" fn fixed_bignum_sub(
    result: *mut Number,
    a: *const Number,
    b: *const Number,
) -> SubStatus {
    SubStatus::from(crate::sub::subtract_raw(result, a, b))
}

/// Shifts `*num` left by `amount` bits in place.
///
/// `*num` is untouched unless the call returns [`ShiftStatus::Success`].
#[no_mangle]
pub unsafe extern "C" fn fixed_bignum_shift_left(num: *mut Number, amount: usize) -> ShiftStatus {
    if num.is_null() {
        return ShiftStatus::from(&Error::null(Operand::Shifted));
    }
    ShiftStatus::from(crate::shift::shift_left(&mut *num, amount))
}
