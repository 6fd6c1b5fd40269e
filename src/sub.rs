//! Out-of-place subtraction that fails instead of wrapping.

use crate::compare::compare_limbs;
use crate::error::{Error, Operand, Result};
use crate::guard;
use crate::number::{normalized_len, Limb, Number};
use crate::CAPACITY;
use core::cmp::Ordering;

/// Computes `result = a - b`.
///
/// The checks run in a fixed order and the first failure is reported:
///
/// 1. the lengths of `a` and then `b` must lie in `1..=CAPACITY`
///    ([`ErrorCode::LengthOutOfRange`](crate::ErrorCode::LengthOutOfRange));
/// 2. the storage of `result` must not overlap `a` or `b`
///    ([`ErrorCode::BufferOverlap`](crate::ErrorCode::BufferOverlap));
/// 3. `a` must be at least `b`
///    ([`ErrorCode::NegativeResult`](crate::ErrorCode::NegativeResult)).
///
/// `result` is only written once all of them pass: its whole storage block
/// is cleared, the difference is stored, and it is normalized. On error it
/// keeps its previous contents.
///
/// In safe code the borrow checker already rules out `result` aliasing an
/// operand; the check matters for the raw entry point in [`ffi`].
///
/// ```
/// use fixed_bignum::{subtract, Number};
///
/// # fn main() -> fixed_bignum::Result<()> {
/// let a = Number::from_limbs(&[100, 200])?;
/// let mut diff = Number::zero();
/// subtract(&mut diff, &a, &a)?;
/// assert!(diff.is_zero());
/// # Ok(())
/// # }
/// ```
///
/// [`ffi`]: crate::ffi
pub fn subtract(result: &mut Number, a: &Number, b: &Number) -> Result<()> {
    let result_ptr: *const Number = &*result;
    // SAFETY: all three come from live references.
    let (a_len, b_len) = unsafe { guard::check_operands(result_ptr, a, b)? };
    isub(result, a, a_len, b, b_len)
}

/// Raw-pointer form of [`subtract`], with null checks.
///
/// # Safety
///
/// Each non-null pointer must point to a properly aligned `Number` that is
/// readable (and writable, for `result`) for the duration of the call, and
/// that no other thread writes concurrently. The pointers may alias; aliasing
/// is reported as an error before any reference is formed.
pub(crate) unsafe fn subtract_raw(
    result: *mut Number,
    a: *const Number,
    b: *const Number,
) -> Result<()> {
    if result.is_null() {
        return Err(Error::null(Operand::Result));
    }
    if a.is_null() {
        return Err(Error::null(Operand::Minuend));
    }
    if b.is_null() {
        return Err(Error::null(Operand::Subtrahend));
    }
    let (a_len, b_len) = guard::check_operands(result, a, b)?;
    // `result` is now known to be disjoint from both operands. The operands
    // may still alias each other, which is fine for shared references.
    isub(&mut *result, &*a, a_len, &*b, b_len)
}

/// Subtract with lengths already validated and storage known to be
/// disjoint.
fn isub(result: &mut Number, a: &Number, a_len: usize, b: &Number, b_len: usize) -> Result<()> {
    let x = &a.words[..a_len];
    let y = &b.words[..b_len];
    if compare_limbs(x, y) == Ordering::Less {
        return Err(Error::negative());
    }

    result.words = [0; CAPACITY];

    // `a >= b`, so the borrow is resolved by the time `a` runs out, and any
    // limbs of `b` at or past `a_len` are zero.
    let mut borrow = false;
    for (i, (ri, &xi)) in result.words.iter_mut().zip(x).enumerate() {
        let yi = y.get(i).copied().unwrap_or(0);
        let (diff, underflow) = scalar::sub(xi, yi, borrow);
        *ri = diff;
        borrow = underflow;
    }
    debug_assert!(!borrow);

    result.len = normalized_len(&result.words, a_len) as i32;
    Ok(())
}

mod scalar {
    use super::Limb;

    /// Subtract `y` and an incoming borrow from `x`, returning the limb and
    /// whether the subtraction underflowed.
    ///
    /// Only one of the two steps can underflow: if `x - y` wraps, the
    /// difference is at least one, so taking the borrow off cannot wrap
    /// again.
    #[inline]
    pub fn sub(x: Limb, y: Limb, borrow: bool) -> (Limb, bool) {
        let (diff, first) = x.overflowing_sub(y);
        let (diff, second) = diff.overflowing_sub(Limb::from(borrow));
        (diff, first | second)
    }

}
