//! Preconditions checked before any output is written.
//!
//! Nothing in here mutates. Lengths are validated before any limb is read,
//! and storage overlap is decided on addresses alone so that it can run on
//! raw pointers before references are formed.

use crate::error::{Error, Operand, Result};
use crate::number::Number;
use crate::CAPACITY;
use core::mem;
use core::ptr;

/// Size in bytes of a whole number: the limb block of `CAPACITY` limbs, the
/// length field and padding. Overlap is decided on this span.
pub(crate) const BLOCK_BYTES: usize = mem::size_of::<Number>();

/// `len` as an index bound if it lies in `1..=CAPACITY`.
#[inline]
pub(crate) fn valid_len(len: i32) -> Option<usize> {
    match usize::try_from(len) {
        Ok(n) if (1..=CAPACITY).contains(&n) => Some(n),
        _ => None,
    }
}

/// Validates a declared significant length.
#[inline]
pub(crate) fn check_len(len: i32, operand: Operand) -> Result<usize> {
    match valid_len(len) {
        Some(n) => Ok(n),
        None => Err(Error::length(len, operand)),
    }
}

/// Whether `[p1, p1 + n)` and `[p2, p2 + n)` intersect.
#[inline]
pub(crate) fn ranges_overlap(p1: usize, p2: usize, n: usize) -> bool {
    p1 < p2.saturating_add(n) && p2 < p1.saturating_add(n)
}

/// Whether the storage of two numbers intersects, whatever their significant
/// lengths.
///
/// A block placed right after another one's limbs shares its length field,
/// so the span compared includes the length and padding.
#[inline]
pub(crate) fn storage_overlaps(x: *const Number, y: *const Number) -> bool {
    ranges_overlap(x as usize, y as usize, BLOCK_BYTES)
}

/// Runs the length and aliasing checks of a subtraction in order: minuend
/// length, subtrahend length, result against minuend, result against
/// subtrahend. Returns the validated lengths of `a` and `b`.
///
/// # Safety
///
/// `a` and `b` must be non-null and point to readable `Number`s. They may
/// alias each other and `result`; no reference is formed here. `result` is
/// only compared by address.
pub(crate) unsafe fn check_operands(
    result: *const Number,
    a: *const Number,
    b: *const Number,
) -> Result<(usize, usize)> {
    let a_len = check_len(read_len(a), Operand::Minuend)?;
    let b_len = check_len(read_len(b), Operand::Subtrahend)?;
    if storage_overlaps(result, a) {
        return Err(Error::overlap(Operand::Minuend));
    }
    if storage_overlaps(result, b) {
        return Err(Error::overlap(Operand::Subtrahend));
    }
    Ok((a_len, b_len))
}

/// Reads the length field through a raw pointer.
///
/// # Safety
///
/// `num` must be non-null and point to a readable `Number`.
#[inline]
pub(crate) unsafe fn read_len(num: *const Number) -> i32 {
    ptr::addr_of!((*num).len).read()
}
