//! In-place logical left shift.
//!
//! A shift by `n` bits splits into a displacement of `n / 64` whole limbs
//! and a shift of `n % 64` bits carried across limb boundaries. Both happen
//! in the caller's storage; nothing is copied out.

use crate::error::{Error, Operand, Result};
use crate::guard;
use crate::number::{bit_length, normalized_len, Limb, Number, BITS, LIMB_BITS};
use crate::CAPACITY;

/// Shifts `num` left by `amount` bits in place and normalizes it.
///
/// Fails with [`ErrorCode::Overflow`](crate::ErrorCode::Overflow) when
///
/// - `amount >= BITS`, whatever the value, or
/// - `num` already occupies all [`CAPACITY`] limbs with the top bit of the
///   top limb set, and `amount > 0`.
///
/// Outside those two cases a shift that pushes bits past the capacity is
/// **not** an error: the length is clamped to `CAPACITY` and the limbs that
/// would land beyond it are dropped, leaving `(num << amount) mod 2^BITS`.
/// Use [`shift_left_checked`] to reject every lossy shift instead.
///
/// On error `num` is left untouched.
///
/// ```
/// use fixed_bignum::{shift_left, Number};
///
/// # fn main() -> fixed_bignum::Result<()> {
/// let mut x = Number::from_limbs(&[u64::MAX, u64::MAX])?;
/// shift_left(&mut x, 1)?;
/// assert_eq!(x.limbs()?, &[u64::MAX - 1, u64::MAX, 1]);
/// # Ok(())
/// # }
/// ```
pub fn shift_left(num: &mut Number, amount: usize) -> Result<()> {
    let len = guard::check_len(num.len, Operand::Shifted)?;
    if amount == 0 {
        return Ok(());
    }
    if amount >= BITS {
        return Err(Error::overflow());
    }
    if num.is_zero() {
        return Ok(());
    }
    if len == CAPACITY && num.words[CAPACITY - 1] >> (LIMB_BITS - 1) != 0 {
        return Err(Error::overflow());
    }
    ishl(num, len, amount);
    Ok(())
}

/// Shifts `num` left by `amount` bits in place, failing with
/// [`ErrorCode::Overflow`](crate::ErrorCode::Overflow) if any set bit would
/// move past [`BITS`].
///
/// Unlike [`shift_left`] this never truncates; on error `num` is left
/// untouched.
///
/// ```
/// use fixed_bignum::{shift_left_checked, ErrorCode, Number, BITS};
///
/// let mut x = Number::from_u64(0b11);
/// let err = shift_left_checked(&mut x, BITS - 1).unwrap_err();
/// assert_eq!(*err.code(), ErrorCode::Overflow);
/// assert_eq!(x, Number::from_u64(0b11));
/// ```
pub fn shift_left_checked(num: &mut Number, amount: usize) -> Result<()> {
    let len = guard::check_len(num.len, Operand::Shifted)?;
    if amount == 0 {
        return Ok(());
    }
    if amount >= BITS {
        return Err(Error::overflow());
    }
    let width = bit_length(&num.words[..len]);
    if width == 0 {
        return Ok(());
    }
    if width + amount > BITS {
        return Err(Error::overflow());
    }
    ishl(num, len, amount);
    Ok(())
}

/// Shift-left `num` by `amount` bits, with `0 < amount < BITS` and `len`
/// already validated.
fn ishl(num: &mut Number, len: usize, amount: usize) {
    // Need to move whole limbs up by `amount / LIMB_BITS`, and shift-left
    // with carry for `amount % LIMB_BITS`.
    let div = amount / LIMB_BITS;
    let rem = amount % LIMB_BITS;
    let wanted = len + div + usize::from(rem > 0);
    let new_len = wanted.min(CAPACITY);
    if wanted > CAPACITY {
        log::trace!(
            "shift by {} clamped from {} to {} limbs",
            amount,
            wanted,
            CAPACITY,
        );
    }

    ishl_limbs(&mut num.words, len, div);
    // The relocated limbs now sit at `div..div + len`, minus whatever was
    // pushed past the end of the storage.
    let top = (div + len).min(CAPACITY);
    ishl_bits(&mut num.words, div, top, rem);

    num.len = normalized_len(&num.words, new_len) as i32;
}

/// Move `words[..len]` up by `n` limbs, zero-filling the vacated bottom.
///
/// Limbs that would land at or beyond `CAPACITY` are dropped. Nothing at or
/// beyond `len + n` is written.
#[inline]
fn ishl_limbs(words: &mut [Limb; CAPACITY], len: usize, n: usize) {
    if n == 0 {
        return;
    }
    debug_assert!(n < CAPACITY);
    let kept = len.min(CAPACITY - n);
    words.copy_within(..kept, n);
    words[..n].fill(0);
}

/// Shift-left the limbs in `words[start..end]` by `n` bits, carrying the
/// bits shifted out of each limb into the next one.
///
/// The carry out of the last limb is stored at `end` if that index is inside
/// the storage, and dropped otherwise.
#[inline]
fn ishl_bits(words: &mut [Limb; CAPACITY], start: usize, end: usize, n: usize) {
    debug_assert!(n < LIMB_BITS);
    if n == 0 {
        return;
    }

    // Internally, for each limb, we shift left by n, and add the previous
    // right-shifted limb bits.
    // For example, we transform (for u8) shifted left 2, to:
    //      b10100100 b01000010
    //      b10 b10010001 b00001000
    let rshift = LIMB_BITS - n;
    let mut carry: Limb = 0;
    for xi in &mut words[start..end] {
        let tmp = *xi;
        *xi = (tmp << n) | carry;
        carry = tmp >> rshift;
    }

    // Always store the carry, even if it creates a non-normal result.
    if end < CAPACITY {
        words[end] = carry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(limbs: &[Limb]) -> [Limb; CAPACITY] {
        let mut words = [0; CAPACITY];
        words[..limbs.len()].copy_from_slice(limbs);
        words
    }

    #[test]
    fn ishl_limbs_test() {
        let mut words = block(&[1, 2, 3]);
        ishl_limbs(&mut words, 3, 2);
        assert_eq!(&words[..5], &[0, 0, 1, 2, 3]);

        // Nothing is written at or beyond len + n.
        let mut words = block(&[1, 2]);
        words[4] = 0xAA;
        ishl_limbs(&mut words, 2, 1);
        assert_eq!(&words[..5], &[0, 1, 2, 0, 0xAA]);

        // Limbs pushed past the storage are dropped.
        let mut words = block(&[1, 2, 3]);
        ishl_limbs(&mut words, 3, CAPACITY - 1);
        assert_eq!(words[CAPACITY - 1], 1);
        assert!(words[..CAPACITY - 1].iter().all(|&w| w == 0));
    }

    #[test]
    fn ishl_bits_test() {
        // Pattern generated via `''.join(["1" +"0"*i for i in range(20)])`
        let mut words = block(&[0xD2210408]);
        ishl_bits(&mut words, 0, 1, 5);
        assert_eq!(&words[..2], &[0x1A_4420_8100, 0]);

        let mut words = block(&[0x8000_0000_0000_0001, 0x8000_0000_0000_0000]);
        ishl_bits(&mut words, 0, 2, 1);
        assert_eq!(&words[..3], &[2, 1, 1]);

        // Only the requested window moves.
        let mut words = block(&[0xFF, 0x8000_0000_0000_0000]);
        ishl_bits(&mut words, 1, 2, 4);
        assert_eq!(&words[..3], &[0xFF, 0, 8]);
    }

    #[test]
    fn ishl_bits_carry_dropped_at_capacity() {
        let mut words = [0; CAPACITY];
        words[CAPACITY - 1] = 0xC000_0000_0000_0000;
        ishl_bits(&mut words, CAPACITY - 1, CAPACITY, 1);
        assert_eq!(words[CAPACITY - 1], 0x8000_0000_0000_0000);
    }
}
