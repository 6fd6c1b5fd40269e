//! Three-way magnitude comparison.

use crate::error::{Operand, Result};
use crate::guard;
use crate::number::{normalized_len, Limb, Number};
use core::cmp::Ordering;

/// Compares the values of `x` and `y`.
///
/// Both lengths must lie in `1..=CAPACITY`; the error names `x` as the
/// minuend and `y` as the subtrahend, which is how [`subtract`] uses it.
/// Leading zero limbs inside a length are ignored, so inputs need not be
/// normalized.
///
/// ```
/// use core::cmp::Ordering;
/// use fixed_bignum::{compare, Number};
///
/// let x = Number::from_u128(1 << 64);
/// let y = Number::from_u64(u64::MAX);
/// assert_eq!(compare(&x, &y), Ok(Ordering::Greater));
/// ```
///
/// [`subtract`]: crate::subtract
pub fn compare(x: &Number, y: &Number) -> Result<Ordering> {
    let x_len = guard::check_len(x.len, Operand::Minuend)?;
    let y_len = guard::check_len(y.len, Operand::Subtrahend)?;
    Ok(compare_limbs(&x.words[..x_len], &y.words[..y_len]))
}

/// Compare `x` to `y`, in little-endian order.
#[inline]
pub(crate) fn compare_limbs(x: &[Limb], y: &[Limb]) -> Ordering {
    let x = &x[..normalized_len(x, x.len())];
    let y = &y[..normalized_len(y, y.len())];
    if x.len() > y.len() {
        return Ordering::Greater;
    } else if x.len() < y.len() {
        return Ordering::Less;
    }
    for (xi, yi) in x.iter().rev().zip(y.iter().rev()) {
        match xi.cmp(yi) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
