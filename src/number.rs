//! The fixed-capacity number representation.

use crate::error::{Error, ErrorCode, Result};
use crate::guard;
use crate::CAPACITY;
use core::fmt::{self, Debug, Display, LowerHex, UpperHex};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::{self, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base 10, except it stores a full 64-bit
/// machine word.
pub type Limb = u64;

/// Number of bits in a [`Limb`].
pub const LIMB_BITS: usize = 64;

/// Width in bits of the full storage block.
pub const BITS: usize = CAPACITY * LIMB_BITS;

/// An unsigned integer of at most [`CAPACITY`] limbs.
///
/// The value is `Σ words[i] · 2^(64·i)` over the first `len` limbs, least
/// significant first. Limbs at or beyond `len` are not part of the value and
/// may hold anything.
///
/// A number is *normalized* when `len == 1` or its top significant limb is
/// nonzero; zero is canonically `len == 1, words[0] == 0`. Every successful
/// operation in this crate leaves its output normalized.
///
/// The layout is `#[repr(C)]`: `CAPACITY` limbs immediately followed by a
/// 32-bit signed length, padded to 8-byte alignment.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct Number {
    pub(crate) words: [Limb; CAPACITY],
    pub(crate) len: i32,
}

impl Number {
    /// The canonical zero.
    pub const ZERO: Number = Number {
        words: [0; CAPACITY],
        len: 1,
    };

    /// The canonical zero.
    #[inline]
    pub const fn zero() -> Self {
        Number::ZERO
    }

    /// Creates a number from a single machine word.
    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        let mut n = Number::ZERO;
        n.words[0] = value;
        n
    }

    /// Creates a number from a 128-bit value.
    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        let mut n = Number::ZERO;
        n.words[0] = value as Limb;
        n.words[1] = (value >> 64) as Limb;
        if n.words[1] != 0 {
            n.len = 2;
        }
        n
    }

    /// Creates a normalized number from limbs in little-endian order.
    ///
    /// An empty slice is zero. Slices longer than [`CAPACITY`] are rejected
    /// even if their extra limbs are zero.
    pub fn from_limbs(limbs: &[Limb]) -> Result<Self> {
        if limbs.len() > CAPACITY {
            let len = i32::try_from(limbs.len()).unwrap_or(i32::MAX);
            return Err(Error::new(ErrorCode::LengthOutOfRange(len), None));
        }
        let mut n = Number::ZERO;
        if !limbs.is_empty() {
            n.words[..limbs.len()].copy_from_slice(limbs);
            n.len = limbs.len() as i32;
            n.normalize();
        }
        Ok(n)
    }

    /// Assembles a number from its raw storage without any validation.
    ///
    /// `len` may be anything, including values outside `1..=CAPACITY`; the
    /// operations in this crate reject such numbers instead of reading past
    /// the storage block.
    #[inline]
    pub const fn from_raw_parts(words: [Limb; CAPACITY], len: i32) -> Self {
        Number { words, len }
    }

    /// The declared count of significant limbs.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> i32 {
        self.len
    }

    /// Overwrites the declared count of significant limbs, unvalidated.
    #[inline]
    pub fn set_len(&mut self, len: i32) {
        self.len = len;
    }

    /// The whole storage block, including limbs beyond `len`.
    #[inline]
    pub const fn words(&self) -> &[Limb; CAPACITY] {
        &self.words
    }

    /// The whole storage block, including limbs beyond `len`.
    #[inline]
    pub fn words_mut(&mut self) -> &mut [Limb; CAPACITY] {
        &mut self.words
    }

    /// The significant limbs, least significant first.
    pub fn limbs(&self) -> Result<&[Limb]> {
        match guard::valid_len(self.len) {
            Some(len) => Ok(&self.words[..len]),
            None => Err(Error::new(ErrorCode::LengthOutOfRange(self.len), None)),
        }
    }

    /// Returns true for the canonical zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.len == 1 && self.words[0] == 0
    }

    /// Returns true if `len` is valid and the top significant limb is
    /// nonzero, or the number is the canonical zero.
    pub fn is_normalized(&self) -> bool {
        match guard::valid_len(self.len) {
            Some(1) => true,
            Some(len) => self.words[len - 1] != 0,
            None => false,
        }
    }

    /// Drops leading zero limbs from the significant prefix.
    ///
    /// Numbers with an out-of-range `len` are left as they are.
    pub fn normalize(&mut self) {
        if let Some(len) = guard::valid_len(self.len) {
            self.len = normalized_len(&self.words, len) as i32;
        }
    }

    /// Number of bits needed to represent the value; zero for zero.
    pub fn bit_length(&self) -> Result<usize> {
        let limbs = self.limbs()?;
        Ok(bit_length(limbs))
    }

    /// Shifts the value left by `amount` bits in place.
    ///
    /// See [`shift_left`](crate::shift_left).
    #[inline]
    pub fn shift_left(&mut self, amount: usize) -> Result<()> {
        crate::shift::shift_left(self, amount)
    }

    /// Shifts the value left by `amount` bits in place, refusing to drop
    /// any significant bit.
    ///
    /// See [`shift_left_checked`](crate::shift_left_checked).
    #[inline]
    pub fn shift_left_checked(&mut self, amount: usize) -> Result<()> {
        crate::shift::shift_left_checked(self, amount)
    }

    /// Computes `self - rhs` into a fresh number.
    ///
    /// See [`subtract`](crate::subtract).
    pub fn checked_sub(&self, rhs: &Number) -> Result<Number> {
        let mut diff = Number::ZERO;
        crate::sub::subtract(&mut diff, self, rhs)?;
        Ok(diff)
    }
}

/// Length of `words[..len]` once leading zero limbs are dropped, never less
/// than one.
#[inline]
pub(crate) fn normalized_len(words: &[Limb], len: usize) -> usize {
    words[..len]
        .iter()
        .rposition(|&w| w != 0)
        .map_or(1, |top| top + 1)
}

/// Calculate the bit-length of a little-endian limb slice.
#[inline]
pub(crate) fn bit_length(x: &[Limb]) -> usize {
    match x.iter().rposition(|&w| w != 0) {
        Some(top) => top * LIMB_BITS + (LIMB_BITS - x[top].leading_zeros() as usize),
        None => 0,
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::ZERO
    }
}

impl From<u64> for Number {
    #[inline]
    fn from(value: u64) -> Self {
        Number::from_u64(value)
    }
}

impl From<u128> for Number {
    #[inline]
    fn from(value: u128) -> Self {
        Number::from_u128(value)
    }
}

impl PartialEq for Number {
    /// Same `len` and same significant limbs. Limbs beyond `len` do not
    /// participate; numbers with an out-of-range `len` compare the whole
    /// storage block.
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        match guard::valid_len(self.len) {
            Some(len) => self.words[..len] == other.words[..len],
            None => self.words == other.words,
        }
    }
}

impl Eq for Number {}

impl Debug for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.limbs() {
            Ok(limbs) => formatter
                .debug_struct("Number")
                .field("len", &self.len)
                .field("words", &limbs)
                .finish(),
            Err(_) => formatter
                .debug_struct("Number")
                .field("len", &self.len)
                .finish_non_exhaustive(),
        }
    }
}

fn fmt_hex(n: &Number, f: &mut fmt::Formatter, upper: bool, prefix: bool) -> fmt::Result {
    let limbs = match n.limbs() {
        Ok(limbs) => limbs,
        Err(_) => return write!(f, "<invalid len {}>", n.len),
    };
    if prefix {
        f.write_str("0x")?;
    }
    let top = normalized_len(limbs, limbs.len()) - 1;
    if upper {
        write!(f, "{:X}", limbs[top])?;
        for limb in limbs[..top].iter().rev() {
            write!(f, "{:016X}", limb)?;
        }
    } else {
        write!(f, "{:x}", limbs[top])?;
        for limb in limbs[..top].iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
    }
    Ok(())
}

impl Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt_hex(self, formatter, false, true)
    }
}

impl LowerHex for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt_hex(self, formatter, false, formatter.alternate())
    }
}

impl UpperHex for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt_hex(self, formatter, true, formatter.alternate())
    }
}

impl Serialize for Number {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let limbs = match self.limbs() {
            Ok(limbs) => limbs,
            Err(err) => return Err(ser::Error::custom(err)),
        };
        let mut seq = serializer.serialize_seq(Some(limbs.len()))?;
        for limb in limbs {
            seq.serialize_element(limb)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Number {
    #[inline]
    fn deserialize<D>(deserializer: D) -> core::result::Result<Number, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumberVisitor;

        impl<'de> Visitor<'de> for NumberVisitor {
            type Value = Number;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence of 1 to {} limbs", CAPACITY)
            }

            fn visit_seq<V>(self, mut visitor: V) -> core::result::Result<Number, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let mut n = Number::ZERO;
                let mut len = 0;
                while len < CAPACITY {
                    match visitor.next_element::<Limb>()? {
                        Some(limb) => {
                            n.words[len] = limb;
                            len += 1;
                        }
                        None => break,
                    }
                }
                if len == 0 {
                    return Err(de::Error::invalid_length(0, &self));
                }
                if len == CAPACITY && visitor.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(CAPACITY + 1, &self));
                }
                n.len = len as i32;
                n.normalize();
                Ok(n)
            }
        }

        deserializer.deserialize_seq(NumberVisitor)
    }
}
