//! # fixed_bignum
//!
//! Fixed-capacity unsigned big integers with two primitives: an in-place
//! logical left shift and an out-of-place subtraction that refuses to wrap.
//!
//! A [`Number`] is a little-endian block of [`CAPACITY`] 64-bit limbs plus a
//! count of significant limbs. The storage never grows, never allocates, and
//! has the same layout as the C structure
//!
//! ```c
//! typedef struct {
//!     uint64_t words[CAPACITY];
//!     int32_t  len;
//! } bignum_t;
//! ```
//!
//! so numbers can cross an FFI boundary unchanged (see [`ffi`]).
//!
//! ```
//! use fixed_bignum::{shift_left, subtract, Number};
//!
//! # fn main() -> fixed_bignum::Result<()> {
//! let mut x = Number::from_u64(u64::MAX);
//! shift_left(&mut x, 4)?;
//! assert_eq!(x.limbs()?, &[0xFFFF_FFFF_FFFF_FFF0, 0xF]);
//!
//! let mut diff = Number::zero();
//! subtract(&mut diff, &x, &Number::from_u64(0xF0))?;
//! assert_eq!(diff.limbs()?, &[0xFFFF_FFFF_FFFF_FF00, 0xF]);
//! # Ok(())
//! # }
//! ```
//!
//! # Failure
//!
//! Every operation either succeeds and leaves a normalized result, or
//! returns an [`Error`] without having written anything. Subtracting a
//! larger value from a smaller one is an error rather than a wrap-around:
//!
//! ```
//! use fixed_bignum::{subtract, ErrorCode, Number};
//!
//! let mut diff = Number::from_u64(7);
//! let err = subtract(&mut diff, &Number::from_u64(1), &Number::from_u64(2)).unwrap_err();
//! assert_eq!(*err.code(), ErrorCode::NegativeResult);
//! assert_eq!(diff, Number::from_u64(7));
//! ```
//!
//! # Configuration
//!
//! The limb count is fixed at build time. It defaults to 32 (2048 bits) and
//! can be changed by setting `FIXED_BIGNUM_CAPACITY` in the environment of
//! the build.

#![doc(html_root_url = "https://docs.rs/fixed_bignum/0.1.0")]
// Ignored clippy_pedantic lints
#![allow(
    // limb arithmetic is full of deliberate narrowing/widening
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    // the raw entry points document their contract on the module
    clippy::missing_safety_doc,
    clippy::missing_errors_doc,
)]
#![deny(missing_docs)]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

extern crate serde_core as serde;

mod capacity {
    include!(concat!(env!("OUT_DIR"), "/capacity.rs"));
}

pub mod compare;
pub mod error;
pub mod ffi;
mod guard;
pub mod number;
pub mod shift;
pub mod sub;

#[doc(inline)]
pub use crate::capacity::CAPACITY;
#[doc(inline)]
pub use crate::compare::compare;
#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Operand, Result};
#[doc(inline)]
pub use crate::number::{Limb, Number, BITS, LIMB_BITS};
#[doc(inline)]
pub use crate::shift::{shift_left, shift_left_checked};
#[doc(inline)]
pub use crate::sub::subtract;
