//! When a shift or subtraction cannot be carried out.

use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur when shifting or
/// subtracting numbers.
///
/// Errors are only ever returned before the output has been touched, so a
/// caller that receives one can keep using its storage as it was.
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    operand: Option<Operand>,
}

/// Alias for a `Result` with the error type `fixed_bignum::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// The argument responsible for the error, when one can be singled out.
    ///
    /// A negative subtraction result is a property of both operands together
    /// and reports `None`.
    pub fn operand(&self) -> Option<Operand> {
        self.operand
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Usage` - the call itself was malformed: a missing
    ///   argument, a length outside `1..=CAPACITY`, or aliased storage
    /// - `Category::Range` - the arguments were fine but the exact result
    ///   does not fit an unsigned fixed-capacity number
    pub fn classify(&self) -> Category {
        match self.code {
            ErrorCode::NullArgument | ErrorCode::LengthOutOfRange(_) | ErrorCode::BufferOverlap => {
                Category::Usage
            }
            ErrorCode::NegativeResult | ErrorCode::Overflow => Category::Range,
        }
    }

    /// Returns true if this error was caused by a malformed call.
    pub fn is_usage(&self) -> bool {
        self.classify() == Category::Usage
    }

    /// Returns true if this error was caused by a result that is not
    /// representable.
    ///
    /// Both operands of a subtraction failing this way may be perfectly
    /// valid numbers; retrying with the operands swapped succeeds.
    pub fn is_range(&self) -> bool {
        self.classify() == Category::Range
    }
}

/// Categorizes the cause of a `fixed_bignum::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// A required argument was missing, a length was out of range, or the
    /// output storage overlapped an input.
    Usage,

    /// The mathematical result is negative or wider than the capacity.
    Range,
}

/// The argument an error is attributed to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Operand {
    /// Output of a subtraction.
    Result,

    /// Left-hand side of a subtraction.
    Minuend,

    /// Right-hand side of a subtraction.
    Subtrahend,

    /// The number being shifted in place.
    Shifted,
}

/// This type describes all possible errors that can occur when shifting or
/// subtracting numbers.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// A required pointer was null.
    NullArgument,

    /// Significant length outside `1..=CAPACITY`. Holds the offending length.
    LengthOutOfRange(i32),

    /// The output storage block overlaps an input storage block.
    BufferOverlap,

    /// The subtrahend is larger than the minuend.
    NegativeResult,

    /// The shifted value does not fit in `CAPACITY` limbs.
    Overflow,
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode, operand: Option<Operand>) -> Self {
        let err = Error { code, operand };
        log::trace!("rejected: {}", err);
        err
    }

    #[cold]
    pub(crate) fn null(operand: Operand) -> Self {
        Error::new(ErrorCode::NullArgument, Some(operand))
    }

    #[cold]
    pub(crate) fn length(len: i32, operand: Operand) -> Self {
        Error::new(ErrorCode::LengthOutOfRange(len), Some(operand))
    }

    #[cold]
    pub(crate) fn overlap(operand: Operand) -> Self {
        Error::new(ErrorCode::BufferOverlap, Some(operand))
    }

    #[cold]
    pub(crate) fn negative() -> Self {
        Error::new(ErrorCode::NegativeResult, None)
    }

    #[cold]
    pub(crate) fn overflow() -> Self {
        Error::new(ErrorCode::Overflow, Some(Operand::Shifted))
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::NullArgument => f.write_str("null argument"),
            ErrorCode::LengthOutOfRange(len) => write!(
                f,
                "length {} outside of 1..={}",
                len,
                crate::CAPACITY
            ),
            ErrorCode::BufferOverlap => f.write_str("output storage overlaps an input"),
            ErrorCode::NegativeResult => f.write_str("subtraction result would be negative"),
            ErrorCode::Overflow => f.write_str("shift overflows capacity"),
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Operand::Result => "result",
            Operand::Minuend => "minuend",
            Operand::Subtrahend => "subtrahend",
            Operand::Shifted => "shifted number",
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.operand {
            Some(operand) if self.code != ErrorCode::Overflow => {
                write!(f, "{} (in {})", self.code, operand)
            }
            _ => Display::fmt(&self.code, f),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.operand {
            Some(operand) => write!(f, "Error({:?}, operand: {:?})", self.code, operand),
            None => write!(f, "Error({:?})", self.code),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
