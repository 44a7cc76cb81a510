use std::fmt::{self, Display};

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// Errors from comparing two packed sequences.
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DistanceError {
    /// The sequences do not have the same number of symbols. Packed distances
    /// are only defined for aligned sequences of equal length.
    LengthMismatch { left: usize, right: usize },
}

impl Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DistanceError::LengthMismatch { left, right } => {
                write!(f, "Aligned sequences must have equal lengths, but found {left} and {right}")
            }
        }
    }
}

impl fmt::Debug for DistanceError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl std::error::Error for DistanceError {}

impl GetCode for DistanceError {}

/// Errors from assembling a [`PackedSequence`] out of raw registers.
///
/// [`PackedSequence`]: crate::data::packed::PackedSequence
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PackError {
    /// The number of sequence registers does not fit the declared length.
    RegisterCount { expected: usize, found: usize },
    /// The unknown mask and the sequence have a different number of registers.
    MaskCount { expected: usize, found: usize },
    /// An unknown mask block was neither `00` nor `11`.
    MalformedMask { register: usize },
    /// Bits past the declared length were set in the last register.
    DirtyTail,
}

impl Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PackError::RegisterCount { expected, found } => {
                write!(f, "Expected {expected} sequence registers but found {found}")
            }
            PackError::MaskCount { expected, found } => {
                write!(f, "Expected {expected} unknown mask registers but found {found}")
            }
            PackError::MalformedMask { register } => {
                write!(f, "The unknown mask in register {register} contains a partially set 2-bit block")
            }
            PackError::DirtyTail => write!(f, "Bits past the end of the sequence must be zero"),
        }
    }
}

impl fmt::Debug for PackError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl std::error::Error for PackError {}

impl GetCode for PackError {}
