//! ## Data types and the 2-bit packing layer.
//!
//! Sequences are compared in a packed form: every base takes two bits of a
//! 128-bit register, and a parallel unknown mask marks gaps and ambiguous
//! calls. [`PackedSequence`] builds both from ordinary bytes, and the byte to
//! code assignment is published as [`DNA_TWO_BIT_CODES`] so other packing
//! layers can reproduce it exactly.
//!
//! For example:
//! ```
//! # use bitdist::data::packed::PackedSequence;
//! let s = PackedSequence::from_bytes(b"GATTACA-");
//!
//! assert_eq!(s.get(0), Some(b'G'));
//! assert_eq!(s.get(7), Some(b'N'));
//! assert_eq!(s.unknown_count(), 1);
//! ```
//!
//! ## Errors
//!
//! As a library, *bitdist* avoids making assumptions on the style of error
//! handling chosen by users, in particular by not adopting any error handling
//! crate as a dependency. Enum-style error types such as [`DistanceError`] and
//! [`PackError`] can be matched on or displayed, and [`unwrap_or_fail`] and
//! [`unwrap_or_die`] exit with the code given by [`GetCode`].
//!
//! [`PackedSequence`]: types::packed::PackedSequence
//! [`DistanceError`]: err::DistanceError
//! [`PackError`]: err::PackError
//! [`GetCode`]: err::GetCode
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail
//! [`unwrap_or_die`]: err::OrFail::unwrap_or_die

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// A module for the packed sequence type.
pub mod types;

/// A private module for helper alphabets and maps.
pub(crate) mod constants;

pub use constants::mappings::{DNA_TWO_BIT_CODES, UNKNOWN_CODE};
pub use types::packed;

pub(crate) use constants::{alphas, mappings};
