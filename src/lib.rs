#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]
#![feature(test, portable_simd)]

/// Packed sequences, symbol encoding, and errors.
pub mod data;
/// Substitution counts between aligned sequences.
pub mod distance;

/// Generate random sequences.
#[cfg(feature = "rand")]
pub mod generate;
/// The 128-bit register abstraction used by the packed kernels.
pub mod simd;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::{err::OrFail, packed::PackedSequence};
    pub use crate::distance::{PackedDistance, SubstitutionCounts, count_substitutions, tabulate_substitutions};
    #[cfg(feature = "rand")]
    pub use crate::generate::rand_sequence;
}
