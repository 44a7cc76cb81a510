//! ## Substitution counts between aligned nucleotide sequences.
//!
//! ## Assumptions:
//!
//! * __Alignment:__ both sequences must be aligned and of equal length.
//! * __Pairwise deletion:__ If a gap or ambiguous (non-ACGTU) base is present
//!   in any position of the aligned sequences, that position is counted as
//!   unknown and excluded from the substitution counts.
//!
//! [`count_substitutions`] works on [`PackedSequence`] and is the fast path.
//! [`tabulate_substitutions`] gives the same counts from plain bytes.
//!
//! ## Example:
//! ```
//! # use bitdist::{data::packed::PackedSequence, distance::*};
//! let seq1: &[u8] = b"ACGTAC-T";
//! let seq2: &[u8] = b"GCGAACNT";
//!
//! let packed = count_substitutions(&seq1.into(), &PackedSequence::from_bytes(seq2)).unwrap();
//! assert_eq!(packed, tabulate_substitutions(seq1, seq2).unwrap());
//! assert_eq!(packed.transitions, 1);
//! assert_eq!(packed.transversions, 1);
//! assert_eq!(packed.unknown, 1);
//! ```
//!
//! [`PackedSequence`]: crate::data::packed::PackedSequence

/// Bit-parallel counting over packed registers.
pub mod packed;
mod tabulation;

pub use packed::{PackedDistance, SubstitutionCounts, count_substitutions, count_substitutions_with};
pub use tabulation::*;
