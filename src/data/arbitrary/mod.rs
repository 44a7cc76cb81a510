//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for packed sequences, as well as wrapper types to provide
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! implementations with stronger assumptions.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::data::packed::PackedSequence;
use arbitrary::{Arbitrary, Result, Unstructured};

macro_rules! impl_deref {
    ($wrapper:ty, $inner:ty) => {
        impl ::std::ops::Deref for $wrapper {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

/// Bytes that exercise every class of the 2-bit encoding: the four bases in
/// both cases, `U`, and a selection of unknown symbols.
const ALIGNED_ALPHA: &[u8] = b"ACGTUacgtuN-.RY";

impl<'a> Arbitrary<'a> for PackedSequence {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(PackedSequence::from_bytes(&Vec::<u8>::arbitrary(u)?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        Vec::<u8>::size_hint(depth)
    }
}

/// A wrapper around [`PackedSequence`] such that the implementation of
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// only packs bytes from `ACGTUacgtuN-.RY`, so most positions are known bases.
#[derive(Debug, Clone)]
pub struct PackedAligned(pub PackedSequence);

impl_deref! {PackedAligned, PackedSequence}

impl<'a> Arbitrary<'a> for PackedAligned {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let bases = u
            .arbitrary_iter::<u8>()?
            .map(|b| b.map(|b| ALIGNED_ALPHA[b as usize % ALIGNED_ALPHA.len()]))
            .collect::<Result<Vec<_>>>()?;
        Ok(PackedAligned(PackedSequence::from_bytes(&bases)))
    }
}

/// Two aligned sequences of equal length, both as bytes and packed, for
/// comparing the packed kernels against byte-level counting.
#[derive(Debug, Clone)]
pub struct AlignedPair {
    pub first:         Vec<u8>,
    pub second:        Vec<u8>,
    pub first_packed:  PackedSequence,
    pub second_packed: PackedSequence,
}

impl<'a> Arbitrary<'a> for AlignedPair {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let (first, second): (Vec<u8>, Vec<u8>) = u
            .arbitrary_iter::<(u8, u8)>()?
            .map(|pair| {
                pair.map(|(a, b)| {
                    (
                        ALIGNED_ALPHA[a as usize % ALIGNED_ALPHA.len()],
                        ALIGNED_ALPHA[b as usize % ALIGNED_ALPHA.len()],
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .unzip();

        Ok(AlignedPair {
            first_packed: PackedSequence::from_bytes(&first),
            second_packed: PackedSequence::from_bytes(&second),
            first,
            second,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::distance::{count_substitutions, tabulate_substitutions};

    #[test]
    fn aligned_pair_counts_agree() {
        let raw: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let mut u = Unstructured::new(&raw);

        let pair = AlignedPair::arbitrary(&mut u).unwrap();
        assert_eq!(pair.first.len(), pair.second.len());
        assert_eq!(pair.first_packed.unpack().len(), pair.first.len());
        assert_eq!(
            count_substitutions(&pair.first_packed, &pair.second_packed),
            tabulate_substitutions(&pair.first, &pair.second)
        );
    }

    #[test]
    fn aligned_only_uses_alphabet() {
        let raw: Vec<u8> = (0..=255u8).rev().cycle().take(1024).collect();
        let packed = PackedAligned::arbitrary(&mut Unstructured::new(&raw)).unwrap();
        assert!(packed.unpack().iter().all(|b| b"ACGTN".contains(b)));
    }
}
