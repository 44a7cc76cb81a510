use crate::{
    data::{err::DistanceError, packed::PackedSequence},
    simd::{LANES, PackedLanes, Register},
};
use std::{
    fmt::{self, Write},
    simd::Simd,
};

mod levels;

pub use levels::{LEVELS, Level, even_blocks};
use levels::{Tally, classify, level_four, level_one, level_three, level_two};

/// Counts of substitution types between two aligned sequences of equal
/// length.
///
/// Unknown positions (ambiguous or gap in either sequence) are excluded from
/// the transition and transversion counts, so
/// `unknown + transitions + transversions + matches == length` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SubstitutionCounts {
    /// The number of aligned positions compared.
    pub length:        usize,
    /// Positions unknown in either sequence.
    pub unknown:       usize,
    /// Purine to purine or pyrimidine to pyrimidine substitutions.
    pub transitions:   usize,
    /// Purine to pyrimidine substitutions, or the reverse.
    pub transversions: usize,
}

impl SubstitutionCounts {
    /// Positions where both sequences are known and agree.
    #[inline]
    #[must_use]
    pub fn matches(&self) -> usize {
        self.comparable() - self.mismatches()
    }

    /// Positions where both sequences are known.
    #[inline]
    #[must_use]
    pub fn comparable(&self) -> usize {
        self.length - self.unknown
    }

    /// Transitions plus transversions.
    #[inline]
    #[must_use]
    pub fn mismatches(&self) -> usize {
        self.transitions + self.transversions
    }
}

impl fmt::Display for SubstitutionCounts {
    /// Tab-separated length, unknown, transitions, and transversions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buff = itoa::Buffer::new();
        f.write_str(buff.format(self.length))?;
        for count in [self.unknown, self.transitions, self.transversions] {
            f.write_char('\t')?;
            f.write_str(buff.format(count))?;
        }
        Ok(())
    }
}

/// How a comparison of `num_registers` registers is split across the levels.
///
/// Level 4 is used as many times as possible, then level 3, level 2, and
/// level 1, with at most two registers left over. Each count except
/// `level_4` is smaller than the number of calls the next level makes.
///
/// ## Example
/// ```
/// # use bitdist::distance::packed::CallPlan;
/// let plan = CallPlan::new(6144 + 48 + 5);
///
/// assert_eq!(plan.level_4, 1);
/// assert_eq!(plan.level_3, 1);
/// assert_eq!(plan.level_2, 0);
/// assert_eq!(plan.level_1, 1);
/// assert_eq!(plan.remainder, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CallPlan {
    pub level_4:   usize,
    pub level_3:   usize,
    pub level_2:   usize,
    pub level_1:   usize,
    pub remainder: usize,
}

impl CallPlan {
    #[must_use]
    pub const fn new(num_registers: usize) -> Self {
        let [one, two, three, four] = LEVELS;

        let level_4 = num_registers / four.consumed;
        let rest = num_registers % four.consumed;
        let level_3 = rest / three.consumed;
        let rest = rest % three.consumed;
        let level_2 = rest / two.consumed;
        let rest = rest % two.consumed;

        CallPlan {
            level_4,
            level_3,
            level_2,
            level_1: rest / one.consumed,
            remainder: rest % one.consumed,
        }
    }

    /// The number of registers the plan consumes from each sequence.
    #[must_use]
    pub const fn registers(&self) -> usize {
        let [one, two, three, four] = LEVELS;
        self.level_4 * four.consumed
            + self.level_3 * three.consumed
            + self.level_2 * two.consumed
            + self.level_1 * one.consumed
            + self.remainder
    }
}

// Driver totals stay within their blocks after each widening and group of calls.
const _: () = {
    let mut bound = (LEVELS[0].consumed - 1) as u64;
    let mut i = 0;
    while i + 1 < LEVELS.len() {
        let calls = (LEVELS[i + 1].calls - 1) as u64;
        bound = 2 * bound + calls * 2 * LEVELS[i].capacity();
        assert!(bound < 1 << (2 * LEVELS[i].block_out));
        i += 1;
    }
};

/// Read position shared by every level of one comparison.
pub(crate) struct Cursor<'a> {
    left:          &'a [Register],
    right:         &'a [Register],
    left_unknown:  &'a [Register],
    right_unknown: &'a [Register],
    position:      usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    fn new(left: &'a PackedSequence, right: &'a PackedSequence) -> Self {
        Cursor {
            left:          left.registers(),
            right:         right.registers(),
            left_unknown:  left.unknown_mask(),
            right_unknown: right.unknown_mask(),
            position:      0,
        }
    }

    /// Yields the next sequence and mask registers of both sides and advances.
    #[inline]
    pub(crate) fn next_registers(&mut self) -> [&'a Register; 4] {
        let i = self.position;
        self.position += 1;
        [&self.left[i], &self.right[i], &self.left_unknown[i], &self.right_unknown[i]]
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.left.len() - self.position
    }
}

/// Counts transitions, transversions, and unknown positions between two
/// packed sequences of equal length, using portable SIMD.
///
/// ## Errors
///
/// [`DistanceError::LengthMismatch`] if the sequences differ in length.
///
/// ## Example
/// ```
/// # use bitdist::{data::packed::PackedSequence, distance::count_substitutions};
/// let s1 = PackedSequence::from_bytes(b"AACGNA");
/// let s2 = PackedSequence::from_bytes(b"AACGTC");
///
/// let counts = count_substitutions(&s1, &s2).unwrap();
/// assert_eq!(counts.unknown, 1);
/// assert_eq!(counts.transitions, 0);
/// assert_eq!(counts.transversions, 1);
/// assert_eq!(counts.matches(), 4);
/// ```
pub fn count_substitutions(left: &PackedSequence, right: &PackedSequence) -> Result<SubstitutionCounts, DistanceError> {
    check_lengths(left, right)?;
    Ok(count_substitutions_simd(left, right))
}

#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
fn count_substitutions_simd(left: &PackedSequence, right: &PackedSequence) -> SubstitutionCounts {
    count_packed::<Simd<u32, LANES>>(left, right)
}

/// Same as [`count_substitutions`], with a caller-chosen register backend
/// such as [`ScalarLanes`](crate::simd::ScalarLanes).
///
/// ## Errors
///
/// [`DistanceError::LengthMismatch`] if the sequences differ in length.
pub fn count_substitutions_with<L: PackedLanes>(
    left: &PackedSequence, right: &PackedSequence,
) -> Result<SubstitutionCounts, DistanceError> {
    check_lengths(left, right)?;
    Ok(count_packed::<L>(left, right))
}

#[inline]
fn check_lengths(left: &PackedSequence, right: &PackedSequence) -> Result<(), DistanceError> {
    if left.len() == right.len() {
        Ok(())
    } else {
        Err(DistanceError::LengthMismatch {
            left:  left.len(),
            right: right.len(),
        })
    }
}

#[inline]
fn count_packed<L: PackedLanes>(left: &PackedSequence, right: &PackedSequence) -> SubstitutionCounts {
    let plan = CallPlan::new(left.num_registers());
    log::trace!("Comparing {} registers with {plan:?}", left.num_registers());

    let [one, two, three, four] = LEVELS;
    let mut cursor = Cursor::new(left, right);
    let mut totals = Tally::<L>::zero();

    for _ in 0..plan.remainder {
        totals = totals.add(classify(&mut cursor));
    }

    totals = totals.widen(one.block_out);
    for _ in 0..plan.level_1 {
        totals = totals.merge(level_one(&mut cursor), one.block_out);
    }

    totals = totals.widen(two.block_out);
    for _ in 0..plan.level_2 {
        totals = totals.merge(level_two(&mut cursor), two.block_out);
    }

    totals = totals.widen(three.block_out);
    for _ in 0..plan.level_3 {
        totals = totals.merge(level_three(&mut cursor), three.block_out);
    }

    totals = totals.widen(four.block_out);
    for _ in 0..plan.level_4 {
        totals = totals.merge(level_four(&mut cursor), four.block_out);
    }

    debug_assert_eq!(cursor.remaining(), 0);

    let [transitions, transversions, unknown] = totals.reduce();
    SubstitutionCounts {
        length:        left.len(),
        unknown:       unknown as usize,
        transitions:   transitions as usize,
        transversions: transversions as usize,
    }
}

/// Substitution counting for packed sequences.
pub trait PackedDistance {
    /// Counts substitutions between [`self`] and another sequence. See
    /// [`count_substitutions`] for more details.
    ///
    /// ## Errors
    ///
    /// [`DistanceError::LengthMismatch`] if the sequences differ in length.
    ///
    /// ## Example
    /// ```
    /// # use bitdist::{data::packed::PackedSequence, distance::PackedDistance};
    /// let s1: PackedSequence = b"ACGTACGT".into();
    /// let s2: PackedSequence = b"GCGTACCN".into();
    ///
    /// let counts = s1.substitutions(&s2).unwrap();
    /// assert_eq!(counts.transitions, 1);
    /// assert_eq!(counts.transversions, 1);
    /// assert_eq!(counts.unknown, 1);
    /// ```
    fn substitutions(&self, other: &PackedSequence) -> Result<SubstitutionCounts, DistanceError>;
}

impl PackedDistance for PackedSequence {
    #[inline]
    fn substitutions(&self, other: &PackedSequence) -> Result<SubstitutionCounts, DistanceError> {
        count_substitutions(self, other)
    }
}


#[cfg(all(test, feature = "rand"))]
mod bench;
