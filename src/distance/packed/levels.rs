//! The counting hierarchy.
//!
//! Level 1 classifies whole registers into per-block flags and sums three of
//! them into 2-bit blocks. Every higher level calls the one below a fixed
//! number of times, each time folding adjacent block pairs into blocks of
//! twice the width. All constants come from [`LEVELS`].

use super::Cursor;
use crate::simd::PackedLanes;

/// Mask of the low bit of every 2-bit block.
pub(crate) const LOW_BITS: u32 = 0x5555_5555;

/// One stage of the counting hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Level {
    /// Registers consumed from each input by one call.
    pub consumed:  usize,
    /// How many times the level below is called. For level 1 this is the
    /// number of registers classified.
    pub calls:     usize,
    /// Width in bits of the blocks received from below.
    pub block_in:  u32,
    /// Width in bits of the blocks returned.
    pub block_out: u32,
}

impl Level {
    /// The largest value a returned block can store.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        block_max(self.block_out)
    }

    /// The largest value a returned block can receive, assuming every block
    /// from below is full. Level 1 adds one flag per classified register.
    #[inline]
    #[must_use]
    pub const fn bound(&self) -> u64 {
        if self.block_in == self.block_out {
            self.calls as u64
        } else {
            self.calls as u64 * 2 * block_max(self.block_in)
        }
    }
}

/// The hierarchy, level 1 first. Level 1 sums flags into 2-bit blocks. Each
/// later level doubles the block width and calls the level below as many
/// times as the widened blocks can absorb two full narrower blocks per call.
pub const LEVELS: [Level; 4] = build_levels();

const fn build_levels() -> [Level; 4] {
    let first = Level {
        consumed:  block_max(2) as usize,
        calls:     block_max(2) as usize,
        block_in:  2,
        block_out: 2,
    };

    let mut levels = [first; 4];
    let mut i = 1;
    while i < levels.len() {
        let below = levels[i - 1];
        let block_in = below.block_out;
        let block_out = 2 * block_in;
        #[allow(clippy::cast_possible_truncation)]
        let calls = (block_max(block_out) / (2 * block_max(block_in))) as usize;

        levels[i] = Level {
            consumed: below.consumed * calls,
            calls,
            block_in,
            block_out,
        };
        i += 1;
    }
    levels
}

const _: () = {
    let mut i = 0;
    while i < LEVELS.len() {
        assert!(LEVELS[i].bound() <= LEVELS[i].capacity());
        i += 1;
    }
};

#[inline]
const fn block_max(width: u32) -> u64 {
    (1 << width) - 1
}

/// A mask selecting the even-numbered `width`-bit blocks of a 32-bit lane,
/// e.g. `0x3333_3333` for 2-bit blocks.
#[allow(clippy::cast_possible_truncation)]
#[inline]
#[must_use]
pub const fn even_blocks(width: u32) -> u32 {
    ((0xFFFF_FFFF / block_max(2 * width)) * block_max(width)) as u32
}

/// Adds every odd `width`-bit block onto the even block below it, producing
/// blocks of `2 * width` bits.
#[inline]
fn merge_pairs<L: PackedLanes>(x: L, width: u32) -> L {
    let mask = L::splat(even_blocks(width));
    x.and(mask).add_lanes(x.shr_within(width).and(mask))
}

/// Transition, transversion, and unknown counts held in packed blocks of a
/// common width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tally<L> {
    pub(crate) transitions:   L,
    pub(crate) transversions: L,
    pub(crate) unknown:       L,
}

impl<L: PackedLanes> Tally<L> {
    #[inline]
    pub(crate) fn zero() -> Self {
        Tally {
            transitions:   L::zero(),
            transversions: L::zero(),
            unknown:       L::zero(),
        }
    }

    #[inline]
    fn map(self, f: impl Fn(L) -> L) -> Self {
        Tally {
            transitions:   f(self.transitions),
            transversions: f(self.transversions),
            unknown:       f(self.unknown),
        }
    }

    /// Block-wise addition of two tallies of the same width.
    #[inline]
    #[must_use]
    pub(crate) fn add(self, other: Self) -> Self {
        Tally {
            transitions:   self.transitions.add_lanes(other.transitions),
            transversions: self.transversions.add_lanes(other.transversions),
            unknown:       self.unknown.add_lanes(other.unknown),
        }
    }

    /// Converts `width`-bit blocks into `2 * width`-bit blocks.
    #[inline]
    #[must_use]
    pub(crate) fn widen(self, width: u32) -> Self {
        self.map(|x| merge_pairs(x, width))
    }

    /// Accumulates a tally of `width`-bit blocks into `self`, which holds
    /// `2 * width`-bit blocks.
    #[inline]
    #[must_use]
    pub(crate) fn merge(self, lower: Self, width: u32) -> Self {
        self.add(lower.widen(width))
    }

    /// Sums the four 32-bit lanes of each count.
    #[inline]
    pub(crate) fn reduce(self) -> [u32; 3] {
        [
            horizontal_sum(self.transitions),
            horizontal_sum(self.transversions),
            horizontal_sum(self.unknown),
        ]
    }
}

#[inline]
fn horizontal_sum<L: PackedLanes>(x: L) -> u32 {
    let x = x.add_lanes(x.shr_lanes::<1>());
    let x = x.add_lanes(x.shr_lanes::<2>());
    x.lane(0)
}

/// Classifies the next register pair. Each 2-bit block of the result is `1`
/// where the corresponding flag applies and `0` otherwise.
#[inline]
pub(crate) fn classify<L: PackedLanes>(cursor: &mut Cursor<'_>) -> Tally<L> {
    let [left, right, left_unknown, right_unknown] = cursor.next_registers();

    let unknown = L::from_register(left_unknown).or(L::from_register(right_unknown));
    let diff = unknown.and_not(L::from_register(left).xor(L::from_register(right)));

    // Per block: 00 equal, 01 transition, 1x transversion
    let low = L::splat(LOW_BITS);
    let transversions = diff.shr_within(1).and(low);
    let transitions = transversions.and_not(diff.and(low));

    Tally {
        transitions,
        transversions,
        unknown: unknown.and(low),
    }
}

/// Level 1: 2-bit blocks.
#[inline]
pub(crate) fn level_one<L: PackedLanes>(cursor: &mut Cursor<'_>) -> Tally<L> {
    let mut tally = classify(cursor);
    for _ in 1..LEVELS[0].calls {
        tally = tally.add(classify(cursor));
    }
    tally
}

#[inline]
fn aggregate<'a, L, F>(cursor: &mut Cursor<'a>, level: &Level, mut lower: F) -> Tally<L>
where
    L: PackedLanes,
    F: FnMut(&mut Cursor<'a>) -> Tally<L>, {
    let mut tally = lower(cursor).widen(level.block_in);
    for _ in 1..level.calls {
        tally = tally.merge(lower(cursor), level.block_in);
    }
    tally
}

/// Level 2: 4-bit blocks.
#[inline]
pub(crate) fn level_two<L: PackedLanes>(cursor: &mut Cursor<'_>) -> Tally<L> {
    aggregate(cursor, &LEVELS[1], level_one)
}

/// Level 3: 8-bit blocks.
#[inline]
pub(crate) fn level_three<L: PackedLanes>(cursor: &mut Cursor<'_>) -> Tally<L> {
    aggregate(cursor, &LEVELS[2], level_two)
}

/// Level 4: 16-bit blocks.
pub(crate) fn level_four<L: PackedLanes>(cursor: &mut Cursor<'_>) -> Tally<L> {
    aggregate(cursor, &LEVELS[3], level_three)
}
