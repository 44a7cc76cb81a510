//! ## A fixed 128-bit register abstraction for packed counting.
//!
//! The packed distance kernels only need a handful of whole-register
//! operations: bitwise logic, a right shift inside each 32-bit lane, a right
//! shift of the whole register by entire lanes, lane-wise wrapping addition,
//! and lane extraction. [`PackedLanes`] captures exactly those. Two backends
//! are provided:
//!
//! * [`Simd<u32, 4>`] from portable SIMD, used by default, and
//! * [`ScalarLanes`], a plain array fallback useful for verification and for
//!   targets without vector units.
//!
//! A register is always four 32-bit lanes. Lane `0` holds the lowest 32 bits,
//! so shifting the whole register right by one lane moves lane `1` into lane
//! `0` and zero-fills lane `3`.

use std::simd::{SimdElement, Swizzle, prelude::*};

/// The number of 32-bit lanes in one packed register.
pub const LANES: usize = 4;

/// The in-memory form of one 128-bit packed register.
pub type Register = [u32; LANES];

pub trait SimdExt<T> {
    /// Like `rotate_elements_left`, but fills the vacated lanes with
    /// `padding`.
    fn shift_elements_left_z<const OFFSET: usize>(self, padding: T) -> Self;
}

impl<T, const N: usize> SimdExt<T> for Simd<T, N>
where
    T: SimdElement,
{
    fn shift_elements_left_z<const OFFSET: usize>(self, padding: T) -> Self {
        struct Shift<const OFFSET: usize>;

        impl<const OFFSET: usize, const N: usize> Swizzle<N> for Shift<OFFSET> {
            const INDEX: [usize; N] = const {
                let mut index = [N; N];
                let mut i = 0;
                while i + OFFSET < N {
                    index[i] = i + OFFSET;
                    i += 1;
                }
                index
            };
        }

        Shift::<OFFSET>::concat_swizzle(self, Simd::splat(padding))
    }
}

/// Whole-register operations needed by the packed distance kernels.
///
/// All arithmetic is per 32-bit lane and wraps; callers are responsible for
/// keeping packed blocks within their width.
pub trait PackedLanes: Copy {
    /// Every lane set to `value`.
    fn splat(value: u32) -> Self;

    /// Loads a register from memory.
    fn from_register(register: &Register) -> Self;

    /// Stores the register back into its array form.
    fn to_register(self) -> Register;

    fn and(self, other: Self) -> Self;
    fn or(self, other: Self) -> Self;
    fn xor(self, other: Self) -> Self;

    /// Computes `!self & other`, matching the operand order of the usual
    /// hardware `andnot` instruction.
    fn and_not(self, other: Self) -> Self;

    /// Shifts every 32-bit lane right by `bits`, shifting in zeros.
    fn shr_within(self, bits: u32) -> Self;

    /// Shifts the whole register right by `OFFSET` lanes, shifting in zeroed
    /// lanes at the top.
    fn shr_lanes<const OFFSET: usize>(self) -> Self;

    /// Lane-wise wrapping addition.
    fn add_lanes(self, other: Self) -> Self;

    /// Reads one lane.
    ///
    /// ## Panics
    ///
    /// `lane` must be less than [`LANES`].
    fn lane(self, lane: usize) -> u32;

    #[inline]
    #[must_use]
    fn zero() -> Self {
        Self::splat(0)
    }
}

impl PackedLanes for Simd<u32, LANES> {
    #[inline]
    fn splat(value: u32) -> Self {
        Simd::splat(value)
    }

    #[inline]
    fn from_register(register: &Register) -> Self {
        Simd::from_array(*register)
    }

    #[inline]
    fn to_register(self) -> Register {
        self.to_array()
    }

    #[inline]
    fn and(self, other: Self) -> Self {
        self & other
    }

    #[inline]
    fn or(self, other: Self) -> Self {
        self | other
    }

    #[inline]
    fn xor(self, other: Self) -> Self {
        self ^ other
    }

    #[inline]
    fn and_not(self, other: Self) -> Self {
        !self & other
    }

    #[inline]
    fn shr_within(self, bits: u32) -> Self {
        self >> Simd::splat(bits)
    }

    #[inline]
    fn shr_lanes<const OFFSET: usize>(self) -> Self {
        self.shift_elements_left_z::<OFFSET>(0)
    }

    #[inline]
    fn add_lanes(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn lane(self, lane: usize) -> u32 {
        self.as_array()[lane]
    }
}

/// A portable, array-backed [`PackedLanes`] implementation. It produces
/// bit-identical results to the SIMD backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ScalarLanes(pub Register);

impl ScalarLanes {
    #[inline]
    fn map(self, f: impl Fn(u32) -> u32) -> Self {
        ScalarLanes(self.0.map(f))
    }

    #[inline]
    fn zip(self, other: Self, f: impl Fn(u32, u32) -> u32) -> Self {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(other.0) {
            *a = f(*a, b);
        }
        ScalarLanes(out)
    }
}

impl PackedLanes for ScalarLanes {
    #[inline]
    fn splat(value: u32) -> Self {
        ScalarLanes([value; LANES])
    }

    #[inline]
    fn from_register(register: &Register) -> Self {
        ScalarLanes(*register)
    }

    #[inline]
    fn to_register(self) -> Register {
        self.0
    }

    #[inline]
    fn and(self, other: Self) -> Self {
        self.zip(other, |a, b| a & b)
    }

    #[inline]
    fn or(self, other: Self) -> Self {
        self.zip(other, |a, b| a | b)
    }

    #[inline]
    fn xor(self, other: Self) -> Self {
        self.zip(other, |a, b| a ^ b)
    }

    #[inline]
    fn and_not(self, other: Self) -> Self {
        self.zip(other, |a, b| !a & b)
    }

    #[inline]
    fn shr_within(self, bits: u32) -> Self {
        self.map(|a| a.checked_shr(bits).unwrap_or(0))
    }

    #[inline]
    fn shr_lanes<const OFFSET: usize>(self) -> Self {
        let mut out = [0; LANES];
        for (i, lane) in out.iter_mut().enumerate() {
            if let Some(&v) = self.0.get(i + OFFSET) {
                *lane = v;
            }
        }
        ScalarLanes(out)
    }

    #[inline]
    fn add_lanes(self, other: Self) -> Self {
        self.zip(other, u32::wrapping_add)
    }

    #[inline]
    fn lane(self, lane: usize) -> u32 {
        self.0[lane]
    }
}
