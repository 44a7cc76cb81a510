use crate::{
    data::{
        err::PackError,
        mappings::{DNA_TWO_BIT_CODES, UNKNOWN_CODE, decode_two_bit},
    },
    simd::{LANES, Register},
};

mod std_traits;
#[cfg(test)]
mod test;

/// The number of 2-bit symbols held by one 32-bit lane.
pub const SYMBOLS_PER_LANE: usize = 16;

/// The number of 2-bit symbols held by one 128-bit register.
pub const SYMBOLS_PER_REGISTER: usize = SYMBOLS_PER_LANE * LANES;

/// Mask of the low bit of every 2-bit block.
const LOW_BITS: u32 = 0x5555_5555;

/// A nucleotide sequence packed two bits per base into 128-bit registers,
/// together with a parallel mask flagging unknown positions.
///
/// Base `i` is stored in register `i / 64`, lane `(i % 64) / 16`, at bits
/// `2 * (i % 16)` and `2 * (i % 16) + 1`, using the codes of
/// [`DNA_TWO_BIT_CODES`]. Anything other than `ACGTU` (in either case) is
/// stored as code `00` and marked with `11` in the unknown mask, so gaps and
/// ambiguity codes are excluded from substitution counts and tallied
/// separately. Bits past the end of the sequence are zero in both arrays.
///
/// A [`PackedSequence`] is immutable once built.
///
/// # Example
/// ```
/// # use bitdist::data::packed::PackedSequence;
/// let s = PackedSequence::from_bytes(b"ACgt-N");
///
/// assert_eq!(s.len(), 6);
/// assert_eq!(s.num_registers(), 1);
/// assert_eq!(s.unknown_count(), 2);
/// assert_eq!(s.unpack(), b"ACGTNN");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PackedSequence {
    registers: Vec<Register>,
    unknown:   Vec<Register>,
    len:       usize,
}

impl PackedSequence {
    /// Create a new, empty [`PackedSequence`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        PackedSequence::default()
    }

    /// Packs a byte sequence. Never fails: any byte without a 2-bit code is
    /// recorded as unknown.
    #[must_use]
    pub fn from_bytes(sequence: &[u8]) -> Self {
        let num_registers = registers_for(sequence.len());
        let mut registers = vec![[0u32; LANES]; num_registers];
        let mut unknown = vec![[0u32; LANES]; num_registers];

        for (chunk, (register, mask)) in sequence
            .chunks(SYMBOLS_PER_REGISTER)
            .zip(registers.iter_mut().zip(unknown.iter_mut()))
        {
            for (lane_bytes, (word, mask_word)) in chunk.chunks(SYMBOLS_PER_LANE).zip(register.iter_mut().zip(mask.iter_mut())) {
                for (i, &base) in lane_bytes.iter().enumerate() {
                    let code = DNA_TWO_BIT_CODES[base as usize];
                    if code == UNKNOWN_CODE {
                        *mask_word |= 0b11 << (2 * i);
                    } else {
                        *word |= u32::from(code) << (2 * i);
                    }
                }
            }
        }

        log::debug!("Packed {} bases into {num_registers} registers", sequence.len());

        PackedSequence {
            registers,
            unknown,
            len: sequence.len(),
        }
    }

    /// Assembles a [`PackedSequence`] from registers produced elsewhere, such
    /// as a memory-mapped store.
    ///
    /// # Errors
    ///
    /// * [`PackError::RegisterCount`] if `registers` does not hold exactly
    ///   enough registers for `len` bases.
    /// * [`PackError::MaskCount`] if `unknown` differs in length from
    ///   `registers`.
    /// * [`PackError::MalformedMask`] if a 2-bit block of the mask is `01` or
    ///   `10`.
    /// * [`PackError::DirtyTail`] if any bit past `len` is set in either
    ///   array.
    pub fn from_parts(registers: Vec<Register>, unknown: Vec<Register>, len: usize) -> Result<Self, PackError> {
        let expected = registers_for(len);
        if registers.len() != expected {
            return Err(PackError::RegisterCount {
                expected,
                found: registers.len(),
            });
        }
        if unknown.len() != expected {
            return Err(PackError::MaskCount {
                expected,
                found: unknown.len(),
            });
        }

        if let Some(register) = unknown
            .iter()
            .position(|mask| mask.iter().any(|&m| (m ^ (m >> 1)) & LOW_BITS != 0))
        {
            return Err(PackError::MalformedMask { register });
        }

        if let (Some(last), Some(last_mask)) = (registers.last(), unknown.last()) {
            let used = len - (expected - 1) * SYMBOLS_PER_REGISTER;
            for lane in 0..LANES {
                let keep = tail_mask(used.saturating_sub(lane * SYMBOLS_PER_LANE));
                if (last[lane] | last_mask[lane]) & !keep != 0 {
                    return Err(PackError::DirtyTail);
                }
            }
        }

        Ok(PackedSequence { registers, unknown, len })
    }

    /// The number of bases in the sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the sequence empty?
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of 128-bit registers used, which is also the number of
    /// unknown mask registers.
    #[inline]
    #[must_use]
    pub fn num_registers(&self) -> usize {
        self.registers.len()
    }

    /// The packed bases.
    #[inline]
    #[must_use]
    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    /// The unknown mask, `11` for each unknown base.
    #[inline]
    #[must_use]
    pub fn unknown_mask(&self) -> &[Register] {
        &self.unknown
    }

    /// The number of bases flagged as unknown.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.unknown
            .iter()
            .flatten()
            .map(|&m| (m & LOW_BITS).count_ones() as usize)
            .sum()
    }

    /// Gets the uppercase base at the zero-based index, with `N` for unknown
    /// positions, or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        if index >= self.len {
            return None;
        }

        let (register, symbol) = (index / SYMBOLS_PER_REGISTER, index % SYMBOLS_PER_REGISTER);
        let (lane, shift) = (symbol / SYMBOLS_PER_LANE, 2 * (symbol % SYMBOLS_PER_LANE));

        if (self.unknown[register][lane] >> shift) & 1 == 1 {
            Some(b'N')
        } else {
            #[allow(clippy::cast_possible_truncation)]
            let code = ((self.registers[register][lane] >> shift) & 0b11) as u8;
            Some(decode_two_bit(code))
        }
    }

    /// Iterates over the decoded bases.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.len).filter_map(|i| self.get(i))
    }

    /// Decodes the sequence to uppercase `ACGT`, with `N` wherever the base was
    /// unknown. Case, `U`, and the particular unknown symbol are not preserved.
    #[must_use]
    pub fn unpack(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

/// The number of registers needed for `len` bases.
#[inline]
#[must_use]
pub const fn registers_for(len: usize) -> usize {
    len.div_ceil(SYMBOLS_PER_REGISTER)
}

/// The bits of one lane that may be set when `used` bases fall in it.
#[inline]
const fn tail_mask(used: usize) -> u32 {
    if used >= SYMBOLS_PER_LANE {
        u32::MAX
    } else {
        (1 << (2 * used)) - 1
    }
}
