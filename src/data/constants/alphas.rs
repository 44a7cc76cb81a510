/// The bases that have a 2-bit code, indexed by that code. `A` is `00`, `G`
/// is `01`, `T` is `10`, and `C` is `11`.
pub(crate) const DNA_TWO_BIT_ORDER: &[u8; 4] = b"AGTC";

/// Bytes accepted as one of the four packable bases, in both cases and with
/// `U` standing in for `T`.
pub(crate) const DNA_PACKABLE: &[u8; 10] = b"acgtuACGTU";

/// The 2-bit code of each byte in [`DNA_PACKABLE`].
pub(crate) const DNA_PACKABLE_CODES: &[u8; 10] = &[0, 3, 1, 2, 2, 0, 3, 1, 2, 2];

/// The index of each byte in [`DNA_PACKABLE`] within `ACGT`.
pub(crate) const DNA_PACKABLE_ACGT_INDEX: &[u8; 10] = &[0, 1, 2, 3, 3, 0, 1, 2, 3, 3];

/// The canonical uppercase bases.
#[cfg(test)]
pub(crate) const DNA_CANONICAL_UNALIGNED_UC: &[u8; 4] = b"ACGT";
