use crate::data::alphas::{DNA_PACKABLE, DNA_PACKABLE_ACGT_INDEX, DNA_PACKABLE_CODES, DNA_TWO_BIT_ORDER};

/// The code assigned by [`DNA_TWO_BIT_CODES`] to any byte that is not a
/// packable base. Such positions are stored with code `00` and flagged in the
/// unknown mask.
pub const UNKNOWN_CODE: u8 = 4;

/// Maps bytes to their 2-bit nucleotide code, or [`UNKNOWN_CODE`] for anything
/// that is not `ACGTU` in either case.
///
/// The assignment is a contract shared by every producer of packed sequences
/// and the packed distance kernels:
///
/// | Base | Code |
/// |------|------|
/// | `A`  | `00` |
/// | `G`  | `01` |
/// | `T`  | `10` |
/// | `C`  | `11` |
///
/// The transition pairs `A`/`G` and `C`/`T` differ only in the low bit, while
/// every transversion pair differs in the high bit. The XOR of two codes is
/// then `00` for a match, `01` for a transition, and `1x` for a transversion.
/// Packing with any other assignment silently misclassifies substitutions.
pub const DNA_TWO_BIT_CODES: [u8; 256] = make_mapping_with_default(DNA_PACKABLE, DNA_PACKABLE_CODES, UNKNOWN_CODE);

/// Decodes a 2-bit code back into an uppercase base.
#[inline]
#[must_use]
pub(crate) const fn decode_two_bit(code: u8) -> u8 {
    DNA_TWO_BIT_ORDER[(code & 0b11) as usize]
}

/// Maps bytes to their index in `ACGT`, with `U` as `T`, or `4` otherwise.
const DNA_ACGT_INDEX: [u8; 256] = make_mapping_with_default(DNA_PACKABLE, DNA_PACKABLE_ACGT_INDEX, 4);

/// Gets the `ACGT` index of a base, or `4` for anything else.
#[inline]
#[must_use]
pub(crate) const fn to_dna_index(b: u8) -> u8 {
    DNA_ACGT_INDEX[b as usize]
}

/// Utility function for making a mapping with a default value.
const fn make_mapping_with_default<const N: usize>(from_byte: &[u8; N], dest_byte: &[u8; N], all_others: u8) -> [u8; 256] {
    let mut mapping = [all_others; 256];
    let mut i = 0;

    while i < N {
        mapping[from_byte[i] as usize] = dest_byte[i];
        i += 1;
    }
    mapping
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::alphas::DNA_CANONICAL_UNALIGNED_UC;

    fn is_transition(a: u8, b: u8) -> bool {
        matches!((a, b), (b'A', b'G') | (b'G', b'A') | (b'C', b'T') | (b'T', b'C'))
    }

    #[test]
    fn codes_classify_by_xor() {
        for &a in DNA_CANONICAL_UNALIGNED_UC {
            for &b in DNA_CANONICAL_UNALIGNED_UC {
                let diff = DNA_TWO_BIT_CODES[a as usize] ^ DNA_TWO_BIT_CODES[b as usize];
                if a == b {
                    assert_eq!(diff, 0b00);
                } else if is_transition(a, b) {
                    assert_eq!(diff, 0b01, "{} {}", a as char, b as char);
                } else {
                    assert_eq!(diff >> 1, 1, "{} {}", a as char, b as char);
                }
            }
        }
    }

    #[test]
    fn codes_round_trip_and_fold_case() {
        for &b in b"ACGT" {
            assert_eq!(decode_two_bit(DNA_TWO_BIT_CODES[b as usize]), b);
            assert_eq!(DNA_TWO_BIT_CODES[b.to_ascii_lowercase() as usize], DNA_TWO_BIT_CODES[b as usize]);
        }
        assert_eq!(DNA_TWO_BIT_CODES[b'U' as usize], DNA_TWO_BIT_CODES[b'T' as usize]);
        assert_eq!(DNA_TWO_BIT_CODES[b'u' as usize], DNA_TWO_BIT_CODES[b'T' as usize]);
    }

    #[test]
    fn everything_else_is_unknown() {
        for b in b"NnRYKMSWBDHV-.*~ 0\n".iter().copied().chain([0u8, 255]) {
            assert_eq!(DNA_TWO_BIT_CODES[b as usize], UNKNOWN_CODE);
        }
        let packable = (0..=255u8).filter(|&b| DNA_TWO_BIT_CODES[b as usize] != UNKNOWN_CODE).count();
        assert_eq!(packable, 10);
    }

    #[test]
    fn acgt_index() {
        assert_eq!((*b"ACGTUacgtuN-").map(to_dna_index), [0, 1, 2, 3, 3, 0, 1, 2, 3, 3, 4, 4]);
    }
}
