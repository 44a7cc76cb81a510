use crate::{
    data::{err::DistanceError, mappings::to_dna_index},
    distance::SubstitutionCounts,
};

#[must_use]
/// ## Generates a 4x4 substitution matrix from two aligned sequences of the type `&[u8]`.
///
/// Each row refers to nucleotide bases in the first sequence (A, C, G, T,
/// respectively), and each column refers to nucleotide bases in the second
/// sequence. `U` is counted as `T`, case is ignored, and positions holding any
/// other byte in either sequence are skipped. Bases in the longer sequence
/// past the end of the shorter one are ignored.
///
/// ### Example
/// ```
/// # use bitdist::distance::dna_substitution_matrix;
/// let seq1: &[u8] = b"GATCAGATTTGCATTGGTT";
/// let seq2: &[u8] = b"GATCATATTAGCATTGCTT";
///
/// let sub_matrix = dna_substitution_matrix(seq1, seq2);
/// assert_eq!(sub_matrix[2][3], 1);
/// assert_eq!(sub_matrix[3][0], 1);
/// ```
pub fn dna_substitution_matrix(seq1: &[u8], seq2: &[u8]) -> [[usize; 4]; 4] {
    let mut sub_matrix = [[0; 4]; 4];
    std::iter::zip(seq1.iter().copied().map(to_dna_index), seq2.iter().copied().map(to_dna_index))
        .filter(|(a, b)| *a < 4 && *b < 4)
        .for_each(|(a, b)| sub_matrix[a as usize][b as usize] += 1);
    sub_matrix
}

/// ## Counts substitution types one byte at a time.
///
/// Produces the same [`SubstitutionCounts`] as
/// [`count_substitutions`](crate::distance::count_substitutions) directly from
/// aligned byte sequences, without packing. Useful for short sequences and as
/// a reference for the packed kernels.
///
/// ## Errors
///
/// [`DistanceError::LengthMismatch`] if the sequences differ in length.
///
/// ## Example
/// ```
/// # use bitdist::distance::tabulate_substitutions;
/// let counts = tabulate_substitutions(b"ACGTACGT", b"GCGTACCN").unwrap();
///
/// assert_eq!(counts.transitions, 1);
/// assert_eq!(counts.transversions, 1);
/// assert_eq!(counts.unknown, 1);
/// assert_eq!(counts.matches(), 5);
/// ```
pub fn tabulate_substitutions(seq1: &[u8], seq2: &[u8]) -> Result<SubstitutionCounts, DistanceError> {
    if seq1.len() != seq2.len() {
        return Err(DistanceError::LengthMismatch {
            left:  seq1.len(),
            right: seq2.len(),
        });
    }

    let m = dna_substitution_matrix(seq1, seq2);
    let comparable = m.iter().flatten().sum::<usize>();
    let matches = (0..4).map(|i| m[i][i]).sum::<usize>();
    // A <-> G and C <-> T
    let transitions = m[0][2] + m[2][0] + m[1][3] + m[3][1];

    Ok(SubstitutionCounts {
        length: seq1.len(),
        unknown: seq1.len() - comparable,
        transitions,
        transversions: comparable - matches - transitions,
    })
}
