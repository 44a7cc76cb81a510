use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Generates a random sequence of `length` bytes drawn uniformly from `alpha`.
/// Repeating a byte in `alpha` weights it accordingly.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Copies `sequence`, replacing each position with probability `rate` by a
/// byte drawn uniformly from `alpha`. The replacement may equal the original.
#[must_use]
pub fn rand_mutate(sequence: &[u8], alpha: &[u8], rate: f64, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    sequence
        .iter()
        .map(|&base| {
            if unit_interval(rng.next_u64()) < rate {
                alpha[rng.next_u32() as usize % alpha.len()]
            } else {
                base
            }
        })
        .collect()
}

/// Maps the top 53 bits of `x` to `[0, 1)`.
#[allow(clippy::cast_precision_loss)]
#[inline]
fn unit_interval(x: u64) -> f64 {
    (x >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let random_sequence = rand_sequence(b"ATGC", LEN, 42);
        assert_eq!(LEN, random_sequence.len());

        let (a, c, g, t) = random_sequence.iter().fold((0, 0, 0, 0), |(a, c, g, t), &b| match b {
            b'A' => (a + 1, c, g, t),
            b'C' => (a, c + 1, g, t),
            b'G' => (a, c, g + 1, t),
            b'T' => (a, c, g, t + 1),
            _ => (a, c, g, t),
        });

        assert!(a > 0);
        assert!(c > 0);
        assert!(g > 0);
        assert!(t > 0);
        assert_eq!(rand_sequence(b"ATGC", LEN, 42), random_sequence);
    }

    #[test]
    fn mutate_test() {
        let original = rand_sequence(b"ACGT", 10_000, 7);

        assert_eq!(rand_mutate(&original, b"N", 0.0, 1), original);
        assert!(rand_mutate(&original, b"N", 1.0, 1).iter().all(|&b| b == b'N'));

        let mutated = rand_mutate(&original, b"N", 0.1, 1);
        let changed = mutated.iter().filter(|&&b| b == b'N').count();
        assert_eq!(mutated.len(), original.len());
        assert!((500..1500).contains(&changed), "{changed}");
    }
}
