use super::*;

#[test]
fn packs_low_bits_first() {
    let s = PackedSequence::from_bytes(b"GC");
    assert_eq!(s.registers(), &[[0b11_01, 0, 0, 0]]);
    assert_eq!(s.unknown_mask(), &[[0, 0, 0, 0]]);

    let s = PackedSequence::from_bytes(b"AGTC");
    assert_eq!(s.registers()[0][0], 0b11_10_01_00);
}

#[test]
fn packs_across_lanes_and_registers() {
    let mut bases = vec![b'A'; 70];
    bases[16] = b'T';
    bases[63] = b'C';
    bases[64] = b'G';
    bases[69] = b'-';

    let s = PackedSequence::from_bytes(&bases);
    assert_eq!(s.len(), 70);
    assert_eq!(s.num_registers(), 2);
    assert_eq!(s.registers()[0], [0, 0b10, 0, 0b11 << 30]);
    assert_eq!(s.registers()[1], [0b01, 0, 0, 0]);
    assert_eq!(s.unknown_mask()[1], [0b11 << 10, 0, 0, 0]);
    assert_eq!(s.unknown_count(), 1);
}

#[test]
fn unknowns_and_case() {
    let s: PackedSequence = b"acgtuNRY-.ACGTU".into();
    assert_eq!(s.unpack(), b"ACGTTNNNNNACGTT");
    assert_eq!(s.unknown_count(), 5);
    assert_eq!(s.to_string(), "ACGTTNNNNNACGTT");
    assert_eq!(s.get(5), Some(b'N'));
    assert_eq!(s.get(15), None);
}

#[test]
fn empty() {
    let s = PackedSequence::from_bytes(b"");
    assert!(s.is_empty());
    assert_eq!(s.num_registers(), 0);
    assert_eq!(s, PackedSequence::new());
    assert_eq!(s.unknown_count(), 0);
    assert_eq!(PackedSequence::from_parts(Vec::new(), Vec::new(), 0), Ok(s));
}

#[test]
fn conversions_agree() {
    let expected = PackedSequence::from_bytes(b"GATTACA");
    assert_eq!(PackedSequence::from("GATTACA"), expected);
    assert_eq!(PackedSequence::from(&b"GATTACA".to_vec()), expected);
    assert_eq!(b"GATTACA".iter().copied().collect::<PackedSequence>(), expected);
}

#[test]
fn from_parts_round_trip() {
    let bases: Vec<u8> = b"ACGTN-".iter().copied().cycle().take(200).collect();
    let s = PackedSequence::from_bytes(&bases);

    let rebuilt = PackedSequence::from_parts(s.registers().to_vec(), s.unknown_mask().to_vec(), s.len());
    assert_eq!(rebuilt, Ok(s));
}

#[test]
fn from_parts_errors() {
    let s = PackedSequence::from_bytes(b"ACGTACGT");
    let regs = s.registers().to_vec();
    let mask = s.unknown_mask().to_vec();

    assert_eq!(
        PackedSequence::from_parts(regs.clone(), mask.clone(), 65),
        Err(PackError::RegisterCount { expected: 2, found: 1 })
    );
    assert_eq!(
        PackedSequence::from_parts(regs.clone(), Vec::new(), 8),
        Err(PackError::MaskCount { expected: 1, found: 0 })
    );
    assert_eq!(
        PackedSequence::from_parts(regs.clone(), vec![[0b01, 0, 0, 0]], 8),
        Err(PackError::MalformedMask { register: 0 })
    );
    assert_eq!(
        PackedSequence::from_parts(regs.clone(), vec![[0, 0b11, 0, 0]], 8),
        Err(PackError::DirtyTail)
    );
    assert_eq!(
        PackedSequence::from_parts(vec![[0, 0, 0, 1]], mask.clone(), 8),
        Err(PackError::DirtyTail)
    );

    // A register that is exactly full has no tail to check.
    assert!(PackedSequence::from_parts(vec![[u32::MAX; LANES]], vec![[0; LANES]], 64).is_ok());
    assert!(PackedSequence::from_parts(vec![[u32::MAX, 0b11, 0, 0]], vec![[0; LANES]], 17).is_ok());
    assert_eq!(
        PackedSequence::from_parts(vec![[u32::MAX, 0b111, 0, 0]], vec![[0; LANES]], 17),
        Err(PackError::DirtyTail)
    );
}

#[cfg(feature = "rand")]
#[test]
fn random_round_trip() {
    let bases = crate::generate::rand_sequence(b"ACGT", 1000, 42);
    let s = PackedSequence::from_bytes(&bases);
    assert_eq!(s.unpack(), bases);
    assert_eq!(s.num_registers(), 16);
    assert_eq!(s.unknown_count(), 0);
}
