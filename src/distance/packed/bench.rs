extern crate test;
use super::{test_data::LONG_PAIR, *};
use crate::{distance::tabulate_substitutions, simd::ScalarLanes};
use test::Bencher;

#[bench]
fn pack_long(b: &mut Bencher) {
    let (seq1, _) = &*LONG_PAIR;
    b.iter(|| PackedSequence::from_bytes(seq1));
}

#[bench]
fn substitutions_simd(b: &mut Bencher) {
    let (seq1, seq2) = &*LONG_PAIR;
    let (seq1, seq2) = (PackedSequence::from_bytes(seq1), PackedSequence::from_bytes(seq2));
    b.iter(|| count_substitutions(&seq1, &seq2));
}

#[bench]
fn substitutions_scalar_lanes(b: &mut Bencher) {
    let (seq1, seq2) = &*LONG_PAIR;
    let (seq1, seq2) = (PackedSequence::from_bytes(seq1), PackedSequence::from_bytes(seq2));
    b.iter(|| count_substitutions_with::<ScalarLanes>(&seq1, &seq2));
}

#[bench]
fn substitutions_tabulated(b: &mut Bencher) {
    let (seq1, seq2) = &*LONG_PAIR;
    b.iter(|| tabulate_substitutions(seq1, seq2));
}
