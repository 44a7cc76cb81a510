use super::*;
use std::fmt::{self, Write};

impl From<&[u8]> for PackedSequence {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        PackedSequence::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for PackedSequence {
    #[inline]
    fn from(bytes: &[u8; N]) -> Self {
        PackedSequence::from_bytes(bytes)
    }
}

impl From<&Vec<u8>> for PackedSequence {
    #[inline]
    fn from(bytes: &Vec<u8>) -> Self {
        PackedSequence::from_bytes(bytes)
    }
}

impl From<&str> for PackedSequence {
    #[inline]
    fn from(s: &str) -> Self {
        PackedSequence::from_bytes(s.as_bytes())
    }
}

impl FromIterator<u8> for PackedSequence {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        PackedSequence::from_bytes(&iter.into_iter().collect::<Vec<_>>())
    }
}

impl fmt::Display for PackedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in self.iter() {
            f.write_char(base as char)?;
        }
        Ok(())
    }
}
