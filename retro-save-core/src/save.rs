//! Immutable raw-save value type.

use crate::error::Result;
use crate::util;

/// A raw save image. Every transform returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SaveBuffer {
    bytes: Vec<u8>,
}

impl SaveBuffer {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Zero-pad to `size` bytes. Longer saves are returned unchanged.
    pub fn with_size(&self, size: usize) -> Self {
        Self::new(util::set_size(&self.bytes, size))
    }

    /// Zero-pad to the next power of two above the current length.
    pub fn expanded_to_next_pow2(&self) -> Self {
        Self::new(util::expand_to_next_pow2(&self.bytes))
    }

    /// Drop trailing zero bytes.
    pub fn with_trimmed_whitespace(&self) -> Self {
        Self::new(util::trim_trailing_zeros(&self.bytes))
    }

    /// Reverse byte order within each `width`-byte group.
    pub fn byte_swapped(&self, width: usize) -> Result<Self> {
        util::swap_endian(&self.bytes, width).map(Self::new)
    }

    /// Swap adjacent `width`-byte groups.
    pub fn word_swapped(&self, width: usize) -> Result<Self> {
        util::swap_words(&self.bytes, width).map(Self::new)
    }

    /// Fraction of bytes that are neither 0x00 nor 0xFF.
    pub fn density(&self) -> f64 {
        density(&self.bytes)
    }

    /// Fit the save to exactly `target` bytes.
    ///
    /// - Equal length: unchanged.
    /// - At least twice the target: the denser of the first two
    ///   target-sized banks (ties keep the first bank).
    /// - Longer, but less than twice: truncated to `target`.
    /// - Shorter: padded with `pad_byte`.
    pub fn with_normalized_size(&self, target: usize, pad_byte: u8) -> Self {
        let src = &self.bytes;
        if src.len() == target {
            return self.clone();
        }
        if src.len() > target {
            if target > 0 && src.len() >= 2 * target {
                let a = &src[..target];
                let b = &src[target..2 * target];
                let pick = if density(b) > density(a) { b } else { a };
                return Self::new(pick);
            }
            return Self::new(&src[..target]);
        }
        let mut out = src.clone();
        out.resize(target, pad_byte);
        Self::new(out)
    }
}

impl From<Vec<u8>> for SaveBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for SaveBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for SaveBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

fn density(buf: &[u8]) -> f64 {
    if buf.is_empty() {
        return 0.0;
    }
    let live = buf.iter().filter(|&&b| !util::is_padding_byte(b)).count();
    live as f64 / buf.len() as f64
}

#[cfg(test)]
#[path = "tests/save_tests.rs"]
mod tests;
