//! Byte-buffer primitives shared by every container codec.
//!
//! All functions are pure: they borrow their input and return new values.

use crate::error::{ContainerError, Result};

// ---------------------------------------------------------------------------
// Fixed-width reads and writes
// ---------------------------------------------------------------------------

/// Borrow `width` bytes at `offset`, failing with `TruncatedInput` if the
/// range runs past the end of `buf`.
pub fn read_bytes(buf: &[u8], offset: usize, width: usize) -> Result<&[u8]> {
    offset
        .checked_add(width)
        .and_then(|end| buf.get(offset..end))
        .ok_or(ContainerError::TruncatedInput {
            offset,
            width,
            len: buf.len(),
        })
}

pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8> {
    Ok(read_bytes(buf, offset, 1)?[0])
}

/// Read a little-endian u16.
pub fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16> {
    let b = read_bytes(buf, offset, 2)?;
    Ok(u16::from_le_bytes([b[0], b[1]]))
}

/// Read a little-endian u32.
pub fn read_u32_le(buf: &[u8], offset: usize) -> Result<u32> {
    let b = read_bytes(buf, offset, 4)?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn write_bytes(buf: &mut [u8], offset: usize, bytes: &[u8]) -> Result<()> {
    let len = buf.len();
    let dst = offset
        .checked_add(bytes.len())
        .and_then(|end| buf.get_mut(offset..end))
        .ok_or(ContainerError::TruncatedInput {
            offset,
            width: bytes.len(),
            len,
        })?;
    dst.copy_from_slice(bytes);
    Ok(())
}

/// Write a little-endian u16 in place.
pub fn write_u16_le(buf: &mut [u8], offset: usize, value: u16) -> Result<()> {
    write_bytes(buf, offset, &value.to_le_bytes())
}

/// Write a little-endian u32 in place.
pub fn write_u32_le(buf: &mut [u8], offset: usize, value: u32) -> Result<()> {
    write_bytes(buf, offset, &value.to_le_bytes())
}

// ---------------------------------------------------------------------------
// ASCII
// ---------------------------------------------------------------------------

/// Decode a byte slice as 7-bit ASCII. The high bit of each byte is
/// dropped; nothing is trimmed and NUL bytes are kept.
pub fn decode_ascii(buf: &[u8]) -> String {
    buf.iter().map(|&b| (b & 0x7F) as char).collect()
}

/// Encode a string as single-byte ASCII, one byte per `char` (code points
/// above 0xFF keep only their low byte).
pub fn encode_ascii(s: &str) -> Vec<u8> {
    s.chars().map(|c| c as u32 as u8).collect()
}

/// True if `buf[offset..offset + magic.len()]` equals `magic`.
pub fn has_magic_at(buf: &[u8], offset: usize, magic: &[u8]) -> bool {
    offset
        .checked_add(magic.len())
        .and_then(|end| buf.get(offset..end))
        .is_some_and(|window| window == magic)
}

// ---------------------------------------------------------------------------
// Swaps
// ---------------------------------------------------------------------------

/// Reverse byte order within each `width`-sized group.
///
/// `[A,B,C,D]` with width 2 → `[B,A,D,C]`.
pub fn swap_endian(buf: &[u8], width: usize) -> Result<Vec<u8>> {
    check_alignment(buf, width)?;
    let mut out = buf.to_vec();
    for group in out.chunks_exact_mut(width) {
        group.reverse();
    }
    Ok(out)
}

/// Swap each pair of adjacent `width`-sized groups.
///
/// `[w0,w1,w2,w3]` → `[w1,w0,w3,w2]`. The buffer length must be a multiple
/// of `2 * width`.
pub fn swap_words(buf: &[u8], width: usize) -> Result<Vec<u8>> {
    let span = width.saturating_mul(2);
    check_alignment(buf, span)?;
    let mut out = Vec::with_capacity(buf.len());
    for pair in buf.chunks_exact(span) {
        out.extend_from_slice(&pair[width..]);
        out.extend_from_slice(&pair[..width]);
    }
    Ok(out)
}

fn check_alignment(buf: &[u8], group: usize) -> Result<()> {
    if group == 0 || !buf.len().is_multiple_of(group) {
        return Err(ContainerError::MisalignedLength {
            len: buf.len(),
            group,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Trimming and sizing
// ---------------------------------------------------------------------------

/// Longest prefix of `buf` that does not end in a zero byte.
pub fn trim_trailing_zeros(buf: &[u8]) -> &[u8] {
    let end = buf.iter().rposition(|&b| b != 0x00).map_or(0, |i| i + 1);
    &buf[..end]
}

/// Zero-pad `buf` up to `size` bytes. Never truncates.
pub fn set_size(buf: &[u8], size: usize) -> Vec<u8> {
    let mut out = buf.to_vec();
    if out.len() < size {
        out.resize(size, 0x00);
    }
    out
}

/// Zero-pad to the next power of two strictly above the current length.
///
/// A buffer already sized to a power of two doubles; an empty buffer
/// becomes two bytes.
pub fn expand_to_next_pow2(buf: &[u8]) -> Vec<u8> {
    let len = buf.len().max(1);
    let next = 1usize << (usize::BITS - len.leading_zeros());
    set_size(buf, next)
}

/// True for the bytes dump tools use as padding around save data.
pub fn is_padding_byte(b: u8) -> bool {
    b == 0x00 || b == 0xFF
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
