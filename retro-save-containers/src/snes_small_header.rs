//! Wii U SNES `.ves` variant with a short, unvalidated header.
//!
//! These files carry no VC magic: a header of at most 128 bytes is followed
//! directly by an SRAM image of a standard SNES size.

use retro_save_core::{Console, ContainerError, Result};

use crate::{gba_wiiu, snes_vc};

pub const MAX_HEADER_SIZE: usize = 128;

const FORMAT: &str = "Wii U SNES (small header)";

/// Header length if `len` is a standard SNES save size plus at most
/// `MAX_HEADER_SIZE` bytes.
pub fn header_len_for(len: usize) -> Option<usize> {
    Console::Snes
        .save_sizes()
        .iter()
        .find(|&&size| size <= len && len - size <= MAX_HEADER_SIZE)
        .map(|&size| len - size)
}

/// Matches only when no stronger signature (SNES VC magic, Wii U GBA
/// `STATRAM0`) is present.
pub fn identify(buf: &[u8]) -> bool {
    !snes_vc::has_magic(buf)
        && !gba_wiiu::identify(buf)
        && header_len_for(buf.len()).is_some()
}

pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    if !identify(container) {
        return Err(ContainerError::not_this_format(
            FORMAT,
            format!("{} bytes is not a standard SNES save plus a short header", container.len()),
        ));
    }
    let header_len = header_len_for(container.len()).unwrap_or_default();
    Ok(container[header_len..].to_vec())
}

/// Keep the leading header and place `payload` after it.
///
/// When the container is not `header + payload` sized, the payload
/// replaces the last `payload.len()` bytes instead.
pub fn inject(container: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    if !Console::Snes.is_save_size(payload.len()) {
        return Err(ContainerError::size_mismatch(
            Console::Snes.save_sizes(),
            payload.len(),
        ));
    }
    if container.len() < payload.len() {
        return Err(ContainerError::SizeMismatch {
            expected: format!("at most {} bytes (container size)", container.len()),
            actual: payload.len(),
        });
    }
    let head_len = container.len() - payload.len();
    if head_len > MAX_HEADER_SIZE {
        log::debug!("{FORMAT}: {head_len}-byte head, replacing trailing payload");
    }
    let mut out = Vec::with_capacity(container.len());
    out.extend_from_slice(&container[..head_len]);
    out.extend_from_slice(payload);
    Ok(out)
}

#[cfg(test)]
#[path = "tests/snes_small_header_tests.rs"]
mod tests;
