//! Wii U Virtual Console NES container (`.ves`).
//!
//! A fixed 32-byte header, the battery save, then an optional trailer. There
//! is no signature; the save size is inferred from what follows the header.
//! The header carries an additive checksum at 0x02..0x04.

use retro_save_core::checksum::apply_vc_checksum;
use retro_save_core::{Console, ContainerError, Result};

pub const HEADER_SIZE: usize = 32;

const FORMAT: &str = "Wii U VC NES";

fn smallest_save() -> usize {
    Console::Nes.save_sizes().last().copied().unwrap_or_default()
}

/// Largest valid NES save size that fits in `content_len` bytes.
pub fn payload_size_for(content_len: usize) -> Option<usize> {
    Console::Nes
        .save_sizes()
        .iter()
        .copied()
        .find(|&size| size <= content_len)
}

/// True if the buffer can hold the header plus the smallest NES save.
pub fn identify(buf: &[u8]) -> bool {
    buf.len() > HEADER_SIZE && buf.len() - HEADER_SIZE >= smallest_save()
}

/// Return the largest valid save that follows the header; anything beyond
/// it is trailer.
pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    if container.len() <= HEADER_SIZE {
        return Err(ContainerError::TooSmall {
            expected: HEADER_SIZE + smallest_save(),
            actual: container.len(),
        });
    }
    let content_len = container.len() - HEADER_SIZE;
    let size = payload_size_for(content_len).ok_or(ContainerError::TooSmall {
        expected: HEADER_SIZE + smallest_save(),
        actual: container.len(),
    })?;
    Ok(container[HEADER_SIZE..HEADER_SIZE + size].to_vec())
}

/// Replace the save, keep header and trailer, and recompute the checksum
/// over `header ++ payload`.
pub fn inject(container: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    if !Console::Nes.is_save_size(payload.len()) {
        return Err(ContainerError::size_mismatch(
            Console::Nes.save_sizes(),
            payload.len(),
        ));
    }
    if !identify(container) {
        return Err(ContainerError::TooSmall {
            expected: HEADER_SIZE + smallest_save(),
            actual: container.len(),
        });
    }

    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(&container[..HEADER_SIZE]);
    let sum = apply_vc_checksum(&mut header, payload)?;
    log::debug!("{FORMAT}: injected {} bytes, checksum sum 0x{sum:04X}", payload.len());

    let tail = container
        .get(HEADER_SIZE + payload.len()..)
        .unwrap_or_default();
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len() + tail.len());
    out.extend_from_slice(&header);
    out.extend_from_slice(payload);
    out.extend_from_slice(tail);
    Ok(out)
}

#[cfg(test)]
#[path = "tests/nes_wiiu_tests.rs"]
mod tests;
