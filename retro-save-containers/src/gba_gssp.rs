//! GameShark SP (GBA) container.
//!
//! Layout: `"ADVSAVEG"` at 0x000, a fixed 0x430-byte header, then the raw
//! save running to the end of the file. Trailing bytes after the save are
//! part of the payload; nothing is trimmed.

use retro_save_core::util::has_magic_at;
use retro_save_core::{ContainerError, Result};

pub const MAGIC: &[u8; 8] = b"ADVSAVEG";

/// Offset of the raw save (1072).
pub const PAYLOAD_OFFSET: usize = 0x430;

const FORMAT: &str = "GameShark SP";

pub fn identify(buf: &[u8]) -> bool {
    has_magic_at(buf, 0, MAGIC)
}

/// Return everything after the header.
pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    if !identify(container) {
        return Err(ContainerError::not_this_format(FORMAT, "ADVSAVEG missing"));
    }
    if container.len() <= PAYLOAD_OFFSET {
        return Err(ContainerError::TooSmall {
            expected: PAYLOAD_OFFSET + 1,
            actual: container.len(),
        });
    }
    Ok(container[PAYLOAD_OFFSET..].to_vec())
}

/// Build `source[..0x430] ++ payload`.
///
/// The source container only lends its header; its old payload length is
/// not consulted.
pub fn inject(source: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    if !identify(source) {
        return Err(ContainerError::not_this_format(FORMAT, "ADVSAVEG missing"));
    }
    if source.len() < PAYLOAD_OFFSET {
        return Err(ContainerError::TooSmall {
            expected: PAYLOAD_OFFSET,
            actual: source.len(),
        });
    }
    let mut out = Vec::with_capacity(PAYLOAD_OFFSET + payload.len());
    out.extend_from_slice(&source[..PAYLOAD_OFFSET]);
    out.extend_from_slice(payload);
    Ok(out)
}

#[cfg(test)]
#[path = "tests/gba_gssp_tests.rs"]
mod tests;
