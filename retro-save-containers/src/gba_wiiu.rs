//! Wii U Virtual Console GBA container (`.bin`).
//!
//! `"STATRAM0"` sits at 0x4000 and the save starts at 0x4080. Trailing zero
//! bytes of the whole container are treated as padding on decode.

use retro_save_core::util::{has_magic_at, trim_trailing_zeros};
use retro_save_core::{ContainerError, Result};

pub const MAGIC: &[u8; 8] = b"STATRAM0";
pub const MAGIC_OFFSET: usize = 0x4000;
pub const PAYLOAD_OFFSET: usize = 0x4080;

const FORMAT: &str = "Wii U VC GBA";

pub fn identify(buf: &[u8]) -> bool {
    has_magic_at(buf, MAGIC_OFFSET, MAGIC) && buf.len() > PAYLOAD_OFFSET
}

fn check(container: &[u8]) -> Result<()> {
    if !identify(container) {
        return Err(ContainerError::not_this_format(
            FORMAT,
            "STATRAM0 missing at 0x4000 or container too small",
        ));
    }
    Ok(())
}

/// Trim trailing zeros from the container, then return `0x4080..end`.
/// An all-padding payload decodes to an empty save.
pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    check(container)?;
    let end = trim_trailing_zeros(container).len();
    if end <= PAYLOAD_OFFSET {
        return Ok(Vec::new());
    }
    Ok(container[PAYLOAD_OFFSET..end].to_vec())
}

/// `container[..0x4080] ++ payload ++ container[0x4080 + payload.len()..]`.
///
/// The tail is empty once the new payload reaches past the original end.
pub fn inject(container: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    check(container)?;
    let tail = container
        .get(PAYLOAD_OFFSET + payload.len()..)
        .unwrap_or_default();
    let mut out = Vec::with_capacity(PAYLOAD_OFFSET + payload.len() + tail.len());
    out.extend_from_slice(&container[..PAYLOAD_OFFSET]);
    out.extend_from_slice(payload);
    out.extend_from_slice(tail);
    Ok(out)
}

#[cfg(test)]
#[path = "tests/gba_wiiu_tests.rs"]
mod tests;
