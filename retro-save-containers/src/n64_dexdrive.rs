//! DexDrive N64 controller-pak container.
//!
//! `"123-456-STD"` at offset 0, a comment table at 0x40..0x1000 (not
//! parsed), and the save from 0x1040 to the end of the file.

use retro_save_core::util::has_magic_at;
use retro_save_core::{ContainerError, Result};

use crate::n64_byteorder::{SaveByteOrder, make_variants};

pub const MAGIC: &[u8; 11] = b"123-456-STD";
pub const COMMENT_START: usize = 0x40;
pub const COMMENT_END: usize = 0x1000;
pub const PAYLOAD_OFFSET: usize = 0x1040;

const FORMAT: &str = "DexDrive";

pub fn identify(buf: &[u8]) -> bool {
    has_magic_at(buf, 0, MAGIC)
}

fn check_magic(buf: &[u8]) -> Result<()> {
    if !identify(buf) {
        return Err(ContainerError::not_this_format(FORMAT, "123-456-STD missing"));
    }
    Ok(())
}

/// Everything from 0x1040 on, untrimmed.
pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    check_magic(container)?;
    if container.len() <= PAYLOAD_OFFSET {
        return Err(ContainerError::TooSmall {
            expected: PAYLOAD_OFFSET + 1,
            actual: container.len(),
        });
    }
    Ok(container[PAYLOAD_OFFSET..].to_vec())
}

/// `source[..0x1040] ++ payload`. The result is always
/// `0x1040 + payload.len()` bytes.
pub fn inject(source: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    check_magic(source)?;
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

/// Wrap every byte-order permutation of `raw` in a copy of `source`'s
/// header, in `SaveByteOrder::all()` order.
pub fn inject_variants(source: &[u8], raw: &[u8]) -> Result<Vec<(SaveByteOrder, Vec<u8>)>> {
    let variants = make_variants(raw)?;
    let mut containers = Vec::with_capacity(SaveByteOrder::all().len());
    for (order, bytes) in variants.iter() {
        containers.push((order, inject(source, bytes)?));
    }
    log::debug!("{FORMAT}: built {} variant containers of {} bytes", containers.len(), raw.len());
    Ok(containers)
}

#[cfg(test)]
#[path = "tests/n64_dexdrive_tests.rs"]
mod tests;
