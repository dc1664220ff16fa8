//! SNES Virtual Console container (`.ves`), Wii U and 3DS.
//!
//! Both platforms share one 48-byte header layout, validated by an 8-byte
//! magic at 0x10:
//!
//! | Offset    | Field                                  |
//! |-----------|----------------------------------------|
//! | 0x00-0x01 | constant `01 00`                       |
//! | 0x02-0x03 | checksum (swapped, high byte - 1)      |
//! | 0x04-0x05 | preset ID (u16 LE)                     |
//! | 0x06-0x07 | zero                                   |
//! | 0x0D-0x0F | zero                                   |
//! | 0x10-0x17 | magic `C1 35 86 A5 65 CB 94 2C`        |
//! | 0x18-0x19 | save size in KiB (u16 LE)              |
//! | 0x1A-0x1B | zero                                   |
//! | 0x20-0x2F | zero                                   |
//!
//! Undocumented bytes are carried over from the original header on inject.

use retro_save_core::checksum::apply_vc_checksum;
use retro_save_core::util::has_magic_at;
use retro_save_core::{Console, ContainerError, Result, SnesHeaderOptions};

pub const HEADER_SIZE: usize = 0x30;
pub const MAGIC: [u8; 8] = [0xC1, 0x35, 0x86, 0xA5, 0x65, 0xCB, 0x94, 0x2C];
pub const MAGIC_OFFSET: usize = 0x10;

const PRESET_ID_OFFSET: usize = 0x04;
const SIZE_KIB_OFFSET: usize = 0x18;

const FORMAT: &str = "SNES VC";

/// True if the VC magic is present at 0x10.
pub fn has_magic(buf: &[u8]) -> bool {
    has_magic_at(buf, MAGIC_OFFSET, &MAGIC)
}

pub fn identify(buf: &[u8]) -> bool {
    has_magic(buf) && buf.len() > HEADER_SIZE
}

fn check_header(container: &[u8]) -> Result<()> {
    if !has_magic(container) {
        return Err(ContainerError::not_this_format(
            FORMAT,
            "magic C1 35 86 A5 65 CB 94 2C missing at 0x10",
        ));
    }
    if container.len() < HEADER_SIZE {
        return Err(ContainerError::TooSmall {
            expected: HEADER_SIZE,
            actual: container.len(),
        });
    }
    Ok(())
}

/// Return everything after the 48-byte header.
pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    check_header(container)?;
    if container.len() == HEADER_SIZE {
        return Err(ContainerError::TooSmall {
            expected: HEADER_SIZE + 1,
            actual: container.len(),
        });
    }
    Ok(container[HEADER_SIZE..].to_vec())
}

/// Rebuild the header from `container`'s and append `payload`.
///
/// Documented constant/zero fields are rewritten, the preset ID and size
/// fields are set only when `options` asks for it, and the checksum is
/// recomputed over `header ++ payload`.
pub fn inject(container: &[u8], payload: &[u8], options: &SnesHeaderOptions) -> Result<Vec<u8>> {
    check_header(container)?;
    if !Console::Snes.is_save_size(payload.len()) {
        return Err(ContainerError::size_mismatch(
            Console::Snes.save_sizes(),
            payload.len(),
        ));
    }

    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(&container[..HEADER_SIZE]);

    header[0x00] = 0x01;
    header[0x01] = 0x00;
    header[0x06..0x08].fill(0);
    header[0x0D..0x10].fill(0);
    header[MAGIC_OFFSET..MAGIC_OFFSET + 8].copy_from_slice(&MAGIC);
    header[0x1A..0x1C].fill(0);
    header[0x20..0x30].fill(0);

    if let Some(preset_id) = options.preset_id {
        header[PRESET_ID_OFFSET..PRESET_ID_OFFSET + 2].copy_from_slice(&preset_id.to_le_bytes());
    }
    if options.update_size_kib {
        let kib = size_in_kib(payload.len());
        header[SIZE_KIB_OFFSET..SIZE_KIB_OFFSET + 2].copy_from_slice(&kib.to_le_bytes());
    }

    let sum = apply_vc_checksum(&mut header, payload)?;
    log::debug!("{FORMAT}: injected {} bytes, checksum sum 0x{sum:04X}", payload.len());

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&header);
    out.extend_from_slice(payload);
    Ok(out)
}

/// `round(len / 1024)`, saturating at `u16::MAX`.
fn size_in_kib(len: usize) -> u16 {
    u16::try_from((len + 512) / 1024).unwrap_or(u16::MAX)
}

#[cfg(test)]
#[path = "tests/snes_vc_tests.rs"]
mod tests;
