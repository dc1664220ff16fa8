//! Virtual Console container router.
//!
//! SNES and GBA Virtual Console containers overlap enough that a lone
//! signature check can match more than one codec. `detect_vc_kind` tries
//! them in a fixed priority order and the first match wins:
//!
//! 1. SNES VC (magic at 0x10, Wii U and 3DS)
//! 2. Wii U SNES with a short header
//! 3. Wii U GBA (`STATRAM0` at 0x4000)
//! 4. Headerless Wii U GBA `.bin` (span locator)

use std::fmt;

use serde::Serialize;

use retro_save_core::util::has_magic_at;
use retro_save_core::{ContainerError, Result, SnesHeaderOptions};

use crate::{gba_span, gba_wiiu, snes_small_header, snes_vc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VcKind {
    SnesVc,
    SnesWiiUSmallHeader,
    GbaWiiU,
    GbaWiiUBin,
    Unknown,
}

impl VcKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            VcKind::SnesVc => "SNES Virtual Console",
            VcKind::SnesWiiUSmallHeader => "Wii U SNES (small header)",
            VcKind::GbaWiiU => "Wii U GBA",
            VcKind::GbaWiiUBin => "Wii U GBA (headerless .bin)",
            VcKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for VcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

pub fn detect_vc_kind(buf: &[u8]) -> VcKind {
    let kind = if snes_vc::identify(buf) {
        VcKind::SnesVc
    } else if snes_small_header::identify(buf) {
        VcKind::SnesWiiUSmallHeader
    } else if gba_wiiu::identify(buf) {
        VcKind::GbaWiiU
    } else if !has_magic_at(buf, gba_wiiu::MAGIC_OFFSET, gba_wiiu::MAGIC)
        && gba_span::identify(buf)
    {
        VcKind::GbaWiiUBin
    } else {
        VcKind::Unknown
    };
    log::debug!("VC router: {} bytes detected as {kind}", buf.len());
    kind
}

fn unknown() -> ContainerError {
    ContainerError::not_this_format("Virtual Console", "no VC container signature matched")
}

pub fn decode_vc(buf: &[u8]) -> Result<Vec<u8>> {
    match detect_vc_kind(buf) {
        VcKind::SnesVc => snes_vc::decode(buf),
        VcKind::SnesWiiUSmallHeader => snes_small_header::decode(buf),
        VcKind::GbaWiiU => gba_wiiu::decode(buf),
        VcKind::GbaWiiUBin => gba_span::decode(buf),
        VcKind::Unknown => Err(unknown()),
    }
}

/// Detect the container kind, then inject `payload` with the matching codec.
/// `snes` only affects SNES VC containers.
pub fn inject_vc(container: &[u8], payload: &[u8], snes: &SnesHeaderOptions) -> Result<Vec<u8>> {
    match detect_vc_kind(container) {
        VcKind::SnesVc => snes_vc::inject(container, payload, snes),
        VcKind::SnesWiiUSmallHeader => snes_small_header::inject(container, payload),
        VcKind::GbaWiiU => gba_wiiu::inject(container, payload),
        VcKind::GbaWiiUBin => gba_span::inject(container, payload),
        VcKind::Unknown => Err(unknown()),
    }
}

#[cfg(test)]
#[path = "tests/vc_tests.rs"]
mod tests;
