//! Closed set of container formats with identify-then-decode dispatch.

use std::fmt;

use serde::Serialize;

use retro_save_core::{CodecOptions, Console, ContainerError, Result};

use crate::{gba_gssp, gba_sharkport, gba_wiiu, n64_dexdrive, nes_wiiu, snes_vc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerFormat {
    /// GameShark SP (GBA)
    GsSp,
    /// SharkPortSave (GBA)
    SharkPort,
    /// Wii U Virtual Console GBA
    WiiUGba,
    /// Wii U Virtual Console NES
    WiiUNes,
    /// Wii U / 3DS Virtual Console SNES
    WiiUSnes3ds,
    /// DexDrive (N64)
    DexDrive,
    /// No container; the buffer is the save.
    Raw,
}

impl ContainerFormat {
    pub fn all() -> &'static [ContainerFormat] {
        &[
            ContainerFormat::GsSp,
            ContainerFormat::SharkPort,
            ContainerFormat::WiiUGba,
            ContainerFormat::WiiUNes,
            ContainerFormat::WiiUSnes3ds,
            ContainerFormat::DexDrive,
            ContainerFormat::Raw,
        ]
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            ContainerFormat::GsSp => "gssp",
            ContainerFormat::SharkPort => "sps",
            ContainerFormat::WiiUGba => "wiiu-gba",
            ContainerFormat::WiiUNes => "wiiu-nes",
            ContainerFormat::WiiUSnes3ds => "vc-snes",
            ContainerFormat::DexDrive => "dexdrive",
            ContainerFormat::Raw => "raw",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContainerFormat::GsSp => "GameShark SP",
            ContainerFormat::SharkPort => "SharkPortSave",
            ContainerFormat::WiiUGba => "Wii U VC GBA",
            ContainerFormat::WiiUNes => "Wii U VC NES",
            ContainerFormat::WiiUSnes3ds => "Wii U / 3DS VC SNES",
            ContainerFormat::DexDrive => "DexDrive",
            ContainerFormat::Raw => "Raw save",
        }
    }

    /// Console whose saves the format carries. `None` for `Raw`.
    pub fn console(&self) -> Option<Console> {
        match self {
            ContainerFormat::GsSp | ContainerFormat::SharkPort | ContainerFormat::WiiUGba => {
                Some(Console::Gba)
            }
            ContainerFormat::WiiUNes => Some(Console::Nes),
            ContainerFormat::WiiUSnes3ds => Some(Console::Snes),
            ContainerFormat::DexDrive => Some(Console::N64),
            ContainerFormat::Raw => None,
        }
    }

    fn identify(&self, buf: &[u8]) -> bool {
        match self {
            ContainerFormat::GsSp => gba_gssp::identify(buf),
            ContainerFormat::SharkPort => gba_sharkport::identify(buf),
            ContainerFormat::WiiUGba => gba_wiiu::identify(buf),
            ContainerFormat::WiiUNes => nes_wiiu::identify(buf),
            ContainerFormat::WiiUSnes3ds => snes_vc::identify(buf),
            ContainerFormat::DexDrive => n64_dexdrive::identify(buf),
            ContainerFormat::Raw => true,
        }
    }

    /// First signature-bearing format that identifies `buf`, else `Raw`.
    ///
    /// Wii U NES has no magic and is only tried by [`detect_for`](Self::detect_for).
    pub fn detect(buf: &[u8]) -> ContainerFormat {
        const ORDER: &[ContainerFormat] = &[
            ContainerFormat::GsSp,
            ContainerFormat::SharkPort,
            ContainerFormat::WiiUGba,
            ContainerFormat::WiiUSnes3ds,
            ContainerFormat::DexDrive,
        ];
        let format = ORDER
            .iter()
            .copied()
            .find(|f| f.identify(buf))
            .unwrap_or(ContainerFormat::Raw);
        log::debug!("Detected {} ({} bytes)", format.display_name(), buf.len());
        format
    }

    /// Try only the formats of `console`, in priority order.
    ///
    /// A SharkPortSave match under an `.xps` filename is reported as
    /// `UnsupportedVariant`.
    pub fn detect_for(console: Console, buf: &[u8], options: &CodecOptions) -> Result<Self> {
        let candidates: &[ContainerFormat] = match console {
            Console::Gba => &[
                ContainerFormat::GsSp,
                ContainerFormat::SharkPort,
                ContainerFormat::WiiUGba,
            ],
            Console::Nes => &[ContainerFormat::WiiUNes],
            Console::Snes => &[ContainerFormat::WiiUSnes3ds],
            Console::N64 => &[ContainerFormat::DexDrive],
        };
        let format = candidates
            .iter()
            .copied()
            .find(|f| f.identify(buf))
            .unwrap_or(ContainerFormat::Raw);
        if format == ContainerFormat::SharkPort && options.is_action_replay_xps() {
            return Err(ContainerError::unsupported(
                "Action Replay (.xps) container is not a SharkPortSave",
            ));
        }
        log::debug!(
            "Detected {} for {} ({} bytes)",
            format.display_name(),
            console.short_name(),
            buf.len()
        );
        Ok(format)
    }

    /// Extract the raw save from a container of this format.
    pub fn decode(&self, buf: &[u8], options: &CodecOptions) -> Result<Vec<u8>> {
        match self {
            ContainerFormat::GsSp => gba_gssp::decode(buf),
            ContainerFormat::SharkPort => gba_sharkport::decode(buf, options),
            ContainerFormat::WiiUGba => gba_wiiu::decode(buf),
            ContainerFormat::WiiUNes => nes_wiiu::decode(buf),
            ContainerFormat::WiiUSnes3ds => snes_vc::decode(buf),
            ContainerFormat::DexDrive => n64_dexdrive::decode(buf),
            ContainerFormat::Raw => Ok(buf.to_vec()),
        }
    }

    /// Place `payload` into `container`, borrowing its header.
    pub fn inject(&self, container: &[u8], payload: &[u8], options: &CodecOptions) -> Result<Vec<u8>> {
        match self {
            ContainerFormat::GsSp => gba_gssp::inject(container, payload),
            ContainerFormat::SharkPort => gba_sharkport::inject(container, payload, options),
            ContainerFormat::WiiUGba => gba_wiiu::inject(container, payload),
            ContainerFormat::WiiUNes => nes_wiiu::inject(container, payload),
            ContainerFormat::WiiUSnes3ds => snes_vc::inject(container, payload, &options.snes),
            ContainerFormat::DexDrive => n64_dexdrive::inject(container, payload),
            ContainerFormat::Raw => Ok(payload.to_vec()),
        }
    }
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Describe
// ---------------------------------------------------------------------------

/// Summary of a decoded container. The CRC-32 identifies the same save
/// across different containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerInfo {
    pub format: ContainerFormat,
    pub container_size: usize,
    pub payload_size: usize,
    pub payload_crc32: String,
}

pub fn describe(format: ContainerFormat, buf: &[u8], options: &CodecOptions) -> Result<ContainerInfo> {
    let payload = format.decode(buf, options)?;
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&payload);
    Ok(ContainerInfo {
        format,
        container_size: buf.len(),
        payload_size: payload.len(),
        payload_crc32: format!("{:08x}", hasher.finalize()),
    })
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
