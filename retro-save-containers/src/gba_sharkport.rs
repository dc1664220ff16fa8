//! GameShark / Action Replay (non-SP) "SharkPortSave" container for GBA.
//!
//! Little-endian, length-prefixed layout:
//!
//! ```text
//! u32 tag_len ; "SharkPortSave"
//! u32 platform                  (0x000F0000 = GBA)
//! u32 title_len ; title
//! u32 date_len  ; date
//! u32 notes_len ; notes
//! u32 sec_plus_raw_len          (0x1C-byte second header + raw save)
//! u8[0x1C] second header
//! u8[..]   raw save
//! u32 crc                       (rolling CRC over second header ++ raw)
//! ```
//!
//! Action Replay `.xps` files share the layout but are not decodable here;
//! they are rejected by filename before any parsing.

use serde::Serialize;

use retro_save_core::checksum::{ChecksumAlgorithm, ChecksumReport, sharkport_crc};
use retro_save_core::util::{decode_ascii, encode_ascii, read_bytes, read_u32_le};
use retro_save_core::{CodecOptions, ContainerError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const TAG: &[u8; 13] = b"SharkPortSave";
pub const PLATFORM_GBA: u32 = 0x000F_0000;
pub const SECOND_HEADER_LEN: usize = 0x1C;

const INTERNAL_NAME_LEN: usize = 0x10;
const DEFAULT_MAKER: u8 = 0x30;
const DEFAULT_FLAG: u8 = 0x01;

const FORMAT: &str = "SharkPortSave";

// ---------------------------------------------------------------------------
// Second header
// ---------------------------------------------------------------------------

/// Sub-fields of the 0x1C-byte second header (a copy of parts of the GBA
/// cartridge header).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondHeaderFields {
    /// Internal game name, 16 bytes on disk (padded or truncated).
    pub internal_name: String,
    pub rom_checksum: u16,
    pub rom_complement_check: u8,
    pub maker: u8,
    pub flag: u8,
}

impl Default for SecondHeaderFields {
    fn default() -> Self {
        Self {
            internal_name: String::new(),
            rom_checksum: 0,
            rom_complement_check: 0,
            maker: DEFAULT_MAKER,
            flag: DEFAULT_FLAG,
        }
    }
}

impl SecondHeaderFields {
    fn parse(sec: &[u8; SECOND_HEADER_LEN]) -> Self {
        Self {
            internal_name: decode_ascii(&sec[..INTERNAL_NAME_LEN]),
            rom_checksum: u16::from_le_bytes([sec[0x10], sec[0x11]]),
            rom_complement_check: sec[0x12],
            maker: sec[0x13],
            flag: sec[0x14],
        }
    }

    /// Lay the fields out into a zero-filled second header.
    pub fn to_bytes(&self) -> [u8; SECOND_HEADER_LEN] {
        let mut sec = [0u8; SECOND_HEADER_LEN];
        let name = encode_ascii(&self.internal_name);
        let n = name.len().min(INTERNAL_NAME_LEN);
        sec[..n].copy_from_slice(&name[..n]);
        sec[0x10..0x12].copy_from_slice(&self.rom_checksum.to_le_bytes());
        sec[0x12] = self.rom_complement_check;
        sec[0x13] = self.maker;
        sec[0x14] = self.flag;
        sec
    }
}

/// Source of the second header when building a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondHeader {
    /// Exact bytes, re-embedded verbatim.
    Bytes([u8; SECOND_HEADER_LEN]),
    /// Synthesized from sub-fields.
    Fields(SecondHeaderFields),
}

impl SecondHeader {
    /// Wrap an exact second header; `bytes` must be 0x1C long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let sec: [u8; SECOND_HEADER_LEN] =
            bytes.try_into().map_err(|_| ContainerError::SizeMismatch {
                expected: format!("{SECOND_HEADER_LEN}-byte second header"),
                actual: bytes.len(),
            })?;
        Ok(Self::Bytes(sec))
    }

    pub fn to_bytes(&self) -> [u8; SECOND_HEADER_LEN] {
        match self {
            Self::Bytes(sec) => *sec,
            Self::Fields(fields) => fields.to_bytes(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsed container
// ---------------------------------------------------------------------------

/// Byte offsets of the payload regions inside a parsed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Positions {
    pub sec_start: usize,
    pub sec_end: usize,
    pub raw_start: usize,
    pub raw_end: usize,
    pub crc_offset: usize,
}

/// A fully parsed SharkPortSave container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharkPortSave {
    pub title: String,
    pub date: String,
    pub notes: String,
    pub platform: u32,
    pub positions: Positions,
    pub second_header: [u8; SECOND_HEADER_LEN],
    pub second_header_fields: SecondHeaderFields,
    /// CRC stored in the file next to the one recomputed from its bytes.
    /// A mismatch is reported, not rejected.
    pub crc: ChecksumReport,
    pub raw: Vec<u8>,
}

/// Everything needed to build a container from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharkPortParts {
    pub title: String,
    pub date: String,
    pub notes: String,
    pub second_header: SecondHeader,
    pub raw: Vec<u8>,
}

/// Sequential little-endian reader over the container.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn u32(&mut self) -> Result<u32> {
        let v = read_u32_le(self.buf, self.pos)?;
        self.pos += 4;
        Ok(v)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = read_bytes(self.buf, self.pos, len)?;
        self.pos += len;
        Ok(bytes)
    }

    /// A u32 length prefix followed by that many ASCII bytes.
    fn string(&mut self) -> Result<String> {
        let len = self.u32()? as usize;
        Ok(decode_ascii(self.take(len)?))
    }
}

// ---------------------------------------------------------------------------
// Identify / parse / decode
// ---------------------------------------------------------------------------

/// Fast check of the tag and platform code. The rest of the file is not
/// examined.
pub fn identify(buf: &[u8]) -> bool {
    let Ok(tag_len) = read_u32_le(buf, 0) else {
        return false;
    };
    let tag_len = tag_len as usize;
    if tag_len == 0 || read_bytes(buf, 4, tag_len).ok() != Some(TAG.as_slice()) {
        return false;
    }
    read_u32_le(buf, 4 + tag_len).is_ok_and(|platform| platform == PLATFORM_GBA)
}

/// Strictly parse every field of the container.
pub fn parse(container: &[u8]) -> Result<SharkPortSave> {
    let mut cur = Cursor::new(container);

    let tag_len = cur
        .u32()
        .map_err(|_| ContainerError::not_this_format(FORMAT, "missing tag length"))?;
    match cur.take(tag_len as usize) {
        Ok(tag) if tag == TAG => {}
        _ => return Err(ContainerError::not_this_format(FORMAT, "SharkPortSave tag missing")),
    }

    let platform = cur.u32()?;
    if platform != PLATFORM_GBA {
        return Err(ContainerError::not_this_format(
            FORMAT,
            format!("platform code 0x{platform:08X} is not GBA (0x{PLATFORM_GBA:08X})"),
        ));
    }

    let title = cur.string()?;
    let date = cur.string()?;
    let notes = cur.string()?;

    let sec_plus_raw_len = cur.u32()? as usize;
    if sec_plus_raw_len < SECOND_HEADER_LEN {
        return Err(ContainerError::invalid_length(format!(
            "second header + save length {sec_plus_raw_len} is smaller than the \
             {SECOND_HEADER_LEN}-byte second header"
        )));
    }

    let sec_start = cur.pos;
    let sec_end = sec_start + SECOND_HEADER_LEN;
    let raw_end = sec_start
        .checked_add(sec_plus_raw_len)
        .ok_or_else(|| ContainerError::invalid_length("payload length overflows"))?;
    let needed = raw_end.saturating_add(4);
    if needed > container.len() {
        return Err(ContainerError::TruncatedPayload {
            needed,
            actual: container.len(),
        });
    }

    let mut second_header = [0u8; SECOND_HEADER_LEN];
    second_header.copy_from_slice(&container[sec_start..sec_end]);

    let stored = read_u32_le(container, raw_end)?;
    let computed = sharkport_crc(&container[sec_start..raw_end]);
    if stored != computed {
        log::warn!(
            "SharkPortSave CRC mismatch: stored 0x{stored:08X}, computed 0x{computed:08X}"
        );
    }

    let fields = SecondHeaderFields::parse(&second_header);

    Ok(SharkPortSave {
        title,
        date,
        notes,
        platform,
        positions: Positions {
            sec_start,
            sec_end,
            raw_start: sec_end,
            raw_end,
            crc_offset: raw_end,
        },
        second_header,
        second_header_fields: fields,
        crc: ChecksumReport::new(ChecksumAlgorithm::SharkPortRolling, stored, computed),
        raw: container[sec_end..raw_end].to_vec(),
    })
}

fn reject_xps(options: &CodecOptions) -> Result<()> {
    if options.is_action_replay_xps() {
        return Err(ContainerError::unsupported("Action Replay (.xps) is unsupported"));
    }
    Ok(())
}

/// Return the raw save. `.xps` filenames are rejected before parsing.
pub fn decode(container: &[u8], options: &CodecOptions) -> Result<Vec<u8>> {
    reject_xps(options)?;
    Ok(parse(container)?.raw)
}

// ---------------------------------------------------------------------------
// Encode / inject
// ---------------------------------------------------------------------------

fn len_u32(len: usize, what: &str) -> Result<[u8; 4]> {
    u32::try_from(len)
        .map(u32::to_le_bytes)
        .map_err(|_| ContainerError::invalid_length(format!("{what} length {len} exceeds u32")))
}

fn push_string(out: &mut Vec<u8>, s: &str, what: &str) -> Result<()> {
    let bytes = encode_ascii(s);
    out.extend_from_slice(&len_u32(bytes.len(), what)?);
    out.extend_from_slice(&bytes);
    Ok(())
}

/// Build a complete container, computing the payload length and CRC.
pub fn encode_from_parts(parts: &SharkPortParts) -> Result<Vec<u8>> {
    let sec = parts.second_header.to_bytes();

    let mut out = Vec::with_capacity(64 + SECOND_HEADER_LEN + parts.raw.len());
    out.extend_from_slice(&(TAG.len() as u32).to_le_bytes());
    out.extend_from_slice(TAG);
    out.extend_from_slice(&PLATFORM_GBA.to_le_bytes());
    push_string(&mut out, &parts.title, "title")?;
    push_string(&mut out, &parts.date, "date")?;
    push_string(&mut out, &parts.notes, "notes")?;
    out.extend_from_slice(&len_u32(SECOND_HEADER_LEN + parts.raw.len(), "payload")?);

    let sec_start = out.len();
    out.extend_from_slice(&sec);
    out.extend_from_slice(&parts.raw);
    let crc = sharkport_crc(&out[sec_start..]);
    out.extend_from_slice(&crc.to_le_bytes());
    Ok(out)
}

/// Rebuild `container` around `raw`, keeping its title, date, notes and
/// second header verbatim.
pub fn inject(container: &[u8], raw: &[u8], options: &CodecOptions) -> Result<Vec<u8>> {
    reject_xps(options)?;
    let parsed = parse(container)?;
    encode_from_parts(&SharkPortParts {
        title: parsed.title,
        date: parsed.date,
        notes: parsed.notes,
        second_header: SecondHeader::Bytes(parsed.second_header),
        raw: raw.to_vec(),
    })
}

// ---------------------------------------------------------------------------
// Bank analysis
// ---------------------------------------------------------------------------

/// Whether a payload is two mirrored copies of the same bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BankAnalysis {
    pub bank_size: usize,
    pub banks: usize,
    pub mirrors: bool,
    pub diff_bytes: usize,
}

/// Split an even-length payload into two halves and compare them.
/// Odd-length payloads are a single bank with no mirroring claim.
pub fn analyze_banks(raw: &[u8]) -> BankAnalysis {
    let n = raw.len();
    if n == 0 {
        return BankAnalysis {
            banks: 1,
            ..BankAnalysis::default()
        };
    }
    if !n.is_multiple_of(2) {
        return BankAnalysis {
            bank_size: n,
            banks: 1,
            ..BankAnalysis::default()
        };
    }
    let (a, b) = raw.split_at(n / 2);
    let diff_bytes = a.iter().zip(b).filter(|(x, y)| x != y).count();
    BankAnalysis {
        bank_size: n / 2,
        banks: 2,
        mirrors: diff_bytes == 0,
        diff_bytes,
    }
}

/// Header text and bank analysis of a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharkPortSummary {
    pub title: String,
    pub date: String,
    pub notes: String,
    pub second_header: SecondHeaderFields,
    pub banks: BankAnalysis,
}

pub fn analyze_container(container: &[u8]) -> Result<SharkPortSummary> {
    let parsed = parse(container)?;
    let banks = analyze_banks(&parsed.raw);
    Ok(SharkPortSummary {
        title: parsed.title,
        date: parsed.date,
        notes: parsed.notes,
        second_header: parsed.second_header_fields,
        banks,
    })
}

#[cfg(test)]
#[path = "tests/gba_sharkport_tests.rs"]
mod tests;
