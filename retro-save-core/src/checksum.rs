//! Checksum algorithms that save containers embed in their headers.

use serde::Serialize;

use crate::error::{ContainerError, Result};

/// Checksum algorithms used by the supported containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChecksumAlgorithm {
    /// SharkPortSave rolling accumulator over `[secondHeader ++ raw]`
    SharkPortRolling,
    /// Virtual Console 16-bit additive sum, stored swapped with the high
    /// byte decremented (NES and SNES VC headers)
    VcAdditive16,
}

impl ChecksumAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SharkPortRolling => "SharkPort rolling",
            Self::VcAdditive16 => "VC additive-16",
        }
    }
}

/// A checksum as stored in a container next to the value recomputed from
/// the bytes it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecksumReport {
    pub algorithm: ChecksumAlgorithm,
    pub stored: u32,
    pub computed: u32,
}

impl ChecksumReport {
    pub fn new(algorithm: ChecksumAlgorithm, stored: u32, computed: u32) -> Self {
        Self {
            algorithm,
            stored,
            computed,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.stored == self.computed
    }
}

// ---------------------------------------------------------------------------
// SharkPortSave rolling CRC
// ---------------------------------------------------------------------------

/// Rolling CRC used by SharkPortSave containers.
///
/// For each byte: `crc = crc + (byte << (crc % 18))`, wrapping at 32 bits.
/// The shift amount depends on the running value, not the byte position.
pub fn sharkport_crc(data: &[u8]) -> u32 {
    data.iter().fold(0u32, |crc, &b| crc.wrapping_add((b as u32) << (crc % 18)))
}

// ---------------------------------------------------------------------------
// Virtual Console additive checksum
// ---------------------------------------------------------------------------

/// Sum every byte of `header` and `payload`, modulo 2^16.
///
/// The caller is responsible for zeroing the checksum slot in `header`.
pub fn vc_additive_sum(header: &[u8], payload: &[u8]) -> u16 {
    let sum16 = |buf: &[u8]| buf.iter().fold(0u16, |acc, &b| acc.wrapping_add(b as u16));
    sum16(header).wrapping_add(sum16(payload))
}

/// Encode an additive sum into the two bytes stored at header 0x02..0x04.
///
/// The sum's bytes are swapped and the new high byte is decremented:
/// `[lo - 1, hi]`.
pub fn encode_vc_checksum(sum: u16) -> [u8; 2] {
    let [hi, lo] = sum.to_be_bytes();
    [lo.wrapping_sub(1), hi]
}

/// Zero the checksum slot of `header`, sum header and payload, and write the
/// encoded checksum back into 0x02..0x04. Returns the raw sum.
///
/// Fails with `TooSmall` if `header` has no room for the checksum slot.
pub fn apply_vc_checksum(header: &mut [u8], payload: &[u8]) -> Result<u16> {
    if header.len() < 0x04 {
        return Err(ContainerError::TooSmall {
            expected: 0x04,
            actual: header.len(),
        });
    }
    header[0x02] = 0x00;
    header[0x03] = 0x00;
    let sum = vc_additive_sum(header, payload);
    header[0x02..0x04].copy_from_slice(&encode_vc_checksum(sum));
    log::trace!("VC checksum sum=0x{sum:04X} stored={:02X?}", &header[0x02..0x04]);
    Ok(sum)
}

#[cfg(test)]
#[path = "tests/checksum_tests.rs"]
mod tests;
