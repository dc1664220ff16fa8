//! Payload-span locator for headerless or ambiguous Wii U GBA `.bin` dumps.
//!
//! Some dump tools emit the save surrounded by 0x00/0xFF padding with no
//! reliable header. The save is taken to be the longest run of non-padding
//! bytes, and that run must be exactly one of the canonical GBA save sizes.

use retro_save_core::util::is_padding_byte;
use retro_save_core::{Console, ContainerError, Result};

/// A contiguous byte range inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Longest run of bytes that are neither 0x00 nor 0xFF. The earliest run
/// wins ties.
pub fn find_longest_non_padding_run(buf: &[u8]) -> Option<Span> {
    let mut best: Option<Span> = None;
    let mut run_start = 0;
    let mut run_len = 0;
    for (i, &b) in buf.iter().enumerate() {
        if is_padding_byte(b) {
            run_len = 0;
            continue;
        }
        if run_len == 0 {
            run_start = i;
        }
        run_len += 1;
        if best.is_none_or(|s| run_len > s.len) {
            best = Some(Span {
                start: run_start,
                len: run_len,
            });
        }
    }
    best
}

/// Locate the save span and require a canonical GBA save size.
pub fn locate_payload(container: &[u8]) -> Result<Span> {
    let span = find_longest_non_padding_run(container).ok_or_else(|| {
        ContainerError::span_not_found("container holds only 0x00/0xFF padding")
    })?;
    if !Console::Gba.is_save_size(span.len) {
        return Err(ContainerError::size_mismatch(
            Console::Gba.save_sizes(),
            span.len,
        ));
    }
    log::trace!("GBA payload span at 0x{:X}, {} bytes", span.start, span.len);
    Ok(span)
}

/// True if the container carries a canonical-size span with bytes around it.
pub fn identify(buf: &[u8]) -> bool {
    locate_payload(buf).is_ok_and(|span| span.len < buf.len())
}

pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    let span = locate_payload(container)?;
    Ok(container[span.start..span.end()].to_vec())
}

/// Replace the located span with `payload`.
///
/// `payload` must be a canonical GBA save size and match the located span.
/// A container that is exactly `payload`-sized is a bare save and is
/// replaced wholesale.
pub fn inject(container: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    if !Console::Gba.is_save_size(payload.len()) {
        return Err(ContainerError::size_mismatch(
            Console::Gba.save_sizes(),
            payload.len(),
        ));
    }
    if container.len() == payload.len() {
        return Ok(payload.to_vec());
    }

    let span = find_longest_non_padding_run(container).ok_or_else(|| {
        ContainerError::span_not_found("no non-padding run in container")
    })?;
    if span.len != payload.len() {
        return Err(ContainerError::SizeMismatch {
            expected: format!("{} bytes (located container payload)", span.len),
            actual: payload.len(),
        });
    }

    let mut out = Vec::with_capacity(container.len());
    out.extend_from_slice(&container[..span.start]);
    out.extend_from_slice(payload);
    out.extend_from_slice(&container[span.end()..]);
    Ok(out)
}

#[cfg(test)]
#[path = "tests/gba_span_tests.rs"]
mod tests;
