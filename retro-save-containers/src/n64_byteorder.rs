//! N64 save byte-order permutations.
//!
//! Emulators and flash carts disagree on how EEPROM/SRAM/FlashRAM images
//! are stored. A raw save can be re-laid out in four canonical orderings;
//! each is its own inverse.

use retro_save_core::util::{swap_endian, swap_words};
use retro_save_core::Result;

/// Byte ordering of an N64 save image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveByteOrder {
    /// As dumped, no permutation.
    Original,
    /// Byte pairs swapped: `[A,B,C,D]` → `[B,A,D,C]`
    EndianSwapped,
    /// 16-bit halves swapped in each 32-bit word: `[A,B,C,D]` → `[C,D,A,B]`
    WordSwapped,
    /// Both: `[A,B,C,D]` → `[D,C,B,A]`
    EndianAndWordSwapped,
}

impl SaveByteOrder {
    pub fn all() -> &'static [SaveByteOrder] {
        &[
            SaveByteOrder::Original,
            SaveByteOrder::EndianSwapped,
            SaveByteOrder::WordSwapped,
            SaveByteOrder::EndianAndWordSwapped,
        ]
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            SaveByteOrder::Original => "original",
            SaveByteOrder::EndianSwapped => "endian-swapped",
            SaveByteOrder::WordSwapped => "word-swapped",
            SaveByteOrder::EndianAndWordSwapped => "endian-and-word-swapped",
        }
    }
}

/// Re-lay out `raw` in the given ordering.
///
/// Fails with `MisalignedLength` unless `raw` is a multiple of 2 bytes
/// (endian swap) or 4 bytes (anything involving a word swap).
pub fn to_byte_order(raw: &[u8], order: SaveByteOrder) -> Result<Vec<u8>> {
    match order {
        SaveByteOrder::Original => Ok(raw.to_vec()),
        SaveByteOrder::EndianSwapped => swap_endian(raw, 2),
        SaveByteOrder::EndianAndWordSwapped => swap_words(&swap_endian(raw, 2)?, 2),
        // undo the endian half of the combined permutation
        SaveByteOrder::WordSwapped => {
            swap_endian(&to_byte_order(raw, SaveByteOrder::EndianAndWordSwapped)?, 2)
        }
    }
}

/// All four orderings of one raw save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct N64Variants {
    pub original: Vec<u8>,
    pub endian_swapped: Vec<u8>,
    pub word_swapped: Vec<u8>,
    pub endian_and_word_swapped: Vec<u8>,
}

impl N64Variants {
    pub fn get(&self, order: SaveByteOrder) -> &[u8] {
        match order {
            SaveByteOrder::Original => &self.original,
            SaveByteOrder::EndianSwapped => &self.endian_swapped,
            SaveByteOrder::WordSwapped => &self.word_swapped,
            SaveByteOrder::EndianAndWordSwapped => &self.endian_and_word_swapped,
        }
    }

    /// `(order, bytes)` pairs in `SaveByteOrder::all()` order.
    pub fn iter(&self) -> impl Iterator<Item = (SaveByteOrder, &[u8])> {
        SaveByteOrder::all().iter().map(move |&order| (order, self.get(order)))
    }
}

pub fn make_variants(raw: &[u8]) -> Result<N64Variants> {
    Ok(N64Variants {
        original: to_byte_order(raw, SaveByteOrder::Original)?,
        endian_swapped: to_byte_order(raw, SaveByteOrder::EndianSwapped)?,
        word_swapped: to_byte_order(raw, SaveByteOrder::WordSwapped)?,
        endian_and_word_swapped: to_byte_order(raw, SaveByteOrder::EndianAndWordSwapped)?,
    })
}

#[cfg(test)]
#[path = "tests/n64_byteorder_tests.rs"]
mod tests;
