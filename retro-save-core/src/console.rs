use serde::{Deserialize, Serialize};

const KB: usize = 1024;

/// Consoles whose saves the container codecs understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Console {
    Nes,
    Snes,
    N64,
    Gba,
}

const ALL_CONSOLES: &[Console] = &[Console::Nes, Console::Snes, Console::N64, Console::Gba];

impl Console {
    /// Canonical short name used in options files and identifiers.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Nes => "nes",
            Self::Snes => "snes",
            Self::N64 => "n64",
            Self::Gba => "gba",
        }
    }

    /// Full display name for the console.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Nes => "Nintendo Entertainment System",
            Self::Snes => "Super Nintendo Entertainment System",
            Self::N64 => "Nintendo 64",
            Self::Gba => "Game Boy Advance",
        }
    }

    /// All accepted names for this console (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Nes => &["nes", "famicom", "fc"],
            Self::Snes => &["snes", "sfc", "super famicom", "super nintendo"],
            Self::N64 => &["n64", "nintendo 64", "nintendo64"],
            Self::Gba => &["gba", "game boy advance", "gameboy advance"],
        }
    }

    /// Raw save sizes this console's cartridges use, largest first.
    ///
    /// NES: battery SRAM. SNES: SRAM. N64: EEPROM 4K/16K, SRAM, FlashRAM.
    /// GBA: the sizes Virtual Console exports (SRAM/Flash 64K).
    pub fn save_sizes(&self) -> &'static [usize] {
        match self {
            Self::Nes => &[32 * KB, 16 * KB, 8 * KB, 4 * KB, 2 * KB, KB, 512],
            Self::Snes => &[128 * KB, 64 * KB, 32 * KB, 8 * KB, 2 * KB],
            Self::N64 => &[128 * KB, 32 * KB, 2 * KB, 512],
            Self::Gba => &[64 * KB, 32 * KB, 8 * KB],
        }
    }

    /// True if `len` is one of [`save_sizes`](Self::save_sizes).
    pub fn is_save_size(&self, len: usize) -> bool {
        self.save_sizes().contains(&len)
    }

    pub fn all() -> &'static [Console] {
        ALL_CONSOLES
    }
}

impl std::fmt::Display for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Console`.
#[derive(Debug, Clone)]
pub struct ConsoleParseError(pub String);

impl std::fmt::Display for ConsoleParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown console: '{}'", self.0)
    }
}

impl std::error::Error for ConsoleParseError {}

impl std::str::FromStr for Console {
    type Err = ConsoleParseError;

    /// Parse a console from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ALL_CONSOLES
            .iter()
            .copied()
            .find(|console| console.aliases().contains(&lower.as_str()))
            .ok_or_else(|| ConsoleParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
