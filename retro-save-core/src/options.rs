//! Options consumed by decode/inject.
//!
//! Options can be built in code or loaded from a TOML document:
//!
//! ```toml
//! filename = "pokemon.sps"
//!
//! [snes]
//! preset_id = 0x10
//! update_size_kib = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Header fields the SNES Virtual Console codec may rewrite on inject.
///
/// Fields left unset keep the value copied from the original header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnesHeaderOptions {
    /// Preset ID written as u16 LE at header offset 0x04.
    pub preset_id: Option<u16>,
    /// Write `round(payload_len / 1024)` as u16 LE at header offset 0x18.
    pub update_size_kib: bool,
}

/// Options that control how containers are decoded and injected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Name of the file the container came from. Only its extension is
    /// consulted, to reject Action Replay `.xps` containers.
    pub filename: Option<String>,

    /// SNES VC header rewrites.
    pub snes: SnesHeaderOptions,
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filename(mut self, name: impl Into<String>) -> Self {
        self.filename = Some(name.into());
        self
    }

    pub fn snes_preset_id(mut self, preset_id: u16) -> Self {
        self.snes.preset_id = Some(preset_id);
        self
    }

    pub fn snes_update_size_kib(mut self, update: bool) -> Self {
        self.snes.update_size_kib = update;
        self
    }

    /// Parse options from a TOML document. Missing keys take defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// True if the originating filename carries the `.xps` extension.
    pub fn is_action_replay_xps(&self) -> bool {
        self.filename
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xps"))
    }
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
