//! Save-game container codecs.
//!
//! Each codec module exposes free functions over byte slices:
//!
//! - `identify(buf) -> bool`, a cheap check that never fails
//! - `decode(container) -> Result<Vec<u8>>`, extracting the raw save
//! - `inject(container, payload) -> Result<Vec<u8>>`, rebuilding the
//!   container around a new save
//!
//! Supported containers:
//!
//! - GameShark SP and SharkPortSave (GBA)
//! - Wii U Virtual Console GBA, including headerless `.bin` dumps
//! - Wii U Virtual Console NES
//! - Wii U / 3DS Virtual Console SNES
//! - DexDrive (N64)
//!
//! [`ContainerFormat`] ties them together behind a detect-then-decode API,
//! and [`vc`] routes among the overlapping Virtual Console formats.

pub mod format;
pub mod gba_gssp;
pub mod gba_sharkport;
pub mod gba_span;
pub mod gba_wiiu;
pub mod n64_byteorder;
pub mod n64_dexdrive;
pub mod nes_wiiu;
pub mod snes_small_header;
pub mod snes_vc;
pub mod vc;

pub use format::{ContainerFormat, ContainerInfo, describe};
pub use n64_byteorder::{N64Variants, SaveByteOrder, make_variants};
pub use vc::{VcKind, decode_vc, detect_vc_kind, inject_vc};

pub use retro_save_core::{CodecOptions, Console, ContainerError, Result, SnesHeaderOptions};
