//! Shared building blocks for save-container codecs: byte primitives,
//! the error taxonomy, checksum algorithms, console identifiers, and
//! codec options.

pub mod checksum;
pub mod console;
pub mod error;
pub mod options;
pub mod save;
pub mod util;

pub use checksum::{ChecksumAlgorithm, ChecksumReport};
pub use console::{Console, ConsoleParseError};
pub use error::{ContainerError, Result};
pub use options::{CodecOptions, SnesHeaderOptions};
pub use save::SaveBuffer;
