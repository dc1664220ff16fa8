use thiserror::Error;

/// Errors raised while decoding or injecting save containers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// The buffer does not carry the signature of the requested format
    #[error("Not a {format} container: {reason}")]
    NotThisFormat {
        format: &'static str,
        reason: String,
    },

    /// A fixed-width read ran past the end of the buffer
    #[error("Truncated input: {width}-byte read at offset {offset} exceeds buffer of {len} bytes")]
    TruncatedInput {
        offset: usize,
        width: usize,
        len: usize,
    },

    /// The buffer is shorter than a fixed structural requirement
    #[error("Container too small: expected at least {expected} bytes, got {actual}")]
    TooSmall { expected: usize, actual: usize },

    /// A declared payload region extends past the end of the container
    #[error("Truncated payload: region ends at {needed} but container holds {actual} bytes")]
    TruncatedPayload { needed: usize, actual: usize },

    /// A length field read from the container is internally inconsistent
    #[error("Invalid payload length: {0}")]
    InvalidPayloadLength(String),

    /// Buffer length is not a multiple of the required group size
    #[error("Buffer length {len} is not divisible by {group}")]
    MisalignedLength { len: usize, group: usize },

    /// The supplied payload does not fit what the container requires
    #[error("Size mismatch: expected {expected}, got {actual} bytes")]
    SizeMismatch { expected: String, actual: usize },

    /// Recognized but deliberately unsupported container variant
    #[error("Unsupported variant: {0}")]
    UnsupportedVariant(String),

    /// The span heuristic found no qualifying payload run
    #[error("Payload span not found: {0}")]
    PayloadSpanNotFound(String),
}

impl ContainerError {
    pub fn not_this_format(format: &'static str, reason: impl Into<String>) -> Self {
        Self::NotThisFormat {
            format,
            reason: reason.into(),
        }
    }

    pub fn invalid_length(msg: impl Into<String>) -> Self {
        Self::InvalidPayloadLength(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedVariant(msg.into())
    }

    pub fn span_not_found(msg: impl Into<String>) -> Self {
        Self::PayloadSpanNotFound(msg.into())
    }

    /// Build a `SizeMismatch` listing the accepted sizes.
    pub fn size_mismatch(accepted: &[usize], actual: usize) -> Self {
        let expected = accepted
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::SizeMismatch {
            expected: format!("one of [{expected}]"),
            actual,
        }
    }
}

/// Result alias used throughout the container crates.
pub type Result<T> = std::result::Result<T, ContainerError>;
