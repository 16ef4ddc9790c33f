use thiserror::Error;

/// Broad classes of failure, used by callers that only care which stage failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading input or writing output failed
    Io,
    /// The container is not something we can parse
    Format,
    /// The container parsed but the reconstructed data does not verify
    Integrity,
    /// Caller supplied parameters or input the format cannot represent
    Config,
}

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Container format errors
    #[error("Invalid file signature: expected 0x1518c234, got 0x{0:08x}")]
    InvalidSignature(u32),

    #[error("Truncated container header: need {expected} bytes, got {found}")]
    TruncatedHeader { expected: usize, found: usize },

    #[error("Unknown mode flag: {0} (expected 0 or 1)")]
    UnknownMode(u8),

    #[error("Frequency table has length-class symbol {0} in a pure Huffman container")]
    UnexpectedLengthClass(u16),

    // Integrity errors
    #[error("CRC32 mismatch: expected 0x{expected:08x}, got 0x{found:08x}")]
    Crc32Mismatch { expected: u32, found: u32 },

    #[error("Size mismatch: expected {expected} bytes, got {found}")]
    SizeMismatch { expected: u32, found: u32 },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid tree base: {0} (must be 2-256)")]
    InvalidBase(usize),

    #[error("Input too large: {0} bytes exceeds the 32-bit size field")]
    InputTooLarge(usize),
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::InvalidSignature(_)
            | Error::TruncatedHeader { .. }
            | Error::UnknownMode(_)
            | Error::UnexpectedLengthClass(_) => ErrorKind::Format,
            Error::Crc32Mismatch { .. } | Error::SizeMismatch { .. } => ErrorKind::Integrity,
            Error::InvalidConfig(_) | Error::InvalidBase(_) | Error::InputTooLarge(_) => {
                ErrorKind::Config
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
