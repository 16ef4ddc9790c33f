pub mod bits;
pub mod container;
pub mod error;
pub mod huffman;
pub mod lz77;
pub mod pipeline;
pub mod stats;

pub use container::ContainerHeader;
pub use error::{Error, ErrorKind, Result};
pub use lz77::LZ77Token;
pub use pipeline::{compress, compress_with_stats, decompress, decompress_with_stats};
pub use pipeline::{Compressor, Decompressor};

use lz77::tokens::{DEFAULT_WINDOW, MAX_DISTANCE, MAX_MATCH, MIN_MATCH};
use std::fmt;
use std::io::{Read, Write};

/// How the payload is modeled, stored as the container's mode flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Mode {
    /// Every input byte is Huffman coded directly
    Huffman = 0,
    /// LZ77 tokens, with literals and length classes Huffman coded
    #[default]
    Lz77 = 1,
}

impl Mode {
    /// Decode a container mode flag
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Self::Huffman),
            1 => Some(Self::Lz77),
            _ => None,
        }
    }

    /// Container mode flag
    pub fn flag(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Huffman => write!(f, "huffman"),
            Mode::Lz77 => write!(f, "lz77+huffman"),
        }
    }
}

/// Configuration for compression
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompressConfig {
    /// Pure Huffman or LZ77 + Huffman
    pub mode: Mode,
    /// How far back the match finder looks (default: 4096, max 2^24 - 1)
    pub window_size: usize,
    /// Longest match emitted (3-34, default: 34)
    pub max_match: usize,
}

impl CompressConfig {
    /// Pure Huffman configuration
    pub fn huffman() -> Self {
        Self { mode: Mode::Huffman, ..Default::default() }
    }

    /// Check that the parameters fit the container format
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_DISTANCE).contains(&self.window_size) {
            return Err(Error::InvalidConfig(format!(
                "window size {} outside 1..={}",
                self.window_size, MAX_DISTANCE
            )));
        }
        if !(MIN_MATCH..=MAX_MATCH).contains(&self.max_match) {
            return Err(Error::InvalidConfig(format!(
                "max match {} outside {}..={}",
                self.max_match, MIN_MATCH, MAX_MATCH
            )));
        }
        Ok(())
    }
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self { mode: Mode::Lz77, window_size: DEFAULT_WINDOW, max_match: MAX_MATCH }
    }
}

/// Statistics from a compression or decompression run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecStats {
    pub mode: Mode,
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// Entropy-coded symbols (literals plus length classes)
    pub symbols: u64,
    pub literals: u64,
    pub copies: u64,
}

/// A whole-buffer operation from a reader to a writer
pub trait Codec {
    /// Read all of `input`, process it, and write the result to `output`
    fn process<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<CodecStats>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_flags() {
        assert_eq!(Mode::Huffman.flag(), 0);
        assert_eq!(Mode::Lz77.flag(), 1);
        assert_eq!(Mode::from_flag(0), Some(Mode::Huffman));
        assert_eq!(Mode::from_flag(1), Some(Mode::Lz77));
        assert_eq!(Mode::from_flag(2), None);
        assert_eq!(Mode::default(), Mode::Lz77);
    }

    #[test]
    fn test_default_config() {
        let config = CompressConfig::default();
        assert_eq!(config.window_size, 4096);
        assert_eq!(config.max_match, 34);
        assert!(config.validate().is_ok());
        assert_eq!(CompressConfig::huffman().mode, Mode::Huffman);
    }

    #[test]
    fn test_config_validation() {
        let bad_window = CompressConfig { window_size: 0, ..Default::default() };
        assert!(matches!(bad_window.validate(), Err(Error::InvalidConfig(_))));

        let huge_window = CompressConfig { window_size: 1 << 24, ..Default::default() };
        assert!(huge_window.validate().is_err());

        let long_match = CompressConfig { max_match: 35, ..Default::default() };
        assert!(long_match.validate().is_err());

        let short_match = CompressConfig { max_match: 2, ..Default::default() };
        assert_eq!(short_match.validate().unwrap_err().kind(), ErrorKind::Config);
    }
}
