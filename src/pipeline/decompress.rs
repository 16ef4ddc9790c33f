use crate::bits::BitReader;
use crate::container::{self, checksum};
use crate::error::{Error, Result};
use crate::huffman::HuffmanDecoder;
use crate::lz77::{self, LZ77Token};
use crate::{Codec, CodecStats, Mode};
use log::debug;
use std::io::{Read, Write};

/// Decompress a container, verifying its size and CRC
pub fn decompress(container: &[u8]) -> Result<Vec<u8>> {
    decompress_with_stats(container).map(|(data, _)| data)
}

/// Decompress a container, reporting what was decoded
pub fn decompress_with_stats(container: &[u8]) -> Result<(Vec<u8>, CodecStats)> {
    let (header, payload) = container::split(container)?;

    if header.mode == Mode::Huffman {
        if let Some(symbol) = header.frequencies.first_length_class() {
            return Err(Error::UnexpectedLengthClass(symbol));
        }
    }

    let expected = header.uncompressed_size as usize;
    let mut stats = CodecStats {
        mode: header.mode,
        input_bytes: container.len() as u64,
        ..Default::default()
    };

    // The decoder rebuilds the encoder's tree from the stored counts alone
    let mut reader = BitReader::new(payload);
    let mut output = match HuffmanDecoder::from_frequencies(&header.frequencies) {
        None => Vec::new(),
        Some(decoder) => match header.mode {
            Mode::Huffman => {
                let bytes = decoder.decode_bytes(&mut reader, expected);
                stats.literals = bytes.len() as u64;
                stats.symbols = stats.literals;
                bytes
            }
            Mode::Lz77 => {
                let tokens = decoder.decode_tokens(&mut reader, expected);
                let copies =
                    tokens.iter().filter(|t| matches!(t, LZ77Token::Copy { .. })).count();
                stats.copies = copies as u64;
                stats.literals = (tokens.len() - copies) as u64;
                stats.symbols = tokens.len() as u64;
                lz77::decompress(&tokens)
            }
        },
    };

    debug!(
        "decoded {} bytes ({}) from {} payload bits, {} left unread",
        output.len(),
        header.mode,
        reader.position(),
        reader.bits_remaining()
    );

    output.truncate(expected);
    if output.len() < expected {
        return Err(Error::SizeMismatch {
            expected: header.uncompressed_size,
            found: output.len() as u32,
        });
    }

    let crc = checksum(&output);
    if crc != header.crc32 {
        return Err(Error::Crc32Mismatch { expected: header.crc32, found: crc });
    }

    stats.output_bytes = output.len() as u64;
    Ok((output, stats))
}

/// Stream-level decompressor
#[derive(Default)]
pub struct Decompressor;

impl Decompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for Decompressor {
    fn process<R: Read, W: Write>(&mut self, mut input: R, mut output: W) -> Result<CodecStats> {
        let mut container = Vec::new();
        input.read_to_end(&mut container)?;

        let (data, stats) = decompress_with_stats(&container)?;

        output.write_all(&data)?;
        output.flush()?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{ContainerHeader, HEADER_SIZE, MODE_OFFSET};
    use crate::pipeline::compress;
    use crate::{CompressConfig, ErrorKind};

    #[test]
    fn test_run_scenario() {
        let container = compress(b"AAAAAAAAAA", &CompressConfig::default()).unwrap();
        let (data, stats) = decompress_with_stats(&container).unwrap();
        assert_eq!(data, b"AAAAAAAAAA");
        assert_eq!(stats.copies, 1);
        assert_eq!(stats.literals, 1);
    }

    #[test]
    fn test_empty_round_trip() {
        for config in [CompressConfig::default(), CompressConfig::huffman()] {
            let container = compress(b"", &config).unwrap();
            assert!(decompress(&container).unwrap().is_empty());
        }
    }

    #[test]
    fn test_single_symbol_pure_huffman() {
        let data = vec![b'x'; 1000];
        let container = compress(&data, &CompressConfig::huffman()).unwrap();
        assert_eq!(decompress(&container).unwrap(), data);
    }

    #[test]
    fn test_single_byte_lz77_padding_truncated() {
        // One literal, one-bit code, seven padding bits that decode as more 'q's
        let container = compress(b"q", &CompressConfig::default()).unwrap();
        assert_eq!(decompress(&container).unwrap(), b"q");
    }

    #[test]
    fn test_crc_mismatch() {
        let mut container =
            compress(b"some data worth protecting", &CompressConfig::default()).unwrap();
        container[6] ^= 0x01;
        let err = decompress(&container).unwrap_err();
        assert!(matches!(err, Error::Crc32Mismatch { .. }));
        assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[test]
    fn test_missing_payload_is_size_mismatch() {
        let container = compress(b"abcdefgh", &CompressConfig::huffman()).unwrap();
        let err = decompress(&container[..HEADER_SIZE]).unwrap_err();
        assert!(matches!(err, Error::SizeMismatch { expected: 8, found: 0 }));
    }

    #[test]
    fn test_length_class_in_pure_huffman_container() {
        let container = compress(b"abcabcabcabc", &CompressConfig::default()).unwrap();
        let mut tampered = container.clone();
        tampered[MODE_OFFSET] = Mode::Huffman.flag();
        let err = decompress(&tampered).unwrap_err();
        assert!(matches!(err, Error::UnexpectedLengthClass(_)));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_bad_signature() {
        let mut container = compress(b"abc", &CompressConfig::default()).unwrap();
        container[3] = 0;
        let err = decompress(&container).unwrap_err();
        assert!(matches!(err, Error::InvalidSignature(_)));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_header_sizes_are_authoritative() {
        let data = b"abcabcabcabcabcabc".to_vec();
        let container = compress(&data, &CompressConfig::default()).unwrap();
        let header = ContainerHeader::parse(&container).unwrap();
        assert_eq!(header.uncompressed_size as usize, data.len());
        assert_eq!(header.compressed_size as usize, container.len());
    }

    #[test]
    fn test_decompressor_stream() {
        let container = compress(b"stream me", &CompressConfig::default()).unwrap();
        let mut output = Vec::new();
        let stats = Decompressor::new().process(container.as_slice(), &mut output).unwrap();
        assert_eq!(output, b"stream me");
        assert_eq!(stats.output_bytes, 9);
        assert_eq!(stats.input_bytes as usize, container.len());
    }
}
