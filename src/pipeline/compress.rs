use crate::bits::BitWriter;
use crate::container::{checksum, ContainerHeader, HEADER_SIZE};
use crate::error::{Error, Result};
use crate::huffman::{CodeTable, FrequencyTable, HuffmanEncoder};
use crate::lz77::{self, LZ77Token};
use crate::{Codec, CodecStats, CompressConfig, Mode};
use log::debug;
use std::io::{Read, Write};

/// Compress a buffer into a container
pub fn compress(data: &[u8], config: &CompressConfig) -> Result<Vec<u8>> {
    compress_with_stats(data, config).map(|(container, _)| container)
}

/// Compress a buffer into a container, reporting what was emitted
pub fn compress_with_stats(data: &[u8], config: &CompressConfig) -> Result<(Vec<u8>, CodecStats)> {
    config.validate()?;
    let uncompressed_size = size_field(data.len(), data.len())?;

    let mut stats =
        CodecStats { mode: config.mode, input_bytes: data.len() as u64, ..Default::default() };
    let mut writer = BitWriter::with_capacity(data.len() / 2 + 16);

    // Pass 1 models the input, pass 2 encodes it
    let frequencies = match config.mode {
        Mode::Huffman => {
            let frequencies = FrequencyTable::count_bytes(data);
            let encoder = HuffmanEncoder::new(CodeTable::binary(&frequencies));
            encoder.encode_bytes(&mut writer, data);
            stats.literals = data.len() as u64;
            frequencies
        }
        Mode::Lz77 => {
            let tokens = lz77::compress(data, config.window_size, config.max_match);
            let copies = tokens.iter().filter(|t| matches!(t, LZ77Token::Copy { .. })).count();
            stats.copies = copies as u64;
            stats.literals = (tokens.len() - copies) as u64;

            let frequencies = FrequencyTable::count_tokens(&tokens);
            let encoder = HuffmanEncoder::new(CodeTable::binary(&frequencies));
            encoder.encode_tokens(&mut writer, &tokens);
            frequencies
        }
    };
    stats.symbols = frequencies.total();

    let payload_bits = writer.bit_len();
    let payload = writer.finish();
    let total = HEADER_SIZE + payload.len();
    let compressed_size = size_field(total, data.len())?;

    let header = ContainerHeader {
        mode: config.mode,
        reserved: 0,
        crc32: checksum(data),
        compressed_size,
        uncompressed_size,
        frequencies,
    };

    let mut output = Vec::with_capacity(total);
    header.write_into(&mut output);
    output.extend_from_slice(&payload);

    debug!(
        "compressed {} bytes ({}): {} symbols, {} copies, {} payload bits, {} bytes total",
        data.len(),
        config.mode,
        stats.symbols,
        stats.copies,
        payload_bits,
        output.len()
    );

    stats.output_bytes = output.len() as u64;
    Ok((output, stats))
}

/// Fit `value` into a 32-bit header field; an overflow is blamed on the input
fn size_field(value: usize, input_len: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::InputTooLarge(input_len))
}

/// Stream-level compressor
pub struct Compressor {
    config: CompressConfig,
}

impl Compressor {
    pub fn new(config: CompressConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompressConfig {
        &self.config
    }
}

impl Codec for Compressor {
    fn process<R: Read, W: Write>(&mut self, mut input: R, mut output: W) -> Result<CodecStats> {
        let mut data = Vec::new();
        input.read_to_end(&mut data)?;

        let (container, stats) = compress_with_stats(&data, &self.config)?;

        output.write_all(&container)?;
        output.flush()?;
        Ok(stats)
    }
}
