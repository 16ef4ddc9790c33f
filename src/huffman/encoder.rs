use super::codes::CodeTable;
use crate::bits::BitWriter;
use crate::lz77::tokens::{LZ77Token, DISTANCE_BITS};

/// Writes symbols to the payload using a binary code table
pub struct HuffmanEncoder {
    codes: CodeTable,
}

impl HuffmanEncoder {
    pub fn new(codes: CodeTable) -> Self {
        debug_assert_eq!(codes.base(), 2, "payload codes must be binary");
        Self { codes }
    }

    /// Write one symbol's codeword
    #[inline]
    pub fn write_symbol(&self, writer: &mut BitWriter, symbol: u16) {
        debug_assert!(self.codes.get(symbol).is_some(), "symbol {} was never counted", symbol);
        if let Some(code) = self.codes.get(symbol) {
            writer.write_digits(code);
        }
    }

    /// Encode raw bytes (pure Huffman mode)
    pub fn encode_bytes(&self, writer: &mut BitWriter, data: &[u8]) {
        for &byte in data {
            self.write_symbol(writer, byte as u16);
        }
    }

    /// Encode tokens: the literal or length-class codeword, then for copies the
    /// raw distance, MSB-first
    pub fn encode_tokens(&self, writer: &mut BitWriter, tokens: &[LZ77Token]) {
        for token in tokens {
            match token {
                LZ77Token::Literal(byte) => self.write_symbol(writer, *byte as u16),
                LZ77Token::Copy { length, distance } => {
                    debug_assert!(
                        token.symbol().is_some(),
                        "copy length {} has no length class",
                        length
                    );
                    if let Some(symbol) = token.symbol() {
                        self.write_symbol(writer, symbol);
                        writer.write_bits(*distance, DISTANCE_BITS);
                    }
                }
            }
        }
    }
}
