use super::frequency::FrequencyTable;
use super::tree::{HuffmanNode, HuffmanTree};
use crate::bits::BitReader;
use crate::error::{Error, Result};
use crate::lz77::tokens::{class_length, LZ77Token, DISTANCE_BITS};
use log::trace;

/// Tree-walking decoder for a binary payload
///
/// The payload ends on a byte boundary, so the reader may run into the
/// encoder's zero padding. A codeword or distance cut short by the end of the
/// payload is padding and ends decoding quietly.
pub struct HuffmanDecoder {
    tree: HuffmanTree,
}

impl HuffmanDecoder {
    pub fn new(tree: HuffmanTree) -> Result<Self> {
        if tree.base() != 2 {
            return Err(Error::InvalidBase(tree.base()));
        }
        Ok(Self { tree })
    }

    /// Rebuild the encoder's tree from a stored table; `None` for an empty table
    pub fn from_frequencies(freq: &FrequencyTable) -> Option<Self> {
        HuffmanTree::binary(freq).map(|tree| Self { tree })
    }

    /// Decode the next symbol, or `None` when the payload runs out mid-codeword
    ///
    /// A single-leaf tree spends exactly one bit per occurrence.
    pub fn decode_symbol(&self, reader: &mut BitReader) -> Option<u16> {
        let mut node = self.tree.root();
        if let HuffmanNode::Leaf { symbol, .. } = node {
            reader.read_bit()?;
            return Some(*symbol);
        }

        loop {
            match node {
                HuffmanNode::Leaf { symbol, .. } => return Some(*symbol),
                HuffmanNode::Internal { children, .. } => {
                    let bit = reader.read_bit()?;
                    node = &children[bit as usize];
                }
                HuffmanNode::Padding => return None,
            }
        }
    }

    /// Decode literal bytes until `limit` bytes are produced or the payload ends
    pub fn decode_bytes(&self, reader: &mut BitReader, limit: usize) -> Vec<u8> {
        // Every symbol costs at least one bit
        let mut output = Vec::with_capacity(limit.min(reader.bits_remaining()));
        while output.len() < limit {
            let Some(symbol) = self.decode_symbol(reader) else { break };
            match u8::try_from(symbol) {
                Ok(byte) => output.push(byte),
                Err(_) => break,
            }
        }
        output
    }

    /// Decode tokens until they cover `limit` bytes or the payload ends
    ///
    /// A length class followed by fewer than 24 bits is padding: the partial
    /// token is dropped.
    pub fn decode_tokens(&self, reader: &mut BitReader, limit: usize) -> Vec<LZ77Token> {
        let mut tokens = Vec::new();
        let mut produced = 0usize;

        while produced < limit {
            let Some(symbol) = self.decode_symbol(reader) else { break };

            let token = match class_length(symbol) {
                None => LZ77Token::Literal(symbol as u8),
                Some(length) => match reader.read_bits(DISTANCE_BITS) {
                    Some(distance) => LZ77Token::Copy { length, distance },
                    None => {
                        trace!(
                            "dropping length class {} with {} trailing bits",
                            symbol,
                            reader.bits_remaining()
                        );
                        break;
                    }
                },
            };

            produced += token.uncompressed_size();
            tokens.push(token);
        }

        tokens
    }
}
