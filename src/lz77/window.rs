use super::tokens::LZ77Token;
use log::trace;

/// Expand a token stream back into bytes
///
/// Copies run one byte at a time so an overlapping reference (distance shorter
/// than length) replicates its pattern. A copy reaching before the start of
/// the output, or with distance 0, can only come from the zero padding at the
/// end of a packed stream; it is dropped rather than treated as an error.
pub fn decompress(tokens: &[LZ77Token]) -> Vec<u8> {
    let capacity = tokens.iter().map(LZ77Token::uncompressed_size).sum();
    let mut output = Vec::with_capacity(capacity);

    for token in tokens {
        match *token {
            LZ77Token::Literal(byte) => output.push(byte),
            LZ77Token::Copy { length, distance } => {
                let distance = distance as usize;
                if distance == 0 || distance > output.len() {
                    trace!(
                        "discarding copy (length {}, distance {}) at output offset {}",
                        length,
                        distance,
                        output.len()
                    );
                    continue;
                }
                let start = output.len() - distance;
                for k in 0..length as usize {
                    let byte = output[start + k];
                    output.push(byte);
                }
            }
        }
    }

    output
}
