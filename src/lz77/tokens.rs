/// Number of symbols in the entropy-coded alphabet (256 literals + 32 length classes)
pub const NUM_SYMBOLS: usize = 288;

/// First length-class symbol; `LENGTH_CLASS_BASE + k` encodes length `k + MIN_MATCH`
pub const LENGTH_CLASS_BASE: u16 = 256;

/// Shortest back-reference worth emitting
pub const MIN_MATCH: usize = 3;

/// Longest back-reference representable by a length class
pub const MAX_MATCH: usize = 34;

/// Default search window
pub const DEFAULT_WINDOW: usize = 4096;

/// Width of the raw distance field following a length-class codeword
pub const DISTANCE_BITS: u8 = 24;

/// Largest distance the raw field can carry
pub const MAX_DISTANCE: usize = (1 << DISTANCE_BITS) - 1;

/// Represents a single token in the LZ77 stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LZ77Token {
    /// A literal byte
    Literal(u8),
    /// A back-reference: copy `length` bytes from `distance` bytes back
    Copy { length: u16, distance: u32 },
}

impl LZ77Token {
    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        match self {
            LZ77Token::Literal(_) => 1,
            LZ77Token::Copy { length, .. } => *length as usize,
        }
    }

    /// The entropy-coded symbol for this token
    ///
    /// Returns `None` for a copy whose length has no length class.
    pub fn symbol(&self) -> Option<u16> {
        match self {
            LZ77Token::Literal(byte) => Some(*byte as u16),
            LZ77Token::Copy { length, .. } => length_class(*length as usize),
        }
    }
}

/// Map a match length (3-34) to its length-class symbol (256-287)
pub fn length_class(length: usize) -> Option<u16> {
    if (MIN_MATCH..=MAX_MATCH).contains(&length) {
        Some(LENGTH_CLASS_BASE + (length - MIN_MATCH) as u16)
    } else {
        None
    }
}

/// Map a length-class symbol (256-287) back to its match length
pub fn class_length(symbol: u16) -> Option<u16> {
    if (LENGTH_CLASS_BASE as usize..NUM_SYMBOLS).contains(&(symbol as usize)) {
        Some(symbol - LENGTH_CLASS_BASE + MIN_MATCH as u16)
    } else {
        None
    }
}

/// Whether a symbol is a length class rather than a literal byte
#[inline]
pub fn is_length_class(symbol: u16) -> bool {
    symbol >= LENGTH_CLASS_BASE
}
