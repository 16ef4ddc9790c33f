use crate::lz77::tokens::{is_length_class, LZ77Token, NUM_SYMBOLS};

/// Symbol counts for the 288-symbol alphabet
///
/// This is the only model the container stores; the decoder rebuilds the
/// code from it, so it must describe exactly the symbols that were emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; NUM_SYMBOLS],
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self { counts: [0; NUM_SYMBOLS] }
    }

    pub fn from_counts(counts: [u32; NUM_SYMBOLS]) -> Self {
        Self { counts }
    }

    /// Count raw bytes into slots 0-255 (pure Huffman mode)
    pub fn count_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.counts[byte as usize] += 1;
        }
        table
    }

    /// Count literal bytes and length classes from tokens (LZ77 mode)
    ///
    /// Distances are not entropy coded and are never counted.
    pub fn count_tokens(tokens: &[LZ77Token]) -> Self {
        let mut table = Self::new();
        for token in tokens {
            if let Some(symbol) = token.symbol() {
                table.counts[symbol as usize] += 1;
            }
        }
        table
    }

    /// Count for one symbol (0 for out-of-range symbols)
    pub fn get(&self, symbol: u16) -> u32 {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u32; NUM_SYMBOLS] {
        &self.counts
    }

    /// Sum of all counts, i.e. the number of coded symbols
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Symbols with a positive count, in ascending symbol order
    pub fn active(&self) -> impl Iterator<Item = (u16, u32)> + '_ {
        self.counts.iter().enumerate().filter(|(_, &c)| c > 0).map(|(s, &c)| (s as u16, c))
    }

    /// Number of symbols with a positive count
    pub fn num_active(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// True when every count is zero
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// First length-class symbol with a positive count, if any
    pub fn first_length_class(&self) -> Option<u16> {
        self.active().map(|(s, _)| s).find(|&s| is_length_class(s))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_bytes() {
        let table = FrequencyTable::count_bytes(b"abracadabra");
        assert_eq!(table.get(b'a' as u16), 5);
        assert_eq!(table.get(b'b' as u16), 2);
        assert_eq!(table.get(b'r' as u16), 2);
        assert_eq!(table.num_active(), 5);
        assert_eq!(table.total(), 11);
        assert_eq!(table.first_length_class(), None);
    }

    #[test]
    fn test_count_tokens() {
        let tokens = vec![
            LZ77Token::Literal(b'a'),
            LZ77Token::Literal(b'a'),
            LZ77Token::Literal(b'b'),
            LZ77Token::Copy { length: 3, distance: 1 },
            LZ77Token::Copy { length: 34, distance: 4000 },
        ];
        let table = FrequencyTable::count_tokens(&tokens);

        assert_eq!(table.get(b'a' as u16), 2);
        assert_eq!(table.get(b'b' as u16), 1);
        assert_eq!(table.get(256), 1);
        assert_eq!(table.get(287), 1);
        // One count per emitted symbol, not per input byte
        assert_eq!(table.total(), 5);
        assert_eq!(table.first_length_class(), Some(256));
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::count_bytes(&[]);
        assert!(table.is_empty());
        assert_eq!(table, FrequencyTable::default());
        assert_eq!(table.active().count(), 0);
    }

    #[test]
    fn test_get_out_of_range() {
        assert_eq!(FrequencyTable::new().get(1000), 0);
    }
}
