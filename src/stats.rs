//! Source statistics for verbose reporting
//!
//! Nothing here feeds the codec. The report compares the Huffman code the
//! container actually uses against Shannon and Shannon-Fano codes built from
//! the same frequency table, plus n-ary Huffman variants.

use crate::huffman::{CodeTable, FrequencyTable, HuffmanTree};
use std::collections::BTreeMap;
use std::fmt;

/// Bases shown in the n-ary comparison
const NARY_BASES: [usize; 2] = [3, 4];

/// One code's codewords and how well it does on the source
#[derive(Clone, Debug, PartialEq)]
pub struct CodingReport {
    /// Codeword per symbol, as a digit string
    pub codes: BTreeMap<u16, String>,
    /// Expected digits per symbol
    pub average_length: f64,
    /// Entropy over average length in bits (1.0 is optimal)
    pub efficiency: f64,
}

impl CodingReport {
    fn new(codes: BTreeMap<u16, String>, freq: &FrequencyTable, entropy: f64) -> Self {
        let total = freq.total();
        let average_length = if total == 0 {
            0.0
        } else {
            codes.iter().map(|(&s, code)| freq.get(s) as f64 * code.len() as f64).sum::<f64>()
                / total as f64
        };
        let efficiency = if average_length > 0.0 { entropy / average_length } else { 0.0 };
        Self { codes, average_length, efficiency }
    }
}

/// Average length of an n-ary Huffman code, in digits and in equivalent bits
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NaryReport {
    pub base: usize,
    pub average_digits: f64,
    pub average_bits: f64,
}

/// Everything `--verbose` prints about a frequency table
#[derive(Clone, Debug, PartialEq)]
pub struct SourceReport {
    pub total_symbols: u64,
    pub distinct_symbols: usize,
    /// Shannon entropy in bits per symbol
    pub entropy: f64,
    pub huffman: CodingReport,
    pub shannon: CodingReport,
    pub shannon_fano: CodingReport,
    pub nary: Vec<NaryReport>,
}

impl SourceReport {
    pub fn from_frequencies(freq: &FrequencyTable) -> Self {
        let entropy = entropy(freq);

        let nary = NARY_BASES
            .iter()
            .filter_map(|&base| {
                let tree = HuffmanTree::build(freq, base).ok()?;
                let average_digits = CodeTable::from_tree(tree.as_ref()).average_length(freq);
                let average_bits = average_digits * (base as f64).log2();
                Some(NaryReport { base, average_digits, average_bits })
            })
            .collect();

        Self {
            total_symbols: freq.total(),
            distinct_symbols: freq.num_active(),
            entropy,
            huffman: huffman(freq),
            shannon: shannon(freq),
            shannon_fano: shannon_fano(freq),
            nary,
        }
    }
}

impl fmt::Display for SourceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Symbols coded:    {}", self.total_symbols)?;
        writeln!(f, "  Distinct symbols: {}", self.distinct_symbols)?;
        writeln!(f, "  Entropy:          {:.4} bits/symbol", self.entropy)?;
        for (name, report) in [
            ("Huffman", &self.huffman),
            ("Shannon", &self.shannon),
            ("Shannon-Fano", &self.shannon_fano),
        ] {
            writeln!(
                f,
                "  {:<16}  {:.4} bits/symbol (efficiency {:.2}%)",
                format!("{}:", name),
                report.average_length,
                report.efficiency * 100.0
            )?;
        }
        for nary in &self.nary {
            writeln!(
                f,
                "  {:<16}  {:.4} digits/symbol ({:.4} bits)",
                format!("Huffman base {}:", nary.base),
                nary.average_digits,
                nary.average_bits
            )?;
        }
        Ok(())
    }
}

/// Shannon entropy of the table, in bits per symbol
pub fn entropy(freq: &FrequencyTable) -> f64 {
    let total = freq.total();
    if total == 0 {
        return 0.0;
    }
    freq.active()
        .map(|(_, count)| {
            let p = count as f64 / total as f64;
            -p * p.log2()
        })
        .sum()
}

/// The binary Huffman code the container uses
pub fn huffman(freq: &FrequencyTable) -> CodingReport {
    let codes = CodeTable::binary(freq)
        .iter()
        .map(|(symbol, code)| (symbol, digits_to_string(code)))
        .collect();
    CodingReport::new(codes, freq, entropy(freq))
}

/// Shannon code: length `ceil(-log2 p)` (at least 1), codeword taken from
/// the binary expansion of the cumulative probability
pub fn shannon(freq: &FrequencyTable) -> CodingReport {
    let total = freq.total();
    let mut codes = BTreeMap::new();
    let mut cumulative = 0.0f64;

    for (symbol, count) in by_descending_count(freq) {
        let p = count as f64 / total as f64;
        let length = ((-p.log2()).ceil() as usize).max(1);

        let mut code = String::with_capacity(length);
        let mut fraction = cumulative;
        for _ in 0..length {
            fraction *= 2.0;
            if fraction >= 1.0 {
                code.push('1');
                fraction -= 1.0;
            } else {
                code.push('0');
            }
        }

        codes.insert(symbol, code);
        cumulative += p;
    }

    CodingReport::new(codes, freq, entropy(freq))
}

/// Shannon-Fano code: recursively split the sorted symbols where the two
/// halves' totals are closest
pub fn shannon_fano(freq: &FrequencyTable) -> CodingReport {
    let symbols = by_descending_count(freq);
    let mut codes = BTreeMap::new();
    if !symbols.is_empty() {
        split(&symbols, String::new(), &mut codes);
    }
    CodingReport::new(codes, freq, entropy(freq))
}

fn split(symbols: &[(u16, u32)], prefix: String, codes: &mut BTreeMap<u16, String>) {
    if let [(symbol, _)] = symbols {
        let code = if prefix.is_empty() { "0".to_string() } else { prefix };
        codes.insert(*symbol, code);
        return;
    }

    let total: u64 = symbols.iter().map(|&(_, c)| c as u64).sum();
    let mut left = 0u64;
    let mut best_diff = u64::MAX;
    let mut cut = 0;
    for (i, &(_, count)) in symbols[..symbols.len() - 1].iter().enumerate() {
        left += count as u64;
        let diff = left.abs_diff(total - left);
        if diff < best_diff {
            best_diff = diff;
            cut = i;
        }
    }

    split(&symbols[..=cut], format!("{}0", prefix), codes);
    split(&symbols[cut + 1..], format!("{}1", prefix), codes);
}

/// Active symbols sorted by descending count, ties by ascending symbol
fn by_descending_count(freq: &FrequencyTable) -> Vec<(u16, u32)> {
    let mut symbols: Vec<(u16, u32)> = freq.active().collect();
    symbols.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    symbols
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}
