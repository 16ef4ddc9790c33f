use super::frequency::FrequencyTable;
use super::tree::{HuffmanNode, HuffmanTree};
use crate::lz77::tokens::NUM_SYMBOLS;

/// Codewords for each symbol, as digit strings in the tree's base
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    /// codes[symbol] is empty when the symbol has no codeword
    codes: Vec<Vec<u8>>,
    base: usize,
}

impl CodeTable {
    /// Assign codewords by walking the tree; `None` gives an empty table
    ///
    /// The edge to child `i` appends digit `i`. Padding leaves get no code,
    /// and a lone leaf gets the one-digit codeword `0`.
    pub fn from_tree(tree: Option<&HuffmanTree>) -> Self {
        let mut codes = vec![Vec::new(); NUM_SYMBOLS];
        let Some(tree) = tree else {
            return Self { codes, base: 2 };
        };

        if let HuffmanNode::Leaf { symbol, .. } = tree.root() {
            codes[*symbol as usize] = vec![0];
        } else {
            let mut prefix = Vec::new();
            assign(tree.root(), &mut prefix, &mut codes);
        }

        Self { codes, base: tree.base() }
    }

    /// Binary codes for a frequency table, as used by the container
    pub fn binary(freq: &FrequencyTable) -> Self {
        Self::from_tree(HuffmanTree::binary(freq).as_ref())
    }

    /// Codeword for `symbol`, if it has one
    pub fn get(&self, symbol: u16) -> Option<&[u8]> {
        self.codes.get(symbol as usize).filter(|code| !code.is_empty()).map(Vec::as_slice)
    }

    /// Digit base of the codewords
    pub fn base(&self) -> usize {
        self.base
    }

    /// Symbols with codewords, in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (u16, &[u8])> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(symbol, code)| (symbol as u16, code.as_slice()))
    }

    /// Number of symbols with codewords
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Vec::is_empty)
    }

    /// Expected codeword length in digits per symbol, weighted by `freq`
    pub fn average_length(&self, freq: &FrequencyTable) -> f64 {
        let total = freq.total();
        if total == 0 {
            return 0.0;
        }
        let digits: u64 = self.iter().map(|(s, code)| freq.get(s) as u64 * code.len() as u64).sum();
        digits as f64 / total as f64
    }
}

fn assign(node: &HuffmanNode, prefix: &mut Vec<u8>, codes: &mut [Vec<u8>]) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => codes[*symbol as usize] = prefix.clone(),
        HuffmanNode::Padding => {}
        HuffmanNode::Internal { children, .. } => {
            for (digit, child) in children.iter().enumerate() {
                prefix.push(digit as u8);
                assign(child, prefix, codes);
                prefix.pop();
            }
        }
    }
}
