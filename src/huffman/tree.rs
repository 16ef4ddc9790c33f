use super::frequency::FrequencyTable;
use crate::error::{Error, Result};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Largest supported tree base (one child per possible byte-sized digit)
pub const MAX_BASE: usize = 256;

/// A node of an owned Huffman tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A real symbol
    Leaf { symbol: u16, weight: u64 },
    /// Zero-weight filler that lets every n-ary merge take exactly `base` items
    Padding,
    /// Children in pop order: child `i` is reached by digit `i`
    Internal { weight: u64, children: Vec<HuffmanNode> },
}

impl HuffmanNode {
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
            HuffmanNode::Padding => 0,
        }
    }

    pub fn children(&self) -> &[HuffmanNode] {
        match self {
            HuffmanNode::Internal { children, .. } => children,
            _ => &[],
        }
    }
}

/// Priority queue entry, ordered by weight then by insertion sequence
struct QueueEntry {
    weight: u64,
    seq: usize,
    node: HuffmanNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for QueueEntry {}
impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight).then(self.seq.cmp(&other.seq))
    }
}

/// Number of zero-weight leaves needed so `leaves` symbols fill a full `base`-ary tree
pub fn padding_count(leaves: usize, base: usize) -> usize {
    if leaves <= 1 || base <= 2 {
        return 0;
    }
    let remainder = (leaves - 1) % (base - 1);
    if remainder == 0 {
        0
    } else {
        (base - 1) - remainder
    }
}

/// Minimum-redundancy prefix code tree over a frequency table
///
/// Construction is fully deterministic: leaves enter the queue in ascending
/// symbol order, padding follows them, and each merged node takes the next
/// sequence number; equal weights pop in sequence order. Encoder and decoder
/// therefore build the same tree from the same table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
    base: usize,
    padding: usize,
}

impl HuffmanTree {
    /// Build a `base`-ary tree; `Ok(None)` when no symbol has a positive count
    pub fn build(freq: &FrequencyTable, base: usize) -> Result<Option<Self>> {
        if !(2..=MAX_BASE).contains(&base) {
            return Err(Error::InvalidBase(base));
        }

        let leaves: Vec<(u16, u32)> = freq.active().collect();

        match leaves.len() {
            0 => return Ok(None),
            1 => {
                let (symbol, count) = leaves[0];
                let root = HuffmanNode::Leaf { symbol, weight: count as u64 };
                return Ok(Some(Self { root, base, padding: 0 }));
            }
            _ => {}
        }

        let padding = padding_count(leaves.len(), base);

        let mut heap: BinaryHeap<Reverse<QueueEntry>> = leaves
            .iter()
            .enumerate()
            .map(|(seq, &(symbol, count))| {
                let weight = count as u64;
                Reverse(QueueEntry { weight, seq, node: HuffmanNode::Leaf { symbol, weight } })
            })
            .collect();
        let mut seq = leaves.len();
        for _ in 0..padding {
            heap.push(Reverse(QueueEntry { weight: 0, seq, node: HuffmanNode::Padding }));
            seq += 1;
        }

        while heap.len() > 1 {
            debug_assert!(heap.len() >= base, "padding leaves a partial merge");

            let mut children = Vec::with_capacity(base);
            let mut weight = 0u64;
            while children.len() < base {
                let Some(Reverse(entry)) = heap.pop() else { break };
                weight += entry.weight;
                children.push(entry.node);
            }

            heap.push(Reverse(QueueEntry {
                weight,
                seq,
                node: HuffmanNode::Internal { weight, children },
            }));
            seq += 1;
        }

        Ok(heap.pop().map(|Reverse(entry)| Self { root: entry.node, base, padding }))
    }

    /// Build the binary tree used by the container format
    pub fn binary(freq: &FrequencyTable) -> Option<Self> {
        // Base 2 is always in range
        Self::build(freq, 2).ok().flatten()
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    pub fn base(&self) -> usize {
        self.base
    }

    /// Number of padding leaves added during construction
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// True for the degenerate one-symbol tree
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.root, HuffmanNode::Leaf { .. })
    }
}
