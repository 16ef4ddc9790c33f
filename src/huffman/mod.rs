pub mod codes;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod tree;

pub use codes::CodeTable;
pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use frequency::FrequencyTable;
pub use tree::{HuffmanNode, HuffmanTree};
