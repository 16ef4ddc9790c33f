pub mod compress;
pub mod decompress;

pub use compress::{compress, compress_with_stats, Compressor};
pub use decompress::{decompress, decompress_with_stats, Decompressor};
