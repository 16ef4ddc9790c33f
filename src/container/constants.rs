use crate::lz77::tokens::NUM_SYMBOLS;

/// Container signature, stored little-endian at offset 0
pub const MAGIC: u32 = 0x1518_C234;

/// Fixed fields before the frequency table: magic, mode, reserved, CRC32,
/// compressed size, uncompressed size
pub const FIXED_FIELDS_SIZE: usize = 4 + 1 + 1 + 4 + 4 + 4;

/// Frequency table size (288 x u32)
pub const FREQ_TABLE_SIZE: usize = NUM_SYMBOLS * 4;

/// Full header size; the packed payload starts here
pub const HEADER_SIZE: usize = FIXED_FIELDS_SIZE + FREQ_TABLE_SIZE; // 1170

/// Field offsets
pub const MODE_OFFSET: usize = 4;
pub const RESERVED_OFFSET: usize = 5;
pub const CRC_OFFSET: usize = 6;
pub const COMPRESSED_SIZE_OFFSET: usize = 10;
pub const UNCOMPRESSED_SIZE_OFFSET: usize = 14;
pub const FREQ_TABLE_OFFSET: usize = 18;
