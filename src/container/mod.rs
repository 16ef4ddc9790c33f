pub mod constants;
pub mod header;

pub use constants::*;
pub use header::ContainerHeader;

use crate::error::Result;

/// CRC-32 (IEEE, reflected polynomial 0xEDB88320) of the uncompressed data
pub fn checksum(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Split a container into its parsed header and the packed payload
pub fn split(container: &[u8]) -> Result<(ContainerHeader, &[u8])> {
    let header = ContainerHeader::parse(container)?;
    Ok((header, &container[HEADER_SIZE..]))
}
