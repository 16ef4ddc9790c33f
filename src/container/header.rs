use super::constants::*;
use crate::error::{Error, Result};
use crate::huffman::FrequencyTable;
use crate::lz77::tokens::NUM_SYMBOLS;
use crate::Mode;

/// Parsed container header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHeader {
    pub mode: Mode,
    pub reserved: u8,
    /// CRC32 of the uncompressed data
    pub crc32: u32,
    /// Header plus payload size (informational)
    pub compressed_size: u32,
    /// Authoritative output length
    pub uncompressed_size: u32,
    pub frequencies: FrequencyTable,
}

impl ContainerHeader {
    /// Parse the header from the start of a container
    ///
    /// The signature is checked before the length so that a short file that
    /// is not ours reports a bad signature rather than truncation.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() >= 4 {
            let magic = read_u32_le(data, 0);
            if magic != MAGIC {
                return Err(Error::InvalidSignature(magic));
            }
        }
        if data.len() < HEADER_SIZE {
            return Err(Error::TruncatedHeader { expected: HEADER_SIZE, found: data.len() });
        }

        let mode = Mode::from_flag(data[MODE_OFFSET]).ok_or(Error::UnknownMode(data[MODE_OFFSET]))?;
        let reserved = data[RESERVED_OFFSET];
        let crc32 = read_u32_le(data, CRC_OFFSET);
        let compressed_size = read_u32_le(data, COMPRESSED_SIZE_OFFSET);
        let uncompressed_size = read_u32_le(data, UNCOMPRESSED_SIZE_OFFSET);

        let mut counts = [0u32; NUM_SYMBOLS];
        for (symbol, count) in counts.iter_mut().enumerate() {
            *count = read_u32_le(data, FREQ_TABLE_OFFSET + symbol * 4);
        }

        Ok(ContainerHeader {
            mode,
            reserved,
            crc32,
            compressed_size,
            uncompressed_size,
            frequencies: FrequencyTable::from_counts(counts),
        })
    }

    /// Serialize to a fresh buffer
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE);
        self.write_into(&mut out);
        out
    }

    /// Append the header to `out`
    pub fn write_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&MAGIC.to_le_bytes());
        out.push(self.mode.flag());
        out.push(self.reserved);
        out.extend_from_slice(&self.crc32.to_le_bytes());
        out.extend_from_slice(&self.compressed_size.to_le_bytes());
        out.extend_from_slice(&self.uncompressed_size.to_le_bytes());
        for count in self.frequencies.counts() {
            out.extend_from_slice(&count.to_le_bytes());
        }
    }
}

#[inline]
fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContainerHeader {
        let mut counts = [0u32; NUM_SYMBOLS];
        counts[b'a' as usize] = 3;
        counts[287] = 0x0102_0304;
        ContainerHeader {
            mode: Mode::Lz77,
            reserved: 0,
            crc32: 0xDEAD_BEEF,
            compressed_size: 1234,
            uncompressed_size: 99,
            frequencies: FrequencyTable::from_counts(counts),
        }
    }

    #[test]
    fn test_layout() {
        let bytes = sample().to_bytes();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(HEADER_SIZE, 1170);
        assert_eq!(&bytes[0..4], &[0x34, 0xC2, 0x18, 0x15]);
        assert_eq!(bytes[4], 1);
        assert_eq!(bytes[5], 0);
        assert_eq!(&bytes[6..10], &[0xEF, 0xBE, 0xAD, 0xDE]);
        assert_eq!(&bytes[10..14], &1234u32.to_le_bytes());
        assert_eq!(&bytes[14..18], &99u32.to_le_bytes());
        assert_eq!(&bytes[18 + 97 * 4..18 + 98 * 4], &3u32.to_le_bytes());
        assert_eq!(&bytes[1166..1170], &[0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_parse_written_header() {
        let header = sample();
        let mut written = vec![0xEE];
        header.write_into(&mut written);
        assert_eq!(&written[1..], header.to_bytes().as_slice());
        assert_eq!(ContainerHeader::parse(&written[1..]).unwrap(), header);
    }

    #[test]
    fn test_invalid_signature() {
        let mut bytes = sample().to_bytes();
        bytes[0] = 0;
        assert!(matches!(ContainerHeader::parse(&bytes), Err(Error::InvalidSignature(_))));
        assert!(matches!(
            ContainerHeader::parse(b"PK\x03\x04"),
            Err(Error::InvalidSignature(0x0403_4b50))
        ));
    }

    #[test]
    fn test_truncated() {
        let bytes = sample().to_bytes();
        assert!(matches!(
            ContainerHeader::parse(&bytes[..100]),
            Err(Error::TruncatedHeader { expected: 1170, found: 100 })
        ));
        assert!(matches!(
            ContainerHeader::parse(&bytes[..2]),
            Err(Error::TruncatedHeader { .. })
        ));
    }

    #[test]
    fn test_unknown_mode() {
        let mut bytes = sample().to_bytes();
        bytes[MODE_OFFSET] = 7;
        assert!(matches!(ContainerHeader::parse(&bytes), Err(Error::UnknownMode(7))));
    }

    #[test]
    fn test_reserved_byte_is_ignored() {
        let mut bytes = sample().to_bytes();
        bytes[RESERVED_OFFSET] = 0x5A;
        let header = ContainerHeader::parse(&bytes).unwrap();
        assert_eq!(header.reserved, 0x5A);
        assert_eq!(header.mode, Mode::Lz77);
    }
}
