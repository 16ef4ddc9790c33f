pub mod reader;
pub mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

/// Pack a binary digit string (each element 0 or 1) into bytes, MSB-first
pub fn pack(digits: &[u8]) -> Vec<u8> {
    let mut writer = BitWriter::with_capacity(digits.len().div_ceil(8));
    writer.write_digits(digits);
    writer.finish()
}

/// Unpack bytes into a binary digit string, padding included
///
/// The result always has `8 * bytes.len()` digits.
pub fn unpack(bytes: &[u8]) -> Vec<u8> {
    let mut reader = BitReader::new(bytes);
    std::iter::from_fn(|| reader.read_bit()).map(|bit| bit as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_pads_final_byte() {
        assert_eq!(pack(&[1, 1, 0, 1, 0, 0, 1, 1, 1]), vec![0xD3, 0x80]);
        assert!(pack(&[]).is_empty());
    }

    #[test]
    fn test_unpack_is_whole_bytes() {
        let digits = unpack(&[0x80, 0x01]);
        assert_eq!(digits.len(), 16);
        assert_eq!(digits[0], 1);
        assert_eq!(digits[15], 1);
        assert_eq!(digits.iter().filter(|&&d| d == 1).count(), 2);
    }

    #[test]
    fn test_unpack_restores_digits_plus_padding() {
        let digits = [1, 0, 1, 1, 1];
        let restored = unpack(&pack(&digits));
        assert_eq!(&restored[..5], &digits);
        assert_eq!(&restored[5..], &[0, 0, 0]);
    }
}
