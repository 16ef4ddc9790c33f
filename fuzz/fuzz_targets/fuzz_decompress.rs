#![no_main]

use libfuzzer_sys::fuzz_target;
use lzhuff::container::{HEADER_SIZE, MAGIC, UNCOMPRESSED_SIZE_OFFSET};
use lzhuff::decompress;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes should be rejected cleanly, never panic
    let _ = decompress(data);

    // Give the payload decoder a chance by forcing a valid signature and a
    // bounded uncompressed size
    if data.len() >= HEADER_SIZE {
        let mut container = data.to_vec();
        container[..4].copy_from_slice(&MAGIC.to_le_bytes());
        container[4] &= 1;
        let size = u32::from_le_bytes([
            container[UNCOMPRESSED_SIZE_OFFSET],
            container[UNCOMPRESSED_SIZE_OFFSET + 1],
            container[UNCOMPRESSED_SIZE_OFFSET + 2],
            container[UNCOMPRESSED_SIZE_OFFSET + 3],
        ]) % (1 << 20);
        container[UNCOMPRESSED_SIZE_OFFSET..UNCOMPRESSED_SIZE_OFFSET + 4]
            .copy_from_slice(&size.to_le_bytes());
        let _ = decompress(&container);
    }
});
