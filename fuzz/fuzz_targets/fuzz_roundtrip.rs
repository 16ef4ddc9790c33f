#![no_main]

use libfuzzer_sys::fuzz_target;
use lzhuff::{compress, decompress, CompressConfig};

fuzz_target!(|data: &[u8]| {
    // Limit data size to avoid slowdowns
    let data = if data.len() > 64 * 1024 { &data[..64 * 1024] } else { data };

    // First byte picks the mode and a window so small windows get coverage too
    let config = match data.first() {
        Some(&b) if b & 1 == 1 => CompressConfig::huffman(),
        Some(&b) => CompressConfig { window_size: 1 + (b as usize) * 16, ..Default::default() },
        None => CompressConfig::default(),
    };

    let container = compress(data, &config).expect("compression of a small buffer cannot fail");
    let output = decompress(&container).expect("fresh container must decompress");
    assert_eq!(output, data, "Round-trip mismatch");
});
