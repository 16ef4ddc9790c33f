//! Benchmarks for lzhuff compression and decompression throughput.
//!
//! Covers the two container modes, the match finder on its own, and tree
//! construction across bases.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzhuff::huffman::{FrequencyTable, HuffmanTree};
use lzhuff::{compress, decompress, CompressConfig};

/// Generate random (incompressible) data
fn generate_random_data(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();

    for i in 0..size {
        i.hash(&mut hasher);
        data.push((hasher.finish() & 0xFF) as u8);
    }
    data
}

/// Generate repetitive (highly compressible) data
fn generate_repetitive_data(size: usize) -> Vec<u8> {
    b"ABCDABCDABCDABCD".iter().cycle().take(size).copied().collect()
}

/// Generate English-like text with recurring words
fn generate_text_data(size: usize) -> Vec<u8> {
    const WORDS: [&str; 12] = [
        "the ", "of ", "and ", "compression ", "window ", "symbol ", "tree ", "a ", "to ",
        "length ", "distance ", "code ",
    ];
    let mut data = Vec::with_capacity(size);
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    while data.len() < size {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        data.extend_from_slice(WORDS[(state % WORDS.len() as u64) as usize].as_bytes());
    }
    data.truncate(size);
    data
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for size in [1024, 64 * 1024, 256 * 1024].iter() {
        let data = generate_text_data(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("lz77", size), &data, |b, data| {
            let config = CompressConfig::default();
            b.iter(|| compress(data, &config).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("huffman", size), &data, |b, data| {
            let config = CompressConfig::huffman();
            b.iter(|| compress(data, &config).unwrap());
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");
    let size = 256 * 1024;
    let data = generate_text_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    let configs = [("lz77", CompressConfig::default()), ("huffman", CompressConfig::huffman())];
    for (name, config) in configs {
        let container = compress(&data, &config).unwrap();
        group.bench_function(name, |b| b.iter(|| decompress(&container).unwrap()));
    }

    group.finish();
}

fn bench_data_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_patterns");
    let size = 256 * 1024;
    group.throughput(Throughput::Bytes(size as u64));

    for (name, data) in [
        ("random", generate_random_data(size)),
        ("repetitive", generate_repetitive_data(size)),
        ("text", generate_text_data(size)),
    ] {
        group.bench_function(name, |b| {
            let config = CompressConfig::default();
            b.iter(|| compress(&data, &config).unwrap());
        });
    }

    group.finish();
}

fn bench_window_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_sizes");
    let size = 256 * 1024;
    let data = generate_text_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    for window in [256, 4096, 32768].iter() {
        group.bench_with_input(BenchmarkId::new("window", window), &data, |b, data| {
            b.iter(|| lzhuff::lz77::compress(data, *window, 34));
        });
    }

    group.finish();
}

fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_build");
    let freq = FrequencyTable::count_bytes(&generate_random_data(64 * 1024));

    for base in [2, 3, 4, 16].iter() {
        group.bench_with_input(BenchmarkId::new("base", base), &freq, |b, freq| {
            b.iter(|| HuffmanTree::build(freq, *base).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compress,
    bench_decompress,
    bench_data_patterns,
    bench_window_sizes,
    bench_tree_build
);
criterion_main!(benches);
