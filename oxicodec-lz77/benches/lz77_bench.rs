//! LZ77 match-search benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxicodec_lz77::{compress, decompress};
use std::hint::black_box;

fn text_data(size: usize) -> Vec<u8> {
    b"The quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(size)
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_compress");
    let data = text_data(64 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for window in [20usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("window", window), &window, |b, &w| {
            b.iter(|| compress(black_box(&data), w).unwrap())
        });
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let data = text_data(64 * 1024);
    let tokens = compress(&data, 256).unwrap();

    let mut group = c.benchmark_group("lz77_decompress");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("window_256", |b| {
        b.iter(|| decompress(black_box(&tokens)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
