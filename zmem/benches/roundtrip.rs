//! Criterion benchmarks for the writer/reader hot path against variable aggregates of growing
//! size.
//!
//! Run with:
//!   cargo bench --bench roundtrip

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zmem::{FixedVec, ReadMode, ZmemLayout};

#[derive(Clone, Debug, PartialEq, ZmemLayout)]
struct Sample {
    id: u64,
    values: FixedVec<f32>,
}

fn sample(len: usize) -> Sample {
    Sample {
        id: 7,
        values: (0..len).map(|i| i as f32 * 0.5).collect(),
    }
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_variable");
    for &len in &[16usize, 256, 4096] {
        let value = sample(len);
        let size = zmem::size_variable(&value) as u64;
        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(BenchmarkId::new("growing", len), &value, |b, value| {
            b.iter(|| zmem::write_variable(value).unwrap())
        });

        let mut buf = vec![0u8; size as usize];
        group.bench_with_input(BenchmarkId::new("preallocated", len), &value, |b, value| {
            b.iter(|| zmem::write_variable_preallocated(value, &mut buf).unwrap())
        });
    }
    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_variable");
    for &len in &[16usize, 256, 4096] {
        let value = sample(len);
        let bytes = zmem::write_variable(&value).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("owned", len), &bytes, |b, bytes| {
            b.iter(|| zmem::read_variable::<Sample>(bytes, ReadMode::Permissive).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_write, bench_read);
criterion_main!(benches);
