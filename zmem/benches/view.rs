//! Criterion benchmarks contrasting a full decode against a lazy view read of a single field,
//! the headline cost difference zero-copy reads are meant to buy.
//!
//! Run with:
//!   cargo bench --bench view

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zmem::{FixedVec, ReadMode, ZmemLayout};

#[derive(Clone, Debug, PartialEq, ZmemLayout)]
struct Sample {
    id: u64,
    values: FixedVec<f32>,
}

fn sample(len: usize) -> Sample {
    Sample {
        id: 11,
        values: (0..len).map(|i| i as f32).collect(),
    }
}

fn bench_decode_vs_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_vs_view_first_field");
    for &len in &[16usize, 1_024, 65_536] {
        let value = sample(len);
        let bytes = zmem::write_variable(&value).unwrap();
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::new("full_decode", len), &bytes, |b, bytes| {
            b.iter(|| {
                let decoded = zmem::read_variable::<Sample>(bytes, ReadMode::Permissive).unwrap();
                decoded.id
            })
        });

        group.bench_with_input(BenchmarkId::new("view_only", len), &bytes, |b, bytes| {
            b.iter(|| {
                let view = SampleView::from_bytes(bytes).unwrap();
                view.id().unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode_vs_view);
criterion_main!(benches);
