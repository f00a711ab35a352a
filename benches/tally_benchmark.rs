use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kmertally::{kmer::extract, tally::aggregate};

fn genome(len: usize) -> Bytes {
    (0..len).map(|i| b"ACGT"[i % 4]).collect::<Vec<u8>>().into()
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    let seq = genome(10_000);
    for k in [3, 7, 15, 31] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| extract(black_box(&seq), k))
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    let sequences: Vec<Bytes> = (0..8).map(|_| genome(5_000)).collect();
    for k in [3, 7, 15] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| aggregate(black_box(&sequences), k))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract, bench_aggregate);
criterion_main!(benches);
