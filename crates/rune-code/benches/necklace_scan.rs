use criterion::{criterion_group, criterion_main, Criterion};
use rune_code::{enumerate_patterns, reduce_to_necklaces};

fn bench_reduction(c: &mut Criterion) {
    let enumerated = enumerate_patterns(9).unwrap();
    c.bench_function("necklace_scan_9", |b| {
        b.iter(|| {
            let reduced = reduce_to_necklaces(&enumerated);
            assert_eq!(reduced.len(), 60);
        })
    });
}

fn bench_enumeration(c: &mut Criterion) {
    c.bench_function("enumerate_13", |b| {
        b.iter(|| {
            let patterns = enumerate_patterns(13).unwrap();
            assert_eq!(patterns.len(), 8192);
        })
    });
}

criterion_group!(benches, bench_reduction, bench_enumeration);
criterion_main!(benches);
