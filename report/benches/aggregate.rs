//! Aggregation pipeline benchmarks
//!
//! Measures identifier decoding and full-table aggregation over synthetic
//! harness-style result rows.

use benchgraph_report::{RawRecord, ResultTable, decode};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Generate the three aggregate rows per case for a methods x sizes grid.
fn generate_records(n_methods: usize, n_sizes: usize) -> Vec<RawRecord> {
    let mut records = Vec::with_capacity(n_methods * n_sizes * 3);
    for method in 0..n_methods {
        for size_exp in 0..n_sizes {
            let size = 512u64 << size_exp;
            let name = format!("BM_memcpy::dragons::method{method}_{size}");
            for sample in [12.0e9, 12.1e9, 0.3e9] {
                records.push(RawRecord {
                    name: name.clone(),
                    bytes_per_second: sample,
                });
            }
        }
    }
    records
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let names = [
        ("namespaced", "BM_memcpy::dragons::memcpy_rust_4096"),
        ("flat", "BM_memcpy_suite::libc/8192"),
    ];

    for (kind, name) in names {
        group.bench_with_input(BenchmarkId::new("decode", kind), name, |b, name| {
            b.iter(|| decode(black_box(name)).unwrap());
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for (n_methods, n_sizes) in [(4, 8), (16, 16)] {
        let records = generate_records(n_methods, n_sizes);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("from_records", format!("{n_methods}x{n_sizes}")),
            &records,
            |b, records| {
                b.iter(|| ResultTable::from_records(black_box(records)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_aggregate);
criterion_main!(benches);
