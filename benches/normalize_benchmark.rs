use std::{fmt::Write as _, fs};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mfeindex::normalize::normalize_fasta;
use tempfile::TempDir;

fn synthetic_fasta(records: usize, len: usize) -> String {
    let bases = b"ACGT";
    let mut out = String::with_capacity(records * (len + 32));
    for r in 0..records {
        let _ = writeln!(out, ">contig_{r} synthetic record {r}");
        for chunk in (0..len).collect::<Vec<_>>().chunks(60) {
            let line: String = chunk
                .iter()
                .map(|i| bases[(i * 7 + r) % 4] as char)
                .collect();
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_fasta");

    for &(records, len) in &[(1_000, 200), (100, 10_000)] {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("bench.fa");
        let dest = dir.path().join("bench.fa.unifasta");
        fs::write(&source, synthetic_fasta(records, len)).unwrap();

        group.throughput(Throughput::Bytes((records * len) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{records}x{len}")),
            &source,
            |b, source| b.iter(|| normalize_fasta(source, &dest).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
