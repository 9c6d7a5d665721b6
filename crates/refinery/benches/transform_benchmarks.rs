//! Profiling and transformation benchmarks.
//!
//! Measures parsing, profiling and applying a typical cleaning pipeline
//! across table sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use refinery::{Action, ChoiceStore, ColumnProfiler, Parser, Table};

/// Generate synthetic CSV data with a mix of clean and dirty columns.
fn generate_csv_data(rows: usize) -> String {
    let mut data = String::from("id,age,status,code,score\n");

    for row in 0..rows {
        let age = if row % 7 == 0 {
            String::new()
        } else {
            format!("{}", 20 + row % 50)
        };
        let status = match row % 4 {
            0 => "Active",
            1 => "active",
            2 => "NA",
            _ => "Inactive",
        };
        let code = if row % 11 == 0 {
            format!("x{}", row)
        } else {
            format!("{}", row * 3)
        };
        let score = if row % 5 == 0 {
            "n/a".to_string()
        } else {
            format!("{:.2}", row as f64 * 0.5)
        };

        data.push_str(&format!(
            "{},{},{},{},{}\n",
            row % (rows / 2).max(1),
            age,
            status,
            code,
            score
        ));
    }

    data
}

fn pipeline() -> ChoiceStore {
    ChoiceStore::new()
        .with("status", vec![Action::ReplaceValues, Action::Lowercase])
        .with("code", vec![Action::ToNumeric, Action::ImputeMedian])
        .with("score", vec![Action::MarkMissing, Action::ToNumeric, Action::Standardize])
        .with("age", vec![Action::ImputeMean, Action::Normalize])
        .with("id", vec![Action::DropDuplicateRows])
}

fn parse(rows: usize) -> Table {
    Parser::new().parse_str(&generate_csv_data(rows)).unwrap()
}

/// Benchmark parsing CSV text of various sizes.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_csv");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_csv_data(*rows);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| black_box(Parser::new().parse_str(data).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark column profiling.
fn bench_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile");

    for rows in [100, 1_000, 10_000].iter() {
        let table = parse(*rows);
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| black_box(ColumnProfiler::profile(table)))
        });
    }

    group.finish();
}

/// Benchmark applying the full cleaning pipeline.
fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    let engine = refinery::TransformEngine::new();
    let choices = pipeline();

    for rows in [100, 1_000, 10_000].iter() {
        let table = parse(*rows);
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| black_box(engine.apply(table, &choices)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_profile, bench_apply);
criterion_main!(benches);
