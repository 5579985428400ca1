use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dbutils::{FieldValuesMap, Limit, Predicate, PredicateSet, build_insert_many, build_select};

/// Predicate set with `n` equality predicates: col0 = ? AND col1 = ? ...
fn build_filter(n: usize) -> PredicateSet {
    (0..n)
        .map(|i| (format!("col{i}"), Predicate::eq(i as i64)))
        .collect()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/select");

    for n in [1, 5, 10, 50, 100] {
        let filter = build_filter(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &filter, |b, filter| {
            b.iter(|| black_box(build_select("t", filter, &[], Limit::count(10))));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/in_list");

    for n in [5, 20, 100, 500] {
        let filter = PredicateSet::new().with("id", Predicate::in_list(0..n as i64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &filter, |b, filter| {
            b.iter(|| black_box(build_select("t", filter, &["id"], Limit::none())));
        });
    }

    group.finish();
}

fn bench_insert_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/insert_many");

    for rows in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            b.iter(|| {
                let columns = FieldValuesMap::new()
                    .with("id", 0..rows as i64)
                    .with("name", (0..rows).map(|i| format!("name{i}")))
                    .with("score", (0..rows).map(|i| i as f64));
                black_box(build_insert_many("t", columns).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select, bench_in_list, bench_insert_many);
criterion_main!(benches);
