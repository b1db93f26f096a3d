use cityinfo_core::text::split_fields;
use cityinfo_core::{wrap_distance, CityDb, CitySearch, DbConfig, MapSettings};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const ROW: &str = "2|London|GB|/clock/uk_name:United Kingdom:Great Britain|Europe/London|51.5074|-0.1278|0.4996|0.2138|en_GB";

fn sample_db() -> CityDb {
    CityDb::builder()
        .config(DbConfig::sample())
        .settings(MapSettings::new().with("clock/uk_name", 1))
        .build()
}

fn bench_records(c: &mut Criterion) {
    let db = sample_db();
    let mut group = c.benchmark_group("records");

    group.bench_function("split_fields", |b| {
        b.iter(|| split_fields(black_box(ROW), '|', None))
    });
    group.bench_function("map_record", |b| {
        b.iter(|| db.map_record(black_box(ROW)).unwrap())
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let db = sample_db();
    let records = db.record_count().unwrap() as u64;
    let mut group = c.benchmark_group("queries");
    group.throughput(Throughput::Elements(records));

    group.bench_function("all", |b| b.iter(|| db.all().unwrap()));

    for id in [0, 7, 14] {
        group.bench_with_input(BenchmarkId::new("by_id", id), &id, |b, &id| {
            b.iter(|| db.by_id(black_box(id)).unwrap())
        });
    }

    group.bench_function("find_closest", |b| {
        b.iter(|| db.find_closest(black_box(0.57), black_box(0.16)).unwrap())
    });

    group.finish();
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("wrap_distance", |b| {
        b.iter(|| wrap_distance(black_box(0.1), black_box(0.9), black_box(0.8), black_box(0.2)))
    });
}

criterion_group!(benches, bench_records, bench_queries, bench_distance);
criterion_main!(benches);
