use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::DateTime;

use stockcast_core::{ItemId, Period};
use stockcast_engine::InventoryEngine;
use stockcast_records::{RecordStore, SalesRecord};
use std::sync::Arc;

/// Naive baseline: forecast by scanning the full flat sales table per call,
/// the way a DataFrame filter would.
fn naive_forecast(sales: &[SalesRecord], item_id: &ItemId, period: Period) -> Option<f64> {
    let mut matched: Vec<&SalesRecord> = sales.iter().filter(|r| &r.item_id == item_id).collect();
    if matched.is_empty() {
        return None;
    }
    matched.sort_by_key(|r| r.timestamp);

    let window = period.window_size();
    let tail = &matched[matched.len().saturating_sub(window)..];
    let mean = tail.iter().map(|r| r.quantity).sum::<f64>() / tail.len() as f64;
    Some((mean * 100.0).round() / 100.0)
}

fn make_sales(items: usize, records_per_item: usize) -> Vec<SalesRecord> {
    let mut sales = Vec::with_capacity(items * records_per_item);
    for item in 0..items {
        for i in 0..records_per_item {
            sales.push(SalesRecord {
                item_id: ItemId::new(format!("item-{item:05}")),
                timestamp: DateTime::from_timestamp(1_700_000_000 + i as i64 * 86_400, 0).unwrap(),
                // Deterministic pseudo-variation; values are irrelevant to timing.
                quantity: ((item * 31 + i * 7) % 50) as f64,
            });
        }
    }
    sales
}

fn bench_forecast_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast_lookup");

    for &items in &[100usize, 1_000, 10_000] {
        let sales = make_sales(items, 30);
        let engine = InventoryEngine::new(Arc::new(RecordStore::new(sales.clone(), vec![])));
        let probe = ItemId::new(format!("item-{:05}", items / 2));

        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::new("indexed_store", items), &items, |b, _| {
            b.iter(|| {
                let result = engine.forecast(black_box(&probe), Period::Daily).unwrap();
                black_box(result.predicted_demand)
            })
        });

        group.bench_with_input(BenchmarkId::new("full_scan", items), &items, |b, _| {
            b.iter(|| {
                let demand = naive_forecast(black_box(&sales), black_box(&probe), Period::Daily);
                black_box(demand)
            })
        });
    }

    group.finish();
}

fn bench_store_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_build");

    for &items in &[1_000usize, 10_000] {
        let sales = make_sales(items, 30);
        group.throughput(Throughput::Elements((items * 30) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(items), &items, |b, _| {
            b.iter(|| black_box(RecordStore::new(sales.clone(), vec![])))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_forecast_lookup, bench_store_build);
criterion_main!(benches);
