//! # Receipt Scoring Benchmarks
//!
//! | Stage | Work |
//! |-------|------|
//! | validate | regex + chrono checks |
//! | identify | compact JSON + SHA-256 |
//! | score | seven rules |
//! | process | all of the above + store insert |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rr_01_receipt_scoring::{
    identify, score, validate, InMemoryScoreStore, Item, Receipt, ReceiptRewardsApi,
    RewardsService,
};
use rr_tests::fixtures::sample_receipt;
use std::sync::Arc;

fn receipt_with_items(count: usize) -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".into(),
        purchase_date: "2022-03-21".into(),
        purchase_time: "15:10".into(),
        total: "100.00".into(),
        items: (0..count)
            .map(|i| Item::new(format!("Item number {i}"), "1.25"))
            .collect(),
    }
}

fn bench_pipeline_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("rr-01-stages");
    let receipt = sample_receipt(0);
    let validated = validate(receipt.clone()).unwrap();

    group.bench_function("validate", |b| {
        b.iter(|| black_box(validate(black_box(receipt.clone())).is_ok()))
    });
    group.bench_function("identify", |b| {
        b.iter(|| black_box(identify(black_box(&receipt)).unwrap()))
    });
    group.bench_function("score", |b| {
        b.iter(|| black_box(score(black_box(&validated)).unwrap()))
    });

    group.finish();
}

fn bench_item_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("rr-01-process");

    for size in [1usize, 10, 100, 1000] {
        let receipt = receipt_with_items(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("process_new", size), &receipt, |b, r| {
            b.iter_batched(
                || RewardsService::new(Arc::new(InMemoryScoreStore::new())),
                |service| black_box(service.process(r.clone()).unwrap()),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    let service = RewardsService::new(Arc::new(InMemoryScoreStore::new()));
    let receipt = sample_receipt(1);
    service.process(receipt.clone()).unwrap();
    group.bench_function("process_repeat", |b| {
        b.iter(|| black_box(service.process(receipt.clone()).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline_stages, bench_item_counts);
criterion_main!(benches);
