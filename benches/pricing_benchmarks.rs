//! Performance benchmarks for quote pricing and client matching.
//!
//! These benchmarks measure:
//! - Single-visit pricing across tier table sizes
//! - Pricing a full multi-date batch
//! - Prefill matching against growing client histories

use catvisit::matching::ClientMatcher;
use catvisit::models::{ClientEntry, PricingTier};
use catvisit::services::pricing::visit_price;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use chrono::NaiveDate;
use std::time::Duration;

fn tier_table(len: usize) -> Vec<PricingTier> {
    (1..=len)
        .map(|i| PricingTier::new(i as f64, 20.0 + 5.0 * i as f64))
        .collect()
}

fn client_history(len: usize) -> Vec<ClientEntry> {
    (0..len)
        .map(|i| ClientEntry {
            name: format!("Client Number {i}"),
            address: format!("Birch Street {i}"),
            last_date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
        })
        .collect()
}

/// Benchmark a single visit price across tier table sizes.
fn bench_visit_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("visit_price_tier_count");

    for tiers in [4usize, 16, 64].iter() {
        let table = tier_table(*tiers);
        group.bench_with_input(BenchmarkId::from_parameter(tiers), &table, |b, table| {
            b.iter(|| visit_price(2.5, 3, true, table, 10.0, 5.0).unwrap());
        });
    }

    group.finish();
}

/// Benchmark pricing a full batch of dates the way a quote does.
fn bench_quote_batch(c: &mut Criterion) {
    let table = tier_table(4);
    let dates: Vec<NaiveDate> = (1..=28)
        .map(|d| NaiveDate::from_ymd_opt(2026, 8, d).unwrap())
        .collect();

    c.bench_function("quote_batch_28_days", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for date in &dates {
                let holiday = catvisit::models::is_holiday(*date);
                total += visit_price(2.5, 2, holiday, &table, 10.0, 5.0).unwrap();
            }
            total
        });
    });
}

/// Benchmark prefill matching against histories of different sizes.
fn bench_prefill_matching(c: &mut Criterion) {
    let matcher = ClientMatcher::new();
    let mut group = c.benchmark_group("prefill_match_history_size");

    for size in [10usize, 100, 1000].iter() {
        let clients = client_history(*size);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &clients,
            |b, clients| {
                b.iter(|| matcher.find_matches("client number 7", clients, 5));
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(100);
    targets = bench_visit_price,
        bench_quote_batch,
        bench_prefill_matching
}

criterion_main!(benches);
