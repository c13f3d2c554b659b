//! Window computation benchmarks.
//!
//! Eviction and visibility scans are linear in the number of loaded pages /
//! rendered items and run on every scroll event, so they must stay cheap for
//! windows of a few thousand items.
//!
//! Run with: cargo bench --bench window_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use msgwin::geometry::{MeasuredSurface, ScrollExtents};
use msgwin::model::{ItemRef, PageKey, PageOrdering};
use msgwin::window::{
    evict_from_bottom, evict_from_top, messages_in_view, rotate_away_from_index, EvictionPolicy,
};

const ITEMS_PER_PAGE: usize = 20;
const ITEM_HEIGHT: usize = 48;

/// Loaded window with `num_pages` pages of fixed-height items.
fn generate_window(num_pages: usize) -> (PageOrdering, MeasuredSurface) {
    let keys: Vec<PageKey> = (0..num_pages)
        .map(|i| PageKey::new(format!("page-{i}")).expect("valid page key"))
        .collect();

    let items = keys.iter().flat_map(|key| {
        (0..ITEMS_PER_PAGE).map(move |j| {
            (
                ItemRef::new(format!("{key}-m{j}")).expect("valid item ref"),
                key.clone(),
                ITEM_HEIGHT,
            )
        })
    });

    let page_height = (ITEMS_PER_PAGE * ITEM_HEIGHT) as f64;
    let mut surface = keys
        .iter()
        .fold(MeasuredSurface::new(), |s, k| s.with_page(k.clone(), page_height))
        .with_stacked_items(items)
        .with_wrapper_height(900.0);
    let total = surface.stacked_height() as f64;
    surface = surface.with_scroll(ScrollExtents::new(total / 2.0, 900.0, total));

    (
        PageOrdering::new(keys).expect("unique keys"),
        surface,
    )
}

fn benchmark_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction");

    for num_pages in [10, 100, 1_000] {
        let (ordering, surface) = generate_window(num_pages);

        group.bench_with_input(BenchmarkId::new("top", num_pages), &num_pages, |b, _| {
            b.iter(|| evict_from_top(black_box(&ordering), &surface, EvictionPolicy::default()))
        });
        group.bench_with_input(BenchmarkId::new("bottom", num_pages), &num_pages, |b, _| {
            b.iter(|| evict_from_bottom(black_box(&ordering), &surface, EvictionPolicy::default()))
        });
    }

    group.finish();
}

fn benchmark_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("messages_in_view");

    for num_pages in [10, 100, 1_000] {
        let (_, surface) = generate_window(num_pages);

        group.bench_with_input(BenchmarkId::new("full_scan", num_pages), &surface, |b, s| {
            b.iter(|| messages_in_view(black_box(s)).count())
        });
        group.bench_with_input(BenchmarkId::new("first_only", num_pages), &surface, |b, s| {
            b.iter(|| messages_in_view(black_box(s)).next())
        });
    }

    group.finish();
}

fn benchmark_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate_away_from_index");

    for length in [10, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("drain", length), &length, |b, &length| {
            b.iter(|| rotate_away_from_index(black_box(length / 3), length).sum::<usize>())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_eviction,
    benchmark_visibility,
    benchmark_rotation
);
criterion_main!(benches);
