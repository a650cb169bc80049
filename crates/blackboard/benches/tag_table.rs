// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::cast_precision_loss)] // Synthetic values
#![allow(clippy::missing_panics_doc)] // Benches panic on failure

use blackboard::{TagTable, Variant};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

const TAG_COUNT: usize = 256;

fn populated_table() -> TagTable {
    let mut table = TagTable::with_capacity(TAG_COUNT);
    for i in 0..TAG_COUNT {
        let tag = format!("tag.{i}");
        let added = match i % 4 {
            0 => table.add_tag(tag, i as i64),
            1 => table.add_tag(tag, i as f64 * 0.5),
            2 => table.add_tag(tag, i % 3 == 0),
            _ => table.add_tag(tag, format!("value-{i}")),
        };
        added.unwrap();
    }
    table
}

// ============================================================================
// Variant Benchmarks
// ============================================================================

/// Benchmark: typed read of a matching primitive
fn bench_variant_try_get_hit(c: &mut Criterion) {
    let v = Variant::from(42i64);
    c.bench_function("variant_try_get_hit", |b| {
        b.iter(|| black_box(&v).try_get::<i64>())
    });
}

/// Benchmark: typed read of a mismatched primitive
fn bench_variant_try_get_mismatch(c: &mut Criterion) {
    let v = Variant::from(42i64);
    c.bench_function("variant_try_get_mismatch", |b| {
        b.iter(|| black_box(&v).try_get::<f64>())
    });
}

/// Benchmark: clone of a string variant (shared handle, no text copy)
fn bench_variant_clone_string(c: &mut Criterion) {
    let v = Variant::from("a reasonably long clip name for the benchmark");
    c.bench_function("variant_clone_string", |b| b.iter(|| black_box(&v).clone()));
}

// ============================================================================
// TagTable Benchmarks
// ============================================================================

/// Benchmark: per-tick poll of a present tag
fn bench_table_try_get_value(c: &mut Criterion) {
    let table = populated_table();
    c.bench_function("table_try_get_value", |b| {
        b.iter(|| table.try_get_value::<i64>(black_box("tag.128")))
    });
}

/// Benchmark: poll of a missing tag
fn bench_table_try_get_missing(c: &mut Criterion) {
    let table = populated_table();
    c.bench_function("table_try_get_missing", |b| {
        b.iter(|| table.try_get_value::<i64>(black_box("tag.missing")))
    });
}

/// Benchmark: overwrite of an existing tag
fn bench_table_set_overwrite(c: &mut Criterion) {
    let mut table = populated_table();
    let mut tick = 0i64;
    c.bench_function("table_set_overwrite", |b| {
        b.iter(|| {
            tick = tick.wrapping_add(1);
            table.set(black_box("tag.0"), tick)
        })
    });
}

/// Benchmark: building a full table with strict inserts
fn bench_table_build(c: &mut Criterion) {
    c.bench_function("table_build_256", |b| {
        b.iter_batched(|| (), |()| populated_table(), BatchSize::SmallInput)
    });
}

criterion_group!(
    variant_benches,
    bench_variant_try_get_hit,
    bench_variant_try_get_mismatch,
    bench_variant_clone_string
);

criterion_group!(
    table_benches,
    bench_table_try_get_value,
    bench_table_try_get_missing,
    bench_table_set_overwrite,
    bench_table_build
);

criterion_main!(variant_benches, table_benches);
