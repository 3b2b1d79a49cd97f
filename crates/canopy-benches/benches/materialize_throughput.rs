// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Microbenchmarks for lineage-to-forest materialization.

use canopy_catalog::{CatalogRecord, Lineage, RecordId, RecordType};
use canopy_tree::materialize;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const TYPES: [&str; 4] = ["Property", "Subject", "Unit", "ValueList"];

/// Deterministic synthetic catalog: `roots` dictionaries, each fanning out
/// to `children` entries, each with `grandchildren` leaves.
fn fixture(roots: usize, children: usize, grandchildren: usize) -> (Vec<CatalogRecord>, Vec<Lineage>) {
    let mut records = Vec::new();
    let mut lineages = Vec::new();

    for r in 0..roots {
        let root_id = format!("d{r}");
        records.push(record(&root_id, "Dictionary", r));
        for c in 0..children {
            let child_id = format!("d{r}:s{c}");
            records.push(record(&child_id, "Subject", c));
            for g in 0..grandchildren {
                let leaf_id = format!("d{r}:s{c}:p{g}");
                records.push(record(&leaf_id, TYPES[g % TYPES.len()], g));
                lineages.push(Lineage(vec![
                    RecordId(root_id.clone()),
                    RecordId(child_id.clone()),
                    RecordId(leaf_id),
                ]));
            }
        }
    }
    (records, lineages)
}

fn record(id: &str, record_type: &str, ordinal: usize) -> CatalogRecord {
    CatalogRecord {
        id: RecordId(id.to_owned()),
        record_type: RecordType(record_type.to_owned()),
        name: Some(format!("Entry {ordinal:04}")),
        tags: Vec::new(),
    }
}

/// Benchmark folding 1000 three-level lineages (10x10x10 fan-out).
fn bench_materialize_balanced(c: &mut Criterion) {
    let (records, lineages) = fixture(10, 10, 10);
    c.bench_function("materialize_balanced_1000", |b| {
        b.iter(|| {
            let out = materialize(black_box(records.clone()), black_box(&lineages));
            black_box(out.forest.len())
        })
    });
}

/// Benchmark a single hot sibling group (1 root, 1000 direct children) —
/// the worst case for per-insert position lookup.
fn bench_materialize_wide(c: &mut Criterion) {
    let (records, lineages) = fixture(1, 1000, 1);
    c.bench_function("materialize_wide_1000", |b| {
        b.iter(|| {
            let out = materialize(black_box(records.clone()), black_box(&lineages));
            black_box(out.forest.len())
        })
    });
}

/// Benchmark replaying fully overlapping lineages (dedup-dominated).
fn bench_materialize_overlapping(c: &mut Criterion) {
    let (records, mut lineages) = fixture(5, 5, 5);
    let replay = lineages.clone();
    lineages.extend(replay);
    c.bench_function("materialize_overlapping_250", |b| {
        b.iter(|| {
            let out = materialize(black_box(records.clone()), black_box(&lineages));
            black_box(out.forest.len())
        })
    });
}

criterion_group!(
    benches,
    bench_materialize_balanced,
    bench_materialize_wide,
    bench_materialize_overlapping
);
criterion_main!(benches);
