// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! Catalog data model shared across the Canopy verification engine.
//!
//! `canopy-catalog` owns the flat record shapes the query layer hands us
//! (records, lineage paths, page envelopes) and the id-keyed lookup built
//! from them. It knows nothing about trees; folding lineages into a forest
//! lives in `canopy-tree`.
//!
//! # Determinism
//!
//! The lookup map uses an unordered hash map internally and therefore never
//! exposes iteration order through its public API. Anything that feeds
//! ordered output must derive its order elsewhere (sibling ordering lives in
//! `canopy-tree`).
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod envelope;
mod lookup;
mod record;

pub use envelope::{HierarchyPage, PageInfo};
pub use lookup::RecordLookup;
pub use record::{CatalogRecord, Lineage, RecordId, RecordType, Tag};
