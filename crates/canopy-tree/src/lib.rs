// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! canopy-tree: deterministic lineage-to-forest materializer.
//!
//! The query layer linearizes the catalog's hierarchy DAG into independent
//! root-to-node lineage paths. This crate folds one page of `(records,
//! lineages)` back into a navigable forest: shared lineage prefixes collapse
//! into a single chain of tree nodes, every occurrence gets a synthetic
//! globally unique key, and siblings carry a strict total order.
//!
//! # Determinism
//!
//! `materialize` is a pure function of its inputs: the same `(records,
//! lineages)` pair always produces a structurally identical forest — same
//! occurrence keys, same child order. Nothing in the construction iterates an
//! unordered map, and the sibling order falls back to an id compare so no two
//! distinct siblings ever compare equal. [`InputFingerprint`] hashes a
//! canonical encoding of the inputs so callers can memoize on content
//! identity.
//!
//! # Degradation
//!
//! Malformed server data degrades instead of failing: a lineage id missing
//! from the record table ends descent along that lineage and is reported in
//! [`Materialization::dangling`] (and via `tracing`), empty lineages are
//! no-ops, and duplicate record ids resolve last-write-wins.
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

mod fingerprint;
mod key;
mod materialize;
mod memo;
mod node;
mod order;

pub use fingerprint::{fingerprint_inputs, FingerprintError, InputFingerprint};
pub use key::OccurrenceKey;
pub use materialize::{materialize, DanglingRef, Materialization};
pub use memo::MaterializeCache;
pub use node::{Forest, TreeNode};
pub use order::sibling_cmp;
