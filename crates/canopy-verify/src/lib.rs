// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! canopy-verify: data-quality views over materialized forests.
//!
//! Every verification category (missing translations, duplicate names,
//! missing tags, ...) shares one result shape — a record table plus lineage
//! paths — and most categories are fully server-computed: the client just
//! materializes and renders. The one client-side analysis lives here: the
//! duplicate-category detector, which flags nodes whose `(record type,
//! display name)` pair collides anywhere in the forest.
//!
//! # Determinism
//!
//! Detection runs as an explicit two-pass algorithm: pass one counts
//! occurrences per collision key, pass two walks the forest depth-first in
//! sibling order and emits flagged nodes. Emission order is therefore the
//! display order of the tree, never hash-map iteration order.
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

mod category;
mod duplicates;
mod report;

pub use category::{UnknownCategory, VerificationCategory};
pub use duplicates::{find_duplicate_category_nodes, CollisionKey, DescentPolicy};
pub use report::{report_page, HierarchyReport};
