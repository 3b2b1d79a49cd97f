// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! Sibling ordering.

use std::cmp::Ordering;

use crate::node::TreeNode;

/// Strict total order over siblings.
///
/// Primary key: record type (lexicographic) — children group by category.
/// Secondary key: display name (`name ?? id`, Rust's default `str` order).
/// Tertiary key: record id, so two distinct siblings never compare equal and
/// re-sorting can never reshuffle them.
#[must_use]
pub fn sibling_cmp(a: &TreeNode, b: &TreeNode) -> Ordering {
    a.record
        .record_type
        .as_str()
        .cmp(b.record.record_type.as_str())
        .then_with(|| a.record.display_name().cmp(b.record.display_name()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Position at which `node` keeps `children` sorted under [`sibling_cmp`].
///
/// Binary search replaces the sort-after-every-insert pattern; the resulting
/// order is identical because the comparator is a strict total order.
pub(crate) fn insertion_index(children: &[TreeNode], node: &TreeNode) -> usize {
    match children.binary_search_by(|probe| sibling_cmp(probe, node)) {
        Ok(position) | Err(position) => position,
    }
}
