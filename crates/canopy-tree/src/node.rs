// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! Materialized tree node and forest shapes.

use std::sync::Arc;

use canopy_catalog::{CatalogRecord, RecordId};
use serde::Serialize;

use crate::key::OccurrenceKey;

/// One occurrence of a catalog record within a materialized forest.
///
/// `id` is only unique within a sibling group; `key` is unique across the
/// whole forest. `record` aliases the entry in the page's
/// [`canopy_catalog::RecordLookup`], so repeated occurrences of the same
/// record share one allocation.
///
/// The `Serialize` impl emits the field names the tree-view layer consumes
/// (`id`, `nodeId`, `data`, `children`).
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct TreeNode {
    /// Catalog record id of this occurrence.
    pub id: RecordId,
    /// Synthetic per-occurrence render key.
    #[serde(rename = "nodeId")]
    pub key: OccurrenceKey,
    /// Shared attribute record for display fields.
    #[serde(rename = "data")]
    pub record: Arc<CatalogRecord>,
    /// Child occurrences, kept in sibling order at all times.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Number of nodes in this subtree, the occurrence itself included.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::subtree_len).sum::<usize>()
    }
}

/// Synthetic root: the ordered collection of depth-0 occurrences.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct Forest {
    /// Top-level tree nodes, in sibling order.
    #[serde(rename = "children")]
    pub roots: Vec<TreeNode>,
}

impl Forest {
    /// Whether the forest holds no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of occurrences in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.iter().map(TreeNode::subtree_len).sum()
    }

    /// Depth-first pre-order walk over every occurrence, respecting sibling
    /// order. The traversal order is the display order of an expanded tree.
    /// Visited borrows live as long as the forest, so collecting them is
    /// legal.
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&'a TreeNode)) {
        fn go<'a>(node: &'a TreeNode, visit: &mut impl FnMut(&'a TreeNode)) {
            visit(node);
            for child in &node.children {
                go(child, visit);
            }
        }
        for root in &self.roots {
            go(root, &mut visit);
        }
    }
}
