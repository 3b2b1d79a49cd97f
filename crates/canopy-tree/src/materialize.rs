// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! Folding lineage paths into a deduplicated forest.

use std::sync::Arc;

use canopy_catalog::{CatalogRecord, Lineage, RecordId, RecordLookup};

use crate::key::OccurrenceKey;
use crate::node::{Forest, TreeNode};
use crate::order::insertion_index;

/// A lineage element whose id was absent from the record table.
///
/// The element and everything below it are unreachable without their parent,
/// so materialization keeps the already-built prefix and drops the remainder
/// of that lineage.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DanglingRef {
    /// Index of the offending lineage within the input slice.
    pub lineage: usize,
    /// Depth of the unresolvable element within that lineage.
    pub depth: usize,
    /// The id that failed to resolve.
    pub id: RecordId,
}

/// Result of one materialization pass.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Materialization {
    /// The deduplicated, deterministically ordered forest.
    pub forest: Forest,
    /// Id-keyed attribute lookup shared with forest occurrences.
    pub lookup: RecordLookup,
    /// Lineage elements that failed to resolve, in input order.
    pub dangling: Vec<DanglingRef>,
}

/// Folds one page of `(records, lineages)` into a forest.
///
/// For every lineage the walk descends from the synthetic root, reusing the
/// existing child for a `(parent, id)` pair when one exists and otherwise
/// inserting a new occurrence at its sibling-order position. Shared lineage
/// prefixes therefore collapse into a single chain, while the same record id
/// under different parents stays a distinct occurrence with its own
/// [`OccurrenceKey`].
///
/// Pure besides the `tracing` warning emitted per dangling reference; the
/// same inputs always produce a structurally identical result.
#[must_use]
pub fn materialize(records: Vec<CatalogRecord>, lineages: &[Lineage]) -> Materialization {
    let lookup = RecordLookup::from_records(records);
    let mut forest = Forest::default();
    let mut dangling = Vec::new();

    for (lineage_index, lineage) in lineages.iter().enumerate() {
        let mut cursor = &mut forest.roots;
        let mut prefix: Option<OccurrenceKey> = None;

        for (depth, id) in lineage.ids().iter().enumerate() {
            let Some(record) = lookup.get(id) else {
                tracing::warn!(
                    lineage = lineage_index,
                    depth,
                    id = %id,
                    "lineage references an id missing from the record table; dropping remainder"
                );
                dangling.push(DanglingRef {
                    lineage: lineage_index,
                    depth,
                    id: id.clone(),
                });
                break;
            };

            let key = prefix
                .as_ref()
                .map_or_else(|| OccurrenceKey::root(id), |parent| parent.child(id));

            let position = match cursor.iter().position(|child| &child.id == id) {
                Some(existing) => existing,
                None => {
                    let node = TreeNode {
                        id: id.clone(),
                        key: key.clone(),
                        record: Arc::clone(record),
                        children: Vec::new(),
                    };
                    let at = insertion_index(cursor, &node);
                    cursor.insert(at, node);
                    at
                }
            };

            prefix = Some(key);
            cursor = &mut cursor[position].children;
        }
    }

    Materialization {
        forest,
        lookup,
        dangling,
    }
}
