// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! Duplicate-category detection over a materialized forest.

use canopy_catalog::CatalogRecord;
use canopy_tree::{Forest, TreeNode};
use rustc_hash::FxHashMap;

/// Grouping key for duplicate detection: category plus display name.
///
/// Borrowed from the record so the counting pass allocates nothing per node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CollisionKey<'a> {
    /// The record's category tag.
    pub record_type: &'a str,
    /// The record's display name (`name ?? id`).
    pub display_name: &'a str,
}

impl<'a> CollisionKey<'a> {
    /// The collision key of one record.
    #[must_use]
    pub fn of(record: &'a CatalogRecord) -> Self {
        Self {
            record_type: record.record_type.as_str(),
            display_name: record.display_name(),
        }
    }
}

/// How detection treats the descendants of a flagged node.
///
/// The shipped tree view shows the entire subtree under a flagged ancestor,
/// so [`DescentPolicy::FlaggedSubtree`] is the default; [`FlaggedOnly`]
/// restricts the result to nodes whose own key collides. The traversal
/// mechanics are shared — only the emission rule differs.
///
/// [`FlaggedOnly`]: DescentPolicy::FlaggedOnly
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DescentPolicy {
    /// A flagged node pulls its whole subtree into the result.
    #[default]
    FlaggedSubtree,
    /// Only nodes that are themselves part of a collision are emitted.
    FlaggedOnly,
}

/// Returns every occurrence participating in a `(record type, display name)`
/// collision, in depth-first pre-order respecting sibling order.
///
/// Collisions are counted across the whole forest, regardless of depth or
/// parent — two occurrences of the *same* record count as a collision, since
/// each occurrence is its own row in the rendered tree. Under the default
/// policy the result additionally contains every descendant of a flagged
/// node (see [`DescentPolicy`]).
#[must_use]
pub fn find_duplicate_category_nodes(forest: &Forest, policy: DescentPolicy) -> Vec<&TreeNode> {
    let counts = occurrence_counts(forest);
    let mut flagged = Vec::new();
    for root in &forest.roots {
        collect(root, &counts, policy, &mut flagged);
    }
    flagged
}

/// Pass one: occurrence count per collision key.
fn occurrence_counts(forest: &Forest) -> FxHashMap<CollisionKey<'_>, usize> {
    let mut counts: FxHashMap<CollisionKey<'_>, usize> = FxHashMap::default();
    forest.walk(|node| {
        *counts.entry(CollisionKey::of(&node.record)).or_insert(0) += 1;
    });
    counts
}

/// Pass two: pre-order emission under the descent policy.
fn collect<'a>(
    node: &'a TreeNode,
    counts: &FxHashMap<CollisionKey<'a>, usize>,
    policy: DescentPolicy,
    out: &mut Vec<&'a TreeNode>,
) {
    let in_collision = counts
        .get(&CollisionKey::of(&node.record))
        .is_some_and(|count| *count >= 2);

    if in_collision {
        match policy {
            DescentPolicy::FlaggedSubtree => {
                emit_subtree(node, out);
                return;
            }
            DescentPolicy::FlaggedOnly => out.push(node),
        }
    }
    for child in &node.children {
        collect(child, counts, policy, out);
    }
}

fn emit_subtree<'a>(node: &'a TreeNode, out: &mut Vec<&'a TreeNode>) {
    out.push(node);
    for child in &node.children {
        emit_subtree(child, out);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use canopy_catalog::{RecordId, RecordType};
    use canopy_tree::OccurrenceKey;

    use super::*;

    fn node(id: &str, record_type: &str, name: &str, children: Vec<TreeNode>) -> TreeNode {
        let id = RecordId::from(id);
        TreeNode {
            key: OccurrenceKey::root(&id),
            record: Arc::new(CatalogRecord {
                id: id.clone(),
                record_type: RecordType::from(record_type),
                name: Some(name.to_owned()),
                tags: Vec::new(),
            }),
            id,
            children,
        }
    }

    #[test]
    fn collision_keys_ignore_the_record_id() {
        let a = node("p1", "Property", "Length", Vec::new());
        let b = node("p2", "Property", "Length", Vec::new());
        assert_eq!(CollisionKey::of(&a.record), CollisionKey::of(&b.record));
    }

    #[test]
    fn same_name_different_category_is_no_collision() {
        let forest = Forest {
            roots: vec![
                node("p1", "Property", "Length", Vec::new()),
                node("s1", "Subject", "Length", Vec::new()),
            ],
        };
        assert!(find_duplicate_category_nodes(&forest, DescentPolicy::default()).is_empty());
    }

    #[test]
    fn policies_differ_only_on_descendants() {
        // Two "Width" subjects collide; one has a uniquely named child.
        let forest = Forest {
            roots: vec![
                node(
                    "s1",
                    "Subject",
                    "Width",
                    vec![node("p1", "Property", "Depth", Vec::new())],
                ),
                node("s2", "Subject", "Width", Vec::new()),
            ],
        };

        let subtree = find_duplicate_category_nodes(&forest, DescentPolicy::FlaggedSubtree);
        let ids: Vec<&str> = subtree.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["s1", "p1", "s2"]);

        let only = find_duplicate_category_nodes(&forest, DescentPolicy::FlaggedOnly);
        let ids: Vec<&str> = only.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2"]);
    }
}
