// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! Per-page verification report.

use canopy_catalog::{HierarchyPage, PageInfo};
use canopy_tree::{materialize, Materialization, OccurrenceKey};

use crate::duplicates::{find_duplicate_category_nodes, DescentPolicy};

/// Everything the tree view needs for one verification result page.
///
/// Owns its data: `duplicates` holds occurrence keys rather than references
/// into the forest, so the report can outlive intermediate borrows and cross
/// component boundaries. Pagination fields pass through from the envelope
/// untouched.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HierarchyReport {
    /// Forest, lookup, and dangling references for this page.
    pub materialization: Materialization,
    /// Occurrence keys of every node flagged by duplicate detection, in
    /// display (pre-)order.
    pub duplicates: Vec<OccurrenceKey>,
    /// Pagination metadata (pass-through).
    pub page_info: PageInfo,
    /// Total result count across all pages (pass-through).
    pub total_elements: u64,
}

/// Materializes one result page and runs duplicate detection over it.
#[must_use]
pub fn report_page(page: HierarchyPage, policy: DescentPolicy) -> HierarchyReport {
    let materialization = materialize(page.records, &page.lineages);
    let duplicates = find_duplicate_category_nodes(&materialization.forest, policy)
        .into_iter()
        .map(|node| node.key.clone())
        .collect();
    HierarchyReport {
        materialization,
        duplicates,
        page_info: page.page_info,
        total_elements: page.total_elements,
    }
}
