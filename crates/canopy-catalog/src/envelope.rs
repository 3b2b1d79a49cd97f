// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! Paged query-result envelope for hierarchy verification queries.
//!
//! Every verification query (missing translations, duplicate names, missing
//! tags, ...) returns the same envelope: a flat record table, the lineage
//! paths reaching each record of interest, and pagination metadata. The
//! engine consumes `records` and `lineages`; `page_info`/`total_elements`
//! pass through untouched to the pagination UI.

use serde::Deserialize;

use crate::record::{CatalogRecord, Lineage};

/// Pagination metadata, passed through verbatim.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Total number of result pages.
    pub total_pages: u64,
    /// Zero-based index of this page.
    pub page_number: u64,
    /// Whether a next page exists.
    pub has_next: bool,
    /// Whether a previous page exists.
    pub has_previous: bool,
}

/// One page of a hierarchy verification result.
///
/// Field names follow the domain vocabulary; the serde renames keep the wire
/// shape of the query layer (`nodes`, `paths`, `pageInfo`, `totalElements`)
/// so a GraphQL result body deserializes directly.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyPage {
    /// Flat attribute table for every id the lineages may reference.
    #[serde(rename = "nodes")]
    pub records: Vec<CatalogRecord>,
    /// Root-to-node lineage paths for this page.
    #[serde(rename = "paths")]
    pub lineages: Vec<Lineage>,
    /// Pagination metadata (pass-through).
    pub page_info: PageInfo,
    /// Total result count across all pages (pass-through).
    pub total_elements: u64,
}
