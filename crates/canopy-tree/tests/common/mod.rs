// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
#![allow(dead_code)]

use canopy_catalog::{CatalogRecord, Lineage, RecordId, RecordType};

/// Builds a record with an explicit name.
pub fn named(id: &str, record_type: &str, name: &str) -> CatalogRecord {
    CatalogRecord {
        id: RecordId::from(id),
        record_type: RecordType::from(record_type),
        name: Some(name.to_owned()),
        tags: Vec::new(),
    }
}

/// Builds a record that falls back to its id for display.
pub fn nameless(id: &str, record_type: &str) -> CatalogRecord {
    CatalogRecord {
        id: RecordId::from(id),
        record_type: RecordType::from(record_type),
        name: None,
        tags: Vec::new(),
    }
}

/// Builds a lineage from id literals.
pub fn lineage(ids: &[&str]) -> Lineage {
    ids.iter().copied().map(RecordId::from).collect()
}
