// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! Id-keyed attribute lookup over one page of catalog records.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::record::{CatalogRecord, RecordId};

/// O(1) attribute resolution for the records of one query result.
///
/// Records are wrapped in [`Arc`] so every occurrence of a record in a
/// materialized forest aliases the same allocation; consumers can rely on
/// pointer identity (`Arc::ptr_eq`) to detect shared records.
///
/// Duplicate ids in the input are not expected but must not fail: the last
/// record wins, matching the one-pass build order.
#[derive(Debug, Clone, Default)]
pub struct RecordLookup {
    map: FxHashMap<RecordId, Arc<CatalogRecord>>,
}

impl RecordLookup {
    /// Builds the lookup in one pass over `records`.
    #[must_use]
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        let map = records
            .into_iter()
            .map(|record| (record.id.clone(), Arc::new(record)))
            .collect();
        Self { map }
    }

    /// Resolves the record for `id`, if the page carried one.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&Arc<CatalogRecord>> {
        self.map.get(id)
    }

    /// Whether the page carried a record for `id`.
    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.map.contains_key(id)
    }

    /// Number of distinct record ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the lookup is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl PartialEq for RecordLookup {
    fn eq(&self, other: &Self) -> bool {
        self.map.len() == other.map.len()
            && self
                .map
                .iter()
                .all(|(id, record)| other.map.get(id).is_some_and(|r| r == record))
    }
}

impl Eq for RecordLookup {}
