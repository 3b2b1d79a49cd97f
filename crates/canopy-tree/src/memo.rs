// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! Single-slot memoization keyed on input content identity.

use std::sync::Arc;

use canopy_catalog::{CatalogRecord, Lineage};

use crate::fingerprint::{fingerprint_inputs, FingerprintError, InputFingerprint};
use crate::materialize::{materialize, Materialization};

/// Caches the materialization of the most recent input pair.
///
/// A verification view re-renders many times per query result; the cache
/// makes repeated renders reuse one materialization until the underlying
/// inputs change. The slot is keyed by [`InputFingerprint`], so content
/// equality — not reference identity — decides reuse, and it holds exactly
/// one entry: the cache lifetime matches the lifetime of the query result
/// that produced the inputs.
#[derive(Debug, Default)]
pub struct MaterializeCache {
    slot: Option<(InputFingerprint, Arc<Materialization>)>,
}

impl MaterializeCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached materialization for `(records, lineages)`,
    /// recomputing and replacing the slot when the inputs' fingerprint
    /// differs from the cached one.
    pub fn get_or_materialize(
        &mut self,
        records: &[CatalogRecord],
        lineages: &[Lineage],
    ) -> Result<Arc<Materialization>, FingerprintError> {
        let fingerprint = fingerprint_inputs(records, lineages)?;
        if let Some((cached, materialization)) = &self.slot {
            if *cached == fingerprint {
                return Ok(Arc::clone(materialization));
            }
        }
        let fresh = Arc::new(materialize(records.to_vec(), lineages));
        self.slot = Some((fingerprint, Arc::clone(&fresh)));
        Ok(fresh)
    }

    /// Drops the cached slot.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// Fingerprint of the currently cached inputs, if any.
    #[must_use]
    pub fn cached_fingerprint(&self) -> Option<InputFingerprint> {
        self.slot.as_ref().map(|(fingerprint, _)| *fingerprint)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use canopy_catalog::{RecordId, RecordType};

    use super::*;

    fn record(id: &str) -> CatalogRecord {
        CatalogRecord {
            id: RecordId::from(id),
            record_type: RecordType::from(RecordType::SUBJECT),
            name: None,
            tags: Vec::new(),
        }
    }

    fn lineage(ids: &[&str]) -> Lineage {
        ids.iter().copied().map(RecordId::from).collect()
    }

    #[test]
    fn identical_inputs_reuse_the_cached_materialization() {
        let mut cache = MaterializeCache::new();
        let records = [record("a")];
        let lineages = [lineage(&["a"])];
        let first = cache.get_or_materialize(&records, &lineages).unwrap();
        let second = cache.get_or_materialize(&records, &lineages).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn changed_inputs_replace_the_slot() {
        let mut cache = MaterializeCache::new();
        let records = [record("a")];
        let first = cache
            .get_or_materialize(&records, &[lineage(&["a"])])
            .unwrap();
        let second = cache
            .get_or_materialize(&records, &[lineage(&["a"]), lineage(&["a"])])
            .unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        // Same tree either way: replaying a lineage folds into the same chain.
        assert_eq!(first.forest, second.forest);
    }

    #[test]
    fn invalidate_clears_the_slot() {
        let mut cache = MaterializeCache::new();
        let records = [record("a")];
        let lineages = [lineage(&["a"])];
        let _ = cache.get_or_materialize(&records, &lineages).unwrap();
        assert!(cache.cached_fingerprint().is_some());
        cache.invalidate();
        assert!(cache.cached_fingerprint().is_none());
    }
}
