// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! Synthetic per-occurrence keys.

use canopy_catalog::RecordId;
use serde::Serialize;

/// Globally unique key for one occurrence of a record within a forest.
///
/// The key is the colon-joined lineage prefix up to and including the
/// occurrence (`"a:b:c"`). Two occurrences of the same record under
/// different ancestors share a [`RecordId`] but never an `OccurrenceKey`,
/// which makes the key the right render key for tree rows downstream.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct OccurrenceKey(String);

impl OccurrenceKey {
    /// Key for a depth-0 occurrence (a forest root).
    #[must_use]
    pub fn root(id: &RecordId) -> Self {
        Self(id.as_str().to_owned())
    }

    /// Key for a child occurrence one level below `self`.
    #[must_use]
    pub fn child(&self, id: &RecordId) -> Self {
        let mut joined = String::with_capacity(self.0.len() + 1 + id.as_str().len());
        joined.push_str(&self.0);
        joined.push(':');
        joined.push_str(id.as_str());
        Self(joined)
    }

    /// The joined key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OccurrenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
