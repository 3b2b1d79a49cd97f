// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! Content identity for memoization.

use canopy_catalog::{CatalogRecord, Lineage};
use ciborium::ser::into_writer;
use serde::Serialize;
use thiserror::Error;

/// BLAKE3 hash of the canonical encoding of a `(records, lineages)` pair.
///
/// Records are encoded sorted by id so record table order does not perturb
/// the identity; lineages are encoded in given order because lineage order
/// is part of the input contract. This is *input* identity, not output
/// identity: two inputs that happen to materialize the same forest may still
/// fingerprint differently.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct InputFingerprint(pub [u8; 32]);

impl InputFingerprint {
    /// View the fingerprint as raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Display for InputFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Errors from computing an [`InputFingerprint`].
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// The canonical CBOR encoding failed.
    #[error("canonical encode failed: {0}")]
    Encode(#[from] ciborium::ser::Error<std::io::Error>),
}

#[derive(Serialize)]
struct CanonicalInputs<'a> {
    records: Vec<&'a CatalogRecord>,
    lineages: &'a [Lineage],
}

/// Computes the content identity of one materialization input pair.
pub fn fingerprint_inputs(
    records: &[CatalogRecord],
    lineages: &[Lineage],
) -> Result<InputFingerprint, FingerprintError> {
    let mut sorted: Vec<&CatalogRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));
    let canonical = CanonicalInputs {
        records: sorted,
        lineages,
    };
    let mut bytes = Vec::new();
    into_writer(&canonical, &mut bytes)?;
    Ok(InputFingerprint(*blake3::hash(&bytes).as_bytes()))
}
