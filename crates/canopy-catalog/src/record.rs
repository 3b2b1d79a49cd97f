// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! Flat catalog record shapes as delivered by the query layer.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog record, unique across the whole catalog.
///
/// Ids are opaque server-issued strings. They are *not* unique within a
/// materialized forest — the same record may occur under several ancestors —
/// which is why `canopy-tree` mints per-occurrence keys on top of them.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    /// View the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Category tag of a catalog record (`"Subject"`, `"Property"`, ...).
///
/// Kept as a string newtype rather than an enum: the tag set is closed on the
/// server but unknown tags must still order, compare, and round-trip like any
/// other. The derived `Ord` is the lexicographic order the sibling comparator
/// relies on.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordType(pub String);

impl RecordType {
    /// Tag for subject records.
    pub const SUBJECT: &'static str = "Subject";
    /// Tag for property records.
    pub const PROPERTY: &'static str = "Property";
    /// Tag for value-list records.
    pub const VALUE_LIST: &'static str = "ValueList";
    /// Tag for value records.
    pub const VALUE: &'static str = "Value";
    /// Tag for unit records.
    pub const UNIT: &'static str = "Unit";
    /// Tag for document records.
    pub const DOCUMENT: &'static str = "Document";
    /// Tag for dictionary records.
    pub const DICTIONARY: &'static str = "Dictionary";

    /// View the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordType {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A tag attached to a catalog record.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Tag {
    /// Tag identifier.
    pub id: RecordId,
    /// Human-readable tag name.
    pub name: String,
}

/// Flat attribute record for one catalog entry.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Catalog-wide unique identifier.
    pub id: RecordId,
    /// Category tag (primary grouping/sort key).
    pub record_type: RecordType,
    /// Preferred display name; absent records fall back to the id.
    #[serde(default)]
    pub name: Option<String>,
    /// Tags attached to this record.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl CatalogRecord {
    /// The name shown to users: `name` when present, otherwise the raw id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.id.as_str())
    }
}

/// One root-to-node lineage through the catalog hierarchy.
///
/// The server linearizes its hierarchy DAG into independent lineage paths;
/// the same record id may appear in many lineages, at different depths and
/// under different parents. An empty lineage is legal and contributes
/// nothing to a forest.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lineage(pub Vec<RecordId>);

impl Lineage {
    /// Ids from root to the node of interest.
    pub fn ids(&self) -> &[RecordId] {
        &self.0
    }

    /// Whether the lineage carries no ids at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<RecordId>> for Lineage {
    fn from(ids: Vec<RecordId>) -> Self {
        Self(ids)
    }
}

impl FromIterator<RecordId> for Lineage {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: Option<&str>) -> CatalogRecord {
        CatalogRecord {
            id: RecordId::from(id),
            record_type: RecordType::from(RecordType::PROPERTY),
            name: name.map(str::to_owned),
            tags: Vec::new(),
        }
    }

    #[test]
    fn display_name_falls_back_to_id() {
        assert_eq!(record("p1", Some("Length")).display_name(), "Length");
        assert_eq!(record("p1", None).display_name(), "p1");
    }

    #[test]
    fn record_type_orders_lexicographically() {
        let property = RecordType::from(RecordType::PROPERTY);
        let subject = RecordType::from(RecordType::SUBJECT);
        assert!(property < subject);
    }
}
