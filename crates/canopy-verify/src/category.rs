// SPDX-License-Identifier: Apache-2.0
// © Canopy Contributors <https://github.com/canopy-hq/canopy>
//! The family of hierarchy verification queries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the data-quality checks the catalog server exposes.
///
/// All categories return the shared `(records, lineages)` page shape, so the
/// materializer and the tree view are category-agnostic; the category only
/// keys which query is issued and how results are labelled.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerificationCategory {
    /// Records missing a translation in at least one catalog language.
    MissingTranslations,
    /// Records whose name collides with a sibling of the same category.
    DuplicateNames,
    /// Records carrying no tags.
    MissingTags,
    /// Records reachable from no dictionary root.
    OrphanedNodes,
    /// Records without a description in the primary language.
    MissingDescriptions,
    /// Properties whose unit assignments disagree across value lists.
    InconsistentUnits,
}

impl VerificationCategory {
    /// Every category, in stable display order.
    pub const ALL: [Self; 6] = [
        Self::MissingTranslations,
        Self::DuplicateNames,
        Self::MissingTags,
        Self::OrphanedNodes,
        Self::MissingDescriptions,
        Self::InconsistentUnits,
    ];

    /// The wire/query-string form of the category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingTranslations => "missingTranslations",
            Self::DuplicateNames => "duplicateNames",
            Self::MissingTags => "missingTags",
            Self::OrphanedNodes => "orphanedNodes",
            Self::MissingDescriptions => "missingDescriptions",
            Self::InconsistentUnits => "inconsistentUnits",
        }
    }
}

impl std::fmt::Display for VerificationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category string the engine does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown verification category: {0}")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for VerificationCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}
