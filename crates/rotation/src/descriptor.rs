//! Dataset descriptors and the suitable rotation pool.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RotationError;

/// How reliably a dataset's source covers the world's countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityTier {
    /// Broad, recent coverage.
    High,
    /// Usable coverage with gaps.
    Medium,
    /// Too sparse for a daily challenge.
    Low,
}

impl AvailabilityTier {
    /// Returns `true` if datasets of this tier may enter the rotation.
    pub fn is_suitable(self) -> bool {
        matches!(self, Self::High | Self::Medium)
    }
}

/// A dataset known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetDescriptor {
    /// Stable unique identifier.
    pub id: String,
    /// Thematic category, e.g. `"economy"`.
    pub category: String,
    /// Data availability tier.
    #[serde(alias = "availability_tier")]
    pub tier: AvailabilityTier,
}

impl DatasetDescriptor {
    /// Creates a descriptor.
    pub fn new(id: impl Into<String>, category: impl Into<String>, tier: AvailabilityTier) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            tier,
        }
    }
}

/// Returns the ids of suitable descriptors, in registry order.
///
/// # Errors
///
/// Returns [`RotationError::DuplicateDataset`] if any two descriptors share
/// an id. An empty result is not an error here; the scheduler rejects it.
pub fn suitable_pool(descriptors: &[DatasetDescriptor]) -> Result<Vec<String>, RotationError> {
    let mut seen = HashSet::with_capacity(descriptors.len());
    for d in descriptors {
        if !seen.insert(d.id.as_str()) {
            return Err(RotationError::DuplicateDataset { id: d.id.clone() });
        }
    }
    Ok(descriptors
        .iter()
        .filter(|d| d.tier.is_suitable())
        .map(|d| d.id.clone())
        .collect())
}
