//! Aggregate counts over the garden list.

use serde::{Deserialize, Serialize};

use super::{GardenEntry, GardenStatus};

/// Status counts for the garden. Always computed from the current list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GardenSummary {
    /// Number of entries
    pub total: usize,
    /// Entries still planned
    pub planned: usize,
    /// Entries in the ground
    pub planted: usize,
    /// Entries harvested
    pub harvested: usize,
}

impl GardenSummary {
    /// Count statuses across `entries`.
    pub fn from_entries(entries: &[GardenEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut summary, entry| {
            summary.total += 1;
            match entry.status {
                GardenStatus::Planned => summary.planned += 1,
                GardenStatus::Planted => summary.planted += 1,
                GardenStatus::Harvested => summary.harvested += 1,
            }
            summary
        })
    }
}
