//! Planting calendar rows as served by the planting-data endpoint.

use serde::{Deserialize, Serialize};

/// One crop row from a regional planting calendar.
///
/// Field names on the wire are the column headers of the calendar table, so
/// they are renamed here. Columns the planner does not use are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropInfo {
    /// Crop name, the key for filtering and selection
    #[serde(rename = "Crop", default)]
    pub name: String,

    /// When to start seeds indoors
    #[serde(
        rename = "Start Seeds Indoors",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub indoor_start: Option<String>,

    /// When to transplant seedlings outdoors
    #[serde(
        rename = "Plant Seedlings",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub seedling_transplant: Option<String>,

    /// When to sow or plant directly outdoors
    #[serde(
        rename = "Direct Sow/Plant",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub direct_sow: Option<String>,
}

impl CropInfo {
    /// Creates a crop row with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Case-insensitive substring match against the crop name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// True if any of the schedule columns is present.
    pub fn has_schedule(&self) -> bool {
        self.indoor_start.is_some() || self.seedling_transplant.is_some() || self.direct_sow.is_some()
    }
}
