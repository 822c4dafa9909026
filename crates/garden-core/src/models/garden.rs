//! Garden entry model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{CropInfo, GardenStatus};

/// Snapshot of a crop's schedule columns taken when it was added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantingInfo {
    /// When to start seeds indoors
    pub indoor_start: Option<String>,

    /// When to transplant seedlings
    pub seedlings: Option<String>,

    /// When to sow directly
    pub direct_sow: Option<String>,
}

impl From<&CropInfo> for PlantingInfo {
    fn from(crop: &CropInfo) -> Self {
        Self {
            indoor_start: crop.indoor_start.clone(),
            seedlings: crop.seedling_transplant.clone(),
            direct_sow: crop.direct_sow.clone(),
        }
    }
}

/// One tracked planting of a crop.
///
/// Entries hold a copy of the crop name and schedule; there is no live link
/// back to the planting calendar they came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GardenEntry {
    /// Unique identifier, assigned at creation
    pub id: u64,

    /// Crop name copied from the calendar
    pub crop: String,

    /// Planned planting date
    pub planting_date: Date,

    /// Schedule snapshot
    #[serde(default)]
    pub planting_info: PlantingInfo,

    /// Current lifecycle status
    #[serde(default)]
    pub status: GardenStatus,
}

impl GardenEntry {
    /// Creates a planned entry for `crop` on `planting_date`.
    pub fn planned(id: u64, crop: &CropInfo, planting_date: Date) -> Self {
        Self {
            id,
            crop: crop.name.clone(),
            planting_date,
            planting_info: PlantingInfo::from(crop),
            status: GardenStatus::Planned,
        }
    }
}
