//! Parameter structures for garden planner operations
//!
//! Plain parameter structs shared by every interface that drives the planner.
//! They carry no framework derives beyond serde, so the CLI (or any other
//! front end) defines its own argument types and converts into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │ GardenPlanner   │
//! │  (clap derives) │───▶│ (serde only)    │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{CropCategory, GardenStatus};

/// Generic parameters for operations requiring just an entry ID.
///
/// Used for remove and advance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the garden entry to operate on
    pub id: u64,
}

/// Parameters for narrowing the crop list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseCrops {
    /// Case-insensitive name substring; empty matches all
    #[serde(default)]
    pub query: String,
    /// Category keyword filter
    #[serde(default)]
    pub category: CropCategory,
}

/// Parameters for adding a fetched crop to the garden by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddToGarden {
    /// Crop name as it appears in the planting calendar (case-insensitive)
    pub crop: String,
    /// Planting date in `YYYY-MM-DD` form
    pub planting_date: String,
}

/// Parameters for setting an entry's status directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatus {
    /// The ID of the garden entry
    pub id: u64,
    /// New status; any transition is allowed
    pub status: GardenStatus,
}
