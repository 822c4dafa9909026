//! Lifecycle status of a garden entry.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of garden entry statuses.
///
/// The natural progression is Planned → Planted → Harvested, but the planner
/// accepts any status directly; see [`GardenStatus::next`] for the forward
/// step used by "mark as ..." actions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GardenStatus {
    /// Entry is planned but not in the ground yet
    #[default]
    Planned,

    /// Crop has been planted
    Planted,

    /// Crop has been harvested
    Harvested,
}

impl FromStr for GardenStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planned" => Ok(GardenStatus::Planned),
            "planted" => Ok(GardenStatus::Planted),
            "harvested" => Ok(GardenStatus::Harvested),
            _ => Err(format!("Invalid garden status: {s}")),
        }
    }
}

impl GardenStatus {
    /// Convert to the wire/database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GardenStatus::Planned => "planned",
            GardenStatus::Planted => "planted",
            GardenStatus::Harvested => "harvested",
        }
    }

    /// The status one step further along, or `None` once harvested.
    pub fn next(&self) -> Option<GardenStatus> {
        match self {
            GardenStatus::Planned => Some(GardenStatus::Planted),
            GardenStatus::Planted => Some(GardenStatus::Harvested),
            GardenStatus::Harvested => None,
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use garden_core::models::GardenStatus;
    ///
    /// assert_eq!(GardenStatus::Planned.with_icon(), "○ Planned");
    /// assert_eq!(GardenStatus::Planted.with_icon(), "➤ Planted");
    /// assert_eq!(GardenStatus::Harvested.with_icon(), "✓ Harvested");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            GardenStatus::Planned => "○ Planned",
            GardenStatus::Planted => "➤ Planted",
            GardenStatus::Harvested => "✓ Harvested",
        }
    }
}
