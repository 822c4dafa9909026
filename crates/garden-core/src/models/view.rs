//! Which screen the rendering layer should show.

use serde::{Deserialize, Serialize};

/// Active view selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    /// Crop browser and add form
    #[default]
    Plan,
    /// The user's garden list
    Garden,
    /// Forecast and watering advice
    Weather,
}

impl ActiveView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Plan => "plan",
            ActiveView::Garden => "garden",
            ActiveView::Weather => "weather",
        }
    }
}

