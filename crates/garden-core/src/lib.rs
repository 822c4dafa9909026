//! Core library for the garden planner.
//!
//! This crate fetches regional planting calendars and weather forecasts from
//! the planting API. It tracks the user's own garden through a small
//! lifecycle and derives watering and weather advice from the forecast.
//!
//! # Layers
//!
//! - **Models** ([`models`]): plain data for crops, forecast days and garden
//!   entries, with their wire formats
//! - **Advice** ([`advice`]): pure heuristics over a forecast
//! - **API** ([`api`]): the [`api::Transport`] seam and the envelope-decoding
//!   [`api::ApiClient`]
//! - **Storage** ([`db`]): optional SQLite persistence for the garden
//! - **Planner** ([`planner`]): the [`GardenPlanner`] state store and its
//!   operations
//! - **Display** ([`display`]): markdown formatting for the terminal renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use garden_core::PlannerBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("garden.db"))
//!     .build()
//!     .await?;
//!
//! planner.load_region_data("10001").await?;
//! let state = planner.snapshot();
//! for crop in state.filtered_crops() {
//!     println!("{crop}");
//! }
//! if state.should_water_today() {
//!     println!("Water your garden today");
//! }
//! # Ok(())
//! # }
//! ```

pub mod advice;
pub mod api;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use api::{ApiClient, HttpTransport, Transport};
pub use db::Database;
pub use display::{
    CreateResult, Crops, DeleteResult, Forecast, GardenEntries, OperationStatus, UpdateResult,
};
pub use error::{GardenError, Result};
pub use models::{
    ActiveView, CropCategory, CropInfo, DailyWeather, GardenEntry, GardenStatus, GardenSummary,
    RegionCode,
};
pub use params::{AddToGarden, BrowseCrops, Id, UpdateStatus};
pub use planner::{GardenPlanner, LoadOutcome, PlannerBuilder, PlannerState};
