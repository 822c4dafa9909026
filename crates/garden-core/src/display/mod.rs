//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds wrappers for collections and operation results so the
//! same data can be formatted per context.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Collection &    │    │   Markdown      │
//! │ (Crop, Weather, │───▶│ Result Wrappers │───▶│    Output       │
//! │  GardenEntry)   │    │                 │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Crops, Forecast, GardenEntries)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Calendar date formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use garden_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Imported 2 garden entries");
//! assert_eq!(status.to_string(), "Success: Imported 2 garden entries\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Crops, Forecast, GardenEntries};
pub use datetime::{DayLabel, LongDate};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
