//! High-level planner API for regional planting data and the user's garden.
//!
//! This module provides the main [`GardenPlanner`] interface. The planner owns
//! the single [`PlannerState`] value and is the only way to change it; the
//! rendering layer reads snapshots or subscribes to changes.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Collaborators  │    │   Operations    │    │  PlannerState   │
//! │  ApiClient,     │◀───│ (region_ops,    │───▶│ (watch channel) │
//! │  Database       │    │  selection_ops, │    │                 │
//! │  (optional)     │    │  garden_ops)    │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Remote/Storage         Business Logic        Snapshots/Changes
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`GardenPlanner`] instances
//! - [`state`]: The [`PlannerState`] snapshot and its derived views
//! - [`region_ops`]: Loading planting and weather data for a region
//! - [`selection_ops`]: Search, category, crop selection and view switching
//! - [`garden_ops`]: Adding, updating, removing and exporting garden entries
//!
//! Every state change is one `send_modify`/`send_if_modified` closure on the
//! watch sender, so no lock is held across an await point.
//!
//! # Usage
//!
//! ```rust,no_run
//! use garden_core::{models::GardenStatus, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_api_url("http://localhost:5000/api")
//!     .build()
//!     .await?;
//!
//! planner.load_region_data("10001").await?;
//! planner.select_crop_by_name("Tomato")?;
//! let entry = planner.add_to_garden("2024-05-01").await?;
//! planner.update_status(entry.id, GardenStatus::Planted).await?;
//!
//! let summary = planner.garden_summary();
//! assert_eq!(summary.planted, 1);
//! # Ok(())
//! # }
//! ```

use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
};

use tokio::{sync::watch, task};

use crate::{
    api::ApiClient,
    db::Database,
    error::{GardenError, Result, ResultExt},
    models::GardenEntry,
};

pub mod builder;
pub mod garden_ops;
pub mod region_ops;
pub mod selection_ops;
pub mod state;


pub use builder::PlannerBuilder;
pub use region_ops::LoadOutcome;
pub use state::PlannerState;

/// Main planner interface.
pub struct GardenPlanner {
    pub(crate) api: ApiClient,
    pub(crate) db_path: Option<PathBuf>,
    pub(crate) state: watch::Sender<PlannerState>,
    next_id: AtomicU64,
}

impl GardenPlanner {
    pub(crate) fn new(
        api: ApiClient,
        db_path: Option<PathBuf>,
        garden: Vec<GardenEntry>,
        next_id: u64,
    ) -> Self {
        let (state, _) = watch::channel(PlannerState {
            garden,
            ..PlannerState::default()
        });
        Self {
            api,
            db_path,
            state,
            next_id: AtomicU64::new(next_id),
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> PlannerState {
        self.state.borrow().clone()
    }

    /// A receiver that is notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<PlannerState> {
        self.state.subscribe()
    }

    /// Path of the garden database, if persistence is enabled.
    pub fn database_path(&self) -> Option<&PathBuf> {
        self.db_path.as_ref()
    }

    pub(crate) fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Moves the id counter past `max_id` if it is not already.
    pub(crate) fn reserve_ids_through(&self, max_id: u64) {
        self.next_id
            .fetch_max(max_id.saturating_add(1), Ordering::SeqCst);
    }

    /// Records `error` as the current error and returns it.
    pub(crate) fn fail<T>(&self, error: GardenError) -> Result<T> {
        if error.is_user_error() {
            log::debug!("Rejected: {error}");
        } else {
            log::warn!("{error}");
        }
        let message = error.user_message();
        self.state.send_modify(|state| state.error = Some(message));
        Err(error)
    }

    /// Runs `op` against the garden database on a blocking task.
    ///
    /// Returns `Ok(None)` without running `op` when persistence is disabled.
    pub(crate) async fn with_database<F, R>(&self, op: F) -> Result<Option<R>>
    where
        F: FnOnce(&mut Database) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let Some(db_path) = self.db_path.clone() else {
            return Ok(None);
        };

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db).map(Some)
        })
        .await
        .with_context("Task join error")?
    }
}
