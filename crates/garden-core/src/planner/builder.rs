//! Builder for creating and configuring GardenPlanner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use tokio::task;

use super::GardenPlanner;
use crate::{
    api::{ApiClient, HttpTransport, Transport, DEFAULT_API_URL, DEFAULT_TIMEOUT},
    db::Database,
    error::{GardenError, Result, ResultExt},
};

/// Builder for creating and configuring GardenPlanner instances.
///
/// Without a database path the garden lives in memory only.
#[derive(Clone, Default)]
pub struct PlannerBuilder {
    api_url: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
    database_path: Option<PathBuf>,
    default_database: bool,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (default [`DEFAULT_API_URL`]).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Sets the per-request timeout (default [`DEFAULT_TIMEOUT`]).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses `transport` instead of HTTP. URL and timeout are then ignored.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Persists the garden in a SQLite file at `path`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Persists the garden at the default location when no explicit path is
    /// set: `$XDG_DATA_HOME/garden/garden.db` or
    /// `~/.local/share/garden/garden.db`.
    pub fn with_default_database(mut self) -> Self {
        self.default_database = true;
        self
    }

    /// Builds the configured planner instance, loading any persisted garden.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::Configuration` if the HTTP client cannot be built
    /// Returns `GardenError::FileSystem` if the database directory cannot be created
    /// Returns `GardenError::Database` if database initialization fails
    pub async fn build(self) -> Result<GardenPlanner> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(
                self.api_url.as_deref().unwrap_or(DEFAULT_API_URL),
                self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            )?),
        };

        let db_path = match self.database_path {
            Some(path) => Some(path),
            None if self.default_database => Some(Self::default_database_path()?),
            None => None,
        };

        let (garden, next_id) = match &db_path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| GardenError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                let path = path.clone();
                let (garden, max_id) = task::spawn_blocking(move || {
                    let db = Database::new(&path)?;
                    Ok::<_, GardenError>((db.list_entries()?, db.max_entry_id()?))
                })
                .await
                .with_context("Task join error")??;
                log::debug!("Loaded {} garden entries", garden.len());
                (garden, max_id + 1)
            }
            None => (Vec::new(), 1),
        };

        Ok(GardenPlanner::new(
            ApiClient::new(transport),
            db_path,
            garden,
            next_id,
        ))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("garden")
            .place_data_file("garden.db")
            .map_err(|e| GardenError::XdgDirectory(e.to_string()))
    }
}
