//! Mocknest - deterministic mock remote-resource server
//!
//! This library provides a small HTTP test double for exercising HTTP client
//! libraries: a single file-backed binary blob and an in-memory table of
//! capital cities, both served over a fixed, predictable route surface.

pub mod config;
pub mod error;
pub mod resources;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::resources::{BlobStore, CapitalTable};

/// Application state shared across all request handlers
///
/// Both resources are owned here rather than living in statics, so multiple
/// servers can be instantiated in the same process for parallel test runs.
pub struct AppState {
    pub config: Config,
    pub blob: BlobStore,
    pub capitals: CapitalTable,
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    ///
    /// Fails if the blob backing file does not exist; the blob is expected
    /// to be pre-existing at server start.
    pub fn new(config: Config) -> Result<Self> {
        let blob = BlobStore::new(config.blob_path.clone())?;
        let capitals = CapitalTable::new();

        Ok(Self {
            config,
            blob,
            capitals,
            start_time: Instant::now(),
        })
    }
}
