//! File-backed blob resource
//!
//! A single-slot binary object served whole on GET and replaced whole on PUT.
//! The file is opened per request rather than held open, so writes from other
//! processes between requests are always observed.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Result};
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::error::AppResult;

/// Single-slot binary resource backed by a file on disk
///
/// # Thread Safety
///
/// Writers take the lock exclusively so concurrent PUTs cannot interleave
/// partial writes; readers share it, so reads never block other reads.
pub struct BlobStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl BlobStore {
    /// Create a blob store over an existing backing file
    ///
    /// The file must be present at server start; this server never creates
    /// or deletes the blob, only reads and replaces its content.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure!(
            path.is_file(),
            "blob backing file {} does not exist",
            path.display()
        );

        Ok(Self {
            path,
            lock: RwLock::new(()),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current blob content, fresh from disk
    pub async fn read(&self) -> AppResult<Bytes> {
        let _guard = self.lock.read().await;
        let content = tokio::fs::read(&self.path).await?;
        Ok(Bytes::from(content))
    }

    /// Replace the blob content wholesale
    pub async fn write(&self, content: &[u8]) -> AppResult<()> {
        let _guard = self.lock.write().await;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}
