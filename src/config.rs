//! Configuration management for Mocknest
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Path of the file backing the blob resource
    pub blob_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("MOCKNEST_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("MOCKNEST_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("Invalid MOCKNEST_PORT")?,

            blob_path: env::var("MOCKNEST_BLOB_PATH")
                .unwrap_or_else(|_| "str.blk".to_string())
                .into(),
        })
    }
}
