//! In-memory capital-city table
//!
//! The key-value resource for key-based CRUD testing: country name to capital
//! city. Keys are case-insensitive; every operation lower-cases its key before
//! touching the map.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{AppError, AppResult};

/// Mapping of lower-cased country keys to capital-city names
///
/// Seeded with four fixed entries at construction and mutated for the life of
/// the process; nothing is persisted across restarts.
///
/// # Thread Safety
///
/// Uses RwLock for interior mutability, allowing concurrent reads while
/// serializing mutations.
pub struct CapitalTable {
    entries: RwLock<HashMap<String, String>>,
}

impl Default for CapitalTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CapitalTable {
    /// Create a table populated with the fixed seed entries
    pub fn new() -> Self {
        let seed = [
            ("spain", "Madrid"),
            ("france", "Paris"),
            ("madagascar", "Antananarivo"),
            ("malaysia", "Kuala Lumpur"),
        ];

        let entries = seed
            .into_iter()
            .map(|(country, capital)| (country.to_string(), capital.to_string()))
            .collect();

        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Look up the capital for a country key
    pub fn get(&self, country: &str) -> AppResult<String> {
        let key = country.to_lowercase();
        let entries = self.entries.read().unwrap();

        entries
            .get(&key)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no capital for '{key}'")))
    }

    /// Insert or overwrite the capital for a country key
    pub fn put(&self, country: &str, capital: String) {
        let key = country.to_lowercase();
        let mut entries = self.entries.write().unwrap();
        entries.insert(key, capital);
    }

    /// Remove the entry for a country key
    pub fn remove(&self, country: &str) -> AppResult<()> {
        let key = country.to_lowercase();
        let mut entries = self.entries.write().unwrap();

        match entries.remove(&key) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("no capital for '{key}'"))),
        }
    }
}
