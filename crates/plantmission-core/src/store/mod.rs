//! Persistence gateways for state snapshots.
//!
//! The core treats storage as an opaque key-value gateway: each state slice
//! is a JSON string under a fixed key. [`SnapshotGateway`] is the seam;
//! [`Database`] stores slices in SQLite and [`MemoryGateway`] keeps them in a
//! map for tests and embedding.
//!
//! Saves go through [`SnapshotGateway::save_slices`] with the whole snapshot
//! at once, so a crash can never leave half of the slices updated.

use std::{collections::BTreeMap, path::Path};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod schema;
pub mod slice_queries;

/// Durable load/save of independently keyed state slices.
pub trait SnapshotGateway {
    /// Reads the raw value stored under `key`, if any.
    fn load_slice(&self, key: &str) -> Result<Option<String>>;

    /// Writes every `(key, value)` pair as one atomic unit.
    fn save_slices(&mut self, slices: &[(&str, String)]) -> Result<()>;
}

/// SQLite connection holding the `slices` table.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

impl SnapshotGateway for Database {
    fn load_slice(&self, key: &str) -> Result<Option<String>> {
        self.read_slice(key)
    }

    fn save_slices(&mut self, slices: &[(&str, String)]) -> Result<()> {
        self.write_slices(slices)
    }
}

/// In-memory gateway.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    slices: BTreeMap<String, String>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites a single raw slice, bypassing snapshot encoding.
    pub fn put_raw(&mut self, key: &str, value: impl Into<String>) {
        self.slices.insert(key.to_string(), value.into());
    }

    /// Number of stored slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl SnapshotGateway for MemoryGateway {
    fn load_slice(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slices.get(key).cloned())
    }

    fn save_slices(&mut self, slices: &[(&str, String)]) -> Result<()> {
        for (key, value) in slices {
            self.slices.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }
}
