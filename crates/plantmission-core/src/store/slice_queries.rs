//! Slice reads and transactional snapshot writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_SLICE_SQL: &str = "SELECT value FROM slices WHERE key = ?1";
const UPSERT_SLICE_SQL: &str = "INSERT INTO slices (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const SELECT_KEYS_SQL: &str = "SELECT key FROM slices ORDER BY key";

impl super::Database {
    /// Reads the raw value of one slice.
    pub fn read_slice(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SLICE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query slice")
    }

    /// Writes all slices inside a single transaction.
    pub fn write_slices(&mut self, slices: &[(&str, String)]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();
        {
            let mut stmt = tx
                .prepare(UPSERT_SLICE_SQL)
                .db_context("Failed to prepare slice upsert")?;
            for (key, value) in slices {
                stmt.execute(params![key, value, &now_str])
                    .db_context("Failed to write slice")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Lists the keys currently stored.
    pub fn slice_keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_KEYS_SQL)
            .db_context("Failed to prepare query")?;
        let keys = stmt
            .query_map([], |row| row.get(0))
            .db_context("Failed to query slice keys")?
            .collect::<std::result::Result<Vec<String>, _>>()
            .db_context("Failed to read slice keys")?;
        Ok(keys)
    }
}
