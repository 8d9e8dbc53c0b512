//! Sqlite-backed settings store

use rusqlite::{params, Connection};
use std::path::Path;

use super::SettingsStore;
use crate::error::Result;
use crate::settings::Settings;

/// Durable single-row settings store.
pub struct SqliteSettingsStore {
    conn: Connection,
}

impl SqliteSettingsStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS settings (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                body TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }
}

impl SettingsStore for SqliteSettingsStore {
    fn load(&self) -> Result<Option<Settings>> {
        let body: Option<String> = self
            .conn
            .query_row("SELECT body FROM settings WHERE id = 1", [], |row| {
                row.get(0)
            })
            .ok();

        // a stored blob that no longer decodes is treated as absent, not fatal
        Ok(body.and_then(|body| serde_json::from_str(&body).ok()))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let body = serde_json::to_string(settings)?;
        self.conn.execute(
            r#"
            INSERT INTO settings (id, body) VALUES (1, ?1)
            ON CONFLICT(id) DO UPDATE SET body = ?1
            "#,
            params![body],
        )?;
        Ok(())
    }
}
