//! Settings persistence

pub mod db;

use std::sync::Mutex;

use crate::error::Result;
use crate::settings::Settings;

pub use db::SqliteSettingsStore;

/// Where user settings live between sessions.
pub trait SettingsStore {
    /// Previously saved settings, or `None` when nothing usable is stored.
    fn load(&self) -> Result<Option<Settings>>;

    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Volatile store for tests and stateless consumers.
#[derive(Default)]
pub struct MemorySettingsStore {
    inner: Mutex<Option<Settings>>,
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<Settings>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        *self.inner.lock().unwrap() = Some(settings.clone());
        Ok(())
    }
}
