//! User-facing configuration: game modes, time windows, retry policy

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::SettingsStore;

/// Speed category of a game as reported by the archive API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Bullet,
    Blitz,
    Rapid,
    Daily,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Bullet => "bullet",
            GameMode::Blitz => "blitz",
            GameMode::Rapid => "rapid",
            GameMode::Daily => "daily",
        }
    }
}

/// Named window restricting which games count toward statistics, anchored to
/// the current moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInterval {
    #[serde(rename = "last hour")]
    LastHour,
    #[serde(rename = "last 6 hours")]
    Last6Hours,
    #[serde(rename = "last 12 hours")]
    Last12Hours,
    #[serde(rename = "last day")]
    LastDay,
    #[serde(rename = "last 3 days")]
    Last3Days,
    #[serde(rename = "last week")]
    LastWeek,
    /// Sentinel: no time filtering. The archive only ever holds the current
    /// month, so there is nothing left to narrow.
    #[serde(rename = "this month")]
    ThisMonth,
}

impl TimeInterval {
    /// Window length in seconds, or `None` for the unfiltered sentinel.
    pub fn window_secs(&self) -> Option<i64> {
        match self {
            TimeInterval::LastHour => Some(3_600),
            TimeInterval::Last6Hours => Some(21_600),
            TimeInterval::Last12Hours => Some(43_200),
            TimeInterval::LastDay => Some(86_400),
            TimeInterval::Last3Days => Some(259_200),
            TimeInterval::LastWeek => Some(604_800),
            TimeInterval::ThisMonth => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInterval::LastHour => "last hour",
            TimeInterval::Last6Hours => "last 6 hours",
            TimeInterval::Last12Hours => "last 12 hours",
            TimeInterval::LastDay => "last day",
            TimeInterval::Last3Days => "last 3 days",
            TimeInterval::LastWeek => "last week",
            TimeInterval::ThisMonth => "this month",
        }
    }
}

/// What the aggregation keeps: accepted speeds and the time window.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub game_modes: Vec<GameMode>,
    pub time_interval: TimeInterval,
}

/// Bounded-retry policy for archive fetches. The delay is fixed, with no
/// backoff and no jitter, so retry behavior stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total attempts, including the first. Must be at least 1.
    pub max_attempts: usize,
    /// Pause between consecutive attempts, in milliseconds.
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay_ms: 600,
        }
    }
}

/// User-configurable preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub game_modes: Vec<GameMode>,
    pub time_interval: TimeInterval,
    pub show_stats: bool,
    pub show_accuracy: bool,
    pub hide_own_stats: bool,
    pub color_highlighting: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_modes: vec![GameMode::Blitz, GameMode::Rapid, GameMode::Bullet],
            time_interval: TimeInterval::Last12Hours,
            show_stats: true,
            show_accuracy: true,
            hide_own_stats: false,
            color_highlighting: false,
        }
    }
}

impl Settings {
    /// Shape validation is carried by the types; what remains is semantic.
    pub fn is_valid(&self) -> bool {
        !self.game_modes.is_empty()
    }

    /// The filtering subset of the settings.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            game_modes: self.game_modes.clone(),
            time_interval: self.time_interval,
        }
    }
}

/// Loads and saves user settings through an injected store, replacing missing
/// or invalid stored settings with the defaults.
pub struct SettingsManager<S: SettingsStore> {
    store: S,
}

impl<S: SettingsStore> SettingsManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored settings when they validate, otherwise the defaults. Defaults
    /// are written back so the store recovers.
    pub fn load_or_default(&self) -> Result<Settings> {
        match self.store.load()? {
            Some(settings) if settings.is_valid() => Ok(settings),
            _ => {
                let defaults = Settings::default();
                self.store.save(&defaults)?;
                Ok(defaults)
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        self.store.save(settings)
    }
}
