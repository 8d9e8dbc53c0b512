//! Chess Insights Core Library
//!
//! Computes win/loss/draw and accuracy statistics for chess.com players from
//! their public monthly game archives.

pub mod chesscom;
pub mod error;
pub mod pipeline;
pub mod settings;
pub mod stats;
pub mod storage;

pub use chesscom::ChessComClient;
pub use error::{Error, Result};
pub use pipeline::StatsPipeline;
pub use settings::{
    FilterCriteria, GameMode, RetryConfig, Settings, SettingsManager, TimeInterval,
};
pub use stats::{Accuracy, Stats, Wld};
pub use storage::{MemorySettingsStore, SettingsStore, SqliteSettingsStore};
