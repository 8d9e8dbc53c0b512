//! Filtering and aggregation of game lists into player statistics

pub mod aggregator;
pub mod types;

pub use aggregator::{calculate_stats, filter_games, filter_games_at};
pub use types::{Accuracy, GameOutcome, Stats, Wld};
