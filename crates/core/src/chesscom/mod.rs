//! chess.com public API integration

pub mod client;
pub mod types;

pub use client::ChessComClient;
pub use types::{Accuracies, ApiGame, MonthlyArchive, PlayerSide, Side};
