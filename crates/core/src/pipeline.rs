//! Composition of fetch, filter and aggregation for one player

use crate::chesscom::ChessComClient;
use crate::error::{Error, Result};
use crate::settings::FilterCriteria;
use crate::stats::{calculate_stats, filter_games, Stats};

/// Orchestrates one stats request per player: fetch the month's games, filter
/// them by the caller's criteria, reduce them to a summary.
///
/// Requests for different players are independent; callers that need several
/// players fire the calls concurrently and await them together.
pub struct StatsPipeline {
    client: ChessComClient,
}

impl StatsPipeline {
    /// Collaborators are injected; the pipeline holds no ambient state.
    pub fn new(client: ChessComClient) -> Self {
        Self { client }
    }

    /// Compute statistics for one player. Retry policy lives entirely in the
    /// client; failures surface here once, as a single error per player.
    pub async fn get_stats(&self, username: &str, criteria: &FilterCriteria) -> Result<Stats> {
        let games = self
            .client
            .fetch_monthly_games(username)
            .await
            .map_err(|e| wrap_fetch_error(username, e))?;

        let games = filter_games(games, &criteria.game_modes, criteria.time_interval);
        Ok(calculate_stats(&games, username))
    }
}

/// An unknown player stays distinct so callers can react to it specifically;
/// every other fetch failure collapses into one per-player error.
fn wrap_fetch_error(username: &str, error: Error) -> Error {
    match error {
        Error::UserNotFound(_) => error,
        other => Error::StatsUnavailable {
            username: username.to_string(),
            source: Box::new(other),
        },
    }
}
