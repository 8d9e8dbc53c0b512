//! chess.com API client for fetching monthly game archives

use chrono::{Datelike, Utc};
use chrono_tz::America::Los_Angeles;
use reqwest::header::{HeaderValue, CACHE_CONTROL};
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;
use tokio_retry::strategy::FixedInterval;
use tokio_retry::RetryIf;

use super::types::*;
use crate::error::{Error, Result};
use crate::settings::RetryConfig;

const CHESS_COM_API_BASE: &str = "https://api.chess.com";

/// The upstream archive partitions a player's games into calendar months in
/// this zone; computing the month anywhere else miscounts games that finish
/// near a month boundary.
fn current_archive_month() -> (i32, u32) {
    let now = Utc::now().with_timezone(&Los_Angeles);
    (now.year(), now.month())
}

pub struct ChessComClient {
    client: Client,
    base_url: String,
    retry: RetryConfig,
}

impl ChessComClient {
    pub fn new(retry: RetryConfig) -> Result<Self> {
        Self::with_base_url(CHESS_COM_API_BASE, retry)
    }

    /// Client against a non-default endpoint.
    pub fn with_base_url(base_url: impl Into<String>, retry: RetryConfig) -> Result<Self> {
        // redirects stay visible so a permanent redirect can abort the retry loop
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            retry,
        })
    }

    /// Fetch all of a player's games for the current calendar month.
    ///
    /// Transient failures (network errors, rate limiting, server errors,
    /// malformed bodies) are retried on a fixed delay up to the configured
    /// attempt budget. An unknown player and a permanent redirect abort
    /// immediately.
    pub async fn fetch_monthly_games(&self, username: &str) -> Result<Vec<ApiGame>> {
        let url = self.archive_url(username, current_archive_month());
        let archive = with_retry(&self.retry, || self.fetch_archive(&url, username)).await?;
        Ok(decode_games(archive.games))
    }

    fn archive_url(&self, username: &str, (year, month): (i32, u32)) -> String {
        format!(
            "{}/pub/player/{}/games/{}/{:02}",
            self.base_url, username, year, month
        )
    }

    async fn fetch_archive(&self, url: &str, username: &str) -> Result<MonthlyArchive> {
        tracing::debug!(%url, "fetching monthly archive");

        // games accumulate during the month, so every call must see fresh data
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }
        if status == StatusCode::MOVED_PERMANENTLY || status == StatusCode::PERMANENT_REDIRECT {
            return Err(Error::FetchFailed(format!("{} moved permanently", url)));
        }
        if !status.is_success() {
            return Err(Error::Api { status });
        }

        let archive: MonthlyArchive = response.json().await?;
        Ok(archive)
    }
}

/// Run `action` until it succeeds or fails terminally, pausing a fixed delay
/// between attempts. There is no delay after the final failed attempt.
async fn with_retry<T, A, F>(retry: &RetryConfig, action: A) -> Result<T>
where
    A: FnMut() -> F,
    F: Future<Output = Result<T>>,
{
    let strategy =
        FixedInterval::from_millis(retry.delay_ms).take(retry.max_attempts.saturating_sub(1));

    match RetryIf::spawn(strategy, action, Error::is_transient).await {
        Ok(value) => Ok(value),
        Err(e) if e.is_transient() => Err(Error::MaxRetriesExceeded {
            attempts: retry.max_attempts,
        }),
        Err(e) => Err(e),
    }
}

/// Decode raw archive entries one by one, dropping the ones that do not match
/// the expected shape.
fn decode_games(raw: Vec<serde_json::Value>) -> Vec<ApiGame> {
    raw.into_iter()
        .filter_map(|value| match serde_json::from_value::<ApiGame>(value) {
            Ok(game) => Some(game),
            Err(e) => {
                tracing::warn!("skipping malformed game entry: {}", e);
                None
            }
        })
        .collect()
}
