//! chess.com API data types

use serde::Deserialize;

use crate::settings::GameMode;

/// Monthly archive body: `{ "games": [...] }`. Entries stay raw here so that
/// one malformed record can be dropped without losing the whole batch.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyArchive {
    #[serde(default)]
    pub games: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

/// One finished game from a player's monthly archive.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiGame {
    /// Seconds since epoch at which the game concluded.
    pub end_time: i64,
    pub time_class: GameMode,
    /// Present only when the game was analyzed.
    #[serde(default)]
    pub accuracies: Option<Accuracies>,
    pub white: PlayerSide,
    pub black: PlayerSide,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub rated: bool,
}

impl ApiGame {
    /// Which side the given player occupies. Case-insensitive; a name that
    /// matches neither side is assumed to be black (two-player games only).
    pub fn side_of(&self, username: &str) -> Side {
        if self.white.username.eq_ignore_ascii_case(username) {
            Side::White
        } else {
            Side::Black
        }
    }

    pub fn player(&self, side: Side) -> &PlayerSide {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }

    /// Move accuracy for one side, when the game carries analysis data for it.
    pub fn accuracy_for(&self, side: Side) -> Option<f64> {
        let accuracies = self.accuracies.as_ref()?;
        match side {
            Side::White => accuracies.white,
            Side::Black => accuracies.black,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSide {
    pub username: String,
    /// Raw outcome code, e.g. "win", "resigned", "stalemate".
    pub result: String,
    #[serde(default)]
    pub rating: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Accuracies {
    #[serde(default)]
    pub white: Option<f64>,
    #[serde(default)]
    pub black: Option<f64>,
}
