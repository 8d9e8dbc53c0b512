//! Aggregated statistics types

use serde::{Deserialize, Serialize};

/// Outcome of a game from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

impl GameOutcome {
    /// Classify a raw result code. Codes outside the known partition return
    /// `None`; those games are excluded from win/loss/draw tallies.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "win" => Some(GameOutcome::Win),
            "lose" | "checkmated" | "resigned" | "timeout" | "abandoned"
            | "bughousepartnerlose" => Some(GameOutcome::Loss),
            "agreed" | "timevsinsufficient" | "repetition" | "stalemate" | "insufficient"
            | "50move" => Some(GameOutcome::Draw),
            _ => None,
        }
    }
}

/// Win/loss/draw counters plus the total number of games they were drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wld {
    pub wins: u32,
    pub loses: u32,
    pub draws: u32,
    pub games: u32,
}

impl Wld {
    pub(crate) fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Loss => self.loses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Average move accuracy over the analyzed subset of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Accuracy {
    /// 0 when no analyzed game is present.
    pub avg: f64,
    /// Counters restricted to games that carried analysis data, enabling
    /// "accuracy based on N of M games" reporting.
    pub wld: Wld,
}

/// The computed summary for one player. Recomputed on every request and never
/// persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub wld: Wld,
    pub accuracy: Accuracy,
}
