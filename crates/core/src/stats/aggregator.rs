//! Reduction of raw game lists into win/loss/draw and accuracy statistics

use chrono::Utc;

use super::types::{Accuracy, GameOutcome, Stats, Wld};
use crate::chesscom::ApiGame;
use crate::settings::{GameMode, TimeInterval};

/// Decimal places kept on the accuracy average.
const ACCURACY_DECIMALS: i32 = 0;

/// Keep the games matching the accepted modes and the time window. Order is
/// preserved and nothing is deduplicated.
pub fn filter_games(
    games: Vec<ApiGame>,
    modes: &[GameMode],
    interval: TimeInterval,
) -> Vec<ApiGame> {
    filter_games_at(games, modes, interval, Utc::now().timestamp())
}

/// Deterministic form of [`filter_games`] with an explicit "now".
pub fn filter_games_at(
    games: Vec<ApiGame>,
    modes: &[GameMode],
    interval: TimeInterval,
    now_secs: i64,
) -> Vec<ApiGame> {
    games
        .into_iter()
        .filter(|game| modes.contains(&game.time_class))
        .filter(|game| in_time_window(game.end_time, interval, now_secs))
        .collect()
}

fn in_time_window(end_time: i64, interval: TimeInterval, now_secs: i64) -> bool {
    // clock-skew guard: never count a game that claims to end in the future
    if end_time > now_secs {
        return false;
    }
    match interval.window_secs() {
        None => true,
        Some(window) => end_time > now_secs - window,
    }
}

/// Reduce an already-filtered game list into one player's statistics.
///
/// Pure: no I/O and no clock access. Games whose result code falls outside
/// the known partition count toward the seeded totals but toward nothing
/// else.
pub fn calculate_stats(games: &[ApiGame], username: &str) -> Stats {
    let total = games.len() as u32;
    let mut wld = Wld {
        games: total,
        ..Wld::default()
    };
    let mut accuracy_wld = Wld {
        games: total,
        ..Wld::default()
    };
    let mut accuracy_sum = 0.0;

    for game in games {
        let side = game.side_of(username);
        let result = &game.player(side).result;

        let Some(outcome) = GameOutcome::from_code(result) else {
            tracing::warn!(result = %result, "cannot classify unknown result code");
            continue;
        };
        wld.record(outcome);

        match game.accuracy_for(side) {
            Some(value) => {
                accuracy_sum += value;
                accuracy_wld.record(outcome);
            }
            None => accuracy_wld.games -= 1,
        }
    }

    let avg = if accuracy_wld.games == 0 {
        0.0
    } else {
        round_to(accuracy_sum / f64::from(accuracy_wld.games), ACCURACY_DECIMALS)
    };

    Stats {
        wld,
        accuracy: Accuracy {
            avg,
            wld: accuracy_wld,
        },
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chesscom::{Accuracies, ApiGame, PlayerSide};

    const NOW: i64 = 1_700_000_000;

    fn player(username: &str, result: &str) -> PlayerSide {
        PlayerSide {
            username: username.to_string(),
            result: result.to_string(),
            rating: None,
        }
    }

    fn game(
        time_class: GameMode,
        end_time: i64,
        white: (&str, &str),
        black: (&str, &str),
    ) -> ApiGame {
        ApiGame {
            end_time,
            time_class,
            accuracies: None,
            white: player(white.0, white.1),
            black: player(black.0, black.1),
            url: None,
            rated: true,
        }
    }

    fn analyzed(mut game: ApiGame, white: f64, black: f64) -> ApiGame {
        game.accuracies = Some(Accuracies {
            white: Some(white),
            black: Some(black),
        });
        game
    }

    #[test]
    fn test_filter_by_game_mode() {
        let games = vec![
            game(GameMode::Blitz, NOW - 10, ("alice", "win"), ("bob", "resigned")),
            game(GameMode::Rapid, NOW - 20, ("alice", "win"), ("bob", "resigned")),
            game(GameMode::Blitz, NOW - 30, ("alice", "agreed"), ("bob", "agreed")),
        ];

        let kept = filter_games_at(games, &[GameMode::Blitz], TimeInterval::ThisMonth, NOW);
        assert_eq!(kept.len(), 2);
        // order preserved
        assert_eq!(kept[0].end_time, NOW - 10);
        assert_eq!(kept[1].end_time, NOW - 30);
    }

    #[test]
    fn test_window_boundary_is_strict() {
        let at_boundary = game(
            GameMode::Blitz,
            NOW - 3_600,
            ("alice", "win"),
            ("bob", "resigned"),
        );
        let inside = game(
            GameMode::Blitz,
            NOW - 3_599,
            ("alice", "win"),
            ("bob", "resigned"),
        );

        let kept = filter_games_at(
            vec![at_boundary, inside],
            &[GameMode::Blitz],
            TimeInterval::LastHour,
            NOW,
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].end_time, NOW - 3_599);
    }

    #[test]
    fn test_future_games_are_always_excluded() {
        let games = vec![
            game(GameMode::Blitz, NOW + 1, ("alice", "win"), ("bob", "resigned")),
            game(GameMode::Blitz, NOW, ("alice", "win"), ("bob", "resigned")),
        ];

        // even the unfiltered sentinel drops clock-skewed games
        let kept = filter_games_at(games, &[GameMode::Blitz], TimeInterval::ThisMonth, NOW);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].end_time, NOW);
    }

    #[test]
    fn test_this_month_disables_windowing() {
        let old = game(
            GameMode::Blitz,
            NOW - 2_000_000,
            ("alice", "win"),
            ("bob", "resigned"),
        );

        let kept = filter_games_at(vec![old], &[GameMode::Blitz], TimeInterval::ThisMonth, NOW);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let games = vec![
            game(GameMode::Blitz, NOW - 10, ("alice", "win"), ("bob", "resigned")),
            game(GameMode::Daily, NOW - 90_000, ("alice", "win"), ("bob", "resigned")),
        ];

        let once = filter_games_at(games, &[GameMode::Blitz], TimeInterval::LastDay, NOW);
        let twice = filter_games_at(once.clone(), &[GameMode::Blitz], TimeInterval::LastDay, NOW);
        assert_eq!(once.len(), twice.len());
        assert_eq!(once[0].end_time, twice[0].end_time);
    }

    #[test]
    fn test_single_analyzed_win() {
        let games = vec![analyzed(
            game(GameMode::Blitz, NOW - 100, ("alice", "win"), ("bob", "resigned")),
            92.5,
            81.0,
        )];

        let kept = filter_games_at(games, &[GameMode::Blitz], TimeInterval::ThisMonth, NOW);
        assert_eq!(kept.len(), 1);

        let stats = calculate_stats(&kept, "alice");
        assert_eq!(stats.wld, Wld { wins: 1, loses: 0, draws: 0, games: 1 });
        assert_eq!(stats.accuracy.avg, 93.0);
        assert_eq!(stats.accuracy.wld, Wld { wins: 1, loses: 0, draws: 0, games: 1 });
    }

    #[test]
    fn test_totals_match_input_without_unknown_results() {
        let games = vec![
            game(GameMode::Blitz, NOW - 1, ("alice", "win"), ("bob", "resigned")),
            game(GameMode::Blitz, NOW - 2, ("bob", "win"), ("alice", "checkmated")),
            game(GameMode::Blitz, NOW - 3, ("alice", "stalemate"), ("bob", "stalemate")),
        ];

        let stats = calculate_stats(&games, "alice");
        assert_eq!(stats.wld.games, 3);
        assert_eq!(stats.wld.wins + stats.wld.loses + stats.wld.draws, 3);
        assert_eq!(stats.wld.wins, 1);
        assert_eq!(stats.wld.loses, 1);
        assert_eq!(stats.wld.draws, 1);
    }

    #[test]
    fn test_side_attribution_ignores_case() {
        let games = vec![game(
            GameMode::Blitz,
            NOW - 1,
            ("AlIcE", "win"),
            ("bob", "resigned"),
        )];

        let stats = calculate_stats(&games, "alice");
        assert_eq!(stats.wld.wins, 1);
        assert_eq!(stats.wld.loses, 0);
    }

    #[test]
    fn test_unmatched_username_is_scored_as_black() {
        let games = vec![game(
            GameMode::Blitz,
            NOW - 1,
            ("somebody", "resigned"),
            ("else", "win"),
        )];

        let stats = calculate_stats(&games, "carol");
        assert_eq!(stats.wld.wins, 1);
    }

    #[test]
    fn test_unknown_result_counts_toward_totals_only() {
        let games = vec![
            game(GameMode::Blitz, NOW - 1, ("alice", "win"), ("bob", "resigned")),
            game(GameMode::Blitz, NOW - 2, ("alice", "kingofthehill"), ("bob", "win")),
        ];

        let stats = calculate_stats(&games, "alice");
        assert_eq!(stats.wld.games, 2);
        assert_eq!(stats.wld.wins, 1);
        assert_eq!(stats.wld.loses, 0);
        assert_eq!(stats.wld.draws, 0);
        assert!(stats.wld.wins + stats.wld.loses + stats.wld.draws < stats.wld.games);
        // the unknown game is skipped before the analyzed-pool bookkeeping,
        // the known unanalyzed one shrinks the pool
        assert_eq!(stats.accuracy.wld.games, 1);
        assert_eq!(stats.accuracy.avg, 0.0);
    }

    #[test]
    fn test_unanalyzed_games_shrink_accuracy_pool() {
        let games = vec![
            analyzed(
                game(GameMode::Blitz, NOW - 1, ("alice", "win"), ("bob", "resigned")),
                90.0,
                70.0,
            ),
            game(GameMode::Blitz, NOW - 2, ("alice", "win"), ("bob", "resigned")),
        ];

        let stats = calculate_stats(&games, "alice");
        assert_eq!(stats.wld.games, 2);
        assert_eq!(stats.accuracy.wld.games, 1);
        assert!(stats.accuracy.wld.games <= stats.wld.games);
        assert_eq!(stats.accuracy.avg, 90.0);
        assert_eq!(stats.accuracy.wld.wins, 1);
    }

    #[test]
    fn test_accuracy_is_zero_without_analysis() {
        let games = vec![
            game(GameMode::Blitz, NOW - 1, ("alice", "win"), ("bob", "resigned")),
            game(GameMode::Blitz, NOW - 2, ("bob", "win"), ("alice", "timeout")),
        ];

        let stats = calculate_stats(&games, "alice");
        assert_eq!(stats.accuracy.wld.games, 0);
        assert_eq!(stats.accuracy.avg, 0.0);
        assert!(stats.accuracy.avg.is_finite());
    }

    #[test]
    fn test_accuracy_averages_the_acting_side() {
        let games = vec![
            analyzed(
                game(GameMode::Blitz, NOW - 1, ("alice", "win"), ("bob", "resigned")),
                80.0,
                40.0,
            ),
            analyzed(
                game(GameMode::Blitz, NOW - 2, ("bob", "win"), ("alice", "resigned")),
                99.0,
                60.0,
            ),
        ];

        // alice played white then black: (80 + 60) / 2
        let stats = calculate_stats(&games, "alice");
        assert_eq!(stats.accuracy.avg, 70.0);
        assert!(stats.accuracy.avg >= 0.0 && stats.accuracy.avg <= 100.0);
    }

    #[test]
    fn test_empty_input() {
        let stats = calculate_stats(&[], "alice");
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_rounding_precisions() {
        assert_eq!(round_to(92.5, 0), 93.0);
        assert_eq!(round_to(92.4, 0), 92.0);
        assert_eq!(round_to(87.6543, 2), 87.65);
        assert_eq!(round_to(87.6551, 2), 87.66);
    }
}
