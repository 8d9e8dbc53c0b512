use chess_insights_core::{
    ChessComClient, RetryConfig, Result, Settings, SettingsManager, SqliteSettingsStore, Stats,
    StatsPipeline,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (white, black) = match (args.next(), args.next()) {
        (Some(white), Some(black)) => (white, black),
        _ => {
            eprintln!("Usage: chess-insights-cli <white_username> <black_username>");
            std::process::exit(1);
        }
    };

    let settings = load_settings();
    tracing::debug!(
        interval = settings.time_interval.as_str(),
        "using {} game modes",
        settings.game_modes.len()
    );

    let client = ChessComClient::new(RetryConfig::default()).expect("Failed to create client");
    let pipeline = StatsPipeline::new(client);
    let criteria = settings.criteria();

    // both players fetch concurrently; one failing leaves the other intact
    let (white_stats, black_stats) = tokio::join!(
        pipeline.get_stats(&white, &criteria),
        pipeline.get_stats(&black, &criteria)
    );

    report(&white, white_stats, &settings);
    report(&black, black_stats, &settings);
}

fn load_settings() -> Settings {
    let store = SqliteSettingsStore::open("insights.db").expect("Failed to open settings store");
    SettingsManager::new(store)
        .load_or_default()
        .expect("Failed to load settings")
}

fn report(username: &str, stats: Result<Stats>, settings: &Settings) {
    let stats = match stats {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("{}: {}", username, e);
            return;
        }
    };

    if !settings.show_stats {
        return;
    }

    let mut line = format!(
        "{}: {}/{}/{}",
        username, stats.wld.wins, stats.wld.loses, stats.wld.draws
    );
    if settings.show_accuracy && stats.accuracy.avg != 0.0 {
        line.push_str(&format!(
            " ({}% accuracy over {} of {} games)",
            stats.accuracy.avg, stats.accuracy.wld.games, stats.wld.games
        ));
    }
    println!("{}", line);
}
