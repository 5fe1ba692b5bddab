//! Headless triple tiles runner (default binary).
//!
//! Autoplays a few games with the greedy player from `triple_tiles::sim` and
//! logs how far each one got. Configure with `TRIPLE_SEED`,
//! `TRIPLE_START_LEVEL`, `TRIPLE_SIM_LEVELS` and `RUST_LOG`.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use triple_tiles::core::GameState;
use triple_tiles::session::Session;
use triple_tiles::sim::{play_game, play_session, GameReport, SimConfig};
use triple_tiles::types::Outcome;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SimConfig::from_env();
    info!(
        seed = config.session.seed,
        start_level = config.session.start_level,
        games = config.games,
        realtime = config.realtime,
        "starting simulation"
    );

    let reports = if config.realtime {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .context("failed to build tokio runtime")?;
        runtime.block_on(run_realtime(&config))
    } else {
        run(&config)
    };

    let wins = reports.iter().filter(|r| r.outcome == Outcome::Won).count();
    let best = reports.iter().map(|r| r.level_reached).max().unwrap_or(0);
    info!(games = reports.len(), wins, best_level = best, "simulation finished");
    Ok(())
}

/// Each game gets its own seed so runs stay reproducible
fn new_game(config: &SimConfig, game: u32) -> GameState {
    GameState::new_at_level(
        config.session.seed.wrapping_add(game),
        config.session.start_level,
    )
}

fn run(config: &SimConfig) -> Vec<GameReport> {
    let mut reports = Vec::with_capacity(config.games as usize);

    for game in 0..config.games {
        let mut state = new_game(config, game);
        let report = play_game(&mut state, config.max_steps);
        log_report(game, &report);
        reports.push(report);
    }
    reports
}

async fn run_realtime(config: &SimConfig) -> Vec<GameReport> {
    let mut reports = Vec::with_capacity(config.games as usize);

    for game in 0..config.games {
        let mut session = Session::new(new_game(config, game))
            .with_action_capacity(config.session.max_pending_actions);
        let report = play_session(&mut session, config.max_steps).await;
        log_report(game, &report);
        reports.push(report);
    }
    reports
}

fn log_report(game: u32, report: &GameReport) {
    info!(
        game,
        outcome = report.outcome.as_str(),
        start_level = report.start_level,
        level = report.level_reached,
        taps = report.taps,
        washes = report.washes,
        "game over"
    );
}
