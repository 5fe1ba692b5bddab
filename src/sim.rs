//! Headless autoplay.
//!
//! A greedy player used for smoke testing and benchmarking: it finishes
//! triples it has started, then extends icons already queued, and otherwise
//! takes the topmost uncovered tile. It is not a solver.

use triple_core::{GameState, TileRng};
use triple_session::{Session, SessionConfig};
use triple_types::{Outcome, MATCH_SIZE};

/// How many games to play and where to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub session: SessionConfig,
    pub games: u32,
    /// Upper bound on actions per game
    pub max_steps: u32,
    /// Drive a [`Session`] with real click windows instead of settling at once
    pub realtime: bool,
}

impl SimConfig {
    /// Create from environment variables
    ///
    /// Reads everything [`SessionConfig::from_env`] does, plus
    /// `TRIPLE_SIM_LEVELS` (games to play, default 5),
    /// `TRIPLE_SIM_MAX_STEPS` (default 20000) and
    /// `TRIPLE_SIM_REALTIME` ("1" or "true").
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let games = lookup("TRIPLE_SIM_LEVELS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(5);
        let max_steps = lookup("TRIPLE_SIM_MAX_STEPS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(20_000);
        let realtime = lookup("TRIPLE_SIM_REALTIME")
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);

        Self {
            session: SessionConfig::from_lookup(&lookup),
            games,
            max_steps,
            realtime,
        }
    }
}

/// Result of one autoplayed game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    pub outcome: Outcome,
    pub start_level: u32,
    pub level_reached: u32,
    pub taps: u32,
    pub washes: u32,
}

/// Next move of the greedy player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimMove {
    Tap(usize),
    Wash,
    Pop,
}

/// Pick the next move for `state`
pub fn choose_move<R: TileRng>(state: &GameState<R>) -> SimMove {
    let board = state.board();
    let queue = state.queue();
    let clickable = board.clickable_indices();

    let queued = |idx: &usize| {
        board
            .get(*idx)
            .map_or(0, |tile| queue.count_icon(tile.icon))
    };

    if let Some(&idx) = clickable.iter().find(|idx| queued(idx) == MATCH_SIZE - 1) {
        return SimMove::Tap(idx);
    }
    if let Some(&idx) = clickable.iter().rev().find(|idx| queued(idx) > 0) {
        return SimMove::Tap(idx);
    }
    match clickable.last() {
        Some(&idx) => SimMove::Tap(idx),
        None if !queue.is_empty() => SimMove::Pop,
        None => SimMove::Wash,
    }
}

fn report<R: TileRng>(state: &GameState<R>, start_level: u32, taps: u32, washes: u32) -> GameReport {
    GameReport {
        outcome: state.outcome(),
        start_level,
        level_reached: state.level(),
        taps,
        washes,
    }
}

/// Play until the game ends or `max_steps` actions were taken
pub fn play_game<R: TileRng>(state: &mut GameState<R>, max_steps: u32) -> GameReport {
    let start_level = state.level();
    let (mut taps, mut washes) = (0, 0);

    for _ in 0..max_steps {
        if state.outcome().is_finished() {
            break;
        }
        match choose_move(state) {
            SimMove::Tap(idx) => {
                if state.click_tile(idx) {
                    taps += 1;
                    state.settle();
                }
            }
            SimMove::Wash => {
                state.wash();
                washes += 1;
            }
            SimMove::Pop => {
                state.pop();
            }
        }
    }

    report(state, start_level, taps, washes)
}

/// Same as [`play_game`], through a session with real click windows
pub async fn play_session<R: TileRng>(session: &mut Session<R>, max_steps: u32) -> GameReport {
    let start_level = session.state().level();
    let (mut taps, mut washes) = (0, 0);

    for _ in 0..max_steps {
        if session.state().outcome().is_finished() {
            break;
        }
        match choose_move(session.state()) {
            SimMove::Tap(idx) => {
                if session.try_click_tile(idx).await {
                    taps += 1;
                }
            }
            SimMove::Wash => {
                session.on_wash();
                washes += 1;
            }
            SimMove::Pop => {
                session.on_pop();
            }
        }
    }

    report(session.state(), start_level, taps, washes)
}
