//! Session driver - async front for the core state machine
//!
//! The core models a click's animation window as a countdown. A session
//! turns that window into real time: [`Session::on_click_tile`] queues the
//! tile, waits `RESOLVE_DELAY_MS` on a tokio timer, then resolves the click.
//!
//! Every state change is published as an owned [`GameSnapshot`] on a
//! `tokio::sync::watch` channel, so a rendering layer only ever holds
//! read-only copies while the session stays the single writer.
//!
//! # Driving a session
//!
//! - Directly: call the `on_*` methods; `&mut self` serializes them.
//! - As a task: [`Session::spawn`] moves the session onto the runtime and
//!   returns an action sender. Actions that arrive during a click's window
//!   are dropped, matching the core's rejection rule.
//!
//! ```
//! use triple_session::Session;
//! use triple_core::GameState;
//!
//! # tokio_test::block_on(async {
//! let mut session = Session::new(GameState::new(7));
//! let idx = session.state().board().clickable_indices()[0];
//! let snap = session.on_click_tile(idx).await;
//! assert!(!snap.resolving);
//! assert_eq!(snap.queue_len(), 1);
//! # });
//! ```

pub mod config;

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use triple_core::{GameSnapshot, GameState, SimpleRng, TileRng};
use triple_types::{GameAction, RESOLVE_DELAY_MS};

pub use config::SessionConfig;
pub use triple_core as core;
pub use triple_types as types;

/// Action channel capacity when none is configured
pub const DEFAULT_ACTION_CAPACITY: usize = 16;

/// Single-writer owner of a game
pub struct Session<R: TileRng = SimpleRng> {
    state: GameState<R>,
    snapshot_tx: watch::Sender<GameSnapshot>,
    resolve_delay: Duration,
    /// Capacity of the action channel opened by [`Session::spawn`]
    action_capacity: usize,
}

impl Session<SimpleRng> {
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(GameState::new_at_level(config.seed, config.start_level))
            .with_action_capacity(config.max_pending_actions)
    }
}

impl<R: TileRng> Session<R> {
    pub fn new(state: GameState<R>) -> Self {
        let (snapshot_tx, _) = watch::channel(state.snapshot());
        Self {
            state,
            snapshot_tx,
            resolve_delay: Duration::from_millis(RESOLVE_DELAY_MS as u64),
            action_capacity: DEFAULT_ACTION_CAPACITY,
        }
    }

    /// Set the action channel capacity used by [`Session::spawn`] (minimum 1)
    pub fn with_action_capacity(mut self, capacity: usize) -> Self {
        self.action_capacity = capacity.max(1);
        self
    }

    pub fn action_capacity(&self) -> usize {
        self.action_capacity
    }

    /// Read access to the underlying state machine
    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn into_state(self) -> GameState<R> {
        self.state
    }

    /// Receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    fn publish(&self) {
        self.snapshot_tx
            .send_modify(|snap| self.state.snapshot_into(snap));
    }

    /// Tap a tile and wait out its animation window
    ///
    /// A rejected tap returns the unchanged snapshot without waiting.
    pub async fn on_click_tile(&mut self, idx: usize) -> GameSnapshot {
        self.try_click_tile(idx).await;
        self.snapshot()
    }

    /// Same as [`Session::on_click_tile`], returning whether a click window
    /// was opened (false when the tap was rejected)
    pub async fn try_click_tile(&mut self, idx: usize) -> bool {
        if !self.state.click_tile(idx) {
            return false;
        }
        self.publish();

        tokio::time::sleep(self.resolve_delay).await;

        self.state.settle();
        self.publish();
        true
    }

    pub fn on_pop(&mut self) -> GameSnapshot {
        self.apply_immediate(GameAction::Pop)
    }

    pub fn on_undo(&mut self) -> GameSnapshot {
        self.apply_immediate(GameAction::Undo)
    }

    pub fn on_wash(&mut self) -> GameSnapshot {
        self.apply_immediate(GameAction::Wash)
    }

    pub fn on_level_up(&mut self) -> GameSnapshot {
        self.apply_immediate(GameAction::LevelUp)
    }

    pub fn on_restart(&mut self) -> GameSnapshot {
        self.apply_immediate(GameAction::Restart)
    }

    fn apply_immediate(&mut self, action: GameAction) -> GameSnapshot {
        if self.state.apply_action(action) {
            self.publish();
        }
        self.snapshot()
    }

    /// Apply any action, awaiting the window for clicks
    pub async fn apply(&mut self, action: GameAction) -> GameSnapshot {
        match action {
            GameAction::ClickTile(idx) => self.on_click_tile(idx).await,
            other => self.apply_immediate(other),
        }
    }
}

impl<R: TileRng + Send + 'static> Session<R> {
    /// Run the session as a task fed by an action channel
    ///
    /// The channel holds up to [`Session::action_capacity`] actions. The task
    /// ends when every sender is dropped and returns the session.
    pub fn spawn(
        mut self,
    ) -> (
        mpsc::Sender<GameAction>,
        watch::Receiver<GameSnapshot>,
        JoinHandle<Session<R>>,
    ) {
        let (action_tx, mut action_rx) = mpsc::channel::<GameAction>(self.action_capacity);
        let snapshot_rx = self.subscribe();

        let handle = tokio::spawn(async move {
            while let Some(action) = action_rx.recv().await {
                let window_opened = match action {
                    GameAction::ClickTile(idx) => self.try_click_tile(idx).await,
                    other => {
                        self.apply_immediate(other);
                        false
                    }
                };

                if window_opened {
                    // Input that arrived during the window is discarded.
                    while let Ok(dropped) = action_rx.try_recv() {
                        debug!(action = dropped.as_str(), "dropped during click window");
                    }
                }
            }
            self
        });

        (action_tx, snapshot_rx, handle)
    }
}
