//! Game state module - level, board, queue and outcome
//!
//! This module sequences every player request against the board and the
//! selection queue. A click is split in two halves around a fixed animation
//! window: the tile is queued immediately, and matching, the loss check and
//! the win check run once the window has elapsed (see [`GameState::tick`]).
//! While a click is resolving every other request is rejected.

use tracing::{debug, info};

use triple_types::{
    GameAction, Icon, Outcome, TileId, TileStatus, HIDDEN_X, MAX_LEVEL, QUEUE_BAND_Y,
    QUEUE_LOSS_CAPACITY, RESOLVE_DELAY_MS,
};

use crate::board::Board;
use crate::generator::generate_board;
use crate::level::clamp_level;
use crate::queue::SelectionQueue;
use crate::rng::{SimpleRng, TileRng};
use crate::snapshot::{GameSnapshot, QueueSlot, TileView};
use crate::tile::TileIds;
use crate::wash::wash;

/// A click waiting for its animation window to close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClick {
    pub tile: TileId,
    pub icon: Icon,
    pub remaining_ms: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: TileRng = SimpleRng> {
    board: Board,
    queue: SelectionQueue,
    level: u32,
    outcome: Outcome,
    pending: Option<PendingClick>,
    rng: R,
    ids: TileIds,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id of the current board (increments on every generation).
    board_id: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game at level 1 with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    /// Create a new game starting at `level`
    pub fn new_at_level(seed: u32, level: u32) -> Self {
        Self::with_rng_at_level(SimpleRng::new(seed), level)
    }
}

impl<R: TileRng> GameState<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_rng_at_level(rng, 1)
    }

    pub fn with_rng_at_level(rng: R, level: u32) -> Self {
        let mut state = Self {
            board: Board::new(),
            queue: SelectionQueue::new(),
            level: 1,
            outcome: Outcome::Playing,
            pending: None,
            rng,
            ids: TileIds::new(),
            episode_id: 0,
            board_id: 0,
        };
        state.load_level(level);
        state
    }

    /// Start from a prepared board (custom layouts, replays)
    pub fn from_board(mut board: Board, level: u32, rng: R) -> Self {
        let ids = board.max_id().map(TileIds::starting_after).unwrap_or_default();
        board.analyze_cover();
        Self {
            board,
            queue: SelectionQueue::new(),
            level: clamp_level(level),
            outcome: Outcome::Playing,
            pending: None,
            rng,
            ids,
            episode_id: 0,
            board_id: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn queue(&self) -> &SelectionQueue {
        &self.queue
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn pending(&self) -> Option<PendingClick> {
        self.pending
    }

    pub fn is_resolving(&self) -> bool {
        self.pending.is_some()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn board_id(&self) -> u32 {
        self.board_id
    }

    /// Whether a click on `idx` would be accepted right now
    pub fn can_click(&self, idx: usize) -> bool {
        self.accepts_input() && self.board.is_clickable(idx)
    }

    fn accepts_input(&self) -> bool {
        self.outcome == Outcome::Playing && self.pending.is_none()
    }

    /// Replace the board with a fresh one for `level`
    fn load_level(&mut self, level: u32) {
        self.level = clamp_level(level);
        self.queue.clear();
        self.board = generate_board(self.level, &mut self.rng, &mut self.ids);
        self.board.analyze_cover();
        self.board_id = self.board_id.wrapping_add(1);
    }

    /// Apply a player request; returns false when it was rejected
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let accepted = match action {
            GameAction::ClickTile(idx) => self.click_tile(idx),
            GameAction::Pop => self.pop(),
            GameAction::Undo => self.undo(),
            GameAction::Wash => self.wash(),
            GameAction::LevelUp => self.level_up(),
            GameAction::Restart => self.restart(),
        };
        if accepted {
            debug!(action = action.as_str(), level = self.level, "action applied");
        }
        accepted
    }

    /// Tap the tile at `idx` and open the animation window
    pub fn click_tile(&mut self, idx: usize) -> bool {
        if !self.can_click(idx) {
            return false;
        }
        let Some(tile) = self.board.get_mut(idx) else {
            return false;
        };

        self.queue.push(tile);
        let (id, icon) = (tile.id, tile.icon);
        self.board.analyze_cover();

        self.pending = Some(PendingClick {
            tile: id,
            icon,
            remaining_ms: RESOLVE_DELAY_MS,
        });
        true
    }

    /// Advance the animation window; returns true when a click resolved
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms > 0 {
            return false;
        }
        self.settle()
    }

    /// Resolve a pending click immediately
    pub fn settle(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.resolve_click(pending.icon);
        true
    }

    /// Match, then loss check, then win check. The order matters: a triple
    /// completed by the seventh tap empties enough of the queue to survive.
    fn resolve_click(&mut self, icon: Icon) {
        if let Some(matched) = self.queue.extract_triple(icon, &mut self.board) {
            debug!(icon = icon.as_str(), tiles = ?matched.as_slice(), "triple cleared");
        }

        if self.queue.len() == QUEUE_LOSS_CAPACITY {
            self.outcome = Outcome::Lost;
            info!(level = self.level, remaining = self.board.remaining(), "queue full, game lost");
            return;
        }

        if self.board.all_matched() {
            if self.level >= MAX_LEVEL {
                self.outcome = Outcome::Won;
                info!(level = self.level, "final level cleared, game won");
                return;
            }
            let next = self.level + 1;
            self.load_level(next);
            info!(level = self.level, tiles = self.board.len(), "level cleared, advancing");
            return;
        }

        self.board.analyze_cover();
    }

    /// Send the oldest queued tile back to a staging cell
    pub fn pop(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        if self.queue.pop_front(&mut self.board, &mut self.rng).is_none() {
            return false;
        }
        self.board.analyze_cover();
        true
    }

    /// Send the newest queued tile back to where it was
    pub fn undo(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        if self.queue.pop_back(&mut self.board).is_none() {
            return false;
        }
        self.board.analyze_cover();
        true
    }

    /// Reshuffle the board
    pub fn wash(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        wash(&mut self.board, self.level, &mut self.rng);
        self.board.analyze_cover();
        true
    }

    /// Skip to the next level; also recovers from a loss
    pub fn level_up(&mut self) -> bool {
        if self.pending.is_some() || self.level >= MAX_LEVEL {
            return false;
        }
        self.outcome = Outcome::Playing;
        let next = self.level + 1;
        self.load_level(next);
        info!(level = self.level, "skipped to next level");
        true
    }

    /// Start over from level 1
    pub fn restart(&mut self) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.outcome = Outcome::Playing;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.load_level(1);
        info!(episode = self.episode_id, "game restarted");
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let slots = self.queue.slot_positions();

        out.level = self.level;
        out.outcome = self.outcome;
        out.resolving = self.pending.is_some();
        out.episode_id = self.episode_id;
        out.board_id = self.board_id;

        out.queue.clear();
        out.queue.extend(slots.iter().map(|(entry, x)| QueueSlot {
            id: entry.id,
            icon: entry.icon,
            x: *x,
        }));

        out.tiles.clear();
        out.tiles.extend(self.board.iter().map(|tile| {
            let (x, y) = match tile.status {
                TileStatus::Available => (tile.position.x, tile.position.y),
                TileStatus::Selected => {
                    let x = slots
                        .iter()
                        .find(|(entry, _)| entry.id == tile.id)
                        .map_or(HIDDEN_X, |(_, x)| *x);
                    (x, QUEUE_BAND_Y)
                }
                TileStatus::Matched => (HIDDEN_X, QUEUE_BAND_Y),
            };
            TileView {
                id: tile.id,
                icon: tile.icon,
                status: tile.status,
                covered: tile.covered,
                x,
                y,
            }
        }));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
