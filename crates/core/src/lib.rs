//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the puzzle rules: board generation, the covering
//! relation between stacked tiles, the selection queue, and the
//! level/win/lose state machine. It has no dependencies on rendering,
//! audio, timers or I/O, which makes it:
//!
//! - **Deterministic**: Same seed produces identical boards and reshuffles
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Drive it from a terminal, a GUI, or a headless simulator
//!
//! # Module Structure
//!
//! - [`level`]: level number to icon pool, jitter offsets and grid bounds
//! - [`generator`]: initial board for a level
//! - [`wash`]: reshuffle order and positions of the remaining tiles
//! - [`occlusion`]: which available tiles are covered
//! - [`queue`]: tapped tiles, pop/undo, triple extraction
//! - [`game_state`]: sequencing of clicks, levels, wins and losses
//! - [`board`]: the ordered tile arena
//! - [`rng`]: seedable random source
//! - [`snapshot`]: owned, serializable view for renderers
//!
//! # Game Rules
//!
//! - **Stacking**: a tile later in the board sequence covers every earlier
//!   available tile its 100×100 square overlaps; covered tiles can't be tapped
//! - **Queue**: tapped tiles wait in the queue; exactly three of one icon clear
//! - **Loss**: seven tiles left in the queue after a tap resolves
//! - **Levels**: clearing a board generates the next level; clearing level 50 wins
//!
//! # Example
//!
//! ```
//! use triple_core::GameState;
//! use triple_types::{GameAction, Outcome};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.board().len(), 12);
//!
//! // Tap the first uncovered tile, then let the animation window pass
//! let idx = game.board().clickable_indices()[0];
//! assert!(game.apply_action(GameAction::ClickTile(idx)));
//! assert!(game.is_resolving());
//! assert!(game.tick(150));
//!
//! assert_eq!(game.queue().len(), 1);
//! assert_eq!(game.outcome(), Outcome::Playing);
//! ```
//!
//! # Timing
//!
//! A click is queued at once but resolved only after `RESOLVE_DELAY_MS`
//! (150ms). Call [`GameState::tick`](game_state::GameState::tick) with
//! elapsed time, or [`GameState::settle`](game_state::GameState::settle) to
//! resolve immediately.

pub mod board;
pub mod game_state;
pub mod generator;
pub mod level;
pub mod occlusion;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod tile;
pub mod wash;

pub use triple_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, PendingClick};
pub use generator::generate_board;
pub use level::{clamp_level, GridBounds, LevelConfig};
pub use queue::{QueueEntry, SelectionQueue};
pub use rng::{SimpleRng, TileRng};
pub use snapshot::{GameSnapshot, QueueSlot, TileView};
pub use tile::{Position, Tile, TileIds};
pub use wash::wash;
