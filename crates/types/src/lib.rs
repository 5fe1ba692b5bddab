//! Core types module - shared vocabulary and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no game logic, so it can be shared by
//! the engine, the async session driver and any rendering layer.
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ALPHABET_SIZE` | 10 | Distinct icons available |
//! | `MATCH_SIZE` | 3 | Same-icon tiles cleared together |
//! | `TILES_PER_ICON` | 6 | Tiles generated per alphabet entry |
//! | `QUEUE_LOSS_CAPACITY` | 7 | Queue length that ends the game |
//! | `MAX_LEVEL` | 50 | Last level; clearing it wins |
//! | `TILE_SIZE` | 100 | Side of a tile's square in board units |
//! | `RESOLVE_DELAY_MS` | 150 | Animation window inside a click |
//!
//! # Level Tables
//!
//! Jitter offsets are drawn from the first `level + 1` entries of
//! `[0, 25, -25, 50, -50]`. Rows and columns are drawn from `[min, max)`:
//!
//! | Level | Range |
//! |-------|-------|
//! | 1 | 2..6 |
//! | 2 | 1..6 |
//! | 3 | 1..7 |
//! | 4 | 0..7 |
//! | 5+ | 0..8 |
//!
//! # Examples
//!
//! ```
//! use triple_types::{GameAction, Icon, TileStatus, MAX_LEVEL};
//!
//! // Icons keep their alphabet order
//! assert_eq!(Icon::ALL[0], Icon::Prince);
//! assert_eq!(Icon::from_str("ram"), Some(Icon::Ram));
//!
//! // Status codes are stable
//! assert_eq!(TileStatus::Selected.code(), 1);
//!
//! // Actions parse from driver strings
//! assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
//! assert_eq!(GameAction::from_str("click:4"), Some(GameAction::ClickTile(4)));
//!
//! assert_eq!(MAX_LEVEL, 50);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of distinct icons in the alphabet
pub const ALPHABET_SIZE: usize = 10;

/// Number of same-icon tiles removed by one match
pub const MATCH_SIZE: usize = 3;

/// Tiles generated for every alphabet entry (twice the match size)
pub const TILES_PER_ICON: usize = 6;

/// Queue length that ends the game once a click has resolved
pub const QUEUE_LOSS_CAPACITY: usize = 7;

/// Highest level; clearing its board wins the game
pub const MAX_LEVEL: u32 = 50;

/// Side of the square a tile occupies, in board units
pub const TILE_SIZE: i32 = 100;

/// Distance between grid rows/columns, in board units
pub const CELL_SIZE: i32 = 100;

/// Animation window between pushing a tile and resolving matches
pub const RESOLVE_DELAY_MS: u32 = 150;

/// Levels between two increases of tile density
pub const LEVEL_REPEAT_STEP: u32 = 5;

/// Jitter offsets, unlocked one per level
pub const JITTER_OFFSETS: [i32; 5] = [0, 25, -25, 50, -50];

/// Row/column `[min, max)` ranges indexed by `min(4, level - 1)`
pub const GRID_BOUNDS: [(i32, i32); 5] = [(2, 6), (1, 6), (1, 7), (0, 7), (0, 8)];

/// Board width in columns, used when a popped tile is staged
pub const BOARD_COLUMNS: u32 = 8;

/// Vertical position of the pop staging band
pub const STAGING_ROW_Y: i32 = 700;

/// Vertical position at which queued tiles are displayed
pub const QUEUE_BAND_Y: i32 = 895;

/// Horizontal position of the first queue slot
pub const QUEUE_SLOT_ORIGIN_X: i32 = 50;

/// Horizontal distance between queue slots
pub const QUEUE_SLOT_STEP: i32 = 100;

/// Horizontal display position of matched tiles (off-board)
pub const HIDDEN_X: i32 = -1000;

/// The fixed, ordered icon alphabet
///
/// Levels take a prefix of this order, so `Prince` and `Zombie` appear on
/// every board while `Ram` and `Bath` only show up from level 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Prince,
    Zombie,
    Coder,
    Laptop,
    Sheep,
    Blond,
    Beard,
    Baby,
    Ram,
    Bath,
}

impl Icon {
    /// All icons in alphabet order
    pub const ALL: [Icon; ALPHABET_SIZE] = [
        Icon::Prince,
        Icon::Zombie,
        Icon::Coder,
        Icon::Laptop,
        Icon::Sheep,
        Icon::Blond,
        Icon::Beard,
        Icon::Baby,
        Icon::Ram,
        Icon::Bath,
    ];

    /// Parse icon from its lowercase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use triple_types::Icon;
    ///
    /// assert_eq!(Icon::from_str("Coder"), Some(Icon::Coder));
    /// assert_eq!(Icon::from_str("dragon"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|icon| icon.as_str() == s)
    }

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Prince => "prince",
            Icon::Zombie => "zombie",
            Icon::Coder => "coder",
            Icon::Laptop => "laptop",
            Icon::Sheep => "sheep",
            Icon::Blond => "blond",
            Icon::Beard => "beard",
            Icon::Baby => "baby",
            Icon::Ram => "ram",
            Icon::Bath => "bath",
        }
    }

    /// Glyph shown on the tile face
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Prince => "🤴",
            Icon::Zombie => "🧟",
            Icon::Coder => "👩‍💻",
            Icon::Laptop => "💻",
            Icon::Sheep => "🐑",
            Icon::Blond => "👱",
            Icon::Beard => "🧔",
            Icon::Baby => "👶",
            Icon::Ram => "🐏",
            Icon::Bath => "🛀",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Opaque tile identifier, unique for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of a tile
///
/// `Available -> Selected -> Matched`, or back from `Selected` to `Available`
/// through pop/undo. `Matched` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileStatus {
    /// On the board and clickable unless covered
    #[default]
    Available,
    /// Sitting in the selection queue
    Selected,
    /// Cleared by a triple
    Matched,
}

impl TileStatus {
    /// Numeric status code (0, 1, 2)
    pub fn code(&self) -> u8 {
        match self {
            TileStatus::Available => 0,
            TileStatus::Selected => 1,
            TileStatus::Matched => 2,
        }
    }

    /// Inverse of [`TileStatus::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TileStatus::Available),
            1 => Some(TileStatus::Selected),
            2 => Some(TileStatus::Matched),
            _ => None,
        }
    }
}

/// Game outcome flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    Playing,
    /// The queue filled up; restart or level up to continue
    Lost,
    /// The last level was cleared
    Won,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Playing => "playing",
            Outcome::Lost => "lost",
            Outcome::Won => "won",
        }
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

/// Requests a rendering layer forwards from user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Tap the board tile at this sequence index
    ClickTile(usize),
    /// Return the oldest queued tile to a staging cell
    Pop,
    /// Return the newest queued tile to where it was
    Undo,
    /// Reshuffle the remaining board tiles
    Wash,
    /// Skip to the next level
    LevelUp,
    /// Start over from level 1
    Restart,
}

impl GameAction {
    /// Parse action from string (for headless drivers)
    ///
    /// Clicks are written `click:<idx>` or `click <idx>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use triple_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("pop"), Some(GameAction::Pop));
    /// assert_eq!(GameAction::from_str("click 7"), Some(GameAction::ClickTile(7)));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if let Some(rest) = s.strip_prefix("click") {
            let idx = rest.trim_start_matches([':', ' ']).parse().ok()?;
            return Some(GameAction::ClickTile(idx));
        }
        match s.as_str() {
            "pop" => Some(GameAction::Pop),
            "undo" => Some(GameAction::Undo),
            "wash" => Some(GameAction::Wash),
            "levelup" => Some(GameAction::LevelUp),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase action name (click index omitted)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::ClickTile(_) => "clickTile",
            GameAction::Pop => "pop",
            GameAction::Undo => "undo",
            GameAction::Wash => "wash",
            GameAction::LevelUp => "levelUp",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants() {
        assert_eq!(TILES_PER_ICON, 2 * MATCH_SIZE);
        assert_eq!(QUEUE_LOSS_CAPACITY, 7);
        assert_eq!(RESOLVE_DELAY_MS, 150);
        assert_eq!(Icon::ALL.len(), ALPHABET_SIZE);
    }

    #[test]
    fn icon_names_roundtrip() {
        for icon in Icon::ALL {
            assert_eq!(Icon::from_str(icon.as_str()), Some(icon));
        }
        assert_eq!(Icon::from_str("unicorn"), None);
    }

    #[test]
    fn status_codes() {
        for status in [TileStatus::Available, TileStatus::Selected, TileStatus::Matched] {
            assert_eq!(TileStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(TileStatus::from_code(3), None);
    }

    #[test]
    fn click_action_parsing() {
        assert_eq!(GameAction::from_str("click 12"), Some(GameAction::ClickTile(12)));
        assert_eq!(GameAction::from_str("CLICK:0"), Some(GameAction::ClickTile(0)));
        assert_eq!(GameAction::from_str("click:x"), None);
        assert_eq!(GameAction::from_str("levelUp"), Some(GameAction::LevelUp));
    }
}
