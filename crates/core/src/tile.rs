//! Tile module - board pieces and their square footprint

use serde::{Deserialize, Serialize};

use triple_types::{Icon, TileId, TileStatus, TILE_SIZE};

/// Stored board position (top-left corner of the tile's square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the `TILE_SIZE` squares anchored at `self` and `other` share
    /// any area. Touching edges do not count.
    pub fn squares_overlap(&self, other: &Position) -> bool {
        !(other.y + TILE_SIZE <= self.y
            || other.y >= self.y + TILE_SIZE
            || other.x + TILE_SIZE <= self.x
            || other.x >= self.x + TILE_SIZE)
    }
}

/// A single icon-bearing piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub icon: Icon,
    pub status: TileStatus,
    pub position: Position,
    /// Derived by the occlusion pass; only ever true for available tiles
    pub covered: bool,
}

impl Tile {
    pub fn new(id: TileId, icon: Icon, position: Position) -> Self {
        Self {
            id,
            icon,
            status: TileStatus::Available,
            position,
            covered: false,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == TileStatus::Available
    }

    /// Available and not covered
    pub fn is_clickable(&self) -> bool {
        self.is_available() && !self.covered
    }
}

/// Monotonic tile id source owned by the game
#[derive(Debug, Clone, Default)]
pub struct TileIds {
    next: u32,
}

impl TileIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue numbering after `last`
    pub fn starting_after(last: TileId) -> Self {
        Self {
            next: last.0.wrapping_add(1),
        }
    }

    pub fn next_id(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_identical() {
        let a = Position::new(100, 100);
        assert!(a.squares_overlap(&a));
    }

    #[test]
    fn test_overlap_partial() {
        let a = Position::new(100, 100);
        assert!(a.squares_overlap(&Position::new(175, 150)));
        assert!(a.squares_overlap(&Position::new(25, 25)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Position::new(100, 100);
        assert!(!a.squares_overlap(&Position::new(200, 100)));
        assert!(!a.squares_overlap(&Position::new(100, 200)));
        assert!(!a.squares_overlap(&Position::new(0, 100)));
        assert!(!a.squares_overlap(&Position::new(100, 0)));
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        let a = Position::new(100, 100);
        // Same column band, far apart vertically
        assert!(!a.squares_overlap(&Position::new(150, 300)));
        // Same row band, far apart horizontally
        assert!(!a.squares_overlap(&Position::new(300, 150)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Position::new(0, 50);
        let b = Position::new(75, 125);
        assert_eq!(a.squares_overlap(&b), b.squares_overlap(&a));
    }

    #[test]
    fn test_new_tile_is_clickable() {
        let tile = Tile::new(TileId(1), Icon::Baby, Position::new(0, 0));
        assert!(tile.is_clickable());

        let covered = Tile {
            covered: true,
            ..tile.clone()
        };
        assert!(!covered.is_clickable());

        let selected = Tile {
            status: TileStatus::Selected,
            ..tile
        };
        assert!(!selected.is_clickable());
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut ids = TileIds::new();
        assert_eq!(ids.next_id(), TileId(0));
        assert_eq!(ids.next_id(), TileId(1));

        let mut more = TileIds::starting_after(TileId(41));
        assert_eq!(more.next_id(), TileId(42));
    }
}
