//! Board module - the ordered tile arena
//!
//! The board is a flat sequence of tiles. Sequence order is the stacking
//! order: a tile later in the sequence sits on top of every earlier tile it
//! overlaps. Tiles are never removed from the arena; matched tiles stay in
//! place with `TileStatus::Matched` so indices handed to the rendering layer
//! remain stable until the next wash or regeneration.

use std::collections::BTreeMap;

use triple_types::{Icon, TileId, TileStatus};

use crate::occlusion;
use crate::tile::Tile;

/// Ordered collection of tiles for one level
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from tiles in stacking order (bottom first)
    ///
    /// Cover flags are not computed; call [`Board::analyze_cover`] before use.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Get tile at sequence index
    pub fn get(&self, idx: usize) -> Option<&Tile> {
        self.tiles.get(idx)
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(idx)
    }

    /// All tiles in stacking order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    pub(crate) fn tiles_vec_mut(&mut self) -> &mut Vec<Tile> {
        &mut self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Sequence index of the tile with `id`
    pub fn index_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|t| t.id == id)
    }

    pub fn find(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| t.id == id)
    }

    /// Recompute every tile's `covered` flag
    pub fn analyze_cover(&mut self) {
        occlusion::analyze(&mut self.tiles);
    }

    /// Whether the tile at `idx` can be tapped right now
    pub fn is_clickable(&self, idx: usize) -> bool {
        self.get(idx).is_some_and(Tile::is_clickable)
    }

    /// Indices of all tiles that can be tapped, in stacking order
    pub fn clickable_indices(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_clickable())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of tiles with the given status
    pub fn count_status(&self, status: TileStatus) -> usize {
        self.tiles.iter().filter(|t| t.status == status).count()
    }

    /// Tiles not yet matched (on the board or in the queue)
    pub fn remaining(&self) -> usize {
        self.tiles.len() - self.count_status(TileStatus::Matched)
    }

    /// Number of available tiles currently covered
    pub fn covered_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.covered).count()
    }

    /// True when every tile has been matched (vacuously true when empty)
    pub fn all_matched(&self) -> bool {
        self.tiles.iter().all(|t| t.status == TileStatus::Matched)
    }

    /// Tile count per icon
    pub fn icon_counts(&self) -> BTreeMap<Icon, usize> {
        let mut counts = BTreeMap::new();
        for tile in &self.tiles {
            *counts.entry(tile.icon).or_insert(0) += 1;
        }
        counts
    }

    /// Highest tile id on the board
    pub fn max_id(&self) -> Option<TileId> {
        self.tiles.iter().map(|t| t.id).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Position;

    fn tile(id: u32, icon: Icon, x: i32, y: i32) -> Tile {
        Tile::new(TileId(id), icon, Position::new(x, y))
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(board.all_matched());
        assert_eq!(board.remaining(), 0);
        assert!(board.clickable_indices().is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let board = Board::from_tiles(vec![
            tile(4, Icon::Ram, 0, 0),
            tile(9, Icon::Bath, 300, 0),
        ]);
        assert_eq!(board.index_of(TileId(9)), Some(1));
        assert_eq!(board.find(TileId(4)).map(|t| t.icon), Some(Icon::Ram));
        assert_eq!(board.index_of(TileId(5)), None);
        assert_eq!(board.max_id(), Some(TileId(9)));
    }

    #[test]
    fn test_clickable_after_analysis() {
        let mut board = Board::from_tiles(vec![
            tile(0, Icon::Ram, 0, 0),
            tile(1, Icon::Ram, 50, 50),
            tile(2, Icon::Bath, 400, 400),
        ]);
        board.analyze_cover();

        assert!(!board.is_clickable(0));
        assert!(board.is_clickable(1));
        assert!(board.is_clickable(2));
        assert!(!board.is_clickable(3));
        assert_eq!(board.clickable_indices(), vec![1, 2]);
        assert_eq!(board.covered_count(), 1);
    }

    #[test]
    fn test_remaining_and_all_matched() {
        let mut board = Board::from_tiles(vec![tile(0, Icon::Ram, 0, 0), tile(1, Icon::Ram, 0, 0)]);
        assert_eq!(board.remaining(), 2);

        board.tiles_mut()[0].status = TileStatus::Matched;
        assert_eq!(board.remaining(), 1);
        assert!(!board.all_matched());

        board.tiles_mut()[1].status = TileStatus::Matched;
        assert!(board.all_matched());
    }

    #[test]
    fn test_icon_counts() {
        let board = Board::from_tiles(vec![
            tile(0, Icon::Ram, 0, 0),
            tile(1, Icon::Bath, 0, 0),
            tile(2, Icon::Ram, 0, 0),
        ]);
        let counts = board.icon_counts();
        assert_eq!(counts.get(&Icon::Ram), Some(&2));
        assert_eq!(counts.get(&Icon::Bath), Some(&1));
        assert_eq!(counts.get(&Icon::Baby), None);
    }
}
