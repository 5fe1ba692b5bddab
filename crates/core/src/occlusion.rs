//! Occlusion module - which available tiles are covered
//!
//! A tile is covered when any available tile later in the sequence overlaps
//! its square. The relation is one-directional: a later tile can cover an
//! earlier one, never the reverse. Selected and matched tiles take no part,
//! neither covering nor being covered.
//!
//! The pass is O(n²) over the board and must run after every change to tile
//! status, position or order.

use crate::tile::Tile;

/// Recompute `covered` for every tile in stacking order
pub fn analyze(tiles: &mut [Tile]) {
    for i in 0..tiles.len() {
        tiles[i].covered = false;
        if !tiles[i].is_available() {
            continue;
        }

        let (lower, upper) = tiles.split_at_mut(i + 1);
        let cur = &mut lower[i];
        cur.covered = upper
            .iter()
            .any(|above| above.is_available() && cur.position.squares_overlap(&above.position));
    }

    debug_assert!(tiles.iter().all(|t| t.is_available() || !t.covered));
}

/// Index of the first available tile above `idx` that overlaps it
///
/// Used by tooling to explain why a tile is blocked.
pub fn first_cover(tiles: &[Tile], idx: usize) -> Option<usize> {
    let cur = tiles.get(idx)?;
    if !cur.is_available() {
        return None;
    }
    tiles[idx + 1..]
        .iter()
        .position(|above| above.is_available() && cur.position.squares_overlap(&above.position))
        .map(|offset| idx + 1 + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Position;
    use triple_types::{Icon, TileId, TileStatus};

    fn tile(id: u32, x: i32, y: i32) -> Tile {
        Tile::new(TileId(id), Icon::Coder, Position::new(x, y))
    }

    fn covered(tiles: &[Tile]) -> Vec<bool> {
        tiles.iter().map(|t| t.covered).collect()
    }

    #[test]
    fn test_later_tile_covers_earlier() {
        let mut tiles = vec![tile(0, 0, 0), tile(1, 50, 50)];
        analyze(&mut tiles);
        assert_eq!(covered(&tiles), vec![true, false]);
    }

    #[test]
    fn test_order_not_geometry_decides() {
        // Same squares, reversed order: the cover flips.
        let mut tiles = vec![tile(1, 50, 50), tile(0, 0, 0)];
        analyze(&mut tiles);
        assert_eq!(covered(&tiles), vec![true, false]);
        assert_eq!(tiles[0].id, TileId(1));
    }

    #[test]
    fn test_disjoint_tiles_uncovered() {
        let mut tiles = vec![tile(0, 0, 0), tile(1, 100, 0), tile(2, 0, 100)];
        analyze(&mut tiles);
        assert_eq!(covered(&tiles), vec![false, false, false]);
    }

    #[test]
    fn test_selected_tiles_do_not_cover() {
        let mut tiles = vec![tile(0, 0, 0), tile(1, 0, 0)];
        tiles[1].status = TileStatus::Selected;
        analyze(&mut tiles);
        assert_eq!(covered(&tiles), vec![false, false]);
    }

    #[test]
    fn test_matched_tiles_never_covered() {
        let mut tiles = vec![tile(0, 0, 0), tile(1, 0, 0)];
        tiles[0].status = TileStatus::Matched;
        tiles[0].covered = true;
        analyze(&mut tiles);
        assert!(!tiles[0].covered);
    }

    #[test]
    fn test_cover_through_gap() {
        // 0 is covered by 2 even though 1 (between them) does not touch it.
        let mut tiles = vec![tile(0, 0, 0), tile(1, 500, 500), tile(2, 75, 75)];
        analyze(&mut tiles);
        assert_eq!(covered(&tiles), vec![true, false, false]);
        assert_eq!(first_cover(&tiles, 0), Some(2));
        assert_eq!(first_cover(&tiles, 1), None);
    }

    #[test]
    fn test_idempotent() {
        let mut tiles = vec![
            tile(0, 0, 0),
            tile(1, 25, 25),
            tile(2, 200, 200),
            tile(3, 150, 175),
            tile(4, 600, 0),
        ];
        analyze(&mut tiles);
        let first = covered(&tiles);
        analyze(&mut tiles);
        assert_eq!(covered(&tiles), first);
    }

    #[test]
    fn test_stale_flags_are_reset() {
        let mut tiles = vec![tile(0, 0, 0), tile(1, 300, 300)];
        tiles[0].covered = true;
        analyze(&mut tiles);
        assert!(!tiles[0].covered);
    }
}
