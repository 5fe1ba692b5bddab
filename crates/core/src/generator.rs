//! Generator module - builds the initial board for a level
//!
//! Every icon in the level's (possibly repeated) alphabet gets
//! `TILES_PER_ICON` tiles, so each icon's count is a multiple of six and the
//! board can always be cleared by count. Whether it can be cleared by
//! position is not guaranteed.

use triple_types::TILES_PER_ICON;

use crate::board::Board;
use crate::level::LevelConfig;
use crate::rng::TileRng;
use crate::tile::{Tile, TileIds};

/// Generate a fresh board for `level`
///
/// Tiles are appended in alphabet order, which seeds the initial stacking
/// order. Cover flags are left unset; run [`Board::analyze_cover`] before use.
pub fn generate_board<R: TileRng>(level: u32, rng: &mut R, ids: &mut TileIds) -> Board {
    let config = LevelConfig::for_level(level);
    let mut tiles = Vec::with_capacity(config.tile_count());

    for &icon in config.icons() {
        for _ in 0..TILES_PER_ICON {
            let position = config.sample_position(rng);
            tiles.push(Tile::new(ids.next_id(), icon, position));
        }
    }

    Board::from_tiles(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use triple_types::{Icon, TileStatus, MAX_LEVEL};

    #[test]
    fn test_level_one_board() {
        let mut rng = SimpleRng::new(1);
        let board = generate_board(1, &mut rng, &mut TileIds::new());

        assert_eq!(board.len(), 12);
        let counts = board.icon_counts();
        assert_eq!(counts.get(&Icon::Prince), Some(&6));
        assert_eq!(counts.get(&Icon::Zombie), Some(&6));
        assert!(board.iter().all(|t| t.status == TileStatus::Available));
        assert!(board.iter().all(|t| !t.covered));
    }

    #[test]
    fn test_alphabet_order_is_stacking_order() {
        let mut rng = SimpleRng::new(8);
        let board = generate_board(2, &mut rng, &mut TileIds::new());
        let icons: Vec<Icon> = board.iter().map(|t| t.icon).collect();

        assert_eq!(&icons[..6], &[Icon::Prince; 6]);
        assert_eq!(&icons[6..12], &[Icon::Zombie; 6]);
        assert_eq!(&icons[18..], &[Icon::Laptop; 6]);
    }

    #[test]
    fn test_every_icon_count_is_multiple_of_six() {
        let mut rng = SimpleRng::new(77);
        let mut ids = TileIds::new();
        for level in 1..=MAX_LEVEL {
            let board = generate_board(level, &mut rng, &mut ids);
            assert_eq!(board.len(), LevelConfig::for_level(level).tile_count());
            for (icon, count) in board.icon_counts() {
                assert!(count > 0 && count % 6 == 0, "level {level}: {icon:?} x{count}");
            }
        }
    }

    #[test]
    fn test_ids_unique_across_boards() {
        let mut rng = SimpleRng::new(3);
        let mut ids = TileIds::new();
        let a = generate_board(1, &mut rng, &mut ids);
        let b = generate_board(1, &mut rng, &mut ids);

        let max_a = a.max_id().unwrap();
        assert!(b.iter().all(|t| t.id > max_a));
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = generate_board(7, &mut SimpleRng::new(99), &mut TileIds::new());
        let b = generate_board(7, &mut SimpleRng::new(99), &mut TileIds::new());
        assert_eq!(a, b);
    }
}
