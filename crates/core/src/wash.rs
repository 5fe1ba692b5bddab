//! Wash module - reshuffle the board
//!
//! A wash permutes the whole sequence (which alone changes who covers whom)
//! and resamples the position of every available tile with the current
//! level's parameters. Selected and matched tiles move along with the
//! permutation but keep their stored positions.

use crate::board::Board;
use crate::level::LevelConfig;
use crate::rng::TileRng;

/// Reorder and reposition `board` in place for `level`
///
/// Cover flags of moved tiles are cleared; run [`Board::analyze_cover`]
/// afterwards.
pub fn wash<R: TileRng>(board: &mut Board, level: u32, rng: &mut R) {
    let config = LevelConfig::for_level(level);

    rng.shuffle(board.tiles_vec_mut());

    for tile in board.tiles_mut().iter_mut() {
        if !tile.is_available() {
            continue;
        }
        tile.position = config.sample_position(rng);
        tile.covered = false;
    }
}
