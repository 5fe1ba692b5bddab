//! Level module - maps a level number to generation parameters
//!
//! Higher levels unlock more icons (up to the full alphabet at level 5), more
//! jitter offsets and a wider grid. Past level 5 the alphabet cannot grow, so
//! every further five levels repeat a prefix of it to raise tile density.

use triple_types::{
    Icon, ALPHABET_SIZE, CELL_SIZE, GRID_BOUNDS, JITTER_OFFSETS, LEVEL_REPEAT_STEP, MAX_LEVEL,
    TILES_PER_ICON,
};

use crate::rng::TileRng;
use crate::tile::Position;

/// Clamp a level number into `1..=MAX_LEVEL`
pub fn clamp_level(level: u32) -> u32 {
    level.clamp(1, MAX_LEVEL)
}

/// Half-open `[min, max)` range of grid rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min: i32,
    pub max: i32,
}

impl GridBounds {
    /// Number of distinct rows (or columns) in the range
    pub fn span(&self) -> u32 {
        (self.max - self.min) as u32
    }

    fn sample<R: TileRng>(&self, rng: &mut R) -> i32 {
        self.min + rng.next_range(self.span()) as i32
    }
}

/// Generation parameters for one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelConfig {
    level: u32,
    icons: Vec<Icon>,
    jitter: &'static [i32],
    grid: GridBounds,
}

impl LevelConfig {
    /// Build the parameters for `level` (clamped to `1..=MAX_LEVEL`)
    pub fn for_level(level: u32) -> Self {
        let level = clamp_level(level);

        let unlocked = (2 * level as usize).min(ALPHABET_SIZE);
        let mut icons = Icon::ALL[..unlocked].to_vec();

        let mut compare_level = level as i64;
        while compare_level > 0 {
            let repeat = (2 * (compare_level - LEVEL_REPEAT_STEP as i64)).min(ALPHABET_SIZE as i64);
            if repeat > 0 {
                icons.extend_from_within(..repeat as usize);
            }
            compare_level -= LEVEL_REPEAT_STEP as i64;
        }

        let jitter_len = (1 + level as usize).min(JITTER_OFFSETS.len());
        let (min, max) = GRID_BOUNDS[(level as usize - 1).min(GRID_BOUNDS.len() - 1)];

        Self {
            level,
            icons,
            jitter: &JITTER_OFFSETS[..jitter_len],
            grid: GridBounds { min, max },
        }
    }

    /// The clamped level these parameters belong to
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Icon sequence, with repeats, in generation order
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    pub fn jitter_offsets(&self) -> &'static [i32] {
        self.jitter
    }

    pub fn grid_bounds(&self) -> GridBounds {
        self.grid
    }

    /// Total tiles a board for this level holds
    pub fn tile_count(&self) -> usize {
        self.icons.len() * TILES_PER_ICON
    }

    /// Sample a stored board position: grid cell scaled by the cell size,
    /// shifted on both axes by one jitter offset
    pub fn sample_position<R: TileRng>(&self, rng: &mut R) -> Position {
        let offset = *rng.pick(self.jitter);
        let row = self.grid.sample(rng);
        let column = self.grid.sample(rng);
        Position {
            x: column * CELL_SIZE + offset,
            y: row * CELL_SIZE + offset,
        }
    }
}
