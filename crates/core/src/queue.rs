//! Selection queue - tapped tiles waiting to be matched
//!
//! The queue stores ids of `Selected` tiles in tap order. Popping takes from
//! the front, undo takes from the back, and a triple is extracted only when
//! exactly `MATCH_SIZE` tiles of the tapped icon are present.

use arrayvec::ArrayVec;

use triple_types::{
    Icon, TileId, TileStatus, BOARD_COLUMNS, CELL_SIZE, MATCH_SIZE, QUEUE_SLOT_ORIGIN_X,
    QUEUE_SLOT_STEP, STAGING_ROW_Y,
};

use crate::board::Board;
use crate::rng::TileRng;
use crate::tile::{Position, Tile};

/// One queued tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry {
    pub id: TileId,
    pub icon: Icon,
}

/// Ordered list of selected tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionQueue {
    entries: Vec<QueueEntry>,
}

impl SelectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in tap order
    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of queued tiles showing `icon`
    pub fn count_icon(&self, icon: Icon) -> usize {
        self.entries.iter().filter(|e| e.icon == icon).count()
    }

    /// Drop every entry without touching tile statuses (board is being replaced)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append a tile and mark it selected
    ///
    /// The caller checks the tile is available and uncovered.
    pub fn push(&mut self, tile: &mut Tile) {
        debug_assert!(tile.is_clickable(), "pushed tile {} is not clickable", tile.id);
        tile.status = TileStatus::Selected;
        tile.covered = false;
        self.entries.push(QueueEntry {
            id: tile.id,
            icon: tile.icon,
        });
    }

    /// Return the oldest tile to the board at a random staging cell
    pub fn pop_front<R: TileRng>(&mut self, board: &mut Board, rng: &mut R) -> Option<TileId> {
        if self.entries.is_empty() {
            return None;
        }
        let entry = self.entries.remove(0);
        if let Some(tile) = board.find_mut(entry.id) {
            tile.status = TileStatus::Available;
            tile.position = Position::new(
                CELL_SIZE * rng.next_range(BOARD_COLUMNS) as i32,
                STAGING_ROW_Y,
            );
        }
        Some(entry.id)
    }

    /// Return the newest tile to the board where it was before being tapped
    pub fn pop_back(&mut self, board: &mut Board) -> Option<TileId> {
        let entry = self.entries.pop()?;
        if let Some(tile) = board.find_mut(entry.id) {
            tile.status = TileStatus::Available;
        }
        Some(entry.id)
    }

    /// Remove and match the tiles of `icon` if exactly `MATCH_SIZE` are queued
    ///
    /// Any other count (including more than `MATCH_SIZE`) leaves the queue
    /// and the board untouched.
    pub fn extract_triple(
        &mut self,
        icon: Icon,
        board: &mut Board,
    ) -> Option<ArrayVec<TileId, MATCH_SIZE>> {
        if self.count_icon(icon) != MATCH_SIZE {
            return None;
        }

        let mut matched = ArrayVec::new();
        self.entries.retain(|e| {
            if e.icon == icon {
                matched.push(e.id);
                false
            } else {
                true
            }
        });

        for &id in &matched {
            if let Some(tile) = board.find_mut(id) {
                tile.status = TileStatus::Matched;
                tile.covered = false;
            }
        }
        Some(matched)
    }

    /// Entries grouped by icon for display
    ///
    /// Icons appear in first-seen order; tiles of one icon keep their tap
    /// order. Gameplay never depends on this order.
    pub fn display_order(&self) -> Vec<QueueEntry> {
        let mut icons: ArrayVec<Icon, { triple_types::ALPHABET_SIZE }> = ArrayVec::new();
        for entry in &self.entries {
            if !icons.contains(&entry.icon) {
                icons.push(entry.icon);
            }
        }

        icons
            .iter()
            .flat_map(|&icon| self.entries.iter().filter(move |e| e.icon == icon).copied())
            .collect()
    }

    /// Horizontal display position of each queued tile
    pub fn slot_positions(&self) -> Vec<(QueueEntry, i32)> {
        self.display_order()
            .into_iter()
            .enumerate()
            .map(|(slot, entry)| (entry, QUEUE_SLOT_ORIGIN_X + QUEUE_SLOT_STEP * slot as i32))
            .collect()
    }
}
