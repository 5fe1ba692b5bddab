use serde::{Deserialize, Serialize};

use triple_types::{Icon, Outcome, TileId, TileStatus};

/// One board tile as a renderer should draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileView {
    pub id: TileId,
    pub icon: Icon,
    pub status: TileStatus,
    pub covered: bool,
    /// Display x: stored position, queue slot, or off-board
    pub x: i32,
    /// Display y: stored position or the queue band
    pub y: i32,
}

/// One queued tile in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueueSlot {
    pub id: TileId,
    pub icon: Icon,
    pub x: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub level: u32,
    pub outcome: Outcome,
    /// A click is inside its animation window
    pub resolving: bool,
    pub episode_id: u32,
    pub board_id: u32,
    /// Board tiles in stacking order
    pub tiles: Vec<TileView>,
    /// Queue in display order
    pub queue: Vec<QueueSlot>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.level = 1;
        self.outcome = Outcome::Playing;
        self.resolving = false;
        self.episode_id = 0;
        self.board_id = 0;
        self.tiles.clear();
        self.queue.clear();
    }

    pub fn playable(&self) -> bool {
        self.outcome == Outcome::Playing && !self.resolving
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Tiles not yet matched
    pub fn remaining(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.status != TileStatus::Matched)
            .count()
    }

    /// Board indices a click would be accepted on right now
    pub fn clickable_indices(&self) -> Vec<usize> {
        if !self.playable() {
            return Vec::new();
        }
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.status == TileStatus::Available && !t.covered)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            level: 1,
            outcome: Outcome::Playing,
            resolving: false,
            episode_id: 0,
            board_id: 0,
            tiles: Vec::new(),
            queue: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triple_types::Icon;

    fn view(id: u32, status: TileStatus, covered: bool) -> TileView {
        TileView {
            id: TileId(id),
            icon: Icon::Coder,
            status,
            covered,
            x: 0,
            y: 0,
        }
    }

    #[test]
    fn test_clickable_needs_playable() {
        let mut snap = GameSnapshot {
            tiles: vec![
                view(0, TileStatus::Available, true),
                view(1, TileStatus::Available, false),
                view(2, TileStatus::Matched, false),
            ],
            ..GameSnapshot::default()
        };
        assert_eq!(snap.clickable_indices(), vec![1]);
        assert_eq!(snap.remaining(), 2);

        snap.resolving = true;
        assert!(snap.clickable_indices().is_empty());

        snap.resolving = false;
        snap.outcome = Outcome::Lost;
        assert!(snap.clickable_indices().is_empty());
    }

    #[test]
    fn test_clear_resets() {
        let mut snap = GameSnapshot {
            level: 9,
            resolving: true,
            tiles: vec![view(0, TileStatus::Selected, false)],
            ..GameSnapshot::default()
        };
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&view(4, TileStatus::Selected, false)).unwrap();
        assert_eq!(
            json,
            r#"{"id":4,"icon":"coder","status":"selected","covered":false,"x":0,"y":0}"#
        );
    }
}
