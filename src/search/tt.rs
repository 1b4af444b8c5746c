//! Transposition table for minimax node scores.
//!
//! A node's score depends on both placement windows in order (the board and
//! the next eviction follow from them), on whose turn it is and on the
//! depth, since scores are depth-adjusted and the cutoff is depth-based.
//! `position_key` packs exactly those into a `u64`.

use rustc_hash::FxHashMap;

use crate::core::{GameState, Mark};

/// Default entry limit; well above the reachable node count of one search.
pub const DEFAULT_CAPACITY: usize = 1 << 20;

/// Pack a search node into a 64-bit key.
///
/// Layout, high to low: for X then O a 2-bit window length followed by 4
/// bits per cell (oldest first), then 1 bit for the side to move and 8 bits
/// of depth. The length prefixes make the packing unambiguous.
#[must_use]
pub fn position_key(state: &GameState, maximizing: bool, depth: u32) -> u64 {
    let mut key = 0u64;
    for mark in Mark::ALL {
        let window = state.positions(mark);
        key = (key << 2) | window.len() as u64;
        for cell in window.iter() {
            key = (key << 4) | cell.index() as u64;
        }
    }
    key = (key << 1) | u64::from(maximizing);
    (key << 8) | u64::from(depth.min(u8::MAX as u32))
}

/// Score cache keyed by `position_key`.
///
/// Stops accepting entries once full rather than evicting.
#[derive(Clone, Debug)]
pub struct TranspositionTable {
    entries: FxHashMap<u64, i32>,
    capacity: usize,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl TranspositionTable {
    /// Create a table holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity,
        }
    }

    /// Look up a stored score.
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<i32> {
        self.entries.get(&key).copied()
    }

    /// Store a score if there is room.
    pub fn store(&mut self, key: u64, score: i32) {
        if self.entries.len() < self.capacity || self.entries.contains_key(&key) {
            self.entries.insert(key, score);
        }
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, GameMode};
    use crate::rules::{initial_state, replay};

    fn play(indices: &[usize]) -> GameState {
        let cells: Vec<Cell> = indices.iter().map(|&i| Cell::new(i).unwrap()).collect();
        replay(&initial_state(GameMode::VsBot), &cells)
    }

    #[test]
    fn test_key_distinguishes_window_order() {
        // Same board, different placement order for O.
        let a = play(&[0, 4, 1]);
        let b = play(&[1, 4, 0]);
        assert_eq!(a.board(), b.board());
        assert_ne!(position_key(&a, true, 0), position_key(&b, true, 0));
    }

    #[test]
    fn test_key_distinguishes_turn_and_depth() {
        let state = play(&[4]);
        let base = position_key(&state, true, 2);
        assert_ne!(base, position_key(&state, false, 2));
        assert_ne!(base, position_key(&state, true, 3));
        assert_eq!(base, position_key(&state.clone(), true, 2));
    }

    #[test]
    fn test_key_distinguishes_owner() {
        let a = play(&[4, 0]);
        let b = play(&[0, 4]);
        assert_ne!(position_key(&a, true, 0), position_key(&b, true, 0));
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(2);
        tt.store(1, 5);
        tt.store(2, -3);
        tt.store(3, 7);

        assert_eq!(tt.probe(1), Some(5));
        assert_eq!(tt.probe(2), Some(-3));
        assert_eq!(tt.probe(3), None);
        assert_eq!(tt.len(), 2);

        tt.clear();
        assert!(tt.is_empty());
    }
}
