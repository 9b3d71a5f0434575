//! Bounded history of applied moves.

use super::types::Move;

const HISTORY_CAPACITY: usize = 256;

/// Ring buffer of the most recent moves applied to a board.
///
/// Once full, each push overwrites the oldest entry. `total` counts every
/// move ever pushed, so callers can tell when early moves have been lost.
#[derive(Clone)]
pub struct MoveHistory {
    moves: [Move; HISTORY_CAPACITY],
    total: u64,
}

impl MoveHistory {
    #[must_use]
    pub(crate) fn new() -> Self {
        MoveHistory {
            moves: [Move::null(); HISTORY_CAPACITY],
            total: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[(self.total % HISTORY_CAPACITY as u64) as usize] = mv;
        self.total += 1;
    }

    /// Number of moves currently retained
    #[must_use]
    pub fn len(&self) -> usize {
        (self.total as usize).min(HISTORY_CAPACITY)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Total number of moves ever recorded, including overwritten ones
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// True once old moves have started being overwritten
    #[must_use]
    pub fn wrapped(&self) -> bool {
        self.total as usize > HISTORY_CAPACITY
    }

    /// The `idx`-th oldest retained move
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx >= self.len() {
            return None;
        }
        let oldest = if self.wrapped() {
            self.total as usize % HISTORY_CAPACITY
        } else {
            0
        };
        Some(self.moves[(oldest + idx) % HISTORY_CAPACITY])
    }

    /// The most recently applied move
    #[must_use]
    pub fn last(&self) -> Option<Move> {
        if self.total == 0 {
            None
        } else {
            Some(self.moves[((self.total - 1) % HISTORY_CAPACITY as u64) as usize])
        }
    }

    /// Iterate retained moves, oldest first
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}
