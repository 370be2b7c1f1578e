//! Per-match move frequency tracking
//!
//! The opponent strategy reads these counters to find the player's
//! favorite move. Counters live for one match and reset with it.

use serde::{Deserialize, Serialize};

use crate::core::types::Move;

/// How often the player has picked each move this match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStatistics {
    counts: [u32; 3],
}

impl MoveStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one player pick. Timeouts are never recorded.
    pub fn record(&mut self, mv: Move) {
        self.counts[mv.index()] += 1;
    }

    pub fn count(&self, mv: Move) -> u32 {
        self.counts[mv.index()]
    }

    pub fn counts(&self) -> [u32; 3] {
        self.counts
    }

    /// Total recorded picks this match
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// The player's most-used move. Ties break to the lowest index
    /// (rock before paper before scissors) - observable behavior the
    /// adaptive opponent depends on.
    pub fn most_frequent(&self) -> Move {
        let mut best = Move::Rock;
        for mv in Move::ALL {
            if self.count(mv) > self.count(best) {
                best = mv;
            }
        }
        best
    }

    /// Clear all counters for a new match
    pub fn reset(&mut self) {
        self.counts = [0; 3];
    }
}
