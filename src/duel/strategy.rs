//! Opponent move selection
//!
//! The opponent adapts to the player's habits: once enough picks are
//! recorded, higher difficulty tiers counter the player's favorite move
//! more often. Randomness is injected so tests can script the exact
//! draw sequence.

use rand::Rng;

use crate::core::types::{DifficultyTier, Move};
use crate::duel::constants::{
    ADAPT_MIN_SAMPLES, SMART_CHANCE_EASY, SMART_CHANCE_HARD, SMART_CHANCE_MEDIUM,
};
use crate::duel::statistics::MoveStatistics;

/// Source of uniform random values in [0, 1)
///
/// Implemented for every `rand::Rng`, so production code passes a seeded
/// `StdRng` and tests can substitute a scripted sequence. The number and
/// order of draws per decision is part of the strategy contract.
pub trait UnitRandom {
    fn next_unit(&mut self) -> f32;
}

impl<R: Rng> UnitRandom for R {
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Chance per tier of taking the smart branch once adapted
pub fn smart_chance(difficulty: DifficultyTier) -> f32 {
    match difficulty {
        DifficultyTier::Easy => SMART_CHANCE_EASY,
        DifficultyTier::Medium => SMART_CHANCE_MEDIUM,
        DifficultyTier::Hard => SMART_CHANCE_HARD,
    }
}

fn random_move<R: UnitRandom>(rng: &mut R) -> Move {
    let index = (rng.next_unit() * Move::ALL.len() as f32) as usize;
    Move::ALL[index.min(Move::ALL.len() - 1)]
}

/// Pick the opponent's move for one round
///
/// Draw order is fixed: the random candidate is always drawn first, even
/// when the smart branch discards it. Exactly one draw happens below
/// `ADAPT_MIN_SAMPLES` recorded player picks, exactly two at or above it.
pub fn choose_move<R: UnitRandom>(
    difficulty: DifficultyTier,
    stats: &MoveStatistics,
    rng: &mut R,
) -> Move {
    let random_choice = random_move(rng);

    // Cold start: not enough data to adapt
    if stats.total() < ADAPT_MIN_SAMPLES {
        return random_choice;
    }

    if rng.next_unit() < smart_chance(difficulty) {
        let favorite = stats.most_frequent();
        let counter = favorite.counter();
        tracing::debug!(%favorite, %counter, "countering the player's favorite move");
        counter
    } else {
        random_choice
    }
}
