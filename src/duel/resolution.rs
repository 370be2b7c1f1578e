//! Round resolution
//!
//! Pure mapping from the two choices to an outcome. A timeout is an
//! automatic loss for the player and never damages the opponent.

use serde::{Deserialize, Serialize};

use crate::core::types::{Move, PlayerChoice, RoundResult};
use crate::duel::constants::ROUND_HEALTH_PENALTY;

/// Result of a single round
///
/// Both deltas are zero or negative. At most one is non-zero: the loser
/// of a decided round pays `ROUND_HEALTH_PENALTY`, a draw costs nobody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub result: RoundResult,
    pub player_health_delta: i32,
    pub opponent_health_delta: i32,
}

/// Resolve a round from the player's choice and the opponent's move
///
/// Total over its inputs: every combination of choice and move produces
/// exactly one outcome, with no side effects.
pub fn resolve_round(player: PlayerChoice, opponent: Move) -> RoundOutcome {
    match player {
        PlayerChoice::TimedOut => RoundOutcome {
            result: RoundResult::Lose,
            player_health_delta: -ROUND_HEALTH_PENALTY,
            opponent_health_delta: 0,
        },
        PlayerChoice::Picked(mv) if mv == opponent => RoundOutcome {
            result: RoundResult::Draw,
            player_health_delta: 0,
            opponent_health_delta: 0,
        },
        PlayerChoice::Picked(mv) if mv.beats(opponent) => RoundOutcome {
            result: RoundResult::Win,
            player_health_delta: 0,
            opponent_health_delta: -ROUND_HEALTH_PENALTY,
        },
        PlayerChoice::Picked(_) => RoundOutcome {
            result: RoundResult::Lose,
            player_health_delta: -ROUND_HEALTH_PENALTY,
            opponent_health_delta: 0,
        },
    }
}
