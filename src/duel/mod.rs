//! Match gameplay - resolution, opponent strategy, and orchestration
//!
//! Everything here is synchronous and presentation-free. The client
//! feeds player choices in and renders the round reports that come out.

pub mod constants;
pub mod opponents;
pub mod resolution;
pub mod session;
pub mod statistics;
pub mod strategy;

pub use constants::*;
pub use opponents::{
    find_opponent, pick_quick_play, OpponentDefinition, CAMPAIGN_RIVAL_NAME, QUICK_PLAY_ROSTER,
};
pub use resolution::{resolve_round, RoundOutcome};
pub use session::{conclude_match, MatchConclusion, MatchResult, MatchSession, RoundReport};
pub use statistics::MoveStatistics;
pub use strategy::{choose_move, smart_chance, UnitRandom};
