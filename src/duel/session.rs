//! Match orchestration
//!
//! A session owns the two health pools and the player's move statistics,
//! asks the strategy for the opponent's move each round, resolves the
//! round, and declares the match over when a pool empties. Routing the
//! finished match into campaign progression or the quick-play streak
//! happens in `conclude_match`.

use serde::Serialize;

use crate::campaign::progression::{CampaignProgression, ProgressReport};
use crate::campaign::levels::LevelDefinition;
use crate::core::config::GameConfig;
use crate::core::types::{DifficultyTier, Move, PlayerChoice};
use crate::duel::opponents::OpponentDefinition;
use crate::duel::resolution::{resolve_round, RoundOutcome};
use crate::duel::statistics::MoveStatistics;
use crate::duel::strategy::{choose_move, UnitRandom};
use crate::profile::store::PlayerProfile;

/// Who took the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchResult {
    PlayerWon,
    OpponentWon,
}

/// Everything the client needs to render one finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub player_choice: PlayerChoice,
    pub opponent_move: Move,
    pub outcome: RoundOutcome,
    pub player_health: i32,
    pub opponent_health: i32,
    pub match_result: Option<MatchResult>,
}

/// One match against one opponent
#[derive(Debug)]
pub struct MatchSession<R: UnitRandom> {
    difficulty: DifficultyTier,
    stats: MoveStatistics,
    player_health: i32,
    opponent_health: i32,
    rounds_played: u32,
    result: Option<MatchResult>,
    rng: R,
}

impl<R: UnitRandom> MatchSession<R> {
    pub fn new(
        difficulty: DifficultyTier,
        player_max_health: i32,
        opponent_max_health: i32,
        rng: R,
    ) -> Self {
        Self {
            difficulty,
            stats: MoveStatistics::new(),
            player_health: player_max_health,
            opponent_health: opponent_max_health,
            rounds_played: 0,
            result: None,
            rng,
        }
    }

    /// Quick-play match against a roster opponent at the configured tier
    pub fn versus(
        opponent: &OpponentDefinition,
        difficulty: DifficultyTier,
        config: &GameConfig,
        rng: R,
    ) -> Self {
        Self::new(
            difficulty,
            config.player_max_health,
            opponent.max_health,
            rng,
        )
    }

    /// Campaign match against the rival at the given level
    pub fn for_level(level: &LevelDefinition, config: &GameConfig, rng: R) -> Self {
        Self::new(
            level.difficulty,
            config.player_max_health,
            config.opponent_max_health,
            rng,
        )
    }

    /// Play one round. Returns `None` once the match is over: clients
    /// may keep forwarding input unconditionally, same as the campaign's
    /// inactive no-ops.
    pub fn play_round(&mut self, choice: PlayerChoice) -> Option<RoundReport> {
        if self.result.is_some() {
            return None;
        }

        let opponent_move = choose_move(self.difficulty, &self.stats, &mut self.rng);
        let outcome = resolve_round(choice, opponent_move);

        self.player_health += outcome.player_health_delta;
        self.opponent_health += outcome.opponent_health_delta;
        self.rounds_played += 1;

        // Timeouts carry no information about player habits
        if let PlayerChoice::Picked(mv) = choice {
            self.stats.record(mv);
        }

        if self.opponent_health <= 0 {
            self.result = Some(MatchResult::PlayerWon);
        } else if self.player_health <= 0 {
            self.result = Some(MatchResult::OpponentWon);
        }

        tracing::debug!(
            round = self.rounds_played,
            ?choice,
            %opponent_move,
            result = ?outcome.result,
            "round resolved"
        );

        if let Some(result) = self.result {
            tracing::info!(?result, rounds = self.rounds_played, "match over");
        }

        Some(RoundReport {
            player_choice: choice,
            opponent_move,
            outcome,
            player_health: self.player_health,
            opponent_health: self.opponent_health,
            match_result: self.result,
        })
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    pub fn player_health(&self) -> i32 {
        self.player_health
    }

    pub fn opponent_health(&self) -> i32 {
        self.opponent_health
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn statistics(&self) -> &MoveStatistics {
        &self.stats
    }

    pub fn difficulty(&self) -> DifficultyTier {
        self.difficulty
    }
}

/// Where a finished match was routed
#[derive(Debug, Clone, PartialEq)]
pub enum MatchConclusion {
    /// Campaign was active; progression already transitioned
    Campaign(ProgressReport),
    /// Quick play; streak counters updated on the profile
    QuickPlay { streak: u32, best_streak: u32 },
}

/// Route a finished match into campaign progression or the quick-play
/// streak counters.
pub fn conclude_match(
    result: MatchResult,
    campaign: &mut CampaignProgression,
    profile: &mut PlayerProfile,
) -> MatchConclusion {
    if campaign.is_active() {
        let report = match result {
            MatchResult::PlayerWon => campaign.register_win(),
            MatchResult::OpponentWon => campaign.register_loss(),
        };
        if let Some(report) = report {
            return MatchConclusion::Campaign(report);
        }
    }

    let streak = profile.record_quick_play(result);
    MatchConclusion::QuickPlay {
        streak,
        best_streak: profile.best_streak,
    }
}
