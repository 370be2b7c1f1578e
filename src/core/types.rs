//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

use crate::core::error::{DuelError, Result};

/// A throwable move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in stable index order
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Stable index: Rock = 0, Paper = 1, Scissors = 2
    pub fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// Cyclic dominance: rock beats scissors, paper beats rock,
    /// scissors beats paper.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Paper, Move::Rock)
                | (Move::Scissors, Move::Paper)
        )
    }

    /// The move that defeats this one
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Parse user or settings input. Accepts full names and single-letter
    /// shorthands, case-insensitive.
    pub fn parse(input: &str) -> Result<Move> {
        match input.trim().to_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            other => Err(DuelError::InvalidMove(other.to_string())),
        }
    }
}

impl TryFrom<usize> for Move {
    type Error = DuelError;

    fn try_from(index: usize) -> Result<Move> {
        Move::ALL
            .get(index)
            .copied()
            .ok_or_else(|| DuelError::InvalidMove(index.to_string()))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        };
        write!(f, "{}", name)
    }
}

/// What the player did this round. The surrounding client declares
/// `TimedOut` when its round countdown expires; the core imposes no
/// timing of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerChoice {
    Picked(Move),
    TimedOut,
}

/// Round result from the player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Win,
    Lose,
    Draw,
}

/// Opponent difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DifficultyTier {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DifficultyTier::Easy => "easy",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

/// Parse a difficulty string from settings or the command line.
///
/// Unrecognized input falls back to Medium rather than erroring:
/// difficulty is a display-configuration value, and the original game
/// shipped with the same silent default.
pub fn parse_difficulty(input: &str) -> DifficultyTier {
    match input.trim().to_lowercase().as_str() {
        "easy" => DifficultyTier::Easy,
        "medium" => DifficultyTier::Medium,
        "hard" => DifficultyTier::Hard,
        other => {
            tracing::debug!(input = other, "unknown difficulty, defaulting to medium");
            DifficultyTier::Medium
        }
    }
}
