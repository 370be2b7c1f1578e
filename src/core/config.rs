//! Game configuration and player-facing settings
//!
//! `GameConfig` collects the gameplay tunables the match and campaign
//! systems consume. `Settings` is the small player-editable file the
//! mobile client persists (difficulty, display name).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{DuelError, Result};
use crate::core::types::{parse_difficulty, DifficultyTier};
use crate::duel::constants::{
    DEFAULT_MAX_HEALTH, ROUND_TIME_SECS, SMART_CHANCE_EASY, SMART_CHANCE_HARD,
    SMART_CHANCE_MEDIUM, TARGET_WINS_PER_LEVEL,
};

/// Configuration for match and campaign pacing
///
/// These values match the shipped arcade balance. Changing them affects
/// match length and campaign difficulty curve.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Health points the player starts each match with
    ///
    /// At 3, a match lasts between 3 and ~10 rounds depending on draws.
    pub player_max_health: i32,

    /// Health points of the scripted campaign rival
    ///
    /// Quick-play opponents override this per roster entry.
    pub opponent_max_health: i32,

    /// Consecutive wins required to clear a campaign level
    pub target_wins_per_level: u32,

    /// Seconds the client's round countdown runs before it declares a
    /// timeout. Consumed by the UI layer only; the core never measures
    /// time itself.
    pub round_time_secs: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_max_health: DEFAULT_MAX_HEALTH,
            opponent_max_health: DEFAULT_MAX_HEALTH,
            target_wins_per_level: TARGET_WINS_PER_LEVEL,
            round_time_secs: ROUND_TIME_SECS,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.player_max_health <= 0 || self.opponent_max_health <= 0 {
            return Err("health pools must be positive".into());
        }

        if self.target_wins_per_level == 0 {
            return Err("target_wins_per_level must be at least 1".into());
        }

        // Smart chances should increase with tier
        if SMART_CHANCE_EASY > SMART_CHANCE_MEDIUM || SMART_CHANCE_MEDIUM > SMART_CHANCE_HARD {
            return Err("smart chances must be ordered easy <= medium <= hard".into());
        }

        Ok(())
    }
}

/// Player-facing settings loaded from TOML
#[derive(Debug, Clone)]
pub struct Settings {
    pub difficulty: DifficultyTier,
    pub player_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: DifficultyTier::Medium,
            player_name: "Challenger".to_string(),
        }
    }
}

/// On-disk shape; every field optional so partial files still load
#[derive(Debug, Deserialize)]
struct RawSettings {
    difficulty: Option<String>,
    player_name: Option<String>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;

        let raw: RawSettings = toml::from_str(&contents)
            .map_err(|e| DuelError::Settings(format!("failed to parse settings TOML: {}", e)))?;

        let defaults = Settings::default();
        Ok(Self {
            difficulty: raw
                .difficulty
                .as_deref()
                .map(parse_difficulty)
                .unwrap_or(defaults.difficulty),
            player_name: raw.player_name.unwrap_or(defaults.player_name),
        })
    }

    /// Load settings, falling back to defaults if the file is missing
    /// or malformed. A fresh install has no settings file yet.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::debug!(error = %e, "settings not loaded, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_health_rejected() {
        let config = GameConfig {
            player_max_health: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_win_target_rejected() {
        let config = GameConfig {
            target_wins_per_level: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_shipped_settings() {
        let settings = Settings::load("data/settings.toml").expect("Should load shipped settings");
        assert_eq!(settings.difficulty, DifficultyTier::Medium);
        assert!(!settings.player_name.is_empty());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load_or_default("data/no_such_settings.toml");
        assert_eq!(settings.difficulty, DifficultyTier::Medium);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let raw: RawSettings = toml::from_str("difficulty = \"hard\"").unwrap();
        assert_eq!(raw.player_name, None);

        let parsed = raw.difficulty.as_deref().map(parse_difficulty).unwrap();
        assert_eq!(parsed, DifficultyTier::Hard);
    }

    #[test]
    fn test_unknown_difficulty_in_settings_defaults_to_medium() {
        let raw: RawSettings = toml::from_str("difficulty = \"impossible\"").unwrap();
        let parsed = raw.difficulty.as_deref().map(parse_difficulty).unwrap();
        assert_eq!(parsed, DifficultyTier::Medium);
    }
}
