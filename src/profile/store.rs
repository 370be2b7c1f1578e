//! Player profile persistence glue
//!
//! The profile is the small JSON record the surrounding app keeps across
//! launches: quick-play streaks and whether the campaign was ever
//! finished. The story channel carries the campaign's fire-and-forget
//! completion notification to whoever owns the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::campaign::progression::StorySink;
use crate::core::error::Result;
use crate::duel::session::MatchResult;

pub const DEFAULT_PROFILE_PATH: &str = "data/profile.json";

/// Persisted player record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub best_streak: u32,
    pub current_streak: u32,
    pub matches_played: u32,
    pub matches_won: u32,
    pub story_completed: bool,
}

impl PlayerProfile {
    /// Update quick-play streak counters for a finished match and
    /// return the streak after the update.
    pub fn record_quick_play(&mut self, result: MatchResult) -> u32 {
        self.matches_played += 1;
        match result {
            MatchResult::PlayerWon => {
                self.matches_won += 1;
                self.current_streak += 1;
                if self.current_streak > self.best_streak {
                    self.best_streak = self.current_streak;
                }
            }
            MatchResult::OpponentWon => {
                self.current_streak = 0;
            }
        }
        self.current_streak
    }

    /// Load a profile, returning the default for a fresh install
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        Ok(())
    }
}

/// StorySink backed by an unbounded channel
///
/// Sending never blocks and ignores a dropped receiver, which is all
/// the fire-and-forget contract asks for.
pub struct StoryChannel(mpsc::UnboundedSender<()>);

impl StorySink for StoryChannel {
    fn story_completed(&self) {
        let _ = self.0.send(());
    }
}

/// Build the completion channel: the sink goes into the campaign, the
/// receiver into whatever task persists the flag.
pub fn story_channel() -> (StoryChannel, mpsc::UnboundedReceiver<()>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (StoryChannel(tx), rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_extends_streak_and_best() {
        let mut profile = PlayerProfile::default();

        assert_eq!(profile.record_quick_play(MatchResult::PlayerWon), 1);
        assert_eq!(profile.record_quick_play(MatchResult::PlayerWon), 2);
        assert_eq!(profile.best_streak, 2);
        assert_eq!(profile.matches_won, 2);
    }

    #[test]
    fn test_loss_resets_streak_keeps_best() {
        let mut profile = PlayerProfile::default();
        profile.record_quick_play(MatchResult::PlayerWon);
        profile.record_quick_play(MatchResult::PlayerWon);
        profile.record_quick_play(MatchResult::OpponentWon);

        assert_eq!(profile.current_streak, 0);
        assert_eq!(profile.best_streak, 2);
        assert_eq!(profile.matches_played, 3);
    }

    #[test]
    fn test_best_streak_only_grows() {
        let mut profile = PlayerProfile::default();
        profile.record_quick_play(MatchResult::PlayerWon);
        profile.record_quick_play(MatchResult::PlayerWon);
        profile.record_quick_play(MatchResult::PlayerWon);
        profile.record_quick_play(MatchResult::OpponentWon);
        profile.record_quick_play(MatchResult::PlayerWon);

        assert_eq!(profile.current_streak, 1);
        assert_eq!(profile.best_streak, 3);
    }

    #[test]
    fn test_missing_file_loads_default() {
        let profile = PlayerProfile::load("data/no_such_profile.json").unwrap();
        assert_eq!(profile, PlayerProfile::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = std::env::temp_dir().join("pocket_duel_profile_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("profile.json");

        let mut profile = PlayerProfile::default();
        profile.record_quick_play(MatchResult::PlayerWon);
        profile.story_completed = true;
        profile.save(&path).unwrap();

        let loaded = PlayerProfile::load(&path).unwrap();
        assert_eq!(loaded, profile);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_story_channel_delivers_notification() {
        let (sink, mut rx) = story_channel();

        sink.story_completed();
        sink.story_completed();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_story_channel_survives_dropped_receiver() {
        let (sink, rx) = story_channel();
        drop(rx);

        // Must not panic: the notification is fire-and-forget
        sink.story_completed();
    }
}
