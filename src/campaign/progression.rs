//! Campaign progression state machine
//!
//! Two consecutive wins clear a level; a loss resets the streak but
//! never the level. Clearing the last level completes the campaign and
//! fires a one-way completion notification.

use crate::campaign::levels::{level_definition, LevelDefinition, LEVELS};
use crate::duel::constants::{CAMPAIGN_LEVEL_COUNT, TARGET_WINS_PER_LEVEL};

/// Receives the campaign-completed notification
///
/// Notify-only: progression never waits on, retries, or observes the
/// result. The client decides what persisting completion means.
pub trait StorySink {
    fn story_completed(&self);
}

/// Sink that drops the notification, for contexts without persistence
pub struct NullSink;

impl StorySink for NullSink {
    fn story_completed(&self) {}
}

/// What the last registered result did to the campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressReport {
    /// Win recorded, more wins needed for this level
    ContinueLevel { wins: u32 },
    /// Loss recorded, level progress reset
    RetryLevel { level: u8 },
    /// Level cleared, campaign moves on
    LevelUp { next: &'static LevelDefinition },
    /// Final level cleared
    CampaignComplete,
}

/// Campaign mode state
///
/// Inactive until `start()`. Win/loss registration while inactive is a
/// deliberate no-op, not an error: the client forwards match results
/// unconditionally without checking mode first.
pub struct CampaignProgression {
    active: bool,
    level: u8,
    streak: u32,
    target_wins: u32,
    story: Box<dyn StorySink + Send>,
}

impl CampaignProgression {
    pub fn new(story: Box<dyn StorySink + Send>) -> Self {
        Self {
            active: false,
            level: 1,
            streak: 0,
            target_wins: TARGET_WINS_PER_LEVEL,
            story,
        }
    }

    /// Progression without a completion listener
    pub fn detached() -> Self {
        Self::new(Box::new(NullSink))
    }

    /// Override the wins-per-level target from configuration
    pub fn with_target_wins(mut self, target_wins: u32) -> Self {
        self.target_wins = target_wins.max(1);
        self
    }

    /// Begin a campaign from level 1
    pub fn start(&mut self) {
        self.active = true;
        self.level = 1;
        self.streak = 0;
        tracing::info!("campaign started");
    }

    /// Leave campaign mode. Level resets too: campaigns do not resume
    /// mid-level after leaving.
    pub fn stop(&mut self) {
        self.active = false;
        self.level = 1;
        self.streak = 0;
        tracing::info!("campaign stopped");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn win_streak(&self) -> u32 {
        self.streak
    }

    /// The active level's definition, `None` while inactive
    pub fn current_level(&self) -> Option<&'static LevelDefinition> {
        if !self.active {
            return None;
        }
        level_definition(self.level)
    }

    /// Record a campaign match win
    pub fn register_win(&mut self) -> Option<ProgressReport> {
        if !self.active {
            return None;
        }

        self.streak += 1;
        if self.streak < self.target_wins {
            return Some(ProgressReport::ContinueLevel { wins: self.streak });
        }

        Some(self.advance_level())
    }

    /// Record a campaign match loss. Only the current level's progress
    /// is lost, never the level itself.
    pub fn register_loss(&mut self) -> Option<ProgressReport> {
        if !self.active {
            return None;
        }

        self.streak = 0;
        tracing::debug!(level = self.level, "level progress reset");
        Some(ProgressReport::RetryLevel { level: self.level })
    }

    fn advance_level(&mut self) -> ProgressReport {
        self.level += 1;
        self.streak = 0;

        if self.level > CAMPAIGN_LEVEL_COUNT {
            // Fire-and-forget: the transition does not depend on the
            // notification being handled
            self.story.story_completed();
            tracing::info!("campaign completed");

            self.active = false;
            self.level = 1;
            return ProgressReport::CampaignComplete;
        }

        let next = &LEVELS[(self.level - 1) as usize];
        tracing::info!(level = next.number, name = next.name, "level up");
        ProgressReport::LevelUp { next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct CountingSink(Arc<AtomicU32>);

    impl StorySink for CountingSink {
        fn story_completed(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn counting_progression() -> (CampaignProgression, Arc<AtomicU32>) {
        let completions = Arc::new(AtomicU32::new(0));
        let progression = CampaignProgression::new(Box::new(CountingSink(completions.clone())));
        (progression, completions)
    }

    #[test]
    fn test_starts_inactive_at_level_one() {
        let campaign = CampaignProgression::detached();
        assert!(!campaign.is_active());
        assert_eq!(campaign.current_level(), None);
        assert_eq!(campaign.win_streak(), 0);
    }

    #[test]
    fn test_start_activates_level_one() {
        let mut campaign = CampaignProgression::detached();
        campaign.start();

        assert!(campaign.is_active());
        let level = campaign.current_level().unwrap();
        assert_eq!(level.number, 1);
        assert_eq!(level.name, "Back Alley");
    }

    #[test]
    fn test_two_wins_level_up() {
        let mut campaign = CampaignProgression::detached();
        campaign.start();

        assert_eq!(
            campaign.register_win(),
            Some(ProgressReport::ContinueLevel { wins: 1 })
        );

        let report = campaign.register_win().unwrap();
        match report {
            ProgressReport::LevelUp { next } => assert_eq!(next.number, 2),
            other => panic!("expected level up, got {:?}", other),
        }

        assert_eq!(campaign.current_level().unwrap().number, 2);
        assert_eq!(campaign.win_streak(), 0);
    }

    #[test]
    fn test_loss_resets_streak_not_level() {
        let mut campaign = CampaignProgression::detached();
        campaign.start();
        campaign.register_win();
        campaign.register_win(); // now level 2
        campaign.register_win(); // streak 1 on level 2

        assert_eq!(
            campaign.register_loss(),
            Some(ProgressReport::RetryLevel { level: 2 })
        );
        assert_eq!(campaign.win_streak(), 0);
        assert_eq!(campaign.current_level().unwrap().number, 2);
    }

    #[test]
    fn test_completion_notifies_exactly_once() {
        let (mut campaign, completions) = counting_progression();
        campaign.start();

        // Six straight wins clear all three levels
        let mut last = None;
        for _ in 0..6 {
            last = campaign.register_win();
        }

        assert_eq!(last, Some(ProgressReport::CampaignComplete));
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_completion_resets_to_inactive_default() {
        let (mut campaign, _) = counting_progression();
        campaign.start();
        for _ in 0..6 {
            campaign.register_win();
        }

        assert!(!campaign.is_active());
        assert_eq!(campaign.current_level(), None);
        assert_eq!(campaign.register_win(), None);
    }

    #[test]
    fn test_final_level_completion_from_partial_streak() {
        let (mut campaign, completions) = counting_progression();
        campaign.start();
        // Reach level 3 with one win banked
        for _ in 0..5 {
            campaign.register_win();
        }
        assert_eq!(campaign.current_level().unwrap().number, 3);
        assert_eq!(campaign.win_streak(), 1);

        assert_eq!(
            campaign.register_win(),
            Some(ProgressReport::CampaignComplete)
        );
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_inactive_registration_is_a_no_op() {
        let (mut campaign, completions) = counting_progression();

        assert_eq!(campaign.register_win(), None);
        assert_eq!(campaign.register_loss(), None);
        assert_eq!(campaign.win_streak(), 0);
        assert!(!campaign.is_active());
        assert_eq!(completions.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_stop_resets_level() {
        let mut campaign = CampaignProgression::detached();
        campaign.start();
        campaign.register_win();
        campaign.register_win(); // level 2
        campaign.stop();

        assert!(!campaign.is_active());
        assert_eq!(campaign.current_level(), None);

        // Restarting begins from level 1 again
        campaign.start();
        assert_eq!(campaign.current_level().unwrap().number, 1);
    }

    #[test]
    fn test_custom_win_target() {
        let mut campaign = CampaignProgression::detached().with_target_wins(1);
        campaign.start();

        let report = campaign.register_win().unwrap();
        match report {
            ProgressReport::LevelUp { next } => assert_eq!(next.number, 2),
            other => panic!("expected level up, got {:?}", other),
        }
    }

    #[test]
    fn test_start_mid_campaign_restarts() {
        let mut campaign = CampaignProgression::detached();
        campaign.start();
        campaign.register_win();
        campaign.register_win(); // level 2
        campaign.start();

        assert_eq!(campaign.current_level().unwrap().number, 1);
        assert_eq!(campaign.win_streak(), 0);
    }
}
