//! Campaign mode - scripted three-level run against the rival

pub mod levels;
pub mod progression;

pub use levels::{level_definition, LevelDefinition, LEVELS};
pub use progression::{CampaignProgression, NullSink, ProgressReport, StorySink};
