//! Gameplay constants - all tunable values in one place
//!
//! Health deltas are whole points, one per decided round. No partial
//! damage, no modifiers.

// Health pools
pub const DEFAULT_MAX_HEALTH: i32 = 3;
pub const ROUND_HEALTH_PENALTY: i32 = 1;

// Round timing (consumed by the client countdown, never by the core)
pub const ROUND_TIME_SECS: u32 = 5;

// Campaign pacing
pub const TARGET_WINS_PER_LEVEL: u32 = 2;
pub const CAMPAIGN_LEVEL_COUNT: u8 = 3;

// Opponent adaptation
//
// Below ADAPT_MIN_SAMPLES recorded player moves the opponent picks
// uniformly at random. At or above it, each tier takes the "smart"
// branch (counter the player's favorite move) with its smart chance.
pub const ADAPT_MIN_SAMPLES: u32 = 3;
pub const SMART_CHANCE_EASY: f32 = 0.0;
pub const SMART_CHANCE_MEDIUM: f32 = 0.4;
pub const SMART_CHANCE_HARD: f32 = 0.7;
