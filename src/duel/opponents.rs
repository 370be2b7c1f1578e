//! Quick-play opponent roster
//!
//! Roster entries vary the health pool; the tier they play at comes
//! from the player's settings. The campaign rival keeps the default
//! pool and takes its tier from the active level.

use crate::duel::strategy::UnitRandom;

/// A selectable opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentDefinition {
    pub name: &'static str,
    pub max_health: i32,
}

/// The quick-play pool, ordered roughly by stamina
pub static QUICK_PLAY_ROSTER: [OpponentDefinition; 5] = [
    OpponentDefinition {
        name: "Tin Can Tony",
        max_health: 2,
    },
    OpponentDefinition {
        name: "Lucky Lena",
        max_health: 3,
    },
    OpponentDefinition {
        name: "Iron Mitts",
        max_health: 3,
    },
    OpponentDefinition {
        name: "Countess Counter",
        max_health: 4,
    },
    OpponentDefinition {
        name: "The Oracle",
        max_health: 5,
    },
];

/// The scripted campaign opponent. His pool is `GameConfig`'s
/// `opponent_max_health`; his tier follows the active level.
pub const CAMPAIGN_RIVAL_NAME: &str = "Rex the Rival";

/// Draw a random quick-play opponent
pub fn pick_quick_play<R: UnitRandom>(rng: &mut R) -> &'static OpponentDefinition {
    let index = (rng.next_unit() * QUICK_PLAY_ROSTER.len() as f32) as usize;
    &QUICK_PLAY_ROSTER[index.min(QUICK_PLAY_ROSTER.len() - 1)]
}

/// Look up a roster entry by name, case-insensitive
pub fn find_opponent(name: &str) -> Option<&'static OpponentDefinition> {
    QUICK_PLAY_ROSTER
        .iter()
        .find(|o| o.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_health_pools_are_positive() {
        for opponent in &QUICK_PLAY_ROSTER {
            assert!(opponent.max_health > 0, "{}", opponent.name);
        }
    }

    #[test]
    fn test_roster_names_are_unique() {
        for (i, a) in QUICK_PLAY_ROSTER.iter().enumerate() {
            for b in &QUICK_PLAY_ROSTER[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_find_opponent_ignores_case() {
        let opponent = find_opponent("the oracle").expect("Oracle should be in the roster");
        assert_eq!(opponent.max_health, 5);
        assert!(find_opponent("nobody").is_none());
    }

    #[test]
    fn test_pick_quick_play_covers_roster_bounds() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let opponent = pick_quick_play(&mut rng);
            assert!(QUICK_PLAY_ROSTER.iter().any(|o| o.name == opponent.name));
        }
    }
}
