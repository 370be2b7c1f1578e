//! Pocket Duel - Entry Point
//!
//! Terminal client for driving the game core during development. The
//! shipped mobile client replaces all of this with scenes and sprites;
//! the commands below exercise the same core surface it does.

use pocket_duel::campaign::{CampaignProgression, ProgressReport};
use pocket_duel::core::config::{GameConfig, Settings};
use pocket_duel::core::error::Result;
use pocket_duel::core::types::{parse_difficulty, Move, PlayerChoice};
use pocket_duel::duel::{
    conclude_match, find_opponent, pick_quick_play, MatchConclusion, MatchSession, RoundReport,
    CAMPAIGN_RIVAL_NAME,
};
use pocket_duel::profile::{story_channel, PlayerProfile, DEFAULT_PROFILE_PATH};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;

/// An active match plus the opponent's display name
struct ActiveMatch {
    session: MatchSession<StdRng>,
    opponent_name: String,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("pocket_duel=info")
        .init();

    tracing::info!("Pocket Duel starting...");

    // Async runtime for the story-completion listener
    let rt = Runtime::new()?;

    let settings = Settings::load_or_default("data/settings.toml");
    let config = GameConfig::default();

    let profile = Arc::new(Mutex::new(
        PlayerProfile::load(DEFAULT_PROFILE_PATH).unwrap_or_default(),
    ));

    // Campaign completion is fire-and-forget: the campaign sends on the
    // channel, this task flips the flag and persists.
    let (sink, mut completions) = story_channel();
    let listener_profile = profile.clone();
    rt.spawn(async move {
        while completions.recv().await.is_some() {
            if let Ok(mut p) = listener_profile.lock() {
                p.story_completed = true;
                if let Err(e) = p.save(DEFAULT_PROFILE_PATH) {
                    tracing::warn!(error = %e, "failed to persist story completion");
                }
            }
        }
    });

    let mut campaign = CampaignProgression::new(Box::new(sink))
        .with_target_wins(config.target_wins_per_level);
    let mut difficulty = settings.difficulty;
    let mut rng = StdRng::from_entropy();
    let mut active: Option<ActiveMatch> = None;

    println!("\n=== POCKET DUEL ===");
    println!(
        "Rock-paper-scissors arcade. Welcome back, {}.",
        settings.player_name
    );
    println!();
    println!("Commands:");
    println!("  r / p / s        - throw rock, paper, or scissors");
    println!("  pass             - let the round clock run out");
    println!("  quick [name]     - start a quick-play match (random or named)");
    println!("  campaign         - start (or restart) the campaign");
    println!("  stop             - leave the campaign");
    println!("  difficulty <d>   - set quick-play difficulty");
    println!("  status           - show profile and campaign state");
    println!("  quit             - exit");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "quit" | "q" => break,
            "status" => {
                if let Ok(p) = profile.lock() {
                    println!(
                        "Matches: {} played, {} won | streak {} (best {}) | story {}",
                        p.matches_played,
                        p.matches_won,
                        p.current_streak,
                        p.best_streak,
                        if p.story_completed { "complete" } else { "open" }
                    );
                }
                match campaign.current_level() {
                    Some(level) => println!(
                        "Campaign: level {} ({}) - {} win(s) banked",
                        level.number,
                        level.name,
                        campaign.win_streak()
                    ),
                    None => println!("Campaign: not running"),
                }
                if let Some(m) = &active {
                    println!(
                        "Match: vs {} - you {} HP, them {} HP",
                        m.opponent_name,
                        m.session.player_health(),
                        m.session.opponent_health()
                    );
                }
            }
            other if other == "quick" || other.starts_with("quick ") => {
                let request = other.trim_start_matches("quick").trim();
                let opponent = if request.is_empty() {
                    Some(pick_quick_play(&mut rng))
                } else {
                    find_opponent(request)
                };

                match opponent {
                    Some(opponent) => {
                        println!(
                            "{} steps up ({} HP, {} tier). Throw!",
                            opponent.name, opponent.max_health, difficulty
                        );
                        active = Some(ActiveMatch {
                            session: MatchSession::versus(
                                opponent,
                                difficulty,
                                &config,
                                StdRng::from_entropy(),
                            ),
                            opponent_name: opponent.name.to_string(),
                        });
                    }
                    None => println!("Nobody in the roster goes by '{}'.", request),
                }
            }
            "campaign" => {
                campaign.start();
                if let Some(level) = campaign.current_level() {
                    println!("Campaign begins: level {} - {}", level.number, level.name);
                }
                active = None;
            }
            "stop" => {
                campaign.stop();
                active = None;
                println!("Campaign abandoned.");
            }
            other if other.starts_with("difficulty") => {
                let value = other.trim_start_matches("difficulty").trim();
                difficulty = parse_difficulty(value);
                println!("Quick-play difficulty set to {}", difficulty);
            }
            "" => {}
            throw => match parse_choice(throw) {
                Some(choice) => {
                    play_round(choice, &mut active, &mut campaign, &profile, &config)
                }
                None => println!("Unknown command: {}", throw),
            },
        }
    }

    if let Ok(p) = profile.lock() {
        if let Err(e) = p.save(DEFAULT_PROFILE_PATH) {
            tracing::warn!(error = %e, "failed to save profile on exit");
        }
    }

    println!("See you in the arcade.");
    Ok(())
}

fn parse_choice(input: &str) -> Option<PlayerChoice> {
    if input == "pass" {
        return Some(PlayerChoice::TimedOut);
    }
    Move::parse(input).ok().map(PlayerChoice::Picked)
}

/// Feed one player choice into the active match, creating the next
/// campaign match on demand while campaign mode is running.
fn play_round(
    choice: PlayerChoice,
    active: &mut Option<ActiveMatch>,
    campaign: &mut CampaignProgression,
    profile: &Arc<Mutex<PlayerProfile>>,
    config: &GameConfig,
) {
    if active.is_none() {
        match campaign.current_level() {
            Some(level) => {
                println!(
                    "Level {} - {}: the rival is waiting.",
                    level.number, level.name
                );
                *active = Some(ActiveMatch {
                    session: MatchSession::for_level(level, config, StdRng::from_entropy()),
                    opponent_name: CAMPAIGN_RIVAL_NAME.to_string(),
                });
            }
            None => {
                println!("No match running. Start one with 'quick' or 'campaign'.");
                return;
            }
        }
    }

    let finished = match active.as_mut() {
        Some(m) => match m.session.play_round(choice) {
            Some(report) => {
                print_round(&report, &m.opponent_name);
                report.match_result
            }
            None => None,
        },
        None => None,
    };

    if let Some(result) = finished {
        *active = None;
        let conclusion = match profile.lock() {
            Ok(mut p) => conclude_match(result, campaign, &mut p),
            Err(_) => return,
        };

        match conclusion {
            MatchConclusion::Campaign(report) => print_campaign_report(report),
            MatchConclusion::QuickPlay { streak, best_streak } => {
                println!("Streak: {} (best {})", streak, best_streak);
            }
        }
    }
}

fn print_round(report: &RoundReport, opponent_name: &str) {
    match report.player_choice {
        PlayerChoice::Picked(mv) => println!(
            "You throw {} - {} throws {}",
            mv, opponent_name, report.opponent_move
        ),
        PlayerChoice::TimedOut => println!(
            "Time's up! {} had {} ready",
            opponent_name, report.opponent_move
        ),
    }
    println!(
        "  [{:?}] you {} HP, {} {} HP",
        report.outcome.result, report.player_health, opponent_name, report.opponent_health
    );
}

fn print_campaign_report(report: ProgressReport) {
    match report {
        ProgressReport::ContinueLevel { wins } => {
            println!("Win banked ({} so far). One more clears the level.", wins)
        }
        ProgressReport::RetryLevel { level } => {
            println!("Lost! Level {} progress resets.", level)
        }
        ProgressReport::LevelUp { next } => {
            println!("Level cleared! Next: level {} - {}", next.number, next.name)
        }
        ProgressReport::CampaignComplete => {
            println!("Campaign complete! The rooftop is yours.")
        }
    }
}
