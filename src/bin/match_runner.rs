//! Headless Match Runner
//!
//! Runs simulated player policies against the adaptive opponent and
//! prints aggregate results for balance tuning.

use clap::Parser;
use pocket_duel::campaign::CampaignProgression;
use pocket_duel::core::config::GameConfig;
use pocket_duel::core::types::{parse_difficulty, Move, PlayerChoice};
use pocket_duel::duel::{conclude_match, MatchResult, MatchSession, QUICK_PLAY_ROSTER};
use pocket_duel::profile::{story_channel, PlayerProfile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Headless Match Runner - simulated players for balance tuning
#[derive(Parser, Debug)]
#[command(name = "match_runner")]
#[command(about = "Run simulated matches against the adaptive opponent")]
struct Args {
    /// Number of matches to simulate
    #[arg(long, default_value_t = 1000)]
    matches: u32,

    /// Opponent difficulty: easy, medium, hard
    #[arg(long, default_value = "medium")]
    difficulty: String,

    /// Simulated player policy: uniform, rock, cycle
    #[arg(long, default_value = "uniform")]
    policy: String,

    /// Chance per round that the simulated player times out
    #[arg(long, default_value_t = 0.0)]
    timeout_rate: f32,

    /// Run campaign mode, restarting the campaign whenever it ends
    #[arg(long)]
    campaign: bool,

    /// Abort a match after this many rounds
    #[arg(long, default_value_t = 500)]
    max_rounds: u32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

/// How the simulated player throws
#[derive(Debug, Clone, Copy)]
enum PlayerPolicy {
    /// Uniformly random moves - the adaptive opponent gains nothing
    Uniform,
    /// Always rock - worst case against adaptation
    Rock,
    /// Rock, paper, scissors, repeat
    Cycle,
}

fn parse_policy(input: &str) -> PlayerPolicy {
    match input.to_lowercase().as_str() {
        "rock" => PlayerPolicy::Rock,
        "cycle" => PlayerPolicy::Cycle,
        _ => PlayerPolicy::Uniform,
    }
}

fn policy_choice(
    policy: PlayerPolicy,
    round: u32,
    timeout_rate: f32,
    rng: &mut StdRng,
) -> PlayerChoice {
    if timeout_rate > 0.0 && rng.gen::<f32>() < timeout_rate {
        return PlayerChoice::TimedOut;
    }
    let mv = match policy {
        PlayerPolicy::Uniform => Move::ALL[rng.gen_range(0..Move::ALL.len())],
        PlayerPolicy::Rock => Move::Rock,
        PlayerPolicy::Cycle => Move::ALL[round as usize % Move::ALL.len()],
    };
    PlayerChoice::Picked(mv)
}

/// JSON output structure
#[derive(Serialize)]
struct RunSummary {
    matches: u32,
    player_wins: u32,
    opponent_wins: u32,
    player_win_rate: f32,
    total_rounds: u64,
    avg_rounds: f32,
    timeouts: u64,
    unfinished: u32,
    campaigns_completed: u32,
    best_streak: u32,
    difficulty: String,
    policy: String,
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("pocket_duel=warn")
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut rng = StdRng::seed_from_u64(seed);

    let difficulty = parse_difficulty(&args.difficulty);
    let policy = parse_policy(&args.policy);
    let config = GameConfig::default();

    let (sink, mut completions) = story_channel();
    let mut campaign = CampaignProgression::new(Box::new(sink));
    let mut profile = PlayerProfile::default();

    let mut player_wins = 0u32;
    let mut opponent_wins = 0u32;
    let mut total_rounds = 0u64;
    let mut timeouts = 0u64;
    let mut unfinished = 0u32;

    for match_index in 0..args.matches {
        if args.campaign && !campaign.is_active() {
            campaign.start();
        }

        let session_rng = StdRng::seed_from_u64(rng.gen());
        let mut session = match campaign.current_level() {
            Some(level) => MatchSession::for_level(level, &config, session_rng),
            None => {
                let opponent =
                    &QUICK_PLAY_ROSTER[match_index as usize % QUICK_PLAY_ROSTER.len()];
                MatchSession::versus(opponent, difficulty, &config, session_rng)
            }
        };

        let mut round = 0u32;
        let result = loop {
            if round >= args.max_rounds {
                break None;
            }
            let choice = policy_choice(policy, round, args.timeout_rate, &mut rng);
            if choice == PlayerChoice::TimedOut {
                timeouts += 1;
            }
            round += 1;
            match session.play_round(choice) {
                Some(report) if report.match_result.is_some() => break report.match_result,
                Some(_) => continue,
                None => break session.result(),
            }
        };

        total_rounds += u64::from(session.rounds_played());

        match result {
            Some(MatchResult::PlayerWon) => player_wins += 1,
            Some(MatchResult::OpponentWon) => opponent_wins += 1,
            None => {
                unfinished += 1;
                continue;
            }
        }

        if let Some(result) = result {
            conclude_match(result, &mut campaign, &mut profile);
        }
    }

    let mut campaigns_completed = 0u32;
    while completions.try_recv().is_ok() {
        campaigns_completed += 1;
    }

    let finished = player_wins + opponent_wins;
    let summary = RunSummary {
        matches: args.matches,
        player_wins,
        opponent_wins,
        player_win_rate: if finished > 0 {
            player_wins as f32 / finished as f32
        } else {
            0.0
        },
        total_rounds,
        avg_rounds: if finished > 0 {
            total_rounds as f32 / finished as f32
        } else {
            0.0
        },
        timeouts,
        unfinished,
        campaigns_completed,
        best_streak: profile.best_streak,
        difficulty: difficulty.to_string(),
        policy: format!("{:?}", policy).to_lowercase(),
        seed,
    };

    if args.format == "text" {
        println!(
            "{} matches ({} unfinished), player won {} ({:.1}%), avg {:.1} rounds",
            summary.matches,
            summary.unfinished,
            summary.player_wins,
            summary.player_win_rate * 100.0,
            summary.avg_rounds
        );
        if args.campaign {
            println!("campaigns completed: {}", summary.campaigns_completed);
        }
    } else {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("failed to serialize summary: {}", e),
        }
    }
}
