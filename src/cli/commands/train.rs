//! Train command - self-play against a random opponent

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    ai::{MatchboxAgentBuilder, TrainingConfig, TrainingResults, TrainingSession},
    cli::{
        config::{LearningArgs, Opener},
        output::{create_training_progress, print_kv, print_section},
    },
    rules::Player,
};

#[derive(Debug, Serialize)]
struct TrainingSummary {
    total_games: usize,
    wins: usize,
    losses: usize,
    win_rate: f64,
    win_rate_history: Vec<f64>,
    states_learned: usize,
    policy: String,
    seed: Option<u64>,
}

impl TrainingSummary {
    fn new(
        results: &TrainingResults,
        states_learned: usize,
        policy: String,
        seed: Option<u64>,
    ) -> Self {
        Self {
            total_games: results.games(),
            wins: results.wins,
            losses: results.losses,
            win_rate: results.win_rate(),
            win_rate_history: results.win_rate_history.clone(),
            states_learned,
            policy,
            seed,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Train the matchbox agent against a random opponent")]
pub struct TrainArgs {
    /// Number of training games
    #[arg(long, short = 'g', default_value_t = 1000)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Who opens each game
    #[arg(long, value_enum, default_value_t = Opener::Alternate)]
    pub first: Opener,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub learning: LearningArgs,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let learning = args
        .learning
        .matchbox_config()
        .context("Invalid learning options")?;
    let mut builder = MatchboxAgentBuilder::new()
        .player(Player::Dark)
        .config(learning);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let agent = builder.build().context("Invalid learning options")?;
    let policy = agent.policy().name();

    let config = TrainingConfig {
        num_games: args.games,
        first_mover: args.first.into(),
        seed: args.seed.map(|s| s.wrapping_add(1)),
    };
    let mut session = TrainingSession::new(agent, config);

    if args.json {
        session.train()?;
    } else {
        let pb = create_training_progress(args.games as u64);
        session.train_with_progress(|_, results| {
            pb.inc(1);
            pb.set_message(format!("win rate {:.1}%", results.win_rate() * 100.0));
        })?;
        pb.finish_and_clear();
    }

    let summary = TrainingSummary::new(
        &session.results,
        session.agent.known_states(),
        policy,
        args.seed,
    );

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{json}");
        return Ok(());
    }

    print_section("Training Summary");
    print_kv("Games", &summary.total_games.to_string());
    print_kv("Wins", &summary.wins.to_string());
    print_kv("Losses", &summary.losses.to_string());
    print_kv("Win rate", &format!("{:.1}%", summary.win_rate * 100.0));
    print_kv("Positions learned", &summary.states_learned.to_string());
    print_kv("Policy", &summary.policy);
    if !summary.win_rate_history.is_empty() {
        let history: Vec<String> = summary
            .win_rate_history
            .iter()
            .map(|rate| format!("{:.2}", rate))
            .collect();
        print_kv("Win rate by 100s", &history.join(" "));
    }

    Ok(())
}
