//! Self-training: a matchbox agent against a uniformly random opponent

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::agent::MatchboxAgent;
use crate::{
    rules::{Game, Move, Victory, WinReason},
    utils::RandomSource,
};

/// Win rates are sampled after every this many games.
pub const WIN_RATE_INTERVAL: usize = 100;

/// Who opens each training game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstMover {
    Agent,
    #[default]
    Opponent,
    /// Opponent opens even-numbered games, the agent odd-numbered ones
    Alternate,
}

/// Configuration for training session
#[derive(Debug, Clone, Default)]
pub struct TrainingConfig {
    pub num_games: usize,
    pub first_mover: FirstMover,
    /// Seed for the opponent's move choices
    pub seed: Option<u64>,
}

/// Results from training
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingResults {
    pub wins: usize,
    pub losses: usize,
    pub win_rate_history: Vec<f64>,
}

impl TrainingResults {
    pub fn games(&self) -> usize {
        self.wins + self.losses
    }

    /// Fraction of games won so far, zero before any game
    pub fn win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => self.wins as f64 / games as f64,
        }
    }
}

/// A training session
pub struct TrainingSession<R = StdRng> {
    pub agent: MatchboxAgent<R>,
    pub config: TrainingConfig,
    pub games_played: usize,
    pub results: TrainingResults,
    rng: StdRng,
}

impl<R: RandomSource> TrainingSession<R> {
    /// Create a new training session
    pub fn new(agent: MatchboxAgent<R>, config: TrainingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };

        TrainingSession {
            agent,
            config,
            games_played: 0,
            results: TrainingResults::default(),
            rng,
        }
    }

    /// Run training for configured number of games
    pub fn train(&mut self) -> Result<(), crate::Error> {
        self.train_with_progress(|_, _| {})
    }

    /// Run training, calling `on_game` with the game count and running
    /// results after every game.
    pub fn train_with_progress<F>(&mut self, mut on_game: F) -> Result<(), crate::Error>
    where
        F: FnMut(usize, &TrainingResults),
    {
        for _ in 0..self.config.num_games {
            self.play_game()?;
            on_game(self.games_played, &self.results);

            if self.games_played.is_multiple_of(WIN_RATE_INTERVAL) {
                let win_rate = self.results.win_rate();
                self.results.win_rate_history.push(win_rate);
                info!(
                    games = self.games_played,
                    win_rate,
                    states = self.agent.known_states(),
                    "training milestone"
                );
            }
        }
        Ok(())
    }

    /// Play one game, let the agent learn from it and record the result.
    pub fn play_game(&mut self) -> Result<Victory, crate::Error> {
        let agent_player = self.agent.player();
        let first = match self.config.first_mover {
            FirstMover::Agent => agent_player,
            FirstMover::Opponent => agent_player.opponent(),
            FirstMover::Alternate if self.games_played.is_multiple_of(2) => {
                agent_player.opponent()
            }
            FirstMover::Alternate => agent_player,
        };
        let mut game = Game::new(first);

        let victory = loop {
            if let Some(victory) = game.outcome() {
                break victory;
            }
            let mover = game.to_move();
            let choice = if mover == agent_player {
                self.agent.select_move(game.board())
            } else {
                self.random_move(&game)
            };
            match choice {
                Some(mv) => {
                    game.play(mv)?;
                }
                None => break Victory::new(mover.opponent(), WinReason::NoLegalMoves),
            }
        };

        let won = victory.winner == agent_player;
        self.agent.learn_from_game(&game.history_for(agent_player), won);

        if won {
            self.results.wins += 1;
        } else {
            self.results.losses += 1;
        }
        self.games_played += 1;
        debug!(game = self.games_played, %victory, plies = game.ply(), "training game finished");

        Ok(victory)
    }

    fn random_move(&mut self, game: &Game) -> Option<Move> {
        game.legal_moves().choose(&mut self.rng).copied()
    }
}
