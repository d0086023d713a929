//! Shared argument types for CLI commands

use clap::{Args, ValueEnum};

use crate::{
    Error, Result,
    ai::{FirstMover, LearningPolicy, MatchboxConfig, WeightBounds},
    types::DEFAULT_MOVES_TO_LEARN,
};

/// Credit-assignment policy as named on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Reward every move after a win, penalise only the last after a loss
    WholeHistory,
    /// Adjust the last `--window` moves either way
    #[default]
    Window,
}

/// Learning options accepted by every command that builds an agent
#[derive(Args, Debug, Clone, Default)]
pub struct LearningArgs {
    /// Which of the computer's moves are adjusted after a game
    #[arg(long, value_enum, default_value_t = PolicyKind::Window)]
    pub policy: PolicyKind,

    /// Moves adjusted by the window policy, default 2 (0 adjusts every move).
    /// Rejected together with `--policy whole-history`.
    #[arg(long)]
    pub window: Option<usize>,

    /// Weight given to every move of a newly seen position
    #[arg(long)]
    pub initial_weight: Option<u32>,

    /// Lowest weight a move can fall to
    #[arg(long)]
    pub min_weight: Option<u32>,

    /// Highest weight a move can rise to
    #[arg(long)]
    pub max_weight: Option<u32>,
}

impl LearningArgs {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `--window` is combined
    /// with the whole-history policy.
    pub fn policy(&self) -> Result<LearningPolicy> {
        match (self.policy, self.window) {
            (PolicyKind::WholeHistory, None) => Ok(LearningPolicy::WholeHistory),
            (PolicyKind::WholeHistory, Some(window)) => Err(Error::InvalidConfiguration {
                message: format!("--window {window} has no effect with --policy whole-history"),
            }),
            (PolicyKind::Window, Some(0)) => Ok(LearningPolicy::SlidingWindow { window: None }),
            (PolicyKind::Window, window) => Ok(LearningPolicy::last(
                window.unwrap_or(DEFAULT_MOVES_TO_LEARN),
            )),
        }
    }

    /// Matchbox configuration with these options applied over the defaults.
    ///
    /// The result is validated when the agent is built.
    pub fn matchbox_config(&self) -> Result<MatchboxConfig> {
        let defaults = MatchboxConfig::default();
        let bounds = WeightBounds::new(
            self.min_weight.unwrap_or(defaults.bounds.min()),
            self.max_weight.unwrap_or(defaults.bounds.max()),
        )?;
        Ok(MatchboxConfig {
            initial_weight: self.initial_weight.unwrap_or(defaults.initial_weight),
            bounds,
            policy: self.policy()?,
            ..defaults
        })
    }
}

/// Who moves first in an interactive game
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstTurn {
    Human,
    Computer,
}

/// Who opens each training game
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opener {
    Agent,
    Opponent,
    Alternate,
}

impl From<Opener> for FirstMover {
    fn from(opener: Opener) -> Self {
        match opener {
            Opener::Agent => FirstMover::Agent,
            Opener::Opponent => FirstMover::Opponent,
            Opener::Alternate => FirstMover::Alternate,
        }
    }
}
