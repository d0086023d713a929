//! Builder pattern for MatchboxAgent construction
//!
//! Provides a fluent API for configuring and creating matchbox agents.

use rand::{SeedableRng, rngs::StdRng};

use super::{
    agent::MatchboxAgent,
    learning::{LearningPolicy, MatchboxConfig, ReinforcementValues, WeightBounds},
};
use crate::{Result, rules::Player, utils::RandomSource};

/// Builder for constructing [`MatchboxAgent`] instances with custom configuration.
///
/// # Examples
///
/// ```
/// use hexapawn::ai::{LearningPolicy, MatchboxAgentBuilder};
///
/// // Defaults: plays Dark, weights start at 3 within [1, 6], last two moves learn
/// let agent = MatchboxAgentBuilder::new().build()?;
///
/// // Whole-history credit assignment with a wider weight range
/// let agent = MatchboxAgentBuilder::new()
///     .seed(7)
///     .weight_bounds(0, 10)
///     .initial_weight(5)
///     .policy(LearningPolicy::WholeHistory)
///     .build()?;
/// # Ok::<(), hexapawn::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MatchboxAgentBuilder {
    seed: Option<u64>,
    player: Player,
    config: MatchboxConfig,
}

impl Default for MatchboxAgentBuilder {
    fn default() -> Self {
        Self {
            seed: None,
            player: Player::Dark,
            config: MatchboxConfig::default(),
        }
    }
}

impl MatchboxAgentBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for deterministic behavior.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set which side the agent plays.
    pub fn player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    /// Set the weight given to every move of a new matchbox.
    pub fn initial_weight(mut self, weight: u32) -> Self {
        self.config.initial_weight = weight;
        self
    }

    /// Set the inclusive range weights are clamped to.
    ///
    /// Checked by [`build`](Self::build).
    pub fn weight_bounds(mut self, min: u32, max: u32) -> Self {
        self.config.bounds = WeightBounds { min, max };
        self
    }

    /// Set the reinforcement values for training.
    pub fn reinforcement(mut self, values: ReinforcementValues) -> Self {
        self.config.reinforcement = values;
        self
    }

    /// Amount added to each rewarded move.
    pub fn reward(mut self, value: u32) -> Self {
        self.config.reinforcement.reward = value;
        self
    }

    /// Amount subtracted from each penalised move.
    pub fn penalty(mut self, value: u32) -> Self {
        self.config.reinforcement.penalty = value;
        self
    }

    /// Choose which moves of a finished game are adjusted.
    pub fn policy(mut self, policy: LearningPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Replace the whole learning configuration at once.
    pub fn config(mut self, config: MatchboxConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the agent with a seeded [`StdRng`].
    ///
    /// Without a seed the generator is seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the configuration
    /// fails validation.
    pub fn build(self) -> Result<MatchboxAgent<StdRng>> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        self.build_with_source(rng)
    }

    /// Build the agent around an arbitrary random source.
    ///
    /// Any seed set on the builder is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the configuration
    /// fails validation.
    pub fn build_with_source<R: RandomSource>(self, source: R) -> Result<MatchboxAgent<R>> {
        self.config.validate()?;
        Ok(MatchboxAgent::with_source(self.player, self.config, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, rules::Board, utils::ScriptedDraws};

    #[test]
    fn defaults_play_dark_with_standard_config() {
        let agent = MatchboxAgentBuilder::new().seed(1).build().unwrap();
        assert_eq!(agent.player(), Player::Dark);
        assert_eq!(*agent.config(), MatchboxConfig::default());
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        let err = MatchboxAgentBuilder::new()
            .weight_bounds(4, 2)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn reward_and_penalty_override_reinforcement() {
        let agent = MatchboxAgentBuilder::new()
            .reward(3)
            .penalty(2)
            .build()
            .unwrap();
        assert_eq!(
            agent.config().reinforcement,
            ReinforcementValues {
                reward: 3,
                penalty: 2
            }
        );
    }

    #[test]
    fn huge_weights_select_without_overflow() {
        let half = u32::MAX / 2;
        let mut agent = MatchboxAgentBuilder::new()
            .weight_bounds(1, u32::MAX)
            .initial_weight(half)
            .build_with_source(ScriptedDraws::new(vec![0, 2 * u64::from(half)]))
            .unwrap();
        let board = Board::new();

        assert_eq!(
            agent.select_move(&board),
            Some(crate::rules::Move::new(0, 0, 1, 0))
        );
        assert_eq!(
            agent.select_move(&board),
            Some(crate::rules::Move::new(0, 2, 1, 2))
        );
        assert_eq!(
            agent.matchbox(&board).unwrap().total_weight(),
            3 * u64::from(half)
        );
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new();
        let mut a = MatchboxAgentBuilder::new().seed(99).build().unwrap();
        let mut b = MatchboxAgentBuilder::new().seed(99).build().unwrap();
        for _ in 0..10 {
            assert_eq!(a.select_move(&board), b.select_move(&board));
        }
    }

    #[test]
    fn custom_source_drives_selection() {
        let mut agent = MatchboxAgentBuilder::new()
            .initial_weight(1)
            .build_with_source(ScriptedDraws::new(vec![2]))
            .unwrap();
        // three moves of weight 1: draw 2 lands on the third
        let mv = agent.select_move(&Board::new()).unwrap();
        assert_eq!(mv, crate::rules::Move::new(0, 2, 1, 2));
    }
}
