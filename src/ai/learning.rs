//! Learning configuration: weight bounds, reinforcement amounts and the
//! policy deciding which moves of a finished game are adjusted.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::types::{
    DEFAULT_MOVES_TO_LEARN, INITIAL_WEIGHT, MAX_WEIGHT, MIN_WEIGHT, reinforcement,
};

/// Closed range every stored weight is kept in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightBounds {
    pub(crate) min: u32,
    pub(crate) max: u32,
}

impl WeightBounds {
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, crate::Error> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Reject inverted ranges
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.min > self.max {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "minimum weight {} exceeds maximum weight {}",
                    self.min, self.max
                ),
            });
        }
        Ok(())
    }

    /// Clamp a signed weight into `[min, max]`
    ///
    /// Never panics: on an inverted range the upper bound wins.
    pub fn clamp(&self, value: i64) -> u32 {
        value.max(i64::from(self.min)).min(i64::from(self.max)) as u32
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for WeightBounds {
    fn default() -> Self {
        Self {
            min: MIN_WEIGHT,
            max: MAX_WEIGHT,
        }
    }
}

/// Matchbox reinforcement values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReinforcementValues {
    /// Added to each rewarded move
    pub reward: u32,
    /// Subtracted from each penalised move
    pub penalty: u32,
}

impl Default for ReinforcementValues {
    fn default() -> Self {
        ReinforcementValues {
            reward: reinforcement::REWARD,
            penalty: reinforcement::PENALTY,
        }
    }
}

/// Which of the AI's moves in a finished game get credited or blamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningPolicy {
    /// Reward every move after a win; after a loss penalise only the last move.
    WholeHistory,
    /// Adjust only the last `window` moves (all of them when `None`), rewarding
    /// on a win and penalising on a loss.
    SlidingWindow { window: Option<usize> },
}

impl LearningPolicy {
    /// Sliding window over the last `window` moves
    pub fn last(window: usize) -> Self {
        LearningPolicy::SlidingWindow {
            window: Some(window),
        }
    }

    /// Indices into a history of `len` moves that the update touches
    pub fn adjusted_range(&self, len: usize, won: bool) -> Range<usize> {
        match *self {
            LearningPolicy::WholeHistory if won => 0..len,
            LearningPolicy::WholeHistory => len.saturating_sub(1)..len,
            LearningPolicy::SlidingWindow { window: None } => 0..len,
            LearningPolicy::SlidingWindow { window: Some(k) } => len.saturating_sub(k)..len,
        }
    }

    pub fn name(&self) -> String {
        match self {
            LearningPolicy::WholeHistory => "whole-history".to_string(),
            LearningPolicy::SlidingWindow { window: None } => "window(all)".to_string(),
            LearningPolicy::SlidingWindow { window: Some(k) } => format!("window({k})"),
        }
    }
}

impl Default for LearningPolicy {
    fn default() -> Self {
        LearningPolicy::last(DEFAULT_MOVES_TO_LEARN)
    }
}

/// Complete configuration of a matchbox learner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchboxConfig {
    /// Weight given to each legal move when a matchbox is first created
    pub initial_weight: u32,
    pub bounds: WeightBounds,
    pub reinforcement: ReinforcementValues,
    pub policy: LearningPolicy,
}

impl Default for MatchboxConfig {
    fn default() -> Self {
        Self {
            initial_weight: INITIAL_WEIGHT,
            bounds: WeightBounds::default(),
            reinforcement: ReinforcementValues::default(),
            policy: LearningPolicy::default(),
        }
    }
}

impl MatchboxConfig {
    /// Check the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] when the bounds are
    /// inverted, the initial weight lies outside them, or a sliding window of
    /// zero moves is requested.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let invalid = |message: String| Err(crate::Error::InvalidConfiguration { message });

        self.bounds.validate()?;
        if !self.bounds.contains(self.initial_weight) {
            return invalid(format!(
                "initial weight {} lies outside [{}, {}]",
                self.initial_weight, self.bounds.min, self.bounds.max
            ));
        }
        if let LearningPolicy::SlidingWindow { window: Some(0) } = self.policy {
            return invalid("sliding window must cover at least one move".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_history_rewards_all_penalises_last() {
        let policy = LearningPolicy::WholeHistory;
        assert_eq!(policy.adjusted_range(3, true), 0..3);
        assert_eq!(policy.adjusted_range(3, false), 2..3);
        assert!(policy.adjusted_range(0, false).is_empty());
    }

    #[test]
    fn sliding_window_is_symmetric() {
        let policy = LearningPolicy::last(2);
        assert_eq!(policy.adjusted_range(3, true), 1..3);
        assert_eq!(policy.adjusted_range(3, false), 1..3);
        assert_eq!(policy.adjusted_range(1, false), 0..1);

        let unbounded = LearningPolicy::SlidingWindow { window: None };
        assert_eq!(unbounded.adjusted_range(4, false), 0..4);
    }

    #[test]
    fn bounds_clamp_both_ends() {
        let bounds = WeightBounds::default();
        assert_eq!(bounds.clamp(-5), MIN_WEIGHT);
        assert_eq!(bounds.clamp(100), MAX_WEIGHT);
        assert_eq!(bounds.clamp(4), 4);
    }

    #[test]
    fn inverted_bounds_are_rejected_and_clamp_stays_total() {
        let err = WeightBounds::new(4, 2).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
        assert_eq!(WeightBounds::new(2, 2).unwrap().clamp(7), 2);

        let inverted = WeightBounds { min: 4, max: 2 };
        assert_eq!(inverted.clamp(3), 2);
    }

    #[test]
    fn default_config_is_valid() {
        let config = MatchboxConfig::default();
        config.validate().expect("defaults must validate");
        assert_eq!(config.initial_weight, 3);
        assert_eq!(config.policy, LearningPolicy::last(2));
    }

    #[test]
    fn validate_rejects_inconsistent_settings() {
        let inverted = MatchboxConfig {
            bounds: WeightBounds { min: 5, max: 2 },
            ..MatchboxConfig::default()
        };
        assert!(inverted.validate().is_err());

        let outside = MatchboxConfig {
            initial_weight: 9,
            ..MatchboxConfig::default()
        };
        assert!(outside.validate().is_err());

        let empty_window = MatchboxConfig {
            policy: LearningPolicy::last(0),
            ..MatchboxConfig::default()
        };
        let err = empty_window.validate().unwrap_err();
        assert!(err.to_string().contains("at least one move"));
    }
}
