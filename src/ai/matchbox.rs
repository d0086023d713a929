//! Matchbox holding the weighted candidate moves of one board state

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::learning::WeightBounds;
use crate::{
    rules::Move,
    types::{MoveKey, StateKey},
    utils::{RandomSource, weighted_index},
};

/// A matchbox for a specific board state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchbox {
    /// State identifier (board encoding)
    state_key: StateKey,
    /// Weight of each legal move, in move-generation order
    weights: Vec<(Move, u32)>,
}

impl Matchbox {
    /// Create a matchbox giving every legal move the same starting weight
    pub fn new(state_key: StateKey, legal_moves: Vec<Move>, initial_weight: u32) -> Self {
        Matchbox {
            state_key,
            weights: legal_moves
                .into_iter()
                .map(|mv| (mv, initial_weight))
                .collect(),
        }
    }

    /// Get the state identifier
    pub fn state_key(&self) -> &StateKey {
        &self.state_key
    }

    /// Get the weight for a specific move
    pub fn weight(&self, mv: Move) -> Option<u32> {
        self.weights
            .iter()
            .find(|(candidate, _)| *candidate == mv)
            .map(|&(_, weight)| weight)
    }

    /// Iterate over move-weight pairs in generation order
    pub fn entries(&self) -> impl Iterator<Item = (Move, u32)> + '_ {
        self.weights.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Get total weight
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().map(|&(_, w)| u64::from(w)).sum()
    }

    /// Sample a move in proportion to its weight.
    ///
    /// Falls back to a uniform choice when every weight is zero; returns
    /// `None` only for an empty matchbox.
    pub fn sample<R: RandomSource + ?Sized>(&self, source: &mut R) -> Option<Move> {
        let weights: Vec<u32> = self.weights.iter().map(|&(_, w)| w).collect();
        weighted_index(source, &weights).map(|index| self.weights[index].0)
    }

    /// Shift a move's weight by `delta`, clamped into `bounds`.
    ///
    /// Returns the new weight, or `None` if the move is not in this box.
    pub fn adjust(&mut self, mv: Move, delta: i64, bounds: WeightBounds) -> Option<u32> {
        let (_, weight) = self
            .weights
            .iter_mut()
            .find(|(candidate, _)| *candidate == mv)?;
        *weight = bounds.clamp(i64::from(*weight) + delta);
        Some(*weight)
    }

    /// Copy of the weights keyed by move
    pub fn snapshot(&self) -> HashMap<MoveKey, u32> {
        self.weights
            .iter()
            .map(|&(mv, weight)| (mv.key(), weight))
            .collect()
    }
}
