//! Matchbox agent that learns to play Hexapawn from game outcomes.

use std::collections::HashMap;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::{
    builder::MatchboxAgentBuilder,
    learning::{LearningPolicy, MatchboxConfig},
    matchbox::Matchbox,
};
use crate::{
    rules::{Board, Move, MoveRecord, Player, legal_moves},
    types::{MoveKey, StateKey},
    utils::RandomSource,
};

/// Matchbox learning agent.
///
/// Owns its memory outright: one [`Matchbox`] per board state it has seen,
/// created lazily on first reference and never removed. Randomness comes from
/// the injected source `R`.
pub struct MatchboxAgent<R = StdRng> {
    player: Player,
    config: MatchboxConfig,
    memory: HashMap<StateKey, Matchbox>,
    source: R,
    stats: AgentStats,
}

impl<R> std::fmt::Debug for MatchboxAgent<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchboxAgent")
            .field("player", &self.player)
            .field("config", &self.config)
            .field("states", &self.memory.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl MatchboxAgent<StdRng> {
    /// Create a new builder for constructing a matchbox agent.
    ///
    /// # Example
    /// ```
    /// use hexapawn::ai::{LearningPolicy, MatchboxAgent};
    /// use hexapawn::rules::Player;
    ///
    /// let agent = MatchboxAgent::builder()
    ///     .seed(42)
    ///     .player(Player::Dark)
    ///     .policy(LearningPolicy::WholeHistory)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(agent.known_states(), 0);
    /// ```
    pub fn builder() -> MatchboxAgentBuilder {
        MatchboxAgentBuilder::new()
    }
}

impl<R: RandomSource> MatchboxAgent<R> {
    /// Assemble an agent from a configuration that has already been validated
    pub(crate) fn with_source(player: Player, config: MatchboxConfig, source: R) -> Self {
        Self {
            player,
            config,
            memory: HashMap::new(),
            source,
            stats: AgentStats::default(),
        }
    }

    /// The side this agent plays
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn config(&self) -> &MatchboxConfig {
        &self.config
    }

    pub fn policy(&self) -> LearningPolicy {
        self.config.policy
    }

    /// Fetch the matchbox for `board`, creating it on first reference.
    fn ensure_matchbox(&mut self, board: &Board) -> &mut Matchbox {
        matchbox_entry(
            &mut self.memory,
            board,
            self.player,
            self.config.initial_weight,
        )
    }

    /// Choose a move for `board`, or `None` when the agent has no legal move.
    ///
    /// `None` means the agent has lost by being blocked. The only memory
    /// change is the lazy creation of the board's matchbox.
    #[instrument(level = "trace", skip(self, board), fields(state = %board.encode()))]
    pub fn select_move(&mut self, board: &Board) -> Option<Move> {
        if !board.has_legal_move(self.player) {
            trace!("no legal move available");
            return None;
        }

        let matchbox = matchbox_entry(
            &mut self.memory,
            board,
            self.player,
            self.config.initial_weight,
        );
        let total = matchbox.total_weight();
        let uniform = total == 0;
        let chosen = matchbox.sample(&mut self.source)?;
        debug!(state = %matchbox.state_key(), %chosen, total, uniform, "selected move");
        Some(chosen)
    }

    /// Adjust weights after a finished game.
    ///
    /// `history` lists the agent's own moves in play order. The configured
    /// [`LearningPolicy`] picks which of them are rewarded (on a win) or
    /// penalised (on a loss). A move missing from its board's matchbox is
    /// skipped.
    #[instrument(level = "debug", skip(self, history), fields(moves = history.len()))]
    pub fn learn_from_game(&mut self, history: &[MoveRecord], won: bool) {
        let range = self.config.policy.adjusted_range(history.len(), won);
        let delta = if won {
            i64::from(self.config.reinforcement.reward)
        } else {
            -i64::from(self.config.reinforcement.penalty)
        };
        let bounds = self.config.bounds;

        let considered = range.len();
        let mut adjusted = 0usize;
        for record in &history[range] {
            match self.ensure_matchbox(&record.board).adjust(record.mv, delta, bounds) {
                Some(weight) => {
                    adjusted += 1;
                    trace!(mv = %record.mv, weight, "adjusted weight");
                }
                None => debug!(mv = %record.mv, "move not in matchbox, skipped"),
            }
        }

        self.stats.games_learned += 1;
        if won {
            self.stats.wins += 1;
        } else {
            self.stats.losses += 1;
        }
        debug!(
            policy = %self.config.policy.name(),
            won,
            adjusted,
            skipped = considered - adjusted,
            "learned from game"
        );
    }

    /// Snapshot of the weights for `board`, creating its matchbox if needed.
    ///
    /// The returned map is a copy; changing it has no effect on the agent.
    pub fn weights_for_board(&mut self, board: &Board) -> HashMap<MoveKey, u32> {
        self.ensure_matchbox(board).snapshot()
    }

    /// Read-only access to an existing matchbox
    pub fn matchbox(&self, board: &Board) -> Option<&Matchbox> {
        self.memory.get(&StateKey::from(board))
    }

    /// Number of board states in memory
    pub fn known_states(&self) -> usize {
        self.memory.len()
    }

    /// Iterate over every matchbox in memory
    pub fn matchboxes(&self) -> impl Iterator<Item = &Matchbox> {
        self.memory.values()
    }

    /// Get statistics about the agent
    pub fn stats(&self) -> AgentStats {
        AgentStats {
            states_seen: self.memory.len(),
            ..self.stats
        }
    }
}

fn matchbox_entry<'a>(
    memory: &'a mut HashMap<StateKey, Matchbox>,
    board: &Board,
    player: Player,
    initial_weight: u32,
) -> &'a mut Matchbox {
    memory.entry(StateKey::from(board)).or_insert_with_key(|key| {
        let moves = legal_moves(board, player);
        debug!(state = %key, moves = moves.len(), "created matchbox");
        Matchbox::new(key.clone(), moves, initial_weight)
    })
}

/// Statistics about a matchbox agent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStats {
    pub states_seen: usize,
    pub games_learned: usize,
    pub wins: usize,
    pub losses: usize,
}
