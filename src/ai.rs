//! Matchbox learning AI
//!
//! Each board state the agent meets gets a matchbox of weighted candidate
//! moves. Moves are drawn in proportion to their weights and, once a game is
//! decided, the weights of the agent's own moves are nudged up after a win or
//! down after a loss.

pub mod agent;
pub mod builder;
pub mod learning;
pub mod matchbox;
pub mod training;

pub use agent::{AgentStats, MatchboxAgent};
pub use builder::MatchboxAgentBuilder;
pub use learning::{LearningPolicy, MatchboxConfig, ReinforcementValues, WeightBounds};
pub use matchbox::Matchbox;
pub use training::{FirstMover, TrainingConfig, TrainingResults, TrainingSession};
