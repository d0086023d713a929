//! Hexapawn with a matchbox-learning computer opponent
//!
//! This crate provides:
//! - The Hexapawn rules: move generation, move application and win detection
//! - A matchbox learning agent that improves from game outcomes
//! - A self-training session against a random opponent
//! - A terminal driver for playing against the agent

pub mod ai;
pub mod cli;
pub mod error;
pub mod rules;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use types::{MoveKey, StateKey};
