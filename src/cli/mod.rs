//! Terminal driver for Hexapawn
//!
//! Interactive play against the learning agent and batch self-training.

pub mod commands;
pub mod config;
pub mod output;
