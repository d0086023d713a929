//! Common test utilities for the hexapawn test suite.
//!
//! Board fixtures, a scripted agent constructor and an exhaustive walk of
//! the positions reachable from the opening.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use hexapawn::{
    ai::{LearningPolicy, MatchboxAgent, MatchboxAgentBuilder},
    rules::{Board, Player, check_for_winner},
    utils::ScriptedDraws,
};

/// Parse a board fixture such as `"DDD|...|LLL"`.
pub fn board(text: &str) -> Board {
    Board::from_string(text).expect("fixture board should parse")
}

/// A Dark agent whose weighted draws are replayed from `draws`.
pub fn scripted_agent(draws: Vec<u64>, policy: LearningPolicy) -> MatchboxAgent<ScriptedDraws> {
    MatchboxAgentBuilder::new()
        .player(Player::Dark)
        .policy(policy)
        .build_with_source(ScriptedDraws::new(draws))
        .expect("default configuration should validate")
}

/// Every (position, player to move) pair reachable from the opening with
/// either side moving first, including finished positions.
pub fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    for first in Player::ALL {
        queue.push_back((Board::new(), first));
    }

    let mut positions = Vec::new();
    while let Some((board, mover)) = queue.pop_front() {
        if !seen.insert((board, mover)) {
            continue;
        }
        positions.push((board, mover));
        if check_for_winner(&board, Some(mover)).is_some() {
            continue;
        }
        for mv in board.legal_moves(mover) {
            queue.push_back((board.apply(mv), mover.opponent()));
        }
    }
    positions
}
