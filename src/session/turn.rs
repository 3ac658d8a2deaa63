//! Candidate sequencing.
//!
//! ```text
//! AwaitingInput --(cursor passes last candidate)--> Exhausted
//!       |                                               |
//!       +----------(score or consumption limit)---------+--> Over
//! ```
//!
//! The cursor only moves forward, exactly one step per consumed candidate.

use serde::Serialize;

use crate::roster::Player;

/// Where a session is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// A candidate is showing and actions are accepted.
    AwaitingInput,
    /// The cursor ran past the last candidate.
    Exhausted,
    /// Terminal.
    Over,
}

/// The session's shuffled candidates and the cursor into them.
#[derive(Clone, Debug)]
pub struct CandidateQueue {
    players: Vec<Player>,
    index: usize,
}

impl CandidateQueue {
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        Self { players, index: 0 }
    }

    /// The candidate being evaluated, `None` once exhausted.
    #[must_use]
    pub fn current(&self) -> Option<&Player> {
        self.players.get(self.index)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Is the cursor on the final candidate?
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.players.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.players.len()
    }

    /// Candidates not yet passed, counting the current one.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.players.len().saturating_sub(self.index)
    }

    /// Move to the next candidate. No effect once exhausted.
    pub fn advance(&mut self) {
        if !self.is_exhausted() {
            self.index += 1;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}
