//! Score and consumption counters.

use serde::Serialize;

/// Tracks correct matches and candidates spent, and decides game over.
///
/// Both counters only go up. The game is over once every cell is solved
/// or every dealt candidate has been used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreTracker {
    score: usize,
    players_consumed: usize,
    target: usize,
    queue_len: usize,
    notified: bool,
}

impl ScoreTracker {
    /// `target` is the cell count, `queue_len` the number of candidates dealt.
    #[must_use]
    pub fn new(target: usize, queue_len: usize) -> Self {
        Self {
            score: 0,
            players_consumed: 0,
            target,
            queue_len,
            notified: false,
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn players_consumed(&self) -> usize {
        self.players_consumed
    }

    /// Denominator shown next to the score.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Add `claimed` newly solved cells in one step.
    pub fn add_matches(&mut self, claimed: usize) {
        self.score = (self.score + claimed).min(self.target);
    }

    pub fn consume_player(&mut self) {
        self.players_consumed += 1;
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.score == self.target || self.players_consumed >= self.queue_len
    }

    /// True exactly once: the first time it is called after game over.
    pub fn take_game_over(&mut self) -> bool {
        if self.notified || !self.is_game_over() {
            return false;
        }
        self.notified = true;
        true
    }
}
