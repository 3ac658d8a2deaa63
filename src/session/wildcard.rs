//! One-shot bulk resolution.
//!
//! The wildcard checks the current candidate against every unmatched cell
//! at once and claims all of them that match.

use smallvec::SmallVec;
use tracing::debug;

use crate::grid::GridCell;
use crate::roster::Player;
use crate::rules::matches;

/// Indices claimed by one resolution. A 4x4 grid fits inline.
pub type Claimed = SmallVec<[usize; 16]>;

/// The single wildcard each session gets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WildCard {
    used: bool,
}

impl WildCard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.used
    }

    /// Claim every unmatched cell `player` satisfies and spend the wildcard.
    ///
    /// Returns `None` without touching anything if it was already spent.
    /// Spending it on a candidate that matches nothing is allowed.
    pub fn resolve(&mut self, cells: &mut [GridCell], player: &Player) -> Option<Claimed> {
        if self.used {
            return None;
        }
        self.used = true;

        let claimed: Claimed = cells
            .iter_mut()
            .enumerate()
            .filter(|(_, cell)| !cell.is_matched() && matches(player, cell.label()))
            .filter_map(|(index, cell)| cell.claim(&player.name).then_some(index))
            .collect();

        debug!(player = %player.name, claimed = claimed.len(), "wildcard resolved");
        Some(claimed)
    }
}
