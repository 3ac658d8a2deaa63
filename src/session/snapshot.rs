//! Read-only views of a session for rendering.

use serde::Serialize;

use super::state::SessionId;
use super::turn::TurnPhase;
use crate::core::GridSize;
use crate::grid::{CellColor, GridCell};

/// How one cell should be drawn right now.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub text: String,
    pub image: Option<&'static str>,
    pub color: CellColor,
    pub matched: bool,
}

impl From<&GridCell> for CellView {
    fn from(cell: &GridCell) -> Self {
        Self {
            text: cell.text().to_string(),
            image: cell.image(),
            color: cell.color(),
            matched: cell.is_matched(),
        }
    }
}

/// The whole session as the player sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub session: SessionId,
    pub grid_size: GridSize,
    pub cells: Vec<CellView>,
    pub score: usize,
    pub out_of: usize,
    pub players_consumed: usize,
    pub candidate_index: usize,
    /// Name of the current candidate.
    pub candidate: Option<String>,
    /// Candidates left including the current one.
    pub players_remaining: usize,
    /// Seconds left, `None` when the timer is disabled.
    pub countdown: Option<u32>,
    pub wildcard_available: bool,
    pub phase: TurnPhase,
    pub is_over: bool,
}

impl SessionSnapshot {
    /// Rows of cells, `grid_size` per row.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(self.grid_size.side())
    }
}
