//! Presentation events.
//!
//! The session queues an event for everything a front end needs to redraw:
//! cell color or text changes, a new candidate, countdown values, the
//! wildcard being spent, and the final score. Front ends drain the queue
//! after each action.

use serde::Serialize;

use crate::grid::{CellColor, GridCell};

/// Something observable happened to the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new session replaced whatever was showing.
    SessionStarted {
        cells: usize,
        candidates: usize,
    },

    /// A cell's color or text changed.
    CellChanged {
        index: usize,
        color: CellColor,
        text: String,
    },

    /// The candidate cursor moved. `name` is `None` once the queue is spent.
    CandidateChanged {
        index: usize,
        name: Option<String>,
    },

    /// The countdown shows a new value. Zero means no countdown is running.
    CountdownChanged { remaining: u32 },

    /// The wildcard was used and claimed `claimed` cells.
    WildcardSpent { claimed: usize },

    /// Terminal notification, queued exactly once per session.
    GameOver { score: usize, out_of: usize },
}

impl GameEvent {
    /// Build a `CellChanged` event from the cell's current look.
    #[must_use]
    pub fn cell_changed(index: usize, cell: &GridCell) -> Self {
        GameEvent::CellChanged {
            index,
            color: cell.color(),
            text: cell.text().to_string(),
        }
    }

    /// User-facing text for events that warrant a notice.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            GameEvent::GameOver { score, out_of } => Some(format!(
                "Game Over! Your final score is {} out of {}.",
                score, out_of
            )),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameEvent::GameOver { .. })
    }
}
