//! Grid cells and their per-cell state machine.
//!
//! ```text
//! Unmatched --wrong guess--> Incorrect { flash } --flash expires--> Unmatched
//!     |                           |
//!     +------- claimed -----------+--------> Matched { player }   (terminal)
//! ```
//!
//! A flash is identified by a generation number. Expiring a flash only
//! reverts the cell when that exact flash is still showing, so a late
//! revert can never undo a claim or cut short a newer flash.

use serde::Serialize;

use super::assets::team_image;

/// How an unmatched cell is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CellDisplay {
    /// The label names a known team: show its logo.
    Image { asset: &'static str },
    /// Plain label text.
    Text,
}

/// Lifecycle state of one cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum CellState {
    Unmatched,
    /// Showing the wrong-guess color until flash `flash` expires.
    Incorrect { flash: u64 },
    /// Claimed by `player`; never changes again this session.
    Matched { player: String },
}

/// Background color of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellColor {
    Default,
    Correct,
    Incorrect,
}

impl CellColor {
    /// CSS color used by the web front end.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            CellColor::Default => "#4a004a",
            CellColor::Correct => "#28a745",
            CellColor::Incorrect => "#dc3545",
        }
    }
}

/// One square of the bingo grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridCell {
    label: String,
    display: CellDisplay,
    state: CellState,
}

impl GridCell {
    /// Create an unmatched cell, picking image display for team names.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let display = match team_image(&label) {
            Some(asset) => CellDisplay::Image { asset },
            None => CellDisplay::Text,
        };

        Self {
            label,
            display,
            state: CellState::Unmatched,
        }
    }

    /// The attribute text this cell was generated with.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn display(&self) -> CellDisplay {
        self.display
    }

    #[must_use]
    pub fn state(&self) -> &CellState {
        &self.state
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self.state, CellState::Matched { .. })
    }

    /// Name of the player who solved this cell.
    #[must_use]
    pub fn matched_player_name(&self) -> Option<&str> {
        match &self.state {
            CellState::Matched { player } => Some(player),
            _ => None,
        }
    }

    /// Text shown on the cell: the solver's name once matched.
    #[must_use]
    pub fn text(&self) -> &str {
        self.matched_player_name().unwrap_or(&self.label)
    }

    /// Logo to draw, if any. Matched cells always show the name instead.
    #[must_use]
    pub fn image(&self) -> Option<&'static str> {
        match (&self.state, self.display) {
            (CellState::Matched { .. }, _) => None,
            (_, CellDisplay::Image { asset }) => Some(asset),
            (_, CellDisplay::Text) => None,
        }
    }

    #[must_use]
    pub fn color(&self) -> CellColor {
        match self.state {
            CellState::Unmatched => CellColor::Default,
            CellState::Incorrect { .. } => CellColor::Incorrect,
            CellState::Matched { .. } => CellColor::Correct,
        }
    }

    /// Mark the cell solved by `player`.
    ///
    /// Returns false (and changes nothing) if it was already matched.
    pub(crate) fn claim(&mut self, player: &str) -> bool {
        if self.is_matched() {
            return false;
        }
        self.state = CellState::Matched {
            player: player.to_string(),
        };
        true
    }

    /// Start showing a wrong-guess flash.
    pub(crate) fn flash(&mut self, generation: u64) {
        if !self.is_matched() {
            self.state = CellState::Incorrect { flash: generation };
        }
    }

    /// End flash `generation` if it is still the one showing.
    pub(crate) fn expire_flash(&mut self, generation: u64) -> bool {
        match self.state {
            CellState::Incorrect { flash } if flash == generation => {
                self.state = CellState::Unmatched;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_label_uses_image() {
        let cell = GridCell::new("Chennai Super Kings");
        assert_eq!(cell.display(), CellDisplay::Image { asset: "csk.png" });
        assert_eq!(cell.image(), Some("csk.png"));
        assert_eq!(cell.color(), CellColor::Default);
    }

    #[test]
    fn test_other_label_uses_text() {
        let cell = GridCell::new("India + T20 World Cup");
        assert_eq!(cell.display(), CellDisplay::Text);
        assert_eq!(cell.text(), "India + T20 World Cup");
        assert_eq!(cell.image(), None);
    }

    #[test]
    fn test_claim_is_terminal() {
        let mut cell = GridCell::new("Mumbai Indians");

        assert!(cell.claim("Rohit Sharma"));
        assert_eq!(cell.text(), "Rohit Sharma");
        assert_eq!(cell.label(), "Mumbai Indians");
        assert_eq!(cell.image(), None);
        assert_eq!(cell.color(), CellColor::Correct);

        assert!(!cell.claim("Jasprit Bumrah"));
        assert_eq!(cell.matched_player_name(), Some("Rohit Sharma"));

        cell.flash(9);
        assert!(cell.is_matched());
    }

    #[test]
    fn test_flash_expiry_checks_generation() {
        let mut cell = GridCell::new("Australia");

        cell.flash(1);
        assert_eq!(cell.color(), CellColor::Incorrect);

        // A second wrong guess supersedes the first flash
        cell.flash(2);
        assert!(!cell.expire_flash(1));
        assert_eq!(cell.color(), CellColor::Incorrect);

        assert!(cell.expire_flash(2));
        assert_eq!(cell.state(), &CellState::Unmatched);
        assert_eq!(cell.text(), "Australia");
    }

    #[test]
    fn test_expired_flash_does_not_undo_claim() {
        let mut cell = GridCell::new("India");
        cell.flash(4);
        assert!(cell.claim("Virat Kohli"));
        assert!(!cell.expire_flash(4));
        assert!(cell.is_matched());
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(CellColor::Default.hex(), "#4a004a");
        assert_eq!(CellColor::Correct.hex(), "#28a745");
        assert_eq!(CellColor::Incorrect.hex(), "#dc3545");
    }
}
