//! Crate error type.
//!
//! Only session start and roster loading can fail. Actions on a live
//! session never return errors: invalid clicks, late skips and repeated
//! wildcards are reported as `Ignored` outcomes instead.

use thiserror::Error;

use crate::roster::PlayerId;

/// Notice shown to the user when a game cannot be started from the pool.
pub const INSUFFICIENT_POOL_NOTICE: &str =
    "No players found for the selected difficulty. Please increase the difficulty level.";

#[derive(Debug, Error)]
pub enum BingoError {
    /// No roster player passes the id filter.
    #[error("no players with id <= {max_player_id}")]
    EmptyPool { max_player_id: u32 },

    /// The grid generator ran out of attempts before finding enough labels.
    #[error("only {distinct} of {required} distinct labels found after {attempts} attempts")]
    InsufficientPool {
        distinct: usize,
        required: usize,
        attempts: usize,
    },

    #[error("grid size must be 3 or 4, got {0}")]
    InvalidGridSize(u32),

    #[error("timer must be one of 0, 3, 4, 5, 7, 10 seconds, got {0}")]
    InvalidTimer(u32),

    /// A roster record violates the player data model.
    #[error("invalid player {id}: {reason}")]
    InvalidPlayer { id: PlayerId, reason: &'static str },

    /// A prebuilt grid does not fit the configured size.
    #[error("grid needs {expected} cells, got {found}")]
    GridShape { expected: usize, found: usize },

    #[error("duplicate grid label {0:?}")]
    DuplicateLabel(String),

    #[error("duplicate player id {0}")]
    DuplicatePlayer(PlayerId),

    #[error("malformed roster: {0}")]
    RosterFormat(#[from] serde_json::Error),
}

impl BingoError {
    /// True for the failures caused by a pool too small for the request.
    #[must_use]
    pub fn is_insufficient_pool(&self) -> bool {
        matches!(self, Self::EmptyPool { .. } | Self::InsufficientPool { .. })
    }

    /// Text to surface to the player.
    ///
    /// Pool failures share one notice; everything else falls back to the
    /// error's display text.
    #[must_use]
    pub fn user_notice(&self) -> String {
        if self.is_insufficient_pool() {
            INSUFFICIENT_POOL_NOTICE.to_string()
        } else {
            self.to_string()
        }
    }
}

pub type Result<T> = std::result::Result<T, BingoError>;
