//! Game sessions: turn flow, scoring, wildcard and countdown.
//!
//! `GameSession` is the single owner of a play-through's mutable state.
//! The submodules hold the pieces it is built from.

pub mod score;
pub mod snapshot;
pub mod state;
pub mod timer;
pub mod turn;
pub mod wildcard;

pub use score::ScoreTracker;
pub use snapshot::{CellView, SessionSnapshot};
pub use state::{
    FlashToken, GameSession, SelectOutcome, SessionId, SkipOutcome, TickOutcome, WildcardOutcome,
    FLASH_WINDOW,
};
pub use timer::{Countdown, TickResult, TimerHandle};
pub use turn::{CandidateQueue, TurnPhase};
pub use wildcard::WildCard;
