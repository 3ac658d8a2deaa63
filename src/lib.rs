//! # cricket-bingo
//!
//! Game engine for Cricket Bingo, a single-player matching game.
//!
//! A grid of attribute labels (IPL team, nation, trophy, or two-attribute
//! combinations) is generated from a player roster. Candidates are then
//! shown one at a time and the player marks the cells each candidate
//! satisfies.
//!
//! ## Design Principles
//!
//! 1. **One owner**: All mutable state of a play-through lives in a single
//!    `GameSession`; actions are methods that run to completion.
//!
//! 2. **Deterministic**: Grid sampling and candidate shuffling draw from a
//!    seeded `GameRng`, so a config reproduces its game exactly.
//!
//! 3. **Rendering is elsewhere**: The engine emits snapshots and events;
//!    drawing, styling and real timers belong to the front end.
//!
//! ## Modules
//!
//! - `core`: Configuration and RNG
//! - `roster`: Player records and the id filter
//! - `grid`: Cells, team logos, grid generation
//! - `rules`: The player/label match predicate
//! - `session`: Turn flow, scoring, wildcard, countdown
//! - `events`: Notifications for the presentation layer
//! - `game`: `BingoGame` facade

pub mod core;
pub mod error;
pub mod roster;
pub mod grid;
pub mod rules;
pub mod session;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Difficulty, GameConfig, GameRng, GridSize, TimerSetting};

pub use crate::error::{BingoError, Result, INSUFFICIENT_POOL_NOTICE};

pub use crate::roster::{Player, PlayerId, Roster};

pub use crate::grid::{CellColor, CellDisplay, CellState, GridCell, GridGenerator, LabelForm};

pub use crate::rules::matches;

pub use crate::session::{
    CellView, FlashToken, GameSession, SelectOutcome, SessionId, SessionSnapshot, SkipOutcome,
    TickOutcome, TimerHandle, TurnPhase, WildcardOutcome, FLASH_WINDOW,
};

pub use crate::events::GameEvent;

pub use crate::game::BingoGame;
