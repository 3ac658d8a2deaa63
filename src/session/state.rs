//! The live game session.
//!
//! `GameSession` owns all mutable state of one play-through: the grid,
//! the candidate queue, both counters, the wildcard and the countdown.
//! Every action is a method that runs to completion and leaves the session
//! consistent, so observers never see half-applied transitions.
//!
//! ## Actions
//!
//! - `select_cell`: evaluate the current candidate against one cell
//! - `skip`: pass on the current candidate
//! - `use_wildcard`: resolve the current candidate against the whole grid
//! - `tick`: one second of countdown; a timeout behaves like a skip
//! - `expire_flash`: end a wrong-guess flash (display only)
//!
//! Each consuming action advances the candidate cursor exactly once and
//! then re-checks game over.

use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use super::score::ScoreTracker;
use super::snapshot::{CellView, SessionSnapshot};
use super::timer::{Countdown, TickResult, TimerHandle};
use super::turn::{CandidateQueue, TurnPhase};
use super::wildcard::WildCard;
use crate::core::{GameConfig, GameRng};
use crate::error::{BingoError, Result};
use crate::events::GameEvent;
use crate::grid::{GridCell, GridGenerator};
use crate::roster::{Player, Roster};
use crate::rules::matches;

/// How long a wrong guess stays red.
pub const FLASH_WINDOW: std::time::Duration = std::time::Duration::from_secs(1);

/// Distinguishes sessions so stale timers and flashes can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate a process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Identifies the flash started by one wrong guess on one cell.
///
/// Pass it back to `expire_flash` after `FLASH_WINDOW`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlashToken {
    pub session: SessionId,
    pub cell: usize,
    pub generation: u64,
}

/// Result of `select_cell`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Out of range, game over, or no candidate to evaluate.
    Ignored,
    /// The cell now belongs to `player`.
    Matched { player: String },
    /// Wrong guess; the cell flashes until `flash` expires.
    Missed { flash: FlashToken },
    /// The cell was already solved. It stays as it is but the candidate is
    /// still used up.
    Spent,
}

/// Result of `skip`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipOutcome {
    /// Last candidate, or the game is over.
    Ignored,
    Skipped,
}

/// Result of `use_wildcard`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WildcardOutcome {
    /// Already spent, or no candidate to evaluate.
    Ignored,
    Resolved { claimed: usize },
}

/// Result of `tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale handle, no countdown, or not awaiting input.
    Ignored,
    Counting { remaining: u32 },
    /// The countdown ran out and the candidate was skipped.
    TimedOut,
}

/// One play-through, from start to game over.
#[derive(Clone, Debug)]
pub struct GameSession {
    id: SessionId,
    config: GameConfig,
    cells: Vec<GridCell>,
    candidates: CandidateQueue,
    score: ScoreTracker,
    wildcard: WildCard,
    countdown: Countdown,
    is_over: bool,
    next_flash: u64,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Start a new session from the roster (`startGame`).
    ///
    /// Fails when no player passes the id filter, or when the pool cannot
    /// fill the grid with distinct labels within the attempt budget.
    pub fn start(config: &GameConfig, roster: &Roster) -> Result<Self> {
        let pool = roster.filter_by_max_id(config.max_player_id);
        if pool.is_empty() {
            warn!(max_player_id = config.max_player_id, "no players pass the difficulty filter");
            return Err(BingoError::EmptyPool {
                max_player_id: config.max_player_id,
            });
        }

        let rng = GameRng::new(config.seed);
        let cells = GridGenerator::from_config(config)
            .generate(&pool, &mut rng.for_context("grid"))
            .inspect_err(|err| warn!(%err, "grid generation failed"))?;

        let mut candidates: Vec<Player> = pool.into_iter().cloned().collect();
        rng.for_context("candidates").shuffle(&mut candidates);
        candidates.truncate(config.grid_size.candidate_cap());

        Self::with_grid(config.clone(), cells, candidates)
    }

    /// Build a session from an explicit grid and candidate order.
    ///
    /// The grid must have exactly `grid_size²` cells with distinct labels.
    pub fn with_grid(config: GameConfig, cells: Vec<GridCell>, candidates: Vec<Player>) -> Result<Self> {
        let expected = config.grid_size.cell_count();
        if cells.len() != expected {
            return Err(BingoError::GridShape {
                expected,
                found: cells.len(),
            });
        }
        let mut labels = FxHashSet::default();
        if let Some(dup) = cells.iter().find(|c| !labels.insert(c.label())) {
            return Err(BingoError::DuplicateLabel(dup.label().to_string()));
        }

        let id = SessionId::next();
        let queue_len = candidates.len();
        let mut session = Self {
            id,
            countdown: Countdown::new(id, config.timer),
            score: ScoreTracker::new(expected, queue_len),
            candidates: CandidateQueue::new(candidates),
            wildcard: WildCard::new(),
            is_over: false,
            next_flash: 0,
            events: Vec::new(),
            cells,
            config,
        };

        info!(
            session = %id,
            grid = %session.config.grid_size,
            difficulty = %session.config.difficulty,
            candidates = queue_len,
            "session started"
        );
        session.events.push(GameEvent::SessionStarted {
            cells: expected,
            candidates: queue_len,
        });
        session.push_candidate_event();
        session.countdown.on_session_start();
        session.push_countdown_event();
        session.check_game_over();

        Ok(session)
    }

    // === Actions ===

    /// Evaluate the current candidate against cell `index` (`handleGridClick`).
    ///
    /// Any click on a cell in range consumes the candidate, including a
    /// click on an already solved cell.
    pub fn select_cell(&mut self, index: usize) -> SelectOutcome {
        if self.phase() != TurnPhase::AwaitingInput {
            return SelectOutcome::Ignored;
        }
        let Some(player) = self.candidates.current() else {
            return SelectOutcome::Ignored;
        };
        let Some(cell) = self.cells.get(index) else {
            return SelectOutcome::Ignored;
        };
        if cell.is_matched() {
            debug!(session = %self.id, cell = index, "click on solved cell");
            self.consume_candidate();
            return SelectOutcome::Spent;
        }

        let name = player.name.clone();
        let outcome = if matches(player, cell.label()) {
            self.cells[index].claim(&name);
            self.score.add_matches(1);
            debug!(session = %self.id, cell = index, player = %name, "cell matched");
            SelectOutcome::Matched { player: name }
        } else {
            self.next_flash += 1;
            let flash = FlashToken {
                session: self.id,
                cell: index,
                generation: self.next_flash,
            };
            self.cells[index].flash(flash.generation);
            debug!(session = %self.id, cell = index, player = %name, "wrong guess");
            SelectOutcome::Missed { flash }
        };

        self.events.push(GameEvent::cell_changed(index, &self.cells[index]));
        self.consume_candidate();
        outcome
    }

    /// Pass on the current candidate.
    ///
    /// Ignored on the last candidate so the cursor stays in bounds.
    pub fn skip(&mut self) -> SkipOutcome {
        if self.phase() != TurnPhase::AwaitingInput || self.candidates.is_last() {
            return SkipOutcome::Ignored;
        }

        debug!(session = %self.id, index = self.candidates.index(), "candidate skipped");
        self.consume_candidate();
        SkipOutcome::Skipped
    }

    /// Claim every unmatched cell the current candidate satisfies.
    ///
    /// Usable once per session. The candidate is consumed even when
    /// nothing matches.
    pub fn use_wildcard(&mut self) -> WildcardOutcome {
        if self.phase() != TurnPhase::AwaitingInput || !self.wildcard.is_available() {
            return WildcardOutcome::Ignored;
        }
        let Some(player) = self.candidates.current() else {
            return WildcardOutcome::Ignored;
        };
        let Some(claimed) = self.wildcard.resolve(&mut self.cells, player) else {
            return WildcardOutcome::Ignored;
        };

        self.score.add_matches(claimed.len());
        for &index in &claimed {
            self.events.push(GameEvent::cell_changed(index, &self.cells[index]));
        }
        self.events.push(GameEvent::WildcardSpent {
            claimed: claimed.len(),
        });

        self.consume_candidate();
        WildcardOutcome::Resolved {
            claimed: claimed.len(),
        }
    }

    /// One second of countdown for the timer identified by `handle`.
    ///
    /// A timeout consumes the candidate like `skip`, with one difference:
    /// it also fires on the last candidate. The queue is then exhausted and
    /// the game ends, so a timed game can never stall on its final player.
    pub fn tick(&mut self, handle: TimerHandle) -> TickOutcome {
        if self.phase() != TurnPhase::AwaitingInput {
            return TickOutcome::Ignored;
        }

        match self.countdown.tick(handle) {
            TickResult::Ignored => {
                trace!(session = %self.id, ?handle, "stale tick ignored");
                TickOutcome::Ignored
            }
            TickResult::Counting(remaining) => {
                self.push_countdown_event();
                TickOutcome::Counting { remaining }
            }
            TickResult::Expired => {
                debug!(session = %self.id, index = self.candidates.index(), "candidate timed out");
                self.consume_candidate();
                TickOutcome::TimedOut
            }
        }
    }

    /// End a wrong-guess flash. Returns true if the cell reverted.
    ///
    /// Has no effect if the cell was claimed or flashed again since.
    pub fn expire_flash(&mut self, token: FlashToken) -> bool {
        if token.session != self.id {
            return false;
        }
        let Some(cell) = self.cells.get_mut(token.cell) else {
            return false;
        };
        if !cell.expire_flash(token.generation) {
            return false;
        }

        self.events.push(GameEvent::cell_changed(token.cell, &self.cells[token.cell]));
        true
    }

    /// Suspend the countdown.
    pub fn pause(&mut self) {
        if self.is_over || self.countdown.is_paused() {
            return;
        }
        self.countdown.on_pause();
        self.push_countdown_event();
    }

    /// Restart the countdown at full duration.
    pub fn resume(&mut self) {
        if self.is_over || !self.countdown.is_paused() {
            return;
        }
        self.countdown.on_resume();
        self.push_countdown_event();
    }

    /// Tear down: cancel the countdown so no tick can reach this session.
    pub fn end(&mut self) {
        self.countdown.on_session_end();
    }

    // === Queries ===

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.is_over {
            TurnPhase::Over
        } else if self.candidates.is_exhausted() {
            TurnPhase::Exhausted
        } else {
            TurnPhase::AwaitingInput
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }

    #[must_use]
    pub fn current_candidate(&self) -> Option<&Player> {
        self.candidates.current()
    }

    #[must_use]
    pub fn candidate_index(&self) -> usize {
        self.candidates.index()
    }

    /// The session's candidate order.
    pub fn candidates(&self) -> impl Iterator<Item = &Player> {
        self.candidates.iter()
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score.score()
    }

    #[must_use]
    pub fn players_consumed(&self) -> usize {
        self.score.players_consumed()
    }

    /// Winning score, `grid_size²`.
    #[must_use]
    pub fn out_of(&self) -> usize {
        self.score.target()
    }

    #[must_use]
    pub fn wildcard_available(&self) -> bool {
        self.wildcard.is_available()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.countdown.is_paused()
    }

    /// Handle of the running countdown; ticks must carry it.
    #[must_use]
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.countdown.handle()
    }

    #[must_use]
    pub fn countdown_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Take all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Everything a front end needs to draw the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session: self.id,
            grid_size: self.config.grid_size,
            cells: self.cells.iter().map(CellView::from).collect(),
            score: self.score(),
            out_of: self.out_of(),
            players_consumed: self.players_consumed(),
            candidate_index: self.candidate_index(),
            candidate: self.current_candidate().map(|p| p.name.clone()),
            players_remaining: self.candidates.remaining(),
            countdown: self.config.timer.is_enabled().then_some(self.countdown.remaining()),
            wildcard_available: self.wildcard_available(),
            phase: self.phase(),
            is_over: self.is_over,
        }
    }

    // === Transitions ===

    /// Advance the cursor and count the candidate as used, then re-check
    /// game over and restart the countdown for the next candidate.
    fn consume_candidate(&mut self) {
        self.candidates.advance();
        self.score.consume_player();
        self.push_candidate_event();

        if !self.check_game_over() {
            self.countdown.on_candidate_advance();
            self.push_countdown_event();
        }
    }

    /// Enter `Over` if a limit was reached. Returns whether the game is over.
    fn check_game_over(&mut self) -> bool {
        if self.is_over {
            return true;
        }
        // An exhausted cursor ends the game even if the counters would not
        let finished = self.score.take_game_over() || self.candidates.is_exhausted();
        if !finished {
            return false;
        }

        self.is_over = true;
        self.countdown.on_session_end();
        self.push_countdown_event();

        info!(
            session = %self.id,
            score = self.score(),
            out_of = self.out_of(),
            consumed = self.players_consumed(),
            "game over"
        );
        self.events.push(GameEvent::GameOver {
            score: self.score(),
            out_of: self.out_of(),
        });
        true
    }

    fn push_candidate_event(&mut self) {
        self.events.push(GameEvent::CandidateChanged {
            index: self.candidates.index(),
            name: self.candidates.current().map(|p| p.name.clone()),
        });
    }

    fn push_countdown_event(&mut self) {
        if self.config.timer.is_enabled() {
            self.events.push(GameEvent::CountdownChanged {
                remaining: self.countdown.remaining(),
            });
        }
    }
}
