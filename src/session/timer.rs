//! Per-candidate countdown.
//!
//! The countdown is the only thing in a session that moves on its own.
//! The front end owns the actual periodic timer; this type decides whether
//! a tick is still meaningful. Every (re)start issues a fresh
//! `TimerHandle`, and ticks carrying an older handle (from a previous
//! candidate, before a pause, or from a replaced session) are ignored.
//!
//! ## Lifecycle hooks
//!
//! | hook                   | effect                                  |
//! |------------------------|-----------------------------------------|
//! | `on_session_start`     | start at full duration                  |
//! | `on_candidate_advance` | restart at full duration                |
//! | `on_pause`             | cancel, remember paused                 |
//! | `on_resume`            | restart at full duration                |
//! | `on_session_end`       | cancel for good                         |

use serde::{Deserialize, Serialize};

use super::state::SessionId;
use crate::core::TimerSetting;

/// Identifies one running countdown of one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle {
    pub session: SessionId,
    pub generation: u64,
}

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickResult {
    /// Stale handle or no countdown running.
    Ignored,
    /// Still counting; this many seconds left.
    Counting(u32),
    /// Reached zero. The countdown has already been reset to full duration.
    Expired,
}

#[derive(Clone, Debug)]
pub struct Countdown {
    session: SessionId,
    duration: Option<u32>,
    remaining: u32,
    generation: u64,
    running: bool,
    paused: bool,
    ended: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(session: SessionId, setting: TimerSetting) -> Self {
        Self {
            session,
            duration: setting.seconds(),
            remaining: 0,
            generation: 0,
            running: false,
            paused: false,
            ended: false,
        }
    }

    pub fn on_session_start(&mut self) -> Option<TimerHandle> {
        self.ended = false;
        self.paused = false;
        self.restart()
    }

    pub fn on_candidate_advance(&mut self) -> Option<TimerHandle> {
        self.restart()
    }

    pub fn on_pause(&mut self) {
        self.paused = true;
        self.restart();
    }

    pub fn on_resume(&mut self) -> Option<TimerHandle> {
        self.paused = false;
        self.restart()
    }

    pub fn on_session_end(&mut self) {
        self.ended = true;
        self.restart();
    }

    /// Handle for the countdown currently running, if any.
    #[must_use]
    pub fn handle(&self) -> Option<TimerHandle> {
        self.running.then_some(TimerHandle {
            session: self.session,
            generation: self.generation,
        })
    }

    /// Seconds shown to the player; zero when nothing is running.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Count down one second.
    pub fn tick(&mut self, handle: TimerHandle) -> TickResult {
        if self.handle() != Some(handle) {
            return TickResult::Ignored;
        }

        if self.remaining <= 1 {
            self.remaining = self.duration.unwrap_or(0);
            TickResult::Expired
        } else {
            self.remaining -= 1;
            TickResult::Counting(self.remaining)
        }
    }

    /// Cancel whatever is running and start again if allowed.
    fn restart(&mut self) -> Option<TimerHandle> {
        self.generation += 1;

        match self.duration {
            Some(seconds) if !self.paused && !self.ended => {
                self.running = true;
                self.remaining = seconds;
            }
            _ => {
                self.running = false;
                self.remaining = 0;
            }
        }

        self.handle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown(seconds: u32) -> Countdown {
        Countdown::new(SessionId::new(1), TimerSetting::try_from(seconds).unwrap())
    }

    #[test]
    fn test_disabled_never_runs() {
        let mut timer = countdown(0);
        assert!(timer.on_session_start().is_none());
        assert!(timer.on_candidate_advance().is_none());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_counts_down_and_expires() {
        let mut timer = countdown(3);
        let handle = timer.on_session_start().unwrap();
        assert_eq!(timer.remaining(), 3);

        assert_eq!(timer.tick(handle), TickResult::Counting(2));
        assert_eq!(timer.tick(handle), TickResult::Counting(1));
        assert_eq!(timer.tick(handle), TickResult::Expired);
        assert_eq!(timer.remaining(), 3);
    }

    #[test]
    fn test_restart_invalidates_old_handle() {
        let mut timer = countdown(5);
        let first = timer.on_session_start().unwrap();
        timer.tick(first);

        let second = timer.on_candidate_advance().unwrap();
        assert_ne!(first, second);
        assert_eq!(timer.remaining(), 5);
        assert_eq!(timer.tick(first), TickResult::Ignored);
        assert_eq!(timer.tick(second), TickResult::Counting(4));
    }

    #[test]
    fn test_pause_and_resume() {
        let mut timer = countdown(4);
        let before = timer.on_session_start().unwrap();

        timer.on_pause();
        assert!(timer.is_paused());
        assert!(timer.handle().is_none());
        assert_eq!(timer.tick(before), TickResult::Ignored);
        // Advancing while paused does not start anything
        assert!(timer.on_candidate_advance().is_none());

        let after = timer.on_resume().unwrap();
        assert_eq!(timer.remaining(), 4);
        assert_eq!(timer.tick(after), TickResult::Counting(3));
    }

    #[test]
    fn test_session_end_is_final() {
        let mut timer = countdown(7);
        let handle = timer.on_session_start().unwrap();

        timer.on_session_end();
        assert!(!timer.is_running());
        assert_eq!(timer.tick(handle), TickResult::Ignored);
        assert!(timer.on_candidate_advance().is_none());
        assert!(timer.on_resume().is_none());
    }

    #[test]
    fn test_handle_from_other_session_ignored() {
        let mut timer = countdown(3);
        let handle = timer.on_session_start().unwrap();
        let foreign = TimerHandle {
            session: SessionId::new(2),
            generation: handle.generation,
        };
        assert_eq!(timer.tick(foreign), TickResult::Ignored);
    }
}
