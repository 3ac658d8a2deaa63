//! Cricket Bingo front door.
//!
//! `BingoGame` holds the roster and at most one live session. Starting a
//! new game replaces the session wholesale; a failed start leaves the old
//! one untouched. Every action returns the updated snapshot, or `None`
//! when no game has been started yet.

use tracing::warn;

use crate::core::GameConfig;
use crate::error::Result;
use crate::events::GameEvent;
use crate::roster::Roster;
use crate::session::{FlashToken, GameSession, SessionSnapshot, TimerHandle};

/// The game as a front end drives it.
#[derive(Clone, Debug)]
pub struct BingoGame {
    roster: Roster,
    session: Option<GameSession>,
}

impl BingoGame {
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            session: None,
        }
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The live session, if a game has been started.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Start (or restart) a game.
    ///
    /// On failure the previous session, if any, keeps running.
    pub fn start_game(&mut self, config: &GameConfig) -> Result<SessionSnapshot> {
        let next = GameSession::start(config, &self.roster).inspect_err(|err| {
            warn!(notice = %err.user_notice(), "game not started");
        })?;

        let snapshot = next.snapshot();
        if let Some(mut previous) = self.session.replace(next) {
            previous.end();
        }
        Ok(snapshot)
    }

    pub fn select_cell(&mut self, index: usize) -> Option<SessionSnapshot> {
        self.with_session(|s| {
            s.select_cell(index);
        })
    }

    pub fn skip(&mut self) -> Option<SessionSnapshot> {
        self.with_session(|s| {
            s.skip();
        })
    }

    pub fn use_wildcard(&mut self) -> Option<SessionSnapshot> {
        self.with_session(|s| {
            s.use_wildcard();
        })
    }

    /// Deliver a countdown tick. Ticks for replaced sessions are dropped.
    pub fn tick(&mut self, handle: TimerHandle) -> Option<SessionSnapshot> {
        self.with_session(|s| {
            s.tick(handle);
        })
    }

    pub fn expire_flash(&mut self, token: FlashToken) -> Option<SessionSnapshot> {
        self.with_session(|s| {
            s.expire_flash(token);
        })
    }

    pub fn pause(&mut self) -> Option<SessionSnapshot> {
        self.with_session(GameSession::pause)
    }

    pub fn resume(&mut self) -> Option<SessionSnapshot> {
        self.with_session(GameSession::resume)
    }

    /// Handle the front end should schedule ticks with.
    #[must_use]
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.session.as_ref().and_then(GameSession::timer_handle)
    }

    /// Events queued by the live session since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.session
            .as_mut()
            .map(GameSession::drain_events)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.session.as_ref().map(GameSession::snapshot)
    }

    fn with_session(&mut self, action: impl FnOnce(&mut GameSession)) -> Option<SessionSnapshot> {
        let session = self.session.as_mut()?;
        action(session);
        Some(session.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridSize, TimerSetting};
    use crate::error::BingoError;
    use crate::roster::{Player, PlayerId};

    const TEAMS: [&str; 10] = [
        "Mumbai Indians",
        "Chennai Super Kings",
        "Royal Challengers Bangalore",
        "Kolkata Knight Riders",
        "Delhi Capitals",
        "Punjab Kings",
        "Rajasthan Royals",
        "Sunrisers Hyderabad",
        "Gujarat Titans",
        "Lucknow Super Giants",
    ];

    fn roster() -> Roster {
        let players = (1..=40u32)
            .map(|id| {
                let team = TEAMS[(id as usize - 1) % TEAMS.len()];
                Player::new(PlayerId::new(id), format!("Player {}", id), "India").with_team(team)
            })
            .collect();
        Roster::new(players).unwrap()
    }

    #[test]
    fn test_actions_before_start() {
        let mut game = BingoGame::new(roster());
        assert!(game.select_cell(0).is_none());
        assert!(game.skip().is_none());
        assert!(game.use_wildcard().is_none());
        assert!(game.snapshot().is_none());
        assert!(game.timer_handle().is_none());
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_start_game() {
        let mut game = BingoGame::new(roster());
        let snap = game.start_game(&GameConfig::default().with_max_player_id(9999)).unwrap();

        assert_eq!(snap.cells.len(), 9);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.candidate_index, 0);
        assert_eq!(snap.players_remaining, 25);
        assert!(game.session().is_some());
    }

    #[test]
    fn test_failed_start_keeps_previous_session() {
        let mut game = BingoGame::new(roster());
        let first = game.start_game(&GameConfig::default()).unwrap();
        game.skip();

        let err = game
            .start_game(&GameConfig::default().with_max_player_id(0))
            .unwrap_err();
        assert!(matches!(err, BingoError::EmptyPool { max_player_id: 0 }));

        let current = game.snapshot().unwrap();
        assert_eq!(current.session, first.session);
        assert_eq!(current.candidate_index, 1);
    }

    #[test]
    fn test_sparse_pool_is_rejected() {
        let mut game = BingoGame::new(roster());
        // Ten distinct teams cannot fill sixteen cells
        let config = GameConfig::default()
            .with_grid_size(GridSize::Four)
            .with_attempt_budget(1_000);

        let err = game.start_game(&config).unwrap_err();
        assert!(err.is_insufficient_pool());
        assert!(game.session().is_none());
    }

    #[test]
    fn test_restart_drops_old_timer() {
        let mut game = BingoGame::new(roster());
        let config = GameConfig::default().with_timer(TimerSetting::Seconds(3));

        game.start_game(&config).unwrap();
        let old = game.timer_handle().unwrap();

        game.start_game(&config.clone().with_seed(7)).unwrap();
        let snap = game.tick(old).unwrap();
        assert_eq!(snap.countdown, Some(3));
        assert_eq!(snap.candidate_index, 0);

        let new = game.timer_handle().unwrap();
        assert_ne!(old, new);
        assert_eq!(game.tick(new).unwrap().countdown, Some(2));
    }

    #[test]
    fn test_pause_through_facade() {
        let mut game = BingoGame::new(roster());
        game.start_game(&GameConfig::default().with_timer(TimerSetting::Seconds(5)))
            .unwrap();

        assert_eq!(game.pause().unwrap().countdown, Some(0));
        assert!(game.timer_handle().is_none());
        assert_eq!(game.resume().unwrap().countdown, Some(5));
    }
}
