//! Roster storage and the difficulty filter.
//!
//! The `Roster` stores every known player and hands out read-only,
//! id-filtered views to the grid generator and the candidate shuffle.

use std::io::Read;

use rustc_hash::FxHashSet;

use super::player::{Player, PlayerId};
use crate::error::{BingoError, Result};

/// Validated, immutable collection of players.
///
/// ## Example
///
/// ```
/// use cricket_bingo::roster::{Player, PlayerId, Roster};
///
/// let roster = Roster::new(vec![
///     Player::new(PlayerId::new(1), "Virat Kohli", "India")
///         .with_team("Royal Challengers Bangalore"),
///     Player::new(PlayerId::new(40), "Kane Williamson", "New Zealand")
///         .with_team("Sunrisers Hyderabad"),
/// ])
/// .unwrap();
///
/// assert_eq!(roster.filter_by_max_id(10).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster, rejecting records that break the data model.
    ///
    /// Every player needs at least one IPL team and ids must be unique.
    pub fn new(players: Vec<Player>) -> Result<Self> {
        let mut seen = FxHashSet::default();

        for player in &players {
            if player.ipl_teams.is_empty() {
                return Err(BingoError::InvalidPlayer {
                    id: player.id,
                    reason: "no IPL team",
                });
            }
            if player.name.is_empty() {
                return Err(BingoError::InvalidPlayer {
                    id: player.id,
                    reason: "empty name",
                });
            }
            if !seen.insert(player.id) {
                return Err(BingoError::DuplicatePlayer(player.id));
            }
        }

        Ok(Self { players })
    }

    /// Parse a JSON array of player records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let players: Vec<Player> = serde_json::from_str(json)?;
        Self::new(players)
    }

    /// Parse a JSON array of player records from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let players: Vec<Player> = serde_json::from_reader(reader)?;
        Self::new(players)
    }

    /// Players with `id <= max_player_id`, in roster order.
    #[must_use]
    pub fn filter_by_max_id(&self, max_player_id: u32) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.id.raw() <= max_player_id)
            .collect()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}
