//! Player records - static roster data.
//!
//! A `Player` never changes during a session. The grid generator derives
//! labels from players and the match rules compare players to labels.

use serde::{Deserialize, Serialize};

/// Roster identifier, doubling as a fame ranking.
///
/// Lower ids are easier (better known) players, which is why the
/// difficulty filter is a simple `id <= max` threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// One cricketer in the roster.
///
/// `ipl_teams` and `trophies` are ordered; only the first entry of each
/// takes part in combination labels such as `"Mumbai Indians + India"`.
///
/// ## Example
///
/// ```
/// use cricket_bingo::roster::{Player, PlayerId};
///
/// let rohit = Player::new(PlayerId::new(1), "Rohit Sharma", "India")
///     .with_team("Mumbai Indians")
///     .with_team("Deccan Chargers")
///     .with_trophy("T20 World Cup");
///
/// assert_eq!(rohit.first_team(), Some("Mumbai Indians"));
/// assert_eq!(rohit.first_trophy(), Some("T20 World Cup"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub nation: String,
    pub ipl_teams: Vec<String>,
    #[serde(default)]
    pub trophies: Vec<String>,
}

impl Player {
    /// Create a player with no teams or trophies yet.
    pub fn new(id: PlayerId, name: impl Into<String>, nation: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            nation: nation.into(),
            ipl_teams: Vec::new(),
            trophies: Vec::new(),
        }
    }

    /// Append an IPL team (builder pattern).
    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.ipl_teams.push(team.into());
        self
    }

    /// Append a trophy (builder pattern).
    #[must_use]
    pub fn with_trophy(mut self, trophy: impl Into<String>) -> Self {
        self.trophies.push(trophy.into());
        self
    }

    /// The player's first IPL team.
    #[must_use]
    pub fn first_team(&self) -> Option<&str> {
        self.ipl_teams.first().map(String::as_str)
    }

    /// The player's first trophy, if they won any.
    #[must_use]
    pub fn first_trophy(&self) -> Option<&str> {
        self.trophies.first().map(String::as_str)
    }
}
