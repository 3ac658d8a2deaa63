//! Game configuration types.
//!
//! The player picks these before pressing start:
//! - `GridSize`: 3x3 or 4x4
//! - `Difficulty`: which attributes may appear as cell labels
//! - `TimerSetting`: per-candidate countdown, or none
//! - `max_player_id`: roster filter (lower ids are more famous players)
//!
//! `GameConfig` combines them with the seed and the generator's attempt
//! budget.

use serde::{Deserialize, Serialize};

use crate::error::BingoError;

/// Side length of the bingo grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum GridSize {
    #[default]
    Three,
    Four,
}

impl GridSize {
    /// Number of cells per side.
    #[must_use]
    pub const fn side(self) -> usize {
        match self {
            GridSize::Three => 3,
            GridSize::Four => 4,
        }
    }

    /// Total number of cells, which is also the winning score.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Maximum number of candidates dealt for one session.
    #[must_use]
    pub const fn candidate_cap(self) -> usize {
        match self {
            GridSize::Three => 25,
            GridSize::Four => 50,
        }
    }
}

impl TryFrom<u32> for GridSize {
    type Error = BingoError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(GridSize::Three),
            4 => Ok(GridSize::Four),
            other => Err(BingoError::InvalidGridSize(other)),
        }
    }
}

impl From<GridSize> for u32 {
    fn from(size: GridSize) -> Self {
        size.side() as u32
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

/// Which attribute kinds populate the grid labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// IPL teams only.
    #[default]
    Easy,
    /// Nations and IPL teams.
    Medium,
    /// Nations, teams, trophies and two-attribute combinations.
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Per-candidate countdown setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimerSetting {
    #[default]
    Disabled,
    Seconds(u32),
}

impl TimerSetting {
    /// Accepted values in seconds; 0 disables the timer.
    pub const OPTIONS: [u32; 6] = [0, 3, 4, 5, 7, 10];

    /// Countdown length in seconds, `None` when disabled.
    #[must_use]
    pub const fn seconds(self) -> Option<u32> {
        match self {
            TimerSetting::Disabled => None,
            TimerSetting::Seconds(s) => Some(s),
        }
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, TimerSetting::Seconds(_))
    }
}

impl TryFrom<u32> for TimerSetting {
    type Error = BingoError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TimerSetting::Disabled),
            s if Self::OPTIONS.contains(&s) => Ok(TimerSetting::Seconds(s)),
            other => Err(BingoError::InvalidTimer(other)),
        }
    }
}

impl From<TimerSetting> for u32 {
    fn from(timer: TimerSetting) -> Self {
        timer.seconds().unwrap_or(0)
    }
}

/// Complete configuration for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid side length.
    pub grid_size: GridSize,

    /// Label policy for grid generation.
    pub difficulty: Difficulty,

    /// Only players with `id <= max_player_id` take part.
    pub max_player_id: u32,

    /// Countdown per candidate.
    pub timer: TimerSetting,

    /// Samples the grid generator may draw before giving up.
    pub generation_attempt_budget: usize,

    /// Seed for grid sampling and candidate shuffling.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::Three,
            difficulty: Difficulty::Easy,
            max_player_id: 100,
            timer: TimerSetting::Disabled,
            generation_attempt_budget: 10_000,
            seed: 42,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: GridSize) -> Self {
        self.grid_size = grid_size;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_max_player_id(mut self, max_player_id: u32) -> Self {
        self.max_player_id = max_player_id;
        self
    }

    #[must_use]
    pub fn with_timer(mut self, timer: TimerSetting) -> Self {
        self.timer = timer;
        self
    }

    #[must_use]
    pub fn with_attempt_budget(mut self, budget: usize) -> Self {
        self.generation_attempt_budget = budget;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build a config from the raw values a settings form would submit.
    pub fn from_raw(
        grid_size: u32,
        difficulty: Difficulty,
        max_player_id: u32,
        timer_seconds: u32,
    ) -> Result<Self, BingoError> {
        Ok(Self::default()
            .with_grid_size(GridSize::try_from(grid_size)?)
            .with_difficulty(difficulty)
            .with_max_player_id(max_player_id)
            .with_timer(TimerSetting::try_from(timer_seconds)?))
    }
}
