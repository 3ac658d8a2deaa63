//! Grid content generation.
//!
//! Labels are derived from players sampled uniformly (with replacement)
//! from the filtered pool. Each difficulty level allows different label
//! forms; duplicates are discarded and sampling continues until the grid
//! is full or the attempt budget runs out.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::cell::GridCell;
use crate::core::{Difficulty, GameConfig, GameRng, GridSize};
use crate::error::{BingoError, Result};
use crate::roster::Player;
use crate::rules::combine;

/// The six label shapes a hard grid draws from, uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelForm {
    Nation,
    Team,
    /// First trophy, or the nation when the player has none.
    Trophy,
    TeamNation,
    /// `team + trophy`, or the team alone when the player has no trophy.
    TeamTrophy,
    /// `nation + trophy`, or the nation alone when the player has no trophy.
    NationTrophy,
}

impl LabelForm {
    pub const ALL: [LabelForm; 6] = [
        LabelForm::Nation,
        LabelForm::Team,
        LabelForm::Trophy,
        LabelForm::TeamNation,
        LabelForm::TeamTrophy,
        LabelForm::NationTrophy,
    ];

    /// Render this form for `player`.
    ///
    /// `None` only when the form needs a team and the player has none.
    #[must_use]
    pub fn label_for(self, player: &Player) -> Option<String> {
        let nation = player.nation.as_str();
        let trophy = player.first_trophy();

        match self {
            LabelForm::Nation => Some(nation.to_string()),
            LabelForm::Team => player.first_team().map(str::to_string),
            LabelForm::Trophy => Some(trophy.unwrap_or(nation).to_string()),
            LabelForm::TeamNation => player.first_team().map(|team| combine(team, nation)),
            LabelForm::TeamTrophy => player.first_team().map(|team| match trophy {
                Some(trophy) => combine(team, trophy),
                None => team.to_string(),
            }),
            LabelForm::NationTrophy => Some(match trophy {
                Some(trophy) => combine(nation, trophy),
                None => nation.to_string(),
            }),
        }
    }
}

/// Pick a label form for `difficulty` and render it for `player`.
pub fn derive_label(player: &Player, difficulty: Difficulty, rng: &mut GameRng) -> Option<String> {
    let form = match difficulty {
        Difficulty::Easy => LabelForm::Team,
        Difficulty::Medium => {
            if rng.gen_bool(0.5) {
                LabelForm::Nation
            } else {
                LabelForm::Team
            }
        }
        Difficulty::Hard => *rng.choose(&LabelForm::ALL)?,
    };

    form.label_for(player)
}

/// Builds the cells for a new session.
#[derive(Clone, Debug)]
pub struct GridGenerator {
    size: GridSize,
    difficulty: Difficulty,
    attempt_budget: usize,
}

impl GridGenerator {
    /// Default number of samples before generation gives up.
    pub const DEFAULT_ATTEMPT_BUDGET: usize = 10_000;

    #[must_use]
    pub fn new(size: GridSize, difficulty: Difficulty) -> Self {
        Self {
            size,
            difficulty,
            attempt_budget: Self::DEFAULT_ATTEMPT_BUDGET,
        }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.grid_size, config.difficulty)
            .with_attempt_budget(config.generation_attempt_budget)
    }

    #[must_use]
    pub fn with_attempt_budget(mut self, budget: usize) -> Self {
        self.attempt_budget = budget;
        self
    }

    /// Produce exactly `size²` cells with pairwise-distinct labels.
    ///
    /// Fails with `InsufficientPool` when the pool is empty or the budget
    /// is spent before enough distinct labels turn up.
    pub fn generate(&self, pool: &[&Player], rng: &mut GameRng) -> Result<Vec<GridCell>> {
        let required = self.size.cell_count();
        let mut used: FxHashSet<String> = FxHashSet::default();
        let mut cells = Vec::with_capacity(required);
        let mut attempts = 0;

        if pool.is_empty() {
            return Err(BingoError::InsufficientPool {
                distinct: 0,
                required,
                attempts,
            });
        }

        while cells.len() < required {
            if attempts >= self.attempt_budget {
                debug!(distinct = cells.len(), required, attempts, "grid generation budget exhausted");
                return Err(BingoError::InsufficientPool {
                    distinct: cells.len(),
                    required,
                    attempts,
                });
            }
            attempts += 1;

            let Some(player) = rng.choose(pool) else {
                continue;
            };
            let Some(label) = derive_label(player, self.difficulty, rng) else {
                continue;
            };

            if used.contains(&label) {
                trace!(%label, "duplicate label rejected");
                continue;
            }

            used.insert(label.clone());
            cells.push(GridCell::new(label));
        }

        debug!(cells = cells.len(), attempts, difficulty = %self.difficulty, "grid generated");
        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellDisplay;
    use crate::roster::PlayerId;

    fn player(id: u32, nation: &str, team: &str, trophy: Option<&str>) -> Player {
        let p = Player::new(PlayerId::new(id), format!("Player {}", id), nation).with_team(team);
        match trophy {
            Some(t) => p.with_trophy(t),
            None => p,
        }
    }

    fn team_pool() -> Vec<Player> {
        [
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
        ]
        .iter()
        .enumerate()
        .map(|(i, team)| player(i as u32 + 1, "India", team, None))
        .collect()
    }

    #[test]
    fn test_label_forms_with_trophy() {
        let p = player(1, "India", "Mumbai Indians", Some("T20 World Cup"));

        assert_eq!(LabelForm::Nation.label_for(&p).unwrap(), "India");
        assert_eq!(LabelForm::Team.label_for(&p).unwrap(), "Mumbai Indians");
        assert_eq!(LabelForm::Trophy.label_for(&p).unwrap(), "T20 World Cup");
        assert_eq!(LabelForm::TeamNation.label_for(&p).unwrap(), "Mumbai Indians + India");
        assert_eq!(LabelForm::TeamTrophy.label_for(&p).unwrap(), "Mumbai Indians + T20 World Cup");
        assert_eq!(LabelForm::NationTrophy.label_for(&p).unwrap(), "India + T20 World Cup");
    }

    #[test]
    fn test_label_forms_fall_back_without_trophy() {
        let p = player(2, "England", "Punjab Kings", None);

        assert_eq!(LabelForm::Trophy.label_for(&p).unwrap(), "England");
        assert_eq!(LabelForm::TeamTrophy.label_for(&p).unwrap(), "Punjab Kings");
        assert_eq!(LabelForm::NationTrophy.label_for(&p).unwrap(), "England");
    }

    #[test]
    fn test_easy_uses_first_team() {
        let p = player(3, "India", "Delhi Capitals", None).with_team("Mumbai Indians");
        let mut rng = GameRng::new(1);
        for _ in 0..20 {
            assert_eq!(derive_label(&p, Difficulty::Easy, &mut rng).unwrap(), "Delhi Capitals");
        }
    }

    #[test]
    fn test_medium_uses_nation_or_team() {
        let p = player(4, "South Africa", "Gujarat Titans", Some("ODI World Cup"));
        let mut rng = GameRng::new(2);
        let labels: FxHashSet<_> = (0..50)
            .filter_map(|_| derive_label(&p, Difficulty::Medium, &mut rng))
            .collect();

        let expected: FxHashSet<_> = ["South Africa".to_string(), "Gujarat Titans".to_string()]
            .into_iter()
            .collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_generate_easy_grid() {
        let players = team_pool();
        let pool: Vec<&Player> = players.iter().collect();
        let mut rng = GameRng::new(42);

        let cells = GridGenerator::new(GridSize::Three, Difficulty::Easy)
            .generate(&pool, &mut rng)
            .unwrap();

        assert_eq!(cells.len(), 9);
        let labels: FxHashSet<_> = cells.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), 9);
        assert!(cells.iter().all(|c| matches!(c.display(), CellDisplay::Image { .. })));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let players = team_pool();
        let pool: Vec<&Player> = players.iter().collect();
        let generator = GridGenerator::new(GridSize::Three, Difficulty::Easy);

        let a = generator.generate(&pool, &mut GameRng::new(9)).unwrap();
        let b = generator.generate(&pool, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_pool_fails_immediately() {
        let result = GridGenerator::new(GridSize::Three, Difficulty::Easy)
            .generate(&[], &mut GameRng::new(1));

        assert!(matches!(
            result,
            Err(BingoError::InsufficientPool { distinct: 0, required: 9, attempts: 0 })
        ));
    }

    #[test]
    fn test_sparse_pool_hits_budget() {
        // Only 10 distinct teams exist, a 4x4 grid needs 16
        let players = team_pool();
        let pool: Vec<&Player> = players.iter().collect();

        let result = GridGenerator::new(GridSize::Four, Difficulty::Easy)
            .with_attempt_budget(500)
            .generate(&pool, &mut GameRng::new(3));

        match result {
            Err(BingoError::InsufficientPool { distinct, required, attempts }) => {
                assert_eq!(distinct, 10);
                assert_eq!(required, 16);
                assert_eq!(attempts, 500);
            }
            other => panic!("expected InsufficientPool, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config() {
        let config = GameConfig::default()
            .with_grid_size(GridSize::Four)
            .with_difficulty(Difficulty::Hard)
            .with_attempt_budget(77);
        let generator = GridGenerator::from_config(&config);

        assert_eq!(generator.size, GridSize::Four);
        assert_eq!(generator.difficulty, Difficulty::Hard);
        assert_eq!(generator.attempt_budget, 77);
    }
}
