//! The match predicate between a candidate and a cell label.
//!
//! A label matches a player when it is:
//! - the player's nation
//! - any of the player's IPL teams
//! - any of the player's trophies
//! - text containing one of the player's combination labels, built from
//!   the first team and first trophy
//!
//! Players without trophies can never match trophy labels or the
//! combinations that need a trophy.

use smallvec::SmallVec;

use crate::roster::Player;

/// Separator between the two halves of a combination label.
pub const COMBINATION_SEPARATOR: &str = " + ";

/// Join two attributes into a combination label.
#[must_use]
pub fn combine(first: &str, second: &str) -> String {
    format!("{first}{COMBINATION_SEPARATOR}{second}")
}

/// The two-attribute labels a player satisfies.
///
/// At most three: `team + nation`, `team + trophy`, `nation + trophy`.
#[must_use]
pub fn combination_labels(player: &Player) -> SmallVec<[String; 3]> {
    let mut labels = SmallVec::new();
    let team = player.first_team();
    let trophy = player.first_trophy();

    if let Some(team) = team {
        labels.push(combine(team, &player.nation));
        if let Some(trophy) = trophy {
            labels.push(combine(team, trophy));
        }
    }
    if let Some(trophy) = trophy {
        labels.push(combine(&player.nation, trophy));
    }

    labels
}

/// Does `player` satisfy the cell labelled `label`?
///
/// Pure; cell selection and the wildcard both go through this.
///
/// ```
/// use cricket_bingo::roster::{Player, PlayerId};
/// use cricket_bingo::rules::matches;
///
/// let kohli = Player::new(PlayerId::new(1), "Virat Kohli", "India")
///     .with_team("Royal Challengers Bangalore")
///     .with_trophy("ODI World Cup");
///
/// assert!(matches(&kohli, "India"));
/// assert!(matches(&kohli, "Royal Challengers Bangalore + ODI World Cup"));
/// assert!(!matches(&kohli, "Australia"));
/// ```
#[must_use]
pub fn matches(player: &Player, label: &str) -> bool {
    label == player.nation
        || player.ipl_teams.iter().any(|team| team == label)
        || player.trophies.iter().any(|trophy| trophy == label)
        || combination_labels(player)
            .iter()
            .any(|combo| label.contains(combo.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::PlayerId;

    fn dhoni() -> Player {
        Player::new(PlayerId::new(3), "MS Dhoni", "India")
            .with_team("Chennai Super Kings")
            .with_team("Rising Pune Supergiant")
            .with_trophy("ODI World Cup")
            .with_trophy("T20 World Cup")
    }

    fn without_trophies() -> Player {
        Player::new(PlayerId::new(80), "Shimron Hetmyer", "West Indies")
            .with_team("Delhi Capitals")
            .with_team("Rajasthan Royals")
    }

    #[test]
    fn test_single_attributes() {
        let p = dhoni();
        assert!(matches(&p, "India"));
        assert!(matches(&p, "Chennai Super Kings"));
        // Any team in the list counts, not just the first
        assert!(matches(&p, "Rising Pune Supergiant"));
        assert!(matches(&p, "T20 World Cup"));
        assert!(!matches(&p, "Mumbai Indians"));
    }

    #[test]
    fn test_combinations_use_first_entries() {
        let p = dhoni();
        assert!(matches(&p, "Chennai Super Kings + India"));
        assert!(matches(&p, "Chennai Super Kings + ODI World Cup"));
        assert!(matches(&p, "India + ODI World Cup"));

        assert!(!matches(&p, "Rising Pune Supergiant + India"));
        assert!(!matches(&p, "India + T20 World Cup"));
    }

    #[test]
    fn test_combination_is_textual_containment() {
        let p = dhoni();
        assert!(matches(&p, "Legend: Chennai Super Kings + India"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let p = dhoni();
        assert!(!matches(&p, "india"));
        assert!(!matches(&p, "chennai super kings"));
    }

    #[test]
    fn test_no_trophies_never_matches_trophy_labels() {
        let p = without_trophies();
        assert!(matches(&p, "Delhi Capitals + West Indies"));
        assert!(!matches(&p, "Delhi Capitals + T20 World Cup"));
        assert!(!matches(&p, "West Indies + T20 World Cup"));
        assert!(!matches(&p, "T20 World Cup"));
    }

    #[test]
    fn test_combination_labels() {
        assert_eq!(combination_labels(&dhoni()).len(), 3);

        let labels = combination_labels(&without_trophies());
        assert_eq!(labels.to_vec(), vec!["Delhi Capitals + West Indies".to_string()]);
    }

    #[test]
    fn test_combine() {
        assert_eq!(combine("India", "ODI World Cup"), "India + ODI World Cup");
    }
}
