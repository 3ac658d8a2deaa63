//! Team logo lookup.
//!
//! Labels that exactly name a known franchise are drawn as its logo.
//! This only affects display; matching always uses the label text.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// Known franchise names and their image files.
pub const TEAM_IMAGES: [(&str, &str); 16] = [
    ("Mumbai Indians", "mi.png"),
    ("Chennai Super Kings", "csk.png"),
    ("Royal Challengers Bangalore", "rcb.png"),
    ("Kolkata Knight Riders", "kkr.png"),
    ("Delhi Capitals", "dc.png"),
    ("Punjab Kings", "pun.png"),
    ("Rajasthan Royals", "rr.png"),
    ("Sunrisers Hyderabad", "srh.png"),
    ("Gujarat Titans", "gt.png"),
    ("Lucknow Super Giants", "lsg.png"),
    ("Deccan Chargers", "deccan.png"),
    ("Kochi Tuskers Kerala", "kochi.jpeg"),
    ("Pune Warriors India", "pune.jpeg"),
    ("Rising Pune Supergiant", "pune.jpeg"),
    ("Gujarat Lions", "gt.png"),
    ("Delhi Daredevils", "dd.png"),
];

fn table() -> &'static FxHashMap<&'static str, &'static str> {
    static TABLE: OnceLock<FxHashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| TEAM_IMAGES.iter().copied().collect())
}

/// Image file for a label, if the label is exactly a known team name.
#[must_use]
pub fn team_image(label: &str) -> Option<&'static str> {
    table().get(label).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_teams() {
        assert_eq!(team_image("Mumbai Indians"), Some("mi.png"));
        assert_eq!(team_image("Kochi Tuskers Kerala"), Some("kochi.jpeg"));
        assert_eq!(team_image("Gujarat Lions"), Some("gt.png"));
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(team_image("mumbai indians"), None);
        assert_eq!(team_image("Mumbai Indians + India"), None);
        assert_eq!(team_image("India"), None);
    }
}
