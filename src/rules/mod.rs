//! Match rules between players and grid labels.
//!
//! The session never interprets labels itself; every claim, whether from a
//! single click or the wildcard, asks `matches`.

pub mod matcher;

pub use matcher::{combination_labels, combine, matches, COMBINATION_SEPARATOR};
