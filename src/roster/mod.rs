//! Player roster: records and the id-filtered pool.
//!
//! The roster is loaded once and never mutated. Sessions only see the
//! slice of it that passes the `max_player_id` filter.

pub mod player;
pub mod repository;

pub use player::{Player, PlayerId};
pub use repository::Roster;
