//! Game facade used by front ends.

pub mod bingo;

pub use bingo::BingoGame;
