//! Core engine types: configuration and deterministic randomness.
//!
//! Everything that varies between sessions enters through `GameConfig`,
//! and every random draw goes through `GameRng`.

pub mod config;
pub mod rng;

pub use config::{Difficulty, GameConfig, GridSize, TimerSetting};
pub use rng::GameRng;
