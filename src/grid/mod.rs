//! The bingo grid: cells, team logos and content generation.

pub mod assets;
pub mod cell;
pub mod generator;

pub use assets::{team_image, TEAM_IMAGES};
pub use cell::{CellColor, CellDisplay, CellState, GridCell};
pub use generator::{derive_label, GridGenerator, LabelForm};
