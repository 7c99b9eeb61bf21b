#![warn(clippy::all, clippy::cargo)]

mod board;
mod cache;
mod cell;
mod error;
mod rules;
mod simulation;

pub use board::Board;
pub use cache::{NeighbourCache, SharedNeighbourCache};
pub use cell::CellState;
pub use error::{EngineError, EngineResult};
pub use rules::{is_crowded, is_lonely, should_die, should_restore};
pub use simulation::Simulation;

/// A `(row, column)` cell position.
pub type Coord = (usize, usize);

pub const DEFAULT_WIDTH: usize = 100;
pub const DEFAULT_HEIGHT: usize = 100;
