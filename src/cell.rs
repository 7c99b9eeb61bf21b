use std::fmt;

/// State of a single cell.
///
/// Kept as a two-variant enum rather than a bare `bool` so a board reads
/// as what it is: a grid of cells, not a bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn is_dead(self) -> bool {
        self == CellState::Dead
    }

    /// Flipped state.
    pub fn toggled(self) -> CellState {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellState::Alive => write!(f, "1"),
            CellState::Dead => write!(f, "0"),
        }
    }
}
