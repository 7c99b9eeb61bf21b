use crate::{
    rules, Board, CellState, Coord, EngineResult, NeighbourCache, SharedNeighbourCache,
    DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use log::debug;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One generation of the automaton: a board plus the neighbour cache
/// shared along its derivation chain.
///
/// `next` returns a fresh snapshot; the board is never rewritten while a
/// generation is being evaluated. The cache handle is cloned (not the
/// cache) into every derived generation, while a top-level construction
/// always starts a new, empty cache.
pub struct Simulation {
    board: Board,
    cache: SharedNeighbourCache,
}

impl Simulation {
    /// Simulation over a random `DEFAULT_WIDTH` x `DEFAULT_HEIGHT` board.
    pub fn new() -> Self {
        let board = Board::random(DEFAULT_WIDTH, DEFAULT_HEIGHT)
            .expect("default dimensions are valid");
        Self::from_board(board)
    }

    /// Simulation over an explicit board, with a fresh cache.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            cache: Rc::new(RefCell::new(NeighbourCache::new())),
        }
    }

    /// Simulation over explicit rows, e.g. a literal pattern in a test.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> EngineResult<Self> {
        Ok(Self::from_board(Board::from_rows(rows)?))
    }

    /// The generation that naturally follows this one.
    ///
    /// Every cell is judged against this generation's board, so the
    /// outcome cannot depend on evaluation order. The returned simulation
    /// shares this one's neighbour cache.
    pub fn next(&self) -> Simulation {
        let rows = self
            .board
            .rows()
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(column, &state)| {
                        let count = self.living_neighbour_count(row, column);
                        if state.is_alive() && rules::should_die(count) {
                            CellState::Dead
                        } else if state.is_dead() && rules::should_restore(count) {
                            CellState::Alive
                        } else {
                            state
                        }
                    })
                    .collect()
            })
            .collect();
        debug!(
            "advanced {}x{} board to next generation",
            self.width(),
            self.height()
        );
        Simulation {
            board: Board::from_rows_unchecked(rows),
            cache: Rc::clone(&self.cache),
        }
    }

    /// Whether the cell at `(row, column)` is alive.
    pub fn is_alive(&self, row: usize, column: usize) -> EngineResult<bool> {
        Ok(self.board.get(row, column)?.is_alive())
    }

    /// Raw state of the cell at `(row, column)`.
    pub fn get_cell(&self, row: usize, column: usize) -> EngineResult<CellState> {
        self.board.get(row, column)
    }

    pub fn kill_cell(&mut self, row: usize, column: usize) -> EngineResult<()> {
        self.board.set(row, column, CellState::Dead)
    }

    pub fn revive_cell(&mut self, row: usize, column: usize) -> EngineResult<()> {
        self.board.set(row, column, CellState::Alive)
    }

    /// Kills a living cell or revives a dead one.
    ///
    /// Returns the state the cell ends up in: `true` iff it is now alive.
    pub fn toggle_cell(&mut self, row: usize, column: usize) -> EngineResult<bool> {
        let state = self.board.get(row, column)?.toggled();
        self.board.set(row, column, state)?;
        Ok(state.is_alive())
    }

    /// Legal Moore neighbours of `(row, column)`, cached after the first
    /// lookup. Empty for an out-of-bounds key.
    pub fn neighbours(&self, row: usize, column: usize) -> Vec<Coord> {
        self.cache
            .borrow_mut()
            .neighbours(row, column, self.width(), self.height())
    }

    /// Living neighbours of `(row, column)` in the current board.
    ///
    /// The coordinate list comes from the cache; liveness is read from the
    /// current board on every call.
    pub fn living_neighbour_count(&self, row: usize, column: usize) -> usize {
        self.neighbours(row, column)
            .iter()
            .filter(|&&(r, c)| self.board.get(r, c).is_ok_and(CellState::is_alive))
            .count()
    }

    pub fn is_legal_coordinate(&self, row: usize, column: usize) -> bool {
        self.board.is_legal_coordinate(row, column)
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Handle to the cache shared along this simulation's derivation chain.
    pub fn neighbours_cache(&self) -> &SharedNeighbourCache {
        &self.cache
    }

    /// Dumps the board to stdout, followed by a blank line.
    pub fn print(&self) {
        println!("{self}");
        println!();
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.board.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
