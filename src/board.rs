use crate::{CellState, EngineError, EngineResult};
use rand::Rng;

const FILL_RATE: f64 = 0.5;

/// A rectangular grid of cells.
///
/// Rows are independently owned: mutating one row can never be observed
/// through another. Dimensions are fixed for the board's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<CellState>>,
}

impl Board {
    /// All-dead board of the given dimensions.
    pub fn dead(width: usize, height: usize) -> EngineResult<Self> {
        Self::check_dimensions(width, height)?;
        Ok(Self {
            rows: (0..height).map(|_| vec![CellState::Dead; width]).collect(),
        })
    }

    /// Board with every cell independently alive with probability 0.5.
    pub fn random(width: usize, height: usize) -> EngineResult<Self> {
        Self::fill_random(width, height, &mut rand::thread_rng())
    }

    /// Deterministic random board for reproducible runs and tests.
    pub fn random_seeded(width: usize, height: usize, seed: u64) -> EngineResult<Self> {
        use rand::SeedableRng;
        Self::fill_random(width, height, &mut rand_chacha::ChaCha8Rng::seed_from_u64(seed))
    }

    /// Board from explicit rows, e.g. a literal pattern in a test.
    ///
    /// Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> EngineResult<Self> {
        if let Some(first) = rows.first() {
            let width = first.len();
            if rows.iter().any(|row| row.len() != width) {
                return Err(EngineError::InvalidDimension {
                    reason: "rows have differing lengths".to_string(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Rows already known to be rectangular, e.g. mapped from an existing
    /// board.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<CellState>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows[0].len()));
        Self { rows }
    }

    fn fill_random(width: usize, height: usize, rng: &mut impl Rng) -> EngineResult<Self> {
        Self::check_dimensions(width, height)?;
        Ok(Self {
            rows: (0..height)
                .map(|_| {
                    (0..width)
                        .map(|_| {
                            if rng.gen_bool(FILL_RATE) {
                                CellState::Alive
                            } else {
                                CellState::Dead
                            }
                        })
                        .collect()
                })
                .collect(),
        })
    }

    fn check_dimensions(width: usize, height: usize) -> EngineResult<()> {
        if width.checked_mul(height).is_none() {
            return Err(EngineError::InvalidDimension {
                reason: format!("{width}x{height} cell count overflows usize"),
            });
        }
        Ok(())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_legal_coordinate(&self, row: usize, column: usize) -> bool {
        row < self.height() && column < self.width()
    }

    pub fn get(&self, row: usize, column: usize) -> EngineResult<CellState> {
        self.check_bounds(row, column)?;
        Ok(self.rows[row][column])
    }

    pub fn set(&mut self, row: usize, column: usize, state: CellState) -> EngineResult<()> {
        self.check_bounds(row, column)?;
        self.rows[row][column] = state;
        Ok(())
    }

    fn check_bounds(&self, row: usize, column: usize) -> EngineResult<()> {
        if !self.is_legal_coordinate(row, column) {
            return Err(EngineError::OutOfRange {
                row,
                column,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    pub fn rows(&self) -> &[Vec<CellState>] {
        &self.rows
    }
}
