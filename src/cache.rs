use crate::Coord;
use ahash::AHashMap;
use log::trace;
use std::cell::RefCell;
use std::rc::Rc;

/// Lazy cache of Moore-neighbour coordinate lists.
///
/// Keyed by `(row, column)`; an entry is a pure function of the key and the
/// board dimensions, so recomputing and overwriting an entry always yields
/// the same list. Entries never move or get evicted for the cache's
/// lifetime.
#[derive(Debug, Default)]
pub struct NeighbourCache {
    map: AHashMap<Coord, Vec<Coord>>,
}

/// Cache handle shared across every generation derived from one simulation.
pub type SharedNeighbourCache = Rc<RefCell<NeighbourCache>>;

// Order matters for cache identity, not for correctness.
const OFFSETS: [(i64, i64); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
];

impl NeighbourCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Legal Moore neighbours of `(row, column)` on a `width`x`height`
    /// board, computed on first request and served from the cache after.
    ///
    /// An out-of-bounds key has no neighbours.
    pub fn neighbours(
        &mut self,
        row: usize,
        column: usize,
        width: usize,
        height: usize,
    ) -> Vec<Coord> {
        self.map
            .entry((row, column))
            .or_insert_with(|| {
                trace!("neighbour cache miss for ({row}, {column})");
                compute_neighbours(row, column, width, height)
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn compute_neighbours(row: usize, column: usize, width: usize, height: usize) -> Vec<Coord> {
    if row >= height || column >= width {
        return Vec::new();
    }
    OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row as i64 + dr;
            let c = column as i64 + dc;
            (r >= 0 && c >= 0 && (r as usize) < height && (c as usize) < width)
                .then_some((r as usize, c as usize))
        })
        .collect()
}
