//! The standard B3/S23 rule, split into its named predicates.

/// A living cell with fewer than 2 living neighbours dies.
pub fn is_lonely(living_neighbour_count: usize) -> bool {
    living_neighbour_count < 2
}

/// A living cell with more than 3 living neighbours dies.
pub fn is_crowded(living_neighbour_count: usize) -> bool {
    living_neighbour_count > 3
}

/// Whether a living cell with this many living neighbours dies.
pub fn should_die(living_neighbour_count: usize) -> bool {
    is_lonely(living_neighbour_count) || is_crowded(living_neighbour_count)
}

/// Whether a dead cell with this many living neighbours becomes alive.
pub fn should_restore(living_neighbour_count: usize) -> bool {
    living_neighbour_count == 3
}
