use algolab_core::{COST_NORMAL, Grid};

use crate::distance::manhattan;

/// Lowest cost of a single step. Heuristics scale by it to stay admissible.
pub const MIN_STEP_COST: f64 = COST_NORMAL as f64;

/// Minimal search interface: provides neighbor enumeration over linear
/// cell indices.
pub trait Pather {
    /// Append neighbors of `idx` into `buf`. The caller clears `buf` before
    /// calling. The order must be deterministic.
    fn neighbors(&self, idx: usize, buf: &mut Vec<usize>);
}

/// Pather with weighted (positive-cost) steps.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be at least
    /// [`MIN_STEP_COST`].
    fn cost(&self, from: usize, to: usize) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: usize, to: usize) -> f64;
}

impl Pather for Grid {
    #[inline]
    fn neighbors(&self, idx: usize, buf: &mut Vec<usize>) {
        self.neighbors_into(idx, buf);
    }
}

impl WeightedPather for Grid {
    /// Entering a cell costs that cell's terrain cost.
    #[inline]
    fn cost(&self, _from: usize, to: usize) -> f64 {
        Grid::cost(self, to).map_or(MIN_STEP_COST, f64::from)
    }
}

impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: usize, to: usize) -> f64 {
        manhattan(self.point(from), self.point(to)) as f64 * MIN_STEP_COST
    }
}
