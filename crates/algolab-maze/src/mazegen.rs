//! Maze generators operating on a [`Grid`].
//!
//! Both generators share one frame:
//! 1. remember Start and End, then wall in the whole grid (this also clears
//!    terrain and the search overlay),
//! 2. carve a spanning tree over the odd-coordinate lattice from (1, 1),
//! 3. re-mark Start and End and open a short connector for any marker that
//!    sits off the lattice, so both stay reachable.

use std::fmt;

use algolab_core::Grid;
use log::{debug, warn};
use rand::{Rng, RngExt};

use crate::error::MazeError;
use crate::lattice::{self, MIN_SIDE, ORIGIN};

/// The closed set of maze generators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeKind {
    Backtracker,
    Prims,
}

impl MazeKind {
    /// Every generator, in menu order.
    pub const ALL: [MazeKind; 2] = [Self::Backtracker, Self::Prims];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Backtracker => "Recursive Backtracker",
            Self::Prims => "Prim's",
        }
    }
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Start and End captured before the grid is walled in.
struct Markers {
    start: Option<usize>,
    end: Option<usize>,
}

/// Maze generator drawing its randomness from `rng`.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a maze of the given kind into `grid`.
    ///
    /// Returns the number of open cells afterwards. On error the grid is left
    /// unchanged.
    pub fn generate(&mut self, grid: &mut Grid, kind: MazeKind) -> Result<usize, MazeError> {
        match kind {
            MazeKind::Backtracker => self.backtracker(grid),
            MazeKind::Prims => self.prims(grid),
        }
    }

    /// Generate a maze with the randomized recursive backtracker.
    ///
    /// From the current cell a random unvisited lattice neighbour is chosen,
    /// the wall between them is knocked down, and the neighbour is pushed on
    /// an explicit stack. Dead ends pop the stack.
    pub fn backtracker(&mut self, grid: &mut Grid) -> Result<usize, MazeError> {
        let markers = prepare(grid)?;

        let mut visited = vec![false; grid.len()];
        let mut stack = Vec::new();
        let mut options: Vec<(usize, usize)> = Vec::with_capacity(4);

        if let Some(origin) = grid.index(ORIGIN) {
            grid.carve(origin);
            visited[origin] = true;
            stack.push(origin);
        }

        while let Some(&current) = stack.last() {
            options.clear();
            options.extend(lattice::steps(grid, current).filter(|&(cell, _)| !visited[cell]));

            if options.is_empty() {
                stack.pop();
                continue;
            }

            let (cell, wall) = options[self.rng.random_range(0..options.len())];
            grid.carve(wall);
            grid.carve(cell);
            visited[cell] = true;
            stack.push(cell);
        }

        Ok(finish(grid, markers, MazeKind::Backtracker))
    }

    /// Generate a maze with randomized Prim's algorithm.
    ///
    /// The frontier holds `(wall, cell)` pairs leading out of the carved
    /// region. A random pair is taken each step; if its cell is not yet
    /// carved, both wall and cell are opened and the cell's own frontier is
    /// added. Generation ends when the frontier is empty.
    pub fn prims(&mut self, grid: &mut Grid) -> Result<usize, MazeError> {
        let markers = prepare(grid)?;

        let mut in_maze = vec![false; grid.len()];
        let mut frontier: Vec<(usize, usize)> = Vec::new();

        if let Some(origin) = grid.index(ORIGIN) {
            grid.carve(origin);
            in_maze[origin] = true;
            frontier.extend(lattice::steps(grid, origin).map(|(cell, wall)| (wall, cell)));
        }

        while !frontier.is_empty() {
            let pick = self.rng.random_range(0..frontier.len());
            let (wall, cell) = frontier.swap_remove(pick);

            if in_maze[cell] {
                continue;
            }

            grid.carve(wall);
            grid.carve(cell);
            in_maze[cell] = true;

            frontier.extend(
                lattice::steps(grid, cell)
                    .filter(|&(next, _)| !in_maze[next])
                    .map(|(next, next_wall)| (next_wall, next)),
            );
        }

        Ok(finish(grid, markers, MazeKind::Prims))
    }
}

/// Check the grid can hold a maze, capture the markers and wall everything
/// in.
fn prepare(grid: &mut Grid) -> Result<Markers, MazeError> {
    if grid.width() < MIN_SIDE || grid.height() < MIN_SIDE {
        let err = MazeError::TooSmall {
            width: grid.width(),
            height: grid.height(),
        };
        warn!("{err}");
        return Err(err);
    }
    let markers = Markers {
        start: grid.start(),
        end: grid.end(),
    };
    grid.fill_walls();
    Ok(markers)
}

/// Restore the markers, connect them to the lattice and count open cells.
fn finish(grid: &mut Grid, markers: Markers, kind: MazeKind) -> usize {
    let mut connectors = 0;
    for (idx, is_start) in [(markers.start, true), (markers.end, false)] {
        let Some(idx) = idx else {
            continue;
        };
        // Markers were valid offsets into this same grid.
        let restored = if is_start {
            grid.set_start(idx)
        } else {
            grid.set_end(idx)
        };
        if restored.is_ok() {
            connectors += lattice::connect(grid, idx);
        }
    }
    let open = (0..grid.len()).filter(|&i| grid.is_traversable(i)).count();
    debug!(
        "{kind} maze on {}x{}: {open} open cells, {connectors} connector cells",
        grid.width(),
        grid.height()
    );
    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolab_core::{COST_MUD, COST_NORMAL, CellKind, Overlay, Point};
    use algolab_paths::SearchSpace;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mazegen(seed: u64) -> MazeGen<StdRng> {
        MazeGen::new(StdRng::seed_from_u64(seed))
    }

    fn reachable(grid: &Grid, from: usize) -> Vec<usize> {
        SearchSpace::new(grid.len()).reachable(grid, from)
    }

    #[test]
    fn perfect_maze_on_odd_grid() {
        for kind in MazeKind::ALL {
            let mut g = Grid::new(7, 7).unwrap();
            let open = mazegen(1).generate(&mut g, kind).unwrap();
            // 9 lattice cells joined by 8 carved walls.
            assert_eq!(open, 17, "{kind}");
            for p in g.bounds().points().filter(|&p| lattice::is_lattice(p)) {
                assert!(g.is_traversable(g.index(p).unwrap()), "{kind} {p}");
            }
            let origin = g.index(ORIGIN).unwrap();
            assert_eq!(reachable(&g, origin).len(), 17, "{kind}");
        }
    }

    #[test]
    fn border_stays_walled_on_odd_grid() {
        let mut g = Grid::new(9, 7).unwrap();
        mazegen(3).prims(&mut g).unwrap();
        for p in g.bounds().points() {
            if p.x == 0 || p.y == 0 || p.x == 8 || p.y == 6 {
                assert_eq!(g.kind(g.index(p).unwrap()), Some(CellKind::Wall), "{p}");
            }
        }
    }

    #[test]
    fn markers_survive_generation() {
        for kind in MazeKind::ALL {
            // Even dimensions put the end marker off the lattice.
            let mut g = Grid::new(60, 40).unwrap();
            let start = g.index(Point::new(1, 1)).unwrap();
            let end = g.index(Point::new(58, 38)).unwrap();
            g.set_start(start).unwrap();
            g.set_end(end).unwrap();
            mazegen(7).generate(&mut g, kind).unwrap();
            assert_eq!(g.start(), Some(start));
            assert_eq!(g.end(), Some(end));
            assert_eq!(g.kind(start), Some(CellKind::Start));
            assert_eq!(g.kind(end), Some(CellKind::End));
            assert!(reachable(&g, start).contains(&end), "{kind}");
        }
    }

    #[test]
    fn corner_markers_are_connected() {
        let mut g = Grid::new(8, 6).unwrap();
        g.set_start(0).unwrap();
        g.set_end(47).unwrap();
        mazegen(11).backtracker(&mut g).unwrap();
        assert!(g.is_traversable(0));
        assert!(g.is_traversable(47));
        assert!(reachable(&g, 0).contains(&47));
    }

    #[test]
    fn same_seed_same_maze() {
        for kind in MazeKind::ALL {
            let mut a = Grid::new(21, 15).unwrap();
            let mut b = Grid::new(21, 15).unwrap();
            mazegen(42).generate(&mut a, kind).unwrap();
            mazegen(42).generate(&mut b, kind).unwrap();
            assert_eq!(a.render_buffer(), b.render_buffer(), "{kind}");
        }
    }

    #[test]
    fn clears_terrain_and_overlay() {
        let mut g = Grid::new(7, 7).unwrap();
        g.set_terrain(8, COST_MUD).unwrap();
        g.mark_visited(8);
        mazegen(5).backtracker(&mut g).unwrap();
        for i in 0..g.len() {
            assert_eq!(g.overlay(i), Some(Overlay::Unvisited));
            assert_eq!(g.cost(i), Some(COST_NORMAL));
        }
    }

    #[test]
    fn works_without_markers() {
        let mut g = Grid::new(5, 5).unwrap();
        mazegen(9).prims(&mut g).unwrap();
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
    }

    #[test]
    fn too_small_grid_is_left_alone() {
        let mut g = Grid::new(2, 5).unwrap();
        g.set_start(0).unwrap();
        let before = g.render_buffer().to_vec();
        for kind in MazeKind::ALL {
            assert_eq!(
                mazegen(1).generate(&mut g, kind),
                Err(MazeError::TooSmall {
                    width: 2,
                    height: 5
                })
            );
        }
        assert_eq!(g.render_buffer(), &before[..]);
    }
}
