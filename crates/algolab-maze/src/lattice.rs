//! The odd-coordinate passage lattice both generators carve on.

use algolab_core::{Grid, Point};

/// Minimum width and height of a grid that can hold a maze.
pub(crate) const MIN_SIDE: usize = 3;

/// Where carving starts.
pub(crate) const ORIGIN: Point = Point::new(1, 1);

/// Steps to the four lattice neighbours: north, east, south, west.
const STEPS: [Point; 4] = [
    Point::new(0, -2),
    Point::new(2, 0),
    Point::new(0, 2),
    Point::new(-2, 0),
];

/// Whether `p` lies on the passage lattice.
#[inline]
pub(crate) fn is_lattice(p: Point) -> bool {
    p.x % 2 == 1 && p.y % 2 == 1
}

/// Lattice neighbours of `idx` two cells away, as `(cell, wall_between)`
/// pairs.
pub(crate) fn steps(grid: &Grid, idx: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    let p = grid.point(idx);
    STEPS.into_iter().filter_map(move |d| {
        let cell = grid.index(p + d)?;
        let wall = grid.index(p.shift(d.x / 2, d.y / 2))?;
        Some((cell, wall))
    })
}

/// Open a path from `idx` to the nearest lattice cell.
///
/// Every lattice cell is carved by a finished generator, so after this a
/// marker placed off the lattice is reachable. Returns the number of cells
/// opened.
pub(crate) fn connect(grid: &mut Grid, idx: usize) -> usize {
    let p = grid.point(idx);
    if is_lattice(p) {
        return 0;
    }
    let snap = |v: i32| if v % 2 == 1 { v } else if v >= 1 { v - 1 } else { 1 };
    let bend = Point::new(p.x, snap(p.y));
    let target = Point::new(snap(p.x), snap(p.y));
    let mut opened = 0;
    for q in [bend, target] {
        if let Some(i) = grid.index(q) {
            if !grid.is_traversable(i) {
                grid.carve(i);
                opened += 1;
            }
        }
    }
    opened
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_stay_in_bounds() {
        let g = Grid::new(5, 5).unwrap();
        let origin = g.index(ORIGIN).unwrap();
        let s: Vec<_> = steps(&g, origin).collect();
        // Only east and south fit from (1, 1).
        assert_eq!(s, vec![(8, 7), (16, 11)]);
    }

    #[test]
    fn connect_opens_a_bend() {
        let mut g = Grid::new(5, 5).unwrap();
        g.fill_walls();
        g.carve(6); // (1, 1)
        // (2, 2) snaps to (1, 1) via the bend at (2, 1).
        g.set_start(12).unwrap();
        assert_eq!(connect(&mut g, 12), 1);
        assert!(g.is_traversable(7));
        assert_eq!(connect(&mut g, 6), 0);
    }
}
