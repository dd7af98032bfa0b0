use crate::search::{SearchSpace, Trace};
use crate::traits::AstarPather;

impl SearchSpace {
    /// A* search from `from` to `to`.
    ///
    /// The frontier is ordered by accumulated cost plus
    /// [`AstarPather::estimate`], ties broken by insertion order. With an
    /// admissible, consistent estimate the path found costs the same as
    /// Dijkstra's; with an estimate of 0 the search is Dijkstra.
    pub fn astar<P: AstarPather>(&mut self, pather: &P, from: usize, to: usize) -> Trace {
        self.best_first(pather, from, to, |idx| pather.estimate(idx, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Pather, WeightedPather};
    use algolab_core::{COST_MUD, COST_WATER, Grid};

    fn path_cost(g: &Grid, path: &[usize]) -> f64 {
        path.iter().skip(1).map(|&i| g.cost(i).unwrap() as f64).sum()
    }

    /// The grid with a zero heuristic.
    struct Blind<'a>(&'a Grid);

    impl Pather for Blind<'_> {
        fn neighbors(&self, idx: usize, buf: &mut Vec<usize>) {
            self.0.neighbors_into(idx, buf);
        }
    }

    impl WeightedPather for Blind<'_> {
        fn cost(&self, from: usize, to: usize) -> f64 {
            WeightedPather::cost(self.0, from, to)
        }
    }

    impl AstarPather for Blind<'_> {
        fn estimate(&self, _from: usize, _to: usize) -> f64 {
            0.0
        }
    }

    fn terrain_grid() -> Grid {
        let mut g = Grid::new(8, 6).unwrap();
        for i in [9, 10, 11, 12, 17, 25, 33] {
            g.set_terrain(i, COST_WATER).unwrap();
        }
        for i in [19, 20, 27, 28, 36] {
            g.set_terrain(i, COST_MUD).unwrap();
        }
        for i in [3, 14, 22, 30, 38] {
            g.set_wall(i, true).unwrap();
        }
        g
    }

    #[test]
    fn corner_to_corner() {
        let g = Grid::new(3, 3).unwrap();
        let mut s = SearchSpace::new(g.len());
        let t = s.astar(&g, 0, 8);
        assert_eq!(t.path_length(), 4);
        assert!(t.expanded.len() <= 9);
    }

    #[test]
    fn matches_dijkstra_cost() {
        let g = terrain_grid();
        let mut s = SearchSpace::new(g.len());
        let a = s.astar(&g, 0, 47).path.unwrap();
        let d = s.dijkstra(&g, 0, 47).path.unwrap();
        assert_eq!(path_cost(&g, &a), path_cost(&g, &d));
    }

    #[test]
    fn heads_straight_for_the_goal() {
        let g = Grid::new(10, 10).unwrap();
        let mut s = SearchSpace::new(g.len());
        let a = s.astar(&g, 0, 9);
        let d = s.dijkstra(&g, 0, 9);
        assert_eq!(a.expanded, (0..10).collect::<Vec<_>>());
        assert!(a.expanded.len() < d.expanded.len());
        assert_eq!(a.path_length(), d.path_length());
    }

    #[test]
    fn zero_heuristic_is_dijkstra() {
        let g = terrain_grid();
        let mut s = SearchSpace::new(g.len());
        let blind = s.astar(&Blind(&g), 0, 47);
        let dij = s.dijkstra(&g, 0, 47);
        assert_eq!(blind, dij);
    }

    #[test]
    fn estimate_is_admissible() {
        let g = terrain_grid();
        let mut s = SearchSpace::new(g.len());
        for goal in [7, 40, 47] {
            let Some(path) = s.dijkstra(&g, 0, goal).path else {
                continue;
            };
            assert!(g.estimate(0, goal) <= path_cost(&g, &path));
        }
    }
}
