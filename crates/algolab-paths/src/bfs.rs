use crate::search::{SearchSpace, Trace};
use crate::traits::Pather;

impl SearchSpace {
    /// Breadth-first search from `from` to `to`.
    ///
    /// Every step counts as 1 whatever the terrain, so the path found is
    /// shortest by hop count. Each cell is queued at most once and the
    /// search stops when `to` is dequeued.
    pub fn bfs<P: Pather>(&mut self, pather: &P, from: usize, to: usize) -> Trace {
        let mut trace = Trace::default();
        if !self.in_range(from, to) {
            return trace;
        }
        self.begin();

        let mut queue = std::mem::take(&mut self.queue);
        queue.clear();
        {
            let n = self.node_mut(from);
            n.seen = true;
            n.g = 0.0;
        }
        queue.push_back(from);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = queue.pop_front() else {
                break 'search false;
            };
            trace.expanded.push(ci);
            if ci == to {
                break 'search true;
            }
            let next_g = self.nodes[ci].g + 1.0;

            self.neighbors_within(pather, ci, &mut nbuf);

            for &ni in nbuf.iter() {
                if self.is_seen(ni) {
                    continue;
                }
                let n = self.node_mut(ni);
                n.seen = true;
                n.g = next_g;
                n.parent = ci;
                queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;
        self.queue = queue;

        if found {
            trace.path = Some(self.path_to(to));
        }
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolab_core::{COST_WATER, Grid};

    fn open(w: usize, h: usize) -> Grid {
        Grid::new(w, h).unwrap()
    }

    #[test]
    fn corner_to_corner() {
        let g = open(3, 3);
        let mut s = SearchSpace::new(g.len());
        let t = s.bfs(&g, 0, 8);
        assert_eq!(t.path_length(), 4);
        assert!(t.expanded.len() <= 9);
        let path = t.path.unwrap();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&8));
    }

    #[test]
    fn adjacent_cells() {
        let g = open(3, 3);
        let mut s = SearchSpace::new(g.len());
        let t = s.bfs(&g, 0, 1);
        assert_eq!(t.path, Some(vec![0, 1]));
    }

    #[test]
    fn ignores_terrain_cost() {
        let mut g = open(3, 1);
        g.set_terrain(1, COST_WATER).unwrap();
        let mut s = SearchSpace::new(g.len());
        let t = s.bfs(&g, 0, 2);
        assert_eq!(t.path, Some(vec![0, 1, 2]));
    }

    #[test]
    fn same_cell() {
        let g = open(2, 2);
        let mut s = SearchSpace::new(g.len());
        let t = s.bfs(&g, 3, 3);
        assert_eq!(t.path, Some(vec![3]));
        assert_eq!(t.path_length(), 0);
        assert_eq!(t.expanded, vec![3]);
    }

    #[test]
    fn walled_off_goal_exhausts_component() {
        // 4x4, goal in the bottom-right corner sealed by walls at 11 and 14.
        let mut g = open(4, 4);
        g.set_wall(11, true).unwrap();
        g.set_wall(14, true).unwrap();
        let mut s = SearchSpace::new(g.len());
        let t = s.bfs(&g, 0, 15);
        assert_eq!(t.path, None);
        assert_eq!(t.expanded.len(), 13);
    }

    #[test]
    fn out_of_range_endpoints() {
        let g = open(2, 2);
        let mut s = SearchSpace::new(g.len());
        assert_eq!(s.bfs(&g, 0, 4), Trace::default());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut g = open(6, 5);
        g.set_wall(8, true).unwrap();
        g.set_wall(14, true).unwrap();
        let mut s = SearchSpace::new(g.len());
        let a = s.bfs(&g, 0, 29);
        let b = s.bfs(&g, 0, 29);
        assert_eq!(a, b);
    }
}
