use crate::search::{SearchSpace, Trace};
use crate::traits::Pather;

impl SearchSpace {
    /// Depth-first search from `from` to `to`.
    ///
    /// Uses an explicit stack. Neighbors are explored in the order the
    /// pather yields them (north, east, south, west for a grid), so runs are
    /// reproducible. The path found is whatever branch reaches `to` first and
    /// is not necessarily the shortest.
    pub fn dfs<P: Pather>(&mut self, pather: &P, from: usize, to: usize) -> Trace {
        let mut trace = Trace::default();
        if !self.in_range(from, to) {
            return trace;
        }
        self.begin();

        let mut stack = std::mem::take(&mut self.stack);
        stack.clear();
        stack.push((from, usize::MAX));

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some((ci, parent)) = stack.pop() else {
                break 'search false;
            };
            if self.is_closed(ci) {
                continue;
            }
            {
                let n = self.node_mut(ci);
                n.closed = true;
                n.parent = parent;
            }
            trace.expanded.push(ci);
            if ci == to {
                break 'search true;
            }

            self.neighbors_within(pather, ci, &mut nbuf);

            // Push in reverse so the first neighbor is popped first.
            for &ni in nbuf.iter().rev() {
                if !self.is_closed(ni) {
                    stack.push((ni, ci));
                }
            }
        };

        self.nbuf = nbuf;
        self.stack = stack;

        if found {
            trace.path = Some(self.path_to(to));
        }
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolab_core::Grid;

    #[test]
    fn follows_compass_order() {
        // From the centre of a 3x3 grid, north is tried first, then east.
        let g = Grid::new(3, 3).unwrap();
        let mut s = SearchSpace::new(g.len());
        let t = s.dfs(&g, 4, 5);
        assert_eq!(&t.expanded[..2], &[4, 1]);
        assert_eq!(t.path.as_ref().and_then(|p| p.last()), Some(&5));
    }

    #[test]
    fn path_is_connected() {
        let mut g = Grid::new(5, 5).unwrap();
        for i in [6, 7, 8, 16, 17, 18] {
            g.set_wall(i, true).unwrap();
        }
        let mut s = SearchSpace::new(g.len());
        let t = s.dfs(&g, 0, 24);
        let path = t.path.unwrap();
        assert_eq!(path[0], 0);
        assert_eq!(*path.last().unwrap(), 24);
        for w in path.windows(2) {
            assert!(g.neighbors(w[0]).contains(&w[1]));
        }
    }

    #[test]
    fn may_be_longer_than_bfs() {
        // Going north first on an open grid sends DFS the long way round.
        let g = Grid::new(4, 4).unwrap();
        let mut s = SearchSpace::new(g.len());
        let dfs = s.dfs(&g, 5, 9);
        let bfs = s.bfs(&g, 5, 9);
        assert_eq!(bfs.path_length(), 1);
        assert!(dfs.path_length() >= bfs.path_length());
    }

    #[test]
    fn expands_each_cell_once() {
        let g = Grid::new(4, 4).unwrap();
        let mut s = SearchSpace::new(g.len());
        let mut sealed = g.clone();
        sealed.set_wall(14, true).unwrap();
        sealed.set_wall(11, true).unwrap();
        let t = s.dfs(&sealed, 0, 15);
        assert_eq!(t.path, None);
        let mut seen = t.expanded.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), t.expanded.len());
        assert_eq!(t.expanded.len(), 13);
    }
}
