//! Flood fill of the open component around a cell.

use crate::search::SearchSpace;
use crate::traits::Pather;

impl SearchSpace {
    /// Every cell reachable from `from`, `from` included, in discovery
    /// order. Empty when `from` is out of range.
    pub fn reachable<P: Pather>(&mut self, pather: &P, from: usize) -> Vec<usize> {
        let mut result = Vec::new();
        if from >= self.len() {
            return result;
        }
        self.begin();

        let mut stack = std::mem::take(&mut self.stack);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        stack.clear();
        stack.push((from, usize::MAX));
        self.node_mut(from).seen = true;
        result.push(from);

        while let Some((ci, _)) = stack.pop() {
            self.neighbors_within(pather, ci, &mut nbuf);

            for &ni in nbuf.iter() {
                if !self.is_seen(ni) {
                    self.node_mut(ni).seen = true;
                    stack.push((ni, ci));
                    result.push(ni);
                }
            }
        }

        self.stack = stack;
        self.nbuf = nbuf;
        result
    }
}
