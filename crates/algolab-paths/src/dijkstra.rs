use std::collections::BinaryHeap;

use crate::search::{NodeRef, SearchSpace, Trace};
use crate::traits::WeightedPather;

impl SearchSpace {
    /// Dijkstra search from `from` to `to`.
    ///
    /// The frontier is ordered by accumulated cost, ties broken by insertion
    /// order. With step costs of at least 1 the path found has minimum total
    /// cost.
    pub fn dijkstra<P: WeightedPather>(&mut self, pather: &P, from: usize, to: usize) -> Trace {
        self.best_first(pather, from, to, |_| 0.0)
    }

    /// Shared best-first loop for Dijkstra and A*: the frontier is ordered
    /// by `g + heuristic(idx)`.
    pub(crate) fn best_first<P, H>(&mut self, pather: &P, from: usize, to: usize, heuristic: H) -> Trace
    where
        P: WeightedPather,
        H: Fn(usize) -> f64,
    {
        let mut trace = Trace::default();
        if !self.in_range(from, to) {
            return trace;
        }
        self.begin();

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        {
            let n = self.node_mut(from);
            n.g = 0.0;
            n.seen = true;
        }
        let seq = self.next_seq();
        open.push(NodeRef {
            idx: from,
            f: heuristic(from),
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip stale entries superseded by a cheaper one.
            if self.is_closed(ci) {
                continue;
            }
            self.node_mut(ci).closed = true;
            trace.expanded.push(ci);

            if ci == to {
                break 'search true;
            }

            let current_g = self.nodes[ci].g;

            self.neighbors_within(pather, ci, &mut nbuf);

            for &ni in nbuf.iter() {
                let tentative_g = current_g + pather.cost(ci, ni);

                let n = self.node_mut(ni);
                if n.closed || tentative_g >= n.g {
                    continue;
                }
                n.g = tentative_g;
                n.parent = ci;
                n.seen = true;

                let seq = self.next_seq();
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + heuristic(ni),
                    seq,
                });
            }
        };

        self.nbuf = nbuf;

        if found {
            trace.path = Some(self.path_to(to));
        }
        trace
    }
}
