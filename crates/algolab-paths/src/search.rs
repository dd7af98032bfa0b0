use std::collections::VecDeque;

use crate::traits::Pather;

// ---------------------------------------------------------------------------
// Internal per-cell bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Discovered and queued at least once.
    pub(crate) seen: bool,
    /// Expanded; never expanded again this generation.
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: usize::MAX,
            generation: 0,
            seen: false,
            closed: false,
        }
    }
}

/// Priority-queue entry ordered by `f`, then by insertion sequence.
///
/// Equal priorities leave the queue in insertion order, so repeated runs
/// on identical grids expand cells in the same order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest seq.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// Trace
// ---------------------------------------------------------------------------

/// What a single search did: the cells it expanded, in order, and the route
/// it found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    /// Every expanded cell, in expansion order. Its length is the
    /// nodes-explored metric.
    pub expanded: Vec<usize>,
    /// The route from source to goal, both included, or `None` when the
    /// goal was not reached.
    pub path: Option<Vec<usize>>,
}

impl Trace {
    /// Number of steps along the path (0 for a path of one cell).
    pub fn path_length(&self) -> usize {
        self.path.as_ref().map_or(0, |p| p.len().saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Reusable bookkeeping for searches over a grid of `len` cells.
///
/// `SearchSpace` owns the node array, the frontier containers and a scratch
/// neighbor buffer. A generation counter invalidates the node array lazily,
/// so a new search costs no clearing pass and no allocation after warm-up.
pub struct SearchSpace {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) seq: u64,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) stack: Vec<(usize, usize)>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<usize>,
}

impl SearchSpace {
    /// Create a search space for grids of `len` cells.
    pub fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::default(); len],
            generation: 0,
            seq: 0,
            queue: VecDeque::new(),
            stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the space covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resize for a grid of `len` cells.
    ///
    /// Shrinking keeps the allocation and bumps the generation; growing
    /// reallocates.
    pub fn resize(&mut self, len: usize) {
        if len <= self.nodes.len() {
            self.nodes.truncate(len);
            self.generation = self.generation.wrapping_add(1);
            return;
        }
        self.nodes.clear();
        self.nodes.resize(len, Node::default());
        self.generation = 0;
    }

    /// Start a new search: bump the generation so every node reads as fresh.
    pub(crate) fn begin(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale nodes could alias the new generation.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.seq = 0;
        self.generation
    }

    /// The node at `idx`, reset first if it belongs to an older search.
    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        let cur_gen = self.generation;
        let n = &mut self.nodes[idx];
        if n.generation != cur_gen {
            *n = Node {
                generation: cur_gen,
                ..Node::default()
            };
        }
        n
    }

    /// Whether `idx` was expanded during the current search.
    #[inline]
    pub(crate) fn is_closed(&self, idx: usize) -> bool {
        let n = &self.nodes[idx];
        n.generation == self.generation && n.closed
    }

    /// Whether `idx` was discovered during the current search.
    #[inline]
    pub(crate) fn is_seen(&self, idx: usize) -> bool {
        let n = &self.nodes[idx];
        n.generation == self.generation && n.seen
    }

    #[inline]
    pub(crate) fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Follow parent links back from `goal`.
    pub(crate) fn path_to(&self, goal: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != usize::MAX {
            path.push(ci);
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }

    /// Fill `buf` with the neighbors of `idx` that this space covers.
    ///
    /// Cells past the end of the node array are skipped, so a space sized
    /// for a smaller grid searches only the cells it holds.
    #[inline]
    pub(crate) fn neighbors_within<P: Pather>(&self, pather: &P, idx: usize, buf: &mut Vec<usize>) {
        buf.clear();
        pather.neighbors(idx, buf);
        let len = self.nodes.len();
        buf.retain(|&ni| ni < len);
    }

    /// Whether both endpoints address cells in this space.
    #[inline]
    pub(crate) fn in_range(&self, from: usize, to: usize) -> bool {
        from < self.nodes.len() && to < self.nodes.len()
    }
}
