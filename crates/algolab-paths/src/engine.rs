//! Running an [`Algorithm`] over a [`Grid`] and reporting on it.

use std::fmt;
use std::time::{Duration, Instant};

use algolab_core::Grid;
use log::debug;

use crate::search::{SearchSpace, Trace};

/// The closed set of search algorithms the lab runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one search run.
///
/// A report owns its data and does not refer back to the grid it came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    algorithm: Algorithm,
    path_found: bool,
    path_length: u32,
    path_cost: f64,
    nodes_explored: u32,
    execution_time: Duration,
    path: Vec<usize>,
    visit_order: Vec<usize>,
}

impl SearchReport {
    /// Report for a run that could not start (missing start or end).
    fn not_started(algorithm: Algorithm, execution_time: Duration) -> Self {
        Self {
            algorithm,
            path_found: false,
            path_length: 0,
            path_cost: 0.0,
            nodes_explored: 0,
            execution_time,
            path: Vec::new(),
            visit_order: Vec::new(),
        }
    }

    fn from_trace(algorithm: Algorithm, grid: &Grid, trace: Trace, execution_time: Duration) -> Self {
        let path_length = trace.path_length() as u32;
        let path = trace.path.unwrap_or_default();
        let path_cost = path
            .iter()
            .skip(1)
            .filter_map(|&i| grid.cost(i))
            .map(f64::from)
            .sum();
        Self {
            algorithm,
            path_found: !path.is_empty(),
            path_length,
            path_cost,
            nodes_explored: trace.expanded.len() as u32,
            execution_time,
            path,
            visit_order: trace.expanded,
        }
    }

    /// Which algorithm produced this report.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Whether End was reached.
    #[inline]
    pub fn path_found(&self) -> bool {
        self.path_found
    }

    /// Steps along the path: 0 when no path was found or Start equals End.
    #[inline]
    pub fn path_length(&self) -> u32 {
        self.path_length
    }

    /// Sum of the costs of every cell entered after Start.
    #[inline]
    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    /// Number of cells taken off the frontier and expanded.
    #[inline]
    pub fn nodes_explored(&self) -> u32 {
        self.nodes_explored
    }

    /// Wall-clock duration of the run.
    #[inline]
    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }

    /// Wall-clock duration of the run in milliseconds.
    #[inline]
    pub fn execution_ms(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }

    /// The path from Start to End, both included; empty when not found.
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Expanded cells in expansion order.
    #[inline]
    pub fn visit_order(&self) -> &[usize] {
        &self.visit_order
    }
}

impl SearchSpace {
    /// Run `algorithm` from the grid's Start to its End and paint the result.
    ///
    /// Every expanded cell is marked visited and every path cell is marked
    /// path. The overlay is not cleared first: callers reset it between runs.
    /// Structure and costs are never touched. A missing Start or End yields a
    /// report with `path_found == false` and no cells explored.
    pub fn run(&mut self, grid: &mut Grid, algorithm: Algorithm) -> SearchReport {
        let started = Instant::now();

        let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
            debug!("{algorithm}: start or end unset, nothing to search");
            return SearchReport::not_started(algorithm, started.elapsed());
        };

        if self.len() != grid.len() {
            self.resize(grid.len());
        }

        let trace = match algorithm {
            Algorithm::Bfs => self.bfs(&*grid, start, end),
            Algorithm::Dfs => self.dfs(&*grid, start, end),
            Algorithm::Dijkstra => self.dijkstra(&*grid, start, end),
            Algorithm::AStar => self.astar(&*grid, start, end),
        };

        for &i in trace.expanded.iter() {
            grid.mark_visited(i);
        }
        if let Some(path) = trace.path.as_ref() {
            for &i in path.iter() {
                grid.mark_path(i);
            }
        }

        let report = SearchReport::from_trace(algorithm, grid, trace, started.elapsed());
        debug!(
            "{algorithm}: found={} length={} cost={} explored={} in {:.3}ms",
            report.path_found,
            report.path_length,
            report.path_cost,
            report.nodes_explored,
            report.execution_ms()
        );
        report
    }
}
