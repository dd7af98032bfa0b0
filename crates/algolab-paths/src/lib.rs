//! Search algorithms for the lab grid.
//!
//! Four searches share one contract: explore from Start, report whether End
//! was reached, the route, and how many cells were expanded.
//!
//! - **BFS** hop-optimal search ([`SearchSpace::bfs`])
//! - **DFS** deterministic depth-first search ([`SearchSpace::dfs`])
//! - **Dijkstra** cost-optimal search ([`SearchSpace::dijkstra`])
//! - **A\*** cost-optimal search guided by Manhattan distance ([`SearchSpace::astar`])
//! - **Flood fill** of the component around a cell ([`SearchSpace::reachable`])
//!
//! [`SearchSpace`] owns and reuses the per-cell bookkeeping, so a search
//! never reads the grid's visualization overlay. [`SearchSpace::run`]
//! drives one [`Algorithm`] over a [`Grid`](algolab_core::Grid), paints the
//! overlay, and returns a [`SearchReport`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS, flood fill |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod engine;
mod flood;
mod search;
mod traits;

pub use distance::manhattan;
pub use engine::{Algorithm, SearchReport};
pub use search::{SearchSpace, Trace};
pub use traits::{AstarPather, MIN_STEP_COST, Pather, WeightedPather};
