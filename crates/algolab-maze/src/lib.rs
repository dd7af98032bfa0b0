//! Maze generation for the lab grid.
//!
//! Provides two generators, both carving a maze on the odd-coordinate
//! lattice so passages and walls are one cell wide:
//! - **Recursive backtracker**: depth-first carving with an explicit stack,
//!   giving long winding corridors.
//! - **Prim's**: grows the maze from a random frontier, giving more
//!   branching and shorter dead ends.

pub mod error;
pub mod mazegen;

mod lattice;

pub use error::MazeError;
pub use mazegen::{MazeGen, MazeKind};
