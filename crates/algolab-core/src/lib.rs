//! **algolab-core** — grid model and render encoding for the algorithm lab.
//!
//! This crate owns the state every other part of the lab works on:
//!
//! - [`Point`] / [`Bounds`] geometry over row-major linear indices,
//! - [`Cell`] with its structural, overlay and cost state,
//! - [`Grid`], which enforces the single-start/single-end and wall rules,
//! - [`RenderCode`], the one-byte-per-cell encoding handed to renderers.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod render;

pub use cell::{COST_MUD, COST_NORMAL, COST_WATER, Cell, CellKind, Overlay};
pub use error::GridError;
pub use geom::{Bounds, Point};
pub use grid::Grid;
pub use render::RenderCode;
