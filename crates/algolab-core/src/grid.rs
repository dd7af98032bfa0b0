//! The mutable search grid.
//!
//! [`Grid`] owns row-major cell storage, the start and end markers, and the
//! render buffer. Every mutator bounds-checks its index and either applies
//! completely or returns a [`GridError`] leaving the grid untouched.

use log::debug;

use crate::cell::{COST_NORMAL, Cell, CellKind, Overlay};
use crate::error::GridError;
use crate::geom::{Bounds, Point};
use crate::render;

/// A fixed-size rectangular grid of [`Cell`] values.
#[derive(Debug, Clone)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Cell>,
    start: Option<usize>,
    end: Option<usize>,
    render: Vec<u8>,
    dirty: bool,
}

impl Grid {
    /// Create an all-empty grid with no start or end.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        Ok(Self {
            bounds: Bounds::new(width as i32, height as i32),
            cells: vec![Cell::EMPTY; len],
            start: None,
            end: None,
            render: vec![0; len],
            dirty: true,
        })
    }

    // -----------------------------------------------------------------------
    // Dimensions and coordinates
    // -----------------------------------------------------------------------

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.bounds.width as usize
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.bounds.height as usize
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Width and height as a [`Bounds`].
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Convert a host-supplied linear index into a valid offset.
    pub fn checked_index(&self, idx: i64) -> Result<usize, GridError> {
        let len = self.len();
        match usize::try_from(idx) {
            Ok(i) if i < len => Ok(i),
            _ => Err(GridError::OutOfRange { idx, len }),
        }
    }

    /// Point (column, row) of an in-range offset.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.bounds.point_at(idx)
    }

    /// Offset of `p`, or `None` when outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.bounds.index_of(p)
    }

    fn check(&self, idx: usize) -> Result<usize, GridError> {
        if idx < self.len() {
            Ok(idx)
        } else {
            Err(GridError::OutOfRange {
                idx: idx as i64,
                len: self.len(),
            })
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The cell at `idx`, or `None` if out of range.
    #[inline]
    pub fn cell(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    /// Structural kind of the cell at `idx`.
    pub fn kind(&self, idx: usize) -> Option<CellKind> {
        let cell = self.cells.get(idx)?;
        Some(CellKind::resolve(cell, idx, self.start, self.end))
    }

    /// Search overlay of the cell at `idx`.
    #[inline]
    pub fn overlay(&self, idx: usize) -> Option<Overlay> {
        self.cells.get(idx).map(|c| c.overlay)
    }

    /// Traversal cost of the cell at `idx`.
    #[inline]
    pub fn cost(&self, idx: usize) -> Option<f32> {
        self.cells.get(idx).map(|c| c.cost)
    }

    /// Whether `idx` is in range and not a wall.
    #[inline]
    pub fn is_traversable(&self, idx: usize) -> bool {
        self.cells.get(idx).is_some_and(Cell::is_traversable)
    }

    /// The start marker, if assigned.
    #[inline]
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// The end marker, if assigned.
    #[inline]
    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// Traversable 4-neighbours of `idx` in north, east, south, west order.
    pub fn neighbors(&self, idx: usize) -> Vec<usize> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(idx, &mut buf);
        buf
    }

    /// Append the traversable 4-neighbours of `idx` to `buf`.
    pub fn neighbors_into(&self, idx: usize, buf: &mut Vec<usize>) {
        if idx >= self.len() {
            return;
        }
        for n in self.point(idx).neighbors_4() {
            if let Some(ni) = self.index(n) {
                if self.cells[ni].is_traversable() {
                    buf.push(ni);
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Structural mutators
    // -----------------------------------------------------------------------

    /// Raise or lower a wall.
    ///
    /// A wall cannot replace the start or end marker; that request is
    /// refused with [`GridError::Occupied`]. Raising a wall clears the
    /// cell's overlay. The terrain cost is kept under the wall.
    pub fn set_wall(&mut self, idx: usize, active: bool) -> Result<(), GridError> {
        let idx = self.check(idx)?;
        if active && (self.start == Some(idx) || self.end == Some(idx)) {
            return Err(GridError::Occupied { idx });
        }
        let cell = &mut self.cells[idx];
        cell.wall = active;
        if active {
            cell.overlay = Overlay::Unvisited;
        }
        self.dirty = true;
        Ok(())
    }

    /// Set the traversal cost of a floor cell.
    ///
    /// Costs below [`COST_NORMAL`] (and NaN) are clamped up to it; infinite
    /// costs are refused. Walls refuse terrain.
    pub fn set_terrain(&mut self, idx: usize, cost: f32) -> Result<(), GridError> {
        let idx = self.check(idx)?;
        if cost.is_infinite() {
            return Err(GridError::InvalidCost { cost });
        }
        if self.cells[idx].wall {
            return Err(GridError::NotTraversable { idx });
        }
        let clamped = cost.max(COST_NORMAL);
        if clamped != cost {
            debug!("terrain cost {cost} at {idx} clamped to {clamped}");
        }
        self.cells[idx].cost = clamped;
        self.dirty = true;
        Ok(())
    }

    /// Move the start marker to `idx`, lowering any wall there.
    pub fn set_start(&mut self, idx: usize) -> Result<(), GridError> {
        let idx = self.check(idx)?;
        self.cells[idx].wall = false;
        self.start = Some(idx);
        self.dirty = true;
        Ok(())
    }

    /// Move the end marker to `idx`, lowering any wall there.
    pub fn set_end(&mut self, idx: usize) -> Result<(), GridError> {
        let idx = self.check(idx)?;
        self.cells[idx].wall = false;
        self.end = Some(idx);
        self.dirty = true;
        Ok(())
    }

    /// Clear the visited/path overlay. Structure and costs are untouched.
    pub fn reset_search_state(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.overlay = Overlay::Unvisited;
        }
        self.dirty = true;
    }

    /// Reinitialize every cell to empty floor and unset both markers.
    pub fn reset_all(&mut self) {
        self.cells.fill(Cell::EMPTY);
        self.start = None;
        self.end = None;
        self.dirty = true;
    }

    /// Turn every cell into a default-cost wall with a clear overlay and
    /// unset both markers. Callers re-mark the markers afterwards.
    pub fn fill_walls(&mut self) {
        self.cells.fill(Cell {
            wall: true,
            ..Cell::EMPTY
        });
        self.start = None;
        self.end = None;
        self.dirty = true;
    }

    /// Open `idx` as default-cost floor. Out-of-range offsets are ignored.
    pub fn carve(&mut self, idx: usize) {
        if let Some(cell) = self.cells.get_mut(idx) {
            cell.wall = false;
            cell.cost = COST_NORMAL;
            self.dirty = true;
        }
    }

    // -----------------------------------------------------------------------
    // Overlay mutators
    // -----------------------------------------------------------------------

    /// Mark `idx` as expanded by a search. Walls are never marked.
    pub fn mark_visited(&mut self, idx: usize) {
        self.set_overlay(idx, Overlay::Visited);
    }

    /// Mark `idx` as part of a reconstructed path. Walls are never marked.
    pub fn mark_path(&mut self, idx: usize) {
        self.set_overlay(idx, Overlay::Path);
    }

    fn set_overlay(&mut self, idx: usize, overlay: Overlay) {
        if let Some(cell) = self.cells.get_mut(idx) {
            if !cell.wall {
                cell.overlay = overlay;
                self.dirty = true;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Render buffer
    // -----------------------------------------------------------------------

    /// The render buffer, re-encoded if the grid changed since the last call.
    ///
    /// The borrow ends at the next mutation; re-fetch after every mutating
    /// call.
    pub fn render_buffer(&mut self) -> &[u8] {
        if self.dirty {
            let mut out = std::mem::take(&mut self.render);
            render::encode(&self.cells, self.start, self.end, &mut out);
            self.render = out;
            self.dirty = false;
        }
        &self.render
    }
}
