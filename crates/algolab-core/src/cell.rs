//! Per-cell state: structure, search overlay and traversal cost.

/// Cost of a plain floor cell and the lowest cost any cell may carry.
pub const COST_NORMAL: f32 = 1.0;
/// Preset cost for mud terrain.
pub const COST_MUD: f32 = 3.0;
/// Preset cost for water terrain.
pub const COST_WATER: f32 = 5.0;

/// Structural state of a cell as seen by the host.
///
/// Start and End are held by the grid as single indices, so at most one
/// cell reports each of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Empty,
    Wall,
    Start,
    End,
}

impl CellKind {
    /// Structural kind of `cell` at offset `idx`. A wall outranks the
    /// markers, and Start outranks End.
    #[inline]
    pub fn resolve(cell: &Cell, idx: usize, start: Option<usize>, end: Option<usize>) -> Self {
        if cell.wall {
            Self::Wall
        } else if start == Some(idx) {
            Self::Start
        } else if end == Some(idx) {
            Self::End
        } else {
            Self::Empty
        }
    }
}

/// Transient search-visualization state, cleared independently of structure.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overlay {
    #[default]
    Unvisited,
    Visited,
    Path,
}

/// A single grid cell.
///
/// A wall keeps the cost it had before being raised, so lowering it again
/// restores the terrain underneath. Walls are never traversable whatever
/// their cost.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell {
    pub wall: bool,
    pub overlay: Overlay,
    pub cost: f32,
}

impl Cell {
    /// An open floor cell with the default cost.
    pub const EMPTY: Self = Self {
        wall: false,
        overlay: Overlay::Unvisited,
        cost: COST_NORMAL,
    };

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_traversable(&self) -> bool {
        !self.wall
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_ranks_wall_then_start_then_end() {
        let mut cell = Cell::EMPTY;
        assert_eq!(CellKind::resolve(&cell, 2, Some(2), Some(2)), CellKind::Start);
        assert_eq!(CellKind::resolve(&cell, 2, None, Some(2)), CellKind::End);
        assert_eq!(CellKind::resolve(&cell, 2, Some(1), Some(3)), CellKind::Empty);
        cell.wall = true;
        assert_eq!(CellKind::resolve(&cell, 2, Some(2), Some(2)), CellKind::Wall);
    }
}
