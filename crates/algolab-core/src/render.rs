//! The render byte encoding: one byte per cell, the only contract between
//! the engine and any renderer.
//!
//! | Byte | Meaning |
//! |---|---|
//! | 0 | empty floor (cost 1) |
//! | 1 | wall |
//! | 2 | start |
//! | 3 | end |
//! | 4 | visited by the last search |
//! | 5 | on the reconstructed path |
//! | 6 | terrain class A: `1 < cost < 4` (mud) |
//! | 7 | terrain class B: `cost >= 4` (water) |
//!
//! When several states apply to one cell the highest in this order wins:
//! wall, start, end, path, visited, terrain, empty. Existing values never
//! change meaning; a new cell semantic gets a new byte.

use crate::cell::{COST_NORMAL, Cell, CellKind, Overlay};

/// Costs at or above this value render as terrain class B.
pub const TERRAIN_CLASS_B_MIN: f32 = 4.0;

/// A render byte value.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderCode {
    Empty = 0,
    Wall = 1,
    Start = 2,
    End = 3,
    Visited = 4,
    Path = 5,
    TerrainA = 6,
    TerrainB = 7,
}

impl RenderCode {
    /// Every code, indexed by its byte value.
    pub const ALL: [RenderCode; 8] = [
        Self::Empty,
        Self::Wall,
        Self::Start,
        Self::End,
        Self::Visited,
        Self::Path,
        Self::TerrainA,
        Self::TerrainB,
    ];

    /// The byte written into the buffer.
    #[inline]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Decode a byte, or `None` for values outside the enumeration.
    pub fn from_byte(b: u8) -> Option<Self> {
        Self::ALL.get(b as usize).copied()
    }

    /// Terrain class for a traversal cost, `None` for plain floor.
    pub fn terrain_class(cost: f32) -> Option<Self> {
        if cost >= TERRAIN_CLASS_B_MIN {
            Some(Self::TerrainB)
        } else if cost > COST_NORMAL {
            Some(Self::TerrainA)
        } else {
            None
        }
    }

    /// Code for a cell whose structural kind is already resolved.
    pub fn for_cell(kind: CellKind, cell: &Cell) -> Self {
        match kind {
            CellKind::Wall => Self::Wall,
            CellKind::Start => Self::Start,
            CellKind::End => Self::End,
            CellKind::Empty => match cell.overlay {
                Overlay::Path => Self::Path,
                Overlay::Visited => Self::Visited,
                Overlay::Unvisited => Self::terrain_class(cell.cost).unwrap_or(Self::Empty),
            },
        }
    }
}

/// Encode `cells` into `out`, which must have the same length.
pub(crate) fn encode(
    cells: &[Cell],
    start: Option<usize>,
    end: Option<usize>,
    out: &mut [u8],
) {
    debug_assert_eq!(cells.len(), out.len());
    for (i, (cell, byte)) in cells.iter().zip(out.iter_mut()).enumerate() {
        let kind = CellKind::resolve(cell, i, start, end);
        *byte = RenderCode::for_cell(kind, cell).as_byte();
    }
}
