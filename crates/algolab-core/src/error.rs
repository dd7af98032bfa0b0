use std::fmt;

/// Reasons a grid operation was refused. A refused operation leaves the
/// grid exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    /// A grid needs at least one column and one row.
    InvalidDimensions { width: usize, height: usize },
    /// The linear index is outside `0..len`.
    OutOfRange { idx: i64, len: usize },
    /// The cell holds the start or end marker and cannot become a wall.
    Occupied { idx: usize },
    /// The cell is a wall and cannot carry terrain.
    NotTraversable { idx: usize },
    /// The terrain cost is not a finite number.
    InvalidCost { cost: f32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive and fit in i32, got {width}x{height}")
            }
            Self::OutOfRange { idx, len } => {
                write!(f, "cell index {idx} out of range 0..{len}")
            }
            Self::Occupied { idx } => {
                write!(f, "cell {idx} holds the start or end marker")
            }
            Self::NotTraversable { idx } => write!(f, "cell {idx} is a wall"),
            Self::InvalidCost { cost } => write!(f, "invalid terrain cost {cost}"),
        }
    }
}

impl std::error::Error for GridError {}
