use std::fmt;

/// Errors that can occur when generating a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// The grid has no room for a passage lattice; both sides must be at
    /// least 3 cells.
    TooSmall { width: usize, height: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { width, height } => {
                write!(f, "grid {width}x{height} is too small for a maze, need at least 3x3")
            }
        }
    }
}

impl std::error::Error for MazeError {}
