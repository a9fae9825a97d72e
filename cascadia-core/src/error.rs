//! Error types for board and tile operations

use crate::board::HexCoord;

/// Errors raised at construction and mutation boundaries.
///
/// Scoring never fails, so there is no scoring variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CascadiaError {
    /// Malformed coordinate, edge index, rotation or identifier
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Tile placement onto a coordinate that already holds a tile
    #[error("There is already a tile at {0}")]
    OccupiedCell(HexCoord),

    /// Token not allowed on the tile, or the tile already holds one
    #[error("Invalid token placement: {0}")]
    InvalidPlacement(String),
}

pub type Result<T> = std::result::Result<T, CascadiaError>;

impl CascadiaError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        CascadiaError::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_placement(msg: impl Into<String>) -> Self {
        CascadiaError::InvalidPlacement(msg.into())
    }
}
