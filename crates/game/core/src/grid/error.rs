//! Terrain grid errors.

use crate::error::{ErrorSeverity, GameError};
use crate::stage::StageError;
use crate::tiles::{FeatureKind, TileError};

use super::GridCoord;

/// Errors raised by [`super::TerrainGrid`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Coordinate outside the fixed extent. Never clamped.
    #[error("cell {coord} is out of bounds (extent: {extent}x{extent})")]
    OutOfBounds { coord: GridCoord, extent: u32 },

    /// Extent outside `1..=SimConfig::MAX_MAP_SIZE`.
    #[error("grid extent {extent} is outside 1..={max}")]
    InvalidExtent { extent: u32, max: u32 },

    #[error(transparent)]
    Tile(#[from] TileError),

    /// The side effect of a meta feature could not be applied.
    #[error("meta feature '{kind}' at {coord} failed: {source}")]
    MetaFeature {
        kind: FeatureKind,
        coord: GridCoord,
        #[source]
        source: StageError,
    },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfBounds { .. } | Self::InvalidExtent { .. } => ErrorSeverity::Fatal,
            Self::Tile(inner) => inner.severity(),
            Self::MetaFeature { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
            Self::InvalidExtent { .. } => "GRID_INVALID_EXTENT",
            Self::Tile(inner) => inner.error_code(),
            Self::MetaFeature { .. } => "GRID_META_FEATURE_FAILED",
        }
    }
}
