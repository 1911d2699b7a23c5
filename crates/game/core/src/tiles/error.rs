//! Tile catalog errors.

use crate::error::{ErrorSeverity, GameError};

use super::{FeatureKind, TerrainCategory};

/// Errors raised by [`super::TileLibrary`] lookups.
///
/// The category set is closed and populated at startup, so every variant is
/// a construction bug rather than a runtime condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    #[error("terrain category '{0}' is not registered in the tile library")]
    UnregisteredTerrain(TerrainCategory),

    #[error("feature kind '{0}' is not registered in the tile library")]
    UnregisteredFeature(FeatureKind),

    #[error("tile handle does not belong to this library")]
    ForeignHandle,
}

impl GameError for TileError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnregisteredTerrain(_) => "TILE_UNREGISTERED_TERRAIN",
            Self::UnregisteredFeature(_) => "TILE_UNREGISTERED_FEATURE",
            Self::ForeignHandle => "TILE_FOREIGN_HANDLE",
        }
    }
}
