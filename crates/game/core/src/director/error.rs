//! Error types for the per-tick director.

use crate::error::{ErrorSeverity, GameError};
use crate::grid::GridError;
use crate::stage::StageError;

/// Errors surfaced while advancing the simulation by one tick.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DirectorError {
    /// Actor 0 has not been created; nothing can be driven.
    #[error("player actor is not registered")]
    PlayerMissing,

    #[error("actor registry rejected the update: {0}")]
    Stage(#[from] StageError),

    /// A probe or lookup left the grid.
    #[error("terrain query failed: {0}")]
    Grid(#[from] GridError),
}

impl GameError for DirectorError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PlayerMissing => ErrorSeverity::Fatal,
            Self::Stage(inner) => inner.severity(),
            Self::Grid(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PlayerMissing => "DIRECTOR_PLAYER_MISSING",
            Self::Stage(inner) => inner.error_code(),
            Self::Grid(inner) => inner.error_code(),
        }
    }
}
