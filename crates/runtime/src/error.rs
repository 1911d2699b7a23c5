//! Unified error type surfaced by the runtime API.
//!
//! Wraps failures from the core stores and the per-tick director so clients
//! can bubble them up with consistent context.
use hero_core::{DirectorError, ErrorSeverity, GameError, GridError, StageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("map '{map}' must place exactly one start point (found {found})")]
    StartPoint { map: String, found: usize },

    #[error("failed to paint map '{map}'")]
    Bootstrap {
        map: String,
        #[source]
        source: GridError,
    },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Stage(#[from] StageError),

    #[error("tick {tick} failed")]
    Tick {
        tick: u64,
        #[source]
        source: DirectorError,
    },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::StartPoint { .. } => ErrorSeverity::Validation,
            Self::Bootstrap { source, .. } => source.severity(),
            Self::Grid(inner) => inner.severity(),
            Self::Stage(inner) => inner.severity(),
            Self::Tick { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::StartPoint { .. } => "RUNTIME_START_POINT",
            Self::Bootstrap { source, .. } => source.error_code(),
            Self::Grid(inner) => inner.error_code(),
            Self::Stage(inner) => inner.error_code(),
            Self::Tick { source, .. } => source.error_code(),
        }
    }
}
