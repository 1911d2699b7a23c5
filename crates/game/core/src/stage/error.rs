//! Actor registry errors.

use crate::error::{ErrorSeverity, GameError};

use super::ActorId;

/// Errors raised by [`super::ActorRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StageError {
    /// Id outside the current actor count.
    #[error("actor {id} not found (registered actors: {count})")]
    ActorNotFound { id: ActorId, count: usize },

    /// Actor ids are `u32`; the arena cannot grow past that.
    #[error("actor id space exhausted (current: {count})")]
    IdOverflow { count: usize },
}

impl GameError for StageError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound { .. } => "STAGE_ACTOR_NOT_FOUND",
            Self::IdOverflow { .. } => "STAGE_ID_OVERFLOW",
        }
    }
}
