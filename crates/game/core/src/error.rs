//! Shared error classification for hero-core.
//!
//! Each component keeps its own error enum beside its code (`TileError`,
//! `GridError`, `StageError`, `DirectorError`). They all report a
//! [`ErrorSeverity`] through [`GameError`] so the runtime and the client can
//! decide whether to stop the session without matching on every variant.
//!
//! Precondition violations (a cell outside the grid, an actor id past the
//! registry, a tile kind the library never interned) are `Fatal`. They are
//! reported at the call that broke the rule and never clamped.

/// How a caller should react to an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Try again later or with other input.
    Recoverable,

    /// Malformed input such as a map script without a start point.
    Validation,

    /// Stores disagree with each other; a bug in this crate.
    Internal,

    /// A precondition was broken and the session cannot go on.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Internal and fatal errors both point at a bug, in the caller or here.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Implemented by every error enum in the simulation crates.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for logs; defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
