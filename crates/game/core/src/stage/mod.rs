//! Actor registry ("stage"): who is in the world and where.
//!
//! Actors live in a dense arena indexed by [`ActorId`]. Only the registry
//! writes positions; everyone else holds ids.
mod actor;
mod error;
mod registry;

pub use actor::{Actor, ActorId, ActorKind, Gait, StatSheet};
pub use error::StageError;
pub use registry::ActorRegistry;
