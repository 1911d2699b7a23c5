//! Deterministic simulation core for the hero tile world.
//!
//! `hero-core` owns the rules: the interned tile catalog, the terrain grid,
//! the actor registry, the camera and the per-tick [`director::Director`]
//! that resolves movement against terrain. It performs no I/O; content
//! loading and session wiring live in the `hero-content` and `hero-runtime`
//! crates, which depend on the types re-exported here.
pub mod camera;
pub mod config;
pub mod director;
pub mod error;
pub mod grid;
pub mod hud;
pub mod input;
pub mod sprite;
pub mod stage;
pub mod tiles;

pub use camera::CameraFollow;
pub use config::SimConfig;
pub use director::{Director, DirectorError, MoveOutcome, MovementSettings};
pub use error::{ErrorSeverity, GameError};
pub use grid::{
    CellView, FeaturePlacement, GridCoord, GridError, MetaFeatureHandler, TerrainGrid,
    grid_to_world, world_to_grid,
};
pub use hud::{HudSink, HudState, PercentBar};
pub use input::{Direction, KeySnapshot};
pub use sprite::{SourceRect, SpriteRef};
pub use stage::{Actor, ActorId, ActorKind, ActorRegistry, Gait, StageError, StatSheet};
pub use tiles::{
    FeatureHandle, FeatureKind, FeatureTile, MetaEffect, TerrainCategory, TerrainClass,
    TerrainHandle, TerrainTile, TileError, TileLibrary, TileLibraryBuilder,
};
