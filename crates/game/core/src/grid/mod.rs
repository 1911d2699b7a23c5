//! Terrain grid: the static map the actors walk on.
//!
//! Cells are addressed by [`GridCoord`]; world-space points map onto cells
//! through a fixed tile edge length. All writes are bounds-checked.
mod coords;
mod error;
mod map;

pub use coords::{GridCoord, grid_to_world, world_to_grid};
pub use error::GridError;
pub use map::{CellView, FeaturePlacement, MetaFeatureHandler, TerrainGrid};
