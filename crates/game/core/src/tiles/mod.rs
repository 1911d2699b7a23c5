//! Terrain and feature catalog.
//!
//! Tile kinds are closed enums; their physical behaviour is a pure function of
//! the kind, looked up in the [`TileLibrary`] table. Cells in the grid store
//! handles into the library so that "same category" is an identity test.
mod error;
mod kinds;
mod library;

pub use error::TileError;
pub use kinds::{FeatureKind, MetaEffect, TerrainCategory, TerrainClass};
pub use library::{
    FEATURE_SHEET, FeatureHandle, FeatureTile, TERRAIN_SHEET, TerrainHandle, TerrainTile,
    TileLibrary, TileLibraryBuilder,
};
