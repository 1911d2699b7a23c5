//! Data-driven content for the hero tile world.
//!
//! This crate houses the static map layouts and the loaders that read them:
//! - Placement scripts that paint terrain and features onto a grid
//! - The built-in starter island
//! - Simulation configuration (data-driven via TOML)
//! - Map scripts (data-driven via RON)
//!
//! Content is applied to the grid once at bootstrap and never appears in the
//! per-tick state.

pub mod layout;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use layout::{MapScript, Placement, PlacementSummary};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, MapLoader};
