use std::sync::Arc;

use glam::Vec2;

use crate::config::SimConfig;
use crate::stage::StageError;
use crate::tiles::{
    FeatureHandle, FeatureKind, FeatureTile, MetaEffect, TerrainCategory, TerrainHandle,
    TerrainTile, TileLibrary,
};

use super::{GridCoord, GridError, grid_to_world, world_to_grid};

/// Receiver for meta-feature side effects raised during placement.
///
/// The grid never reaches into the actor registry itself; whoever paints the
/// map passes the handler in.
pub trait MetaFeatureHandler {
    fn handle_meta_feature(&mut self, effect: MetaEffect) -> Result<(), StageError>;
}

/// Outcome of [`TerrainGrid::set_feature`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeaturePlacement {
    /// The overlay was written to the cell.
    Written,
    /// A meta feature fired its effect; the cell is untouched.
    Triggered(MetaEffect),
}

/// Borrowed view of one cell for the rendering collaborator.
#[derive(Clone, Copy, Debug)]
pub struct CellView<'a> {
    pub coord: GridCoord,
    pub terrain: &'a TerrainTile,
    pub feature: Option<&'a FeatureTile>,
}

/// Fixed-extent square grid of interned terrain and feature tiles.
///
/// Every cell holds a valid terrain handle from construction onwards (ocean)
/// and an optional feature handle (empty).
#[derive(Clone, Debug)]
pub struct TerrainGrid {
    library: Arc<TileLibrary>,
    extent: u32,
    tile_size: f32,
    terrain: Vec<TerrainHandle>,
    features: Vec<Option<FeatureHandle>>,
}

impl TerrainGrid {
    /// Allocates an `extent`×`extent` grid filled with ocean and no features.
    ///
    /// `extent` must lie in `1..=SimConfig::MAX_MAP_SIZE`.
    pub fn new(library: Arc<TileLibrary>, extent: u32, tile_size: f32) -> Result<Self, GridError> {
        if extent == 0 || extent > SimConfig::MAX_MAP_SIZE {
            return Err(GridError::InvalidExtent {
                extent,
                max: SimConfig::MAX_MAP_SIZE,
            });
        }
        let ocean = library.terrain_handle(TerrainCategory::Ocean)?;
        let empty = library.feature_handle(FeatureKind::None)?;
        let cells = extent as usize * extent as usize;

        tracing::debug!(extent, tile_size, "initialized terrain grid");

        Ok(Self {
            library,
            extent,
            tile_size,
            terrain: vec![ocean; cells],
            features: vec![empty; cells],
        })
    }

    pub fn library(&self) -> &TileLibrary {
        &self.library
    }

    pub fn extent(&self) -> u32 {
        self.extent
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.extent
            && (coord.y as u32) < self.extent
    }

    pub fn world_to_grid(&self, point: Vec2) -> GridCoord {
        world_to_grid(point, self.tile_size)
    }

    pub fn grid_to_world(&self, coord: GridCoord) -> Vec2 {
        grid_to_world(coord, self.tile_size)
    }

    pub fn set_terrain(
        &mut self,
        coord: GridCoord,
        category: TerrainCategory,
    ) -> Result<(), GridError> {
        let index = self.index(coord)?;
        self.terrain[index] = self.library.terrain_handle(category)?;
        Ok(())
    }

    /// Places an overlay, or fires the side effect of a meta feature.
    ///
    /// Bounds are checked before anything else, so a meta feature can never
    /// move an actor off the grid.
    pub fn set_feature(
        &mut self,
        coord: GridCoord,
        kind: FeatureKind,
        handler: &mut dyn MetaFeatureHandler,
    ) -> Result<FeaturePlacement, GridError> {
        let index = self.index(coord)?;

        if let Some(effect) = kind.meta_effect(coord, self.grid_to_world(coord)) {
            tracing::debug!(%kind, %coord, "meta feature placed");
            handler
                .handle_meta_feature(effect)
                .map_err(|source| GridError::MetaFeature {
                    kind,
                    coord,
                    source,
                })?;
            return Ok(FeaturePlacement::Triggered(effect));
        }

        self.features[index] = self.library.feature_handle(kind)?;
        Ok(FeaturePlacement::Written)
    }

    pub fn terrain_handle_at(&self, coord: GridCoord) -> Result<TerrainHandle, GridError> {
        let index = self.index(coord)?;
        Ok(self.terrain[index])
    }

    pub fn terrain_at(&self, coord: GridCoord) -> Result<&TerrainTile, GridError> {
        let handle = self.terrain_handle_at(coord)?;
        Ok(self.library.terrain(handle)?)
    }

    pub fn feature_handle_at(&self, coord: GridCoord) -> Result<Option<FeatureHandle>, GridError> {
        let index = self.index(coord)?;
        Ok(self.features[index])
    }

    pub fn feature_at(&self, coord: GridCoord) -> Result<Option<&FeatureTile>, GridError> {
        match self.feature_handle_at(coord)? {
            Some(handle) => Ok(Some(self.library.feature(handle)?)),
            None => Ok(None),
        }
    }

    pub fn cell(&self, coord: GridCoord) -> Result<CellView<'_>, GridError> {
        Ok(CellView {
            coord,
            terrain: self.terrain_at(coord)?,
            feature: self.feature_at(coord)?,
        })
    }

    /// Water test on the cell's current terrain classification.
    pub fn is_water_at(&self, coord: GridCoord) -> Result<bool, GridError> {
        let tile = self.terrain_at(coord)?;
        Ok(self.library.is_water_terrain(tile.class()))
    }

    fn index(&self, coord: GridCoord) -> Result<usize, GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                extent: self.extent,
            });
        }
        Ok(coord.y as usize * self.extent as usize + coord.x as usize)
    }
}
