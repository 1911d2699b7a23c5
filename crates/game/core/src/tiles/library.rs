use strum::EnumCount;

use crate::sprite::{SourceRect, SpriteRef};

use super::{FeatureKind, TerrainCategory, TerrainClass, TileError};

/// Sprite sheet holding the floor tiles.
pub const TERRAIN_SHEET: &str = "terrain";
/// Sprite sheet holding overlay features.
pub const FEATURE_SHEET: &str = "features";

/// Interned floor covering shared by every cell of the same category.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainTile {
    category: TerrainCategory,
    class: TerrainClass,
    sprite: Option<SpriteRef>,
}

impl TerrainTile {
    pub const fn new(
        category: TerrainCategory,
        class: TerrainClass,
        sprite: Option<SpriteRef>,
    ) -> Self {
        Self {
            category,
            class,
            sprite,
        }
    }

    pub fn category(&self) -> TerrainCategory {
        self.category
    }

    pub fn class(&self) -> TerrainClass {
        self.class
    }

    /// `None` for categories that are never drawn.
    pub fn sprite(&self) -> Option<SpriteRef> {
        self.sprite
    }
}

/// Interned overlay tile.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureTile {
    kind: FeatureKind,
    sprite: SpriteRef,
}

impl FeatureTile {
    pub const fn new(kind: FeatureKind, sprite: SpriteRef) -> Self {
        Self { kind, sprite }
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    pub fn sprite(&self) -> SpriteRef {
        self.sprite
    }
}

/// Index of an interned terrain tile inside its [`TileLibrary`].
///
/// Two handles from the same library are equal exactly when they name the
/// same tile instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TerrainHandle(u8);

/// Index of an interned feature tile inside its [`TileLibrary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeatureHandle(u8);

/// Closed catalog of terrain and feature tiles.
///
/// Each category is interned once at construction; every lookup afterwards
/// hands out the same instance. Looking up a category that was never
/// registered is a construction bug and surfaces as a fatal [`TileError`].
#[derive(Clone, Debug)]
pub struct TileLibrary {
    terrain: Vec<TerrainTile>,
    terrain_index: [Option<TerrainHandle>; TerrainCategory::COUNT],
    features: Vec<FeatureTile>,
    feature_index: [Option<FeatureHandle>; FeatureKind::COUNT],
}

impl TileLibrary {
    pub fn builder() -> TileLibraryBuilder {
        TileLibraryBuilder::default()
    }

    /// Library with every shipped category registered.
    ///
    /// `None` terrain has no sprite; grass and ocean sit side by side on the
    /// terrain sheet.
    pub fn standard(tile_size: u32) -> Self {
        Self::builder()
            .terrain(TerrainCategory::None, TerrainClass::Void, None)
            .terrain(
                TerrainCategory::Grass,
                TerrainClass::Grass,
                Some(SpriteRef::new(
                    TERRAIN_SHEET,
                    SourceRect::from_cell(0, 0, tile_size),
                )),
            )
            .terrain(
                TerrainCategory::Ocean,
                TerrainClass::Saltwater,
                Some(SpriteRef::new(
                    TERRAIN_SHEET,
                    SourceRect::from_cell(1, 0, tile_size),
                )),
            )
            .feature(
                FeatureKind::Flowers,
                SpriteRef::new(FEATURE_SHEET, SourceRect::from_cell(0, 0, tile_size)),
            )
            .build()
    }

    pub fn terrain_handle(&self, category: TerrainCategory) -> Result<TerrainHandle, TileError> {
        self.terrain_index[category.ordinal()].ok_or(TileError::UnregisteredTerrain(category))
    }

    pub fn terrain_tile(&self, category: TerrainCategory) -> Result<&TerrainTile, TileError> {
        let handle = self.terrain_handle(category)?;
        self.terrain(handle)
    }

    pub fn terrain(&self, handle: TerrainHandle) -> Result<&TerrainTile, TileError> {
        self.terrain
            .get(usize::from(handle.0))
            .ok_or(TileError::ForeignHandle)
    }

    /// Resolves a feature kind to its interned tile.
    ///
    /// `FeatureKind::None` resolves to `Ok(None)`: the empty overlay is a
    /// valid cell value. Meta kinds have no tile and fail.
    pub fn feature_handle(&self, kind: FeatureKind) -> Result<Option<FeatureHandle>, TileError> {
        if kind == FeatureKind::None {
            return Ok(None);
        }
        self.feature_index[kind.ordinal()]
            .map(Some)
            .ok_or(TileError::UnregisteredFeature(kind))
    }

    pub fn feature_tile(&self, kind: FeatureKind) -> Result<Option<&FeatureTile>, TileError> {
        match self.feature_handle(kind)? {
            Some(handle) => self.feature(handle).map(Some),
            None => Ok(None),
        }
    }

    pub fn feature(&self, handle: FeatureHandle) -> Result<&FeatureTile, TileError> {
        self.features
            .get(usize::from(handle.0))
            .ok_or(TileError::ForeignHandle)
    }

    /// Water test used by the movement resolver.
    pub fn is_water_terrain(&self, class: TerrainClass) -> bool {
        class.is_water()
    }

    pub fn terrain_count(&self) -> usize {
        self.terrain.len()
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

/// Collects tile registrations before interning them.
///
/// Registering the same category twice keeps the last registration; the
/// library still holds exactly one instance per category.
#[derive(Debug, Default)]
pub struct TileLibraryBuilder {
    terrain: Vec<TerrainTile>,
    features: Vec<FeatureTile>,
}

impl TileLibraryBuilder {
    pub fn terrain(
        mut self,
        category: TerrainCategory,
        class: TerrainClass,
        sprite: Option<SpriteRef>,
    ) -> Self {
        self.terrain.retain(|tile| tile.category != category);
        self.terrain.push(TerrainTile::new(category, class, sprite));
        self
    }

    /// Meta kinds and `None` are ignored: they never occupy a cell.
    pub fn feature(mut self, kind: FeatureKind, sprite: SpriteRef) -> Self {
        if kind.is_meta() || kind == FeatureKind::None {
            tracing::warn!(%kind, "ignoring tile registration for non-drawable feature");
            return self;
        }
        self.features.retain(|tile| tile.kind != kind);
        self.features.push(FeatureTile::new(kind, sprite));
        self
    }

    pub fn build(self) -> TileLibrary {
        let mut terrain_index = [None; TerrainCategory::COUNT];
        for (slot, tile) in self.terrain.iter().enumerate() {
            terrain_index[tile.category.ordinal()] = Some(TerrainHandle(slot as u8));
        }

        let mut feature_index = [None; FeatureKind::COUNT];
        for (slot, tile) in self.features.iter().enumerate() {
            feature_index[tile.kind.ordinal()] = Some(FeatureHandle(slot as u8));
        }

        TileLibrary {
            terrain: self.terrain,
            terrain_index,
            features: self.features,
            feature_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn standard_library_registers_every_terrain_category() {
        let library = TileLibrary::standard(32);
        for category in TerrainCategory::iter() {
            let tile = library.terrain_tile(category).unwrap();
            assert_eq!(tile.category(), category);
        }
        assert_eq!(library.terrain_count(), TerrainCategory::COUNT);
    }

    #[test]
    fn lookups_return_the_same_instance() {
        let library = TileLibrary::standard(32);
        let first = library.terrain_tile(TerrainCategory::Grass).unwrap();
        let second = library.terrain_tile(TerrainCategory::Grass).unwrap();
        assert!(std::ptr::eq(first, second));

        let ocean = library.terrain_tile(TerrainCategory::Ocean).unwrap();
        assert!(!std::ptr::eq(first, ocean));
    }

    #[test]
    fn ocean_is_saltwater_with_second_sheet_cell() {
        let library = TileLibrary::standard(32);
        let ocean = library.terrain_tile(TerrainCategory::Ocean).unwrap();
        assert_eq!(ocean.class(), TerrainClass::Saltwater);
        assert!(library.is_water_terrain(ocean.class()));
        let sprite = ocean.sprite().unwrap();
        assert_eq!(sprite.sheet, TERRAIN_SHEET);
        assert_eq!(sprite.source, SourceRect::new(32, 0, 32, 32));
        assert!(library.terrain_tile(TerrainCategory::None).unwrap().sprite().is_none());
    }

    #[test]
    fn unregistered_terrain_fails() {
        let library = TileLibrary::builder()
            .terrain(TerrainCategory::Ocean, TerrainClass::Saltwater, None)
            .build();
        assert_eq!(
            library.terrain_tile(TerrainCategory::Grass),
            Err(TileError::UnregisteredTerrain(TerrainCategory::Grass))
        );
    }

    #[test]
    fn feature_none_resolves_to_empty_overlay() {
        let library = TileLibrary::standard(32);
        assert_eq!(library.feature_handle(FeatureKind::None), Ok(None));
        assert!(library.feature_tile(FeatureKind::Flowers).unwrap().is_some());
        assert_eq!(
            library.feature_handle(FeatureKind::StartPoint),
            Err(TileError::UnregisteredFeature(FeatureKind::StartPoint))
        );
    }

    #[test]
    fn re_registration_keeps_one_instance() {
        let library = TileLibrary::builder()
            .terrain(TerrainCategory::Grass, TerrainClass::Void, None)
            .terrain(TerrainCategory::Grass, TerrainClass::Grass, None)
            .build();
        assert_eq!(library.terrain_count(), 1);
        assert_eq!(
            library.terrain_tile(TerrainCategory::Grass).unwrap().class(),
            TerrainClass::Grass
        );
    }
}
