use glam::Vec2;

use crate::grid::GridCoord;

/// Placement-time terrain kind painted onto a cell.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TerrainCategory {
    /// Bare cell with nothing drawn.
    None,
    /// Open sea; fills the map before any placement.
    Ocean,
    Grass,
}

impl TerrainCategory {
    pub(crate) const fn ordinal(self) -> usize {
        self as usize
    }
}

/// Physical rule group a terrain category belongs to.
///
/// Traversability is decided on the class, never on the category.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TerrainClass {
    Void,
    Grass,
    Saltwater,
}

impl TerrainClass {
    pub const fn is_water(self) -> bool {
        matches!(self, Self::Saltwater)
    }
}

/// Overlay kinds that can be placed on top of a cell's terrain.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FeatureKind {
    /// Empty overlay slot.
    None,
    /// Meta feature: marks where the player enters the map.
    StartPoint,
    /// Decorative ground cover.
    Flowers,
}

impl FeatureKind {
    pub(crate) const fn ordinal(self) -> usize {
        self as usize
    }

    /// Meta features are never written to the grid or drawn.
    pub const fn is_meta(self) -> bool {
        matches!(self, Self::StartPoint)
    }

    /// Side effect triggered by placing this kind, if it is a meta feature.
    pub fn meta_effect(self, cell: GridCoord, world: Vec2) -> Option<MetaEffect> {
        match self {
            Self::StartPoint => Some(MetaEffect::SpawnPlayer { cell, world }),
            Self::None | Self::Flowers => None,
        }
    }
}

/// Effect requested by a meta feature placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MetaEffect {
    /// Relocate the player to the center of `cell`.
    SpawnPlayer { cell: GridCoord, world: Vec2 },
}
