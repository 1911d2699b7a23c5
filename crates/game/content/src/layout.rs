//! Placement scripts that paint the initial map.
//!
//! A [`MapScript`] is an ordered list of terrain and feature writes. Applying
//! it to a freshly initialized (all-ocean) grid produces the starting world;
//! the single start-point placement is turned into a player teleport by the
//! grid's meta-feature handling.

use hero_core::{
    FeatureKind, FeaturePlacement, GridCoord, GridError, MetaFeatureHandler, TerrainCategory,
    TerrainGrid,
};

/// One write against the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Paint a single cell.
    Terrain {
        at: GridCoord,
        category: TerrainCategory,
    },
    /// Paint every cell with `from.x <= x < to.x` and `from.y <= y < to.y`.
    TerrainRect {
        from: GridCoord,
        to: GridCoord,
        category: TerrainCategory,
    },
    /// Place an overlay or trigger a meta feature.
    Feature { at: GridCoord, kind: FeatureKind },
}

/// Counts of what a script did to the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlacementSummary {
    pub terrain_cells: usize,
    pub features_written: usize,
    pub meta_triggered: usize,
}

/// Named placement sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapScript {
    pub name: String,
    pub placements: Vec<Placement>,
}

impl MapScript {
    pub const STARTER_ISLAND: &'static str = "starter_island";

    /// Grass island around the start point at (500, 500).
    pub fn starter_island() -> Self {
        Self {
            name: Self::STARTER_ISLAND.to_string(),
            placements: vec![
                Placement::Feature {
                    at: GridCoord::new(500, 500),
                    kind: FeatureKind::StartPoint,
                },
                Placement::TerrainRect {
                    from: GridCoord::new(497, 494),
                    to: GridCoord::new(505, 504),
                    category: TerrainCategory::Grass,
                },
            ],
        }
    }

    /// Number of start-point placements; a playable script has exactly one.
    pub fn start_point_count(&self) -> usize {
        self.placements
            .iter()
            .filter(|placement| {
                matches!(
                    placement,
                    Placement::Feature {
                        kind: FeatureKind::StartPoint,
                        ..
                    }
                )
            })
            .count()
    }

    /// Runs every placement in order. Stops at the first failing write.
    pub fn apply(
        &self,
        grid: &mut TerrainGrid,
        handler: &mut dyn MetaFeatureHandler,
    ) -> Result<PlacementSummary, GridError> {
        let mut summary = PlacementSummary::default();

        for placement in &self.placements {
            match *placement {
                Placement::Terrain { at, category } => {
                    grid.set_terrain(at, category)?;
                    summary.terrain_cells += 1;
                }
                Placement::TerrainRect { from, to, category } => {
                    for y in from.y..to.y {
                        for x in from.x..to.x {
                            grid.set_terrain(GridCoord::new(x, y), category)?;
                            summary.terrain_cells += 1;
                        }
                    }
                }
                Placement::Feature { at, kind } => match grid.set_feature(at, kind, handler)? {
                    FeaturePlacement::Written => summary.features_written += 1,
                    FeaturePlacement::Triggered(_) => summary.meta_triggered += 1,
                },
            }
        }

        Ok(summary)
    }
}
