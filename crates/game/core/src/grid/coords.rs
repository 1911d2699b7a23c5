use std::fmt;

use glam::Vec2;

/// Integer cell index on the terrain grid.
///
/// Signed so that world points left of or above the origin still have a
/// representable (out-of-bounds) cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Saturates at the `i32` range instead of wrapping.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cell containing `point`: `floor(world / tile_size)` on each axis.
pub fn world_to_grid(point: Vec2, tile_size: f32) -> GridCoord {
    let cell = (point / tile_size).floor();
    GridCoord::new(cell.x as i32, cell.y as i32)
}

/// World-space center of `coord`.
pub fn grid_to_world(coord: GridCoord, tile_size: f32) -> Vec2 {
    Vec2::new(coord.x as f32, coord.y as f32) * tile_size + Vec2::splat(tile_size / 2.0)
}
