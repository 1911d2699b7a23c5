//! Visual references handed to the rendering collaborator.
//!
//! The core never loads textures; it only remembers which sheet and which
//! rectangle of that sheet an actor or tile uses.
use glam::Vec2;

/// Rectangle inside a sprite sheet, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SourceRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square region addressed by sheet cell coordinates.
    pub const fn from_cell(cell_x: u32, cell_y: u32, cell_size: u32) -> Self {
        Self::new(cell_x * cell_size, cell_y * cell_size, cell_size, cell_size)
    }

    /// Offset from the top-left corner to the middle of the region.
    ///
    /// Halves are taken in whole pixels.
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }
}

/// Named sheet plus the region drawn from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpriteRef {
    pub sheet: &'static str,
    pub source: SourceRect,
}

impl SpriteRef {
    pub const fn new(sheet: &'static str, source: SourceRect) -> Self {
        Self { sheet, source }
    }
}
