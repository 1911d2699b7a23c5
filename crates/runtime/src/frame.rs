//! Read-only per-tick snapshot for the rendering collaborator.
//!
//! A [`FrameView`] lists sprite draws for the cells around the player and
//! for every actor, ordered back to front, together with the camera
//! transform and the HUD bars. Nothing here mutates simulation state.

use glam::{Mat4, Vec2};
use hero_core::{
    ActorId, ActorRegistry, CameraFollow, GridCoord, GridError, HudState, PercentBar, SourceRect,
    TerrainGrid,
};

/// Depth band a draw belongs to. Lower layers are drawn first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrawLayer {
    Floor,
    Feature,
    Actor,
}

impl DrawLayer {
    /// Normalized depth, back (0.0) to front.
    pub const fn depth(self) -> f32 {
        match self {
            DrawLayer::Floor => 0.0,
            DrawLayer::Feature => 0.1,
            DrawLayer::Actor => 0.2,
        }
    }
}

/// Half-open rectangle of cells, `min` inclusive and `max` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawWindow {
    pub min: GridCoord,
    pub max: GridCoord,
}

impl DrawWindow {
    /// `4 * buffer` cells wide and `2 * buffer` tall, with `center` at
    /// offset `(2 * buffer, buffer)` from the top-left corner.
    pub fn around(center: GridCoord, buffer: u32) -> Self {
        let buffer = i32::try_from(buffer)
            .unwrap_or(i32::MAX)
            .min(i32::MAX / 4);
        Self {
            min: center.offset(-2 * buffer, -buffer),
            max: center.offset(2 * buffer, buffer),
        }
    }

    /// Intersection with the `[0, extent)` square.
    pub fn clamped(self, extent: u32) -> Self {
        let extent = i32::try_from(extent).unwrap_or(i32::MAX);
        let clamp = |value: i32| value.clamp(0, extent);
        let min = GridCoord::new(clamp(self.min.x), clamp(self.min.y));
        let max = GridCoord::new(clamp(self.max.x).max(min.x), clamp(self.max.y).max(min.y));
        Self { min, max }
    }

    pub fn width(&self) -> u32 {
        self.max.x.saturating_sub(self.min.x).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        self.max.y.saturating_sub(self.min.y).max(0) as u32
    }

    pub fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (self.min.y..self.max.y)
            .flat_map(move |y| (self.min.x..self.max.x).map(move |x| GridCoord::new(x, y)))
    }
}

/// Who a draw belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawSource {
    Cell(GridCoord),
    Actor(ActorId),
}

/// One sprite blit in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub layer: DrawLayer,
    pub source: DrawSource,
    pub sheet: &'static str,
    pub region: SourceRect,
    /// World position of the sprite's top-left corner.
    pub top_left: Vec2,
}

/// Everything a frontend needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameView<'a> {
    pub transform: Mat4,
    pub window: DrawWindow,
    pub commands: Vec<DrawCommand>,
    pub bars: [&'a PercentBar; 2],
}

impl<'a> FrameView<'a> {
    pub(crate) fn capture(
        grid: &TerrainGrid,
        actors: &ActorRegistry,
        camera: &CameraFollow,
        hud: &'a HudState,
        draw_buffer: u32,
    ) -> Result<Self, GridError> {
        let player = actors
            .position(ActorId::PLAYER)
            .map(|position| grid.world_to_grid(position))
            .unwrap_or_else(|_| grid.world_to_grid(camera.center()));
        let window = DrawWindow::around(player, draw_buffer).clamped(grid.extent());

        let tile_size = grid.tile_size();
        let mut commands = Vec::new();
        for coord in window.cells() {
            let cell = grid.cell(coord)?;
            let top_left = Vec2::new(coord.x as f32, coord.y as f32) * tile_size;

            if let Some(sprite) = cell.terrain.sprite() {
                commands.push(DrawCommand {
                    layer: DrawLayer::Floor,
                    source: DrawSource::Cell(coord),
                    sheet: sprite.sheet,
                    region: sprite.source,
                    top_left,
                });
            }
            if let Some(feature) = cell.feature {
                let sprite = feature.sprite();
                commands.push(DrawCommand {
                    layer: DrawLayer::Feature,
                    source: DrawSource::Cell(coord),
                    sheet: sprite.sheet,
                    region: sprite.source,
                    top_left,
                });
            }
        }

        for actor in actors.iter() {
            let sprite = actor.sprite();
            commands.push(DrawCommand {
                layer: DrawLayer::Actor,
                source: DrawSource::Actor(actor.id()),
                sheet: sprite.sheet,
                region: sprite.source,
                top_left: actor.position() - actor.center(),
            });
        }

        // Stable: cells keep row-major order within a layer.
        commands.sort_by_key(|command| command.layer);

        Ok(Self {
            transform: camera.translation_matrix(),
            window,
            commands,
            bars: hud.bars(),
        })
    }

    pub fn layer(&self, layer: DrawLayer) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(move |command| command.layer == layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_four_by_two_buffers() {
        let window = DrawWindow::around(GridCoord::new(500, 500), 10);
        assert_eq!(window.min, GridCoord::new(480, 490));
        assert_eq!(window.max, GridCoord::new(520, 510));
        assert_eq!(window.width(), 40);
        assert_eq!(window.height(), 20);
        assert_eq!(window.cells().count(), 800);
    }

    #[test]
    fn clamping_keeps_window_on_the_grid() {
        let window = DrawWindow::around(GridCoord::new(1, 1), 10).clamped(16);
        assert_eq!(window.min, GridCoord::ORIGIN);
        assert_eq!(window.max, GridCoord::new(16, 11));
        assert!(window.cells().all(|cell| cell.x < 16 && cell.y < 11));
    }

    #[test]
    fn window_fully_off_grid_is_empty() {
        let window = DrawWindow::around(GridCoord::new(-100, -100), 2).clamped(8);
        assert_eq!(window.width(), 0);
        assert_eq!(window.cells().count(), 0);
    }

    #[test]
    fn huge_buffer_covers_the_whole_grid() {
        let window = DrawWindow::around(GridCoord::new(2, 2), 1_500_000_000).clamped(4);
        assert_eq!(window.min, GridCoord::ORIGIN);
        assert_eq!(window.max, GridCoord::new(4, 4));

        let window = DrawWindow::around(GridCoord::new(2, 2), u32::MAX);
        assert!(window.min.x < 0 && window.max.x > 4);
    }

    #[test]
    fn layers_are_ordered_back_to_front() {
        assert!(DrawLayer::Floor < DrawLayer::Feature);
        assert!(DrawLayer::Feature.depth() < DrawLayer::Actor.depth());
    }
}
