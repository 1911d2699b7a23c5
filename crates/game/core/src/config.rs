use glam::Vec2;

/// Simulation constants and tunable parameters.
///
/// The resolver samples terrain one `probe_step` ahead but commits
/// `move_speed` along the facing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Edge length of one grid cell in world units.
    pub tile_size: f32,
    /// Cells per side of the square grid.
    pub map_extent: u32,
    /// Look-ahead distance used to place the collision probes.
    pub probe_step: f32,
    /// Distance committed per tick when a move is legal.
    pub move_speed: f32,
    /// Collision radius given to newly created actors.
    pub default_radius: f32,
    /// Health written to the player's stat sheet on spawn.
    pub player_health: i32,
    /// Viewport size in pixels, used by the camera transform.
    pub viewport: Vec2,
    /// Half-height, in cells, of the render window around the player.
    pub draw_buffer: u32,
}

impl SimConfig {
    // ===== compile-time constants =====
    pub const TILE_SIZE: f32 = 32.0;
    pub const MAX_MAP_SIZE: u32 = 1000;
    /// Reserved index of the player in the actor registry.
    pub const PLAYER_INDEX: u32 = 0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PROBE_STEP: f32 = 1.0;
    pub const DEFAULT_MOVE_SPEED: f32 = 2.0;
    pub const DEFAULT_RADIUS: f32 = 10.0;
    pub const DEFAULT_PLAYER_HEALTH: i32 = 100;
    pub const DEFAULT_VIEWPORT: Vec2 = Vec2::new(800.0, 480.0);
    pub const DEFAULT_DRAW_BUFFER: u32 = 10;

    pub fn new() -> Self {
        Self {
            tile_size: Self::TILE_SIZE,
            map_extent: Self::MAX_MAP_SIZE,
            probe_step: Self::DEFAULT_PROBE_STEP,
            move_speed: Self::DEFAULT_MOVE_SPEED,
            default_radius: Self::DEFAULT_RADIUS,
            player_health: Self::DEFAULT_PLAYER_HEALTH,
            viewport: Self::DEFAULT_VIEWPORT,
            draw_buffer: Self::DEFAULT_DRAW_BUFFER,
        }
    }

    pub fn with_map_extent(mut self, map_extent: u32) -> Self {
        self.map_extent = map_extent;
        self
    }

    pub fn with_movement(mut self, probe_step: f32, move_speed: f32) -> Self {
        self.probe_step = probe_step;
        self.move_speed = move_speed;
        self
    }

    pub fn with_viewport(mut self, viewport: Vec2) -> Self {
        self.viewport = viewport;
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = SimConfig::default();
        assert_eq!(config.tile_size, 32.0);
        assert_eq!(config.map_extent, 1000);
        assert_eq!(config.probe_step, 1.0);
        assert_eq!(config.move_speed, 2.0);
        assert_eq!(config.default_radius, 10.0);
        assert_eq!(config.player_health, 100);
    }

    #[test]
    fn builders_override_fields() {
        let config = SimConfig::new()
            .with_map_extent(64)
            .with_movement(0.5, 4.0)
            .with_viewport(Vec2::new(320.0, 240.0));
        assert_eq!(config.map_extent, 64);
        assert_eq!(config.probe_step, 0.5);
        assert_eq!(config.move_speed, 4.0);
        assert_eq!(config.viewport, Vec2::new(320.0, 240.0));
    }
}
