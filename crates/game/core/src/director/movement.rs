use glam::Vec2;

use crate::config::SimConfig;
use crate::grid::{GridCoord, world_to_grid};

/// Tunables for one movement step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementSettings {
    /// Length of the prospective step used for probing.
    pub probe_step: f32,
    /// Distance actually covered by a committed move.
    pub move_speed: f32,
}

impl MovementSettings {
    pub const fn new(probe_step: f32, move_speed: f32) -> Self {
        Self {
            probe_step,
            move_speed,
        }
    }
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self::new(SimConfig::DEFAULT_PROBE_STEP, SimConfig::DEFAULT_MOVE_SPEED)
    }
}

impl From<&SimConfig> for MovementSettings {
    fn from(config: &SimConfig) -> Self {
        Self::new(config.probe_step, config.move_speed)
    }
}

/// What the movement resolver did with the player this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// No directional key was held.
    Idle,
    /// A key was held but the probe step is zero; facing changed only.
    Stalled { facing: Vec2 },
    /// Both leading probes landed on water.
    Blocked {
        facing: Vec2,
        probes: [GridCoord; 2],
    },
    Moved { from: Vec2, to: Vec2 },
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Grid cells under the two corners of the actor's leading edge.
///
/// The edge sits `radius` ahead of `prospective` along `facing`; the corners
/// are `radius` to either side of it on the perpendicular axis.
pub fn leading_probes(
    prospective: Vec2,
    facing: Vec2,
    radius: f32,
    tile_size: f32,
) -> [GridCoord; 2] {
    let edge = prospective + facing * radius;
    let side = facing.perp().abs() * radius;
    [
        world_to_grid(edge + side, tile_size),
        world_to_grid(edge - side, tile_size),
    ]
}

/// Displacement committed for a legal move.
pub fn committed_step(facing: Vec2, move_speed: f32) -> Vec2 {
    facing.normalize_or_zero() * move_speed
}
