//! Per-tick orchestration of input, movement and camera.
//!
//! The [`Director`] borrows the stores it drives for the duration of a tick.
//! Each tick reads the key snapshot, resolves one movement step for the
//! player against the terrain grid, commits it through the actor registry,
//! and snaps the camera onto the player.

mod error;
mod movement;

pub use error::DirectorError;
pub use movement::{MoveOutcome, MovementSettings, committed_step, leading_probes};

use glam::Vec2;

use crate::camera::CameraFollow;
use crate::grid::TerrainGrid;
use crate::input::KeySnapshot;
use crate::stage::{ActorId, ActorRegistry};

/// Drives the player for one tick.
pub struct Director<'a> {
    actors: &'a mut ActorRegistry,
    grid: &'a TerrainGrid,
    camera: &'a mut CameraFollow,
    settings: MovementSettings,
}

impl<'a> Director<'a> {
    pub fn new(
        actors: &'a mut ActorRegistry,
        grid: &'a TerrainGrid,
        camera: &'a mut CameraFollow,
        settings: MovementSettings,
    ) -> Self {
        Self {
            actors,
            grid,
            camera,
            settings,
        }
    }

    /// Runs one tick: movement first, then the camera.
    ///
    /// A missing player is fatal. An empty snapshot leaves every actor
    /// untouched.
    pub fn tick(&mut self, keys: KeySnapshot) -> Result<MoveOutcome, DirectorError> {
        if self.actors.actor(ActorId::PLAYER).is_err() {
            return Err(DirectorError::PlayerMissing);
        }

        let outcome = self.resolve_movement(keys)?;
        let center = self.actors.position(ActorId::PLAYER)?;
        self.camera.set_center(center);
        Ok(outcome)
    }

    /// Facing is written only once the terrain queries have succeeded, so a
    /// failed tick leaves the player as it was.
    fn resolve_movement(&mut self, keys: KeySnapshot) -> Result<MoveOutcome, DirectorError> {
        let Some(direction) = keys.resolve_direction() else {
            return Ok(MoveOutcome::Idle);
        };
        let facing = direction.unit_vector();

        let player = self.actors.actor(ActorId::PLAYER)?;
        let position = player.position();
        let radius = player.radius();

        let displacement = facing * self.settings.probe_step;
        if displacement == Vec2::ZERO {
            self.actors.actor_mut(ActorId::PLAYER)?.set_facing(facing);
            return Ok(MoveOutcome::Stalled { facing });
        }

        let probes = leading_probes(
            position + displacement,
            facing,
            radius,
            self.grid.tile_size(),
        );
        let blocked = self.grid.is_water_at(probes[0])? && self.grid.is_water_at(probes[1])?;
        self.actors.actor_mut(ActorId::PLAYER)?.set_facing(facing);
        if blocked {
            tracing::trace!(%direction, ?probes, "movement blocked by water");
            return Ok(MoveOutcome::Blocked { facing, probes });
        }

        let step = committed_step(facing, self.settings.move_speed);
        let to = self.actors.move_actor(ActorId::PLAYER, step)?;
        Ok(MoveOutcome::Moved { from: position, to })
    }
}
