use glam::Vec2;

use crate::config::SimConfig;
use crate::grid::MetaFeatureHandler;
use crate::hud::HudSink;
use crate::tiles::MetaEffect;

use super::{Actor, ActorId, ActorKind, StageError, StatSheet};

/// Arena owning every actor, its position and its stat sheet.
///
/// The slot index is the actor id. Position and stat sheet live on the same
/// record, so creating an actor creates both in one push and neither can be
/// orphaned. Actors are never removed.
#[derive(Clone, Debug)]
pub struct ActorRegistry {
    actors: Vec<Actor>,
    default_radius: f32,
    player_health: i32,
}

impl ActorRegistry {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            actors: Vec::with_capacity(1),
            default_radius: config.default_radius,
            player_health: config.player_health,
        }
    }

    /// Allocates the next id and a fresh actor at the world origin.
    pub fn create_actor(&mut self, kind: ActorKind) -> Result<ActorId, StageError> {
        let count = self.actors.len();
        let id = u32::try_from(count)
            .map(ActorId)
            .map_err(|_| StageError::IdOverflow { count })?;

        let health = match kind {
            ActorKind::Player => self.player_health,
        };
        self.actors
            .push(Actor::new(kind, id, self.default_radius, health));

        tracing::debug!(%id, %kind, "actor created");
        Ok(id)
    }

    pub fn actor(&self, id: ActorId) -> Result<&Actor, StageError> {
        let count = self.actors.len();
        self.actors
            .get(id.index())
            .ok_or(StageError::ActorNotFound { id, count })
    }

    /// Mutable access for facing, sprite and locomotion. Position stays
    /// behind [`Self::teleport`] and [`Self::move_actor`].
    pub fn actor_mut(&mut self, id: ActorId) -> Result<&mut Actor, StageError> {
        let count = self.actors.len();
        self.actors
            .get_mut(id.index())
            .ok_or(StageError::ActorNotFound { id, count })
    }

    pub fn position(&self, id: ActorId) -> Result<Vec2, StageError> {
        self.actor(id).map(Actor::position)
    }

    /// Absolute position write.
    pub fn teleport(&mut self, id: ActorId, point: Vec2) -> Result<(), StageError> {
        self.actor_mut(id)?.position = point;
        tracing::trace!(%id, x = point.x, y = point.y, "actor teleported");
        Ok(())
    }

    /// Additive position write.
    pub fn move_actor(&mut self, id: ActorId, displacement: Vec2) -> Result<Vec2, StageError> {
        let actor = self.actor_mut(id)?;
        actor.position += displacement;
        Ok(actor.position)
    }

    pub fn stat_sheet(&self, id: ActorId) -> Result<&StatSheet, StageError> {
        self.actor(id).map(Actor::stats)
    }

    /// Subtracts `amount` from the actor's health and mirrors the player's
    /// health onto the HUD.
    ///
    /// No floor or death rule is applied here; the HUD clamps what it shows.
    pub fn apply_damage(
        &mut self,
        id: ActorId,
        amount: i32,
        hud: &mut dyn HudSink,
    ) -> Result<i32, StageError> {
        let actor = self.actor_mut(id)?;
        actor.stats.health = actor.stats.health.saturating_sub(amount);
        let stats = actor.stats;

        if id.is_player() {
            hud.set_health_percent(stats.health_percent());
        }
        tracing::debug!(%id, amount, health = stats.health, "damage applied");
        Ok(stats.health)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> + '_ {
        self.actors.iter()
    }

    /// Position column of the arena, keyed by actor id.
    pub fn positions(&self) -> impl Iterator<Item = (ActorId, Vec2)> + '_ {
        self.actors.iter().map(|actor| (actor.id(), actor.position()))
    }

    /// Stat sheet column of the arena, keyed by actor id.
    pub fn stat_sheets(&self) -> impl Iterator<Item = &StatSheet> + '_ {
        self.actors.iter().map(Actor::stats)
    }
}

impl MetaFeatureHandler for ActorRegistry {
    fn handle_meta_feature(&mut self, effect: MetaEffect) -> Result<(), StageError> {
        match effect {
            MetaEffect::SpawnPlayer { cell, world } => {
                tracing::debug!(%cell, "moving player to start point");
                self.teleport(ActorId::PLAYER, world)
            }
        }
    }
}
