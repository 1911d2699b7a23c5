use std::fmt;

use glam::Vec2;

use crate::sprite::{SourceRect, SpriteRef};

/// Stable identifier of an actor; also its slot in the registry arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl ActorId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);

    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Archetype requested at creation; drives the default sprite.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActorKind {
    Player,
}

impl ActorKind {
    /// Sprite sheet and starting frame for the kind.
    pub const fn default_sprite(self) -> SpriteRef {
        match self {
            Self::Player => SpriteRef::new("avatar", SourceRect::new(64, 0, 32, 32)),
        }
    }
}

/// Locomotion mode, consumed by the renderer to pick an animation.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Gait {
    #[default]
    Walking,
    Running,
    Jumping,
    Swimming,
    Riding,
    Crawling,
    Flying,
}

/// Per-actor vitals. Exactly one per actor, keyed by the same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSheet {
    pub id: ActorId,
    pub health: i32,
    pub max_health: i32,
}

impl StatSheet {
    pub const fn new(id: ActorId, health: i32) -> Self {
        Self {
            id,
            health,
            max_health: health,
        }
    }

    /// Health as a percentage of the maximum; zero when the maximum is not positive.
    pub fn health_percent(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        self.health as f32 * 100.0 / self.max_health as f32
    }
}

/// One simulated entity.
///
/// Position is readable by anyone but only the registry can write it, through
/// `teleport` and `move_actor`.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    id: ActorId,
    kind: ActorKind,
    pub(super) position: Vec2,
    facing: Vec2,
    radius: f32,
    sprite: SpriteRef,
    center: Vec2,
    locomotion: Gait,
    pub(super) stats: StatSheet,
}

impl Actor {
    pub(super) fn new(kind: ActorKind, id: ActorId, radius: f32, health: i32) -> Self {
        let sprite = kind.default_sprite();
        Self {
            id,
            kind,
            position: Vec2::ZERO,
            facing: Vec2::ZERO,
            radius,
            center: sprite.source.center(),
            sprite,
            locomotion: Gait::default(),
            stats: StatSheet::new(id, health),
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Unit vector of the last movement intent, or zero.
    pub fn facing(&self) -> Vec2 {
        self.facing
    }

    pub fn set_facing(&mut self, facing: Vec2) {
        self.facing = facing;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    pub fn sprite(&self) -> SpriteRef {
        self.sprite
    }

    /// Swaps the active frame; the draw center follows the new region.
    pub fn set_source(&mut self, source: SourceRect) {
        self.sprite.source = source;
        self.center = source.center();
    }

    /// Offset from the sprite's top-left corner to the actor's position.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn locomotion(&self) -> Gait {
        self.locomotion
    }

    pub fn set_locomotion(&mut self, gait: Gait) {
        self.locomotion = gait;
    }

    pub fn stats(&self) -> &StatSheet {
        &self.stats
    }
}
