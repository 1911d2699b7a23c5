//! Per-tick directional key snapshot.
use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Which of the four movement keys are held this tick.
    ///
    /// Produced by the frontend after polling the device; the simulation
    /// never polls.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct KeySnapshot: u8 {
        const UP    = 1 << 0;
        const DOWN  = 1 << 1;
        const LEFT  = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl KeySnapshot {
    pub fn from_keys(up: bool, down: bool, left: bool, right: bool) -> Self {
        let mut keys = Self::empty();
        keys.set(Self::UP, up);
        keys.set(Self::DOWN, down);
        keys.set(Self::LEFT, left);
        keys.set(Self::RIGHT, right);
        keys
    }

    /// Single direction the keys resolve to, with priority up > down > left > right.
    pub fn resolve_direction(self) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|direction| self.contains(direction.key()))
    }
}

/// Screen-space movement direction. Y grows downwards.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "up", serialize = "w")]
    Up,
    #[strum(to_string = "down", serialize = "s")]
    Down,
    #[strum(to_string = "left", serialize = "a")]
    Left,
    #[strum(to_string = "right", serialize = "d")]
    Right,
}

impl Direction {
    /// Resolution order when several keys are held.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn key(self) -> KeySnapshot {
        match self {
            Direction::Up => KeySnapshot::UP,
            Direction::Down => KeySnapshot::DOWN,
            Direction::Left => KeySnapshot::LEFT,
            Direction::Right => KeySnapshot::RIGHT,
        }
    }

    pub const fn unit_vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}
