//! Status bar state for the HUD collaborator.
//!
//! The HUD owns no game rules. It holds two percentages that the actor
//! registry pushes into it through [`HudSink`]; drawing the bars is left to
//! the frontend, which reads the filled width from here.

/// Write side of the HUD, as seen by the simulation.
pub trait HudSink {
    fn set_health_percent(&mut self, value: f32);
    fn set_stamina_percent(&mut self, value: f32);
}

/// One horizontal percentage bar.
#[derive(Clone, Debug, PartialEq)]
pub struct PercentBar {
    name: &'static str,
    value: f32,
    origin: (i32, i32),
    height: u32,
}

impl PercentBar {
    /// Width of a full bar, in pixels.
    pub const MAX_WIDTH: u32 = 200;
    pub const DEFAULT_HEIGHT: u32 = 16;

    /// Starts full.
    pub fn new(name: &'static str, origin: (i32, i32)) -> Self {
        Self {
            name,
            value: 100.0,
            origin,
            height: Self::DEFAULT_HEIGHT,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Clamps into `[0, 100]`. Returns whether the stored value changed.
    pub fn set(&mut self, value: f32) -> bool {
        let clamped = value.clamp(0.0, 100.0);
        if self.value == clamped {
            return false;
        }
        self.value = clamped;
        true
    }

    /// Filled width in whole pixels.
    pub fn filled_width(&self) -> u32 {
        (self.value * Self::MAX_WIDTH as f32) as u32 / 100
    }

    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Health and stamina bars stacked in the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct HudState {
    health: PercentBar,
    stamina: PercentBar,
}

impl HudState {
    pub fn new() -> Self {
        Self {
            health: PercentBar::new("Health", (0, 0)),
            stamina: PercentBar::new("Stamina", (0, PercentBar::DEFAULT_HEIGHT as i32)),
        }
    }

    pub fn health(&self) -> &PercentBar {
        &self.health
    }

    pub fn stamina(&self) -> &PercentBar {
        &self.stamina
    }

    pub fn bars(&self) -> [&PercentBar; 2] {
        [&self.health, &self.stamina]
    }
}

impl Default for HudState {
    fn default() -> Self {
        Self::new()
    }
}

impl HudSink for HudState {
    fn set_health_percent(&mut self, value: f32) {
        if self.health.set(value) {
            tracing::trace!(value = self.health.value(), "health bar updated");
        }
    }

    fn set_stamina_percent(&mut self, value: f32) {
        if self.stamina.set(value) {
            tracing::trace!(value = self.stamina.value(), "stamina bar updated");
        }
    }
}
