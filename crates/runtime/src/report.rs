//! Per-tick outcome reporting.
use glam::Vec2;
use hero_core::MoveOutcome;

/// What happened during one call to [`crate::Simulation::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    /// One-based index of the tick just completed.
    pub tick: u64,
    pub outcome: MoveOutcome,
    /// Camera center after the tick; always the player's position.
    pub camera_center: Vec2,
}

impl TickReport {
    pub fn moved(&self) -> bool {
        self.outcome.is_moved()
    }
}

/// Running totals over a sequence of ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickTally {
    pub idle: u64,
    pub stalled: u64,
    pub blocked: u64,
    pub moved: u64,
}

impl TickTally {
    pub fn record(&mut self, report: &TickReport) {
        match report.outcome {
            MoveOutcome::Idle => self.idle += 1,
            MoveOutcome::Stalled { .. } => self.stalled += 1,
            MoveOutcome::Blocked { .. } => self.blocked += 1,
            MoveOutcome::Moved { .. } => self.moved += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.idle + self.stalled + self.blocked + self.moved
    }
}
