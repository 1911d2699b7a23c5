//! Session orchestration for the hero tile-world simulation.
//!
//! This crate wires the core stores, the content loaders and the per-tick
//! director into a single [`Simulation`]. Consumers build one, feed it a key
//! snapshot per frame, and read a [`FrameView`] back for drawing.
//!
//! Modules are organized by responsibility:
//! - [`simulation`] hosts the orchestrator and builder
//! - [`config`] reads session settings from the environment
//! - [`frame`] exposes the read-only render snapshot
//! - [`report`] carries per-tick outcomes
pub mod config;
pub mod error;
pub mod frame;
pub mod report;
pub mod simulation;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use frame::{DrawCommand, DrawLayer, DrawSource, DrawWindow, FrameView};
pub use report::{TickReport, TickTally};
pub use simulation::{Simulation, SimulationBuilder};
