//! Single-session orchestrator.
//!
//! The [`Simulation`] exclusively owns the terrain grid, the actor registry,
//! the camera and the HUD state. Each [`Simulation::tick`] lends them to a
//! [`Director`] for one step; between ticks the frontend reads them through
//! [`Simulation::frame`].

use std::sync::Arc;

use anyhow::Context;
use glam::Vec2;
use hero_content::{ContentFactory, MapScript};
use hero_core::{
    ActorId, ActorKind, ActorRegistry, CameraFollow, Director, HudSink, HudState, KeySnapshot,
    MovementSettings, SimConfig, TerrainGrid, TileLibrary,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::frame::FrameView;
use crate::report::TickReport;

/// One running world.
pub struct Simulation {
    config: SimConfig,
    map: String,
    grid: TerrainGrid,
    actors: ActorRegistry,
    camera: CameraFollow,
    hud: HudState,
    tick: u64,
}

impl Simulation {
    /// Create a new simulation builder
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    /// Loads configuration and map script as described by `runtime` and
    /// boots a session from them.
    ///
    /// Without a content directory the defaults and the built-in starter
    /// island are used.
    pub fn load(runtime: &RuntimeConfig) -> anyhow::Result<Self> {
        let (mut config, script) = match &runtime.content_dir {
            Some(dir) => {
                let factory = ContentFactory::new(dir);
                let config = factory
                    .load_config()
                    .with_context(|| format!("loading config from {}", dir.display()))?;
                let script = factory
                    .load_map(&runtime.map)
                    .with_context(|| format!("loading map '{}'", runtime.map))?;
                (config, script)
            }
            None if runtime.map == MapScript::STARTER_ISLAND => {
                (SimConfig::default(), MapScript::starter_island())
            }
            None => anyhow::bail!(
                "map '{}' requires a content directory (set HERO_CONTENT_DIR)",
                runtime.map
            ),
        };

        if let Some(viewport) = runtime.viewport {
            config.viewport = viewport;
        }

        Self::builder()
            .config(config)
            .script(script)
            .build()
            .context("bootstrapping simulation")
    }

    /// Advances the world by one tick.
    pub fn tick(&mut self, keys: KeySnapshot) -> Result<TickReport> {
        let tick = self.tick + 1;
        let outcome = Director::new(
            &mut self.actors,
            &self.grid,
            &mut self.camera,
            MovementSettings::from(&self.config),
        )
        .tick(keys)
        .map_err(|source| RuntimeError::Tick { tick, source })?;
        self.tick = tick;

        let report = TickReport {
            tick,
            outcome,
            camera_center: self.camera.center(),
        };
        tracing::trace!(tick, ?keys, outcome = ?report.outcome, "tick resolved");
        Ok(report)
    }

    /// Damages an actor; the HUD follows the player's health.
    pub fn apply_damage(&mut self, id: ActorId, amount: i32) -> Result<i32> {
        Ok(self.actors.apply_damage(id, amount, &mut self.hud)?)
    }

    /// Stamina has no rules behind it yet; the frontend may drive the bar.
    pub fn set_stamina_percent(&mut self, value: f32) {
        self.hud.set_stamina_percent(value);
    }

    /// Read-only draw list for the current state.
    pub fn frame(&self) -> Result<FrameView<'_>> {
        Ok(FrameView::capture(
            &self.grid,
            &self.actors,
            &self.camera,
            &self.hud,
            self.config.draw_buffer,
        )?)
    }

    pub fn player_position(&self) -> Result<Vec2> {
        Ok(self.actors.position(ActorId::PLAYER)?)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn map_name(&self) -> &str {
        &self.map
    }

    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    pub fn actors(&self) -> &ActorRegistry {
        &self.actors
    }

    pub fn camera(&self) -> &CameraFollow {
        &self.camera
    }

    pub fn hud(&self) -> &HudState {
        &self.hud
    }

    /// Number of completed ticks.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }
}

/// Builder for [`Simulation`] with flexible configuration.
pub struct SimulationBuilder {
    config: SimConfig,
    library: Option<Arc<TileLibrary>>,
    script: Option<MapScript>,
}

impl SimulationBuilder {
    fn new() -> Self {
        Self {
            config: SimConfig::default(),
            library: None,
            script: None,
        }
    }

    /// Override simulation configuration
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom tile catalog instead of the standard one
    pub fn library(mut self, library: Arc<TileLibrary>) -> Self {
        self.library = Some(library);
        self
    }

    /// Set the placement script (default: the starter island)
    pub fn script(mut self, script: MapScript) -> Self {
        self.script = Some(script);
        self
    }

    /// Build the simulation.
    ///
    /// The player is created before the map is painted so that the start
    /// point can move it; the camera starts on the player.
    pub fn build(self) -> Result<Simulation> {
        let config = self.config;
        let script = self.script.unwrap_or_else(MapScript::starter_island);

        let found = script.start_point_count();
        if found != 1 {
            return Err(RuntimeError::StartPoint {
                map: script.name,
                found,
            });
        }

        let library = self
            .library
            .unwrap_or_else(|| Arc::new(TileLibrary::standard(config.tile_size as u32)));
        let mut grid = TerrainGrid::new(library, config.map_extent, config.tile_size)?;

        let mut actors = ActorRegistry::new(&config);
        let player = actors.create_actor(ActorKind::Player)?;

        let summary = script
            .apply(&mut grid, &mut actors)
            .map_err(|source| RuntimeError::Bootstrap {
                map: script.name.clone(),
                source,
            })?;

        let mut camera = CameraFollow::new(config.viewport);
        camera.set_center(actors.position(player)?);

        let mut hud = HudState::new();
        hud.set_health_percent(actors.stat_sheet(player)?.health_percent());

        tracing::info!(
            map = %script.name,
            extent = config.map_extent,
            terrain_cells = summary.terrain_cells,
            features = summary.features_written,
            "simulation ready"
        );
        tracing::debug!(position = ?camera.center(), "player spawned");

        Ok(Simulation {
            config,
            map: script.name,
            grid,
            actors,
            camera,
            hud,
            tick: 0,
        })
    }
}
