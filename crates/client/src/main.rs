//! Hero headless client binary.
//!
//! Boots one simulation session, feeds it scripted key input for a number of
//! ticks and reports where the player ended up.
//!
//! # Examples
//!
//! ```bash
//! # Walk north across the starter island
//! cargo run -p hero-client -- --keys "w*120"
//!
//! # Play a custom map from a content directory
//! HERO_CONTENT_DIR=./content cargo run -p hero-client -- --map cove --keys "d*10 s*10"
//! ```

mod logging;
mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hero_core::{ActorId, KeySnapshot};
use hero_runtime::{RuntimeConfig, Simulation, TickTally};

/// Headless driver for the hero tile world
#[derive(Parser, Debug)]
#[command(name = "hero")]
#[command(about = "Run the hero simulation with scripted input", long_about = None)]
#[command(version)]
struct Args {
    /// Key script, e.g. "w*20 wd*5 . d*3" (one step per tick)
    #[arg(short, long, conflicts_with = "keys_file")]
    keys: Option<String>,

    /// Read the key script from a file
    #[arg(long)]
    keys_file: Option<PathBuf>,

    /// Idle ticks to run when no key script is given
    #[arg(short, long, default_value = "60")]
    ticks: usize,

    /// Content directory holding config.toml and maps/ (overrides HERO_CONTENT_DIR)
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Map script to load (overrides HERO_MAP)
    #[arg(short, long)]
    map: Option<String>,

    /// Damage dealt to the player before the first tick
    #[arg(long, default_value = "0")]
    damage: i32,

    /// Also write logs to <LOG_DIR>/hero.log
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let _guard = logging::setup_logging(args.log_dir.as_deref(), args.verbose)?;

    let mut runtime_config = RuntimeConfig::from_env();
    if let Some(dir) = args.content_dir.clone() {
        runtime_config.content_dir = Some(dir);
    }
    if let Some(map) = args.map.clone() {
        runtime_config.map = map;
    }

    let input = load_input(&args)?;
    tracing::info!(map = %runtime_config.map, ticks = input.len(), "Starting hero session");

    let mut sim = Simulation::load(&runtime_config)?;
    if args.damage != 0 {
        sim.apply_damage(ActorId::PLAYER, args.damage)?;
    }

    let mut tally = TickTally::default();
    for keys in input {
        let report = sim.tick(keys)?;
        tally.record(&report);
        tracing::debug!(tick = report.tick, outcome = ?report.outcome, "tick");
    }

    let position = sim.player_position()?;
    let cell = sim.grid().world_to_grid(position);
    let frame = sim.frame()?;

    println!("map:      {}", sim.map_name());
    println!("ticks:    {}", sim.tick_count());
    println!(
        "outcomes: moved {} / blocked {} / idle {} / stalled {}",
        tally.moved, tally.blocked, tally.idle, tally.stalled
    );
    println!(
        "player:   ({:.1}, {:.1}) in cell {}",
        position.x, position.y, cell
    );
    for bar in frame.bars {
        println!(
            "{:<9} {:>5.1}% ({} px)",
            format!("{}:", bar.name().to_lowercase()),
            bar.value(),
            bar.filled_width()
        );
    }
    println!("draws:    {}", frame.commands.len());

    tracing::info!("Session complete");
    Ok(())
}

fn load_input(args: &Args) -> Result<Vec<KeySnapshot>> {
    let source = match (&args.keys, &args.keys_file) {
        (Some(keys), _) => keys.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read key script {}", path.display()))?,
        (None, None) => return Ok(vec![KeySnapshot::empty(); args.ticks]),
    };
    script::parse(&source)
}
