use approx::assert_relative_eq;
use glam::Vec2;
use hero_core::{
    ActorId, FeatureKind, GridCoord, KeySnapshot, MoveOutcome, SimConfig, TerrainCategory,
};
use hero_runtime::{DrawLayer, DrawSource, RuntimeConfig, Simulation, TickTally};

const START: Vec2 = Vec2::new(16016.0, 16016.0);

fn starter_island() -> Simulation {
    Simulation::builder()
        .build()
        .expect("starter island should boot")
}

fn run(sim: &mut Simulation, keys: KeySnapshot, ticks: usize) -> TickTally {
    let mut tally = TickTally::default();
    for _ in 0..ticks {
        let report = sim.tick(keys).expect("tick should succeed");
        tally.record(&report);
    }
    tally
}

#[test]
fn player_spawns_on_the_start_point() {
    let sim = starter_island();

    assert_eq!(sim.player_position().unwrap(), START);
    assert_eq!(
        sim.grid().world_to_grid(START),
        GridCoord::new(500, 500)
    );
    assert!(
        sim.grid()
            .feature_at(GridCoord::new(500, 500))
            .unwrap()
            .is_none()
    );
    assert_eq!(sim.actors().stat_sheet(ActorId::PLAYER).unwrap().health, 100);
    assert_eq!(sim.hud().health().value(), 100.0);
}

#[test]
fn island_is_grass_surrounded_by_ocean() {
    let sim = starter_island();
    let category = |x, y| {
        sim.grid()
            .terrain_at(GridCoord::new(x, y))
            .unwrap()
            .category()
    };

    assert_eq!(category(497, 494), TerrainCategory::Grass);
    assert_eq!(category(504, 503), TerrainCategory::Grass);
    assert_eq!(category(496, 494), TerrainCategory::Ocean);
    assert_eq!(category(500, 504), TerrainCategory::Ocean);
    assert_eq!(category(0, 0), TerrainCategory::Ocean);
}

#[test]
fn walking_north_stops_at_the_shore() {
    let mut sim = starter_island();
    let tally = run(&mut sim, KeySnapshot::UP, 150);

    assert_eq!(tally.moved, 99);
    assert_eq!(tally.blocked, 51);
    assert_eq!(sim.player_position().unwrap(), Vec2::new(16016.0, 15818.0));

    let report = sim.tick(KeySnapshot::UP).unwrap();
    assert!(matches!(report.outcome, MoveOutcome::Blocked { .. }));
    assert_eq!(report.tick, 151);
}

#[test]
fn walking_east_stops_at_the_shore() {
    let mut sim = starter_island();
    let tally = run(&mut sim, KeySnapshot::RIGHT, 100);

    assert_eq!(tally.moved, 67);
    assert_eq!(sim.player_position().unwrap(), Vec2::new(16150.0, 16016.0));
}

#[test]
fn camera_tracks_the_player_every_tick() {
    let mut sim = starter_island();
    for keys in [
        KeySnapshot::LEFT,
        KeySnapshot::DOWN,
        KeySnapshot::empty(),
        KeySnapshot::UP | KeySnapshot::RIGHT,
    ] {
        let report = sim.tick(keys).unwrap();
        assert_eq!(report.camera_center, sim.player_position().unwrap());
    }
    assert_eq!(sim.player_position().unwrap(), Vec2::new(16014.0, 16016.0));
}

#[test]
fn idle_ticks_change_nothing() {
    let mut sim = starter_island();
    let tally = run(&mut sim, KeySnapshot::empty(), 10);

    assert_eq!(tally.idle, 10);
    assert_eq!(tally.total(), 10);
    assert_eq!(sim.player_position().unwrap(), START);
    assert_eq!(
        sim.actors().actor(ActorId::PLAYER).unwrap().facing(),
        Vec2::ZERO
    );
}

#[test]
fn frame_covers_the_draw_window_around_the_player() {
    let sim = starter_island();
    let frame = sim.frame().unwrap();

    assert_eq!(frame.window.min, GridCoord::new(480, 490));
    assert_eq!(frame.window.max, GridCoord::new(520, 510));
    assert_eq!(frame.layer(DrawLayer::Floor).count(), 800);
    assert_eq!(frame.layer(DrawLayer::Feature).count(), 0);

    let actors: Vec<_> = frame.layer(DrawLayer::Actor).collect();
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].source, DrawSource::Actor(ActorId::PLAYER));
    assert_eq!(actors[0].sheet, "avatar");
    assert_eq!(actors[0].top_left, START - Vec2::new(16.0, 16.0));

    let last = frame.commands.last().unwrap();
    assert_eq!(last.layer, DrawLayer::Actor);

    let screen = frame.transform.transform_point3(START.extend(0.0));
    assert_relative_eq!(screen.x, 400.0);
    assert_relative_eq!(screen.y, 240.0);
    assert_eq!(frame.bars[0].name(), "Health");
}

#[test]
fn load_uses_content_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("maps")).unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "map_extent = 12\ndraw_buffer = 2\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("maps/cove.ron"),
        r#"MapScript(
            name: "cove",
            placements: [
                TerrainRect(from: (x: 2, y: 2), to: (x: 6, y: 6), category: Grass),
                Feature(at: (x: 3, y: 4), kind: Flowers),
                Feature(at: (x: 4, y: 4), kind: StartPoint),
            ],
        )"#,
    )
    .unwrap();

    let runtime = RuntimeConfig {
        content_dir: Some(dir.path().to_path_buf()),
        map: "cove".to_string(),
        viewport: Some(Vec2::new(320.0, 200.0)),
    };
    let sim = Simulation::load(&runtime).unwrap();

    assert_eq!(sim.config().map_extent, 12);
    assert_eq!(sim.config().viewport, Vec2::new(320.0, 200.0));
    assert_eq!(sim.player_position().unwrap(), Vec2::new(144.0, 144.0));
    assert_eq!(
        sim.grid()
            .feature_at(GridCoord::new(3, 4))
            .unwrap()
            .map(|tile| tile.kind()),
        Some(FeatureKind::Flowers)
    );

    let frame = sim.frame().unwrap();
    assert_eq!(frame.window.min, GridCoord::new(0, 2));
    assert_eq!(frame.window.max, GridCoord::new(8, 6));
    let features: Vec<_> = frame.layer(DrawLayer::Feature).collect();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0].source, DrawSource::Cell(GridCoord::new(3, 4)));
}

#[test]
fn load_without_content_dir_only_knows_the_starter_island() {
    let sim = Simulation::load(&RuntimeConfig::default()).unwrap();
    assert_eq!(sim.config(), &SimConfig::default());
    assert_eq!(sim.map_name(), "starter_island");

    let runtime = RuntimeConfig {
        map: "cove".to_string(),
        ..RuntimeConfig::default()
    };
    let err = Simulation::load(&runtime).err().unwrap();
    assert!(err.to_string().contains("requires a content directory"));
}

#[test]
fn walking_off_a_map_edge_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("maps")).unwrap();
    std::fs::write(dir.path().join("config.toml"), "map_extent = 4\n").unwrap();
    std::fs::write(
        dir.path().join("maps/edge.ron"),
        r#"MapScript(
            name: "edge",
            placements: [
                TerrainRect(from: (x: 0, y: 0), to: (x: 4, y: 4), category: Grass),
                Feature(at: (x: 0, y: 1), kind: StartPoint),
            ],
        )"#,
    )
    .unwrap();

    let mut sim = Simulation::load(&RuntimeConfig {
        content_dir: Some(dir.path().to_path_buf()),
        map: "edge".to_string(),
        viewport: None,
    })
    .unwrap();

    // Center of cell (0, 1) is x = 16; the leading edge leaves the grid once
    // x - 1 - 10 < 0.
    let mut last = None;
    for _ in 0..10 {
        match sim.tick(KeySnapshot::LEFT) {
            Ok(report) => last = Some(report),
            Err(err) => {
                assert!(err.to_string().contains("failed"));
                assert!(last.is_some());
                assert_eq!(sim.player_position().unwrap(), Vec2::new(10.0, 48.0));
                return;
            }
        }
    }
    panic!("expected the probe to leave the grid");
}
