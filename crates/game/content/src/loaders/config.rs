//! Simulation configuration loader.

use std::path::Path;

use hero_core::SimConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for simulation configuration from TOML files.
///
/// Every field is optional; missing keys keep their [`SimConfig::default`]
/// values.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SimConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SimConfig> {
        let config: SimConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(config.tile_size.is_finite() && config.tile_size > 0.0) {
            anyhow::bail!("tile_size must be positive (got {})", config.tile_size);
        }
        if config.map_extent == 0 || config.map_extent > SimConfig::MAX_MAP_SIZE {
            anyhow::bail!(
                "map_extent must be within 1..={} (got {})",
                SimConfig::MAX_MAP_SIZE,
                config.map_extent
            );
        }
        if !(config.default_radius.is_finite() && config.default_radius > 0.0) {
            anyhow::bail!(
                "default_radius must be positive (got {})",
                config.default_radius
            );
        }
        for (name, value) in [
            ("probe_step", config.probe_step),
            ("move_speed", config.move_speed),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                anyhow::bail!("{name} must be finite and non-negative (got {value})");
            }
        }
        if config.draw_buffer > SimConfig::MAX_MAP_SIZE {
            anyhow::bail!(
                "draw_buffer must be at most {} (got {})",
                SimConfig::MAX_MAP_SIZE,
                config.draw_buffer
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), SimConfig::default());
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let config = ConfigLoader::parse(
            r#"
            map_extent = 64
            move_speed = 3.5
            viewport = [640.0, 360.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.map_extent, 64);
        assert_eq!(config.move_speed, 3.5);
        assert_eq!(config.viewport.x, 640.0);
        assert_eq!(config.probe_step, SimConfig::DEFAULT_PROBE_STEP);
    }

    #[test]
    fn rejects_non_positive_tile_size() {
        let err = ConfigLoader::parse("tile_size = 0.0").unwrap_err();
        assert!(err.to_string().contains("tile_size"));
    }

    #[test]
    fn rejects_extent_above_max_map_size() {
        let err = ConfigLoader::parse("map_extent = 5000000").unwrap_err();
        assert!(err.to_string().contains("map_extent"));
        assert!(ConfigLoader::parse("map_extent = 0").is_err());
        assert_eq!(
            ConfigLoader::parse("map_extent = 1000").unwrap().map_extent,
            SimConfig::MAX_MAP_SIZE
        );
    }

    #[test]
    fn rejects_unusable_movement_settings() {
        for (content, field) in [
            ("probe_step = nan", "probe_step"),
            ("probe_step = -1.0", "probe_step"),
            ("move_speed = inf", "move_speed"),
            ("move_speed = -2.0", "move_speed"),
        ] {
            let err = ConfigLoader::parse(content).unwrap_err();
            assert!(err.to_string().contains(field), "{content}: {err}");
        }
        assert_eq!(
            ConfigLoader::parse("probe_step = 0.0").unwrap().probe_step,
            0.0
        );
    }

    #[test]
    fn rejects_oversized_draw_buffer() {
        let err = ConfigLoader::parse("map_extent = 4\ndraw_buffer = 1500000000").unwrap_err();
        assert!(err.to_string().contains("draw_buffer"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player_health = 250").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.player_health, 250);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
