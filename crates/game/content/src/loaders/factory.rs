//! Content factory for loading simulation content from a data directory.

use std::path::{Path, PathBuf};

use hero_core::SimConfig;

use crate::layout::MapScript;
use crate::loaders::{ConfigLoader, LoadResult, MapLoader};

/// Content factory that loads all simulation content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── maps/
///     ├── starter_island.ron
///     └── cove.ron
/// ```
///
/// Both files are optional: a missing `config.toml` means defaults, and the
/// starter island is built in.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn map_path(&self, map_name: &str) -> PathBuf {
        self.data_dir.join("maps").join(format!("{}.ron", map_name))
    }

    /// Load simulation configuration from `config.toml`, or defaults when
    /// the file does not exist.
    pub fn load_config(&self) -> LoadResult<SimConfig> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(SimConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a map from `maps/{map_name}.ron`.
    ///
    /// Falls back to the built-in layout for the starter island when no file
    /// overrides it.
    pub fn load_map(&self, map_name: &str) -> LoadResult<MapScript> {
        let path = self.map_path(map_name);
        if !path.exists() && map_name == MapScript::STARTER_ISLAND {
            return Ok(MapScript::starter_island());
        }
        MapLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.map_path("cove"), Path::new("/tmp/data/maps/cove.ron"));
    }

    #[test]
    fn empty_directory_uses_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), SimConfig::default());
        assert_eq!(
            factory.load_map(MapScript::STARTER_ISLAND).unwrap(),
            MapScript::starter_island()
        );
    }

    #[test]
    fn unknown_map_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_map("atlantis").is_err());
    }

    #[test]
    fn files_override_builtins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("maps")).unwrap();
        std::fs::write(dir.path().join("config.toml"), "map_extent = 16\n").unwrap();
        std::fs::write(
            dir.path().join("maps/starter_island.ron"),
            r#"MapScript(name: "tiny", placements: [Feature(at: (x: 1, y: 1), kind: StartPoint)])"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().map_extent, 16);
        assert_eq!(factory.load_map(MapScript::STARTER_ISLAND).unwrap().name, "tiny");
    }
}
