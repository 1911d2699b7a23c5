//! Map script loader.
//!
//! Loads placement sequences from RON files. Terrain not mentioned by a
//! script stays ocean.

use std::path::Path;

use crate::layout::MapScript;
use crate::loaders::{LoadResult, read_file};

/// Loader for map scripts from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map script from a RON file.
    ///
    /// The script must contain exactly one start point.
    pub fn load(path: &Path) -> LoadResult<MapScript> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MapScript> {
        let script: MapScript = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let start_points = script.start_point_count();
        if start_points != 1 {
            anyhow::bail!(
                "map '{}' must contain exactly one start point (found {})",
                script.name,
                start_points
            );
        }

        Ok(script)
    }
}
