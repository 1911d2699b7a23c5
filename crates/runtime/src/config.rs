//! Session configuration sourced from the environment.
use std::env;
use std::path::PathBuf;

use glam::Vec2;
use hero_content::MapScript;

/// Runtime configuration shared by the session loader and the client.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Directory holding `config.toml` and `maps/`. `None` uses built-in content.
    pub content_dir: Option<PathBuf>,
    /// Map script to bootstrap from.
    pub map: String,
    /// Viewport override applied on top of the loaded simulation config.
    pub viewport: Option<Vec2>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            map: MapScript::STARTER_ISLAND.to_string(),
            viewport: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct runtime configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HERO_CONTENT_DIR` - content directory (default: built-in content)
    /// - `HERO_MAP` - map script name (default: `starter_island`)
    /// - `HERO_VIEWPORT_WIDTH`, `HERO_VIEWPORT_HEIGHT` - viewport in pixels;
    ///   both must be set to take effect
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("HERO_CONTENT_DIR").filter(|dir| !dir.is_empty()) {
            config.content_dir = Some(PathBuf::from(dir));
        }
        if let Some(map) = lookup("HERO_MAP").filter(|map| !map.is_empty()) {
            config.map = map;
        }

        let width = read_var::<f32>(&lookup, "HERO_VIEWPORT_WIDTH");
        let height = read_var::<f32>(&lookup, "HERO_VIEWPORT_HEIGHT");
        if let (Some(width), Some(height)) = (width, height)
            && width > 0.0
            && height > 0.0
        {
            config.viewport = Some(Vec2::new(width, height));
        }

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(RuntimeConfig::from_lookup(lookup(&[])), RuntimeConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            ("HERO_CONTENT_DIR", "/srv/hero"),
            ("HERO_MAP", "cove"),
            ("HERO_VIEWPORT_WIDTH", "1280"),
            ("HERO_VIEWPORT_HEIGHT", "720"),
        ]));
        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/hero")));
        assert_eq!(config.map, "cove");
        assert_eq!(config.viewport, Some(Vec2::new(1280.0, 720.0)));
    }

    #[test]
    fn partial_or_invalid_viewport_is_ignored() {
        let config = RuntimeConfig::from_lookup(lookup(&[("HERO_VIEWPORT_WIDTH", "1280")]));
        assert_eq!(config.viewport, None);

        let config = RuntimeConfig::from_lookup(lookup(&[
            ("HERO_VIEWPORT_WIDTH", "wide"),
            ("HERO_VIEWPORT_HEIGHT", "720"),
        ]));
        assert_eq!(config.viewport, None);
    }
}
