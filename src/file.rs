use std::path::Path;

use super::{error::*, helix::*};

impl Cubehelix {
    pub fn from_json(src: &str) -> serde_json::Result<Cubehelix> {
        serde_json::from_str(src)
    }

    pub fn from_ron(src: &str) -> ron::error::SpannedResult<Cubehelix> {
        ron::from_str(src)
    }

    pub fn from_yaml(src: &str) -> Result<Cubehelix, serde_yaml::Error> {
        serde_yaml::from_str(src)
    }

    /// Load parameters from a descriptor file. The format follows the
    /// extension: `.json`, `.ron`, `.yaml` or `.yml`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Cubehelix, ConfigError> {
        let path = path.as_ref();
        let ext = path.extension().ok_or(ConfigError::ExtensionError)?;
        let contents = std::fs::read_to_string(path)?;

        let helix = match ext.to_str() {
            Some("json") => Cubehelix::from_json(&contents)?,
            Some("ron") => Cubehelix::from_ron(&contents)?,
            Some("yaml" | "yml") => Cubehelix::from_yaml(&contents)?,
            _ => return Err(ConfigError::ExtensionError),
        };

        tracing::debug!(path = %path.display(), ?helix, "loaded palette descriptor");
        Ok(helix)
    }
}
