//! Configuration loading and parsing

use crate::config::types::GlobalConfig;
use crate::error::{Error, Result};
use crate::loader::SourceLoader;
use log::debug;

impl GlobalConfig {
    /// Parses a config document. A blank document is an empty config, which
    /// happens when a templated data file renders every directive away.
    pub fn from_yaml(source_path: &str, content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            debug!("'{source_path}' is empty");
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::YamlParseError {
            source_path: source_path.to_string(),
            e,
        })
    }

    /// Fetches and parses the primary config through the given loader.
    pub fn load(loader: &dyn SourceLoader, identifier: &str) -> Result<Self> {
        let source_path = loader.cache_key(identifier);
        debug!("Loading config from {source_path}");
        let content = loader.load(identifier)?;
        Self::from_yaml(&source_path, &content)
    }
}
