use crate::error::{Error, Result};
use crate::loader::interface::SourceLoader;
use std::path::{Path, PathBuf};

/// Loader reading from the local filesystem.
///
/// Identifiers are resolved relative to `root` when one is set, and used as
/// plain paths otherwise.
#[derive(Debug, Default, Clone)]
pub struct LocalLoader {
    root: Option<PathBuf>,
}

impl LocalLoader {
    /// Creates a loader resolving identifiers under `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: Some(root.as_ref().to_path_buf()) }
    }

    /// Creates a loader treating identifiers as paths.
    pub fn unrooted() -> Self {
        Self { root: None }
    }

    pub fn resolve(&self, identifier: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(identifier),
            None => PathBuf::from(identifier),
        }
    }
}

impl SourceLoader for LocalLoader {
    fn cache_key(&self, identifier: &str) -> String {
        self.resolve(identifier).display().to_string()
    }

    fn load(&self, identifier: &str) -> Result<String> {
        let path = self.resolve(identifier);
        std::fs::read_to_string(&path).map_err(|e| Error::SourceFetchError {
            source_path: path.display().to_string(),
            e: e.to_string(),
        })
    }
}
