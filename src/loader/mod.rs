use crate::constants::github as remote;
use crate::error::Result;
use std::path::PathBuf;

pub mod github;
pub mod interface;
pub mod local;

pub use github::GithubLoader;
pub use interface::SourceLoader;
pub use local::LocalLoader;

/// Where configs and templates are read from.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSource {
    /// Local filesystem path
    FileSystem(PathBuf),
    /// Path inside the remote GitHub repository
    Github(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Github(path) => write!(
                f,
                "github repository: '{}/{}/{}'",
                remote::ORG,
                remote::REPO,
                path
            ),
        }
    }
}

impl TemplateSource {
    /// Templates come from `templates_dir` when given, from GitHub otherwise.
    pub fn for_templates(templates_dir: Option<PathBuf>) -> Self {
        match templates_dir {
            Some(dir) => TemplateSource::FileSystem(dir),
            None => TemplateSource::Github(remote::TEMPLATES_DIR.to_string()),
        }
    }

    /// Builds the loader for this source.
    ///
    /// # Arguments
    /// * `token` - Optional GitHub access token, ignored for local sources
    pub fn into_loader(self, token: Option<String>) -> Result<Box<dyn SourceLoader>> {
        Ok(match self {
            TemplateSource::FileSystem(root) => Box::new(LocalLoader::new(root)),
            TemplateSource::Github(base_path) => Box::new(GithubLoader::new(base_path, token)?),
        })
    }
}
