use crate::config::FromTo;
use std::path::PathBuf;

/// One output file about to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOperation {
    pub from_to: FromTo,
    pub target: PathBuf,
    pub marker: &'static str,
    pub target_exists: bool,
}

impl RenderOperation {
    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };
        if self.target_exists {
            format!(
                "{prefix}Rendering '{}' to '{}' (overwriting existing file)",
                self.from_to.from,
                self.target.display()
            )
        } else {
            format!("{prefix}Rendering '{}' to '{}'", self.from_to.from, self.target.display())
        }
    }
}
