use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use rendertemplates::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Returns the extension including its leading dot, or an empty string.
    ///
    /// # Examples
    /// ```
    /// use rendertemplates::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("out/job.yaml").dotted_extension(), ".yaml");
    /// assert_eq!(Path::new("Makefile").dotted_extension(), "");
    /// ```
    fn dotted_extension(&self) -> String;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn dotted_extension(&self) -> String {
        self.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }
}
