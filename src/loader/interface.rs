use crate::error::Result;

/// Source of config, data file and template text.
pub trait SourceLoader {
    /// Key the template cache stores the parsed `identifier` under.
    fn cache_key(&self, identifier: &str) -> String;

    /// Fetches the raw text behind `identifier`.
    ///
    /// # Returns
    /// * `Result<String>` - The text, or a source fetch error
    fn load(&self, identifier: &str) -> Result<String>;
}
