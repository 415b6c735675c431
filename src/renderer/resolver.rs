//! Resolution of template identifiers into compiled, cached templates.

use crate::error::{Error, Result};
use crate::loader::SourceLoader;
use crate::renderer::cache::{CompiledTemplate, TemplateCache};
use log::debug;

/// Returns the compiled template behind `identifier`.
///
/// A cached identifier is neither fetched nor parsed again. Otherwise the
/// source is fetched through `loader`, parsed, and cached under the loader's
/// key. Fetch and parse errors are returned as is.
pub fn resolve<'c>(
    identifier: &str,
    loader: &dyn SourceLoader,
    cache: &'c mut TemplateCache,
) -> Result<CompiledTemplate<'c>> {
    let key = loader.cache_key(identifier);
    if cache.contains(&key) {
        debug!("Template cache hit: {key}");
    } else {
        debug!("Template cache miss: {key}");
        let source = loader.load(identifier)?;
        cache.insert(&key, source)?;
    }
    cache.get(&key).ok_or_else(|| {
        Error::Other(anyhow::anyhow!("Template '{key}' missing from the cache after insert"))
    })
}
