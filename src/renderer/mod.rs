//! Template compilation, caching and the template helper set.
//!
//! - `environment`: the minijinja environment and text filters
//! - `helpers`: job inspection and run id helpers
//! - `releases`: release window helpers
//! - `cache`: compiled templates keyed by identifier
//! - `resolver`: identifier to compiled template, through a loader and the cache

pub mod cache;
pub mod environment;
pub mod helpers;
pub mod releases;
pub mod resolver;

pub use cache::{CompiledTemplate, TemplateCache};
pub use environment::new_environment;
pub use helpers::Helper;
pub use resolver::resolve;
