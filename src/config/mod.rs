//! Configuration management for rendertemplates
//!
//! This module contains the configuration system components:
//! - `types`: The config document model
//! - `loader`: Config loading and parsing
//! - `merge`: Merging of fragments, global values and inherited config sets

pub mod loader;
pub mod merge;
pub mod types;


pub use merge::{merge, merge_values, MergePolicy};
pub use types::{
    ConfigSet, FromTo, GlobalConfig, InheritedConfigs, Job, Mapping, RenderConfig, Repo,
    TemplateDirective,
};
