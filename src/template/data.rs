//! Stage A: data files are templates rendered against the global config.
//!
//! This lets a data file generate its directives from global values, for
//! example only for the releases the global config lists as supported. A data
//! file without template syntax renders to itself.

use crate::config::{ConfigSet, GlobalConfig, Mapping, MergePolicy, TemplateDirective};
use crate::error::Result;
use crate::ext::PathExt;
use crate::loader::LocalLoader;
use crate::renderer::{resolve, TemplateCache};
use indexmap::IndexMap;
use log::{debug, info};
use serde::Serialize;
use std::path::Path;

/// What a data file template sees.
#[derive(Serialize)]
pub struct DataFileContext<'a> {
    #[serde(rename = "Global")]
    pub global: &'a Mapping,
    #[serde(rename = "GlobalSets")]
    pub global_sets: &'a IndexMap<String, ConfigSet>,
    #[serde(rename = "Templates")]
    pub templates: &'a [TemplateDirective],
}

impl<'a> From<&'a GlobalConfig> for DataFileContext<'a> {
    fn from(config: &'a GlobalConfig) -> Self {
        Self {
            global: &config.global,
            global_sets: &config.global_sets,
            templates: &config.templates,
        }
    }
}

/// Renders one data file against `config` and parses the output as a fragment.
pub fn render_data_file(
    data_file: &Path,
    config: &GlobalConfig,
    cache: &mut TemplateCache,
) -> Result<GlobalConfig> {
    let identifier = data_file.to_str_checked()?;
    let template = resolve(identifier, &LocalLoader::unrooted(), cache)?;
    let rendered = template.render(DataFileContext::from(config))?;
    GlobalConfig::from_yaml(identifier, &rendered)
}

/// Renders every data file, in order, and merges the resulting directives
/// into `config`. The first failure aborts.
pub fn process_data_files<P: AsRef<Path>>(
    config: &mut GlobalConfig,
    data_files: &[P],
    cache: &mut TemplateCache,
    policy: MergePolicy,
) -> Result<()> {
    for data_file in data_files {
        let data_file = data_file.as_ref();
        debug!("Processing data file {}", data_file.display());
        let fragment = render_data_file(data_file, config, cache)?;
        config.merge_fragment(fragment, policy);
    }
    info!(
        "Processed {} data files, {} template directives to render",
        data_files.len(),
        config.templates.len()
    );
    Ok(())
}
