//! Merging of nested config values, data file fragments and inherited config sets

use crate::config::types::{ConfigSet, GlobalConfig, Mapping, RenderConfig};
use crate::constants::{DEFAULT_CONFIG_SET, JOB_CONFIGS_KEY};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

/// How conflicting values are resolved when two mappings are merged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergePolicy {
    /// Values from the merged-in side replace already set values.
    pub overwrite: bool,
    /// Sequences present on both sides are concatenated instead of resolved as scalars.
    pub append_slice: bool,
}

impl MergePolicy {
    pub fn new(append_slice: bool) -> Self {
        Self { overwrite: false, append_slice }
    }

    pub fn with_overwrite(self) -> Self {
        Self { overwrite: true, ..self }
    }

    pub fn with_append_slice(self, append_slice: bool) -> Self {
        Self { append_slice, ..self }
    }
}

/// Merges `src` into `dst`.
///
/// Keys only present in `src` are added. Mappings on both sides are merged
/// recursively. Sequences on both sides are concatenated when
/// `policy.append_slice` is set. Any other conflict keeps the `dst` value,
/// unless it is null or `policy.overwrite` is set.
pub fn merge_values(dst: &mut Mapping, src: &Mapping, policy: MergePolicy) {
    for (key, src_value) in src {
        match dst.get_mut(key) {
            None => {
                dst.insert(key.clone(), src_value.clone());
            }
            Some(dst_value) => merge_value(dst_value, src_value, policy),
        }
    }
}

fn merge_value(dst: &mut Value, src: &Value, policy: MergePolicy) {
    match (dst, src) {
        (Value::Object(dst_map), Value::Object(src_map)) => {
            merge_values(dst_map, src_map, policy)
        }
        (Value::Array(dst_items), Value::Array(src_items)) if policy.append_slice => {
            dst_items.extend(src_items.iter().cloned())
        }
        (dst, src) => {
            if policy.overwrite || dst.is_null() {
                *dst = src.clone();
            }
        }
    }
}

impl GlobalConfig {
    /// Merges a data file fragment into this config.
    ///
    /// Directives are appended in order, never merged with each other. The
    /// fragment's global values and global sets only fill gaps.
    pub fn merge_fragment(&mut self, fragment: GlobalConfig, policy: MergePolicy) {
        let policy = MergePolicy { overwrite: false, ..policy };
        merge_values(&mut self.global, &fragment.global, policy);
        for (name, set) in fragment.global_sets {
            self.global_sets.entry(name).or_insert(set);
        }
        debug!("Appending {} template directives", fragment.templates.len());
        self.templates.extend(fragment.templates);
    }

    /// Builds the final job config of every job in every render.
    ///
    /// Layers, from lowest to highest precedence: the `default` global set,
    /// the other global sets named in `inheritedConfigs.global`, the local sets named
    /// in `inheritedConfigs.local`, the job's own config. The resolved repos are
    /// exposed to templates as `Values.JobConfigs`.
    pub fn resolve_job_configs(&mut self, policy: MergePolicy) -> Result<()> {
        for directive in &mut self.templates {
            for render in &mut directive.render {
                resolve_render_job_configs(render, &self.global_sets, policy)?;
            }
        }
        Ok(())
    }
}

fn lookup_set<'a>(
    sets: &'a IndexMap<String, ConfigSet>,
    name: &str,
    kind: &str,
) -> Result<&'a ConfigSet> {
    sets.get(name)
        .ok_or_else(|| Error::ConfigError(format!("unknown {kind} config set '{name}'")))
}

fn resolve_render_job_configs(
    render: &mut RenderConfig,
    global_sets: &IndexMap<String, ConfigSet>,
    policy: MergePolicy,
) -> Result<()> {
    if render.job_configs.is_empty() {
        return Ok(());
    }
    let policy =
        policy.with_overwrite().with_append_slice(render.append_slice.unwrap_or(policy.append_slice));

    for repo in &mut render.job_configs {
        for job in &mut repo.jobs {
            let mut merged = Mapping::new();
            if let Some(default_set) = global_sets.get(DEFAULT_CONFIG_SET) {
                merge_values(&mut merged, default_set, policy);
            }
            for name in &job.inherited_configs.global {
                if name == DEFAULT_CONFIG_SET {
                    continue;
                }
                merge_values(&mut merged, lookup_set(global_sets, name, "global")?, policy);
            }
            for name in &job.inherited_configs.local {
                merge_values(&mut merged, lookup_set(&render.local_sets, name, "local")?, policy);
            }
            merge_values(&mut merged, &job.job_config, policy);
            job.job_config = merged;
        }
    }

    let job_configs = serde_json::to_value(&render.job_configs)
        .map_err(|e| Error::Other(anyhow::anyhow!("cannot serialize job configs: {e}")))?;
    render.values.insert(JOB_CONFIGS_KEY.to_string(), job_configs);
    Ok(())
}

/// Merges every fragment into `primary`, in the order the fragments were discovered.
pub fn merge(
    mut primary: GlobalConfig,
    fragments: impl IntoIterator<Item = GlobalConfig>,
    policy: MergePolicy,
) -> GlobalConfig {
    for fragment in fragments {
        primary.merge_fragment(fragment, policy);
    }
    primary
}
