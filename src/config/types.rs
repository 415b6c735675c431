//! Data model of the rendertemplates configuration

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Free-form nested mapping of values.
pub type Mapping = serde_json::Map<String, serde_json::Value>;

/// A named, reusable mapping merged into job configs.
pub type ConfigSet = Mapping;

/// Root of both the primary config and every data file fragment.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Values available to every render under `Global`.
    #[serde(default, alias = "Global", skip_serializing_if = "Mapping::is_empty")]
    pub global: Mapping,
    #[serde(
        default,
        rename = "globalSets",
        alias = "GlobalSets",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub global_sets: IndexMap<String, ConfigSet>,
    #[serde(default, alias = "Templates", skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<TemplateDirective>,
}

/// One unit of template-to-output work.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDirective {
    #[serde(default, rename = "fromTo", alias = "FromTo")]
    pub from_to: Vec<FromTo>,
    #[serde(default, alias = "RenderConfigs", alias = "renderConfigs")]
    pub render: Vec<RenderConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromTo {
    /// Template identifier
    #[serde(alias = "From")]
    pub from: String,
    /// Destination, relative to the output base directory
    #[serde(alias = "To")]
    pub to: String,
}

impl FromTo {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

impl Display for FromTo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// One set of values a template is rendered with.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default, alias = "Values")]
    pub values: Mapping,
    /// Overrides the run-wide list merge policy for this render.
    #[serde(default, rename = "appendSlice", skip_serializing_if = "Option::is_none")]
    pub append_slice: Option<bool>,
    #[serde(default, rename = "localSets", skip_serializing_if = "IndexMap::is_empty")]
    pub local_sets: IndexMap<String, ConfigSet>,
    #[serde(default, rename = "jobConfigs", skip_serializing_if = "Vec::is_empty")]
    pub job_configs: Vec<Repo>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    #[serde(default, rename = "repoName")]
    pub repo_name: String,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, rename = "jobConfig")]
    pub job_config: Mapping,
    #[serde(default, rename = "inheritedConfigs", skip_serializing_if = "InheritedConfigs::is_empty")]
    pub inherited_configs: InheritedConfigs,
}

impl Job {
    /// Whether the job config carries the given job type marker key.
    pub fn has_type(&self, marker: &str) -> bool {
        self.job_config.contains_key(marker)
    }
}

/// Names of the config sets a job inherits from.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritedConfigs {
    #[serde(default)]
    pub global: Vec<String>,
    #[serde(default)]
    pub local: Vec<String>,
}

impl InheritedConfigs {
    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.local.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_to_display() {
        assert_eq!(FromTo::new("job.tpl", "out/job.yaml").to_string(), "job.tpl -> out/job.yaml");
    }

    #[test]
    fn test_deserialize_lowercase_schema() {
        let yaml = r#"
global:
  region: eu
globalSets:
  default:
    max_concurrency: 10
templates:
  - fromTo:
      - from: job.tpl
        to: out/job.yaml
    render:
      - values:
          name: build
        appendSlice: true
        jobConfigs:
          - repoName: kyma
            jobs:
              - jobConfig:
                  name: pre-main
                  type_presubmit: "true"
                inheritedConfigs:
                  global: [default]
"#;
        let config: GlobalConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.global["region"], "eu");
        assert!(config.global_sets.contains_key("default"));
        let directive = &config.templates[0];
        assert_eq!(directive.from_to[0], FromTo::new("job.tpl", "out/job.yaml"));
        let render = &directive.render[0];
        assert_eq!(render.values["name"], "build");
        assert_eq!(render.append_slice, Some(true));
        let job = &render.job_configs[0].jobs[0];
        assert!(job.has_type("type_presubmit"));
        assert!(!job.has_type("type_periodic"));
        assert_eq!(job.inherited_configs.global, vec!["default".to_string()]);
    }

    #[test]
    fn test_deserialize_capitalized_aliases() {
        let yaml = r#"
Global:
  region: eu
Templates:
  - FromTo:
      - From: job.tpl
        To: out/job.yaml
    RenderConfigs:
      - Values:
          name: build
"#;
        let config: GlobalConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.global["region"], "eu");
        assert_eq!(config.templates[0].render[0].values["name"], "build");
        assert_eq!(config.templates[0].render[0].append_slice, None);
    }

    #[test]
    fn test_empty_document_is_empty_config() {
        let config: GlobalConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, GlobalConfig::default());
    }
}
