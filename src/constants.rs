//! Constants used throughout rendertemplates

/// Message added at the beginning of each generated file.
pub const AUTOGENERATION_MESSAGE: &str = "Code generated by rendertemplates. DO NOT EDIT.";

/// Default data directory when neither `--data` nor `--data-file` is given
pub const DEFAULT_DATA_DIR: &str = ".";

/// Substring a file name must contain to be picked up as a data file
pub const DATA_FILE_MARKER: &str = ".yaml";

/// Maximum length of a run id produced by `getRunId`
pub const MAX_RUN_ID_LEN: usize = 63;

/// Name of the global config set every job inherits first, when present
pub const DEFAULT_CONFIG_SET: &str = "default";

/// Key under which resolved job configs are exposed in `Values`
pub const JOB_CONFIGS_KEY: &str = "JobConfigs";

/// Log target of the per-FromTo lines printed by `--show-output-dir`
pub const OUTPUT_LOG_TARGET: &str = "rendertemplates::output";

/// Remote location of configs and templates
pub mod github {
    use std::time::Duration;

    pub const API_URL: &str = "https://api.github.com";
    pub const ORG: &str = "kyma-project";
    pub const REPO: &str = "test-infra";
    pub const REF: &str = "main";
    /// Directory holding the rendertemplates config
    pub const CONFIG_DIR: &str = "templates";
    /// Config file name inside [`CONFIG_DIR`]
    pub const CONFIG_FILE: &str = "config.yaml";
    /// Directory holding the templates
    pub const TEMPLATES_DIR: &str = "templates/templates";
    pub const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw";
    pub const USER_AGENT: &str = "rendertemplates";
    pub const TIMEOUT: Duration = Duration::from_secs(30);
}

/// Job type markers looked up by the `has*` template helpers
pub mod job_types {
    pub const PRESUBMIT: &str = "type_presubmit";
    pub const POSTSUBMIT: &str = "type_postsubmit";
    pub const PERIODIC: &str = "type_periodic";
}

/// Comment markers for the autogenerated header, by output file extension
pub const COMMENT_MARKERS: &[(&str, &[&str])] =
    &[("//", &["go"]), ("> ", &["md"]), ("#", &["yaml", "yml"])];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
