//! Template-callable helpers inspecting rendered job structures.

use crate::config::Repo;
use crate::constants::{job_types, MAX_RUN_ID_LEN};
use crate::renderer::releases::{matching_releases, release_matches};
use minijinja::{Environment, Error, ErrorKind, Value};
use serde::Deserialize;

/// Every helper registered into the template environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Helper {
    HasPresubmit,
    HasPostsubmit,
    HasPeriodic,
    GetRunId,
    MatchingReleases,
    ReleaseMatches,
}

impl Helper {
    pub const ALL: [Helper; 6] = [
        Helper::HasPresubmit,
        Helper::HasPostsubmit,
        Helper::HasPeriodic,
        Helper::GetRunId,
        Helper::MatchingReleases,
        Helper::ReleaseMatches,
    ];

    /// Name templates call the helper by.
    pub fn name(self) -> &'static str {
        match self {
            Helper::HasPresubmit => "hasPresubmit",
            Helper::HasPostsubmit => "hasPostsubmit",
            Helper::HasPeriodic => "hasPeriodic",
            Helper::GetRunId => "getRunId",
            Helper::MatchingReleases => "matchingReleases",
            Helper::ReleaseMatches => "releaseMatches",
        }
    }

    pub fn register(self, env: &mut Environment<'static>) {
        let name = self.name();
        match self {
            Helper::HasPresubmit => env.add_function(name, has_presubmit),
            Helper::HasPostsubmit => env.add_function(name, has_postsubmit),
            Helper::HasPeriodic => env.add_function(name, has_periodic),
            Helper::GetRunId => {
                env.add_function(name, get_run_id);
                env.add_filter(name, get_run_id);
            }
            Helper::MatchingReleases => env.add_function(name, matching_releases),
            Helper::ReleaseMatches => env.add_function(name, release_matches),
        }
    }
}

/// Registers the whole helper set.
pub fn register_all(env: &mut Environment<'static>) {
    for helper in Helper::ALL {
        helper.register(env);
    }
}

/// Whether any job in `repos` carries the `marker` key in its job config.
pub fn has_job_type(repos: &[Repo], marker: &str) -> bool {
    repos.iter().flat_map(|repo| &repo.jobs).any(|job| job.has_type(marker))
}

fn repos_from_value(repos: &Value) -> Result<Vec<Repo>, Error> {
    if repos.is_undefined() || repos.is_none() {
        return Ok(Vec::new());
    }
    Vec::<Repo>::deserialize(repos).map_err(|e| {
        Error::new(ErrorKind::InvalidOperation, "expected a list of repos with jobs").with_source(e)
    })
}

fn has_presubmit(repos: &Value) -> Result<bool, Error> {
    Ok(has_job_type(&repos_from_value(repos)?, job_types::PRESUBMIT))
}

fn has_postsubmit(repos: &Value) -> Result<bool, Error> {
    Ok(has_job_type(&repos_from_value(repos)?, job_types::POSTSUBMIT))
}

fn has_periodic(repos: &Value) -> Result<bool, Error> {
    Ok(has_job_type(&repos_from_value(repos)?, job_types::PERIODIC))
}

/// Trims a job name to a valid run id: at most 63 characters, never ending
/// with a dash, wrapped in double quotes for the YAML output.
pub fn run_id(name: &str) -> String {
    let truncated: String = name.chars().take(MAX_RUN_ID_LEN).collect();
    format!("\"{}\"", truncated.trim_end_matches('-'))
}

fn get_run_id(name: &Value) -> Result<String, Error> {
    match name.as_str() {
        Some(name) => Ok(run_id(name)),
        None => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("getRunId expects a string, got {}", name.kind()),
        )),
    }
}
