//! Release window matching for templated data files.
//!
//! Data files use these to generate jobs only for the releases listed in the
//! global config, e.g.
//! `{% for release in matchingReleases(Global.releases, "1.20") %}`.

use minijinja::{Error, ErrorKind, Value};
use std::fmt::Display;
use std::str::FromStr;

/// A `major.minor[.patch]` release, optionally prefixed with `v` or `release-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Release {
    major: u64,
    minor: u64,
    patch: u64,
}

impl FromStr for Release {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let version = trimmed
            .strip_prefix("release-")
            .or_else(|| trimmed.strip_prefix('v'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = version.split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(format!("invalid release '{s}', expected major.minor[.patch]"));
        }
        let number = |part: &str| {
            part.parse::<u64>().map_err(|_| format!("invalid release '{s}': '{part}' is not a number"))
        };
        Ok(Release {
            major: number(parts[0])?,
            minor: number(parts[1])?,
            patch: parts.get(2).map(|p| number(p)).transpose()?.unwrap_or(0),
        })
    }
}

impl Display for Release {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Release {
    /// Whether the release lies in the inclusive `[since, until]` window.
    pub fn within(&self, since: Option<&Release>, until: Option<&Release>) -> bool {
        since.map_or(true, |since| self >= since) && until.map_or(true, |until| self <= until)
    }
}

fn parse_release(value: &Value) -> Result<Release, Error> {
    // Unquoted YAML releases are floats, where 1.10 and 1.1 are the same value.
    let text = value.as_str().ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("release must be a quoted string, got {} {value}", value.kind()),
        )
    })?;
    text.parse().map_err(|e: String| Error::new(ErrorKind::InvalidOperation, e))
}

fn parse_bound(value: Option<Value>) -> Result<Option<Release>, Error> {
    match value {
        Some(value) if !value.is_none() && !value.is_undefined() => parse_release(&value).map(Some),
        _ => Ok(None),
    }
}

/// `releaseMatches(release, since=none, until=none)`
pub fn release_matches(
    release: &Value,
    since: Option<Value>,
    until: Option<Value>,
) -> Result<bool, Error> {
    let release = parse_release(release)?;
    Ok(release.within(parse_bound(since)?.as_ref(), parse_bound(until)?.as_ref()))
}

/// `matchingReleases(releases, since=none, until=none)`
///
/// Returns the releases inside the window, in their original order and form.
pub fn matching_releases(
    releases: &Value,
    since: Option<Value>,
    until: Option<Value>,
) -> Result<Value, Error> {
    if releases.is_undefined() || releases.is_none() {
        return Ok(Value::from(Vec::<Value>::new()));
    }
    let since = parse_bound(since)?;
    let until = parse_bound(until)?;
    let mut matching = Vec::new();
    for release in releases.try_iter()? {
        if parse_release(&release)?.within(since.as_ref(), until.as_ref()) {
            matching.push(release);
        }
    }
    Ok(Value::from(matching))
}
