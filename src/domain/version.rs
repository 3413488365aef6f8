//! Version values parsed from constraint expressions and candidate lists

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::parser;

/// A concrete version: numeric components plus optional pre-release and
/// build suffixes.
///
/// A version records which trailing components were actually written, so
/// display output round-trips (`"3.7"` stays `"3.7"`), while comparison
/// treats missing components as zero. Ordering follows the numeric
/// components first; a pre-release version orders before the same numeric
/// tuple without a suffix; build metadata never affects ordering. Equality
/// agrees with the ordering, so `3.7` and `3.7.0` compare equal even though
/// they display differently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    /// Major component, always present
    pub major: u64,
    /// Minor component, `None` when the literal omitted it
    pub minor: Option<u64>,
    /// Patch component, `None` when the literal omitted it (never present
    /// without a minor component)
    pub patch: Option<u64>,
    /// Pre-release suffix, the part after `-`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<String>,
    /// Build metadata, the part after `+`, ignored by the ordering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
}

impl Version {
    /// Creates a fully specified version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor: Some(minor),
            patch: Some(patch),
            prerelease: None,
            build: None,
        }
    }

    /// Sets the pre-release suffix (builder pattern)
    pub fn with_prerelease(mut self, prerelease: impl Into<String>) -> Self {
        self.prerelease = Some(prerelease.into());
        self
    }

    /// Sets the build metadata (builder pattern)
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }

    /// Returns true if this version carries a pre-release suffix
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Numeric components with unspecified ones treated as zero
    pub(crate) fn effective(&self) -> (u64, u64, u64) {
        (
            self.major,
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
        )
    }

    /// Upper bound implied by the pessimistic operator: with only a major
    /// component the major is bumped; otherwise the minor is bumped and a
    /// specified patch is zeroed. `~> 3` excludes 4.0.0 and up, `~> 3.7`
    /// and `~> 3.7.1` both exclude 3.8.0 and up.
    pub(crate) fn pessimistic_upper(&self) -> Version {
        match (self.minor, self.patch) {
            (Some(minor), Some(_)) => Version {
                major: self.major,
                minor: Some(minor + 1),
                patch: Some(0),
                prerelease: None,
                build: None,
            },
            (Some(minor), None) => Version {
                major: self.major,
                minor: Some(minor + 1),
                patch: None,
                prerelease: None,
                build: None,
            },
            (None, _) => Version {
                major: self.major + 1,
                minor: None,
                patch: None,
                prerelease: None,
                build: None,
            },
        }
    }
}

/// Pre-release precedence: dot-separated segments, numeric segments compare
/// numerically and order before alphanumeric ones, fewer segments order
/// first when all shared segments are equal.
fn prerelease_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(nx), Ok(ny)) => nx.cmp(&ny),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.effective().cmp(&other.effective()) {
            Ordering::Equal => match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => prerelease_cmp(a, b),
            },
            ordering => ordering,
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
        }
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        if let Some(ref prerelease) = self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        if let Some(ref build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_version(s)
    }
}
