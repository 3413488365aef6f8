//! Resolution outcome types

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Constraint, Version};

/// Why a resolution pass produced no version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The candidate set was empty; nothing to select from
    NoCandidates,
    /// Candidates exist but none satisfy the constraint. Carries the
    /// constraint and the newest candidate seen, to aid diagnosis.
    NoSatisfyingVersion {
        constraint: Constraint,
        nearest: Option<Version>,
    },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::NoCandidates => write!(f, "no candidate versions available"),
            FailureReason::NoSatisfyingVersion {
                constraint,
                nearest,
            } => {
                write!(f, "no candidate satisfies '{}'", constraint)?;
                if let Some(nearest) = nearest {
                    write!(f, " (newest available is {})", nearest)?;
                }
                Ok(())
            }
        }
    }
}

/// Outcome of resolving one requirement against a candidate set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolutionResult {
    /// A single version was selected
    Resolved {
        /// The selected version
        version: Version,
    },
    /// No version could be selected
    Failed {
        /// Why selection failed
        reason: FailureReason,
    },
}

impl ResolutionResult {
    /// Creates a Resolved result
    pub fn resolved(version: Version) -> Self {
        ResolutionResult::Resolved { version }
    }

    /// Creates a Failed result for an empty candidate set
    pub fn no_candidates() -> Self {
        ResolutionResult::Failed {
            reason: FailureReason::NoCandidates,
        }
    }

    /// Creates a Failed result for a constraint no candidate satisfies
    pub fn no_satisfying_version(constraint: Constraint, nearest: Option<Version>) -> Self {
        ResolutionResult::Failed {
            reason: FailureReason::NoSatisfyingVersion {
                constraint,
                nearest,
            },
        }
    }

    /// Returns true if a version was selected
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionResult::Resolved { .. })
    }

    /// Returns true if resolution failed
    pub fn is_failed(&self) -> bool {
        matches!(self, ResolutionResult::Failed { .. })
    }

    /// The selected version, if any
    pub fn version(&self) -> Option<&Version> {
        match self {
            ResolutionResult::Resolved { version } => Some(version),
            ResolutionResult::Failed { .. } => None,
        }
    }

    /// The failure reason, if any
    pub fn failure(&self) -> Option<&FailureReason> {
        match self {
            ResolutionResult::Resolved { .. } => None,
            ResolutionResult::Failed { reason } => Some(reason),
        }
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionResult::Resolved { version } => write!(f, "resolved {}", version),
            ResolutionResult::Failed { reason } => write!(f, "{}", reason),
        }
    }
}
