//! Version selection against a constraint
//!
//! This module provides:
//! - Candidate filtering by constraint satisfaction
//! - Selection of the newest satisfying version
//! - Failure reporting with nearest-candidate context
//!
//! Selection policy: among satisfying candidates the maximum version wins.
//! Always preferring the newest allowed version is deliberate, not an
//! accident of iteration order. Pre-release candidates are skipped unless
//! the constraint itself names a pre-release version.

use crate::domain::{Constraint, ResolutionResult, Version};

/// Resolve a constraint against a candidate set.
///
/// Pure function of its inputs: no I/O, no caching, no shared state. The
/// caller fetches (and, if it wants, caches) the candidate list before
/// calling.
pub fn resolve(constraint: &Constraint, candidates: &[Version]) -> ResolutionResult {
    if candidates.is_empty() {
        return ResolutionResult::no_candidates();
    }

    let allow_prerelease = constraint.allows_prerelease();
    let best = candidates
        .iter()
        .filter(|candidate| allow_prerelease || !candidate.is_prerelease())
        .filter(|candidate| constraint.matches(candidate))
        .max();

    match best {
        Some(version) => ResolutionResult::resolved(version.clone()),
        None => {
            let nearest = candidates.iter().max().cloned();
            ResolutionResult::no_satisfying_version(constraint.clone(), nearest)
        }
    }
}
