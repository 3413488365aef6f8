//! Conjunction constraints over versions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Comparator, Version};
use crate::error::ParseError;
use crate::parser;

/// A set of comparators that must all hold for a version to satisfy the
/// constraint. Built once from parsed input and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    comparators: Vec<Comparator>,
}

impl Constraint {
    /// Creates a constraint from already-built comparators
    pub fn new(comparators: Vec<Comparator>) -> Self {
        Self { comparators }
    }

    /// The comparators making up this constraint, in declaration order
    /// (pessimistic expressions contribute their expanded pair)
    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    /// Returns true when the candidate satisfies every comparator
    pub fn matches(&self, candidate: &Version) -> bool {
        self.comparators.iter().all(|c| c.matches(candidate))
    }

    /// Returns true when any comparator names a pre-release version. The
    /// resolver uses this as the opt-in signal for pre-release candidates.
    pub fn allows_prerelease(&self) -> bool {
        self.comparators.iter().any(|c| c.version.is_prerelease())
    }
}

impl FromStr for Constraint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for comparator in &self.comparators {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", comparator)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComparatorOp;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    fn c(s: &str) -> Constraint {
        s.parse().unwrap()
    }

    #[test]
    fn test_matches_requires_every_comparator() {
        let constraint = c(">= 1.0.0, < 2.0.0");
        assert!(constraint.matches(&v("1.0.0")));
        assert!(constraint.matches(&v("1.9.9")));
        assert!(!constraint.matches(&v("2.0.0")));
        assert!(!constraint.matches(&v("0.9.0")));
    }

    #[test]
    fn test_matches_with_exclusion() {
        let constraint = c(">= 1.0.0, != 1.3.0");
        assert!(constraint.matches(&v("1.2.0")));
        assert!(!constraint.matches(&v("1.3.0")));
        assert!(constraint.matches(&v("1.3.1")));
    }

    #[test]
    fn test_allows_prerelease() {
        assert!(!c(">= 1.0.0").allows_prerelease());
        assert!(c("= 1.0.0-rc.1").allows_prerelease());
        assert!(c(">= 1.0.0, <= 2.0.0-beta").allows_prerelease());
    }

    #[test]
    fn test_comparators_accessor() {
        let constraint = c(">= 1.0, < 2.0");
        let ops: Vec<ComparatorOp> = constraint.comparators().iter().map(|c| c.op).collect();
        assert_eq!(
            ops,
            [ComparatorOp::GreaterOrEqual, ComparatorOp::Less]
        );
    }

    #[test]
    fn test_display_joins_with_commas() {
        assert_eq!(c(">=1.0.0,  <2.0.0").to_string(), ">= 1.0.0, < 2.0.0");
        assert_eq!(c("1.2.3").to_string(), "= 1.2.3");
    }

    #[test]
    fn test_display_of_expanded_pessimistic() {
        assert_eq!(c("~> 3.7").to_string(), ">= 3.7, < 3.8");
    }

    #[test]
    fn test_serde_round_trip() {
        let constraint = c(">= 1.0.0, < 2.0.0");
        let json = serde_json::to_string(&constraint).unwrap();
        let parsed: Constraint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, constraint);
    }
}
