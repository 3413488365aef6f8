//! Comparator operators and version bounds

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Version;

/// Comparison operator in a constraint expression
///
/// The pessimistic `~>` form is not represented here; it expands into a
/// `GreaterOrEqual`/`Less` pair at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparatorOp {
    /// `=` (also the implicit operator for a bare version literal)
    Exact,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
}

impl ComparatorOp {
    /// The textual symbol for this operator
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparatorOp::Exact => "=",
            ComparatorOp::NotEqual => "!=",
            ComparatorOp::Greater => ">",
            ComparatorOp::GreaterOrEqual => ">=",
            ComparatorOp::Less => "<",
            ComparatorOp::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single operator/version pair a candidate must satisfy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparator {
    /// The comparison operator
    pub op: ComparatorOp,
    /// The bound the candidate is compared against
    pub version: Version,
}

impl Comparator {
    /// Creates a new comparator
    pub fn new(op: ComparatorOp, version: Version) -> Self {
        Self { op, version }
    }

    /// Evaluates this comparator against a candidate version
    pub fn matches(&self, candidate: &Version) -> bool {
        match self.op {
            ComparatorOp::Exact => candidate == &self.version,
            ComparatorOp::NotEqual => candidate != &self.version,
            ComparatorOp::Greater => candidate > &self.version,
            ComparatorOp::GreaterOrEqual => candidate >= &self.version,
            ComparatorOp::Less => candidate < &self.version,
            ComparatorOp::LessOrEqual => candidate <= &self.version,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn test_symbols() {
        assert_eq!(ComparatorOp::Exact.symbol(), "=");
        assert_eq!(ComparatorOp::NotEqual.symbol(), "!=");
        assert_eq!(ComparatorOp::Greater.symbol(), ">");
        assert_eq!(ComparatorOp::GreaterOrEqual.symbol(), ">=");
        assert_eq!(ComparatorOp::Less.symbol(), "<");
        assert_eq!(ComparatorOp::LessOrEqual.symbol(), "<=");
    }

    #[test]
    fn test_exact_matches() {
        let comparator = Comparator::new(ComparatorOp::Exact, v("1.0.0"));
        assert!(comparator.matches(&v("1.0.0")));
        assert!(!comparator.matches(&v("1.0.1")));
        // unspecified components compare as zero
        assert!(comparator.matches(&v("1.0")));
    }

    #[test]
    fn test_not_equal_matches() {
        let comparator = Comparator::new(ComparatorOp::NotEqual, v("1.0.0"));
        assert!(!comparator.matches(&v("1.0.0")));
        assert!(comparator.matches(&v("1.0.1")));
    }

    #[test]
    fn test_greater_matches() {
        let comparator = Comparator::new(ComparatorOp::Greater, v("1.2.0"));
        assert!(comparator.matches(&v("1.2.1")));
        assert!(!comparator.matches(&v("1.2.0")));
        assert!(!comparator.matches(&v("1.1.9")));
    }

    #[test]
    fn test_greater_or_equal_matches() {
        let comparator = Comparator::new(ComparatorOp::GreaterOrEqual, v("1.2.0"));
        assert!(comparator.matches(&v("1.2.0")));
        assert!(comparator.matches(&v("2.0.0")));
        assert!(!comparator.matches(&v("1.1.0")));
    }

    #[test]
    fn test_less_matches() {
        let comparator = Comparator::new(ComparatorOp::Less, v("2.0.0"));
        assert!(comparator.matches(&v("1.9.9")));
        assert!(!comparator.matches(&v("2.0.0")));
        // a pre-release of the bound orders below the bound
        assert!(comparator.matches(&v("2.0.0-rc.1")));
    }

    #[test]
    fn test_less_or_equal_matches() {
        let comparator = Comparator::new(ComparatorOp::LessOrEqual, v("2.0.0"));
        assert!(comparator.matches(&v("2.0.0")));
        assert!(!comparator.matches(&v("2.0.1")));
    }

    #[test]
    fn test_display() {
        let comparator = Comparator::new(ComparatorOp::GreaterOrEqual, v("1.2"));
        assert_eq!(format!("{}", comparator), ">= 1.2");
    }

    #[test]
    fn test_serde_op_rename() {
        let json = serde_json::to_string(&ComparatorOp::GreaterOrEqual).unwrap();
        assert_eq!(json, "\"greater_or_equal\"");
        let parsed: ComparatorOp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ComparatorOp::GreaterOrEqual);
    }

    #[test]
    fn test_serde_comparator_round_trip() {
        let comparator = Comparator::new(ComparatorOp::Less, v("2.0.0"));
        let json = serde_json::to_string(&comparator).unwrap();
        let parsed: Comparator = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, comparator);
    }
}
