//! Library error types using thiserror
//!
//! Error hierarchy:
//! - ParseError: malformed constraint text or version literals
//! - ToolVersionError: running tool version outside the declared requirement
//!
//! Resolution failures are not errors; they are ordinary return values
//! carried by `ResolutionResult`.

use thiserror::Error;

use crate::domain::{Constraint, Version};

/// Errors produced while parsing constraint expressions and version
/// literals. Each variant carries the offending fragment so callers can
/// surface it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The whole expression was empty or whitespace-only
    #[error("empty constraint expression")]
    EmptyExpression,

    /// A comma-separated fragment was empty (e.g. a trailing comma)
    #[error("empty comparator fragment in '{expression}'")]
    EmptyFragment { expression: String },

    /// The fragment starts with something that is neither a known
    /// comparator symbol nor a version literal
    #[error("unrecognized comparator in '{fragment}'")]
    UnknownComparator { fragment: String },

    /// A comparator symbol with nothing after it
    #[error("comparator '{fragment}' is missing a version literal")]
    MissingVersion { fragment: String },

    /// A major/minor/patch segment that is not a non-negative integer
    #[error("invalid version '{literal}': non-numeric segment '{segment}'")]
    NonNumericSegment { literal: String, segment: String },

    /// A version literal that does not fit the grammar at all
    #[error("invalid version literal '{literal}'")]
    MalformedVersion { literal: String },
}

impl ParseError {
    /// Creates a new EmptyFragment error
    pub fn empty_fragment(expression: impl Into<String>) -> Self {
        ParseError::EmptyFragment {
            expression: expression.into(),
        }
    }

    /// Creates a new UnknownComparator error
    pub fn unknown_comparator(fragment: impl Into<String>) -> Self {
        ParseError::UnknownComparator {
            fragment: fragment.into(),
        }
    }

    /// Creates a new MissingVersion error
    pub fn missing_version(fragment: impl Into<String>) -> Self {
        ParseError::MissingVersion {
            fragment: fragment.into(),
        }
    }

    /// Creates a new NonNumericSegment error
    pub fn non_numeric_segment(literal: impl Into<String>, segment: impl Into<String>) -> Self {
        ParseError::NonNumericSegment {
            literal: literal.into(),
            segment: segment.into(),
        }
    }

    /// Creates a new MalformedVersion error
    pub fn malformed_version(literal: impl Into<String>) -> Self {
        ParseError::MalformedVersion {
            literal: literal.into(),
        }
    }
}

/// The running tool version lies outside the declared requirement
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("running tool version {running} does not satisfy required version '{required}'")]
pub struct ToolVersionError {
    /// The declared requirement the configuration carries
    pub required: Constraint,
    /// The version of the engine that tried to process it
    pub running: Version,
}
