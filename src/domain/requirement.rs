//! Named provider requirements

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Constraint, ResolutionResult, Version};
use crate::error::ParseError;
use crate::resolver;

/// A named provider dependency with its acceptable version range.
///
/// Built by the configuration loader, handed to the resolver once, then
/// discarded; the core keeps no registry of requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Local name of the provider
    pub name: String,
    /// Opaque source identifier (registry address); never interpreted here
    pub source: String,
    /// The version constraint candidates must satisfy
    pub constraint: Constraint,
}

impl Requirement {
    /// Creates a requirement from an already-parsed constraint
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        constraint: Constraint,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            constraint,
        }
    }

    /// Creates a requirement by parsing the constraint text
    pub fn parse(
        name: impl Into<String>,
        source: impl Into<String>,
        constraint_text: &str,
    ) -> Result<Self, ParseError> {
        Ok(Self::new(name, source, constraint_text.parse()?))
    }

    /// Resolves this requirement against a candidate set
    pub fn resolve(&self, candidates: &[Version]) -> ResolutionResult {
        resolver::resolve(&self.constraint, candidates)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.source, self.constraint)
    }
}
