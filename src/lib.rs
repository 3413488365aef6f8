//! provsel - provider version constraint parsing and resolution
//!
//! This library implements the contract a configuration engine must honor
//! for declared provider dependencies:
//! - parsing a version-constraint expression into an evaluable predicate
//! - deciding whether a concrete version satisfies that predicate
//! - resolving exactly one concrete version per named dependency from a
//!   candidate set
//! - gating the engine's own version against a declared minimum
//!
//! Fetching candidate lists, executing providers, and reading the
//! surrounding configuration format are the caller's concern; every entry
//! point here is a pure function over already-loaded data.

pub mod domain;
pub mod error;
pub mod parser;
pub mod resolver;
pub mod tool;
