//! Core domain models for provsel
//!
//! This module contains the fundamental types used throughout the library:
//! - Version values with display round-trip fidelity
//! - Comparator operators and conjunction constraints
//! - Named provider requirements
//! - Resolution outcome types

mod comparator;
mod constraint;
mod requirement;
mod resolution;
mod version;

pub use comparator::{Comparator, ComparatorOp};
pub use constraint::Constraint;
pub use requirement::Requirement;
pub use resolution::{FailureReason, ResolutionResult};
pub use version::Version;
