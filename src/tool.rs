//! Tool version gating
//!
//! A configuration declares the minimum version of the engine allowed to
//! process it; the engine also holds per-feature version floors. Both
//! checks are pure: the caller supplies the running version, since
//! discovering it (shelling out, reading build info) is its concern.

use crate::domain::{Constraint, Version};
use crate::error::ToolVersionError;

/// Check the running tool version against the declared requirement.
///
/// Pre-release running versions get no special treatment: `1.1.0-rc.1`
/// orders below `1.1.0` and so does not satisfy `>= 1.1.0`.
pub fn ensure_tool_version(
    required: &Constraint,
    running: &Version,
) -> Result<(), ToolVersionError> {
    if required.matches(running) {
        Ok(())
    } else {
        Err(ToolVersionError {
            required: required.clone(),
            running: running.clone(),
        })
    }
}

/// Feature gate: true when the running version is at or above the floor
pub fn supported_since(floor: &Version, running: &Version) -> bool {
    running >= floor
}
