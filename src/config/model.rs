//! TaskConfig struct definition and defaults.

use serde::{Deserialize, Serialize};

/// The operator-supplied payload configuration for launch requests.
///
/// The three payload strings arrive raw; parsing happens downstream in
/// [`crate::parse`]. Unknown fields in the YAML are ignored for forward
/// compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    /// The uri of the task artifact to launch. Required, must be non-empty;
    /// enforced by `validate()` so the parser core can assume it holds.
    pub uri: String,

    /// Space-delimited tokens (each optionally `key=value`, optionally
    /// quoted) used as command-line arguments for the task.
    pub command_line_args: String,

    /// Comma-delimited `key=value` pairs used as environment properties.
    pub environment_properties: String,

    /// Comma-delimited `key=value` pairs used as deployment properties.
    pub deployment_properties: String,
}
