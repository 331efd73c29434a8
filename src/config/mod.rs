//! Task configuration model for taskspark.
//!
//! This module defines the `TaskConfig` struct that represents the operator's
//! task payload file (`taskspark.yaml` by default). It supports
//! forward-compatible YAML parsing (unknown fields are ignored), empty-string
//! defaults for the raw payload strings, and validation of the artifact URI.

mod model;
mod operations;


// Re-export public API
pub use model::TaskConfig;
