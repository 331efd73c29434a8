//! Launch request value type and builder.
//!
//! A `LaunchRequest` describes one external task to run: where the artifact
//! lives, its command-line arguments, and its environment and deployment
//! property maps. The builder is mechanical composition over the parsers in
//! [`crate::parse`]; it holds no state beyond the argument transformer hook.

mod builder;
mod transformer;

// Re-export public API
pub use builder::LaunchRequestBuilder;
pub use transformer::{ArgumentTransformer, PassThroughTransformer};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One task launch request, produced once per trigger tick.
///
/// Value type: no identity beyond its fields, immutable after construction.
/// The transport layer owns serialization; `Serialize` here is the handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
    /// Location of the task artifact to run.
    ///
    /// Non-emptiness is a caller precondition enforced by the configuration
    /// layer, not re-validated here.
    pub location: String,

    /// Parsed command-line arguments, input order preserved.
    pub arguments: Vec<String>,

    /// Parsed environment properties.
    pub environment: BTreeMap<String, String>,

    /// Parsed deployment properties.
    pub deployment: BTreeMap<String, String>,
}
