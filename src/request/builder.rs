//! Composition of parsed arguments and properties into a launch request.

use super::LaunchRequest;
use super::transformer::{ArgumentTransformer, PassThroughTransformer};
use crate::parse::{parse_arguments, parse_properties};

/// Builds [`LaunchRequest`] values from the four raw configuration strings.
///
/// Construction is pure and synchronous: each `build` call allocates its own
/// result, so one builder may serve concurrent callers without locking.
pub struct LaunchRequestBuilder {
    transformer: Box<dyn ArgumentTransformer>,
}

impl LaunchRequestBuilder {
    /// Create a builder with the pass-through argument transformer.
    pub fn new() -> Self {
        Self {
            transformer: Box::new(PassThroughTransformer),
        }
    }

    /// Replace the argument transformer hook.
    pub fn with_transformer(mut self, transformer: Box<dyn ArgumentTransformer>) -> Self {
        self.transformer = transformer;
        self
    }

    /// Assemble one launch request from raw configuration strings.
    ///
    /// `args_text` runs through the transformer and then the argument parser;
    /// the two property strings run through the property parser. `location`
    /// is taken as-is; its non-emptiness is the caller's precondition.
    pub fn build(
        &self,
        location: &str,
        args_text: &str,
        env_text: &str,
        deploy_text: &str,
    ) -> LaunchRequest {
        LaunchRequest {
            location: location.to_string(),
            arguments: parse_arguments(&self.transformer.transform(args_text)),
            environment: parse_properties(env_text),
            deployment: parse_properties(deploy_text),
        }
    }
}

impl Default for LaunchRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
