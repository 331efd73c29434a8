//! Argument transformer hook.
//!
//! The raw command-line argument string can be rewritten before parsing, e.g.
//! to inject per-tick values or rewrite operator shorthand. The default is a
//! pass-through; callers install a custom transformer on the builder.

/// Rewrites the configured command-line argument string before it is parsed.
pub trait ArgumentTransformer {
    /// Transform the configured command-line arguments.
    ///
    /// Receives the raw operator-supplied string and returns the string that
    /// will actually be tokenized into the launch request's arguments.
    fn transform(&self, args_text: &str) -> String;
}

/// Default transformer: returns the argument string unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughTransformer;

impl ArgumentTransformer for PassThroughTransformer {
    fn transform(&self, args_text: &str) -> String {
        args_text.to_string()
    }
}
