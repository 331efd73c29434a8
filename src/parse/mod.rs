//! Parsers for operator-supplied argument and property strings.
//!
//! This module converts the loosely-quoted, delimiter-separated configuration
//! text into structured values:
//!
//! - `parse_properties` - comma-delimited `key=value` pairs into a map
//! - `parse_arguments` - space-delimited tokens (quote-aware) into a list
//! - `strip_quoting` - the shared helper that removes wrapping quote pairs
//!
//! All three are pure functions with no failure path: malformed input degrades
//! to partial results (segments without `=` are dropped, unbalanced quotes are
//! passed through as literal characters). This lenient policy is deliberate;
//! the surrounding layers favor emitting a partial launch request over
//! rejecting an operator's configuration outright.

mod arguments;
mod properties;
mod quoting;


// Re-export public API
pub use arguments::parse_arguments;
pub use properties::parse_properties;
pub use quoting::strip_quoting;
