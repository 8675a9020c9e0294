//! regroup compiler: rewrites named-group patterns for a positional engine.
//!
//! This crate provides:
//! - `scanner` - single-pass rewrite of `(?<name>...)` into `(...)` with capture numbering
//! - `pattern` - the immutable `NamedPattern` and its name index
//! - `error` - pattern syntax errors
//! - `diagnostics` - source-annotated error rendering

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod error;
pub mod pattern;
mod scanner;


pub use diagnostics::ErrorPrinter;
pub use error::PatternSyntaxError;
pub use pattern::NamedPattern;
pub use regroup_core::GroupOccurrence;

/// Compile named-group pattern source.
///
/// Shorthand for [`NamedPattern::compile`].
pub fn compile(source: &str) -> Result<NamedPattern, PatternSyntaxError> {
    NamedPattern::compile(source)
}
