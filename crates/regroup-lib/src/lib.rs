//! Named capture groups for a regex engine that only numbers its groups.
//!
//! Patterns are written with `(?<name>...)` groups, compiled by
//! `regroup-compiler` into the engine's positional form, and matched through
//! `regex-automata`. Match results answer queries by name as well as by index.
//!
//! - `positional` - the positional capability (`PositionalMatch`) and its engine adapter
//! - `named_match` - the name-aware match view
//! - `regex` - `NamedRegex`, a compiled pattern bundled with its engine
//! - `dump` - human-readable dump of a compiled pattern

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod dump;
pub mod named_match;
pub mod positional;
pub mod regex;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod named_match_tests;
#[cfg(test)]
mod regex_tests;

pub use dump::dump;
pub use named_match::{MatchError, NamedMatch};
pub use positional::{EngineMatch, PositionalMatch, RecordedMatch};
pub use regex::{BuildError, CapturesIter, NamedRegex};
pub use regroup_compiler::{ErrorPrinter, NamedPattern, PatternSyntaxError, compile};
pub use regroup_core::{Colors, GroupOccurrence};
