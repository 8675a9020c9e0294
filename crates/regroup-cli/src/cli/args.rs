//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be composed
//! into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Inline pattern text (positional).
pub fn pattern_text_arg() -> Arg {
    Arg::new("pattern_text")
        .value_name("PATTERN")
        .help("Pattern with (?<name>...) groups")
}

/// Pattern file (-p/--pattern-file).
pub fn pattern_file_arg() -> Arg {
    Arg::new("pattern_file")
        .short('p')
        .long("pattern-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the pattern from a file (use \"-\" for stdin)")
}

/// Inline input text (positional).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .value_name("INPUT")
        .help("Text to match against")
}

/// Input file (-i/--input-file).
pub fn input_file_arg() -> Arg {
    Arg::new("input_file")
        .short('i')
        .long("input-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the input from a file (use \"-\" for stdin)")
}

/// Report every match (--all).
pub fn all_arg() -> Arg {
    Arg::new("all")
        .long("all")
        .action(ArgAction::SetTrue)
        .help("Report every match instead of the first")
}

/// Compact JSON output (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Print compact JSON")
}

/// JSON dump output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the name index as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
