//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `Into<*Args>` impls bridge dispatch to the command handlers
//! - with `-p`, a single positional is the input, not the pattern

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;

pub struct CheckParams {
    pub pattern_text: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern_text: p.pattern_text,
            pattern_file: p.pattern_file,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern_text: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub json: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern_text: p.pattern_text,
            pattern_file: p.pattern_file,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub pattern_text: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub input_text: Option<String>,
    pub input_file: Option<PathBuf>,
    pub all: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let pattern_file = m.get_one::<PathBuf>("pattern_file").cloned();
        let pattern_text = m.get_one::<String>("pattern_text").cloned();
        let input_text = m.get_one::<String>("input_text").cloned();

        let (pattern_text, input_text) =
            shift_positional_to_input(pattern_file.is_some(), pattern_text, input_text);

        Self {
            pattern_text,
            pattern_file,
            input_text,
            input_file: m.get_one::<PathBuf>("input_file").cloned(),
            all: m.get_flag("all"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            pattern_text: p.pattern_text,
            pattern_file: p.pattern_file,
            input_text: p.input_text,
            input_file: p.input_file,
            all: p.all,
            pretty: !p.compact,
            color: p.color.should_colorize(),
        }
    }
}

/// With `-p`, the first positional slot holds the input text.
fn shift_positional_to_input(
    has_pattern_file: bool,
    pattern_text: Option<String>,
    input_text: Option<String>,
) -> (Option<String>, Option<String>) {
    if has_pattern_file && input_text.is_none() {
        return (None, pattern_text);
    }
    (pattern_text, input_text)
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
