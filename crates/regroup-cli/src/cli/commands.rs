//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("regroup")
        .about("Named capture groups over a positional regex engine")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a pattern")
        .after_help(
            r#"EXAMPLES:
  regroup check '(?<year>[0-9]{4})'
  regroup check -p rule.re"#,
        )
        .arg(pattern_text_arg())
        .arg(pattern_file_arg())
        .arg(color_arg())
}

/// Show the native rewrite and name index.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the compiled pattern and its name index")
        .after_help(
            r#"EXAMPLES:
  regroup dump '(?<x>a)|(?<x>b)'
  regroup dump -p rule.re --color never
  regroup dump '(?<year>[0-9]{4})' --json"#,
        )
        .arg(pattern_text_arg())
        .arg(pattern_file_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Match input and print named groups as JSON.
pub fn exec_command() -> Command {
    Command::new("exec")
        .about("Match input and print named groups as JSON")
        .override_usage(
            "\
  regroup exec <PATTERN> <INPUT>
  regroup exec <PATTERN> -i <FILE>
  regroup exec -p <FILE> <INPUT>",
        )
        .after_help(
            r#"EXAMPLES:
  regroup exec '(?<h>[0-9]+):(?<m>[0-9]+)' '12:30'
  regroup exec '(?<word>[a-z]+)' -i notes.txt --all --compact"#,
        )
        .arg(pattern_text_arg())
        .arg(input_text_arg())
        .arg(pattern_file_arg())
        .arg(input_file_arg())
        .arg(all_arg())
        .arg(compact_arg())
        .arg(color_arg())
}
