use std::path::PathBuf;

use regroup_lib::{BuildError, NamedMatch, NamedRegex, PositionalMatch};
use serde_json::{Map, Value};

use super::check::render_error;
use super::loader::{load_input, load_pattern};

pub struct ExecArgs {
    pub pattern_text: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub input_text: Option<String>,
    pub input_file: Option<PathBuf>,
    pub all: bool,
    pub pretty: bool,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    let source = load_pattern(args.pattern_text.as_deref(), args.pattern_file.as_deref())
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        });

    let input = load_input(
        args.input_text.as_deref(),
        args.input_file.as_deref(),
        args.pattern_file.as_deref(),
    )
    .unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let regex = match NamedRegex::new(&source) {
        Ok(regex) => regex,
        Err(BuildError::Syntax(e)) => {
            let path = args.pattern_file.as_deref().and_then(|p| p.to_str());
            eprint!("{}", render_error(&e, &source, path, args.color));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let value = collect_matches(&regex, &input, args.all);
    log::debug!("exec produced {value}");

    let output = if args.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// First match as an object (or `null`), or every match as an array.
pub(crate) fn collect_matches(regex: &NamedRegex, input: &str, all: bool) -> Value {
    if all {
        return Value::Array(
            regex
                .captures_iter(input)
                .map(|m| match_to_json(&m))
                .collect(),
        );
    }
    regex
        .captures(input)
        .map_or(Value::Null, |m| match_to_json(&m))
}

/// Named groups in declaration order; non-participating groups are `null`.
pub(crate) fn match_to_json<M: PositionalMatch>(m: &NamedMatch<'_, M>) -> Value {
    let groups: Map<String, Value> = m
        .ordered_groups()
        .into_iter()
        .map(|(name, text)| {
            let text = text.map_or(Value::Null, |t| Value::String(t.to_owned()));
            (name.to_owned(), text)
        })
        .collect();
    Value::Object(groups)
}
