use std::path::PathBuf;

use regroup_core::Colors;
use regroup_lib::{NamedPattern, dump};
use serde_json::{Map, Value, json};

use super::check::render_error;
use super::loader::load_pattern;

pub struct DumpArgs {
    pub pattern_text: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let source = load_pattern(args.pattern_text.as_deref(), args.pattern_file.as_deref())
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        });

    let pattern = NamedPattern::compile(&source).unwrap_or_else(|e| {
        let path = args.pattern_file.as_deref().and_then(|p| p.to_str());
        eprint!("{}", render_error(&e, &source, path, args.color));
        std::process::exit(1);
    });

    if !args.json {
        print!("{}", dump(&pattern, Colors::new(args.color)));
        return;
    }

    match pattern_to_json(&pattern).and_then(|v| serde_json::to_string_pretty(&v)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Compiled pattern as JSON, names in declaration order.
pub(crate) fn pattern_to_json(pattern: &NamedPattern) -> Result<Value, serde_json::Error> {
    let mut names = Map::new();
    for (name, occurrences) in pattern.occurrences_by_name() {
        names.insert(name.clone(), serde_json::to_value(occurrences)?);
    }

    Ok(json!({
        "source": pattern.source(),
        "native": pattern.native_pattern(),
        "group_count": pattern.group_count(),
        "names": names,
    }))
}
