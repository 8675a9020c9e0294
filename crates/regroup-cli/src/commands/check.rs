use std::path::PathBuf;

use regroup_lib::NamedPattern;

use super::loader::load_pattern;

pub struct CheckArgs {
    pub pattern_text: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = load_pattern(args.pattern_text.as_deref(), args.pattern_file.as_deref())
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        });

    if let Err(e) = NamedPattern::compile(&source) {
        let path = args.pattern_file.as_deref().and_then(|p| p.to_str());
        eprint!("{}", render_error(&e, &source, path, args.color));
        std::process::exit(1);
    }
}

pub(crate) fn render_error(
    error: &regroup_lib::PatternSyntaxError,
    source: &str,
    path: Option<&str>,
    color: bool,
) -> String {
    let mut printer = error.printer(source).colored(color);
    if let Some(path) = path {
        printer = printer.path(path);
    }
    let mut out = printer.render();
    out.push('\n');
    out
}
