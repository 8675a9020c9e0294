//! Human-readable dump of a compiled pattern.

use std::fmt::Write as _;

use regroup_compiler::NamedPattern;
use regroup_core::Colors;

/// Render the source, native rewrite, group count and name index.
pub fn dump(pattern: &NamedPattern, colors: Colors) -> String {
    let mut out = String::new();
    dump_pattern(&mut out, pattern, colors);
    dump_names(&mut out, pattern, colors);
    out
}

fn dump_pattern(out: &mut String, pattern: &NamedPattern, c: Colors) {
    writeln!(out, "{}[pattern]{}", c.section, c.reset).unwrap();
    writeln!(out, "source {}{:?}{}", c.text, pattern.source(), c.reset).unwrap();
    writeln!(
        out,
        "native {}{:?}{}",
        c.text,
        pattern.native_pattern(),
        c.reset
    )
    .unwrap();
    writeln!(out, "groups {}", pattern.group_count()).unwrap();
}

fn dump_names(out: &mut String, pattern: &NamedPattern, c: Colors) {
    let index = pattern.occurrences_by_name();
    if index.is_empty() {
        return;
    }

    let width = index.keys().map(|name| name.len()).max().unwrap_or(0);

    out.push('\n');
    writeln!(out, "{}[names]{}", c.section, c.reset).unwrap();
    for (name, occurrences) in index {
        write!(out, "{name:width$}").unwrap();
        for occ in occurrences {
            write!(out, " {}{occ}{}", c.occurrence, c.reset).unwrap();
        }
        out.push('\n');
    }
}
