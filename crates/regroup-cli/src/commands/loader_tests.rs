use std::io::Write;
use std::path::Path;

use super::loader::{LoadError, load_input, load_pattern};

#[test]
fn inline_pattern() {
    assert_eq!(load_pattern(Some("(?<a>x)"), None).unwrap(), "(?<a>x)");
}

#[test]
fn missing_pattern() {
    let err = load_pattern(None, None).unwrap_err();
    assert!(matches!(err, LoadError::Missing("pattern", _)));
    assert_eq!(
        err.to_string(),
        "pattern is required: pass it inline or use -p/--pattern-file"
    );
}

#[test]
fn pattern_given_twice() {
    let err = load_pattern(Some("a"), Some(Path::new("rule.re"))).unwrap_err();
    assert!(matches!(err, LoadError::Ambiguous("pattern")));
}

#[test]
fn pattern_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "(?<year>[0-9]{{4}})").unwrap();
    assert_eq!(
        load_pattern(None, Some(file.path())).unwrap(),
        "(?<year>[0-9]{4})"
    );
}

#[test]
fn unreadable_file() {
    let err = load_input(None, Some(Path::new("/nonexistent/regroup-input")), None).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read /nonexistent/regroup-input"));
}

#[test]
fn stdin_only_once() {
    let err = load_input(None, Some(Path::new("-")), Some(Path::new("-"))).unwrap_err();
    assert!(matches!(err, LoadError::StdinTwice));
}
