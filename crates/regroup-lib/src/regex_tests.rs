use std::sync::Arc;

use crate::{BuildError, NamedRegex, PatternSyntaxError, PositionalMatch, compile};

#[test]
fn no_match_yields_none() {
    let re = NamedRegex::new("(?<year>[0-9]{4})").unwrap();
    assert!(re.captures("no digits").is_none());
    assert!(!re.is_match("no digits"));
    assert!(re.is_match("in 2015"));
}

#[test]
fn iterates_all_matches() {
    let re = NamedRegex::new("(?<year>[0-9]{4})-(?<month>[0-9]{2})").unwrap();
    let found: Vec<_> = re
        .captures_iter("2015-10, 2016-11")
        .map(|m| {
            (
                m.group("year").unwrap().unwrap().to_string(),
                m.start("month").unwrap().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        found,
        [("2015".to_string(), 5), ("2016".to_string(), 14)]
    );
}

#[test]
fn byte_offsets_with_multibyte_text() {
    let re = NamedRegex::new("(?<w>ü+)").unwrap();
    let m = re.captures("aüü").unwrap();
    assert_eq!(m.start("w"), Ok(Some(1)));
    assert_eq!(m.end("w"), Ok(Some(5)));
    assert_eq!(m.group("w"), Ok(Some("üü")));
}

#[test]
fn syntax_error_is_propagated() {
    assert_eq!(
        NamedRegex::new("(?<1x>a)").unwrap_err(),
        BuildError::Syntax(PatternSyntaxError::InvalidGroupNameCharacter { offset: 3, ch: '1' })
    );
}

#[test]
fn engine_rejection_is_reported() {
    let err = NamedRegex::new("(?<=a)(?<x>b)").unwrap_err();
    assert!(
        matches!(&err, BuildError::EngineRejected(native, _) if native == "(?<=a)(b)"),
        "{err:?}"
    );
}

#[test]
fn verbose_comments_keep_engine_numbering() {
    let re = NamedRegex::new("(?x)\n(?<year>[0-9]{4}) # year (4 digits)").unwrap();
    let m = re.captures("in 2015").unwrap();
    assert_eq!(m.group("year"), Ok(Some("2015")));

    let re = NamedRegex::new("(?x)#(\n(?<a>x)#)\n# [\n(y)]").unwrap();
    let m = re.captures("xy]").unwrap();
    assert_eq!(m.index_of("a"), Ok(Some(1)));
    assert_eq!(m.group("a"), Ok(Some("x")));
    assert_eq!(m.group_at(2), Some("y"));
}

#[test]
fn from_compiled_pattern() {
    let pattern = compile("(?<a>x)").unwrap();
    let re = NamedRegex::from_pattern(pattern.clone()).unwrap();
    assert_eq!(re.pattern(), &pattern);
}

#[test]
fn shared_across_threads_with_own_captures() {
    let re = Arc::new(NamedRegex::new("(?<n>[0-9]+)").unwrap());
    let handles: Vec<_> = ["a1", "b22", "c333"]
        .into_iter()
        .map(|input| {
            let re = Arc::clone(&re);
            std::thread::spawn(move || {
                let m = re.captures(input).unwrap();
                m.group("n").unwrap().map(str::len)
            })
        })
        .collect();

    let lens: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(lens, [Some(1), Some(2), Some(3)]);
}
