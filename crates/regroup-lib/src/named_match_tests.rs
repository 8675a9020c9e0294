use crate::{
    MatchError, NamedMatch, NamedPattern, NamedRegex, PositionalMatch, RecordedMatch, compile,
};

#[test]
fn duplicate_name_resolves_to_matching_branch() {
    let re = NamedRegex::new("(?<x>a)|(?<x>b)").unwrap();
    let m = re.captures("b").unwrap();

    assert_eq!(re.pattern().occurrences("x").unwrap().len(), 2);
    assert_eq!(m.named_groups()["x"], Some("b"));
    assert_eq!(m.group("x"), Ok(Some("b")));
    assert_eq!(m.start("x"), Ok(Some(0)));
    assert_eq!(m.end("x"), Ok(Some(1)));
    assert_eq!(m.index_of("x"), Ok(Some(2)));
}

#[test]
fn ordered_groups_follow_declaration_order() {
    let re = NamedRegex::new("(?<zone>[A-Z]+)/(?<city>[a-z]+)|(?<zone>UTC)").unwrap();

    let m = re.captures("UTC").unwrap();
    assert_eq!(m.ordered_groups(), [("zone", Some("UTC")), ("city", None)]);

    let m = re.captures("EU/paris").unwrap();
    assert_eq!(
        m.ordered_groups(),
        [("zone", Some("EU")), ("city", Some("paris"))]
    );
}

#[test]
fn unknown_name_is_an_error() {
    let re = NamedRegex::new("(?<year>[0-9]+)").unwrap();
    let m = re.captures("2015").unwrap();

    let expected = Err(MatchError::UnknownGroupName {
        name: "month".to_string(),
    });
    assert_eq!(m.group("month"), expected);
    assert!(matches!(
        m.start("month"),
        Err(MatchError::UnknownGroupName { .. })
    ));
    assert_eq!(
        m.group("month").unwrap_err().to_string(),
        r#"unknown group name "month""#
    );
}

#[test]
fn non_participating_group_is_absent_not_error() {
    let re = NamedRegex::new("(?<sign>-)?(?<digits>[0-9]+)").unwrap();
    let m = re.captures("42").unwrap();

    assert_eq!(m.group("sign"), Ok(None));
    assert_eq!(m.start("sign"), Ok(None));
    assert_eq!(m.end("sign"), Ok(None));
    assert_eq!(m.span("sign"), Ok(None));
    assert_eq!(m.index_of("sign"), Ok(None));
    assert_eq!(m.group("digits"), Ok(Some("42")));
}

#[test]
fn empty_capture_is_present() {
    let re = NamedRegex::new("(?<pad>a*)b").unwrap();
    let m = re.captures("b").unwrap();
    assert_eq!(m.group("pad"), Ok(Some("")));
    assert_eq!(m.span("pad"), Ok(Some(0..0)));
}

#[test]
fn named_groups_has_every_declared_name() {
    let re = NamedRegex::new("(?<h>[0-9]{2}):(?<m>[0-9]{2})(?::(?<s>[0-9]{2}))?").unwrap();
    let m = re.captures("at 12:30").unwrap();
    let groups = m.named_groups();

    assert_eq!(groups.len(), 3);
    assert_eq!(groups["h"], Some("12"));
    assert_eq!(groups["m"], Some("30"));
    assert_eq!(groups["s"], None);
    assert_eq!(m.start("h"), Ok(Some(3)));
}

#[test]
fn positional_queries_delegate() {
    let re = NamedRegex::new("(a)(?<x>b)").unwrap();
    let m = re.captures("zab").unwrap();

    assert_eq!(m.group_len(), 3);
    assert_eq!(m.group_at(0), Some("ab"));
    assert_eq!(m.group_at(1), Some("a"));
    assert_eq!(m.group_at(2), Some("b"));
    assert_eq!(m.group_at(3), None);
    assert_eq!(m.start_at(0), Some(1));
    assert_eq!(m.end_at(2), Some(3));
    assert_eq!(m.haystack(), "zab");
}

#[test]
fn first_participating_occurrence_wins() {
    let pattern = compile("(?<x>a)|(?<x>b)").unwrap();

    let both = RecordedMatch::new("ab", vec![Some(0..2), Some(1..2), Some(0..1)]);
    let m = NamedMatch::new(&pattern, both);
    assert_eq!(m.group("x"), Ok(Some("b")));

    let second_only = RecordedMatch::new("ab", vec![Some(0..1), None, Some(0..1)]);
    let m = NamedMatch::new(&pattern, second_only);
    assert_eq!(m.group("x"), Ok(Some("a")));
    assert_eq!(m.index_of("x"), Ok(Some(2)));

    let neither = RecordedMatch::new("ab", vec![Some(0..0), None, None]);
    let m = NamedMatch::new(&pattern, neither);
    assert_eq!(m.group("x"), Ok(None));
}

#[test]
fn view_over_borrowed_handle() {
    let pattern: NamedPattern = "(?<k>[a-z]+)=(?<v>[0-9]+)".parse().unwrap();
    let handle = RecordedMatch::new("k=1", vec![Some(0..3), Some(0..1), Some(2..3)]);

    let m = NamedMatch::new(&pattern, &handle);
    assert_eq!(m.group("v"), Ok(Some("1")));
    assert_eq!(m.pattern(), &pattern);
    assert_eq!(*m.positional(), &handle);

    let owned = NamedMatch::new(&pattern, handle.clone()).into_positional();
    assert_eq!(owned, handle);
}
