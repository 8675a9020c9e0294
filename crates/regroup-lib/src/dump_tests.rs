use crate::{Colors, compile, dump};

#[test]
fn dump_with_names() {
    let p = compile("(?<zone>[A-Z]+)/(?<city>[a-z]+)|(?<zone>UTC)").unwrap();
    insta::assert_snapshot!(dump(&p, Colors::OFF), @r#"
    [pattern]
    source "(?<zone>[A-Z]+)/(?<city>[a-z]+)|(?<zone>UTC)"
    native "([A-Z]+)/([a-z]+)|(UTC)"
    groups 3

    [names]
    zone #1@0 #3@32
    city #2@16
    "#);
}

#[test]
fn dump_without_names() {
    let p = compile("(a)(?:b)").unwrap();
    insta::assert_snapshot!(dump(&p, Colors::OFF), @r#"
    [pattern]
    source "(a)(?:b)"
    native "(a)(?:b)"
    groups 1
    "#);
}

#[test]
fn dump_colored() {
    let p = compile("(?<a>x)").unwrap();
    let out = dump(&p, Colors::ON);
    assert!(out.contains("\x1b[34m[names]\x1b[0m"));
    assert!(out.contains("\x1b[2m#1@0\x1b[0m"));
}
