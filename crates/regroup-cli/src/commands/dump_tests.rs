use regroup_lib::NamedPattern;

use super::dump::pattern_to_json;

#[test]
fn json_lists_occurrences_per_name() {
    let pattern = NamedPattern::compile("(?<x>a)|(?<y>b)|(?<x>c)").unwrap();
    let value = pattern_to_json(&pattern).unwrap();
    insta::assert_snapshot!(serde_json::to_string_pretty(&value).unwrap(), @r#"
    {
      "source": "(?<x>a)|(?<y>b)|(?<x>c)",
      "native": "(a)|(b)|(c)",
      "group_count": 3,
      "names": {
        "x": [
          {
            "group_index": 1,
            "source_offset": 0
          },
          {
            "group_index": 3,
            "source_offset": 16
          }
        ],
        "y": [
          {
            "group_index": 2,
            "source_offset": 8
          }
        ]
      }
    }
    "#);
}

#[test]
fn json_without_names() {
    let pattern = NamedPattern::compile("(a)").unwrap();
    let value = pattern_to_json(&pattern).unwrap();
    assert_eq!(value["group_count"], 1);
    assert_eq!(value["names"], serde_json::json!({}));
}
