//! Array-based serialization of option sets and tags.
#![cfg(feature = "serde")]
#![expect(clippy::expect_used, reason = "tests assert serialization outcomes")]

use rstest::rstest;
use serde_json::json;
use structtags::{OptionSet, Tag, parse};

#[test]
fn option_set_serializes_as_string_array() {
    let options = OptionSet::from(["omitempty", "string"]);
    let value = serde_json::to_value(&options).expect("option set should serialize");
    let mut items: Vec<String> =
        serde_json::from_value(value).expect("serialized form should be a string array");
    items.sort();
    assert_eq!(items, ["omitempty", "string"]);
}

#[test]
fn option_set_round_trips_through_json() {
    let options = OptionSet::from(["a", "b", ""]);
    let text = serde_json::to_string(&options).expect("option set should serialize");
    let decoded: OptionSet = serde_json::from_str(&text).expect("option set should decode");
    assert_eq!(decoded, options);
}

#[rstest]
#[case("[]", &[])]
#[case("null", &[])]
#[case(r#"["a","a","b"]"#, &["a", "b"])]
fn option_set_decodes_arrays(#[case] text: &str, #[case] expected: &[&str]) {
    let decoded: OptionSet = serde_json::from_str(text).expect("array should decode");
    assert_eq!(decoded, expected.iter().copied().collect::<OptionSet>());
}

#[rstest]
#[case(r#""omitempty""#)]
#[case("42")]
#[case(r#"["a", 1]"#)]
#[case(r#"{"a": true}"#)]
fn option_set_rejects_non_arrays(#[case] text: &str) {
    assert!(serde_json::from_str::<OptionSet>(text).is_err());
}

#[test]
fn tag_omits_empty_fields() {
    let empty = serde_json::to_value(Tag::default()).expect("tag should serialize");
    assert_eq!(empty, json!({}));

    let value_only = serde_json::to_value(Tag::new("id", OptionSet::new()))
        .expect("tag should serialize");
    assert_eq!(value_only, json!({ "value": "id" }));

    let full = serde_json::to_value(Tag::new("id", OptionSet::from(["omitempty"])))
        .expect("tag should serialize");
    assert_eq!(full, json!({ "value": "id", "options": ["omitempty"] }));
}

#[test]
fn tag_decodes_with_missing_fields() {
    let tag: Tag = serde_json::from_str(r#"{"options": ["x", "x"]}"#).expect("tag should decode");
    assert_eq!(tag, Tag::new("", OptionSet::from(["x"])));

    let tag: Tag = serde_json::from_str(r#"{"value": "id", "options": null}"#)
        .expect("tag should decode");
    assert_eq!(tag, Tag::new("id", OptionSet::new()));
}

#[test]
fn tag_rejects_malformed_options() {
    let result = serde_json::from_str::<Tag>(r#"{"value": "id", "options": "x"}"#);
    assert!(result.is_err());
}

#[test]
fn parsed_tags_round_trip_through_json() {
    let tags = parse(r#"json:"id,omitempty" db:"user_id""#).expect("tags should parse");
    let text = serde_json::to_string(&tags).expect("tags should serialize");
    let decoded: structtags::Tags = serde_json::from_str(&text).expect("tags should decode");
    assert_eq!(decoded, tags);
}
