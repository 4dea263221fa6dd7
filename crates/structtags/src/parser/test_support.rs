//! Test helpers for asserting parser outcomes.
use super::parse;
use crate::errors::ParseError;
use crate::tag::{Tag, Tags};

pub(crate) fn parse_ok(raw: &str) -> Tags {
    match parse(raw) {
        Ok(tags) => tags,
        Err(err) => panic!("raw tag {raw:?} should parse: {err}"),
    }
}

pub(crate) fn parse_err(raw: &str) -> ParseError {
    match parse(raw) {
        Ok(tags) => panic!("raw tag {raw:?} should fail to parse, got {tags:?}"),
        Err(err) => err,
    }
}

pub(crate) fn single_tag(raw: &str, name: &str) -> Tag {
    let mut tags = parse_ok(raw);
    assert_eq!(tags.len(), 1, "expected exactly one tag in {raw:?}");
    match tags.remove(name) {
        Some(tag) => tag,
        None => panic!("tag `{name}` missing from {raw:?}"),
    }
}
