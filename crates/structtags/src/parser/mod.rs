//! Entry point for parsing raw struct tag strings.

mod machine;
#[cfg(test)]
pub(crate) mod test_support;

use crate::errors::ParseError;
use crate::tag::Tags;

use machine::Machine;

/// Parse a raw struct tag string into its tags, keyed by name.
///
/// The input is a whitespace-separated list of `name:"value,opt1,opt2"`
/// segments. When a name appears more than once the last segment wins.
/// Parsing is all-or-nothing: any malformed segment fails the whole call.
///
/// # Errors
/// Returns [`ParseError`] when the input is empty, a segment lacks a colon,
/// or a value is missing or not properly quoted.
///
/// # Examples
/// ```
/// let tags = structtags::parse(r#"json:"id,omitempty" db:"user_id""#)
///     .expect("example ensures fallible call succeeds");
/// let json = &tags["json"];
/// assert_eq!(json.value(), "id");
/// assert!(json.has_option("omitempty"));
/// assert_eq!(tags["db"].value(), "user_id");
/// ```
pub fn parse(raw: &str) -> Result<Tags, ParseError> {
    Machine::new(raw)
        .run()
        .inspect(|tags| log::debug!("parsed {} tag(s)", tags.len()))
}
