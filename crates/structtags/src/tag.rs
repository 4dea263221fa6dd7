//! Parsed representation of a single tag segment.

use std::collections::HashMap;
use std::fmt;

use crate::option_set::OptionSet;

/// Mapping from tag name to its parsed content, as returned by
/// [`parse`](crate::parse).
pub type Tags = HashMap<String, Tag>;

/// One parsed `name:"value,opt1,opt2"` segment.
///
/// The value usually renames the annotated field; for example
/// `json:"foo,omitempty"` has the value `foo` and the option `omitempty`.
/// When serialized, empty values and empty option sets are omitted.
///
/// # Examples
/// ```
/// use structtags::{OptionSet, Tag};
///
/// let tag = Tag::new("foo", OptionSet::from(["omitempty"]));
/// assert_eq!(tag.value(), "foo");
/// assert!(tag.has_option("omitempty"));
/// assert_eq!(tag.to_string(), "foo,omitempty");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "String::is_empty")
    )]
    value: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "OptionSet::is_empty")
    )]
    options: OptionSet,
}

impl Tag {
    /// Create a tag from its value and options.
    #[must_use]
    pub fn new(value: impl Into<String>, options: OptionSet) -> Self {
        Self {
            value: value.into(),
            options,
        }
    }

    /// The primary payload, possibly empty.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Boolean options following the value.
    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Shorthand for `self.options().contains(option)`.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.contains(option)
    }

    /// Split the tag into its value and options.
    #[must_use]
    pub fn into_parts(self) -> (String, OptionSet) {
        (self.value, self.options)
    }
}

/// Renders the quoted content, i.e. `value,opt1,opt2`, with options sorted.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)?;
        let mut options: Vec<&str> = self.options.iter().collect();
        options.sort_unstable();
        for option in options {
            write!(f, ",{option}")?;
        }
        Ok(())
    }
}
