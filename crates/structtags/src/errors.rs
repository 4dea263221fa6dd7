//! Error types surfaced by the tag parser.

use thiserror::Error;

/// Errors surfaced while parsing a raw struct tag string.
///
/// Every variant records the byte offset (zero-based) into the original input
/// at which the grammar violation was detected. Variants raised after a tag
/// name has been read also carry that name.
///
/// # Examples
/// ```
/// use structtags::{ParseError, parse};
///
/// let err = parse(r#"json:"value"#).unwrap_err();
/// assert_eq!(
///     err,
///     ParseError::MissingCloseQuote {
///         name: "json".into(),
///         position: 6,
///     }
/// );
/// assert_eq!(err.tag_name(), Some("json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing but whitespace was left where a tag name was expected.
    #[error("raw tag string must not be empty at byte {position} (zero-based)")]
    EmptyInput {
        /// Offset at which the empty remainder starts.
        position: usize,
    },
    /// The segment contains no colon separating name and value.
    #[error("no or invalid tag name (missing colon) at byte {position} (zero-based)")]
    MissingTagName {
        /// Offset of the first byte of the offending segment.
        position: usize,
    },
    /// Nothing follows the colon.
    #[error("no value found for tag `{name}` at byte {position} (zero-based)")]
    MissingValue {
        /// Name of the tag being parsed.
        name: String,
        /// Offset just past the colon.
        position: usize,
    },
    /// No `"` follows the colon.
    #[error("no opening quote found for tag `{name}` at byte {position} (zero-based)")]
    MissingOpenQuote {
        /// Name of the tag being parsed.
        name: String,
        /// Offset just past the colon.
        position: usize,
    },
    /// The opening `"` is never closed.
    #[error("no closing quote found for tag `{name}` at byte {position} (zero-based)")]
    MissingCloseQuote {
        /// Name of the tag being parsed.
        name: String,
        /// Offset just past the opening quote.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset (zero-based) into the raw input where parsing failed.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::EmptyInput { position }
            | Self::MissingTagName { position }
            | Self::MissingValue { position, .. }
            | Self::MissingOpenQuote { position, .. }
            | Self::MissingCloseQuote { position, .. } => *position,
        }
    }

    /// Name of the tag whose value failed to parse, when one was read.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::EmptyInput { .. } | Self::MissingTagName { .. } => None,
            Self::MissingValue { name, .. }
            | Self::MissingOpenQuote { name, .. }
            | Self::MissingCloseQuote { name, .. } => Some(name),
        }
    }
}
