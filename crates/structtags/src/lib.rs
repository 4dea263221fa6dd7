//! Parser for enhanced struct tags.
//!
//! A raw tag string is a whitespace-separated list of `name:"value,opt"`
//! segments, as used to annotate fields with serialization metadata. The
//! crate turns such a string into a map from tag name to [`Tag`], where each
//! tag holds its primary value and an [`OptionSet`] of boolean options.
//!
//! ```
//! use structtags::parse;
//!
//! let tags = parse(r#"json:"name,omitempty" xml:"Name""#)
//!     .expect("example ensures fallible call succeeds");
//! assert_eq!(tags.len(), 2);
//! assert!(tags["json"].has_option("omitempty"));
//! ```
//!
//! With the default `serde` feature, [`OptionSet`] serializes as an array of
//! strings and [`Tag`] as an object with `value` and `options` fields.
//!
//! The parser logs state transitions through the [`log`] facade at trace
//! level; it never installs a logger itself.

mod errors;
mod option_set;
mod parser;
mod tag;

pub use errors::ParseError;
pub use option_set::{Iter, OptionSet};
pub use parser::parse;
pub use tag::{Tag, Tags};
