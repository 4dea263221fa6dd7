//! Set of boolean option names attached to a tag.
//!
//! Options are stored in a hash set, so membership is all that matters:
//! enabling an option twice has no further effect and iteration order is
//! unspecified. At serialization boundaries the set travels as an array of
//! strings.

use std::collections::HashSet;
use std::collections::hash_set;

/// A set of option names such as `omitempty`.
///
/// # Examples
/// ```
/// use structtags::OptionSet;
///
/// let mut options = OptionSet::new();
/// options.enable("omitempty");
/// options.enable("omitempty");
/// assert!(options.contains("omitempty"));
/// assert_eq!(options.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    options: HashSet<String>,
}

impl OptionSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a sequence of option names, collapsing duplicates.
    ///
    /// # Examples
    /// ```
    /// use structtags::OptionSet;
    ///
    /// let options = OptionSet::from_vec(vec!["a".into(), "b".into(), "a".into()]);
    /// assert_eq!(options.len(), 2);
    /// ```
    #[must_use]
    pub fn from_vec(options: Vec<String>) -> Self {
        options.into_iter().collect()
    }

    /// Mark `option` as set. Enabling an option already present is a no-op.
    pub fn enable(&mut self, option: impl Into<String>) {
        self.options.insert(option.into());
    }

    /// Whether `option` is set.
    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        self.options.contains(option)
    }

    /// Number of distinct options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over the options in unspecified order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.options.iter())
    }

    /// Snapshot the set as a vector holding every option exactly once.
    ///
    /// The order is unspecified and may differ between calls.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.options.iter().cloned().collect()
    }
}

/// Borrowing iterator over the options of an [`OptionSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a>(hash_set::Iter<'a, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for OptionSet {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.into_iter()
    }
}

impl<S: Into<String>> FromIterator<S> for OptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for OptionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for option in iter {
            self.enable(option);
        }
    }
}

impl From<Vec<String>> for OptionSet {
    fn from(options: Vec<String>) -> Self {
        Self::from_vec(options)
    }
}

impl<const N: usize> From<[&str; N]> for OptionSet {
    fn from(options: [&str; N]) -> Self {
        options.into_iter().collect()
    }
}

impl From<OptionSet> for Vec<String> {
    fn from(set: OptionSet) -> Self {
        set.options.into_iter().collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OptionSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.options)
    }
}

/// Accepts an array of strings; `null` decodes to an empty set.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OptionSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let options = <Option<Vec<String>> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(options.map(Self::from_vec).unwrap_or_default())
    }
}
