//! Header sets and merging.
//!
//! [`Headers`] is an insertion-ordered mapping from case-insensitive header
//! names to scalar or list values. [`merge_headers`] combines multiple
//! sources right-biased (later sources override earlier ones key by key).
//!
//! An explicit null value ([`Headers::unset`]) survives merging, so a later
//! source can cancel a default set by an earlier one; the null entry is then
//! dropped by [`Headers::flatten`], the conversion step that produces the
//! wire-level header list handed to the transport.

use indexmap::IndexMap;

use crate::value::Scalar;

/// A header value: one scalar or a list of scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    /// Single value.
    Scalar(Scalar),
    /// Multiple values, folded to one comma-separated wire value.
    List(Vec<Scalar>),
}

impl HeaderValue {
    /// Returns `true` if this value contributes nothing on the wire.
    #[must_use]
    pub fn is_nullish(&self) -> bool {
        match self {
            Self::Scalar(scalar) => scalar.is_null(),
            Self::List(items) => items.iter().all(Scalar::is_null),
        }
    }
}

impl From<Scalar> for HeaderValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<bool> for HeaderValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i64> for HeaderValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<u64> for HeaderValue {
    fn from(value: u64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<Vec<Scalar>> for HeaderValue {
    fn from(value: Vec<Scalar>) -> Self {
        Self::List(value)
    }
}

/// An insertion-ordered header set with case-insensitive names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headers {
    entries: IndexMap<String, HeaderValue>,
}

impl Headers {
    /// Create an empty header set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries (including unset markers).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set a header. Names match case-insensitively; overriding an existing
    /// name keeps its original position.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<HeaderValue>) {
        self.entries
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Mark a header as explicitly unset.
    ///
    /// The marker overrides any earlier value during merging and is dropped
    /// by [`Headers::flatten`].
    pub fn unset(&mut self, name: impl AsRef<str>) {
        self.insert(name, Scalar::Null);
    }

    /// Builder-style [`Headers::insert`].
    #[must_use]
    pub fn with(mut self, name: impl AsRef<str>, value: impl Into<HeaderValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a header by name, case-insensitively.
    #[must_use]
    pub fn get(&self, name: impl AsRef<str>) -> Option<&HeaderValue> {
        self.entries.get(&name.as_ref().to_ascii_lowercase())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Convert to wire-level `(name, value)` pairs for the transport.
    ///
    /// Nullish entries (explicit unsets, empty strings, lists of nulls) are
    /// dropped; list values fold into one comma-separated value.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| {
                if value.is_nullish() {
                    return None;
                }
                let wire = match value {
                    HeaderValue::Scalar(scalar) => scalar.to_string(),
                    HeaderValue::List(items) => items
                        .iter()
                        .filter(|item| !item.is_null())
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", "),
                };
                if wire.is_empty() {
                    None
                } else {
                    Some((name.clone(), wire))
                }
            })
            .collect()
    }
}

impl<N: AsRef<str>, V: Into<HeaderValue>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// Merge header sources right-biased: later sources override earlier ones
/// key by key. `None` sources are skipped entirely.
#[must_use]
pub fn merge_headers<'a, I>(sources: I) -> Headers
where
    I: IntoIterator<Item = Option<&'a Headers>>,
{
    let mut merged = Headers::new();
    for source in sources.into_iter().flatten() {
        for (name, value) in &source.entries {
            merged.entries.insert(name.clone(), value.clone());
        }
    }
    merged
}
