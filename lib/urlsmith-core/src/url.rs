//! Final URL assembly.
//!
//! [`assemble_url`] composes base URL + resolved path template + `?`-prefixed
//! query string. The base URL is normalized once at configuration time by
//! [`BaseUrl::new`], not per call.

use crate::headers::Headers;
use crate::path::resolve_path;
use crate::query::QuerySerializer;
use crate::value::ParamMap;

/// A base URL with at most one trailing `/` stripped at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Create a base URL, stripping a single trailing `/` if present.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if base.ends_with('/') {
            base.pop();
        }
        Self(base)
    }

    /// The normalized base URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BaseUrl {
    fn from(base: &str) -> Self {
        Self::new(base)
    }
}

impl From<String> for BaseUrl {
    fn from(base: String) -> Self {
        Self::new(base)
    }
}

/// Per-request parameters grouped by location.
#[derive(Debug, Clone, Default)]
pub struct Params {
    /// Path parameters substituted into `{name}` placeholders.
    pub path: ParamMap,
    /// Query parameters serialized into the query string.
    pub query: ParamMap,
    /// Header parameters merged into the outgoing header set.
    pub header: Headers,
}

/// Compose the final request URL.
///
/// Concatenates `base` and `pathname`, resolves path placeholders over the
/// concatenated string, and appends the serialized query when non-empty. A
/// leading `?` emitted by a custom serializer is stripped to avoid `??`.
#[must_use]
pub fn assemble_url(
    base: &BaseUrl,
    pathname: &str,
    params: &Params,
    serializer: &QuerySerializer,
) -> String {
    let mut url = format!("{}{pathname}", base.as_str());
    if !params.path.is_empty() {
        url = resolve_path(&url, &params.path);
    }

    let search = serializer.serialize(&params.query);
    let search = search.strip_prefix('?').unwrap_or(&search);
    if !search.is_empty() {
        url.push('?');
        url.push_str(search);
    }
    url
}
