//! Transport collaborator traits and wire types.
//!
//! The engine never performs network I/O. A [`Transport`] receives the fully
//! constructed method, URL, header set, and body, and returns the raw
//! status/headers/body triple. Success-versus-error interpretation of the
//! status code is the caller's concern, not the transport's.

use std::future::Future;

use bytes::Bytes;

use crate::{Method, Result};

/// A fully constructed request, ready for transmission.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,
    /// Final absolute-or-relative URL.
    pub url: String,
    /// Flattened wire headers, in insertion order.
    pub headers: Vec<(String, String)>,
    /// Request body, if any.
    pub body: Option<Bytes>,
}

/// The raw response triple returned by a transport.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Vec<(String, String)>,
    /// Response body.
    pub body: Bytes,
}

impl TransportResponse {
    /// Look up a response header by name, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// External transport collaborator.
///
/// Implementations should be async-first; one outstanding request per call.
/// Retry, timeout, and cancellation logic belong to the implementation, not
/// to the request-construction engine.
pub trait Transport: Send + Sync {
    /// Transmit a request and return the raw response triple.
    ///
    /// # Errors
    ///
    /// Returns an error if transmission fails (connection, TLS, ...).
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse>> + Send;
}
