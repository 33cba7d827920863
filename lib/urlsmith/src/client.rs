//! Request-constructing client.
//!
//! [`Client`] wraps a [`Transport`] with the per-client configuration (base
//! URL, default headers, global query serializer) and orchestrates request
//! construction: serializer resolution, path/query serialization, header
//! merging, and the final hand-off to the transport.

use bytes::Bytes;
use urlsmith_core::{
    BaseUrl, HeaderValue, Headers, ParamValue, Params, QuerySerializerConfig, assemble_url,
    merge_headers, resolve_query_serializer,
};

use crate::{Method, Result, Transport, TransportRequest, TransportResponse};

/// Default headers applied to every client.
fn default_headers() -> Headers {
    Headers::new().with("content-type", "application/json")
}

/// Per-client configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Base URL prepended to every path template.
    pub base_url: String,
    /// Default headers, merged under per-request headers.
    pub headers: Headers,
    /// Global query serializer configuration.
    pub query_serializer: Option<QuerySerializerConfig>,
}

impl ClientOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a default header.
    #[must_use]
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<HeaderValue>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the global query serializer configuration.
    #[must_use]
    pub fn query_serializer(mut self, config: impl Into<QuerySerializerConfig>) -> Self {
        self.query_serializer = Some(config.into());
        self
    }
}

/// Per-request options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Path, query, and header parameters.
    pub params: Params,
    /// Request-level headers, merged over the client defaults.
    pub headers: Option<Headers>,
    /// Per-request query serializer override.
    pub query_serializer: Option<QuerySerializerConfig>,
    /// Request body.
    pub body: Option<Bytes>,
}

impl RequestOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a path parameter.
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.path.insert(name.into(), value.into());
        self
    }

    /// Set a query parameter.
    #[must_use]
    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.query.insert(name.into(), value.into());
        self
    }

    /// Set a header parameter (overrides request-level and default headers).
    #[must_use]
    pub fn header_param(mut self, name: impl AsRef<str>, value: impl Into<HeaderValue>) -> Self {
        self.params.header.insert(name, value);
        self
    }

    /// Set a request-level header.
    #[must_use]
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<HeaderValue>) -> Self {
        self.headers.get_or_insert_default().insert(name, value);
        self
    }

    /// Set the per-request query serializer override.
    #[must_use]
    pub fn query_serializer(mut self, config: impl Into<QuerySerializerConfig>) -> Self {
        self.query_serializer = Some(config.into());
        self
    }

    /// Set the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value)?;
        Ok(self
            .header("content-type", "application/json")
            .body(Bytes::from(body)))
    }
}

/// A client bound to a transport and a base URL.
#[derive(Debug, Clone)]
pub struct Client<T> {
    transport: T,
    base_url: BaseUrl,
    headers: Headers,
    query_serializer: Option<QuerySerializerConfig>,
}

impl<T: Transport> Client<T> {
    /// Create a client from a transport and options.
    ///
    /// The base URL is normalized once here (a single trailing `/` is
    /// stripped), and the caller's headers are merged over the default
    /// `content-type: application/json`.
    #[must_use]
    pub fn new(transport: T, options: ClientOptions) -> Self {
        let defaults = default_headers();
        Self {
            transport,
            base_url: BaseUrl::new(options.base_url),
            headers: merge_headers([Some(&defaults), Some(&options.headers)]),
            query_serializer: options.query_serializer,
        }
    }

    /// The normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Construct and send a request over the transport.
    ///
    /// Resolution order: the per-request serializer config wins over the
    /// global one (a prebuilt serializer wins outright); headers merge as
    /// client defaults ← request headers ← header parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<TransportResponse> {
        let serializer =
            resolve_query_serializer(self.query_serializer.as_ref(), options.query_serializer.as_ref());
        let url = assemble_url(&self.base_url, path, &options.params, &serializer);
        let headers = merge_headers([
            Some(&self.headers),
            options.headers.as_ref(),
            Some(&options.params.header),
        ]);

        tracing::debug!(method = %method, url = %url, "sending request");

        self.transport
            .send(TransportRequest {
                method,
                url,
                headers: headers.flatten(),
                body: options.body,
            })
            .await
    }

    /// Send a GET request.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<TransportResponse> {
        self.request(Method::Get, path, options).await
    }

    /// Send a PUT request.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn put(&self, path: &str, options: RequestOptions) -> Result<TransportResponse> {
        self.request(Method::Put, path, options).await
    }

    /// Send a POST request.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn post(&self, path: &str, options: RequestOptions) -> Result<TransportResponse> {
        self.request(Method::Post, path, options).await
    }

    /// Send a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn delete(&self, path: &str, options: RequestOptions) -> Result<TransportResponse> {
        self.request(Method::Delete, path, options).await
    }

    /// Send an OPTIONS request.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn options(&self, path: &str, options: RequestOptions) -> Result<TransportResponse> {
        self.request(Method::Options, path, options).await
    }

    /// Send a HEAD request.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn head(&self, path: &str, options: RequestOptions) -> Result<TransportResponse> {
        self.request(Method::Head, path, options).await
    }

    /// Send a PATCH request.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn patch(&self, path: &str, options: RequestOptions) -> Result<TransportResponse> {
        self.request(Method::Patch, path, options).await
    }

    /// Send a TRACE request.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn trace(&self, path: &str, options: RequestOptions) -> Result<TransportResponse> {
        self.request(Method::Trace, path, options).await
    }
}
