//! OpenAPI-style HTTP request construction over a pluggable transport.
//!
//! This crate is the glue layer around [`urlsmith_core`]: it resolves the
//! effective query serializer from global and per-request configuration,
//! assembles the final URL, merges header sources, and hands the result to a
//! [`Transport`] collaborator. It contains no transport implementation of
//! its own.
//!
//! # Example
//!
//! ```ignore
//! use urlsmith::{Client, ClientOptions, RequestOptions};
//!
//! let client = Client::new(transport, ClientOptions::new().base_url("https://api.test/"));
//! let response = client
//!     .get("/items/{id}", RequestOptions::new().path_param("id", 42).query_param("q", "x"))
//!     .await?;
//! ```

mod client;
mod error;
mod method;
pub mod prelude;
mod transport;

pub use client::{Client, ClientOptions, RequestOptions};
pub use error::{Error, Result};
pub use method::Method;
pub use transport::{Transport, TransportRequest, TransportResponse};

// Re-export core types
pub use urlsmith_core::{
    ArrayConfig, ArrayStyle, ArrayStyleOptions, BaseUrl, HeaderValue, Headers, ObjectConfig,
    ObjectStyle, ObjectStyleOptions, ParamMap, ParamValue, Params, QuerySerializer,
    QuerySerializerConfig, Scalar, SerializerOptions, assemble_url, build_query_serializer,
    encode_array, encode_object, encode_primitive, merge_headers, params_from_json, resolve_path,
    resolve_query_serializer,
};
