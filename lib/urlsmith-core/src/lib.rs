//! OpenAPI 3.x parameter serialization engine.
//!
//! This crate turns structured path, query, and header parameter values into
//! a well-formed request URL and header set, following the OpenAPI parameter
//! style rules (RFC 6570-flavored):
//!
//! - [`encode_primitive`], [`encode_array`], [`encode_object`] - the style ×
//!   explode encoding matrices
//! - [`build_query_serializer`] - query string serialization with
//!   global/per-request option merging
//! - [`resolve_path`] - `{param}` path template substitution
//! - [`merge_headers`] - right-biased header set merging
//! - [`assemble_url`] - base URL + path + query composition
//!
//! Everything here is a pure, synchronous string transformation over
//! immutable inputs; a built [`QuerySerializer`] is safe to reuse and to
//! invoke concurrently.
//!
//! # Example
//!
//! ```
//! use urlsmith_core::{BaseUrl, ParamValue, Params, QuerySerializer, assemble_url};
//!
//! let base = BaseUrl::new("https://api.test/");
//! let mut params = Params::default();
//! params.path.insert("id".to_string(), ParamValue::from(42));
//! params.query.insert("q".to_string(), ParamValue::from("x y"));
//!
//! let url = assemble_url(&base, "/items/{id}", &params, &QuerySerializer::default());
//! assert_eq!(url, "https://api.test/items/42?q=x%20y");
//! ```

mod encode;
mod error;
mod headers;
mod path;
pub mod prelude;
mod query;
mod style;
mod url;
mod value;

pub use encode::{encode_array, encode_object, encode_primitive};
pub use error::{Error, Result};
pub use headers::{HeaderValue, Headers, merge_headers};
pub use path::resolve_path;
pub use query::{
    ArrayConfig, ObjectConfig, QuerySerializer, QuerySerializerConfig, SerializerOptions,
    build_query_serializer, resolve_query_serializer,
};
pub use style::{ArrayStyle, ArrayStyleOptions, ObjectStyle, ObjectStyleOptions};
pub use url::{BaseUrl, Params, assemble_url};
pub use value::{ParamMap, ParamValue, Scalar, params_from_json};
