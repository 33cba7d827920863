//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use urlsmith_core::prelude::*;
//! ```

pub use crate::{
    ArrayStyle, BaseUrl, Error, HeaderValue, Headers, ObjectStyle, ParamMap, ParamValue, Params,
    QuerySerializer, QuerySerializerConfig, Result, Scalar, SerializerOptions, assemble_url,
    build_query_serializer, merge_headers, resolve_path,
};
