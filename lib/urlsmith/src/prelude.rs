//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use urlsmith::prelude::*;
//! ```

pub use crate::{
    Client, ClientOptions, Error, HeaderValue, Headers, Method, ParamValue, Params,
    QuerySerializer, QuerySerializerConfig, RequestOptions, Result, Scalar, SerializerOptions,
    Transport, TransportRequest, TransportResponse,
};
