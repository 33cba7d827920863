//! OpenAPI parameter styles.
//!
//! The style name space is closed per encoder kind: six styles for arrays,
//! five for objects. Parsing an unknown name fails fast with
//! [`Error::InvalidStyle`](crate::Error::InvalidStyle) instead of defaulting
//! silently.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Serialization style for array-valued parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArrayStyle {
    /// Comma-joined values, no name prefix (path/header default).
    #[display("simple")]
    Simple,
    /// `.`-prefixed values (path).
    #[display("label")]
    Label,
    /// `;name=`-prefixed values (path).
    #[display("matrix")]
    Matrix,
    /// `name=value` pairs (query default).
    #[display("form")]
    Form,
    /// Values joined by `%20` (query, non-explode).
    #[display("spaceDelimited")]
    SpaceDelimited,
    /// Values joined by `|` (query, non-explode).
    #[display("pipeDelimited")]
    PipeDelimited,
}

/// Serialization style for object-valued parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectStyle {
    /// Comma-joined `key,value` alternation (path/header default).
    #[display("simple")]
    Simple,
    /// `.`-prefixed fields (path).
    #[display("label")]
    Label,
    /// `;`-prefixed fields (path).
    #[display("matrix")]
    Matrix,
    /// Single `name=key,value,...` pair (query).
    #[display("form")]
    Form,
    /// `name[key]=value` pairs (query default).
    #[display("deepObject")]
    DeepObject,
}

impl FromStr for ArrayStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Self::Simple),
            "label" => Ok(Self::Label),
            "matrix" => Ok(Self::Matrix),
            "form" => Ok(Self::Form),
            "spaceDelimited" => Ok(Self::SpaceDelimited),
            "pipeDelimited" => Ok(Self::PipeDelimited),
            other => Err(Error::invalid_style(other)),
        }
    }
}

impl FromStr for ObjectStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Self::Simple),
            "label" => Ok(Self::Label),
            "matrix" => Ok(Self::Matrix),
            "form" => Ok(Self::Form),
            "deepObject" => Ok(Self::DeepObject),
            other => Err(Error::invalid_style(other)),
        }
    }
}

/// Options for a single array encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayStyleOptions {
    /// Serialization style.
    pub style: ArrayStyle,
    /// Whether multi-valued parameters repeat as separate occurrences.
    pub explode: bool,
    /// Whether reserved URI characters pass through verbatim.
    pub allow_reserved: bool,
}

impl Default for ArrayStyleOptions {
    fn default() -> Self {
        Self {
            style: ArrayStyle::Form,
            explode: true,
            allow_reserved: false,
        }
    }
}

/// Options for a single object encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectStyleOptions {
    /// Serialization style.
    pub style: ObjectStyle,
    /// Whether fields repeat as separate occurrences.
    pub explode: bool,
    /// Whether reserved URI characters pass through verbatim.
    pub allow_reserved: bool,
}

impl Default for ObjectStyleOptions {
    fn default() -> Self {
        Self {
            style: ObjectStyle::DeepObject,
            explode: true,
            allow_reserved: false,
        }
    }
}
