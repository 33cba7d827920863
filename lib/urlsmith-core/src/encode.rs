//! Parameter encoders.
//!
//! Implements the OpenAPI 3.x style × explode matrices for primitive, array,
//! and object parameter values. All encoders are pure string transformations:
//! they never mutate their input, and an empty array/mapping always yields an
//! empty string so the caller can omit the fragment from the final join.

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::style::{ArrayStyle, ArrayStyleOptions, ObjectStyle, ObjectStyleOptions};
use crate::value::Scalar;

/// Characters escaped by ECMAScript `encodeURIComponent`: everything but
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Render a scalar, percent-encoding reserved characters unless
/// `allow_reserved` is set.
fn encoded(value: &Scalar, allow_reserved: bool) -> String {
    let raw = value.to_string();
    if allow_reserved {
        raw
    } else {
        utf8_percent_encode(&raw, COMPONENT).to_string()
    }
}

/// Encode a single scalar as `name=value`.
///
/// Returns an empty string for [`Scalar::Null`] (absent parameter). The name
/// is emitted verbatim; only the value is percent-encoded, and only when
/// `allow_reserved` is `false`.
#[must_use]
pub fn encode_primitive(name: &str, value: &Scalar, allow_reserved: bool) -> String {
    if value.is_null() {
        return String::new();
    }
    format!("{name}={}", encoded(value, allow_reserved))
}

/// Encode a sequence of scalars under the given style and explode flag.
///
/// An empty sequence yields an empty string.
#[must_use]
pub fn encode_array(name: &str, values: &[Scalar], options: &ArrayStyleOptions) -> String {
    if values.is_empty() {
        return String::new();
    }

    if options.explode {
        let joiner = match options.style {
            ArrayStyle::Simple => ",",
            ArrayStyle::Label => ".",
            ArrayStyle::Matrix => ";",
            ArrayStyle::Form | ArrayStyle::SpaceDelimited | ArrayStyle::PipeDelimited => "&",
        };
        let parts: Vec<String> = values
            .iter()
            .map(|value| match options.style {
                // No name prefix for these path styles; values join directly.
                ArrayStyle::Simple | ArrayStyle::Label => encoded(value, options.allow_reserved),
                _ => encode_primitive(name, value, options.allow_reserved),
            })
            .collect();
        let joined = parts.join(joiner);
        match options.style {
            ArrayStyle::Label | ArrayStyle::Matrix => format!("{joiner}{joined}"),
            _ => joined,
        }
    } else {
        let joiner = match options.style {
            ArrayStyle::SpaceDelimited => "%20",
            ArrayStyle::PipeDelimited => "|",
            _ => ",",
        };
        let flat = values
            .iter()
            .map(|value| encoded(value, options.allow_reserved))
            .collect::<Vec<_>>()
            .join(joiner);
        match options.style {
            ArrayStyle::Simple => flat,
            ArrayStyle::Label => format!(".{flat}"),
            ArrayStyle::Matrix => format!(";{name}={flat}"),
            ArrayStyle::Form | ArrayStyle::SpaceDelimited | ArrayStyle::PipeDelimited => {
                format!("{name}={flat}")
            }
        }
    }
}

/// Encode a flat mapping under the given style and explode flag.
///
/// An empty mapping yields an empty string. Keys are emitted verbatim in the
/// non-explode flattening; only values are percent-encoded.
#[must_use]
pub fn encode_object(
    name: &str,
    fields: &IndexMap<String, Scalar>,
    options: &ObjectStyleOptions,
) -> String {
    if fields.is_empty() {
        return String::new();
    }

    let joiner = match options.style {
        ObjectStyle::Simple => ",",
        ObjectStyle::Label => ".",
        ObjectStyle::Matrix => ";",
        ObjectStyle::Form | ObjectStyle::DeepObject => "&",
    };

    if options.style != ObjectStyle::DeepObject && !options.explode {
        let mut parts = Vec::with_capacity(fields.len() * 2);
        for (key, value) in fields {
            parts.push(key.clone());
            parts.push(encoded(value, options.allow_reserved));
        }
        let flat = parts.join(",");
        return match options.style {
            ObjectStyle::Form => format!("{name}={flat}"),
            ObjectStyle::Label => format!(".{flat}"),
            ObjectStyle::Matrix => format!(";{name}={flat}"),
            _ => flat,
        };
    }

    let parts: Vec<String> = fields
        .iter()
        .map(|(key, value)| {
            let field_name = if options.style == ObjectStyle::DeepObject {
                format!("{name}[{key}]")
            } else {
                key.clone()
            };
            encode_primitive(&field_name, value, options.allow_reserved)
        })
        .collect();
    let joined = parts.join(joiner);
    match options.style {
        ObjectStyle::Label | ObjectStyle::Matrix => format!("{joiner}{joined}"),
        _ => joined,
    }
}
