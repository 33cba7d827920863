//! Path template resolution.
//!
//! Scans a URL template for `{param}` placeholders and substitutes serialized
//! parameter values. Placeholder syntax drives the style: a trailing `*`
//! marks explode, a leading `.` selects label style, a leading `;` selects
//! matrix style, and a bare name is simple style.
//!
//! A placeholder whose parameter is missing (or null) is left untouched in
//! the output. This is deliberate: the unfilled `{name}` literal makes a
//! missing required parameter detectable from the produced URL instead of
//! silently yielding an empty segment.

use crate::encode::{encode_array, encode_object, encode_primitive};
use crate::style::{ArrayStyle, ArrayStyleOptions, ObjectStyle, ObjectStyleOptions};
use crate::value::{ParamMap, ParamValue};

/// Style derivable from placeholder syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathStyle {
    Simple,
    Label,
    Matrix,
}

impl PathStyle {
    const fn array(self) -> ArrayStyle {
        match self {
            Self::Simple => ArrayStyle::Simple,
            Self::Label => ArrayStyle::Label,
            Self::Matrix => ArrayStyle::Matrix,
        }
    }

    const fn object(self) -> ObjectStyle {
        match self {
            Self::Simple => ObjectStyle::Simple,
            Self::Label => ObjectStyle::Label,
            Self::Matrix => ObjectStyle::Matrix,
        }
    }
}

/// Resolve `{param}` placeholders in `template` against `params`.
///
/// Placeholders are non-overlapping and brace-delimited, with no nested
/// braces. Unterminated or empty braces pass through literally, as does any
/// placeholder whose parameter is absent or null.
#[must_use]
pub fn resolve_path(template: &str, params: &ParamMap) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (literal, tail) = rest.split_at(open);
        out.push_str(literal);

        // tail starts with '{'
        let (brace, body) = tail.split_at(1);
        let Some(stop) = body.find(['{', '}']) else {
            out.push_str(tail);
            rest = "";
            break;
        };

        let (inner, remainder) = body.split_at(stop);
        if remainder.starts_with('{') {
            // stray '{' never closed; a new placeholder may start here
            out.push_str(brace);
            out.push_str(inner);
            rest = remainder;
            continue;
        }

        let (close, after) = remainder.split_at(1);
        if inner.is_empty() {
            out.push_str(brace);
            out.push_str(close);
        } else {
            match substitute(inner, params) {
                Some(substituted) => out.push_str(&substituted),
                None => {
                    out.push_str(brace);
                    out.push_str(inner);
                    out.push_str(close);
                }
            }
        }
        rest = after;
    }

    out.push_str(rest);
    out
}

/// Substitute a single placeholder body, or `None` to preserve the literal.
fn substitute(body: &str, params: &ParamMap) -> Option<String> {
    let mut name = body;
    let mut explode = false;
    let mut style = PathStyle::Simple;

    if let Some(stripped) = name.strip_suffix('*') {
        explode = true;
        name = stripped;
    }
    if let Some(stripped) = name.strip_prefix('.') {
        style = PathStyle::Label;
        name = stripped;
    } else if let Some(stripped) = name.strip_prefix(';') {
        style = PathStyle::Matrix;
        name = stripped;
    }

    let value = params.get(name)?;
    if value.is_null() {
        return None;
    }

    Some(match value {
        ParamValue::Scalar(scalar) => match style {
            PathStyle::Simple => scalar.to_string(),
            PathStyle::Label => format!(".{scalar}"),
            // The primitive encoder never adds path punctuation itself.
            PathStyle::Matrix => format!(";{}", encode_primitive(name, scalar, false)),
        },
        ParamValue::List(items) => encode_array(
            name,
            items,
            &ArrayStyleOptions {
                style: style.array(),
                explode,
                allow_reserved: false,
            },
        ),
        ParamValue::Map(fields) => encode_object(
            name,
            fields,
            &ObjectStyleOptions {
                style: style.object(),
                explode,
                allow_reserved: false,
            },
        ),
    })
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use indexmap::IndexMap;

    use super::*;
    use crate::value::Scalar;

    fn params(entries: Vec<(&str, ParamValue)>) -> ParamMap {
        entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn scalar_simple_substitution() {
        let p = params(vec![("id", ParamValue::from("42"))]);
        check!(resolve_path("/items/{id}", &p) == "/items/42");
    }

    #[test]
    fn missing_parameter_preserves_placeholder() {
        check!(resolve_path("/items/{id}", &ParamMap::new()) == "/items/{id}");

        let p = params(vec![("id", ParamValue::Scalar(Scalar::Null))]);
        check!(resolve_path("/items/{id}", &p) == "/items/{id}");
    }

    #[test]
    fn scalar_label_and_matrix_styles() {
        let p = params(vec![("id", ParamValue::from("42"))]);
        check!(resolve_path("/items/{.id}", &p) == "/items/.42");
        check!(resolve_path("/items/{;id}", &p) == "/items/;id=42");
    }

    #[test]
    fn list_styles() {
        let p = params(vec![("id", ParamValue::List(vec![3.into(), 4.into(), 5.into()]))]);
        check!(resolve_path("/items/{id}", &p) == "/items/3,4,5");
        check!(resolve_path("/items/{id*}", &p) == "/items/3,4,5");
        check!(resolve_path("/items/{.id}", &p) == "/items/.3,4,5");
        check!(resolve_path("/items/{.id*}", &p) == "/items/.3.4.5");
        check!(resolve_path("/items/{;id}", &p) == "/items/;id=3,4,5");
        check!(resolve_path("/items/{;id*}", &p) == "/items/;id=3;id=4;id=5");
    }

    #[test]
    fn map_styles() {
        let fields: IndexMap<String, Scalar> =
            [("a".to_string(), Scalar::from(1)), ("b".to_string(), Scalar::from(2))]
                .into_iter()
                .collect();
        let p = params(vec![("obj", ParamValue::Map(fields))]);
        check!(resolve_path("/items/{obj}", &p) == "/items/a,1,b,2");
        check!(resolve_path("/items/{obj*}", &p) == "/items/a=1,b=2");
        check!(resolve_path("/items/{.obj*}", &p) == "/items/.a=1.b=2");
        check!(resolve_path("/items/{;obj}", &p) == "/items/;obj=a,1,b,2");
        check!(resolve_path("/items/{;obj*}", &p) == "/items/;a=1;b=2");
    }

    #[test]
    fn multiple_placeholders() {
        let p = params(vec![("user", ParamValue::from("alice")), ("post", ParamValue::from(7))]);
        check!(resolve_path("/users/{user}/posts/{post}", &p) == "/users/alice/posts/7");
    }

    #[test]
    fn partially_filled_template() {
        let p = params(vec![("user", ParamValue::from("alice"))]);
        check!(resolve_path("/users/{user}/posts/{post}", &p) == "/users/alice/posts/{post}");
    }

    #[test]
    fn stray_braces_pass_through() {
        let p = params(vec![("id", ParamValue::from("42"))]);
        check!(resolve_path("/items/{}", &p) == "/items/{}");
        check!(resolve_path("/items/{id", &p) == "/items/{id");
        check!(resolve_path("/a{b{id}", &p) == "/a{b42");
        check!(resolve_path("/items/{id}}", &p) == "/items/42}");
    }

    #[test]
    fn matrix_scalar_value_is_percent_encoded() {
        let p = params(vec![("id", ParamValue::from("a b"))]);
        check!(resolve_path("/items/{;id}", &p) == "/items/;id=a%20b");
    }

    #[test]
    fn list_values_are_percent_encoded() {
        let p = params(vec![("tags", ParamValue::List(vec!["a b".into(), "c d".into()]))]);
        check!(resolve_path("/t/{tags}", &p) == "/t/a%20b,c%20d");
    }
}
