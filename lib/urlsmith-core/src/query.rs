//! Query string serialization.
//!
//! [`build_query_serializer`] turns a [`SerializerOptions`] record into a
//! reusable [`QuerySerializer`]: a pure function that walks a query
//! [`ParamMap`] in insertion order, dispatches each value on its shape
//! (scalar, list, mapping), and joins all non-empty fragments with `&`.
//!
//! Global and per-request configuration are modeled as an explicit two-case
//! union, [`QuerySerializerConfig`]: an already-built serializer is used
//! verbatim and always defeats an options record, while two options records
//! shallow-merge field by field.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::encode::{encode_array, encode_object, encode_primitive};
use crate::style::{ArrayStyle, ArrayStyleOptions, ObjectStyle, ObjectStyleOptions};
use crate::value::{ParamMap, ParamValue};

/// Array style configuration for a query serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayConfig {
    /// Serialization style for array-valued query parameters.
    pub style: ArrayStyle,
    /// Whether arrays repeat as separate `name=value` occurrences.
    pub explode: bool,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            style: ArrayStyle::Form,
            explode: true,
        }
    }
}

/// Object style configuration for a query serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectConfig {
    /// Serialization style for object-valued query parameters.
    pub style: ObjectStyle,
    /// Whether object fields repeat as separate occurrences.
    pub explode: bool,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            style: ObjectStyle::DeepObject,
            explode: true,
        }
    }
}

/// Options record used to build a [`QuerySerializer`].
///
/// Each field overrides the built-in default independently; merging two
/// records is a shallow field-wise override, so a per-request `array`
/// override does not erase a global `object` override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SerializerOptions {
    /// Array style override (default: `form`, explode).
    pub array: Option<ArrayConfig>,
    /// Object style override (default: `deepObject`, explode).
    pub object: Option<ObjectConfig>,
    /// Reserved-character allowance (default: `false`).
    pub allow_reserved: Option<bool>,
}

impl SerializerOptions {
    /// Shallow-merge `self` over `base`: every field set on `self` wins,
    /// unset fields fall back to `base`.
    #[must_use]
    pub fn merged_over(self, base: Self) -> Self {
        Self {
            array: self.array.or(base.array),
            object: self.object.or(base.object),
            allow_reserved: self.allow_reserved.or(base.allow_reserved),
        }
    }
}

/// A built query serializer.
///
/// Pure and reusable: the same input always yields a byte-identical output,
/// and a single instance is safe to invoke concurrently across calls.
#[derive(Clone)]
pub struct QuerySerializer(Arc<dyn Fn(&ParamMap) -> String + Send + Sync>);

impl QuerySerializer {
    /// Wrap a custom serializer function.
    pub fn new(serializer: impl Fn(&ParamMap) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(serializer))
    }

    /// Serialize a query parameter map to a query string (no leading `?`).
    #[must_use]
    pub fn serialize(&self, query: &ParamMap) -> String {
        (self.0)(query)
    }
}

impl Default for QuerySerializer {
    fn default() -> Self {
        build_query_serializer(SerializerOptions::default())
    }
}

impl fmt::Debug for QuerySerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("QuerySerializer").finish_non_exhaustive()
    }
}

/// Build a [`QuerySerializer`] from an options record.
///
/// The serializer walks the map's keys in insertion order, skips nullish
/// values, dispatches lists to the array encoder, mappings to the object
/// encoder, and everything else to the primitive encoder, then joins the
/// non-empty fragments with `&`.
#[must_use]
pub fn build_query_serializer(options: SerializerOptions) -> QuerySerializer {
    QuerySerializer::new(move |query| {
        let allow_reserved = options.allow_reserved.unwrap_or(false);
        let mut fragments = Vec::new();
        for (name, value) in query {
            let fragment = match value {
                ParamValue::Scalar(scalar) => encode_primitive(name, scalar, allow_reserved),
                ParamValue::List(items) => {
                    let config = options.array.unwrap_or_default();
                    encode_array(
                        name,
                        items,
                        &ArrayStyleOptions {
                            style: config.style,
                            explode: config.explode,
                            allow_reserved,
                        },
                    )
                }
                ParamValue::Map(fields) => {
                    let config = options.object.unwrap_or_default();
                    encode_object(
                        name,
                        fields,
                        &ObjectStyleOptions {
                            style: config.style,
                            explode: config.explode,
                            allow_reserved,
                        },
                    )
                }
            };
            if !fragment.is_empty() {
                fragments.push(fragment);
            }
        }
        fragments.join("&")
    })
}

/// Query serializer configuration: a prebuilt function or an options record.
#[derive(Debug, Clone)]
pub enum QuerySerializerConfig {
    /// An already-built serializer, used verbatim (never merged).
    Serializer(QuerySerializer),
    /// An options record used to build a serializer.
    Options(SerializerOptions),
}

impl From<QuerySerializer> for QuerySerializerConfig {
    fn from(serializer: QuerySerializer) -> Self {
        Self::Serializer(serializer)
    }
}

impl From<SerializerOptions> for QuerySerializerConfig {
    fn from(options: SerializerOptions) -> Self {
        Self::Options(options)
    }
}

/// Resolve the effective serializer from global and per-request config.
///
/// A per-request prebuilt serializer wins outright. Per-request options
/// shallow-merge over global options; if the global config is a prebuilt
/// serializer it is not mergeable and the per-request options stand alone.
#[must_use]
pub fn resolve_query_serializer(
    global: Option<&QuerySerializerConfig>,
    per_request: Option<&QuerySerializerConfig>,
) -> QuerySerializer {
    match (global, per_request) {
        (_, Some(QuerySerializerConfig::Serializer(serializer)))
        | (Some(QuerySerializerConfig::Serializer(serializer)), None) => serializer.clone(),
        (Some(QuerySerializerConfig::Options(global_options)), Some(QuerySerializerConfig::Options(options))) => {
            build_query_serializer(options.merged_over(*global_options))
        }
        (_, Some(QuerySerializerConfig::Options(options))) => build_query_serializer(*options),
        (Some(QuerySerializerConfig::Options(options)), None) => build_query_serializer(*options),
        (None, None) => build_query_serializer(SerializerOptions::default()),
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use indexmap::IndexMap;

    use super::*;
    use crate::value::Scalar;

    fn query(entries: Vec<(&str, ParamValue)>) -> ParamMap {
        entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn default_serializer_dispatches_by_shape() {
        let serializer = QuerySerializer::default();
        let object: IndexMap<String, Scalar> =
            [("a".to_string(), Scalar::from(1)), ("b".to_string(), Scalar::from(2))]
                .into_iter()
                .collect();
        let params = query(vec![
            ("q", ParamValue::from("x y")),
            ("id", ParamValue::List(vec![3.into(), 4.into()])),
            ("obj", ParamValue::Map(object)),
        ]);
        check!(serializer.serialize(&params) == "q=x%20y&id=3&id=4&obj[a]=1&obj[b]=2");
    }

    #[test]
    fn nullish_values_are_skipped() {
        let params = query(vec![
            ("a", ParamValue::Scalar(Scalar::Null)),
            ("b", ParamValue::from(2)),
            ("empty", ParamValue::List(vec![])),
        ]);
        check!(QuerySerializer::default().serialize(&params) == "b=2");
    }

    #[test]
    fn empty_query_yields_empty_string() {
        check!(QuerySerializer::default().serialize(&ParamMap::new()) == "");
    }

    #[test]
    fn array_style_override() {
        let serializer = build_query_serializer(SerializerOptions {
            array: Some(ArrayConfig {
                style: ArrayStyle::PipeDelimited,
                explode: false,
            }),
            ..SerializerOptions::default()
        });
        let params = query(vec![("id", ParamValue::List(vec![3.into(), 4.into(), 5.into()]))]);
        check!(serializer.serialize(&params) == "id=3|4|5");
    }

    #[test]
    fn allow_reserved_applies_to_all_shapes() {
        let serializer = build_query_serializer(SerializerOptions {
            allow_reserved: Some(true),
            ..SerializerOptions::default()
        });
        let params = query(vec![
            ("p", ParamValue::from("a/b")),
            ("l", ParamValue::List(vec!["c/d".into()])),
        ]);
        check!(serializer.serialize(&params) == "p=a/b&l=c/d");
    }

    #[test]
    fn serializer_is_idempotent() {
        let options = SerializerOptions {
            array: Some(ArrayConfig {
                style: ArrayStyle::Form,
                explode: true,
            }),
            ..SerializerOptions::default()
        };
        let params = query(vec![("id", ParamValue::List(vec![1.into(), 2.into()]))]);

        let first = build_query_serializer(options).serialize(&params);
        let second = build_query_serializer(options).serialize(&params);
        check!(first == second);

        let serializer = build_query_serializer(options);
        check!(serializer.serialize(&params) == serializer.serialize(&params));
    }

    #[test]
    fn form_explode_round_trips() {
        let values = vec!["a b".into(), "c&d".into(), "e=f".into()];
        let params = query(vec![("tag", ParamValue::List(values.clone()))]);
        let encoded = QuerySerializer::default().serialize(&params);

        let decoded: Vec<(String, String)> = encoded
            .split('&')
            .map(|pair| {
                let (name, value) = pair.split_once('=').expect("pair");
                let value = percent_encoding::percent_decode_str(value)
                    .decode_utf8()
                    .expect("utf8")
                    .to_string();
                (name.to_string(), value)
            })
            .collect();

        for ((name, decoded_value), original) in decoded.iter().zip(&values) {
            check!(name == "tag");
            check!(Scalar::from(decoded_value.as_str()) == *original);
        }
    }

    #[test]
    fn options_shallow_merge_is_field_wise() {
        let global = SerializerOptions {
            object: Some(ObjectConfig {
                style: ObjectStyle::Form,
                explode: false,
            }),
            allow_reserved: Some(true),
            ..SerializerOptions::default()
        };
        let request = SerializerOptions {
            array: Some(ArrayConfig {
                style: ArrayStyle::PipeDelimited,
                explode: false,
            }),
            ..SerializerOptions::default()
        };

        let merged = request.merged_over(global);
        check!(merged.array == request.array);
        check!(merged.object == global.object);
        check!(merged.allow_reserved == Some(true));
    }

    #[test]
    fn resolve_prefers_per_request_function() {
        let global = QuerySerializerConfig::Options(SerializerOptions::default());
        let custom = QuerySerializer::new(|_| "custom".to_string());
        let request = QuerySerializerConfig::Serializer(custom);

        let serializer = resolve_query_serializer(Some(&global), Some(&request));
        check!(serializer.serialize(&ParamMap::new()) == "custom");
    }

    #[test]
    fn resolve_merges_options_records() {
        let global = QuerySerializerConfig::Options(SerializerOptions {
            object: Some(ObjectConfig {
                style: ObjectStyle::Form,
                explode: false,
            }),
            ..SerializerOptions::default()
        });
        let request = QuerySerializerConfig::Options(SerializerOptions {
            array: Some(ArrayConfig {
                style: ArrayStyle::PipeDelimited,
                explode: false,
            }),
            ..SerializerOptions::default()
        });

        let serializer = resolve_query_serializer(Some(&global), Some(&request));
        let object: IndexMap<String, Scalar> = [("a".to_string(), Scalar::from(1))].into_iter().collect();
        let params = query(vec![
            ("id", ParamValue::List(vec![1.into(), 2.into()])),
            ("obj", ParamValue::Map(object)),
        ]);
        // request array override and global object override both apply
        check!(serializer.serialize(&params) == "id=1|2&obj=a,1");
    }

    #[test]
    fn resolve_global_function_not_merged_with_request_options() {
        let global = QuerySerializerConfig::Serializer(QuerySerializer::new(|_| "global".to_string()));
        let request = QuerySerializerConfig::Options(SerializerOptions {
            array: Some(ArrayConfig {
                style: ArrayStyle::PipeDelimited,
                explode: false,
            }),
            ..SerializerOptions::default()
        });

        // request options stand alone; the global function contributes nothing
        let serializer = resolve_query_serializer(Some(&global), Some(&request));
        let params = query(vec![("id", ParamValue::List(vec![1.into(), 2.into()]))]);
        check!(serializer.serialize(&params) == "id=1|2");
    }

    #[test]
    fn resolve_falls_back_to_global_then_default() {
        let global = QuerySerializerConfig::Serializer(QuerySerializer::new(|_| "global".to_string()));
        let serializer = resolve_query_serializer(Some(&global), None);
        check!(serializer.serialize(&ParamMap::new()) == "global");

        let serializer = resolve_query_serializer(None, None);
        let params = query(vec![("q", ParamValue::from("x"))]);
        check!(serializer.serialize(&params) == "q=x");
    }

    #[test]
    fn serializer_options_deserialize_camel_case() {
        let options: SerializerOptions = serde_json::from_str(
            r#"{"array":{"style":"spaceDelimited","explode":false},"allowReserved":true}"#,
        )
        .expect("deserialize");
        check!(
            options.array
                == Some(ArrayConfig {
                    style: ArrayStyle::SpaceDelimited,
                    explode: false,
                })
        );
        check!(options.allow_reserved == Some(true));
        check!(options.object.is_none());
    }
}
