//! Query string serialization.
//!
//! The API parses query strings with bracket notation: arrays are indexed
//! (`season[0]=a&season[1]=b`) and nested objects use their key
//! (`orderBy[date]=asc`). Keys and values are percent-encoded, leaving only
//! the RFC 3986 unreserved characters as-is.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::Value;

use crate::errors::{MatchDayError, MatchDayResult};

/// Characters that should NOT be percent-encoded in query strings.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Serializes a query struct into a query string (without the leading `?`).
///
/// `None` fields must be skipped by the struct's serde attributes; explicit
/// `null` values render as `key=`. Empty arrays and objects produce nothing.
pub fn to_query_string<T: Serialize + ?Sized>(query: &T) -> MatchDayResult<String> {
    let value = serde_json::to_value(query).map_err(|e| {
        MatchDayError::configuration(format!("Failed to serialize query parameters: {}", e))
            .with_cause(e)
    })?;

    let mut pairs = Vec::new();
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                flatten(key, value, &mut pairs);
            }
        }
        Value::Null => {}
        other => {
            return Err(MatchDayError::configuration(format!(
                "Query parameters must serialize to an object, got {}",
                other
            )))
        }
    }

    Ok(pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", encode(&k), encode(&v)))
        .collect::<Vec<_>>()
        .join("&"))
}

/// Joins a path and a query struct as `path?query`.
///
/// The `?` is always present, matching what the API has always received for
/// list endpoints.
pub fn with_query<T: Serialize + ?Sized>(path: &str, query: &T) -> MatchDayResult<String> {
    Ok(format!("{}?{}", path, to_query_string(query)?))
}

fn flatten(prefix: String, value: Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => pairs.push((prefix, String::new())),
        Value::Bool(b) => pairs.push((prefix, b.to_string())),
        Value::Number(n) => pairs.push((prefix, n.to_string())),
        Value::String(s) => pairs.push((prefix, s)),
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                flatten(format!("{}[{}]", prefix, index), item, pairs);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten(format!("{}[{}]", prefix, key), item, pairs);
            }
        }
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_flat_fields_keep_order() {
        let query = json!({ "itemsPerPage": 10, "page": 1 });
        assert_eq!(to_query_string(&query).unwrap(), "itemsPerPage=10&page=1");
    }

    #[test]
    fn test_arrays_are_bracket_indexed() {
        let query = json!({ "season": ["2025", "2024"] });
        assert_eq!(
            to_query_string(&query).unwrap(),
            "season%5B0%5D=2025&season%5B1%5D=2024"
        );
    }

    #[test]
    fn test_nested_objects_and_arrays_of_objects() {
        let query = json!({
            "orderBy": { "date": "desc" },
            "date": [{ "gt": "2024-01-01T00:00:00Z" }]
        });
        assert_eq!(
            to_query_string(&query).unwrap(),
            "orderBy%5Bdate%5D=desc&date%5B0%5D%5Bgt%5D=2024-01-01T00%3A00%3A00Z"
        );
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let query = json!({ "query": "Team A & B", "flag": true, "none": null });
        assert_eq!(
            to_query_string(&query).unwrap(),
            "query=Team%20A%20%26%20B&flag=true&none="
        );
    }

    #[test]
    fn test_empty_collections_produce_nothing() {
        let query = json!({ "team": [], "orderBy": {} });
        assert_eq!(to_query_string(&query).unwrap(), "");
        assert_eq!(with_query("/seasons", &query).unwrap(), "/seasons?");
    }

    #[test]
    fn test_non_object_query_is_rejected() {
        assert!(to_query_string(&json!(["a"])).is_err());
        assert_eq!(to_query_string(&json!(null)).unwrap(), "");
    }
}
