//! Remote collection fetching and payload normalization.
//!
//! Every page loads one or more named collections; the payload shape varies
//! across endpoints (a raw JSON array, or an object wrapping one under a
//! known key), and some endpoints answer errors with non-array bodies. All
//! of that is normalized here so call sites never re-implement it.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::api::{ApiClient, ApiError};

impl ApiClient {
    /// Fetch a named collection and normalize the payload to a typed vec.
    ///
    /// Transport and non-success-status failures are returned to the caller
    /// (so a store can show a failed state); payload-shape surprises are
    /// absorbed: a non-array body becomes the empty collection, and
    /// elements that fail to decode are dropped. Neither is surfaced to the
    /// user. No retry: a failed fetch stays failed until the caller reruns
    /// the effect.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, ApiError> {
        let url = self.url_with_query(path, params);
        let value = self.get_json(&url).await?;
        Ok(decode_items(path, normalize_collection(path, value)))
    }

    /// Variant that never fails: any failure yields the empty collection,
    /// logged for diagnostics. For consumers where "unavailable" and
    /// "empty" render the same (e.g. a rating badge).
    pub async fn fetch_collection_or_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Vec<T> {
        match self.fetch_collection(path, params).await {
            Ok(items) => items,
            Err(error) => {
                warn!(%path, "fetching collection failed: {error}");
                Vec::new()
            }
        }
    }
}

/// Accept a raw JSON array, or an object wrapping one under a key observed
/// in the wild (`items`, `events`, `eventIds`). Anything else normalizes to
/// the empty collection.
pub(crate) fn normalize_collection(path: &str, value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in ["items", "events", "eventIds"] {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return items;
                }
            }
            warn!(%path, "expected a collection, got an object without one");
            Vec::new()
        }
        other => {
            warn!(%path, "expected a collection, got {}", json_kind(&other));
            Vec::new()
        }
    }
}

fn decode_items<T: DeserializeOwned>(path: &str, items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(error) => {
                warn!(%path, "dropping malformed element: {error}");
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Row {
        id: String,
    }

    #[test]
    fn raw_array_passes_through() {
        let items = normalize_collection("/t", json!([{"id": "a"}, {"id": "b"}]));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn wrapped_arrays_are_unwrapped() {
        for key in ["items", "events", "eventIds"] {
            let items = normalize_collection("/t", json!({ key: ["x"] }));
            assert_eq!(items, vec![json!("x")], "key {key}");
        }
    }

    #[test]
    fn object_without_collection_is_empty() {
        assert!(normalize_collection("/t", json!({"count": 3})).is_empty());
    }

    #[test]
    fn scalar_payload_is_empty() {
        assert!(normalize_collection("/t", json!("oops")).is_empty());
        assert!(normalize_collection("/t", json!(null)).is_empty());
    }

    #[test]
    fn malformed_elements_are_dropped_not_fatal() {
        let items = normalize_collection("/t", json!([{"id": "a"}, {"id": 7}, {"id": "c"}]));
        let rows: Vec<Row> = decode_items("/t", items);
        assert_eq!(
            rows,
            vec![Row { id: "a".into() }, Row { id: "c".into() }]
        );
    }
}
