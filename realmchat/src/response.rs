//! Normalization of API response bodies.

use serde_json::Value;

use crate::error::{Error, Result};

const FALSE_RESULT: &str = "API return false result.";

/// Turn a decoded body into the caller-facing value.
///
/// A body with `"result": false` becomes [`Error::Api`]. Otherwise the `data`
/// member is unwrapped when present and non-null, and the whole body is
/// returned when it is not.
pub(crate) fn normalize(body: Value) -> Result<Value> {
    if body.get("result") == Some(&Value::Bool(false)) {
        let detail = match body.get("message") {
            Some(m) if !m.is_null() => {
                serde_json::to_string(m).map_err(|e| Error::Api(e.to_string()))?
            }
            _ => FALSE_RESULT.to_owned(),
        };
        return Err(Error::Api(format!("API error: {detail}")));
    }

    match body {
        Value::Object(mut map) if map.get("data").is_some_and(|d| !d.is_null()) => {
            Ok(map.remove("data").unwrap_or(Value::Null))
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unwraps_data() {
        let v = normalize(json!({"result": true, "data": {"id": 1}})).unwrap();
        assert_eq!(v, json!({"id": 1}));
    }

    #[test]
    fn whole_body_without_data() {
        let body = json!({"status": "ok", "count": 3});
        assert_eq!(normalize(body.clone()).unwrap(), body);
    }

    #[test]
    fn null_data_returns_whole_body() {
        let body = json!({"data": null, "info": "x"});
        assert_eq!(normalize(body.clone()).unwrap(), body);
    }

    #[test]
    fn false_result_with_message() {
        let err = normalize(json!({"result": false, "message": "bad number"})).unwrap_err();
        assert_eq!(err.to_string(), r#"API error: "bad number""#);
    }

    #[test]
    fn false_result_with_structured_message() {
        let err = normalize(json!({"result": false, "message": {"number": ["invalid"]}}))
            .unwrap_err();
        assert_eq!(err.to_string(), r#"API error: {"number":["invalid"]}"#);
    }

    #[test]
    fn false_result_without_message() {
        let err = normalize(json!({"result": false})).unwrap_err();
        assert!(matches!(err, Error::Api(_)));
        assert_eq!(err.to_string(), "API error: API return false result.");
    }

    #[test]
    fn truthy_non_bool_result_is_success() {
        let body = json!({"result": 0});
        assert_eq!(normalize(body.clone()).unwrap(), body);
    }
}
