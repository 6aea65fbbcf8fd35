//! Flattening of JSON payload values into form fields.
//!
//! Nested values use bracket notation (`buttons[0][text]=Yes`), which is what
//! the API's form parser expects.

use serde_json::Value;

/// Append the form pairs for `value` under `name` to `out`.
///
/// `null` and empty containers produce no pairs.
pub(crate) fn flatten_into(name: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((name.to_owned(), (if *b { "1" } else { "0" }).to_owned())),
        Value::Number(n) => out.push((name.to_owned(), n.to_string())),
        Value::String(s) => out.push((name.to_owned(), s.clone())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_into(&format!("{name}[{i}]"), item, out);
            }
        }
        Value::Object(map) => {
            for (k, v) in map {
                flatten_into(&format!("{name}[{k}]"), v, out);
            }
        }
    }
}
