//! Record decoding.
//!
//! A [`Record`] is one input line parsed into a JSON object. Values keep their
//! full structure ([`serde_json::Value`] covers null, booleans, numbers,
//! strings, arrays and nested objects) so unknown fields survive untouched.

use serde_json::{Map, Value};

use crate::error::DecodeError;

/// A decoded input line: string keys mapped to arbitrary JSON values.
pub type Record = Map<String, Value>;

/// Parses one line of input into a [`Record`].
///
/// The line must hold exactly one JSON object. Anything else, including an
/// empty line or a scalar/array at the top level, is a [`DecodeError`].
///
/// # Example
///
/// ```rust
/// use logtint_render::decode_line;
///
/// let record = decode_line(r#"{"level":"info","port":8080}"#).unwrap();
/// assert_eq!(record["port"], 8080);
///
/// assert!(decode_line("[1, 2]").is_err());
/// assert!(decode_line("not-json").is_err());
/// ```
pub fn decode_line(line: &str) -> Result<Record, DecodeError> {
    match serde_json::from_str::<Value>(line)? {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::NotAnObject {
            found: kind_of(&other),
        }),
    }
}

/// Returns the JSON kind name of a value.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
