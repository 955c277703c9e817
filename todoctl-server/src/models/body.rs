//! Loosely typed JSON body fields
//!
//! Body fields are kept as raw JSON so that a wrong type reaches the
//! field's own validation message instead of a body rejection. Used with
//! `#[serde(default, deserialize_with = "supplied")]`:
//! an absent key is `None`, an explicit `null` is `Some(Value::Null)`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn supplied<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// String content of a fixed-set field; any other JSON type reads as `""`,
/// which no fixed set accepts.
pub(crate) fn as_text(value: Option<&Value>) -> &str {
    value.and_then(Value::as_str).unwrap_or_default()
}

/// Free text: strings as-is, `null` as empty, anything else as its JSON form.
pub(crate) fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
