//! Parsing of list-valued inputs such as `add` and `remove`.
//!
//! A list input may be written as a JSON array, a YAML sequence (flow or
//! block style), or a bare string. Detection is layered: JSON first, then
//! YAML, then the raw string as a single element.

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// Parse `raw` into an ordered list of strings. Never fails.
///
/// A syntax error in either structured format is not an answer on its own;
/// parsing moves on to the next layer. Only an explicit, all-string array
/// is returned as parsed, which means an empty structured array (`[]`) is
/// the one way to get an empty list back.
pub fn parse_list(raw: &str) -> Vec<String> {
    if let Some(list) = from_json(raw) {
        tracing::debug!(len = list.len(), "Input parsed as JSON array");
        return list;
    }
    if let Some(list) = from_yaml(raw) {
        tracing::debug!(len = list.len(), "Input parsed as YAML array");
        return list;
    }
    tracing::debug!("Input parsed as single string");
    vec![raw.to_string()]
}

fn from_json(raw: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<JsonValue>(raw) {
        Ok(JsonValue::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                JsonValue::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Ok(_) => None,
        Err(e) => {
            tracing::trace!(error = %e, "Input is not JSON");
            None
        }
    }
}

fn from_yaml(raw: &str) -> Option<Vec<String>> {
    match serde_yaml::from_str::<YamlValue>(raw) {
        Ok(YamlValue::Sequence(items)) => items
            .into_iter()
            .map(|item| match item {
                YamlValue::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Ok(_) => None,
        Err(e) => {
            tracing::trace!(error = %e, "Input is not YAML");
            None
        }
    }
}
