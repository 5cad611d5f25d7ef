//! JSON rendering of converted maps

use crate::value::{Map, Value};

/// Turn a converted map into a `serde_json::Value` object.
pub fn to_json(map: Map) -> serde_json::Value {
    Value::Map(map).into()
}

/// Render a converted map as pretty-printed JSON.
pub fn to_json_string_pretty(map: &Map) -> serde_json::Result<String> {
    serde_json::to_string_pretty(map)
}
