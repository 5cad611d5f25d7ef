//! Generic value carrier produced by the walker

use std::collections::BTreeMap;

use serde::Serialize;

/// Mapping from output key to converted value.
///
/// Keys are kept sorted so two conversions of the same record compare and
/// serialize identically.
pub type Map = BTreeMap<String, Value>;

/// A converted field value.
///
/// Serializes untagged: scalars and timestamps become plain JSON numbers,
/// strings and booleans, `Absent` becomes `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// No value (an empty optional inside a sequence or map)
    Absent,
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer, kept apart so `u64` values above `i64::MAX` survive
    UInt(u64),
    Float(f64),
    String(String),
    /// Whole seconds since 1970-01-01T00:00:00Z
    Timestamp(i64),
    /// Ordered sequence
    Seq(Vec<Value>),
    /// Nested record or string-keyed map
    Map(Map),
}

impl Value {
    /// Short name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Timestamp(_) => "timestamp",
            Value::Seq(_) => "seq",
            Value::Map(_) => "map",
        }
    }

    /// Whether this is the zero value of its variant.
    ///
    /// Used for omit-if-empty decisions on scalar fields.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Absent => true,
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::UInt(u) => *u == 0,
            // -0.0 is not the default value
            Value::Float(f) => f.to_bits() == 0,
            Value::String(s) => s.is_empty(),
            Value::Timestamp(t) => *t == 0,
            Value::Seq(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Integer view of `Int`, `Timestamp`, or an `UInt` that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) | Value::Timestamp(i) => Some(*i),
            Value::UInt(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::UInt(u)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Absent => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) | Value::Timestamp(i) => serde_json::Value::from(i),
            Value::UInt(u) => serde_json::Value::from(u),
            // Non-finite floats have no JSON form and map to null
            Value::Float(f) => serde_json::Value::from(f),
            Value::String(s) => serde_json::Value::String(s),
            Value::Seq(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}
