//! epochmap - project typed records into generic maps with Unix-time timestamps
//!
//! A record describes its fields through [`Reflect`]; [`convert`] walks them
//! and builds a [`Map`] of [`Value`]s. Every timestamp becomes whole seconds
//! since 1970-01-01T00:00:00Z, everything else keeps its shape.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use epochmap::{Field, Reflect, Reflected, Value};
//!
//! struct Login {
//!     user: String,
//!     at: chrono::DateTime<Utc>,
//! }
//!
//! impl Reflect for Login {
//!     fn reflect(&self) -> Reflected<'_> {
//!         Reflected::Record(vec![
//!             Field::new("User", &self.user).tag("user"),
//!             Field::new("At", &self.at).tag("at"),
//!         ])
//!     }
//! }
//!
//! let login = Login {
//!     user: "ana".to_string(),
//!     at: Utc.timestamp_opt(1633024900, 0).unwrap(),
//! };
//! let map = epochmap::convert(&login).unwrap();
//! assert_eq!(map["at"], Value::Timestamp(1633024900));
//! ```

pub mod error;
pub mod json;
pub mod reflect;
pub mod value;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ConvertError, Result};
pub use json::{to_json, to_json_string_pretty};
pub use reflect::{Field, Reflect, Reflected, UnixTime};
pub use value::{Map, Value};
pub use walker::{FieldTag, StructWalker, WalkerConfig, parse_tag};

/// Convert a record with the default annotation syntax.
///
/// Shorthand for `StructWalker::default().convert(value)`.
pub fn convert<T: Reflect + ?Sized>(value: &T) -> Result<Map> {
    StructWalker::default().convert(value)
}
