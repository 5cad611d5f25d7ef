//! Runtime field introspection for records
//!
//! Rust has no runtime reflection, so every type the walker can look into
//! describes itself through [`Reflect`]. Scalars, timestamps, sequences,
//! maps and wrappers are covered here; records implement the trait by
//! returning their field descriptor table:
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use epochmap::{Field, Reflect, Reflected};
//!
//! struct Event {
//!     id: i64,
//!     note: String,
//!     created_at: DateTime<Utc>,
//! }
//!
//! impl Reflect for Event {
//!     fn reflect(&self) -> Reflected<'_> {
//!         Reflected::Record(vec![
//!             Field::new("id", &self.id).tag("id"),
//!             Field::new("note", &self.note).tag("note,omitempty"),
//!             Field::new("created_at", &self.created_at).tag("createdAt"),
//!         ])
//!     }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, TimeZone};

use crate::value::Value;

/// A type that can describe its own shape to the walker.
pub trait Reflect {
    /// Borrowed view of this value's shape and contents.
    fn reflect(&self) -> Reflected<'_>;

    /// Whether this value equals its type's zero/default value.
    fn is_zero(&self) -> bool {
        self.reflect().is_zero()
    }
}

/// Shape of a reflected value.
pub enum Reflected<'a> {
    /// Primitive value, copied out into the output carrier
    Scalar(Value),
    /// An instant in time
    Timestamp(UnixTime),
    /// Ordered sequence of elements
    Seq(Vec<&'a dyn Reflect>),
    /// String-keyed map
    Map(Vec<(&'a str, &'a dyn Reflect)>),
    /// Record with its fields in declaration order
    Record(Vec<Field<'a>>),
    /// Nullable reference
    Optional(Option<&'a dyn Reflect>),
}

impl<'a> Reflected<'a> {
    /// Zero/default check used by omit-if-empty and the top-level input check.
    pub fn is_zero(&self) -> bool {
        match self {
            Reflected::Scalar(value) => value.is_zero(),
            Reflected::Timestamp(ts) => ts.is_epoch(),
            Reflected::Seq(items) => items.is_empty(),
            Reflected::Map(entries) => entries.is_empty(),
            Reflected::Record(fields) => fields.iter().all(|f| f.value().is_zero()),
            Reflected::Optional(inner) => inner.is_none(),
        }
    }

    /// Unwrap every optional layer. `None` if any layer is empty.
    pub fn into_inner(self) -> Option<Reflected<'a>> {
        let mut current = self;
        loop {
            match current {
                Reflected::Optional(Some(inner)) => current = inner.reflect(),
                Reflected::Optional(None) => return None,
                other => return Some(other),
            }
        }
    }

    /// Short shape name, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Reflected::Scalar(value) => value.type_name(),
            Reflected::Timestamp(_) => "timestamp",
            Reflected::Seq(_) => "seq",
            Reflected::Map(_) => "map",
            Reflected::Record(_) => "record",
            Reflected::Optional(_) => "optional",
        }
    }
}

/// An instant expressed against the Unix epoch.
///
/// `secs` is floored, so `nanos` is always the non-negative remainder; an
/// instant half a second before the epoch is `secs = -1, nanos = 500_000_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnixTime {
    secs: i64,
    nanos: u32,
}

impl UnixTime {
    pub fn new(secs: i64, nanos: u32) -> Self {
        Self { secs, nanos }
    }

    /// Whole seconds since the epoch (negative before it).
    pub fn secs(&self) -> i64 {
        self.secs
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    pub fn is_epoch(&self) -> bool {
        self.secs == 0 && self.nanos == 0
    }

    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self::new(
                i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
                after.subsec_nanos(),
            ),
            Err(err) => {
                // i128 keeps 2^63 seconds before the epoch representable
                let before = err.duration();
                let (secs, nanos) = match before.subsec_nanos() {
                    0 => (-i128::from(before.as_secs()), 0),
                    nanos => (-i128::from(before.as_secs()) - 1, 1_000_000_000 - nanos),
                };
                Self::new(i64::try_from(secs).unwrap_or(i64::MIN), nanos)
            }
        }
    }
}

/// Descriptor for one field of a record.
///
/// Fields are exported with no annotation and not embedded unless the
/// builder methods say otherwise.
pub struct Field<'a> {
    name: &'static str,
    tag: Option<&'static str>,
    exported: bool,
    embedded: bool,
    value: &'a dyn Reflect,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a dyn Reflect) -> Self {
        Self {
            name,
            tag: None,
            exported: true,
            embedded: false,
            value,
        }
    }

    /// Set the serialization annotation, e.g. `"createdAt,omitempty"` or `"-"`.
    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Mark the field as internal; internal fields never reach the output.
    pub fn internal(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Mark the field as embedded: a record value is spliced into the parent.
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn raw_tag(&self) -> Option<&'static str> {
        self.tag
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    pub fn value(&self) -> &'a dyn Reflect {
        self.value
    }
}

macro_rules! reflect_signed {
    ($($t:ty),*) => {
        $(
            impl Reflect for $t {
                fn reflect(&self) -> Reflected<'_> {
                    Reflected::Scalar(Value::Int(*self as i64))
                }
            }
        )*
    };
}

macro_rules! reflect_unsigned {
    ($($t:ty),*) => {
        $(
            impl Reflect for $t {
                fn reflect(&self) -> Reflected<'_> {
                    Reflected::Scalar(Value::UInt(*self as u64))
                }
            }
        )*
    };
}

reflect_signed!(i8, i16, i32, i64, isize);
reflect_unsigned!(u8, u16, u32, u64, usize);

impl Reflect for f32 {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Scalar(Value::Float(f64::from(*self)))
    }
}

impl Reflect for f64 {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Scalar(Value::Float(*self))
    }
}

impl Reflect for bool {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Scalar(Value::Bool(*self))
    }
}

impl Reflect for char {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Scalar(Value::String(self.to_string()))
    }

    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl Reflect for str {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Scalar(Value::String(self.to_owned()))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Reflect for String {
    fn reflect(&self) -> Reflected<'_> {
        self.as_str().reflect()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<Tz: TimeZone> Reflect for DateTime<Tz> {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Timestamp(UnixTime::new(
            self.timestamp(),
            self.timestamp_subsec_nanos(),
        ))
    }
}

impl Reflect for SystemTime {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Timestamp(UnixTime::from_system_time(*self))
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Optional(self.as_ref().map(|v| v as &dyn Reflect))
    }
}

impl<T: Reflect> Reflect for [T] {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Seq(self.iter().map(|v| v as &dyn Reflect).collect())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Reflected<'_> {
        self.as_slice().reflect()
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect(&self) -> Reflected<'_> {
        self.as_slice().reflect()
    }
}

impl<T: Reflect, S: BuildHasher> Reflect for HashMap<String, T, S> {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Map(
            self.iter()
                .map(|(k, v)| (k.as_str(), v as &dyn Reflect))
                .collect(),
        )
    }
}

impl<T: Reflect> Reflect for BTreeMap<String, T> {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Map(
            self.iter()
                .map(|(k, v)| (k.as_str(), v as &dyn Reflect))
                .collect(),
        )
    }
}

// Non-null pointers are transparent: they reflect as their pointee.

impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Reflected<'_> {
        (**self).reflect()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn reflect(&self) -> Reflected<'_> {
        (**self).reflect()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: Reflect + ?Sized> Reflect for Rc<T> {
    fn reflect(&self) -> Reflected<'_> {
        (**self).reflect()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: Reflect + ?Sized> Reflect for Arc<T> {
    fn reflect(&self) -> Reflected<'_> {
        (**self).reflect()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}
