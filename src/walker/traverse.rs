//! StructWalker - projects a record into a generic map

use tracing::{debug, trace};

use crate::error::{ConvertError, Result};
use crate::reflect::{Field, Reflect, Reflected};
use crate::value::{Map, Value};

use super::config::WalkerConfig;
use super::tag::{FieldTag, parse_tag};

/// Depth-first walker that turns records into [`Map`]s, rewriting every
/// timestamp as whole seconds since the Unix epoch.
///
/// The walker only holds its configuration, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct StructWalker {
    config: WalkerConfig,
}

impl StructWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Convert a record, or any optional/pointer wrapping one.
    ///
    /// Wrappers are removed before the zero check, so `Some(Record::default())`
    /// is rejected as [`ConvertError::ZeroInput`].
    pub fn convert<T: Reflect + ?Sized>(&self, value: &T) -> Result<Map> {
        // Zero checks go through `Reflect::is_zero` so type-level overrides apply
        let (reflected, is_zero) = match value.reflect() {
            Reflected::Optional(inner) => {
                let Some(target) = innermost(inner) else {
                    debug!("rejecting nil input");
                    return Err(ConvertError::NilInput);
                };
                (target.reflect(), target.is_zero())
            }
            other => (other, value.is_zero()),
        };

        if is_zero {
            debug!(kind = reflected.kind_name(), "rejecting zero input");
            return Err(ConvertError::ZeroInput);
        }

        match reflected {
            Reflected::Record(fields) => Ok(self.walk_fields(&fields)),
            other => {
                debug!(kind = other.kind_name(), "rejecting non-record input");
                Err(ConvertError::NotAStruct {
                    found: other.kind_name(),
                })
            }
        }
    }

    fn walk_fields(&self, fields: &[Field<'_>]) -> Map {
        let mut data = Map::new();

        for field in fields {
            if !field.is_exported() {
                trace!(field = field.name(), "skipping internal field");
                continue;
            }

            let (key, omit_empty) = match parse_tag(field.raw_tag(), field.name(), &self.config) {
                FieldTag::Skip => {
                    trace!(field = field.name(), "skipping field tagged with skip marker");
                    continue;
                }
                FieldTag::Keyed { key, omit_empty } => (key, omit_empty),
            };

            let Some(reflected) = resolve(field, omit_empty) else {
                continue;
            };

            match reflected {
                Reflected::Timestamp(ts) => {
                    data.insert(key.to_string(), Value::Timestamp(ts.secs()));
                }
                Reflected::Seq(items) => {
                    data.insert(key.to_string(), Value::Seq(self.convert_seq(&items)));
                }
                Reflected::Record(nested) if field.is_embedded() => {
                    // Spliced keys overwrite earlier siblings and can be
                    // overwritten by later ones.
                    data.extend(self.walk_fields(&nested));
                }
                Reflected::Record(nested) => {
                    data.insert(key.to_string(), Value::Map(self.walk_fields(&nested)));
                }
                Reflected::Map(entries) => {
                    data.insert(key.to_string(), Value::Map(self.convert_entries(&entries)));
                }
                Reflected::Scalar(value) => {
                    data.insert(key.to_string(), value);
                }
                // resolve() unwraps every optional layer
                Reflected::Optional(_) => {}
            }
        }

        data
    }

    fn convert_seq(&self, items: &[&dyn Reflect]) -> Vec<Value> {
        items.iter().map(|item| self.convert_element(*item)).collect()
    }

    fn convert_entries(&self, entries: &[(&str, &dyn Reflect)]) -> Map {
        entries
            .iter()
            .map(|(key, item)| (key.to_string(), self.convert_element(*item)))
            .collect()
    }

    /// Element rule: no splicing and no omission, elements keep their position.
    fn convert_element(&self, item: &dyn Reflect) -> Value {
        match item.reflect() {
            Reflected::Timestamp(ts) => Value::Timestamp(ts.secs()),
            Reflected::Record(fields) => Value::Map(self.walk_fields(&fields)),
            Reflected::Seq(items) => Value::Seq(self.convert_seq(&items)),
            Reflected::Map(entries) => Value::Map(self.convert_entries(&entries)),
            Reflected::Optional(Some(inner)) => self.convert_element(inner),
            Reflected::Optional(None) => Value::Absent,
            Reflected::Scalar(value) => value,
        }
    }
}

/// Apply the omission rules to a field and unwrap optionals.
///
/// `None` means the field produces no output entry.
fn resolve<'a>(field: &Field<'a>, omit_empty: bool) -> Option<Reflected<'a>> {
    let value = field.value();
    let reflected = value.reflect();

    if let Reflected::Optional(inner) = reflected {
        if omit_empty && inner.is_none() {
            trace!(field = field.name(), "omitting empty optional");
            return None;
        }
        let Some(target) = innermost(inner) else {
            trace!(field = field.name(), "skipping unresolvable optional");
            return None;
        };
        return Some(target.reflect());
    }

    if omit_empty && value.is_zero() {
        trace!(field = field.name(), "omitting zero value");
        return None;
    }

    Some(reflected)
}

/// Follow nested optionals down to the first non-optional value.
fn innermost<'a>(mut inner: Option<&'a dyn Reflect>) -> Option<&'a dyn Reflect> {
    while let Some(current) = inner {
        match current.reflect() {
            Reflected::Optional(next) => inner = next,
            _ => return Some(current),
        }
    }
    None
}
