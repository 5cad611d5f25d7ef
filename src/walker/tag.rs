//! Serialization annotation parsing

use super::config::WalkerConfig;

/// What a field's annotation asks the walker to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTag<'a> {
    /// Never emit this field
    Skip,
    /// Emit under `key`, unless `omit_empty` applies
    Keyed { key: &'a str, omit_empty: bool },
}

/// Parse a raw annotation such as `"createdAt,omitempty"`.
///
/// The key is everything before the first separator. A missing annotation, or
/// one with an empty key part (`",omitempty"`), falls back to the field name.
/// Only an annotation that is exactly the skip marker skips the field, so
/// `"-,"` emits under the key `"-"`.
///
/// # Example
///
/// ```
/// use epochmap::{FieldTag, WalkerConfig, parse_tag};
///
/// let config = WalkerConfig::default();
/// assert_eq!(parse_tag(Some("-"), "Secret", &config), FieldTag::Skip);
/// assert_eq!(
///     parse_tag(Some("name,omitempty"), "Name", &config),
///     FieldTag::Keyed { key: "name", omit_empty: true }
/// );
/// assert_eq!(
///     parse_tag(None, "Name", &config),
///     FieldTag::Keyed { key: "Name", omit_empty: false }
/// );
/// ```
pub fn parse_tag<'a>(raw: Option<&'a str>, field_name: &'a str, config: &WalkerConfig) -> FieldTag<'a> {
    let Some(raw) = raw else {
        return FieldTag::Keyed {
            key: field_name,
            omit_empty: false,
        };
    };

    if raw == config.skip_marker {
        return FieldTag::Skip;
    }

    let (name, options) = raw.split_once(config.separator).unwrap_or((raw, ""));
    let omit_empty = options
        .split(config.separator)
        .any(|option| option.trim() == config.omit_empty_modifier);
    let key = if name.is_empty() { field_name } else { name };

    FieldTag::Keyed { key, omit_empty }
}
