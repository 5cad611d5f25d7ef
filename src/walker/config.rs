//! Configuration types for the struct walker

const DEFAULT_SKIP_MARKER: &str = "-";
const DEFAULT_SEPARATOR: char = ',';
const DEFAULT_OMIT_EMPTY: &str = "omitempty";

/// Annotation syntax understood by the walker.
///
/// The defaults read tags like `"createdAt,omitempty"` and `"-"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Tag value that removes a field from the output unconditionally
    pub skip_marker: String,
    /// Separates the key from its modifiers
    pub separator: char,
    /// Modifier that drops the field when it holds a zero value or `None`
    pub omit_empty_modifier: String,
}

impl WalkerConfig {
    pub fn with_skip_marker(mut self, marker: impl Into<String>) -> Self {
        self.skip_marker = marker.into();
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_omit_empty_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.omit_empty_modifier = modifier.into();
        self
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            skip_marker: DEFAULT_SKIP_MARKER.to_string(),
            separator: DEFAULT_SEPARATOR,
            omit_empty_modifier: DEFAULT_OMIT_EMPTY.to_string(),
        }
    }
}
