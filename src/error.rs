//! Conversion errors

/// Reasons a value was rejected before any field was inspected.
///
/// Problems with individual fields are never errors; such fields are left
/// out of the output instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The input was an empty optional.
    #[error("input data is nil")]
    NilInput,

    /// The input equals its type's zero/default value.
    #[error("input data is zero")]
    ZeroInput,

    /// The input is not a record once every wrapper is removed.
    #[error("input data should be a struct, found {found}")]
    NotAStruct { found: &'static str },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ConvertError::NilInput.to_string(), "input data is nil");
        assert_eq!(ConvertError::ZeroInput.to_string(), "input data is zero");
        assert_eq!(
            ConvertError::NotAStruct { found: "int" }.to_string(),
            "input data should be a struct, found int"
        );
    }
}
