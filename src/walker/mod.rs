//! Record walking logic
//!
//! - `StructWalker`: recursive field traversal producing a generic [`Map`](crate::Map)
//! - `WalkerConfig`: annotation syntax (skip marker, separator, omit-if-empty modifier)
//! - `parse_tag`: splits a raw annotation into key and modifiers

mod config;
mod tag;
mod traverse;

// Re-export public types
pub use config::WalkerConfig;
pub use tag::{FieldTag, parse_tag};
pub use traverse::StructWalker;
