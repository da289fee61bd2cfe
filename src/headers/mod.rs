//! HTTP Header Map.
//!
//! Field names are stored in lowercase, so lookup is case-insensitive by construction. A field
//! that appears multiple times is combined into a single value joined by `", "`.
mod name;
mod field;
mod map;
mod iter;
pub mod error;

pub use name::{normalize_name, validate_name};
pub use field::HeaderField;
pub use map::Headers;
pub use iter::Iter;
pub use error::HeaderError;
