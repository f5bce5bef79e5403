//! # jsonshape
//!
//! A crate for fail-fast structural matching of decoded JSON-like values
//! against declarative schemas. A schema describes the shape a value must
//! have; matching walks value and schema together, stops at the first
//! mismatch and reports where it happened.
//!
//! ## Usage Examples:
//! A schema can be built with two main flavours:
//!  * using the typed builders
//! ```rust
//! use jsonshape::{is_match, NumberSchema, ObjectSchema, Requirement, Schema, Value};
//!
//! let schema: Schema = ObjectSchema::new()
//!     .field("retries", NumberSchema::new().require(Requirement::Nonnegative))
//!     .into();
//! let value = Value::from(serde_json::json!({"retries": 3, "backoff": "fixed"}));
//! assert!(is_match(&value, &schema));
//! ```
//!  * loading the JSON record form
//! ```rust
//! use jsonshape::{is_match, Schema, SchemaError, Value};
//! use serde_json::json;
//!
//! fn main() -> Result<(), SchemaError> {
//!     let schema = Schema::from_value(&json!({
//!         "type": "object",
//!         "retries": {"type": "number", "requires": ["nonnegative"]},
//!     }))?;
//!     let value = Value::from(json!({"retries": 3}));
//!     assert!(is_match(&value, &schema));
//!     Ok(())
//! }
//! ```
//!
//! ## Example (locating the first mismatch)
//! ```rust
//! use jsonshape::{matches, ArraySchema, ObjectSchema, Schema, StringSchema, Value};
//! use serde_json::json;
//!
//! let schema: Schema = ObjectSchema::new()
//!     .field("tags", ArraySchema::new().element(StringSchema::new()))
//!     .into();
//! let value = Value::from(json!({"tags": ["alpha", 7]}));
//! let result = matches(&value, &schema);
//! assert!(!result.matched);
//! let path = result.error_path.unwrap();
//! assert_eq!(path.to_string(), ".tags[1]");
//! ```
#![warn(
    clippy::cast_possible_truncation,
    clippy::doc_markdown,
    clippy::explicit_iter_loop,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::needless_pass_by_value,
    clippy::print_stdout,
    clippy::redundant_closure,
    clippy::trivially_copy_pass_by_ref,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unreachable_pub
)]
mod error;
mod matcher;
mod parse;
mod paths;
mod schema;
mod value;
pub use error::SchemaError;
pub use matcher::{matches, MatchResult};
pub use paths::{ErrorPath, PathChunk};
pub use schema::{
    Alphabet, ArraySchema, NumberSchema, ObjectSchema, Requirement, Schema, StringSchema,
};
pub use value::Value;

/// A shortcut for checking `value` against `schema` when only the boolean
/// outcome matters.
/// ```rust
/// use jsonshape::{is_match, Schema, StringSchema, Value};
///
/// let schema: Schema = StringSchema::new().max_length(5).into();
/// assert!(is_match(&Value::from("foo"), &schema));
/// assert!(!is_match(&Value::from("foo, bar"), &schema));
/// ```
#[must_use]
#[inline]
pub fn is_match(value: &Value, schema: &Schema) -> bool {
    matches(value, schema).matched
}


#[cfg(test)]
mod tests {
    use super::is_match;
    use crate::{Schema, StringSchema, Value};

    #[test]
    fn test_is_match() {
        let schema: Schema = StringSchema::new().max_length(5).into();
        assert!(is_match(&Value::from("foo"), &schema));
        assert!(!is_match(&Value::from("foo, bar"), &schema));
    }
}
