//! Errors reported while loading a schema from its JSON record form.
use std::{error, fmt};

/// An error that can occur during loading a schema with
/// [`Schema::from_value`](crate::Schema::from_value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A schema node was not a JSON object.
    NotAnObject,
    /// A schema node had no `"type"` key.
    MissingType,
    /// A schema node's `"type"` key named no known node type.
    UnknownType {
        /// The unrecognized tag.
        tag: String,
    },
    /// A known keyword held a value of the wrong kind.
    InvalidKeyword {
        /// The offending keyword.
        keyword: &'static str,
        /// What the keyword accepts.
        expected: &'static str,
    },
    /// A `"requires"` entry named no known number requirement.
    UnknownRequirement {
        /// The unrecognized tag.
        tag: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::NotAnObject => f.write_str("schema node must be a JSON object"),
            SchemaError::MissingType => f.write_str(r#"schema node is missing the "type" key"#),
            SchemaError::UnknownType { tag } => {
                write!(f, r#""{tag}" is not a known schema type"#)
            }
            SchemaError::InvalidKeyword { keyword, expected } => {
                write!(f, r#""{keyword}" must be {expected}"#)
            }
            SchemaError::UnknownRequirement { tag } => {
                write!(f, r#""{tag}" is not a known number requirement"#)
            }
        }
    }
}

impl error::Error for SchemaError {}
