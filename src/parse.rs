//! Loading schemas from their JSON record form.
use crate::{
    error::SchemaError,
    schema::{
        Alphabet, ArraySchema, NumberSchema, ObjectSchema, Requirement, Schema, StringSchema,
    },
};
use serde_json::{Map, Value};

/// Keys that carry node metadata rather than declared object fields.
const RESERVED: &[&str] = &["type", "requires"];

impl Schema {
    /// Load a schema from its JSON record form.
    ///
    /// A record is a JSON object whose `"type"` key names the node type:
    /// `"object"`, `"array"`, `"string"`, `"number"` or `"any"`. On an
    /// object node every key except `"type"` and `"requires"` declares a
    /// field and holds that field's record, in document order. The other
    /// node types read their keywords (`"element"`, `"alphabet"`,
    /// `"minLength"`, `"maxLength"`, `"requires"`) and ignore unknown
    /// keys.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if a node is not an object, lacks a type
    /// tag, names an unknown type or requirement, or holds a keyword of
    /// the wrong kind.
    pub fn from_value(schema: &Value) -> Result<Schema, SchemaError> {
        let Value::Object(node) = schema else {
            return Err(SchemaError::NotAnObject);
        };
        let tag = match node.get("type") {
            Some(Value::String(tag)) => tag.as_str(),
            Some(_) => {
                return Err(SchemaError::InvalidKeyword {
                    keyword: "type",
                    expected: "a string",
                })
            }
            None => return Err(SchemaError::MissingType),
        };
        match tag {
            "object" => load_object(node),
            "array" => load_array(node),
            "string" => load_string(node),
            "number" => load_number(node),
            "any" => Ok(Schema::Any),
            _ => Err(SchemaError::UnknownType {
                tag: tag.to_string(),
            }),
        }
    }
}

fn load_object(node: &Map<String, Value>) -> Result<Schema, SchemaError> {
    let mut schema = ObjectSchema::new();
    for (key, value) in node {
        if RESERVED.contains(&key.as_str()) {
            continue;
        }
        schema = schema.field(key.as_str(), Schema::from_value(value)?);
    }
    Ok(schema.into())
}

fn load_array(node: &Map<String, Value>) -> Result<Schema, SchemaError> {
    let mut schema = ArraySchema::new();
    if let Some(element) = node.get("element") {
        schema = schema.element(Schema::from_value(element)?);
    }
    Ok(schema.into())
}

fn load_string(node: &Map<String, Value>) -> Result<Schema, SchemaError> {
    let mut schema = StringSchema::new();
    if let Some(alphabet) = node.get("alphabet") {
        let Value::String(characters) = alphabet else {
            return Err(SchemaError::InvalidKeyword {
                keyword: "alphabet",
                expected: "a string",
            });
        };
        schema = schema.alphabet(Alphabet::from(characters.as_str()));
    }
    if let Some(limit) = node.get("minLength") {
        schema = schema.min_length(load_limit("minLength", limit)?);
    }
    if let Some(limit) = node.get("maxLength") {
        schema = schema.max_length(load_limit("maxLength", limit)?);
    }
    Ok(schema.into())
}

fn load_limit(keyword: &'static str, limit: &Value) -> Result<u64, SchemaError> {
    limit.as_u64().ok_or(SchemaError::InvalidKeyword {
        keyword,
        expected: "a nonnegative integer",
    })
}

fn load_number(node: &Map<String, Value>) -> Result<Schema, SchemaError> {
    let mut schema = NumberSchema::new();
    if let Some(requires) = node.get("requires") {
        let Value::Array(tags) = requires else {
            return Err(SchemaError::InvalidKeyword {
                keyword: "requires",
                expected: "an array of requirement names",
            });
        };
        for tag in tags {
            let Value::String(tag) = tag else {
                return Err(SchemaError::InvalidKeyword {
                    keyword: "requires",
                    expected: "an array of requirement names",
                });
            };
            let requirement = Requirement::try_from(tag.as_str())
                .map_err(|()| SchemaError::UnknownRequirement { tag: tag.clone() })?;
            schema = schema.require(requirement);
        }
    }
    Ok(schema.into())
}
