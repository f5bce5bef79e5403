//! The declarative schema model.
use crate::{matcher, MatchResult, Value};
use ahash::AHashSet;
use std::fmt;

/// A declarative description of the shape a value must satisfy.
///
/// Schemas are plain data: build them directly with the per-node builders
/// (every node struct converts into a [`Schema`]) or load them from their
/// JSON record form with [`Schema::from_value`](crate::Schema::from_value).
///
/// ```rust
/// use jsonshape::{ObjectSchema, Schema, StringSchema};
///
/// let schema: Schema = ObjectSchema::new()
///     .field("name", StringSchema::new().min_length(1))
///     .into();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// An object with per-field schemas; see [`ObjectSchema`].
    Object(ObjectSchema),
    /// An array, optionally with a per-element schema; see [`ArraySchema`].
    Array(ArraySchema),
    /// A string with optional alphabet and length constraints; see
    /// [`StringSchema`].
    String(StringSchema),
    /// A number with an ordered list of requirements; see [`NumberSchema`].
    Number(NumberSchema),
    /// Accepts every present value. The explicit way to say "anything":
    /// absence still mismatches, everything else passes.
    Any,
}

impl Schema {
    /// Check `value` against this schema.
    ///
    /// Equivalent to [`matches(value, self)`](crate::matches).
    #[must_use]
    pub fn matches(&self, value: &Value) -> MatchResult {
        matcher::matches(value, self)
    }

    /// Check `value` against this schema when only the boolean outcome
    /// matters.
    #[must_use]
    pub fn is_match(&self, value: &Value) -> bool {
        self.matches(value).matched
    }
}

/// Schema node for objects.
///
/// Declared fields are checked in declaration order against the value's
/// fields of the same name (missing ones count as absent); keys present in
/// the value but not declared here are ignored. The empty schema therefore
/// accepts any object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSchema {
    pub(crate) fields: Vec<(String, Schema)>,
}

impl ObjectSchema {
    /// An object schema with no declared fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Declaration order is iteration order and decides
    /// which mismatch is reported first.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.fields.push((name.into(), schema.into()));
        self
    }
}

/// Schema node for arrays.
///
/// Without an element schema, any array passes verbatim; with one, every
/// element is checked against it in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArraySchema {
    pub(crate) element: Option<Box<Schema>>,
}

impl ArraySchema {
    /// An array schema that accepts any array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require every element to satisfy `schema`.
    #[must_use]
    pub fn element(mut self, schema: impl Into<Schema>) -> Self {
        self.element = Some(Box::new(schema.into()));
        self
    }
}

/// Schema node for strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSchema {
    pub(crate) alphabet: Option<Alphabet>,
    pub(crate) min_length: Option<u64>,
    pub(crate) max_length: Option<u64>,
}

impl StringSchema {
    /// A string schema that accepts any string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the string to characters drawn from `alphabet`.
    #[must_use]
    pub fn alphabet(mut self, alphabet: impl Into<Alphabet>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    /// Require at least `limit` characters. Lengths count Unicode scalar
    /// values, not bytes.
    #[must_use]
    pub fn min_length(mut self, limit: u64) -> Self {
        self.min_length = Some(limit);
        self
    }

    /// Require at most `limit` characters.
    #[must_use]
    pub fn max_length(mut self, limit: u64) -> Self {
        self.max_length = Some(limit);
        self
    }
}

/// Schema node for numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberSchema {
    pub(crate) requires: Vec<Requirement>,
}

impl NumberSchema {
    /// A number schema that accepts any number.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a requirement. Requirements are checked in the order they were
    /// added.
    #[must_use]
    pub fn require(mut self, requirement: Requirement) -> Self {
        self.requires.push(requirement);
        self
    }
}

impl From<ObjectSchema> for Schema {
    #[inline]
    fn from(schema: ObjectSchema) -> Self {
        Schema::Object(schema)
    }
}

impl From<ArraySchema> for Schema {
    #[inline]
    fn from(schema: ArraySchema) -> Self {
        Schema::Array(schema)
    }
}

impl From<StringSchema> for Schema {
    #[inline]
    fn from(schema: StringSchema) -> Self {
        Schema::String(schema)
    }
}

impl From<NumberSchema> for Schema {
    #[inline]
    fn from(schema: NumberSchema) -> Self {
        Schema::Number(schema)
    }
}

/// The set of characters a [`StringSchema`] permits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet(AHashSet<char>);

impl Alphabet {
    /// Whether `character` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, character: char) -> bool {
        self.0.contains(&character)
    }
}

impl From<&str> for Alphabet {
    /// Every character of `characters` becomes a member; duplicates are
    /// harmless.
    fn from(characters: &str) -> Self {
        characters.chars().collect()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Alphabet(iter.into_iter().collect())
    }
}

/// An extra named rule attached to a [`NumberSchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The number must have no fractional part. NaN and the infinities
    /// fail it.
    Integer,
    /// The number must not be less than zero.
    Nonnegative,
}

impl Requirement {
    /// Whether `number` breaks this requirement.
    pub(crate) fn violated_by(self, number: f64) -> bool {
        match self {
            Requirement::Integer => number.fract() != 0.0,
            Requirement::Nonnegative => number < 0.0,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Integer => f.write_str("integer"),
            Requirement::Nonnegative => f.write_str("nonnegative"),
        }
    }
}

impl TryFrom<&str> for Requirement {
    type Error = ();

    #[inline]
    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        match tag {
            "integer" => Ok(Requirement::Integer),
            "nonnegative" => Ok(Requirement::Nonnegative),
            _ => Err(()),
        }
    }
}
