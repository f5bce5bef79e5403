//! The recursive structural matcher.
use crate::{
    paths::InstancePath,
    schema::{ArraySchema, NumberSchema, ObjectSchema, Schema, StringSchema},
    ErrorPath, Value,
};
use serde::Serialize;

/// Stand-in for fields the value does not carry.
static ABSENT: Value = Value::Absent;

/// The outcome of matching a value against a schema.
///
/// Serializes with camel-cased keys, omitting `errorPath` when there is
/// none:
///
/// ```rust
/// use jsonshape::{matches, NumberSchema, Schema, Value};
///
/// let schema: Schema = NumberSchema::new().into();
/// let result = matches(&Value::Bool(true), &schema);
/// assert_eq!(serde_json::to_string(&result)?, r#"{"matched":false}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Whether the value satisfied the schema.
    pub matched: bool,
    /// Location of the first mismatching value, absent for matches and
    /// for mismatches of the root value itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_path: Option<ErrorPath>,
}

impl MatchResult {
    pub(crate) const fn matched() -> MatchResult {
        MatchResult {
            matched: true,
            error_path: None,
        }
    }

    pub(crate) fn mismatch_at(location: &InstancePath) -> MatchResult {
        MatchResult {
            matched: false,
            error_path: location.to_error_path(),
        }
    }
}

/// Check a decoded `value` against `schema`.
///
/// Matching is fail-fast: the first mismatching value decides the
/// outcome, and its location is reported in declaration order for
/// objects and index order for arrays. Recursion follows the nesting
/// depth of `value` and `schema`; there is no built-in depth limit.
///
/// ```rust
/// use jsonshape::{matches, ObjectSchema, Schema, StringSchema, Value};
///
/// let schema: Schema = ObjectSchema::new()
///     .field("name", StringSchema::new())
///     .into();
/// let value = Value::from(serde_json::json!({"name": "scout", "age": 7}));
/// assert!(matches(&value, &schema).matched);
/// ```
#[must_use]
pub fn matches(value: &Value, schema: &Schema) -> MatchResult {
    match_at(value, schema, &InstancePath::new())
}

fn match_at(value: &Value, schema: &Schema, location: &InstancePath) -> MatchResult {
    // Presence comes before everything else: an absent value fails any
    // node, `any` included.
    if value.is_absent() {
        return MatchResult::mismatch_at(location);
    }
    match schema {
        Schema::Object(schema) => match_object(value, schema, location),
        Schema::Array(schema) => match_array(value, schema, location),
        Schema::String(schema) => match_string(value, schema, location),
        Schema::Number(schema) => match_number(value, schema, location),
        Schema::Any => MatchResult::matched(),
    }
}

fn match_object(value: &Value, schema: &ObjectSchema, location: &InstancePath) -> MatchResult {
    let Value::Object(fields) = value else {
        return MatchResult::mismatch_at(location);
    };
    for (name, field_schema) in &schema.fields {
        let field = fields.get(name).unwrap_or(&ABSENT);
        let outcome = match_at(field, field_schema, &location.push(name));
        if !outcome.matched {
            return outcome;
        }
    }
    MatchResult::matched()
}

fn match_array(value: &Value, schema: &ArraySchema, location: &InstancePath) -> MatchResult {
    let Value::Array(items) = value else {
        return MatchResult::mismatch_at(location);
    };
    let Some(element) = &schema.element else {
        return MatchResult::matched();
    };
    for (index, item) in items.iter().enumerate() {
        let outcome = match_at(item, element, &location.push(index));
        if !outcome.matched {
            return outcome;
        }
    }
    MatchResult::matched()
}

fn match_string(value: &Value, schema: &StringSchema, location: &InstancePath) -> MatchResult {
    let Value::String(contents) = value else {
        return MatchResult::mismatch_at(location);
    };
    if let Some(alphabet) = &schema.alphabet {
        if contents
            .chars()
            .any(|character| !alphabet.contains(character))
        {
            return MatchResult::mismatch_at(location);
        }
    }
    if schema.min_length.is_some() || schema.max_length.is_some() {
        let length = bytecount::num_chars(contents.as_bytes()) as u64;
        if let Some(limit) = schema.max_length {
            if length > limit {
                return MatchResult::mismatch_at(location);
            }
        }
        if let Some(limit) = schema.min_length {
            if length < limit {
                return MatchResult::mismatch_at(location);
            }
        }
    }
    MatchResult::matched()
}

fn match_number(value: &Value, schema: &NumberSchema, location: &InstancePath) -> MatchResult {
    let Value::Number(number) = value else {
        return MatchResult::mismatch_at(location);
    };
    for requirement in &schema.requires {
        if requirement.violated_by(*number) {
            return MatchResult::mismatch_at(location);
        }
    }
    MatchResult::matched()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        schema::Requirement,
        tests_util::{expect_match, expect_mismatch, expect_mismatch_at},
    };
    use serde_json::json;
    use test_case::test_case;

    fn account_schema() -> Schema {
        ObjectSchema::new()
            .field("user", ObjectSchema::new().field("name", StringSchema::new()))
            .field("tags", ArraySchema::new().element(StringSchema::new()))
            .field(
                "history",
                ArraySchema::new().element(
                    ObjectSchema::new()
                        .field("at", NumberSchema::new().require(Requirement::Integer)),
                ),
            )
            .into()
    }

    #[test_case(Schema::Any)]
    #[test_case(ObjectSchema::new().into())]
    #[test_case(ArraySchema::new().into())]
    #[test_case(StringSchema::new().into())]
    #[test_case(NumberSchema::new().into())]
    fn absence_mismatches_every_node(schema: Schema) {
        expect_mismatch(&schema, Value::Absent);
    }

    #[test_case(json!(true))]
    #[test_case(json!(null))]
    #[test_case(json!("on"))]
    #[test_case(json!(12.5))]
    #[test_case(json!([1, 2]))]
    #[test_case(json!({"left": "over"}))]
    fn any_accepts_every_present_value(value: serde_json::Value) {
        expect_match(&Schema::Any, value);
    }

    #[test_case(ObjectSchema::new().into(), json!([])
        ; "array against object")]
    #[test_case(ObjectSchema::new().into(), json!("{}")
        ; "string against object")]
    #[test_case(ArraySchema::new().into(), json!({"0": 1})
        ; "object against array")]
    #[test_case(ArraySchema::new().into(), json!(null)
        ; "null against array")]
    #[test_case(StringSchema::new().into(), json!(34352.64)
        ; "number against string")]
    #[test_case(StringSchema::new().into(), json!(true)
        ; "bool against string")]
    #[test_case(NumberSchema::new().into(), json!("34352.64")
        ; "string against number")]
    #[test_case(NumberSchema::new().into(), json!(null)
        ; "null against number")]
    fn wrong_kinds_mismatch_at_the_root(schema: Schema, value: serde_json::Value) {
        expect_mismatch(&schema, value);
    }

    #[test]
    fn undeclared_fields_are_ignored() {
        let schema: Schema = ObjectSchema::new().field("name", StringSchema::new()).into();
        expect_match(&schema, json!({"name": "scout", "stars": 104, "private": false}));
        expect_match(&ObjectSchema::new().into(), json!({"anything": [1, 2, 3]}));
    }

    #[test]
    fn declaration_order_decides_the_reported_field() {
        let schema: Schema = ObjectSchema::new()
            .field("first", NumberSchema::new())
            .field("second", StringSchema::new())
            .into();
        // Both fields are wrong; the declared order picks the report.
        expect_mismatch_at(&schema, json!({"second": 5, "first": "five"}), ".first");
    }

    #[test]
    fn missing_declared_fields_report_their_path() {
        let schema: Schema = ObjectSchema::new().field("bar", StringSchema::new()).into();
        expect_mismatch_at(&schema, json!({}), ".bar");
        let nested: Schema = ObjectSchema::new()
            .field("outer", ObjectSchema::new().field("inner", Schema::Any))
            .into();
        expect_mismatch_at(&nested, json!({"outer": {}}), ".outer.inner");
    }

    #[test]
    fn paths_compose_through_objects_and_arrays() {
        let schema = account_schema();
        expect_mismatch_at(
            &schema,
            json!({"user": {"name": 7}, "tags": [], "history": []}),
            ".user.name",
        );
        expect_mismatch_at(
            &schema,
            json!({"user": {"name": "ada"}, "tags": ["ok", 3], "history": []}),
            ".tags[1]",
        );
        expect_mismatch_at(
            &schema,
            json!({"user": {"name": "ada"}, "tags": [], "history": [{"at": 1.5}]}),
            ".history[0].at",
        );
    }

    #[test]
    fn bare_arrays_accept_any_elements() {
        let schema: Schema = ArraySchema::new().into();
        expect_match(&schema, json!([1, "two", null, [3], {"four": 4}]));
        expect_match(&schema, json!([]));
    }

    #[test]
    fn the_first_failing_element_is_reported() {
        let schema: Schema = ArraySchema::new().element(NumberSchema::new()).into();
        expect_match(&schema, json!([1, 2, 3]));
        expect_mismatch_at(&schema, json!([1, "2", "3"]), "[1]");
    }

    #[test]
    fn alphabet_restricts_the_characters() {
        let schema: Schema = StringSchema::new().alphabet("tens-").into();
        expect_match(&schema, json!("ten-nets"));
        expect_match(&schema, json!(""));
        expect_mismatch(&schema, json!("tense?"));
    }

    #[test_case("stu", true)]
    #[test_case("st", false)]
    #[test_case("strung", true)]
    #[test_case("toolong", false)]
    fn length_limits_bound_the_character_count(contents: &str, matched: bool) {
        let schema: Schema = StringSchema::new().min_length(3).max_length(6).into();
        let value = Value::from(contents);
        assert_eq!(schema.is_match(&value), matched);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let schema: Schema = StringSchema::new().max_length(5).into();
        expect_match(&schema, json!("héllo"));
        let schema: Schema = StringSchema::new().min_length(3).into();
        expect_match(&schema, json!("日本語"));
        expect_mismatch(&schema, json!("日本"));
    }

    #[test]
    fn non_finite_numbers_fail_the_integer_requirement() {
        let schema: Schema = NumberSchema::new().require(Requirement::Integer).into();
        expect_match(&schema, Value::Number(-3.0));
        expect_mismatch(&schema, Value::Number(f64::NAN));
        expect_mismatch(&schema, Value::Number(f64::INFINITY));
        expect_mismatch(&schema, json!(34352.64));
    }

    #[test]
    fn nonnegative_rejects_values_below_zero() {
        let schema: Schema = NumberSchema::new().require(Requirement::Nonnegative).into();
        expect_match(&schema, json!(0));
        expect_match(&schema, Value::Number(-0.0));
        expect_mismatch(&schema, json!(-0.5));
    }

    #[test]
    fn results_serialize_to_json() {
        let schema: Schema = ObjectSchema::new()
            .field("foo", ArraySchema::new().element(NumberSchema::new()))
            .into();
        let matched = matches(&json!({"foo": []}).into(), &schema);
        assert_eq!(serde_json::to_string(&matched).unwrap(), r#"{"matched":true}"#);
        let mismatched = matches(&json!({"foo": [0, "x"]}).into(), &schema);
        assert_eq!(
            serde_json::to_string(&mismatched).unwrap(),
            r#"{"matched":false,"errorPath":".foo[1]"}"#
        );
    }
}
