//! The dynamic value model checked by the matcher.
use ahash::AHashMap;

/// An already-decoded dynamic datum.
///
/// This is the input side of matching: a tagged union of the shapes a decoded
/// JSON-like document can take, plus [`Value::Absent`] for positions that hold
/// no value at all. Keeping absence inside the value model lets the matcher
/// treat "field not present" uniformly with every other mismatch cause while
/// still distinguishing it from "present but wrong type".
///
/// Values are usually produced from decoded JSON:
///
/// ```rust
/// use jsonshape::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!({"name": "aurora", "port": 8080}));
/// assert!(!value.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An object keyed by field name. Key order is irrelevant to matching;
    /// schemas drive field iteration.
    Object(AHashMap<String, Value>),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A UTF-8 string.
    String(String),
    /// A number. All numbers are carried as `f64`; integers outside the
    /// exact `f64` range degrade accordingly.
    Number(f64),
    /// A boolean. No schema node type accepts booleans specifically; they
    /// satisfy only [`Schema::Any`](crate::Schema::Any).
    Bool(bool),
    /// An explicit null. Present, like any other concrete value.
    Null,
    /// No value at this position. Produced when an object field does not
    /// exist in the value being checked; every schema node rejects it.
    Absent,
}

impl Value {
    /// Returns `true` if this is [`Value::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            // `as_f64` is total for standard numbers; the fallback only
            // triggers under `arbitrary_precision`.
            serde_json::Value::Number(number) => {
                Value::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(contents) => Value::String(contents),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(name, entry)| (name, Value::from(entry)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(contents: String) -> Self {
        Value::String(contents)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(contents: &str) -> Self {
        Value::String(contents.to_string())
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

macro_rules! from_number {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(number: $ty) -> Self {
                    Value::Number(number as f64)
                }
            }
        )*
    };
}

from_number!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize f32);

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` becomes [`Value::Absent`], not [`Value::Null`]: an absent
    /// position is the semantic counterpart of a missing field.
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Absent, Into::into)
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(name, entry)| (name.into(), entry.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use serde_json::json;

    #[test]
    fn decoded_documents_convert_losslessly() {
        let value = Value::from(json!({
            "name": "aurora",
            "port": 8080,
            "tags": ["a", "b"],
            "tls": true,
            "note": null
        }));
        let Value::Object(fields) = value else {
            panic!("expected an object")
        };
        assert_eq!(fields["name"], Value::from("aurora"));
        assert_eq!(fields["port"], Value::Number(8080.0));
        assert_eq!(
            fields["tags"],
            Value::Array(vec![Value::from("a"), Value::from("b")])
        );
        assert_eq!(fields["tls"], Value::Bool(true));
        assert_eq!(fields["note"], Value::Null);
        assert_eq!(fields.get("missing"), None);
    }

    #[test]
    fn none_converts_to_absent() {
        assert_eq!(Value::from(None::<f64>), Value::Absent);
        assert_eq!(Value::from(Some(1_u32)), Value::Number(1.0));
        assert!(Value::Absent.is_absent());
        assert!(!Value::Null.is_absent());
    }

    #[test]
    fn collections_build_from_iterators() {
        let array: Value = ["x", "y"].into_iter().collect();
        assert_eq!(array, Value::Array(vec![Value::from("x"), Value::from("y")]));

        let object: Value = [("flag", true)].into_iter().collect();
        let Value::Object(fields) = object else {
            panic!("expected an object")
        };
        assert_eq!(fields["flag"], Value::Bool(true));
    }

    #[test]
    fn integers_are_carried_as_f64() {
        assert_eq!(Value::from(5_i64), Value::Number(5.0));
        assert_eq!(Value::from(json!(-53.23)), Value::Number(-53.23));
    }
}
