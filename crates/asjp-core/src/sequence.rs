use serde_json::Value;

use crate::error::ConvertError;

/// Input to, and output of, a conversion: either free text or a list of
/// already segmented tokens. Conversions return the variant they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sequence {
    Text(String),
    Tokens(Vec<String>),
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Sequence::Text(s.to_string())
    }
}

impl From<String> for Sequence {
    fn from(s: String) -> Self {
        Sequence::Text(s)
    }
}

impl From<Vec<String>> for Sequence {
    fn from(tokens: Vec<String>) -> Self {
        Sequence::Tokens(tokens)
    }
}

impl From<Sequence> for Value {
    fn from(seq: Sequence) -> Self {
        match seq {
            Sequence::Text(s) => Value::String(s),
            Sequence::Tokens(t) => Value::Array(t.into_iter().map(Value::String).collect()),
        }
    }
}

impl TryFrom<&Value> for Sequence {
    type Error = ConvertError;

    /// Strings become `Text`, arrays of strings become `Tokens`; anything
    /// else is a type error.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        const EXPECTED: &str = "a string or a list of strings";
        match value {
            Value::String(s) => Ok(Sequence::Text(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(ConvertError::Type {
                        expected: EXPECTED,
                        found: json_type_name(other),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Sequence::Tokens),
            other => Err(ConvertError::Type {
                expected: EXPECTED,
                found: json_type_name(other),
            }),
        }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
