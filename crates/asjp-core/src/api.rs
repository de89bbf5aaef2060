//! Dynamically typed entry points over `serde_json::Value`.
//!
//! Strings and lists of strings are converted against the global chart and
//! the default segmenter; any other value is a `ConvertError::Type`.

use serde_json::Value;

use crate::sequence::{json_type_name, Sequence};
use crate::ConvertError;

pub fn ipa2asjp_value(input: &Value) -> Result<Value, ConvertError> {
    let seq = Sequence::try_from(input)?;
    crate::ipa2asjp(seq).map(Value::from)
}

pub fn asjp2ipa_value(input: &Value) -> Result<Value, ConvertError> {
    let seq = Sequence::try_from(input)?;
    crate::asjp2ipa(seq).map(Value::from)
}

/// Only strings can be tokenized.
pub fn tokenise_value(input: &Value) -> Result<Value, ConvertError> {
    let Value::String(text) = input else {
        return Err(ConvertError::Type {
            expected: "a string",
            found: json_type_name(input),
        });
    };
    let tokens = crate::tokenise(text)?;
    Ok(Value::from(Sequence::Tokens(tokens)))
}
