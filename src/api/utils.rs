use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::error::DecodeError;

/// Decodes the first JSON value in `body`, ignoring anything after it.
/// `None` when the body holds no value at all.
pub fn decode_first<T>(body: &[u8]) -> Option<serde_json::Result<T>>
where
    T: DeserializeOwned,
{
    serde_json::Deserializer::from_slice(body)
        .into_iter::<T>()
        .next()
}

/// Reads `null` as the type's default.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn parse_response_object<T>(data: Value) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => Ok(serde_json::from_value(Value::Object(obj))?),
        other => Err(DecodeError::NotAnObject(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
