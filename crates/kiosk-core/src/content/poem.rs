use alloc::string::{String, ToString};

use serde_json::{Map, Value};

use super::{PoemRecord, poem_id};
use crate::error::ContentValidationError;

/// Validate a raw `{"title": .., "body": ..}` payload. Extra keys are ignored.
pub fn parse_poem(id: &str, payload: &[u8]) -> Result<PoemRecord, ContentValidationError> {
    let id = poem_id(id)?;

    let value: Value = serde_json::from_slice(payload)
        .map_err(|err| ContentValidationError::Malformed(err.to_string()))?;
    let Value::Object(mut fields) = value else {
        return Err(ContentValidationError::NotAnObject);
    };

    let title = take_string(&mut fields, "title")?;
    let body = take_string(&mut fields, "body")?;

    Ok(PoemRecord { id, title, body })
}

fn take_string(
    fields: &mut Map<String, Value>,
    key: &'static str,
) -> Result<String, ContentValidationError> {
    match fields.remove(key) {
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(ContentValidationError::WrongType(key)),
        None => Err(ContentValidationError::MissingField(key)),
    }
}
