//! Flatten provider objects into tagged plain mappings.
//!
//! Field selection and wire names come from each model's `Serialize` impl, so
//! nested objects and lists are flattened the same way and `None` fields are
//! left out.

use crate::error::FactsError;
use crate::models::NormalizedResource;
use serde::Serialize;
use serde_json::Value;

/// Serialize `obj` to a mapping and tag it with `object_class`.
pub fn serialize_obj<T: Serialize>(
    obj: &T,
    object_class: &str,
) -> Result<NormalizedResource, FactsError> {
    let value = serde_json::to_value(obj).map_err(|e| FactsError::Serialize {
        object_class: object_class.to_string(),
        reason: e.to_string(),
    })?;

    match value {
        Value::Object(attributes) => Ok(NormalizedResource {
            object_class: object_class.to_string(),
            attributes,
        }),
        other => Err(FactsError::Serialize {
            object_class: object_class.to_string(),
            reason: format!("expected an object, got {}", json_kind(&other)),
        }),
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
