//! Result envelope returned by a facts query.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A provider object flattened to a plain mapping, tagged with its object class.
///
/// The class is serialized as an extra `"objectClass"` key next to the
/// provider's own attributes, which keep the ARM shape (including `type`).
/// Consumers comparing against plain ARM output should ignore that key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NormalizedResource {
    #[serde(rename = "objectClass")]
    pub object_class: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl NormalizedResource {
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.attributes.get(attribute)
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }
}

/// `{changed, check_mode, results}` as handed back to the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResultEnvelope {
    changed: bool,
    pub check_mode: bool,
    pub results: Vec<NormalizedResource>,
}

impl ResultEnvelope {
    /// Facts queries are read only, so `changed` is always false.
    pub fn new(check_mode: bool, results: Vec<NormalizedResource>) -> Self {
        ResultEnvelope {
            changed: false,
            check_mode,
            results,
        }
    }

    pub fn changed(&self) -> bool {
        self.changed
    }
}
