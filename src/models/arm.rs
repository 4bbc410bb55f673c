//! Azure Resource Manager response envelopes.

use serde::{Deserialize, Serialize};

/// Body of an ARM collection listing.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    /// Continuation link. Listings are taken as complete, this is only logged.
    pub next_link: Option<String>,
}

/// Error body ARM attaches to failed requests.
#[derive(Deserialize, Debug, Default)]
pub struct ArmErrorResponse {
    #[serde(default)]
    pub error: ArmError,
}

#[derive(Deserialize, Debug, Default)]
pub struct ArmError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl std::fmt::Display for ArmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.code.is_empty(), self.message.is_empty()) {
            (true, true) => write!(f, "no error details"),
            (false, true) => write!(f, "{}", self.code),
            (true, false) => write!(f, "{}", self.message),
            (false, false) => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_without_value() {
        let list: ListResponse<serde_json::Value> =
            serde_json::from_str("{}").expect("empty object is a valid listing");
        assert!(list.value.is_empty());
        assert!(list.next_link.is_none());
    }

    #[test]
    fn test_arm_error_display() {
        let body: ArmErrorResponse = serde_json::from_str(
            r#"{"error": {"code": "ResourceNotFound", "message": "The Resource was not found."}}"#,
        )
        .expect("valid error body");
        assert_eq!(
            body.error.to_string(),
            "ResourceNotFound: The Resource was not found."
        );
        assert_eq!(ArmError::default().to_string(), "no error details");
    }
}
