//! Azure Resource Manager URLs, response parsing and failure classification.

use crate::error::ProviderError;
use crate::models::ArmErrorResponse;
use serde::de::DeserializeOwned;

/// Placeholder `az rest` replaces with the active subscription id.
pub const SUBSCRIPTION_PLACEHOLDER: &str = "{subscriptionId}";

const MAX_LOG_BODY_LENGTH: usize = 400;

/// Where security group requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmLocation {
    pub endpoint: String,
    /// Subscription id, or [`SUBSCRIPTION_PLACEHOLDER`] for the CLI to fill in.
    pub subscription: String,
    pub api_version: String,
}

impl ArmLocation {
    pub fn new(endpoint: &str, subscription: &str, api_version: &str) -> Self {
        ArmLocation {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            subscription: subscription.to_string(),
            api_version: api_version.to_string(),
        }
    }

    fn collection_path(&self, resource_group: &str) -> String {
        let subscription = if self.subscription == SUBSCRIPTION_PLACEHOLDER {
            self.subscription.clone()
        } else {
            urlencoding::encode(&self.subscription).into_owned()
        };
        format!(
            "{endpoint}/subscriptions/{subscription}/resourceGroups/{rg}/providers/Microsoft.Network/networkSecurityGroups",
            endpoint = self.endpoint,
            rg = urlencoding::encode(resource_group),
        )
    }

    /// URL of one named security group.
    pub fn security_group_url(&self, resource_group: &str, name: &str) -> String {
        format!(
            "{path}/{name}?api-version={version}",
            path = self.collection_path(resource_group),
            name = urlencoding::encode(name),
            version = self.api_version,
        )
    }

    /// URL listing every security group in a resource group.
    pub fn security_groups_url(&self, resource_group: &str) -> String {
        format!(
            "{path}?api-version={version}",
            path = self.collection_path(resource_group),
            version = self.api_version,
        )
    }
}

/// Parse a JSON body, reporting the failing path on error.
pub fn parse_json<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, ProviderError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", truncate_for_log(body));
        ProviderError::Other(format!(
            "Error parsing {what}: path={} error={}",
            e.path(),
            e.inner()
        ))
    })
}

/// ARM error codes meaning the resource itself is absent. Other 404 codes,
/// e.g. `SubscriptionNotFound`, point at a configuration problem.
const NOT_FOUND_CODES: &[&str] = &["ResourceNotFound", "ResourceGroupNotFound"];

/// Classify a non-success HTTP response from ARM.
pub fn classify_status(status: u16, body: &str) -> ProviderError {
    let parsed = serde_json::from_str::<ArmErrorResponse>(body).ok();
    let code = parsed.as_ref().map(|r| r.error.code.as_str()).unwrap_or("");
    let details = parsed
        .as_ref()
        .map(|r| r.error.to_string())
        .unwrap_or_else(|| truncate_for_log(body));
    let message = format!("HTTP {status} {details}");
    match status {
        404 if NOT_FOUND_CODES.contains(&code) => ProviderError::NotFound(message),
        408 | 429 | 500..=599 => ProviderError::Transient(message),
        _ => ProviderError::Other(message),
    }
}

/// `az` prints the ARM error code either as `(Code)` or inside the JSON body.
const NOT_FOUND_MARKERS: &[&str] = &[
    "(ResourceNotFound)",
    "(ResourceGroupNotFound)",
    "\"code\":\"ResourceNotFound\"",
    "\"code\":\"ResourceGroupNotFound\"",
    "\"code\": \"ResourceNotFound\"",
    "\"code\": \"ResourceGroupNotFound\"",
];

const TRANSIENT_MARKERS: &[&str] = &[
    "TooManyRequests",
    "Too Many Requests",
    "ServiceUnavailable",
    "Service Unavailable",
    "InternalServerError",
    "Internal Server Error",
    "GatewayTimeout",
    "Gateway Timeout",
    "Bad Gateway",
    "timed out",
    "Connection aborted",
    "Connection reset",
];

/// Classify the stderr of a failed `az` invocation.
pub fn classify_cli_failure(stderr: &str) -> ProviderError {
    let message = stderr.trim().trim_start_matches("ERROR:").trim().to_string();
    if NOT_FOUND_MARKERS.iter().any(|m| stderr.contains(m)) {
        ProviderError::NotFound(message)
    } else if TRANSIENT_MARKERS.iter().any(|m| stderr.contains(m)) {
        ProviderError::Transient(message)
    } else {
        ProviderError::Other(message)
    }
}

/// Shorten a body for logging and drop control characters.
pub fn truncate_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };
    truncated.replace(|c: char| c.is_control() && c != '\n', "")
}
