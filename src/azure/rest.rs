//! Security group provider talking to the ARM REST API directly.

use super::arm::{classify_status, parse_json, truncate_for_log, ArmLocation};
use super::SecurityGroupProvider;
use crate::config::USER_AGENT;
use crate::error::ProviderError;
use crate::models::{ListResponse, NetworkSecurityGroup};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for `Microsoft.Network/networkSecurityGroups`.
pub struct ArmRestProvider {
    client: Client,
    location: ArmLocation,
    token: String,
}

impl ArmRestProvider {
    pub fn new(location: ArmLocation, token: impl Into<String>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProviderError::Other(format!("Failed to create HTTP client: {e}")))?;

        Ok(ArmRestProvider {
            client,
            location,
            token: token.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T, ProviderError> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_transport)?;

        if !status.is_success() {
            log::debug!("API error: {} - {}", status, truncate_for_log(&body));
            return Err(classify_status(status.as_u16(), &body));
        }

        parse_json(&body, what)
    }
}

impl SecurityGroupProvider for ArmRestProvider {
    async fn get(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<NetworkSecurityGroup, ProviderError> {
        let url = self.location.security_group_url(resource_group, name);
        self.get_json(&url, "security group").await
    }

    async fn list(&self, resource_group: &str) -> Result<Vec<NetworkSecurityGroup>, ProviderError> {
        let url = self.location.security_groups_url(resource_group);
        let listing: ListResponse<NetworkSecurityGroup> =
            self.get_json(&url, "security group listing").await?;
        if let Some(next_link) = &listing.next_link {
            log::warn!("Listing of {resource_group} has more pages, ignoring nextLink={next_link}");
        }
        Ok(listing.value)
    }
}

fn classify_transport(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() || e.is_connect() {
        ProviderError::Transient(format!("request failed: {e}"))
    } else {
        ProviderError::Other(format!("request failed: {e}"))
    }
}
