//! Security group provider backed by `az rest`.
//!
//! The Azure CLI resolves credentials and the active subscription, so this
//! provider needs no token handling of its own.

use super::arm::{classify_cli_failure, parse_json, ArmLocation};
use super::cli::{self, CliError};
use super::SecurityGroupProvider;
use crate::config::ARM_RESOURCE;
use crate::error::ProviderError;
use crate::models::{ListResponse, NetworkSecurityGroup};
use serde::Deserialize;

pub struct AzCliProvider {
    location: ArmLocation,
}

impl AzCliProvider {
    pub fn new(location: ArmLocation) -> Self {
        AzCliProvider { location }
    }

    async fn rest_get(&self, url: String) -> Result<String, ProviderError> {
        run_az(format!("az rest --method get --url \"{url}\" --output json")).await
    }
}

impl SecurityGroupProvider for AzCliProvider {
    async fn get(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<NetworkSecurityGroup, ProviderError> {
        let output = self
            .rest_get(self.location.security_group_url(resource_group, name))
            .await?;
        parse_json(&output, "security group")
    }

    async fn list(&self, resource_group: &str) -> Result<Vec<NetworkSecurityGroup>, ProviderError> {
        let output = self
            .rest_get(self.location.security_groups_url(resource_group))
            .await?;
        let listing: ListResponse<NetworkSecurityGroup> =
            parse_json(&output, "security group listing")?;
        if let Some(next_link) = &listing.next_link {
            log::warn!("Listing of {resource_group} has more pages, ignoring nextLink={next_link}");
        }
        Ok(listing.value)
    }
}

/// Access token as printed by `az account get-access-token`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CliAccessToken {
    pub access_token: String,
    pub subscription: Option<String>,
    pub expires_on: Option<String>,
}

/// Ask the Azure CLI for an ARM access token of the logged in account.
pub async fn cli_access_token() -> Result<CliAccessToken, ProviderError> {
    let output = run_az(format!(
        "az account get-access-token --resource {ARM_RESOURCE} --output json"
    ))
    .await?;
    let token: CliAccessToken = parse_json(&output, "access token")?;
    log::debug!(
        "Got CLI access token for subscription {:?} expires_on={:?}",
        token.subscription,
        token.expires_on
    );
    Ok(token)
}

async fn run_az(cmd: String) -> Result<String, ProviderError> {
    tokio::task::spawn_blocking(move || cli::run(&cmd))
        .await
        .map_err(|e| ProviderError::Other(format!("az task failed: {e}")))?
        .map_err(cli_error_to_provider)
}

fn cli_error_to_provider(err: CliError) -> ProviderError {
    match err {
        CliError::Failed { stderr, .. } => classify_cli_failure(&stderr),
        other => ProviderError::Other(other.to_string()),
    }
}
