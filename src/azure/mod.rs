//! Azure Network API access.
//!
//! This module handles all Azure-related operations:
//! - [`cli`] - Command execution for Azure CLI
//! - [`arm`] - ARM URLs, response parsing and error classification
//! - [`az`] - Provider backed by `az rest`
//! - [`rest`] - Provider calling ARM over HTTPS
//! - [`snapshot`] - Provider reading a saved listing from disk

mod arm;
mod az;
mod cli;
mod rest;
mod snapshot;

use crate::error::ProviderError;
use crate::models::NetworkSecurityGroup;

// Re-export public types and functions
pub use arm::{classify_cli_failure, classify_status, ArmLocation, SUBSCRIPTION_PLACEHOLDER};
pub use az::{cli_access_token, AzCliProvider, CliAccessToken};
pub use rest::ArmRestProvider;
pub use snapshot::SnapshotProvider;

/// Source of Network Security Groups.
///
/// `get` must report a missing resource as [`ProviderError::NotFound`] so it
/// can be told apart from every other failure.
#[allow(async_fn_in_trait)]
pub trait SecurityGroupProvider {
    async fn get(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<NetworkSecurityGroup, ProviderError>;

    async fn list(&self, resource_group: &str) -> Result<Vec<NetworkSecurityGroup>, ProviderError>;
}
