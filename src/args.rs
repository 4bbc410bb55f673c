//! Command line arguments.

use crate::config::{DEFAULT_API_VERSION, DEFAULT_ARM_ENDPOINT, DEFAULT_LOG_CONFIG};
use crate::error::FactsError;
use crate::processing::Query;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Get facts for a specific security group or all security groups within a
/// resource group.
#[derive(Parser, Debug)]
#[command(name = "azure-securitygroup-facts", version, about)]
pub struct Args {
    /// Name of the resource group to use.
    #[arg(short = 'g', long)]
    pub resource_group: String,

    /// Only show results for a specific security group.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Reported back in the result, nothing is ever changed.
    #[arg(long)]
    pub check_mode: bool,

    /// Where security groups are read from.
    #[arg(long, value_enum, default_value_t = Backend::Az)]
    pub backend: Backend,

    /// ARM listing dump used by the snapshot backend.
    #[arg(long, required_if_eq("backend", "snapshot"))]
    pub snapshot: Option<PathBuf>,

    /// Subscription owning the resource group. Defaults to the CLI's active one.
    #[arg(long, env = "AZURE_SUBSCRIPTION_ID")]
    pub subscription_id: Option<String>,

    /// Bearer token for the rest backend. Fetched with `az` when absent.
    #[arg(long, env = "AZURE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    #[arg(long, env = "AZURE_RESOURCE_MANAGER_ENDPOINT", default_value = DEFAULT_ARM_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Pretty-print the JSON result.
    #[arg(long)]
    pub pretty: bool,

    /// Debug logging on stderr (ignored when a log4rs config file is used).
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = DEFAULT_LOG_CONFIG)]
    pub log_config: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// `az rest` with the logged in Azure CLI account
    Az,
    /// Direct HTTPS calls to Azure Resource Manager
    Rest,
    /// Offline, from a saved listing file
    Snapshot,
}

impl Args {
    pub fn query(&self) -> Result<Query, FactsError> {
        Query::new(&self.resource_group, self.name.as_deref())
    }
}
