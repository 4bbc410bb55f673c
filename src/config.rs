//! Constants shared across the crate.

/// Object class label attached to every normalized security group.
pub const AZURE_OBJECT_CLASS: &str = "NetworkSecurityGroup";

/// Azure Resource Manager endpoint for the public cloud.
pub const DEFAULT_ARM_ENDPOINT: &str = "https://management.azure.com";

/// Microsoft.Network API version used for security group requests.
pub const DEFAULT_API_VERSION: &str = "2023-09-01";

/// Token audience for ARM access tokens.
pub const ARM_RESOURCE: &str = "https://management.azure.com/";

/// Upper bound on the stdout accepted from a single `az` invocation.
pub const MAX_CLI_OUTPUT_BYTES: usize = 5_000_000;

/// Default log4rs configuration file, looked up in the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const USER_AGENT: &str = concat!("azure-securitygroup-facts/", env!("CARGO_PKG_VERSION"));
