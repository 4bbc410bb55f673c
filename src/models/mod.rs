//! Domain models for security group facts.
//!
//! - [`security_group`] - ARM schema for Network Security Groups and rules
//! - [`arm`] - ARM listing and error bodies
//! - [`envelope`] - Normalized resources and the result envelope

mod arm;
mod envelope;
mod security_group;

// Re-export public types
pub use arm::{ArmError, ArmErrorResponse, ListResponse};
pub use envelope::{NormalizedResource, ResultEnvelope};
pub use security_group::{
    NetworkSecurityGroup, SecurityGroupProperties, SecurityRule, SecurityRuleProperties,
    SubResource,
};
