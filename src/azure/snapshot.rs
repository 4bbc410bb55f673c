//! Offline security group provider reading an ARM listing dump from disk.
//!
//! The file holds the body of a listing call (`{"value": [...]}`), e.g. saved
//! from `az rest`. It is read on every call, nothing is kept between calls.

use super::arm::parse_json;
use super::SecurityGroupProvider;
use crate::error::ProviderError;
use crate::models::{ListResponse, NetworkSecurityGroup};
use std::path::PathBuf;

pub struct SnapshotProvider {
    path: PathBuf,
}

impl SnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotProvider { path: path.into() }
    }

    fn read_snapshot(&self) -> Result<Vec<NetworkSecurityGroup>, ProviderError> {
        let file = self.path.display();
        let json = std::fs::read_to_string(&self.path)
            .map_err(|e| ProviderError::Other(format!("Error reading snapshot file {file}: {e}")))?;
        log::info!("Reading from snapshot file: {file}");
        let listing: ListResponse<NetworkSecurityGroup> =
            parse_json(&json, &format!("snapshot file {file}"))?;
        Ok(listing.value)
    }

    fn in_group(&self, resource_group: &str) -> Result<Vec<NetworkSecurityGroup>, ProviderError> {
        Ok(self
            .read_snapshot()?
            .into_iter()
            .filter(|nsg| belongs_to_group(nsg, resource_group))
            .collect())
    }
}

impl SecurityGroupProvider for SnapshotProvider {
    async fn get(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<NetworkSecurityGroup, ProviderError> {
        self.in_group(resource_group)?
            .into_iter()
            .find(|nsg| nsg.display_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                ProviderError::NotFound(format!(
                    "{name} in resource group {resource_group} (snapshot {})",
                    self.path.display()
                ))
            })
    }

    async fn list(&self, resource_group: &str) -> Result<Vec<NetworkSecurityGroup>, ProviderError> {
        self.in_group(resource_group)
    }
}

/// Resource group names are case-insensitive in ARM ids. Entries without an
/// id belong to every group.
fn belongs_to_group(nsg: &NetworkSecurityGroup, resource_group: &str) -> bool {
    let Some(id) = &nsg.id else {
        return true;
    };
    let mut segments = id.split('/');
    while let Some(segment) = segments.next() {
        if segment.eq_ignore_ascii_case("resourceGroups") {
            return segments
                .next()
                .is_some_and(|rg| rg.eq_ignore_ascii_case(resource_group));
        }
    }
    true
}
