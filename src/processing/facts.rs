//! Fetch security groups and wrap them in a result envelope.
//!
//! A missing resource on a single lookup is an empty result. A failed listing
//! aborts the whole query.

use super::locate::{locate, LookupPlan, Query};
use super::normalize::serialize_obj;
use crate::azure::SecurityGroupProvider;
use crate::config::AZURE_OBJECT_CLASS;
use crate::error::FactsError;
use crate::models::{NormalizedResource, ResultEnvelope};

/// Look up one security group by name. Returns zero or one resources.
pub async fn fetch_one<P: SecurityGroupProvider>(
    provider: &P,
    resource_group: &str,
    name: &str,
) -> Result<Vec<NormalizedResource>, FactsError> {
    log::info!("Get properties for {name} in {resource_group}");

    match provider.get(resource_group, name).await {
        Ok(item) => Ok(vec![serialize_obj(&item, AZURE_OBJECT_CLASS)?]),
        Err(e) if e.is_not_found() => {
            log::info!("{name} not found in {resource_group}: {e}");
            Ok(Vec::new())
        }
        Err(e) => {
            log::warn!("Lookup of {name} in {resource_group} failed: {e}");
            Err(FactsError::Lookup {
                name: name.to_string(),
                source: e,
            })
        }
    }
}

/// List every security group in the resource group, in provider order.
pub async fn fetch_all<P: SecurityGroupProvider>(
    provider: &P,
    resource_group: &str,
) -> Result<Vec<NormalizedResource>, FactsError> {
    log::info!("List all items in {resource_group}");

    let items = provider.list(resource_group).await.map_err(|e| {
        log::error!("Listing {resource_group} failed: {e}");
        FactsError::Listing(e)
    })?;
    log::debug!("Got {} items from {resource_group}", items.len());

    items
        .iter()
        .map(|item| serialize_obj(item, AZURE_OBJECT_CLASS))
        .collect()
}

/// Run one facts query end to end.
pub async fn gather_facts<P: SecurityGroupProvider>(
    provider: &P,
    query: &Query,
    check_mode: bool,
) -> Result<ResultEnvelope, FactsError> {
    let results = match locate(query) {
        LookupPlan::SingleLookup {
            resource_group,
            name,
        } => fetch_one(provider, &resource_group, &name).await?,
        LookupPlan::CollectionListing { resource_group } => {
            fetch_all(provider, &resource_group).await?
        }
    };
    Ok(ResultEnvelope::new(check_mode, results))
}
