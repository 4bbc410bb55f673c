//! Resolve a caller query into a lookup plan.

use crate::error::FactsError;

/// Caller input for one facts invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub resource_group: String,
    pub name: Option<String>,
}

impl Query {
    /// Build a query, rejecting a blank resource group.
    ///
    /// An empty `name` counts as no name.
    pub fn new(resource_group: &str, name: Option<&str>) -> Result<Self, FactsError> {
        let resource_group = resource_group.trim();
        if resource_group.is_empty() {
            return Err(FactsError::InvalidQuery(
                "resource_group must not be empty".to_string(),
            ));
        }
        Ok(Query {
            resource_group: resource_group.to_string(),
            name: name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        })
    }
}

/// Which provider call a query turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupPlan {
    SingleLookup { resource_group: String, name: String },
    CollectionListing { resource_group: String },
}

/// A present name selects one lookup, otherwise the whole group is listed.
pub fn locate(query: &Query) -> LookupPlan {
    match &query.name {
        Some(name) => LookupPlan::SingleLookup {
            resource_group: query.resource_group.clone(),
            name: name.clone(),
        },
        None => LookupPlan::CollectionListing {
            resource_group: query.resource_group.clone(),
        },
    }
}
