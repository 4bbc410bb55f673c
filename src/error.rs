//! Error types for provider calls and fact gathering.

use thiserror::Error;

/// Failure reported by a security group provider.
///
/// Only [`ProviderError::NotFound`] is treated as an expected outcome, and only
/// for single lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The resource (or its resource group) does not exist.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Throttling, timeouts and server side failures.
    #[error("transient provider error: {0}")]
    Transient(String),

    /// Authentication, authorization, malformed responses, everything else.
    #[error("{0}")]
    Other(String),
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound(_))
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, ProviderError::Transient(_))
    }
}

/// Terminal failure of a facts query.
#[derive(Debug, Error)]
pub enum FactsError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// Building the provider failed, e.g. no access token could be obtained.
    #[error("Error connecting to Azure - {0}")]
    Setup(#[source] ProviderError),

    /// The collection listing failed. Never carries partial results.
    #[error("Error listing all items - {0}")]
    Listing(#[source] ProviderError),

    /// A single lookup failed for a reason other than "not found".
    #[error("Error getting {name} - {source}")]
    Lookup {
        name: String,
        #[source]
        source: ProviderError,
    },

    #[error("Error serializing {object_class}: {reason}")]
    Serialize {
        object_class: String,
        reason: String,
    },
}
