pub mod args;
pub mod azure;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use args::{Args, Backend};
use azure::{
    cli_access_token, ArmLocation, ArmRestProvider, AzCliProvider, SnapshotProvider,
    SUBSCRIPTION_PLACEHOLDER,
};
use error::FactsError;
use models::ResultEnvelope;
use processing::gather_facts;

pub use processing::{fetch_all, fetch_one, locate, LookupPlan, Query};

/// Run the query described by `args` against the selected backend.
pub async fn query_security_groups(args: &Args) -> Result<ResultEnvelope, FactsError> {
    let query = args.query()?;
    log::debug!("{query:?} via {:?}", args.backend);

    match args.backend {
        Backend::Az => {
            let subscription = args
                .subscription_id
                .as_deref()
                .unwrap_or(SUBSCRIPTION_PLACEHOLDER);
            let location = ArmLocation::new(&args.endpoint, subscription, &args.api_version);
            gather_facts(&AzCliProvider::new(location), &query, args.check_mode).await
        }
        Backend::Rest => {
            let provider = rest_provider(args).await?;
            gather_facts(&provider, &query, args.check_mode).await
        }
        Backend::Snapshot => {
            let path = args.snapshot.as_ref().ok_or_else(|| {
                FactsError::Config("--snapshot is required with the snapshot backend".to_string())
            })?;
            gather_facts(&SnapshotProvider::new(path), &query, args.check_mode).await
        }
    }
}

/// Token and subscription come from the arguments, falling back to `az`.
async fn rest_provider(args: &Args) -> Result<ArmRestProvider, FactsError> {
    let (token, subscription) = match &args.access_token {
        Some(token) => (token.clone(), args.subscription_id.clone()),
        None => {
            let cli_token = cli_access_token().await.map_err(FactsError::Setup)?;
            let subscription = args.subscription_id.clone().or(cli_token.subscription);
            (cli_token.access_token, subscription)
        }
    };
    let subscription = subscription.ok_or_else(|| {
        FactsError::Config(
            "no subscription id, pass --subscription-id or set AZURE_SUBSCRIPTION_ID".to_string(),
        )
    })?;

    let location = ArmLocation::new(&args.endpoint, &subscription, &args.api_version);
    ArmRestProvider::new(location, token).map_err(FactsError::Setup)
}
