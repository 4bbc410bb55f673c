//! Security group facts processing.
//!
//! - [`locate`] - Turn a query into a single lookup or a listing
//! - [`normalize`] - Flatten provider objects into tagged mappings
//! - [`facts`] - Fetch policy and result envelope

mod facts;
mod locate;
mod normalize;

// Re-export public functions
pub use facts::{fetch_all, fetch_one, gather_facts};
pub use locate::{locate, LookupPlan, Query};
pub use normalize::serialize_obj;
