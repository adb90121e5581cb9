//! Collects Venus isolated-pool market tags for a contract registry.
//!
//! The subgraph for a chain is walked page by page (cursored on accrual
//! block number), every market is validated and reshaped into a flat tag
//! record, and the whole set is returned in fetch order.

pub mod chains;
pub mod collect;
pub mod config;
pub mod error;
pub mod source;
pub mod tags;
pub mod types;

pub use collect::collect_market_tags;
pub use error::TagError;
pub use source::{MarketSource, SubgraphSource};
pub use types::{OutputTag, RawMarket};

/// Collect every registry tag for the given chain.
///
/// Resolves the chain's subgraph endpoint (rejecting unknown chain ids
/// before any network activity), then runs the full paginated collection.
/// Fails without partial results if any page cannot be fetched.
pub async fn fetch_market_tags(chain_id: &str, api_key: &str) -> Result<Vec<OutputTag>, TagError> {
    let (chain, url) = chains::resolve_endpoint(chain_id, api_key)?;
    let source = SubgraphSource::new(url);
    collect_market_tags(chain, &source).await
}
