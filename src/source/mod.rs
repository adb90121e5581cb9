pub mod subgraph;

use async_trait::async_trait;

use crate::error::TagError;
use crate::types::RawMarket;

/// Abstraction over the indexed-market backend so the pagination driver can
/// be exercised against scripted pages.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Fetch up to one page of markets with accrual block number strictly
    /// above `last_block`, ascending.
    async fn fetch_page(&self, last_block: u64) -> Result<Vec<RawMarket>, TagError>;
}

pub use subgraph::SubgraphSource;
