use thiserror::Error;

/// Failure modes of a tag collection run.
///
/// Anything raised here aborts the whole run; individual markets with
/// unusable fields are skipped during transformation instead and never
/// surface as an error.
#[derive(Error, Debug)]
pub enum TagError {
    #[error("unsupported chain id \"{chain_id}\", supported chain ids: {supported}")]
    UnsupportedChain { chain_id: String, supported: String },

    #[error("subgraph request returned status {status}")]
    Transport { status: reqwest::StatusCode },

    #[error("subgraph reported {} error(s): {}", .messages.len(), .messages.join("; "))]
    Service { messages: Vec<String> },

    #[error("subgraph response carried no market data")]
    NoData,

    #[error("cursor stalled at block {cursor}: full page had max accrual block {page_max}")]
    CursorStalled { cursor: u64, page_max: u64 },

    #[error("subgraph request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("subgraph response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
