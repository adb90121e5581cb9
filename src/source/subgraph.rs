use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::error::TagError;
use crate::source::MarketSource;
use crate::types::{string_or_empty, RawMarket};

// `first` here must stay in sync with collect::PAGE_SIZE.
const MARKETS_QUERY: &str = r#"
query Markets($lastBlock: Int) {
  markets(
    first: 1000
    orderBy: accrualBlockNumber
    orderDirection: asc
    where: { accrualBlockNumber_gt: $lastBlock }
  ) {
    id
    name
    symbol
    accrualBlockNumber
  }
}
"#;

/// GraphQL page fetcher against one subgraph endpoint.
pub struct SubgraphSource {
    url: String,
    http: reqwest::Client,
}

impl SubgraphSource {
    pub fn new(url: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("build reqwest client");

        Self { url, http }
    }
}

#[async_trait]
impl MarketSource for SubgraphSource {
    async fn fetch_page(&self, last_block: u64) -> Result<Vec<RawMarket>, TagError> {
        tracing::debug!(last_block, "fetching markets page");

        let resp = self
            .http
            .post(&self.url)
            .json(&GraphQlRequest {
                query: MARKETS_QUERY,
                variables: Variables { last_block },
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TagError::Transport { status });
        }

        let body = resp.text().await?;
        let envelope: GraphQlResponse = serde_json::from_str(&body)?;
        markets_from_envelope(envelope)
    }
}

fn markets_from_envelope(envelope: GraphQlResponse) -> Result<Vec<RawMarket>, TagError> {
    // Service errors win over any partial data in the same response.
    if let Some(errors) = &envelope.errors {
        if !errors.is_empty() {
            for err in errors {
                tracing::error!(message = %err.message, "subgraph reported error");
            }
            let messages = errors.iter().map(|e| e.message.clone()).collect();
            return Err(TagError::Service { messages });
        }
    }

    let payload = envelope
        .data
        .and_then(|value| match serde_json::from_value::<MarketsPayload>(value) {
            Ok(payload) => Some(payload),
            Err(err) => {
                tracing::error!(%err, "subgraph data payload did not decode");
                None
            }
        });

    match payload {
        Some(payload) => Ok(payload.markets),
        None => Err(TagError::NoData),
    }
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables,
}

#[derive(Debug, Serialize)]
struct Variables {
    #[serde(rename = "lastBlock")]
    last_block: u64,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    #[serde(default, deserialize_with = "string_or_empty")]
    message: String,
}

#[derive(Debug, Deserialize)]
struct MarketsPayload {
    markets: Vec<RawMarket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(body: &str) -> GraphQlResponse {
        serde_json::from_str(body).expect("test envelope json")
    }

    #[test]
    fn returns_markets_from_data() {
        let env = envelope(
            r#"{
                "data": {
                    "markets": [
                        {"id": "0x1", "name": "Venus USDC", "symbol": "vUSDC", "accrualBlockNumber": 10},
                        {"id": "0x2", "name": "Venus USDT", "symbol": "vUSDT", "accrualBlockNumber": 20}
                    ]
                }
            }"#,
        );
        let markets = markets_from_envelope(env).unwrap();
        assert_eq!(markets.len(), 2);
        assert_eq!(markets[0].id, "0x1");
        assert_eq!(markets[1].accrual_block_number, 20);
    }

    #[test]
    fn empty_market_list_is_ok() {
        let env = envelope(r#"{"data": {"markets": []}}"#);
        assert!(markets_from_envelope(env).unwrap().is_empty());
    }

    #[test]
    fn null_metadata_becomes_empty_strings() {
        let env = envelope(
            r#"{"data": {"markets": [{"id": "0x1", "name": null, "symbol": null, "accrualBlockNumber": 5}]}}"#,
        );
        let markets = markets_from_envelope(env).unwrap();
        assert_eq!(markets[0].name, "");
        assert_eq!(markets[0].symbol, "");
    }

    #[test]
    fn service_errors_take_priority_over_data() {
        let env = envelope(
            r#"{
                "data": {"markets": []},
                "errors": [{"message": "indexer timeout"}, {"message": "store unavailable"}]
            }"#,
        );
        match markets_from_envelope(env) {
            Err(TagError::Service { messages }) => {
                assert_eq!(messages, vec!["indexer timeout", "store unavailable"]);
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn missing_data_is_no_data() {
        let env = envelope(r#"{}"#);
        assert!(matches!(markets_from_envelope(env), Err(TagError::NoData)));
    }

    #[test]
    fn malformed_data_payload_is_no_data() {
        let env = envelope(r#"{"data": {"markets": 42}}"#);
        assert!(matches!(markets_from_envelope(env), Err(TagError::NoData)));
    }

    #[test]
    fn empty_errors_array_is_ignored() {
        let env = envelope(r#"{"data": {"markets": []}, "errors": []}"#);
        assert!(markets_from_envelope(env).is_ok());
    }
}
