use crate::error::TagError;

/// Credential placeholder in the gateway URL templates.
const API_KEY_PLACEHOLDER: &str = "{api-key}";

/// Venus isolated-pool subgraphs per chain, keyed by EVM chain id.
const SUBGRAPH_URLS: &[(u64, &str)] = &[
    (
        1,
        "https://gateway.thegraph.com/api/{api-key}/subgraphs/id/Hti7iyBEZ2eQr2bLjsc4si3UFAFr71jYz7sCvC2rMAbN",
    ),
    (
        10,
        "https://gateway.thegraph.com/api/{api-key}/subgraphs/id/FnxipHLkDhWuy9TzAq9bSYmV2ZBPkfWrCyVZhGTXPN6M",
    ),
    (
        56,
        "https://gateway.thegraph.com/api/{api-key}/subgraphs/id/H2a3D64KV4LBZbqNRK7yyGUpenqcbDdhVWRTfmqjyy1L",
    ),
    (
        130,
        "https://gateway.thegraph.com/api/{api-key}/subgraphs/id/2Ltuyq4PgiEjRV6LdQHh2mVeZLGDWnM2cFvjv7N5wvqB",
    ),
    (
        204,
        "https://gateway.thegraph.com/api/{api-key}/subgraphs/id/9ZK4Sf9nqjiZWE6WNCvBDNYHzLMJXGqyDCQfEkqcLVJp",
    ),
    (
        324,
        "https://gateway.thegraph.com/api/{api-key}/subgraphs/id/4YgJsyFzCEp4EjWLoBmHT5pw9nCSyF8rUTLdwWSsNQzR",
    ),
    (
        8453,
        "https://gateway.thegraph.com/api/{api-key}/subgraphs/id/7crjNBTuZRkMhQfAGHg4MjaGGz9Zkf7kt5FK1WnxoMSy",
    ),
    (
        42161,
        "https://gateway.thegraph.com/api/{api-key}/subgraphs/id/EoWJRvWvBMMdjzADa8skVNrEBPSi2uyTvqyLmVYEeHLV",
    ),
];

fn unsupported(chain_id: &str) -> TagError {
    let supported = SUBGRAPH_URLS
        .iter()
        .map(|(id, _)| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    TagError::UnsupportedChain {
        chain_id: chain_id.to_string(),
        supported,
    }
}

/// Resolve a chain id string to its numeric id and the gateway endpoint
/// with the credential substituted in.
///
/// Rejected before any network activity: ids that do not parse as a number
/// and ids absent from the table.
pub fn resolve_endpoint(chain_id: &str, api_key: &str) -> Result<(u64, String), TagError> {
    let id: u64 = chain_id
        .trim()
        .parse()
        .map_err(|_| unsupported(chain_id))?;

    let template = SUBGRAPH_URLS
        .iter()
        .find(|(chain, _)| *chain == id)
        .map(|(_, url)| *url)
        .ok_or_else(|| unsupported(chain_id))?;

    Ok((id, template.replace(API_KEY_PLACEHOLDER, api_key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_resolves_with_credential() {
        for (id, _) in SUBGRAPH_URLS {
            let (chain, url) = resolve_endpoint(&id.to_string(), "test-key-123").unwrap();
            assert_eq!(chain, *id);
            assert!(url.contains("test-key-123"), "missing credential in {url}");
            assert!(!url.contains(API_KEY_PLACEHOLDER), "placeholder left in {url}");
        }
    }

    #[test]
    fn unknown_chain_lists_supported_ids() {
        let err = resolve_endpoint("999", "k").unwrap_err();
        let msg = err.to_string();
        for (id, _) in SUBGRAPH_URLS {
            assert!(msg.contains(&id.to_string()), "{msg} missing {id}");
        }
    }

    #[test]
    fn malformed_chain_id_is_rejected() {
        assert!(resolve_endpoint("mainnet", "k").is_err());
        assert!(resolve_endpoint("", "k").is_err());
        assert!(resolve_endpoint("56x", "k").is_err());
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let (chain, _) = resolve_endpoint(" 56 ", "k").unwrap();
        assert_eq!(chain, 56);
    }
}
