use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// One indexed lending market as the subgraph returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMarket {
    pub id: String,
    // The subgraph can carry null names/symbols for tokens with broken
    // metadata. Map those to "" so the validator rejects them downstream.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub symbol: String,
    #[serde(rename = "accrualBlockNumber")]
    pub accrual_block_number: u64,
}

/// One registry tag entry, serialized with the registry's key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTag {
    #[serde(rename = "contractAddress")]
    pub contract_address: String,
    #[serde(rename = "publicNameTag")]
    pub public_name_tag: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "websiteLink")]
    pub website_link: String,
    #[serde(rename = "publicNote")]
    pub public_note: String,
}
