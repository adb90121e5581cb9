use crate::types::{OutputTag, RawMarket};

pub const PROJECT_NAME: &str = "Venus v4";
pub const WEBSITE_LINK: &str = "https://venus.io/";

/// Registry cap on name tag length, ellipsis included.
const NAME_TAG_MAX: usize = 44;
const ELLIPSIS: &str = "...";

/// Whether a metadata field is usable in a registry tag.
///
/// Empty and whitespace-only values carry no information; anything shaped
/// like markup is rejected outright rather than sanitized.
pub fn is_acceptable(text: &str) -> bool {
    !text.trim().is_empty() && !contains_html_tag(text)
}

// Very lightweight markup detection: a '<' with any '>' after it.
fn contains_html_tag(text: &str) -> bool {
    match text.find('<') {
        Some(open) => text[open..].contains('>'),
        None => false,
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max - ELLIPSIS.len()).collect();
    format!("{head}{ELLIPSIS}")
}

/// Reshape one indexed market into its registry tag.
///
/// Returns `None` for markets whose name or symbol is unusable. Both fields
/// are checked independently, so a market broken in both gets both
/// rejections logged.
pub fn transform(chain_id: u64, market: &RawMarket) -> Option<OutputTag> {
    let mut usable = true;
    if !is_acceptable(&market.name) {
        tracing::warn!(market_id = %market.id, name = %market.name, "skipping market: unusable name");
        usable = false;
    }
    if !is_acceptable(&market.symbol) {
        tracing::warn!(market_id = %market.id, symbol = %market.symbol, "skipping market: unusable symbol");
        usable = false;
    }
    if !usable {
        return None;
    }

    Some(OutputTag {
        contract_address: format!("eip155:{}:{}", chain_id, market.id),
        public_name_tag: truncate(&format!("{} Token", market.symbol), NAME_TAG_MAX),
        project_name: PROJECT_NAME.to_string(),
        website_link: WEBSITE_LINK.to_string(),
        // The note carries the untouched name; only the name tag is capped.
        public_note: format!("{PROJECT_NAME}'s official {} token (Isolated)", market.name),
    })
}
