use crate::error::TagError;
use crate::source::MarketSource;
use crate::tags;
use crate::types::OutputTag;

/// Page size requested from the subgraph. A page of exactly this many
/// records means more may remain; anything shorter is the last page.
pub const PAGE_SIZE: usize = 1000;

/// Walk the full market set page by page, reshaping accepted records into
/// registry tags in fetch order.
///
/// The cursor is the highest accrual block seen so far; every page is
/// filtered to blocks strictly above it, so advancing to the page maximum
/// neither refetches nor skips records. Any fetch failure aborts the run
/// with no partial result.
pub async fn collect_market_tags<S>(chain_id: u64, source: &S) -> Result<Vec<OutputTag>, TagError>
where
    S: MarketSource + ?Sized,
{
    let mut out: Vec<OutputTag> = vec![];
    let mut cursor: u64 = 0;

    loop {
        let page = source.fetch_page(cursor).await?;
        let full_page = page.len() == PAGE_SIZE;
        let page_max = page.iter().map(|m| m.accrual_block_number).max();

        for market in &page {
            if let Some(tag) = tags::transform(chain_id, market) {
                out.push(tag);
            }
        }

        tracing::debug!(
            cursor,
            records = page.len(),
            tags = out.len(),
            "markets page processed"
        );

        if !full_page {
            break;
        }

        // A full page is never empty, so the max exists.
        let page_max = page_max.unwrap_or(cursor);
        if page_max <= cursor {
            // The subgraph promised strictly increasing blocks; a full page
            // that cannot move the watermark would refetch forever.
            return Err(TagError::CursorStalled { cursor, page_max });
        }
        cursor = page_max;
    }

    Ok(out)
}
