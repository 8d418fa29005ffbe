//! Multi-page listing scrape for `ListingClient`.

use std::time::Duration;

use snitch_core::ProductRecord;

use crate::normalize::normalize_response;
use crate::pagination::{classify_page, PageStatus};

use super::ListingClient;

impl ListingClient {
    /// Scrapes the listing for `product_type` across pages `1..=max_pages`,
    /// strictly sequentially, and returns the normalized records in fetch
    /// order.
    ///
    /// Termination: a failed fetch, an empty page, or a short page (fewer
    /// records than `limit`) all end the loop. Failures are logged, not
    /// propagated — the caller always gets whatever was collected up to
    /// that point. Partial results are the contract here: a truncated run
    /// is still a usable listing snapshot.
    ///
    /// `inter_request_delay_ms` is applied between page requests (after
    /// every page except the first). No cross-page deduplication is done.
    pub async fn fetch_all_products(
        &self,
        product_type: &str,
        limit: u32,
        max_pages: u32,
        inter_request_delay_ms: u64,
    ) -> Vec<ProductRecord> {
        let mut all_records: Vec<ProductRecord> = Vec::new();

        for page in 1..=max_pages {
            if page > 1 && inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }

            let raw = match self.fetch_products_page(product_type, page, limit).await {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(
                        page,
                        product_type,
                        error = %e,
                        "page fetch failed — returning records collected so far"
                    );
                    break;
                }
            };

            let records = normalize_response(&raw);
            let status = classify_page(records.len(), limit);

            match status {
                PageStatus::Empty => {
                    tracing::info!(page, product_type, "no more products");
                    break;
                }
                PageStatus::LastPage | PageStatus::Full => {
                    tracing::info!(
                        page,
                        page_records = records.len(),
                        total = all_records.len() + records.len(),
                        "collected page"
                    );
                    all_records.extend(records);
                    if status == PageStatus::LastPage {
                        break;
                    }
                }
            }
        }

        all_records
    }
}
