//! `scrape` subcommand: paginate the listing, export snapshot + summary.

use std::path::Path;

use snitch_core::AppConfig;
use snitch_scraper::ListingClient;

use crate::export;

pub async fn run(
    config: &AppConfig,
    product_type: &str,
    limit: u32,
    max_pages: u32,
    output: &Path,
    summary_output: &Path,
) -> anyhow::Result<()> {
    let client = ListingClient::new(config)?;
    let records = client
        .fetch_all_products(product_type, limit, max_pages, config.inter_request_delay_ms)
        .await;

    if records.is_empty() {
        tracing::warn!(product_type, "no products found");
        return Ok(());
    }

    tracing::info!(total = records.len(), product_type, "scrape complete");

    export::write_snapshot(output, &records)?;
    export::write_summary(summary_output, &records)?;

    println!("Scraped {} products", records.len());
    for (i, record) in records.iter().take(3).enumerate() {
        println!("\nProduct {}:", i + 1);
        println!("  Name: {}", record.name.as_deref().unwrap_or("N/A"));
        println!("  Price: {}", record.price);
        println!("  Images: {}", record.images.len());
        if let Some(first) = record.images.first() {
            println!("  First image: {first}");
        }
    }

    Ok(())
}
