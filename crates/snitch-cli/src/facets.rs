//! `filters` and `chips` subcommands: distribution views over the facet
//! endpoints.

use snitch_core::AppConfig;
use snitch_scraper::ListingClient;

/// Attributes shown by the `filters` command, with how many buckets to print.
const SHOWN_ATTRIBUTES: &[(&str, usize)] =
    &[("color", 10), ("fit", 5), ("pattern", 5), ("material", 5)];

pub async fn show_filters(config: &AppConfig, product_type: &str) -> anyhow::Result<()> {
    let client = ListingClient::new(config)?;
    let filters = client.fetch_filters(product_type).await?;

    println!("Attribute distribution for: {product_type}");

    for (attribute, top_n) in SHOWN_ATTRIBUTES {
        let buckets = filters.buckets(attribute);
        if buckets.is_empty() {
            continue;
        }
        println!("\nTop {attribute}:");
        for bucket in buckets.iter().take(*top_n) {
            println!("  {}: {} products", bucket.attribute_value, bucket.count);
        }
    }

    let unshown: Vec<&str> = filters
        .attributes()
        .filter(|a| !SHOWN_ATTRIBUTES.iter().any(|(name, _)| name == a))
        .collect();
    if !unshown.is_empty() {
        println!("\nOther attributes: {}", unshown.join(", "));
    }

    Ok(())
}

pub async fn show_chips(config: &AppConfig, product_type: &str) -> anyhow::Result<()> {
    let client = ListingClient::new(config)?;
    let chips = client.fetch_chips(product_type).await?;

    println!("Quick filters for: {product_type}");
    for chip in &chips.data {
        println!(
            "  {} ({}: {})",
            chip.attribute_label, chip.attribute_name, chip.attribute_value
        );
    }

    Ok(())
}
