//! `report` subcommand: read-only views over a saved snapshot.

use std::path::Path;

use snitch_scraper::report::{best_rated, catalog_summary, in_price_range};

use crate::export;

const MAX_LISTED: usize = 10;

pub fn run(
    input: &Path,
    min_price: f64,
    max_price: f64,
    min_rating: f64,
    min_reviews: i64,
) -> anyhow::Result<()> {
    let records = export::load_snapshot(input)?;

    let summary = catalog_summary(&records);
    println!("Catalog: {} products", summary.total);
    println!("  Avg price: {:.2}", summary.avg_price);
    println!("  Avg rating: {:.2}", summary.avg_rating);

    let in_range = in_price_range(&records, min_price, max_price);
    println!(
        "\n{} products between {min_price} and {max_price}:",
        in_range.len()
    );
    for record in in_range.iter().take(MAX_LISTED) {
        println!(
            "  {}: {} (rating {})",
            record.name.as_deref().unwrap_or("N/A"),
            record.price,
            record.rating_or_zero()
        );
    }

    let best = best_rated(&records, min_rating, min_reviews);
    println!(
        "\n{} products rated >= {min_rating} with >= {min_reviews} reviews:",
        best.len()
    );
    for record in best.iter().take(MAX_LISTED) {
        println!(
            "  {}: {} ({} reviews) - {}",
            record.name.as_deref().unwrap_or("N/A"),
            record.rating_or_zero(),
            record.total_ratings_count,
            record.price
        );
    }

    Ok(())
}
