//! JSON snapshot and summary files written after a scrape.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use snitch_core::ProductRecord;

/// Number of records included in the summary's sample slice.
const SAMPLE_SIZE: usize = 5;

/// Durable scrape output: `{ "total_products": n, "products": [...] }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub total_products: usize,
    pub products: Vec<ProductRecord>,
}

/// Companion summary with coverage counts and a small sample.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    total_products: usize,
    products_with_images: usize,
    products_with_prices: usize,
    sample_products: &'a [ProductRecord],
}

/// Writes the full record list as a pretty-printed snapshot.
///
/// # Errors
///
/// Returns an error if serialization or the filesystem write fails.
pub fn write_snapshot(path: &Path, records: &[ProductRecord]) -> anyhow::Result<()> {
    let snapshot = Snapshot {
        total_products: records.len(),
        products: records.to_vec(),
    };
    let body = serde_json::to_vec_pretty(&snapshot).context("serializing snapshot")?;
    fs::write(path, body).with_context(|| format!("writing snapshot to {}", path.display()))?;
    tracing::info!(path = %path.display(), total = records.len(), "snapshot written");
    Ok(())
}

/// Writes the coverage summary next to a snapshot.
///
/// # Errors
///
/// Returns an error if serialization or the filesystem write fails.
pub fn write_summary(path: &Path, records: &[ProductRecord]) -> anyhow::Result<()> {
    let summary = Summary {
        total_products: records.len(),
        products_with_images: records.iter().filter(|r| r.has_images()).count(),
        products_with_prices: records.iter().filter(|r| r.has_price()).count(),
        sample_products: &records[..records.len().min(SAMPLE_SIZE)],
    };
    let body = serde_json::to_vec_pretty(&summary).context("serializing summary")?;
    fs::write(path, body).with_context(|| format!("writing summary to {}", path.display()))?;
    tracing::info!(path = %path.display(), "summary written");
    Ok(())
}

/// Reads a snapshot back for reporting.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid snapshot.
pub fn load_snapshot(path: &Path) -> anyhow::Result<Vec<ProductRecord>> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot from {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&body)
        .with_context(|| format!("parsing snapshot from {}", path.display()))?;
    Ok(snapshot.products)
}
