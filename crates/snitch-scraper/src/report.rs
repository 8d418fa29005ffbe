//! Read-only aggregation over scraped records.
//!
//! Everything here is a linear scan over an in-memory slice; records are
//! borrowed, never cloned or mutated.

use std::cmp::Ordering;

use snitch_core::ProductRecord;

/// Records whose selling price falls in `[min_price, max_price]`, in
/// original order.
#[must_use]
pub fn in_price_range(
    records: &[ProductRecord],
    min_price: f64,
    max_price: f64,
) -> Vec<&ProductRecord> {
    records
        .iter()
        .filter(|r| r.price >= min_price && r.price <= max_price)
        .collect()
}

/// Records meeting both rating and review-count thresholds, sorted by
/// rating descending. The sort is stable, so ties keep their original
/// listing order.
#[must_use]
pub fn best_rated(
    records: &[ProductRecord],
    min_rating: f64,
    min_reviews: i64,
) -> Vec<&ProductRecord> {
    let mut matching: Vec<&ProductRecord> = records
        .iter()
        .filter(|r| r.rating_or_zero() >= min_rating && r.total_ratings_count >= min_reviews)
        .collect();
    matching.sort_by(|a, b| {
        b.rating_or_zero()
            .partial_cmp(&a.rating_or_zero())
            .unwrap_or(Ordering::Equal)
    });
    matching
}

/// Aggregate view of one catalog slice, used to compare product categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogSummary {
    pub total: usize,
    pub avg_price: f64,
    pub avg_rating: f64,
}

/// Averages over the whole slice. An empty slice yields zeros rather than
/// NaN so summaries are always printable.
#[must_use]
pub fn catalog_summary(records: &[ProductRecord]) -> CatalogSummary {
    if records.is_empty() {
        return CatalogSummary {
            total: 0,
            avg_price: 0.0,
            avg_rating: 0.0,
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let count = records.len() as f64;
    let price_sum: f64 = records.iter().map(|r| r.price).sum();
    let rating_sum: f64 = records.iter().map(ProductRecord::rating_or_zero).sum();

    CatalogSummary {
        total: records.len(),
        avg_price: price_sum / count,
        avg_rating: rating_sum / count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: f64, rating: Option<f64>, reviews: i64) -> ProductRecord {
        ProductRecord {
            name: Some(name.to_string()),
            price,
            average_rating: rating,
            total_ratings_count: reviews,
            ..ProductRecord::default()
        }
    }

    #[test]
    fn in_price_range_is_inclusive_on_both_ends() {
        let records = vec![
            record("low", 499.0, None, 0),
            record("min", 500.0, None, 0),
            record("mid", 750.0, None, 0),
            record("max", 1000.0, None, 0),
            record("high", 1001.0, None, 0),
        ];
        let matching = in_price_range(&records, 500.0, 1000.0);
        let names: Vec<_> = matching.iter().filter_map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec!["min", "mid", "max"]);
    }

    #[test]
    fn in_price_range_empty_input() {
        assert!(in_price_range(&[], 0.0, 1000.0).is_empty());
    }

    #[test]
    fn best_rated_filters_by_both_thresholds() {
        let records = vec![
            record("low rating", 999.0, Some(4.0), 500),
            record("few reviews", 999.0, Some(4.9), 10),
            record("unrated", 999.0, None, 500),
            record("qualifies", 999.0, Some(4.6), 120),
        ];
        let best = best_rated(&records, 4.5, 100);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].name.as_deref(), Some("qualifies"));
    }

    #[test]
    fn best_rated_sorts_descending_with_stable_ties() {
        let records = vec![
            record("a", 999.0, Some(4.6), 200),
            record("b", 999.0, Some(4.9), 200),
            record("c", 999.0, Some(4.6), 200),
        ];
        let best = best_rated(&records, 4.5, 100);
        let names: Vec<_> = best.iter().filter_map(|r| r.name.as_deref()).collect();
        // 4.9 first; the two 4.6 entries keep their original order.
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn catalog_summary_empty_slice_is_zeros() {
        let summary = catalog_summary(&[]);
        assert_eq!(summary.total, 0);
        assert!((summary.avg_price - 0.0).abs() < f64::EPSILON);
        assert!((summary.avg_rating - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn catalog_summary_averages_price_and_rating() {
        let records = vec![
            record("a", 1000.0, Some(4.0), 10),
            record("b", 2000.0, None, 0),
        ];
        let summary = catalog_summary(&records);
        assert_eq!(summary.total, 2);
        assert!((summary.avg_price - 1500.0).abs() < f64::EPSILON);
        // Missing ratings count as zero, matching the source aggregation.
        assert!((summary.avg_rating - 2.0).abs() < f64::EPSILON);
    }
}
