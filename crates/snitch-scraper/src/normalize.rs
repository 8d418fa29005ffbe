//! Normalization from raw listing API responses to [`ProductRecord`]s.
//!
//! The listing endpoint's envelope is not contractually fixed: depending on
//! the deployment it wraps the item list as `data.products`, `data`,
//! `products`, `items`, `results`, or returns a bare array. [`locate_items`]
//! probes those candidates in priority order, and [`normalize_response`]
//! flattens each item through fixed fallback-key chains.
//!
//! Malformed input never aborts a batch: an unrecognized envelope yields an
//! empty vec, a non-object item is skipped, and a missing sub-key produces a
//! sparse record with that field absent.

use serde_json::{Map, Value};

use snitch_core::ProductRecord;

/// Storefront base for product URLs built from a `handle` slug.
const PRODUCT_URL_BASE: &str = "https://www.snitch.com/products";

/// Query parameter appended to image URLs that do not already carry one.
const IMAGE_QUALITY_PARAM: &str = "quality=80";

/// Locates the item list inside a raw listing response.
///
/// Candidates, first match wins: `raw.data.products`, `raw.data` (when it is
/// itself a list), `raw.products`, `raw.items`, `raw.results`, or `raw` when
/// the root is a list. Returns `None` when no candidate matches or the
/// matched value is not a list.
#[must_use]
pub fn locate_items(raw: &Value) -> Option<&Vec<Value>> {
    match raw {
        Value::Array(items) => Some(items),
        Value::Object(map) => {
            if let Some(data) = map.get("data") {
                if let Value::Object(inner) = data {
                    if let Some(products) = inner.get("products") {
                        return products.as_array();
                    }
                }
                if let Value::Array(items) = data {
                    return Some(items);
                }
            }
            for key in ["products", "items", "results"] {
                if let Some(candidate) = map.get(key) {
                    return candidate.as_array();
                }
            }
            None
        }
        _ => None,
    }
}

/// Normalizes one raw API response into flattened product records.
///
/// Never fails: unrecognized envelopes produce an empty vec and non-object
/// items are skipped.
#[must_use]
pub fn normalize_response(raw: &Value) -> Vec<ProductRecord> {
    let Some(items) = locate_items(raw) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .map(normalize_item)
        .collect()
}

/// Flattens a single raw item into a [`ProductRecord`].
fn normalize_item(item: &Map<String, Value>) -> ProductRecord {
    let price = first_positive_number(item, &["selling_price", "price"]);
    let mrp = first_positive_number(item, &["mrp", "original_price"]);

    let discount_percentage = if mrp > 0.0 && price < mrp {
        Some(round_one_decimal((mrp - price) / mrp * 100.0))
    } else {
        None
    };

    let handle = non_empty_string(item, "handle");
    let product_url = handle
        .as_ref()
        .map(|h| format!("{PRODUCT_URL_BASE}/{h}"))
        .or_else(|| first_non_empty_string(item, &["url", "product_url"]));

    let mut images = normalized_images(item);
    let preview_image = non_empty_string(item, "preview_image");
    if let Some(preview) = &preview_image {
        // Membership is checked against the already-normalized gallery; a
        // preview that matches one of those URLs verbatim is not re-inserted.
        if !images.iter().any(|img| img == preview) {
            images.insert(0, ensure_quality(preview));
        }
    }

    let brand = match non_empty_string(item, "brand") {
        Some(brand) => Some(brand),
        // `vendor` present but empty means "no brand" and stays omitted;
        // only a fully absent vendor falls back to the storefront's own label.
        None => match item.get("vendor") {
            Some(vendor) => value_as_non_empty_string(vendor),
            None => Some("Snitch".to_string()),
        },
    };

    ProductRecord {
        id: first_id(item, &["shopify_product_id", "id", "product_id"]),
        name: first_non_empty_string(item, &["title", "name", "product_name"]),
        price,
        original_price: (mrp > 0.0).then_some(mrp),
        discount_percentage,
        product_url,
        handle,
        images,
        preview_image,
        description: first_non_empty_string(item, &["short_description", "description"]),
        brand,
        category: first_non_empty_string(item, &["shopify_product_type", "category", "product_type"]),
        fit: non_empty_string(item, "fit"),
        collar: non_empty_string(item, "collar"),
        sleeves: non_empty_string(item, "sleeves"),
        material: non_empty_string(item, "material"),
        pattern: non_empty_string(item, "pattern"),
        colors: string_list(item, "colors"),
        color_variants_count: item
            .get("color_variants_count")
            .and_then(Value::as_i64)
            .unwrap_or(0),
        average_rating: item.get("average_rating").and_then(Value::as_f64),
        total_ratings_count: item
            .get("total_ratings_count")
            .and_then(Value::as_i64)
            .unwrap_or(0),
        model_info: non_empty_string(item, "model_info"),
        occassion: non_empty_string(item, "occassion"),
    }
}

/// Appends the quality parameter to an image URL that lacks one, choosing
/// `&` vs `?` based on whether the URL already has a query string.
fn ensure_quality(url: &str) -> String {
    if url.contains("quality=") {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{IMAGE_QUALITY_PARAM}")
}

/// Quality-normalized gallery from the item's `images` array. Non-string and
/// empty entries are skipped; order is preserved.
fn normalized_images(item: &Map<String, Value>) -> Vec<String> {
    item.get("images")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .filter(|url| !url.is_empty())
                .map(ensure_quality)
                .collect()
        })
        .unwrap_or_default()
}

/// Rounds to one decimal place with ties-to-even, matching the reference
/// behavior of Python 3's `round(x, 1)`.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// First key whose value is a positive number; `0.0` when none. Zero and
/// null values fall through to the next candidate.
fn first_positive_number(item: &Map<String, Value>, keys: &[&str]) -> f64 {
    keys.iter()
        .filter_map(|key| item.get(*key).and_then(Value::as_f64))
        .find(|v| *v != 0.0)
        .unwrap_or(0.0)
}

/// First key resolving to a usable identifier. Strings must be non-empty,
/// numbers must be non-zero (both fall through to the next candidate
/// otherwise); numeric IDs are stringified to avoid precision loss
/// downstream.
fn first_id(item: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match item.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

fn first_non_empty_string(item: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| non_empty_string(item, key))
}

fn non_empty_string(item: &Map<String, Value>, key: &str) -> Option<String> {
    item.get(key).and_then(value_as_non_empty_string)
}

fn value_as_non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn string_list(item: &Map<String, Value>, key: &str) -> Vec<String> {
    item.get(key)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shirt_item() -> Value {
        json!({
            "shopify_product_id": "8123456789",
            "title": "Classic Oxford Shirt",
            "selling_price": 999,
            "mrp": 1499,
            "handle": "classic-oxford-shirt",
            "images": ["https://cdn.snitch.com/a.jpg"],
            "preview_image": "https://cdn.snitch.com/preview.jpg",
            "fit": "Slim",
            "colors": ["Black", "White"],
            "average_rating": 4.3,
            "total_ratings_count": 212
        })
    }

    // -----------------------------------------------------------------------
    // locate_items / envelope shapes
    // -----------------------------------------------------------------------

    #[test]
    fn all_envelope_shapes_yield_the_same_items() {
        let item = shirt_item();
        let shapes = [
            json!({"data": {"products": [item.clone()]}}),
            json!({"data": [item.clone()]}),
            json!({"products": [item.clone()]}),
            json!({"items": [item.clone()]}),
            json!({"results": [item.clone()]}),
            json!([item]),
        ];

        for shape in &shapes {
            let records = normalize_response(shape);
            assert_eq!(records.len(), 1, "shape {shape} should yield one record");
            assert_eq!(records[0].name.as_deref(), Some("Classic Oxford Shirt"));
        }
    }

    #[test]
    fn unrecognized_envelope_yields_no_records() {
        assert!(normalize_response(&json!({"unexpected": []})).is_empty());
        assert!(normalize_response(&json!("just a string")).is_empty());
        assert!(normalize_response(&json!(null)).is_empty());
    }

    #[test]
    fn non_list_candidate_yields_no_records() {
        assert!(normalize_response(&json!({"products": {"not": "a list"}})).is_empty());
        assert!(normalize_response(&json!({"data": {"products": "nope"}})).is_empty());
    }

    #[test]
    fn data_object_without_products_falls_through_to_root_keys() {
        let raw = json!({"data": {"pagination": {}}, "products": [shirt_item()]});
        assert_eq!(normalize_response(&raw).len(), 1);
    }

    #[test]
    fn non_object_items_are_skipped() {
        let raw = json!({"products": ["garbage", 42, shirt_item(), null]});
        let records = normalize_response(&raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("Classic Oxford Shirt"));
    }

    // -----------------------------------------------------------------------
    // price / discount
    // -----------------------------------------------------------------------

    #[test]
    fn discount_computed_from_mrp_and_price() {
        let raw = json!({"products": [{"title": "T", "mrp": 1000, "selling_price": 800}]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].discount_percentage, Some(20.0));
        assert_eq!(records[0].original_price, Some(1000.0));
        assert_eq!(records[0].price, 800.0);
    }

    #[test]
    fn discount_absent_when_mrp_is_zero() {
        let raw = json!({"products": [{"title": "T", "mrp": 0, "selling_price": 800}]});
        let records = normalize_response(&raw);
        assert!(records[0].discount_percentage.is_none());
        assert!(records[0].original_price.is_none());
    }

    #[test]
    fn discount_absent_when_price_not_below_mrp() {
        let raw = json!({"products": [{"title": "T", "mrp": 800, "selling_price": 800}]});
        let records = normalize_response(&raw);
        assert!(records[0].discount_percentage.is_none());
        assert_eq!(records[0].original_price, Some(800.0));
    }

    #[test]
    fn discount_rounds_to_one_decimal() {
        // (1499 - 999) / 1499 * 100 = 33.3555... -> 33.4
        let raw = json!({"products": [{"title": "T", "mrp": 1499, "selling_price": 999}]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].discount_percentage, Some(33.4));
    }

    #[test]
    fn discount_tie_rounds_to_even() {
        // (1000 - 897.5) / 1000 * 100 = 10.25 exactly: ties-to-even gives
        // 10.2 where half-away-from-zero would give 10.3. Pinned against
        // Python 3 `round`, which produced the reference data.
        let raw = json!({"products": [{"title": "T", "mrp": 1000, "selling_price": 897.5}]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].discount_percentage, Some(10.2));
    }

    #[test]
    fn price_falls_back_past_zero_selling_price() {
        let raw = json!({"products": [{"title": "T", "selling_price": 0, "price": 750}]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].price, 750.0);
    }

    #[test]
    fn zero_price_is_retained_in_serialized_record() {
        let raw = json!({"products": [{"title": "T", "description": ""}]});
        let records = normalize_response(&raw);
        let json = serde_json::to_value(&records[0]).expect("serialization failed");
        let obj = json.as_object().expect("expected object");
        assert_eq!(obj.get("price"), Some(&json!(0.0)));
        assert!(!obj.contains_key("description"), "empty description must be omitted");
    }

    // -----------------------------------------------------------------------
    // product URL
    // -----------------------------------------------------------------------

    #[test]
    fn product_url_built_from_handle() {
        let records = normalize_response(&json!({"products": [shirt_item()]}));
        assert_eq!(
            records[0].product_url.as_deref(),
            Some("https://www.snitch.com/products/classic-oxford-shirt")
        );
    }

    #[test]
    fn product_url_falls_back_to_url_field_without_handle() {
        let raw = json!({"products": [{"title": "T", "url": "https://example.com/p/1"}]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].product_url.as_deref(), Some("https://example.com/p/1"));
    }

    #[test]
    fn product_url_absent_without_handle_or_fallbacks() {
        let records = normalize_response(&json!({"products": [{"title": "T"}]}));
        assert!(records[0].product_url.is_none());
    }

    // -----------------------------------------------------------------------
    // images
    // -----------------------------------------------------------------------

    #[test]
    fn ensure_quality_appends_with_question_mark() {
        assert_eq!(
            ensure_quality("https://x/img.jpg"),
            "https://x/img.jpg?quality=80"
        );
    }

    #[test]
    fn ensure_quality_appends_with_ampersand_when_query_present() {
        assert_eq!(
            ensure_quality("https://x/img.jpg?w=10"),
            "https://x/img.jpg?w=10&quality=80"
        );
    }

    #[test]
    fn ensure_quality_leaves_existing_quality_param_alone() {
        assert_eq!(
            ensure_quality("https://x/img.jpg?quality=60"),
            "https://x/img.jpg?quality=60"
        );
    }

    #[test]
    fn preview_image_inserted_at_front_when_missing_from_gallery() {
        let records = normalize_response(&json!({"products": [shirt_item()]}));
        assert_eq!(
            records[0].images,
            vec![
                "https://cdn.snitch.com/preview.jpg?quality=80",
                "https://cdn.snitch.com/a.jpg?quality=80",
            ]
        );
    }

    #[test]
    fn preview_image_already_in_gallery_is_not_duplicated() {
        let raw = json!({"products": [{
            "title": "T",
            "images": ["https://cdn.snitch.com/a.jpg?quality=80"],
            "preview_image": "https://cdn.snitch.com/a.jpg?quality=80"
        }]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].images.len(), 1);
    }

    #[test]
    fn non_string_image_entries_are_skipped() {
        let raw = json!({"products": [{
            "title": "T",
            "images": ["https://x/a.jpg", 7, null, ""]
        }]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].images, vec!["https://x/a.jpg?quality=80"]);
    }

    // -----------------------------------------------------------------------
    // field fallbacks / sparse records
    // -----------------------------------------------------------------------

    #[test]
    fn numeric_id_is_stringified() {
        let raw = json!({"products": [{"id": 8123456789_i64, "title": "T"}]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].id.as_deref(), Some("8123456789"));
    }

    #[test]
    fn zero_numeric_id_falls_through_to_next_candidate() {
        let raw = json!({"products": [{"id": 0, "product_id": 42, "title": "T"}]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].id.as_deref(), Some("42"));
    }

    #[test]
    fn zero_numeric_id_with_no_fallback_leaves_id_unset() {
        let records = normalize_response(&json!({"products": [{"id": 0, "title": "T"}]}));
        assert!(records[0].id.is_none());
    }

    #[test]
    fn id_prefers_shopify_product_id() {
        let raw = json!({"products": [{
            "shopify_product_id": "abc", "id": 42, "title": "T"
        }]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].id.as_deref(), Some("abc"));
    }

    #[test]
    fn name_falls_back_through_title_name_product_name() {
        let raw = json!({"products": [{"product_name": "Fallback Name"}]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].name.as_deref(), Some("Fallback Name"));
    }

    #[test]
    fn brand_defaults_to_storefront_when_brand_and_vendor_absent() {
        let records = normalize_response(&json!({"products": [{"title": "T"}]}));
        assert_eq!(records[0].brand.as_deref(), Some("Snitch"));
    }

    #[test]
    fn brand_prefers_explicit_brand_then_vendor() {
        let raw = json!({"products": [{"title": "T", "vendor": "Someone Else"}]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].brand.as_deref(), Some("Someone Else"));
    }

    #[test]
    fn empty_vendor_leaves_brand_unset() {
        let raw = json!({"products": [{"title": "T", "vendor": ""}]});
        let records = normalize_response(&raw);
        assert!(records[0].brand.is_none());
    }

    #[test]
    fn category_resolved_from_shopify_product_type() {
        let raw = json!({"products": [{
            "title": "T", "shopify_product_type": "Shirts", "category": "ignored"
        }]});
        let records = normalize_response(&raw);
        assert_eq!(records[0].category.as_deref(), Some("Shirts"));
    }

    #[test]
    fn null_and_empty_attributes_stay_unset() {
        let raw = json!({"products": [{
            "title": "T", "fit": null, "collar": "", "sleeves": "Full Sleeves"
        }]});
        let records = normalize_response(&raw);
        assert!(records[0].fit.is_none());
        assert!(records[0].collar.is_none());
        assert_eq!(records[0].sleeves.as_deref(), Some("Full Sleeves"));
    }

    #[test]
    fn ratings_and_counts_carry_defaults() {
        let records = normalize_response(&json!({"products": [{"title": "T"}]}));
        assert!(records[0].average_rating.is_none());
        assert_eq!(records[0].total_ratings_count, 0);
        assert_eq!(records[0].color_variants_count, 0);
        assert!(records[0].colors.is_empty());
    }

    #[test]
    fn full_item_flattens_all_attributes() {
        let records = normalize_response(&json!({"data": {"products": [shirt_item()]}}));
        let r = &records[0];
        assert_eq!(r.id.as_deref(), Some("8123456789"));
        assert_eq!(r.handle.as_deref(), Some("classic-oxford-shirt"));
        assert_eq!(r.fit.as_deref(), Some("Slim"));
        assert_eq!(r.colors, vec!["Black", "White"]);
        assert_eq!(r.average_rating, Some(4.3));
        assert_eq!(r.total_ratings_count, 212);
        // (1499 - 999) / 1499 * 100 = 33.355... -> 33.4
        assert_eq!(r.discount_percentage, Some(33.4));
    }
}
