//! Response types for the listing API's auxiliary endpoints.
//!
//! The product listing itself (`/products/plp/v2`) is deliberately left
//! untyped — its envelope varies and is resolved by [`crate::normalize`].
//! The filter and chip endpoints have a stable enough shape to model
//! directly, with `#[serde(default)]` guarding against absent sections.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Response from `GET /products/filters/v2`.
///
/// `data` maps an attribute name (`"color"`, `"fit"`, `"pattern"`,
/// `"material"`, ...) to its value-count buckets. Values are kept as raw
/// JSON because some attributes carry non-bucket payloads (price-range
/// sliders); [`Self::buckets`] decodes tolerantly on access.
#[derive(Debug, Deserialize)]
pub struct FiltersResponse {
    #[serde(default)]
    pub data: BTreeMap<String, Value>,
}

impl FiltersResponse {
    /// Returns the decoded buckets for one attribute, skipping entries that
    /// do not fit the bucket shape. Unknown attributes yield an empty vec.
    #[must_use]
    pub fn buckets(&self, attribute: &str) -> Vec<FilterBucket> {
        self.data
            .get(attribute)
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Attribute names present in the response, in sorted order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

/// One value-count pair inside a filter attribute, e.g.
/// `{"attribute_value": "Black", "count": 42}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterBucket {
    #[serde(default)]
    pub attribute_value: String,
    #[serde(default)]
    pub count: i64,
}

/// Response from `GET /products/chips/v3` (quick-filter chips).
#[derive(Debug, Deserialize)]
pub struct ChipsResponse {
    #[serde(default)]
    pub data: Vec<FilterChip>,
}

/// A single quick-filter chip.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterChip {
    #[serde(default)]
    pub attribute_label: String,
    #[serde(default)]
    pub attribute_name: String,
    #[serde(default)]
    pub attribute_value: String,
}
