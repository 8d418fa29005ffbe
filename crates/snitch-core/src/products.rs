use serde::{Deserialize, Serialize};

/// A product flattened from the storefront listing API, normalized for
/// reporting and export.
///
/// Records are sparse: a field that was `null` or an empty string in the
/// source is omitted from the serialized form entirely. Numeric zeros are
/// retained (`price: 0` is meaningful, `description: ""` is not). A record
/// is built once during normalization and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    /// First non-empty of the source's `shopify_product_id`, `id`, or
    /// `product_id`; numeric IDs are stored as strings to avoid precision loss.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name, resolved from `title`, `name`, or `product_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Selling price. Always present; `0.0` when the source carried no price.
    pub price: f64,

    /// List price (`mrp`), present only when greater than zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,

    /// Derived discount, one decimal place. Present only when
    /// `original_price > 0` and `price < original_price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,

    /// Storefront URL, built from `handle` when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,

    /// URL slug, e.g. `"classic-oxford-shirt"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Quality-normalized image URLs, preview image first when present.
    /// An empty gallery stays in the serialized record.
    pub images: Vec<String>,

    /// Raw preview image URL as the API sent it (the normalized copy lives
    /// at the front of `images`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Category, resolved from `shopify_product_type`, `category`, or
    /// `product_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collar: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleeves: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Available colorways. Empty list retained in output.
    pub colors: Vec<String>,

    /// Number of color variants; zero retained.
    pub color_variants_count: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,

    /// Review count; zero retained.
    pub total_ratings_count: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_info: Option<String>,

    /// Spelled as the upstream API spells it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occassion: Option<String>,
}

impl ProductRecord {
    /// Returns `true` if the record carries at least one image URL.
    #[must_use]
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// Returns `true` if the record carries a non-zero price.
    #[must_use]
    pub fn has_price(&self) -> bool {
        self.price > 0.0
    }

    /// Returns the rating, treating an absent rating as `0.0` for
    /// threshold comparisons.
    #[must_use]
    pub fn rating_or_zero(&self) -> f64 {
        self.average_rating.unwrap_or(0.0)
    }
}
