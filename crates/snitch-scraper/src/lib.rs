pub mod client;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod report;
pub mod types;

pub use client::ListingClient;
pub use error::ScraperError;
pub use normalize::normalize_response;
pub use types::{ChipsResponse, FilterBucket, FilterChip, FiltersResponse};
