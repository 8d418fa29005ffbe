/// Runtime configuration for the scraper and CLI.
///
/// Every field has a default that reproduces the storefront constants the
/// scraper was built against, so the binary runs with an empty environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listing API origin (AWS App Runner deployment behind the storefront).
    pub base_url: String,
    /// Browser-like User-Agent sent on every request.
    pub user_agent: String,
    /// Referer header pointing at the storefront origin.
    pub referer: String,
    /// Total per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Items requested per page.
    pub page_limit: u32,
    /// Upper bound on pages fetched in one run.
    pub max_pages: u32,
    /// Delay between page requests in milliseconds (applied after the first).
    pub inter_request_delay_ms: u64,
    /// Fallback log level when `RUST_LOG` is unset.
    pub log_level: String,
}

pub(crate) const DEFAULT_BASE_URL: &str = "https://mxemjhp3rt.ap-south-1.awsapprunner.com";

pub(crate) const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub(crate) const DEFAULT_REFERER: &str = "https://www.snitch.com/";
