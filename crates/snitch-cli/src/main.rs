mod export;
mod facets;
mod report;
mod scrape;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "snitch-cli")]
#[command(about = "Snitch storefront listing scraper and reporting tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape the product listing and write snapshot + summary JSON files.
    Scrape {
        #[arg(long, default_value = "Shirts,Overshirt")]
        product_type: String,
        /// Overrides SNITCH_MAX_PAGES.
        #[arg(long)]
        max_pages: Option<u32>,
        /// Overrides SNITCH_PAGE_LIMIT.
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long, default_value = "scraped_data_api.json")]
        output: PathBuf,
        #[arg(long, default_value = "scraped_summary.json")]
        summary_output: PathBuf,
    },
    /// Show the attribute distribution from the filters endpoint.
    Filters {
        #[arg(long, default_value = "Shirts,Overshirt")]
        product_type: String,
    },
    /// List the quick-filter chips.
    Chips {
        #[arg(long, default_value = "Shirts,Overshirt")]
        product_type: String,
    },
    /// Price-range and rating views over a saved snapshot.
    Report {
        #[arg(long, default_value = "scraped_data_api.json")]
        input: PathBuf,
        #[arg(long, default_value_t = 500.0)]
        min_price: f64,
        #[arg(long, default_value_t = 1000.0)]
        max_price: f64,
        #[arg(long, default_value_t = 4.5)]
        min_rating: f64,
        #[arg(long, default_value_t = 100)]
        min_reviews: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = snitch_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape {
            product_type,
            max_pages,
            limit,
            output,
            summary_output,
        } => {
            scrape::run(
                &config,
                &product_type,
                limit.unwrap_or(config.page_limit),
                max_pages.unwrap_or(config.max_pages),
                &output,
                &summary_output,
            )
            .await
        }
        Commands::Filters { product_type } => facets::show_filters(&config, &product_type).await,
        Commands::Chips { product_type } => facets::show_chips(&config, &product_type).await,
        Commands::Report {
            input,
            min_price,
            max_price,
            min_rating,
            min_reviews,
        } => report::run(&input, min_price, max_price, min_rating, min_reviews),
    }
}
