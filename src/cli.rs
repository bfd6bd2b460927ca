//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap`
//! crate. The target URL can also come from the environment.

use clap::Parser;

/// Command-line arguments for the feed scraper.
///
/// # Examples
///
/// ```sh
/// # Basic usage with required arguments
/// gaming_news_feed -o ./site -j ./json
///
/// # Scrape a different listing page
/// gaming_news_feed -o ./site -j ./json --url https://example.com/news
///
/// # Fail hard instead of publishing sample articles
/// gaming_news_feed -o ./site -j ./json --no-sample-fallback
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the rendered HTML editions
    #[arg(short = 'o', long)]
    pub html_output_dir: String,

    /// Output directory for the JSON API snapshots
    #[arg(short, long)]
    pub json_output_dir: String,

    /// Optional path to config.yaml file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listing page URL to scrape (overrides the config file)
    #[arg(long, env = "NEWS_FEED_URL")]
    pub url: Option<String>,

    /// Write an error page and exit nonzero when every fetch endpoint
    /// fails, instead of substituting the built-in sample articles
    #[arg(long)]
    pub no_sample_fallback: bool,
}
