//! # Gaming News Feed
//!
//! Scrapes a gaming news listing page and publishes it as a static
//! HTML news feed with a JSON API snapshot.
//!
//! ## Features
//!
//! - Fetches the listing page directly, falling back through an
//!   ordered chain of public CORS proxies
//! - Extracts article cards (title, image, link) from the raw HTML
//!   with a single forward scan
//! - Substitutes built-in sample articles when every endpoint fails,
//!   so an edition is always published
//! - Writes one HTML edition and one JSON snapshot per run, plus an
//!   index page linking all editions
//!
//! ## Usage
//!
//! ```sh
//! gaming_news_feed -o ./site -j ./json
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Fetching**: download the listing page body (direct, then proxies)
//! 2. **Extraction**: scan the body for complete article records
//! 3. **Output**: write the JSON snapshot, the HTML edition, and the index

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod extract;
mod fetch;
mod models;
mod outputs;
mod sample;
mod utils;

use cli::Cli;
use config::FeedConfig;
use fetch::{FallbackFetcher, FetchText, HttpFetcher};
use models::FeedPage;
use outputs::{html, indexes, json};
use utils::{ensure_writable_dir, time_of_day, truncate_for_log};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("feed_update starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.html_output_dir, ?args.json_output_dir, "Parsed CLI arguments");

    // --- Configuration ---
    let mut config = match args.config.as_deref() {
        Some(path) => {
            let config = config::load_config(path)?;
            info!(config_path = path, "Loaded configuration");
            config
        }
        None => FeedConfig::default(),
    };
    if let Some(url) = args.url {
        config.target_url = url;
    }
    if args.no_sample_fallback {
        config.sample_fallback = false;
    }
    info!(target_url = %config.target_url, proxies = config.proxies.len(), "Configuration resolved");

    // Early check: ensure both output dirs are writable
    for dir in [&args.html_output_dir, &args.json_output_dir] {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "Output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Fetch the listing page ----
    let fetcher = FallbackFetcher::new(
        HttpFetcher::new(
            &config.user_agent,
            Duration::from_millis(config.request_timeout_ms),
        )?,
        config.proxies.clone(),
    );

    let (body, sample_data) = match fetcher.fetch_text(&config.target_url).await {
        Ok(body) => {
            debug!(preview = %truncate_for_log(&body, 300), "Fetched listing body");
            (body, false)
        }
        Err(e) if config.sample_fallback => {
            warn!(
                error = %e,
                url = %config.target_url,
                "Every fetch endpoint failed; substituting sample articles"
            );
            (String::new(), true)
        }
        Err(e) => {
            error!(error = %e, url = %config.target_url, "Every fetch endpoint failed");
            let error_path = format!("{}/error.html", args.html_output_dir);
            tokio::fs::write(&error_path, html::render_error(&e.to_string())).await?;
            info!(path = %error_path, "Wrote error page");
            return Err(e);
        }
    };

    // ---- Extract article records ----
    let (page_title, articles) = if sample_data {
        (None, sample::placeholder_articles())
    } else {
        (
            extract::page_title(&body).map(str::to_string),
            extract::extract(&body),
        )
    };
    info!(count = articles.len(), sample_data, "Article records ready");

    // ---- Build the edition ----
    let local_date = Local::now().date_naive().to_string();
    let local_time = Local::now().time().to_string();
    let feed_page = FeedPage {
        local_date,
        time_of_day: time_of_day(),
        local_time,
        source_url: config.target_url.clone(),
        page_title,
        content_length: body.len(),
        sample_data,
        articles,
    };
    info!(
        time_of_day = %feed_page.time_of_day,
        local_date = %feed_page.local_date,
        article_count = feed_page.articles.len(),
        "FeedPage initialized"
    );

    // ---- JSON snapshot ----
    if let Err(e) = json::write_feed(&feed_page, &args.json_output_dir).await {
        error!(error = %e, "Failed to write JSON snapshot");
    }

    // ---- HTML edition ----
    let markup = html::render_feed(&feed_page);
    let output_html_filename = format!(
        "{}/{}_{}.html",
        args.html_output_dir, feed_page.local_date, feed_page.time_of_day
    );

    info!(path = %output_html_filename, "Writing HTML edition");
    if let Err(e) = tokio::fs::write(&output_html_filename, markup).await {
        error!(path = %output_html_filename, error = %e, "Failed writing HTML edition");
    } else {
        info!(path = %output_html_filename, "Wrote feed HTML");
    }

    // ---- Index update ----
    if let Err(e) = indexes::update_feed_index(&args.html_output_dir).await {
        error!(error = %e, "Failed to update feed index");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
