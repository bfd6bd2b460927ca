//! JSON snapshot output for the API.
//!
//! Serializes each edition to a date-keyed file:
//! ```text
//! json_output_dir/
//! └── 2026-08-07/
//!     ├── morning.json
//!     ├── afternoon.json
//!     └── evening.json
//! ```
//!
//! # Evening Edge Case
//!
//! If an "evening" edition runs just after midnight (before the date
//! changes), it uses yesterday's date to keep the edition logically
//! grouped with the correct day's news.

use crate::models::FeedPage;
use chrono::{Duration, Local, NaiveTime};
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`FeedPage`] snapshot to `{json_output_dir}/{date}/{edition}.json`.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_feed(
    feed_page: &FeedPage,
    json_output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string(feed_page)?;

    let midnight = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
    let now = Local::now().time();
    let yesterday = Local::now().date_naive() - Duration::days(1);

    let rolled_over = feed_page.time_of_day == "evening" && (now >= midnight);
    let full_json_dir = if rolled_over {
        format!("{}/{}", json_output_dir, yesterday)
    } else {
        format!("{}/{}", json_output_dir, feed_page.local_date)
    };

    info!(%full_json_dir, "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(%full_json_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = format!("{}/{}.json", full_json_dir, feed_page.time_of_day);

    info!(path = %output_json_filename, "Writing JSON");
    fs::write(&output_json_filename, json).await?;
    info!(path = %output_json_filename, "Wrote JSON snapshot");

    Ok(())
}
