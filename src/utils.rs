//! Utility functions for time classification, string manipulation, and
//! file system checks.

use chrono::{Local, NaiveTime};
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Classify current time into morning, afternoon, or evening.
///
/// Determines the edition name for feed output. The boundaries are:
/// - **Morning**: 00:00 - 08:00
/// - **Afternoon**: 08:00 - 16:00
/// - **Evening**: 16:00 - 24:00
#[instrument]
pub fn time_of_day() -> String {
    let morning_low = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
    let morning_high = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let afternoon_low = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let afternoon_high = NaiveTime::from_hms_opt(16, 0, 0).unwrap();

    let tod = Local::now().time();
    let which = if (tod >= morning_low) && (tod < morning_high) {
        "morning"
    } else if (tod >= afternoon_low) && (tod < afternoon_high) {
        "afternoon"
    } else {
        "evening"
    };
    tracing::debug!(%tod, %which, "Computed time_of_day");
    which.to_string()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at `max` bytes with an ellipsis and byte count
/// appended. Used for page-body previews in debug logs.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}…(+{} bytes)", &s[..max], s.len() - max)
    }
}

/// Capitalize the first character of a string.
///
/// Used for formatting edition names (e.g., "morning" -> "Morning").
pub fn upcase(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if missing, then performs a write test by
/// creating and immediately deleting a probe file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_upcase() {
        assert_eq!(upcase("morning"), "Morning");
        assert_eq!(upcase("evening"), "Evening");
        assert_eq!(upcase(""), "");
        assert_eq!(upcase("a"), "A");
    }

    #[test]
    fn test_time_of_day_boundaries() {
        // The live function reads the wall clock; check the boundary
        // logic against fixed times instead.
        let morning = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        let morning_low = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        let morning_high = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        assert!(morning >= morning_low && morning < morning_high);

        let afternoon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert!(afternoon >= morning_high);

        let evening = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
        let afternoon_high = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
        assert!(evening >= afternoon_high);
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing() {
        let dir = std::env::temp_dir().join("gaming_news_feed_probe_test");
        let path = dir.to_str().unwrap().to_string();
        let _ = tokio::fs::remove_dir_all(&path).await;
        ensure_writable_dir(&path).await.unwrap();
        assert!(std::path::Path::new(&path).is_dir());
        let _ = tokio::fs::remove_dir_all(&path).await;
    }
}
