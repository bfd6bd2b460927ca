//! Feed index management.
//!
//! Regenerates `index.html` in the HTML output directory, linking every
//! edition snapshot present, newest first. Unlike an append-only TOC,
//! the index is rebuilt from the directory contents on every run so it
//! stays correct when old editions are pruned by hand.

use crate::utils::upcase;
use std::error::Error;
use std::fmt::Write;
use tokio::fs;
use tracing::{info, instrument};

/// One edition snapshot file found in the output directory.
#[derive(Debug, PartialEq, Eq)]
struct Edition {
    date: String,
    time_of_day: String,
    filename: String,
}

/// Regenerate `{html_output_dir}/index.html` from the edition files on
/// disk, newest first.
#[instrument(level = "info", skip_all, fields(%html_output_dir))]
pub async fn update_feed_index(html_output_dir: &str) -> Result<(), Box<dyn Error>> {
    let mut editions = Vec::new();
    let mut entries = fs::read_dir(html_output_dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        if let Some(edition) = parse_edition_filename(&name.to_string_lossy()) {
            editions.push(edition);
        }
    }

    sort_newest_first(&mut editions);

    let index_path = format!("{}/index.html", html_output_dir);
    fs::write(&index_path, render_index(&editions)).await?;
    info!(path = %index_path, count = editions.len(), "Updated feed index");
    Ok(())
}

/// Parse `2026-08-07_morning.html` into an [`Edition`]; anything else
/// (including `index.html` and `error.html`) is skipped.
fn parse_edition_filename(name: &str) -> Option<Edition> {
    let stem = name.strip_suffix(".html")?;
    let (date, time_of_day) = stem.split_once('_')?;
    if edition_rank(time_of_day).is_none() || date.is_empty() {
        return None;
    }
    Some(Edition {
        date: date.to_string(),
        time_of_day: time_of_day.to_string(),
        filename: name.to_string(),
    })
}

/// Chronological rank of an edition within a day.
fn edition_rank(time_of_day: &str) -> Option<u8> {
    match time_of_day {
        "morning" => Some(0),
        "afternoon" => Some(1),
        "evening" => Some(2),
        _ => None,
    }
}

fn sort_newest_first(editions: &mut [Edition]) {
    editions.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then(edition_rank(&b.time_of_day).cmp(&edition_rank(&a.time_of_day)))
    });
}

fn render_index(editions: &[Edition]) -> String {
    let mut markup = String::new();
    markup.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    markup.push_str("    <meta charset=\"UTF-8\">\n    <title>Gaming News Feed - Editions</title>\n");
    markup.push_str("    <style>\n        body { font-family: 'Inter', sans-serif; background-color: #004D4D; color: #E0E0E0; padding: 20px; }\n        a { color: #40E0D0; }\n        li { margin-bottom: 8px; }\n    </style>\n</head>\n<body>\n");
    markup.push_str("    <h1>Gaming News Feed</h1>\n    <ul>\n");
    for edition in editions {
        writeln!(
            markup,
            "        <li><a href=\"{}\">{} {}</a></li>",
            edition.filename,
            edition.date,
            upcase(&edition.time_of_day)
        )
        .unwrap();
    }
    markup.push_str("    </ul>\n</body>\n</html>\n");
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edition_filename() {
        let edition = parse_edition_filename("2026-08-07_morning.html").unwrap();
        assert_eq!(edition.date, "2026-08-07");
        assert_eq!(edition.time_of_day, "morning");
        assert_eq!(edition.filename, "2026-08-07_morning.html");
    }

    #[test]
    fn test_parse_skips_non_edition_files() {
        assert!(parse_edition_filename("index.html").is_none());
        assert!(parse_edition_filename("error.html").is_none());
        assert!(parse_edition_filename("2026-08-07_morning.json").is_none());
        assert!(parse_edition_filename("2026-08-07_noon.html").is_none());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut editions = vec![
            parse_edition_filename("2026-08-06_evening.html").unwrap(),
            parse_edition_filename("2026-08-07_morning.html").unwrap(),
            parse_edition_filename("2026-08-07_evening.html").unwrap(),
            parse_edition_filename("2026-08-07_afternoon.html").unwrap(),
        ];
        sort_newest_first(&mut editions);
        let order: Vec<&str> = editions.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "2026-08-07_evening.html",
                "2026-08-07_afternoon.html",
                "2026-08-07_morning.html",
                "2026-08-06_evening.html",
            ]
        );
    }

    #[test]
    fn test_render_index_links_editions() {
        let editions = vec![parse_edition_filename("2026-08-07_morning.html").unwrap()];
        let markup = render_index(&editions);
        assert!(markup.contains("href=\"2026-08-07_morning.html\""));
        assert!(markup.contains("2026-08-07 Morning"));
    }

    #[tokio::test]
    async fn test_update_feed_index_writes_file() {
        let dir = std::env::temp_dir().join("gaming_news_feed_index_test");
        let base = dir.to_str().unwrap().to_string();
        let _ = tokio::fs::remove_dir_all(&base).await;
        tokio::fs::create_dir_all(&base).await.unwrap();
        tokio::fs::write(format!("{base}/2026-08-07_morning.html"), "x")
            .await
            .unwrap();

        update_feed_index(&base).await.unwrap();

        let index = tokio::fs::read_to_string(format!("{base}/index.html"))
            .await
            .unwrap();
        assert!(index.contains("2026-08-07_morning.html"));

        let _ = tokio::fs::remove_dir_all(&base).await;
    }
}
