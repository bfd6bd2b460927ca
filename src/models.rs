//! Data models for extracted articles and rendered feed editions.
//!
//! This module defines the core data structures used throughout the
//! application:
//! - [`Article`]: one extracted article card (title, image, link)
//! - [`FeedPage`]: everything rendered for a single edition
//!
//! The serialized field names `image` and `url` match the JSON shape
//! the feed's API consumers already expect.

use serde::{Deserialize, Serialize};
use url::Url;

/// A single article card extracted from the listing page.
///
/// All three fields are non-empty by construction: the extractor drops
/// any block missing one of them. Values are stored exactly as they
/// appeared in the source document; use [`Article::resolved_link`] and
/// [`Article::resolved_image`] when an absolute URL is needed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    /// The article headline, trimmed of surrounding whitespace.
    pub title: String,
    /// The card image URL as captured from the source.
    #[serde(rename = "image")]
    pub image_url: String,
    /// The article link URL as captured from the source.
    #[serde(rename = "url")]
    pub link_url: String,
}

impl Article {
    /// The link URL joined against the listing page URL.
    ///
    /// Listing pages routinely use relative hrefs; joining makes them
    /// clickable from the rendered feed. Falls back to the captured
    /// value when either side fails to parse.
    pub fn resolved_link(&self, base: &str) -> String {
        resolve(base, &self.link_url)
    }

    /// The image URL joined against the listing page URL.
    pub fn resolved_image(&self, base: &str) -> String {
        resolve(base, &self.image_url)
    }
}

fn resolve(base: &str, candidate: &str) -> String {
    if let Ok(base) = Url::parse(base) {
        if let Ok(joined) = base.join(candidate.trim()) {
            return joined.to_string();
        }
    }
    candidate.to_string()
}

/// One rendered edition of the feed.
///
/// Each execution produces one `FeedPage`, serialized to JSON for API
/// consumption and rendered to a static HTML page.
///
/// # Edition Naming
///
/// The `time_of_day` field categorizes editions as:
/// - `"morning"`: 00:00 - 08:00
/// - `"afternoon"`: 08:00 - 16:00
/// - `"evening"`: 16:00 - 24:00
#[derive(Debug, Deserialize, Serialize)]
pub struct FeedPage {
    /// The date of publication in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The time of day category: "morning", "afternoon", or "evening".
    pub time_of_day: String,
    /// The exact local time of publication.
    pub local_time: String,
    /// The listing page URL this edition was scraped from.
    pub source_url: String,
    /// The listing page's own `<title>` text, when present.
    pub page_title: Option<String>,
    /// Byte length of the fetched page body.
    pub content_length: usize,
    /// True when every fetch endpoint failed and the built-in sample
    /// articles were substituted.
    pub sample_data: bool,
    /// The extracted article cards in document order.
    pub articles: Vec<Article>,
}

impl FeedPage {
    /// Host of the source URL, e.g. `"pcgamer.com"`, for display.
    pub fn source_host(&self) -> Option<String> {
        Url::parse(&self.source_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(link: &str, image: &str) -> Article {
        Article {
            title: "Test Article".to_string(),
            image_url: image.to_string(),
            link_url: link.to_string(),
        }
    }

    fn page() -> FeedPage {
        FeedPage {
            local_date: "2026-08-07".to_string(),
            time_of_day: "evening".to_string(),
            local_time: "20:30:00".to_string(),
            source_url: "https://pcgamer.com/news".to_string(),
            page_title: Some("PC Gamer News".to_string()),
            content_length: 12345,
            sample_data: false,
            articles: vec![],
        }
    }

    #[test]
    fn test_article_serializes_api_field_names() {
        let json = serde_json::to_string(&article("/x", "img1.png")).unwrap();
        assert!(json.contains(r#""image":"img1.png""#));
        assert!(json.contains(r#""url":"/x""#));
        assert!(!json.contains("image_url"));
    }

    #[test]
    fn test_article_roundtrip() {
        let original = article("/news/story", "https://cdn.example.com/a.png");
        let json = serde_json::to_string(&original).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_resolved_link_relative() {
        let a = article("/news/story", "i.png");
        assert_eq!(
            a.resolved_link("https://pcgamer.com/news"),
            "https://pcgamer.com/news/story"
        );
    }

    #[test]
    fn test_resolved_link_absolute_passthrough() {
        let a = article("https://other.example.com/story", "i.png");
        assert_eq!(
            a.resolved_link("https://pcgamer.com/news"),
            "https://other.example.com/story"
        );
    }

    #[test]
    fn test_resolved_image_protocol_relative() {
        let a = article("/x", "//cdn.example.com/a.png");
        assert_eq!(
            a.resolved_image("https://pcgamer.com/news"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_resolve_unparseable_base_keeps_value() {
        let a = article("/x", "i.png");
        assert_eq!(a.resolved_link("not a url"), "/x");
    }

    #[test]
    fn test_feed_page_serialization() {
        let json = serde_json::to_string(&page()).unwrap();
        assert!(json.contains("2026-08-07"));
        assert!(json.contains("evening"));
        assert!(json.contains("PC Gamer News"));
    }

    #[test]
    fn test_feed_page_deserialization() {
        let json = r#"{
            "local_date": "2026-08-07",
            "time_of_day": "morning",
            "local_time": "07:15:00",
            "source_url": "https://pcgamer.com/news",
            "page_title": null,
            "content_length": 0,
            "sample_data": true,
            "articles": [{"title": "T", "image": "i.png", "url": "/x"}]
        }"#;

        let page: FeedPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.local_date, "2026-08-07");
        assert!(page.sample_data);
        assert_eq!(page.articles.len(), 1);
        assert_eq!(page.articles[0].image_url, "i.png");
    }

    #[test]
    fn test_source_host() {
        assert_eq!(page().source_host(), Some("pcgamer.com".to_string()));
    }
}
