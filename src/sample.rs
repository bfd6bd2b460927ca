//! Built-in placeholder articles.
//!
//! When the direct fetch and every proxy fail, the pipeline can still
//! publish an edition from this fixed set so the feed page is never
//! blank. Such editions are marked `sample_data` in the JSON snapshot
//! and carry a notice in the rendered page.

use crate::models::Article;
use once_cell::sync::Lazy;

static SAMPLE_ARTICLES: Lazy<Vec<Article>> = Lazy::new(|| {
    vec![
        Article {
            title: "Hands-on with the year's most anticipated open-world RPG".to_string(),
            image_url: "https://placehold.co/600x400?text=RPG".to_string(),
            link_url: "https://pcgamer.com/news".to_string(),
        },
        Article {
            title: "GPU prices finally dip below launch MSRP".to_string(),
            image_url: "https://placehold.co/600x400?text=GPU".to_string(),
            link_url: "https://pcgamer.com/news".to_string(),
        },
        Article {
            title: "Indie city-builder tops the charts for a third week".to_string(),
            image_url: "https://placehold.co/600x400?text=Indie".to_string(),
            link_url: "https://pcgamer.com/news".to_string(),
        },
        Article {
            title: "Patch notes: the balance overhaul nobody asked for".to_string(),
            image_url: "https://placehold.co/600x400?text=Patch".to_string(),
            link_url: "https://pcgamer.com/news".to_string(),
        },
    ]
});

/// The placeholder article set, cloned for the caller to own.
pub fn placeholder_articles() -> Vec<Article> {
    SAMPLE_ARTICLES.clone()
}
