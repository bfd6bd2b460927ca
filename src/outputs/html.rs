//! HTML rendering for the feed page.
//!
//! Produces a complete, self-contained page: inline styles, a status
//! line describing the scrape, and a responsive card grid of articles.
//! Article URLs are resolved against the listing URL so relative hrefs
//! stay clickable; everything else is emitted as captured.

use crate::models::FeedPage;
use std::fmt::Write;

const PAGE_STYLE: &str = r#"        body {
            margin: 0;
            padding: 0;
            font-family: 'Inter', sans-serif;
            background-color: #004D4D;
            color: #E0E0E0;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
        }
        .header h1 {
            font-size: 32px;
            margin-bottom: 10px;
        }
        .status {
            text-align: center;
            margin-bottom: 20px;
            font-size: 16px;
        }
        .news-section {
            background-color: rgba(0,0,0,0.3);
            padding: 20px;
            border-radius: 10px;
        }
        .news-section h2 {
            font-size: 24px;
            margin-bottom: 20px;
            color: #40E0D0;
        }
        .page-title {
            font-size: 18px;
            margin-bottom: 15px;
            color: #40E0D0;
        }
        .articles-list {
            list-style: none;
            padding: 0;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 20px;
        }
        .article-item {
            background-color: rgba(0,0,0,0.2);
            border-radius: 8px;
            overflow: hidden;
            transition: transform 0.2s;
            cursor: pointer;
            text-decoration: none;
            color: inherit;
        }
        .article-item:hover {
            transform: translateY(-2px);
        }
        .article-image {
            width: 100%;
            height: 140px;
            object-fit: cover;
            display: block;
        }
        .article-title {
            padding: 15px;
            font-size: 14px;
            line-height: 1.4;
        }
"#;

/// Render a [`FeedPage`] as a complete HTML document.
pub fn render_feed(page: &FeedPage) -> String {
    let mut markup = String::new();

    push_head(&mut markup, "Gaming News Feed", PAGE_STYLE);
    markup.push_str("<body>\n    <div class=\"container\">\n");
    markup.push_str("        <div class=\"header\">\n            <h1>Gaming News Feed</h1>\n        </div>\n");

    let status = if page.sample_data {
        "Showing built-in sample articles; every fetch endpoint failed".to_string()
    } else {
        format!(
            "Successfully scraped {} characters from {}",
            page.content_length, page.source_url
        )
    };
    writeln!(markup, "        <div class=\"status\">{status}</div>").unwrap();

    markup.push_str("        <div class=\"news-section\">\n");
    let source_label = page
        .source_host()
        .unwrap_or_else(|| page.source_url.clone());
    writeln!(markup, "            <h2>Latest News from {source_label}</h2>").unwrap();
    if let Some(title) = &page.page_title {
        writeln!(markup, "            <div class=\"page-title\">Page Title: {title}</div>").unwrap();
    }
    writeln!(
        markup,
        "            <h4 style=\"font-size: 16px; margin-bottom: 20px; color: #40E0D0;\">Recent Articles ({} edition, {}):</h4>",
        page.time_of_day, page.local_date
    )
    .unwrap();

    markup.push_str("            <div class=\"articles-list\">\n");
    for article in &page.articles {
        writeln!(
            markup,
            "                <a href=\"{}\" target=\"_blank\" class=\"article-item\">",
            article.resolved_link(&page.source_url)
        )
        .unwrap();
        writeln!(
            markup,
            "                    <img src=\"{}\" alt=\"{}\" class=\"article-image\" onerror=\"this.style.display='none'\">",
            article.resolved_image(&page.source_url),
            article.title
        )
        .unwrap();
        writeln!(
            markup,
            "                    <div class=\"article-title\">{}</div>",
            article.title
        )
        .unwrap();
        markup.push_str("                </a>\n");
    }
    markup.push_str("            </div>\n        </div>\n    </div>\n</body>\n</html>\n");

    markup
}

/// Render the error page shown when the scrape fails hard.
pub fn render_error(message: &str) -> String {
    let mut markup = String::new();

    push_head(
        &mut markup,
        "Gaming News Feed - Error",
        r#"        body {
            margin: 0;
            padding: 0;
            font-family: 'Inter', sans-serif;
            background-color: #004D4D;
            color: #E0E0E0;
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
        }
        .error-container {
            text-align: center;
        }
        .error-container h1 {
            font-size: 32px;
            margin-bottom: 20px;
        }
        .error-message {
            font-size: 16px;
        }
"#,
    );
    markup.push_str("<body>\n    <div class=\"error-container\">\n        <h1>Gaming News Feed</h1>\n");
    writeln!(
        markup,
        "        <div class=\"error-message\">Failed to scrape data: {message}</div>"
    )
    .unwrap();
    markup.push_str("    </div>\n</body>\n</html>\n");

    markup
}

fn push_head(markup: &mut String, title: &str, style: &str) {
    markup.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    markup.push_str("    <meta charset=\"UTF-8\">\n");
    markup.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    writeln!(markup, "    <title>{title}</title>").unwrap();
    markup.push_str("    <link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n");
    markup.push_str("    <link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>\n");
    markup.push_str("    <link href=\"https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap\" rel=\"stylesheet\">\n");
    markup.push_str("    <style>\n");
    markup.push_str(style);
    markup.push_str("    </style>\n</head>\n");
}
