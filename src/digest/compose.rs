use std::fmt::Write as _;

use crate::types::Digest;

/// The digest never renders more than this many articles.
pub const MAX_ARTICLES: usize = 10;

/// Descriptions are cut at this many characters, with a trailing
/// ellipsis marker only when something was actually cut.
pub const DESCRIPTION_LIMIT: usize = 300;

pub(crate) fn truncate_description(desc: &str) -> String {
    if desc.chars().count() > DESCRIPTION_LIMIT {
        let mut out: String = desc.chars().take(DESCRIPTION_LIMIT).collect();
        out.push_str("...");
        out
    } else {
        desc.to_string()
    }
}

/// Exactly 4 fractional digits, rounded.
pub(crate) fn format_rate(rate: f64) -> String {
    format!("{:.4}", rate)
}

/// Render the digest as one self-contained HTML document.
///
/// Input order is preserved throughout; missing optional article fields
/// fall back to their documented defaults, so this never fails.
pub fn render(digest: &Digest) -> String {
    let generated = digest.generated_at.format("%Y-%m-%d %H:%M:%S");

    let mut fx_html = String::new();
    if !digest.fx.rates.is_empty() {
        let _ = write!(fx_html, "<p><b>Base:</b> {}</p><ul>", digest.fx.base);
        for (code, rate) in &digest.fx.rates {
            let _ = write!(fx_html, "<li>{}: {}</li>", code, format_rate(*rate));
        }
        fx_html.push_str("</ul>");
    }

    let mut news_html = String::new();
    for (i, article) in digest.articles.iter().take(MAX_ARTICLES).enumerate() {
        let _ = write!(
            news_html,
            "<h3>{}. {}</h3><p><b>Source:</b> {} | <b>Published:</b> {}</p><p>{}</p>",
            i + 1,
            article.title(),
            article.source_id(),
            article.pub_date(),
            truncate_description(article.description()),
        );
        if !article.link().is_empty() {
            let _ = write!(
                news_html,
                "<p><a href=\"{}\">Read more</a></p>",
                article.link()
            );
        }
        news_html.push_str("<hr>");
    }

    format!(
        "<html><head><meta charset=\"utf-8\"></head><body>\
         <h1>Finance Digest</h1><p>Generated at {generated}</p>\
         <h2>FX Snapshot</h2>{fx_html}\
         <h2>Top Business News</h2>{news_html}\
         </body></html>"
    )
}
