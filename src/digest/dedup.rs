use std::collections::HashSet;

use sha2::{Digest as _, Sha256};

use crate::types::ArticleRecord;

/// Deduplication identity: SHA-256 over the lowercased concatenation of
/// the whitespace-trimmed title and link, absent fields as empty text.
///
/// Two articles with both fields empty share the identity of the empty
/// string and collapse to one; without any other identity signal from the
/// upstream API that is the intended outcome.
pub fn identity(article: &ArticleRecord) -> [u8; 32] {
    let normalized = format!(
        "{}{}",
        article.title.as_deref().unwrap_or("").trim(),
        article.link.as_deref().unwrap_or("").trim()
    )
    .to_lowercase();

    Sha256::digest(normalized.as_bytes()).into()
}

/// Remove duplicate articles, keeping the first occurrence and the
/// original relative order. Single pass, O(n) in the input length.
pub fn dedup_articles(articles: Vec<ArticleRecord>) -> Vec<ArticleRecord> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(articles.len());

    for article in articles {
        if seen.insert(identity(&article)) {
            out.push(article);
        }
    }

    out
}
