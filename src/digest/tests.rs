use std::collections::BTreeMap;
use std::collections::HashSet;

use super::compose;
use super::dedup::{dedup_articles, identity};
use crate::types::{ArticleRecord, Digest, FxSnapshot};

fn article(title: &str, link: &str) -> ArticleRecord {
    ArticleRecord {
        title: Some(title.to_string()),
        link: Some(link.to_string()),
        source_id: None,
        pub_date: None,
        description: None,
    }
}

fn digest(articles: Vec<ArticleRecord>, rates: &[(&str, f64)]) -> Digest {
    Digest {
        articles,
        fx: FxSnapshot {
            base: "USD".to_string(),
            rates: rates
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect::<BTreeMap<_, _>>(),
            last_updated: None,
        },
        generated_at: chrono::Local::now(),
    }
}

#[test]
fn dedup_collapses_normalized_title_link() {
    let input = vec![
        article("A", "x"),
        article("a", " X "),
        article("B", "y"),
    ];

    let out = dedup_articles(input);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].title(), "A");
    assert_eq!(out[0].link(), "x");
    assert_eq!(out[1].title(), "B");
}

#[test]
fn dedup_is_idempotent() {
    let input = vec![article("A", "x"), article("A", "x"), article("B", "y")];

    let once = dedup_articles(input);
    let twice = dedup_articles(once.clone());

    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(identity(a), identity(b));
    }
}

#[test]
fn dedup_preserves_relative_order() {
    let input = vec![
        article("C", "3"),
        article("A", "1"),
        article("C", "3"),
        article("B", "2"),
        article("A", "1"),
    ];

    let out = dedup_articles(input.clone());

    // Output must be a subsequence of the input.
    let mut input_iter = input.iter();
    for kept in &out {
        assert!(
            input_iter.any(|orig| identity(orig) == identity(kept)),
            "output is not a subsequence of the input"
        );
    }

    let titles: Vec<&str> = out.iter().map(|a| a.title()).collect();
    assert_eq!(titles, vec!["C", "A", "B"]);
}

#[test]
fn dedup_output_digests_are_unique() {
    let input = vec![
        article("A", "x"),
        article("a", "X"),
        article("B", "y"),
        article("", ""),
        article(" ", ""),
    ];

    let out = dedup_articles(input);

    let mut seen = HashSet::new();
    for a in &out {
        assert!(seen.insert(identity(a)), "duplicate digest in output");
    }
}

#[test]
fn articles_with_no_identity_signal_collapse_to_one() {
    let empty = ArticleRecord {
        title: None,
        link: None,
        source_id: Some("alpha".to_string()),
        pub_date: None,
        description: None,
    };
    let also_empty = ArticleRecord {
        title: Some("   ".to_string()),
        link: Some("".to_string()),
        source_id: Some("beta".to_string()),
        pub_date: None,
        description: None,
    };

    let out = dedup_articles(vec![empty, also_empty]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].source_id(), "alpha");
}

#[test]
fn composer_renders_at_most_ten_articles() {
    let articles: Vec<ArticleRecord> = (0..25)
        .map(|i| article(&format!("Article {i}"), &format!("https://e.com/{i}")))
        .collect();

    let html = compose::render(&digest(articles, &[]));

    assert_eq!(html.matches("<h3>").count(), compose::MAX_ARTICLES);
    assert!(html.contains("<h3>1. Article 0</h3>"));
    assert!(html.contains("<h3>10. Article 9</h3>"));
    assert!(!html.contains("Article 10"));
}

#[test]
fn description_truncated_at_300_chars_with_ellipsis() {
    let long = "x".repeat(301);
    assert_eq!(
        compose::truncate_description(&long),
        format!("{}...", "x".repeat(300))
    );

    let exact = "y".repeat(300);
    assert_eq!(compose::truncate_description(&exact), exact);

    assert_eq!(compose::truncate_description("short"), "short");
}

#[test]
fn truncation_counts_chars_not_bytes() {
    let long: String = "é".repeat(301);
    let rendered = compose::truncate_description(&long);
    assert_eq!(rendered.chars().count(), 303);
    assert!(rendered.ends_with("..."));
}

#[test]
fn rates_render_with_exactly_four_decimals() {
    assert_eq!(compose::format_rate(31.2), "31.2000");
    assert_eq!(compose::format_rate(0.128956), "0.1290");
}

#[test]
fn fx_section_rendered_from_snapshot() {
    let html = compose::render(&digest(vec![], &[("JPY", 146.91), ("TWD", 31.2)]));

    assert!(html.contains("<p><b>Base:</b> USD</p>"));
    assert!(html.contains("<li>JPY: 146.9100</li>"));
    assert!(html.contains("<li>TWD: 31.2000</li>"));
}

#[test]
fn empty_rates_render_no_fx_list() {
    let html = compose::render(&digest(vec![article("A", "x")], &[]));

    assert!(html.contains("<h2>FX Snapshot</h2>"));
    assert!(!html.contains("<ul>"));
    assert!(!html.contains("Base:"));
}

#[test]
fn missing_article_fields_render_documented_defaults() {
    let bare = ArticleRecord {
        title: None,
        link: None,
        source_id: None,
        pub_date: None,
        description: None,
    };

    let html = compose::render(&digest(vec![bare], &[]));

    assert!(html.contains("<h3>1. No title</h3>"));
    assert!(html.contains("<b>Source:</b> unknown"));
    assert!(!html.contains("Read more"));
}

#[test]
fn link_renders_read_more_anchor() {
    let html = compose::render(&digest(vec![article("A", "https://e.com/a")], &[]));
    assert!(html.contains("<a href=\"https://e.com/a\">Read more</a>"));
}

#[test]
fn generation_timestamp_is_embedded() {
    let d = digest(vec![], &[]);
    let html = compose::render(&d);
    let stamp = d.generated_at.format("%Y-%m-%d %H:%M:%S").to_string();
    assert!(html.contains(&format!("Generated at {stamp}")));
}
