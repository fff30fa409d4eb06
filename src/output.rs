//! CLI output formatting for both pipelines.
//!
//! # Output Format
//!
//! ## Thumbs
//!
//! ```text
//! Generating 19 cards (sketch)
//! ✓ Generated: public/images/blog/ai-screening-validation.png
//! ✗ Failed: broken-entry: Config validation error: ...
//! Generated 18 cards, 1 failed
//! ```
//!
//! ## Feed
//!
//! ```text
//! Feed: public/rss.xml (12 posts, 2 drafts excluded)
//! ```
//!
//! ## Check
//!
//! ```text
//! Config
//!     19 themes, 2 palettes, style: sketch
//! Content
//!     14 posts (2 drafts)
//! Output
//!     cards: public/images/blog
//!     feed: public/rss.xml
//! Fallback tags
//!     mapping-research-institutions-fcas: pins, network
//! Unmatched
//!     post without a card: hidden-essay
//!     card without a post: retired-post
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returning a `String` or
//! `Vec<String>`) and a `print_*` wrapper that writes to stdout. Format
//! functions never touch the filesystem or the terminal themselves.

use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::thumbs::{CardEvent, RunSummary};
use crate::types::{ContentRecord, VisualKind};

// ============================================================================
// Thumbs output
// ============================================================================

/// Header line printed before the batch starts.
pub fn format_thumbs_header(count: usize, style: &str) -> String {
    format!("Generating {count} cards ({style})")
}

/// One line per card, as workers finish.
pub fn format_card_event(event: &CardEvent) -> String {
    match event {
        CardEvent::Generated { path, .. } => {
            format!("\u{2713} Generated: {}", path.display())
        }
        CardEvent::Failed { slug, message } => {
            format!("\u{2717} Failed: {slug}: {message}")
        }
    }
}

/// Closing line with batch totals.
pub fn format_run_summary(summary: &RunSummary) -> String {
    if summary.failed == 0 {
        format!("Generated {} cards", summary.generated)
    } else {
        format!(
            "Generated {} cards, {} failed",
            summary.generated, summary.failed
        )
    }
}

// ============================================================================
// Feed output
// ============================================================================

/// Summary line after the feed is written.
pub fn format_feed_summary(path: &Path, published: usize, drafts: usize) -> String {
    if drafts == 0 {
        format!("Feed: {} ({published} posts)", path.display())
    } else {
        format!(
            "Feed: {} ({published} posts, {drafts} drafts excluded)",
            path.display()
        )
    }
}

// ============================================================================
// Check output
// ============================================================================

/// What `check` found, ready for display.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub themes: usize,
    pub palettes: usize,
    pub style: String,
    pub posts: usize,
    pub drafts: usize,
    /// Where `thumbs` would write cards.
    pub cards_dir: String,
    /// Where `feed` would write the document.
    pub feed_file: PathBuf,
    /// Theme entries whose tags have no dedicated drawing routine,
    /// with the tags that will draw the generic shape.
    pub fallback_tags: Vec<(String, Vec<String>)>,
    /// Published posts with no matching theme entry.
    pub posts_without_card: Vec<String>,
    /// Theme entries with no matching published post.
    pub cards_without_post: Vec<String>,
}

/// Cross-reference the theme table against the loaded content.
pub fn build_check_report(config: &SiteConfig, records: &[ContentRecord]) -> CheckReport {
    let mut report = CheckReport {
        themes: config.themes.len(),
        palettes: config.palettes.len(),
        style: config.thumbs.style.clone(),
        posts: records.len(),
        drafts: records.iter().filter(|r| r.draft).count(),
        cards_dir: config.thumbs.out_dir.clone(),
        feed_file: config.feed_file(),
        ..CheckReport::default()
    };

    for (slug, entry) in &config.themes {
        let unknown: Vec<String> = entry
            .kinds
            .iter()
            .filter(|tag| !VisualKind::is_known(tag))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            report.fallback_tags.push((slug.clone(), unknown));
        }
    }

    for record in records {
        if !record.draft && !config.themes.contains_key(&record.slug) {
            report.posts_without_card.push(record.slug.clone());
        }
    }
    report.posts_without_card.sort();

    let published: std::collections::BTreeSet<&str> = records
        .iter()
        .filter(|r| !r.draft)
        .map(|r| r.slug.as_str())
        .collect();
    for slug in config.themes.keys() {
        if !published.contains(slug.as_str()) {
            report.cards_without_post.push(slug.clone());
        }
    }

    report
}

/// Format the check report as display lines.
pub fn format_check_report(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Config".to_string());
    lines.push(format!(
        "    {} themes, {} palettes, style: {}",
        report.themes, report.palettes, report.style
    ));

    lines.push("Content".to_string());
    lines.push(format!(
        "    {} posts ({} drafts)",
        report.posts, report.drafts
    ));

    lines.push("Output".to_string());
    lines.push(format!("    cards: {}", report.cards_dir));
    lines.push(format!("    feed: {}", report.feed_file.display()));

    if !report.fallback_tags.is_empty() {
        lines.push("Fallback tags".to_string());
        for (slug, tags) in &report.fallback_tags {
            lines.push(format!("    {}: {}", slug, tags.join(", ")));
        }
    }

    if !report.posts_without_card.is_empty() || !report.cards_without_post.is_empty() {
        lines.push("Unmatched".to_string());
        for slug in &report.posts_without_card {
            lines.push(format!("    post without a card: {slug}"));
        }
        for slug in &report.cards_without_post {
            lines.push(format!("    card without a post: {slug}"));
        }
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_report(report: &CheckReport) {
    for line in format_check_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
