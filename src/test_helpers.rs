//! Shared test utilities for the cardstock test suite.
//!
//! Builders for configs, theme entries, and content records so tests can
//! set up realistic inputs in a line or two.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut config = sample_config();
//! config.themes.insert(
//!     "mapping".to_string(),
//!     theme_entry("Mapping", &["globe", "pins"], "#2563eb"),
//! );
//! let records = vec![post("mapping", "Mapping", 2025, 3, 2)];
//! ```

use chrono::NaiveDate;

use crate::config::{PaletteSpec, SiteConfig, ThemeEntry};
use crate::types::ContentRecord;

/// A small validated config: full site identity, two sketch themes with
/// known tags, one palette.
pub fn sample_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.site.title = "Field Notes".to_string();
    config.site.description = "Notes on evidence, methods, and tooling.".to_string();
    config.site.root = "https://notes.example.org".to_string();
    config.site.author = "Casey Reader".to_string();
    config.site.email = "casey@example.org".to_string();
    config.themes.insert(
        "ai-screening-validation".to_string(),
        theme_entry(
            "AI Screening",
            &["magnifier", "document", "checkmark"],
            "#059669",
        ),
    );
    config.themes.insert(
        "rag-system-research-documents".to_string(),
        theme_entry("RAG Systems", &["database", "search", "lightbulb"], "#0891b2"),
    );
    config.palettes.insert(
        "emerald".to_string(),
        PaletteSpec {
            primary: "#059669".to_string(),
            secondary: "#34d399".to_string(),
            background: "#ecfdf5".to_string(),
            dark: "#064e3b".to_string(),
        },
    );
    config.validate().expect("sample config must validate");
    config
}

/// Theme entry with an explicit stroke color.
pub fn theme_entry(title: &str, kinds: &[&str], color: &str) -> ThemeEntry {
    ThemeEntry {
        title: title.to_string(),
        kinds: kinds.iter().map(|k| k.to_string()).collect(),
        color: Some(color.to_string()),
        palette: None,
    }
}

/// Published post with the given date; no subtitle, summary, or tags.
pub fn post(slug: &str, title: &str, year: i32, month: u32, day: u32) -> ContentRecord {
    ContentRecord {
        slug: slug.to_string(),
        title: title.to_string(),
        subtitle: None,
        summary: None,
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid date"),
        tags: Vec::new(),
        categories: Vec::new(),
        featured: false,
        draft: false,
    }
}
