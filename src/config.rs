//! Site configuration module.
//!
//! Handles loading and validating `cardstock.toml`. One file drives both
//! pipelines: the `[site]` identity block feeds the feed channel header
//! and the card caption, `[themes.*]` is the slug → visual-theme table for
//! card generation, and `[palettes.*]` holds named color schemes for the
//! clean style.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "content"        # Front-matter directory for the feed
//!
//! [site]
//! title = "A Blog"
//! description = ""
//! root = "https://example.com"    # No trailing slash
//! author = ""                     # Card caption + feed contact name
//! email = ""                      # Feed managingEditor/webMaster address
//! language = "en-us"
//!
//! [thumbs]
//! out_dir = "public/images/blog"  # One {slug}.png per theme entry
//! style = "sketch"                # "sketch" or "clean"
//!
//! [feed]
//! out_dir = "public"              # Directory the feed is written into
//! path = "rss.xml"                # File name; self link {root}/{path}
//! image_path = "favicon.svg"      # Channel image, relative to site root
//!
//! [processing]
//! max_processes = 4               # Omit for auto = CPU cores
//!
//! # Theme table: one entry per card
//! [themes.my-first-post]
//! title = "My First Post"
//! kinds = ["lightbulb", "papers", "chart"]
//! color = "#059669"               # Or: palette = "emerald"
//!
//! [palettes.emerald]
//! primary = "#059669"
//! secondary = "#34d399"
//! background = "#ecfdf5"
//! dark = "#064e3b"
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown
//! keys are rejected to catch typos early. Unknown `kinds` tags are NOT
//! rejected: they render the generic fallback shape, and `check` lists
//! them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::STYLE_NAMES;
use crate::types::{Palette, Rgb};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `cardstock.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path to the directory of front-matter content files.
    pub content_root: String,
    /// Site identity: feed channel header and card caption.
    pub site: SiteSection,
    /// Card generation settings.
    pub thumbs: ThumbsSection,
    /// Feed output settings.
    pub feed: FeedSection,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
    /// Slug → visual theme. Each entry becomes one card.
    pub themes: BTreeMap<String, ThemeEntry>,
    /// Named color schemes referenced by theme entries.
    pub palettes: BTreeMap<String, PaletteSpec>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: "content".to_string(),
            site: SiteSection::default(),
            thumbs: ThumbsSection::default(),
            feed: FeedSection::default(),
            processing: ProcessingConfig::default(),
            themes: BTreeMap::new(),
            palettes: BTreeMap::new(),
        }
    }
}

/// Site identity block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    pub title: String,
    pub description: String,
    /// Absolute site root URL, no trailing slash. Permalinks are
    /// `{root}/blog/{slug}/`.
    pub root: String,
    /// Shown as the card caption and as the feed contact name.
    pub author: String,
    /// Feed contact address; the feed emits `email (author)`.
    pub email: String,
    pub language: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "A Blog".to_string(),
            description: String::new(),
            root: "https://example.com".to_string(),
            author: String::new(),
            email: String::new(),
            language: "en-us".to_string(),
        }
    }
}

/// Card generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbsSection {
    /// Output directory, created recursively. One `{slug}.png` per entry.
    pub out_dir: String,
    /// Rendering style name (see `cardstock check` for the list).
    pub style: String,
}

impl Default for ThumbsSection {
    fn default() -> Self {
        Self {
            out_dir: "public/images/blog".to_string(),
            style: "sketch".to_string(),
        }
    }
}

/// Feed output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedSection {
    /// Directory the feed file is written into.
    pub out_dir: String,
    /// Feed file name under `out_dir`, also the channel's self link as
    /// `{site.root}/{path}`.
    pub path: String,
    /// Channel image, relative to the site root.
    pub image_path: String,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            out_dir: "public".to_string(),
            path: "rss.xml".to_string(),
            image_path: "favicon.svg".to_string(),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel card-rendering workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// One row of the theme table.
///
/// `kinds` tags select drawing routines; unknown tags draw the generic
/// fallback shape rather than failing. Exactly one color source is
/// required: an explicit `color`, or a `palette` name (the sketch style
/// strokes with the palette's primary in that case).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeEntry {
    /// Title lettered onto the card.
    pub title: String,
    /// Visual-kind tags, drawn left to right.
    #[serde(default)]
    pub kinds: Vec<String>,
    /// Stroke color as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Name of a `[palettes.*]` entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
}

/// A named color scheme, hex per channel. See [`crate::types::Palette`]
/// for what each slot means.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteSpec {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub dark: String,
}

impl PaletteSpec {
    fn resolve(&self, name: &str) -> Result<Palette, ConfigError> {
        Ok(Palette {
            primary: hex(&self.primary, || format!("palettes.{name}.primary"))?,
            secondary: hex(&self.secondary, || format!("palettes.{name}.secondary"))?,
            background: hex(&self.background, || format!("palettes.{name}.background"))?,
            dark: hex(&self.dark, || format!("palettes.{name}.dark"))?,
        })
    }
}

fn hex(value: &str, field: impl Fn() -> String) -> Result<Rgb, ConfigError> {
    Rgb::from_hex(value)
        .map_err(|e| ConfigError::Validation(format!("{}: {e}", field())))
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.root.is_empty() {
            return Err(ConfigError::Validation("site.root must not be empty".into()));
        }
        if self.site.root.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.root must not end with a slash".into(),
            ));
        }
        if !STYLE_NAMES.contains(&self.thumbs.style.as_str()) {
            return Err(ConfigError::Validation(format!(
                "thumbs.style {:?} is not one of {STYLE_NAMES:?}",
                self.thumbs.style
            )));
        }
        if self.feed.path.is_empty() || self.feed.path.starts_with('/') {
            return Err(ConfigError::Validation(
                "feed.path must be a relative file name".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        for (name, palette) in &self.palettes {
            palette.resolve(name)?;
        }
        for (slug, entry) in &self.themes {
            if entry.title.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "themes.{slug}: title must not be empty"
                )));
            }
            if entry.color.is_none() && entry.palette.is_none() {
                return Err(ConfigError::Validation(format!(
                    "themes.{slug}: set color or palette"
                )));
            }
            if let Some(color) = &entry.color {
                hex(color, || format!("themes.{slug}.color"))?;
            }
            if let Some(palette) = &entry.palette {
                if !self.palettes.contains_key(palette) {
                    return Err(ConfigError::Validation(format!(
                        "themes.{slug}: palette {palette:?} is not defined"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Stroke color for a theme entry: its `color`, else its palette's
    /// primary. Cannot fail after [`SiteConfig::validate`].
    pub fn theme_stroke(&self, entry: &ThemeEntry) -> Result<Rgb, ConfigError> {
        if let Some(color) = &entry.color {
            return hex(color, || "theme color".to_string());
        }
        let name = entry.palette.as_deref().ok_or_else(|| {
            ConfigError::Validation("theme entry has neither color nor palette".into())
        })?;
        let spec = self.palettes.get(name).ok_or_else(|| {
            ConfigError::Validation(format!("palette {name:?} is not defined"))
        })?;
        hex(&spec.primary, || format!("palettes.{name}.primary"))
    }

    /// Full palette for a theme entry: the named palette, else one
    /// derived from its stroke color.
    pub fn theme_palette(&self, entry: &ThemeEntry) -> Result<Palette, ConfigError> {
        if let Some(name) = entry.palette.as_deref() {
            let spec = self.palettes.get(name).ok_or_else(|| {
                ConfigError::Validation(format!("palette {name:?} is not defined"))
            })?;
            return spec.resolve(name);
        }
        Ok(Palette::derive(self.theme_stroke(entry)?))
    }

    /// Permalink for a content slug: `{root}/blog/{slug}/`.
    pub fn permalink(&self, slug: &str) -> String {
        format!("{}/blog/{}/", self.site.root, slug)
    }

    /// Absolute URL of the feed document itself.
    pub fn feed_url(&self) -> String {
        format!("{}/{}", self.site.root, self.feed.path)
    }

    /// Absolute URL of the channel image.
    pub fn feed_image_url(&self) -> String {
        format!("{}/{}", self.site.root, self.feed.image_path)
    }

    /// Filesystem path the feed document is written to.
    pub fn feed_file(&self) -> std::path::PathBuf {
        Path::new(&self.feed.out_dir).join(&self.feed.path)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given `cardstock.toml` path.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `cardstock.toml` with all keys and
/// explanations, plus a small working theme table.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Cardstock Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Scalar values shown below are the defaults; the theme and palette
# tables are samples to edit.
# Unknown keys will cause an error.

# Directory of content files (YAML front matter over Markdown) that feed
# the RSS document.
content_root = "content"

# ---------------------------------------------------------------------------
# Site identity (feed channel header, card caption)
# ---------------------------------------------------------------------------
[site]
title = "A Blog"
description = ""

# Absolute site root, no trailing slash. Post permalinks become
# {root}/blog/{slug}/.
root = "https://example.com"

# Caption lettered at the bottom of every card, and the contact name in
# the feed header.
author = "Your Name"
email = "you@example.com"
language = "en-us"

# ---------------------------------------------------------------------------
# Card generation
# ---------------------------------------------------------------------------
[thumbs]
# Output directory, created if missing. One {slug}.png per theme entry.
out_dir = "public/images/blog"

# "sketch" draws jittered hand-drawn strokes; "clean" draws flat
# geometry over a palette gradient.
style = "sketch"

# ---------------------------------------------------------------------------
# Feed output
# ---------------------------------------------------------------------------
[feed]
# Directory the feed file is written into.
out_dir = "public"

# File name under out_dir; also the channel's self link {root}/{path}.
path = "rss.xml"

# Channel image URL, relative to the site root.
image_path = "favicon.svg"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel card-rendering workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4

# ---------------------------------------------------------------------------
# Theme table: one card per entry, file name {slug}.png
# ---------------------------------------------------------------------------
# kinds tags pick the drawing routines, left to right. Tags without a
# dedicated routine (e.g. "pins") draw a generic shape instead;
# `cardstock check` lists which tags will fall back.

[themes.ai-screening-validation]
title = "AI Screening"
kinds = ["magnifier", "document", "checkmark"]
color = "#059669"

[themes.rag-system-research-documents]
title = "RAG Systems"
kinds = ["database", "search", "lightbulb"]
color = "#0891b2"

[themes.temperature-mortality-brazil]
title = "Climate & Health"
kinds = ["thermometer", "heart", "chart"]
color = "#ea580c"

[themes.mapping-research-institutions-fcas]
title = "Institution Mapping"
kinds = ["globe", "pins", "network"]
palette = "blueprint"

# ---------------------------------------------------------------------------
# Palettes for the clean style (and for entries without a color)
# ---------------------------------------------------------------------------
[palettes.blueprint]
primary = "#2563eb"
secondary = "#93c5fd"
background = "#eff6ff"
dark = "#1e3a8a"

[palettes.emerald]
primary = "#059669"
secondary = "#34d399"
background = "#ecfdf5"
dark = "#064e3b"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_site_identity() {
        let config = SiteConfig::default();
        assert_eq!(config.site.title, "A Blog");
        assert_eq!(config.site.root, "https://example.com");
        assert_eq!(config.site.language, "en-us");
        assert_eq!(config.content_root, "content");
    }

    #[test]
    fn default_config_has_pipeline_settings() {
        let config = SiteConfig::default();
        assert_eq!(config.thumbs.out_dir, "public/images/blog");
        assert_eq!(config.thumbs.style, "sketch");
        assert_eq!(config.feed.path, "rss.xml");
        assert_eq!(config.feed_file(), Path::new("public/rss.xml"));
        assert!(config.themes.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[site]
title = "Field Notes"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.site.title, "Field Notes");
        // Default values preserved
        assert_eq!(config.site.root, "https://example.com");
        assert_eq!(config.thumbs.style, "sketch");
    }

    #[test]
    fn parse_theme_table() {
        let toml = r##"
[themes.ai-screening-validation]
title = "AI Screening"
kinds = ["magnifier", "document", "checkmark"]
color = "#059669"

[themes.ai-ethics-impact-evaluation]
title = "AI Ethics"
kinds = ["scale", "brain", "heart"]
color = "#7c3aed"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.themes.len(), 2);
        let entry = &config.themes["ai-screening-validation"];
        assert_eq!(entry.title, "AI Screening");
        assert_eq!(entry.kinds, vec!["magnifier", "document", "checkmark"]);
        assert_eq!(entry.color.as_deref(), Some("#059669"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml = r##"
[site]
tittle = "typo"
"##;
        assert!(toml::from_str::<SiteConfig>(toml).is_err());
    }

    #[test]
    fn validate_rejects_trailing_slash_root() {
        let mut config = SiteConfig::default();
        config.site.root = "https://example.com/".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_unknown_style() {
        let mut config = SiteConfig::default();
        config.thumbs.style = "oil-painting".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_workers() {
        let mut config = SiteConfig::default();
        config.processing.max_processes = Some(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
        config.processing.max_processes = Some(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_theme_colors() {
        let mut config = SiteConfig::default();
        config.themes.insert(
            "post".to_string(),
            ThemeEntry {
                title: "Post".to_string(),
                kinds: vec!["chart".to_string()],
                color: Some("#xyzxyz".to_string()),
                palette: None,
            },
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_colorless_entries_and_dangling_palettes() {
        let mut config = SiteConfig::default();
        config.themes.insert(
            "post".to_string(),
            ThemeEntry {
                title: "Post".to_string(),
                kinds: vec![],
                color: None,
                palette: None,
            },
        );
        assert!(config.validate().is_err());

        config.themes.get_mut("post").unwrap().palette = Some("missing".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn theme_stroke_prefers_color_then_palette_primary() {
        let toml = r##"
[themes.a]
title = "A"
color = "#dc2626"

[themes.b]
title = "B"
palette = "emerald"

[palettes.emerald]
primary = "#059669"
secondary = "#34d399"
background = "#ecfdf5"
dark = "#064e3b"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        config.validate().unwrap();
        assert_eq!(
            config.theme_stroke(&config.themes["a"]).unwrap(),
            Rgb::new(0xdc, 0x26, 0x26)
        );
        assert_eq!(
            config.theme_stroke(&config.themes["b"]).unwrap(),
            Rgb::new(0x05, 0x96, 0x69)
        );
    }

    #[test]
    fn theme_palette_resolves_or_derives() {
        let toml = r##"
[themes.named]
title = "Named"
palette = "emerald"

[themes.derived]
title = "Derived"
color = "#2563eb"

[palettes.emerald]
primary = "#059669"
secondary = "#34d399"
background = "#ecfdf5"
dark = "#064e3b"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        config.validate().unwrap();

        let named = config.theme_palette(&config.themes["named"]).unwrap();
        assert_eq!(named.primary, Rgb::new(0x05, 0x96, 0x69));
        assert_eq!(named.dark, Rgb::new(0x06, 0x4e, 0x3b));

        let derived = config.theme_palette(&config.themes["derived"]).unwrap();
        assert_eq!(derived, Palette::derive(Rgb::new(0x25, 0x63, 0xeb)));
    }

    #[test]
    fn permalink_and_feed_urls() {
        let config = SiteConfig::default();
        assert_eq!(
            config.permalink("ai-screening-validation"),
            "https://example.com/blog/ai-screening-validation/"
        );
        assert_eq!(config.feed_url(), "https://example.com/rss.xml");
        assert_eq!(config.feed_image_url(), "https://example.com/favicon.svg");
    }

    #[test]
    fn merge_overlays_nested_tables() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r##"
[site]
title = "Overlaid"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let config: SiteConfig = merged.try_into().unwrap();
        assert_eq!(config.site.title, "Overlaid");
        // Sibling keys survive the merge.
        assert_eq!(config.site.root, "https://example.com");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("cardstock.toml")).unwrap();
        assert_eq!(config.site.title, "A Blog");
        assert!(config.themes.is_empty());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cardstock.toml");
        fs::write(
            &path,
            r##"
[site]
title = "Field Notes"
root = "https://notes.example.org"

[themes.small_sample]
title = "Small Samples"
kinds = ["chart", "dots", "stats"]
color = "#dc2626"
"##,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.site.title, "Field Notes");
        assert_eq!(
            config.permalink("small_sample"),
            "https://notes.example.org/blog/small_sample/"
        );
        assert_eq!(config.themes["small_sample"].kinds.len(), 3);
        // Unspecified values should be defaults
        assert_eq!(config.feed.path, "rss.xml");
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cardstock.toml");
        fs::write(
            &path,
            r##"
[thumbs]
style = "no-such-style"
"##,
        )
        .unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_parses_and_validates() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        config.validate().unwrap();
        assert!(config.themes.len() >= 3);
        assert!(config.palettes.contains_key("blueprint"));
        // The sample table deliberately includes tags that fall back.
        let mapping = &config.themes["mapping-research-institutions-fcas"];
        assert!(mapping.kinds.iter().any(|k| k == "pins"));
    }
}
