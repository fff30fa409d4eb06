//! Batch card generation.
//!
//! Takes the theme table from config and renders one PNG per slug into
//! the output directory:
//!
//! ```text
//! public/images/blog/
//! ├── ai-screening-validation.png
//! ├── rag-system-research-documents.png
//! └── ...
//! ```
//!
//! Slugs render in parallel through [rayon](https://docs.rs/rayon). A
//! slug that fails to render or write is reported and skipped; the rest
//! of the batch continues. Only failure to create the output directory
//! aborts the run.
//!
//! Progress events go out through an optional channel so the caller can
//! print them from a single thread while workers stay quiet.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use rayon::prelude::*;
use thiserror::Error;

use crate::config::{ConfigError, SiteConfig, ThemeEntry};
use crate::render::{self, Style};

#[derive(Error, Debug)]
pub enum ThumbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("unknown style {0:?}")]
    UnknownStyle(String),
}

/// Per-slug progress events, emitted as workers finish.
#[derive(Debug, Clone)]
pub enum CardEvent {
    Generated { slug: String, path: PathBuf },
    Failed { slug: String, message: String },
}

/// Outcome counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub generated: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.generated + self.failed
    }
}

fn render_card(
    style: &dyn Style,
    config: &SiteConfig,
    slug: &str,
    entry: &ThemeEntry,
    out_dir: &Path,
) -> Result<PathBuf, ThumbError> {
    let canvas = style.render(slug, entry, config)?;
    let path = out_dir.join(format!("{slug}.png"));
    canvas.save(&path)?;
    Ok(path)
}

/// Render every theme entry into `out_dir`, one `{slug}.png` each.
///
/// Individual failures are sent as [`CardEvent::Failed`] and counted;
/// the run itself only errors when the style is unknown or the output
/// directory cannot be created.
pub fn generate_cards(
    config: &SiteConfig,
    out_dir: &Path,
    events: Option<Sender<CardEvent>>,
) -> Result<RunSummary, ThumbError> {
    let style = render::style_for(&config.thumbs.style)
        .ok_or_else(|| ThumbError::UnknownStyle(config.thumbs.style.clone()))?;

    fs::create_dir_all(out_dir)?;

    let outcomes: Vec<bool> = config
        .themes
        .par_iter()
        .map(|(slug, entry)| {
            match render_card(style.as_ref(), config, slug, entry, out_dir) {
                Ok(path) => {
                    if let Some(tx) = &events {
                        tx.send(CardEvent::Generated {
                            slug: slug.clone(),
                            path,
                        })
                        .ok();
                    }
                    true
                }
                Err(err) => {
                    if let Some(tx) = &events {
                        tx.send(CardEvent::Failed {
                            slug: slug.clone(),
                            message: err.to_string(),
                        })
                        .ok();
                    }
                    false
                }
            }
        })
        .collect();

    let generated = outcomes.iter().filter(|ok| **ok).count();
    Ok(RunSummary {
        generated,
        failed: outcomes.len() - generated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use tempfile::TempDir;

    use crate::render::{CARD_HEIGHT, CARD_WIDTH};
    use crate::test_helpers::{sample_config, theme_entry};

    #[test]
    fn generates_one_png_per_theme() {
        let tmp = TempDir::new().unwrap();
        let config = sample_config();
        let out_dir = tmp.path().join("cards");

        let summary = generate_cards(&config, &out_dir, None).unwrap();
        assert_eq!(summary.generated, config.themes.len());
        assert_eq!(summary.failed, 0);

        for slug in config.themes.keys() {
            let path = out_dir.join(format!("{slug}.png"));
            assert!(path.exists(), "missing {}", path.display());
            let dims = image::image_dimensions(&path).unwrap();
            assert_eq!(dims, (CARD_WIDTH, CARD_HEIGHT));
        }
    }

    #[test]
    fn reruns_produce_identical_bytes() {
        let tmp = TempDir::new().unwrap();
        let config = sample_config();
        let first_dir = tmp.path().join("first");
        let second_dir = tmp.path().join("second");

        generate_cards(&config, &first_dir, None).unwrap();
        generate_cards(&config, &second_dir, None).unwrap();

        for slug in config.themes.keys() {
            let first = fs::read(first_dir.join(format!("{slug}.png"))).unwrap();
            let second = fs::read(second_dir.join(format!("{slug}.png"))).unwrap();
            assert_eq!(first, second, "output for {slug} drifted between runs");
        }
    }

    #[test]
    fn one_bad_entry_does_not_stop_the_batch() {
        let tmp = TempDir::new().unwrap();
        let mut config = sample_config();
        // Bypasses validation on purpose: render must cope anyway.
        config.themes.insert(
            "broken".to_string(),
            ThemeEntry {
                title: "Broken".to_string(),
                kinds: vec!["chart".to_string()],
                color: Some("#nothex".to_string()),
                palette: None,
            },
        );
        let good = config.themes.len() - 1;
        let out_dir = tmp.path().join("cards");

        let (tx, rx) = mpsc::channel();
        let summary = generate_cards(&config, &out_dir, Some(tx)).unwrap();
        assert_eq!(summary.generated, good);
        assert_eq!(summary.failed, 1);
        assert!(!out_dir.join("broken.png").exists());

        let events: Vec<CardEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), config.themes.len());
        let failures: Vec<&CardEvent> = events
            .iter()
            .filter(|e| matches!(e, CardEvent::Failed { .. }))
            .collect();
        assert_eq!(failures.len(), 1);
        match failures[0] {
            CardEvent::Failed { slug, .. } => assert_eq!(slug, "broken"),
            CardEvent::Generated { .. } => unreachable!(),
        }
    }

    #[test]
    fn unwritable_output_dir_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let in_the_way = tmp.path().join("cards");
        fs::write(&in_the_way, "not a directory").unwrap();

        let config = sample_config();
        let result = generate_cards(&config, &in_the_way, None);
        assert!(matches!(result, Err(ThumbError::Io(_))));
    }

    #[test]
    fn unknown_style_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let mut config = sample_config();
        config.thumbs.style = "gouache".to_string();
        let result = generate_cards(&config, tmp.path(), None);
        assert!(matches!(result, Err(ThumbError::UnknownStyle(_))));
    }

    #[test]
    fn empty_theme_table_is_a_quiet_success() {
        let tmp = TempDir::new().unwrap();
        let mut config = sample_config();
        config.themes.clear();
        let summary = generate_cards(&config, tmp.path(), None).unwrap();
        assert_eq!(summary, RunSummary::default());
    }

    #[test]
    fn clean_style_runs_through_the_same_driver() {
        let tmp = TempDir::new().unwrap();
        let mut config = sample_config();
        config.thumbs.style = "clean".to_string();
        config.themes.insert(
            "palette-card".to_string(),
            theme_entry("Palette Card", &["globe", "chart"], "#2563eb"),
        );
        let out_dir = tmp.path().join("cards");
        let summary = generate_cards(&config, &out_dir, None).unwrap();
        assert_eq!(summary.failed, 0);
        assert!(out_dir.join("palette-card.png").exists());
    }
}
