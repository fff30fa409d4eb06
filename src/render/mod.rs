//! Procedural card rendering.
//!
//! A card is a 1200×630 RGB raster built entirely from primitive draw
//! calls; no fonts or image assets are read from disk. Two interchangeable
//! styles implement the [`Style`] strategy:
//!
//! | Style    | Look                                              | Module   |
//! |----------|---------------------------------------------------|----------|
//! | `sketch` | hand-drawn: jittered strokes, hachure, paper grain | [`sketch`] |
//! | `clean`  | flat geometry over a palette gradient              | [`clean`]  |
//!
//! Supporting modules: [`rng`] (per-slug seeded randomness), [`icons`]
//! (the visual-kind drawing routines), [`text`] (built-in stroke font).
//!
//! Rendering never fails for drawing reasons. The only error a style can
//! return is a config-resolution error (bad hex color, dangling palette
//! reference), and config validation rejects those up front.

pub mod clean;
pub mod icons;
pub mod rng;
pub mod sketch;
pub mod text;

use crate::config::{ConfigError, SiteConfig, ThemeEntry};

/// Social-card width in pixels (the Open Graph standard size).
pub const CARD_WIDTH: u32 = 1200;
/// Social-card height in pixels.
pub const CARD_HEIGHT: u32 = 630;

/// The raster a style draws into. One per slug, never shared.
pub type Canvas = image::RgbImage;

/// A rendering strategy. Implementations must be pure: same slug, entry,
/// and config always produce the same pixels.
pub trait Style: Sync {
    /// Name accepted by config `thumbs.style` and the `--style` flag.
    fn name(&self) -> &'static str;

    /// Renders the card for one theme entry.
    fn render(
        &self,
        slug: &str,
        entry: &ThemeEntry,
        config: &SiteConfig,
    ) -> Result<Canvas, ConfigError>;
}

/// Looks up a style by config name.
pub fn style_for(name: &str) -> Option<Box<dyn Style>> {
    match name {
        "sketch" => Some(Box::new(sketch::SketchStyle)),
        "clean" => Some(Box::new(clean::CleanStyle)),
        _ => None,
    }
}

/// Names accepted by [`style_for`], for error messages and `check`.
pub const STYLE_NAMES: &[&str] = &["sketch", "clean"];
