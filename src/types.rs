//! Shared types used by both pipelines.
//!
//! Colors and visual kinds are consumed by the renderers, content records
//! by the feed serializer. Config-table rows live in [`crate::config`];
//! everything here is already validated/resolved.

use chrono::NaiveDate;
use thiserror::Error;

/// An sRGB color parsed from a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error, PartialEq)]
#[error("invalid hex color {0:?} (expected #rrggbb)")]
pub struct ColorParseError(pub String);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Parses `#rrggbb` (leading `#` optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError(hex.to_string()));
        }
        let byte = |range| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError(hex.to_string()))
        };
        Ok(Rgb {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }

    pub fn pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    /// Linear blend toward `other`; `t` is clamped to 0..=1.
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

/// A named color scheme for the clean rendering style.
///
/// Theme entries either reference one of these by name or carry a single
/// stroke color from which [`Palette::derive`] builds an equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Main motif and accent-bar color.
    pub primary: Rgb,
    /// Secondary motif and flourish color.
    pub secondary: Rgb,
    /// Top of the background gradient.
    pub background: Rgb,
    /// Title and caption text color.
    pub dark: Rgb,
}

impl Palette {
    const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    /// Builds a palette around a single stroke color, for theme entries
    /// that set `color` but name no palette.
    pub fn derive(color: Rgb) -> Palette {
        Palette {
            primary: color,
            secondary: color.mix(Self::WHITE, 0.45),
            background: color.mix(Self::WHITE, 0.92),
            dark: color.mix(Self::BLACK, 0.55),
        }
    }
}

/// Selector for the drawing routine used by a theme entry.
///
/// The set is closed: tags outside it map to [`VisualKind::Generic`],
/// which renders a plain filled circle, so theme tables may name kinds
/// that have no dedicated drawing routine yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    Magnifier,
    Document,
    Checkmark,
    Brain,
    Heart,
    Scale,
    Database,
    Search,
    Lightbulb,
    Funnel,
    Papers,
    Chart,
    Robot,
    Globe,
    Thermometer,
    Server,
    Map,
    /// Fallback for any tag not listed above.
    Generic,
}

impl VisualKind {
    /// Total mapping from a config tag to a drawing routine. Never fails;
    /// unknown tags render the generic shape.
    pub fn parse(tag: &str) -> VisualKind {
        match tag {
            "magnifier" => VisualKind::Magnifier,
            "document" => VisualKind::Document,
            "checkmark" => VisualKind::Checkmark,
            "brain" => VisualKind::Brain,
            "heart" => VisualKind::Heart,
            "scale" => VisualKind::Scale,
            "database" => VisualKind::Database,
            "search" => VisualKind::Search,
            "lightbulb" => VisualKind::Lightbulb,
            "funnel" => VisualKind::Funnel,
            "papers" => VisualKind::Papers,
            "chart" => VisualKind::Chart,
            "robot" => VisualKind::Robot,
            "globe" => VisualKind::Globe,
            "thermometer" => VisualKind::Thermometer,
            "server" => VisualKind::Server,
            "map" => VisualKind::Map,
            _ => VisualKind::Generic,
        }
    }

    /// Whether `tag` selects a dedicated routine (or is the literal
    /// `generic`). Used by `check` to flag tags that will fall back.
    pub fn is_known(tag: &str) -> bool {
        tag == "generic" || Self::parse(tag) != VisualKind::Generic
    }
}

/// One published (or draft) piece of content, as loaded from front matter.
///
/// `date` is mandatory at load time, so every record reaching the feed
/// serializer carries a valid date by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRecord {
    /// URL-safe identifier, derived from the source file stem.
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub summary: Option<String>,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub featured: bool,
    pub draft: bool,
}

impl ContentRecord {
    /// Feed description: the summary, else the subtitle, else empty.
    pub fn description(&self) -> &str {
        self.summary
            .as_deref()
            .or(self.subtitle.as_deref())
            .unwrap_or("")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#059669"), Ok(Rgb::new(0x05, 0x96, 0x69)));
        assert_eq!(Rgb::from_hex("dc2626"), Ok(Rgb::new(0xdc, 0x26, 0x26)));
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(Rgb::from_hex("#05966").is_err());
        assert!(Rgb::from_hex("#05966g").is_err());
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#05ß69").is_err());
    }

    #[test]
    fn mix_endpoints_and_midpoint() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Rgb::new(100, 50, 25));
        // Out-of-range t clamps rather than extrapolating.
        assert_eq!(a.mix(b, 2.0), b);
    }

    #[test]
    fn known_tags_map_to_their_routine() {
        assert_eq!(VisualKind::parse("magnifier"), VisualKind::Magnifier);
        assert_eq!(VisualKind::parse("thermometer"), VisualKind::Thermometer);
        assert_eq!(VisualKind::parse("map"), VisualKind::Map);
    }

    #[test]
    fn unknown_tags_fall_back_to_generic() {
        for tag in ["pins", "network", "solar", "calculator", ""] {
            assert_eq!(VisualKind::parse(tag), VisualKind::Generic, "tag {tag:?}");
        }
        assert!(!VisualKind::is_known("pins"));
        assert!(VisualKind::is_known("generic"));
        assert!(VisualKind::is_known("funnel"));
    }

    #[test]
    fn description_prefers_summary_then_subtitle() {
        let mut record = ContentRecord {
            slug: "s".into(),
            title: "t".into(),
            subtitle: Some("sub".into()),
            summary: Some("sum".into()),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            tags: vec![],
            categories: vec![],
            featured: false,
            draft: false,
        };
        assert_eq!(record.description(), "sum");
        record.summary = None;
        assert_eq!(record.description(), "sub");
        record.subtitle = None;
        assert_eq!(record.description(), "");
    }
}
