//! Built-in stroke font.
//!
//! Titles and captions are drawn from polyline glyph tables with the same
//! stroke engine as everything else, so no font files are read and the
//! output stays deterministic across machines. Glyphs cover A–Z, 0–9,
//! and common punctuation; input is uppercased before lookup and any
//! character without a glyph renders as a small empty box.
//!
//! Coordinates are in cap-height units: x grows right from the pen, y
//! runs 0.0 (cap line) to 1.0 (baseline). A glyph's `width` is its ink
//! width; tracking is added between glyphs by the layout routine.

use crate::render::sketch::{Sketcher, Stroke};
use crate::types::Rgb;

/// Cap height as a fraction of the nominal font size.
const CAP_RATIO: f32 = 0.7;
/// Gap between glyphs, in cap-height units.
const TRACKING: f32 = 0.16;
/// Advance for a space, in cap-height units.
const SPACE_ADVANCE: f32 = 0.5;

#[derive(Debug, Clone, Copy)]
struct Glyph {
    width: f32,
    strokes: &'static [&'static [(f32, f32)]],
}

const FALLBACK: Glyph = Glyph {
    width: 0.55,
    strokes: &[&[(0.0, 0.15), (0.55, 0.15), (0.55, 1.0), (0.0, 1.0), (0.0, 0.15)]],
};

/// Weight and posture of a text run.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub px: f32,
    pub color: Rgb,
    /// Stroke width in pixels; 3 reads as bold at title sizes.
    pub weight: f32,
    /// Rightward shear of ascenders, 0 for upright.
    pub slant: f32,
    pub roughness: f32,
}

impl TextStyle {
    /// Bold upright title lettering.
    pub fn title(color: Rgb) -> TextStyle {
        TextStyle {
            px: 32.0,
            color,
            weight: 3.0,
            slant: 0.0,
            roughness: 0.75,
        }
    }

    /// Light italic caption lettering.
    pub fn caption(color: Rgb) -> TextStyle {
        TextStyle {
            px: 18.0,
            color,
            weight: 1.0,
            slant: 0.18,
            roughness: 0.75,
        }
    }
}

/// Ink width of `text` in pixels under `style`.
pub fn measure(text: &str, style: &TextStyle) -> f32 {
    let cap = style.px * CAP_RATIO;
    let mut width = 0.0;
    let mut trailing_tracking = 0.0;
    for c in text.chars() {
        let c = c.to_ascii_uppercase();
        if c == ' ' {
            width += SPACE_ADVANCE * cap;
            trailing_tracking = 0.0;
        } else {
            let g = glyph(c).unwrap_or(FALLBACK);
            width += (g.width + TRACKING) * cap;
            trailing_tracking = TRACKING * cap;
        }
    }
    width - trailing_tracking
}

/// Draws `text` with its center at `cx`, sitting on `baseline`.
pub fn draw_centered(sk: &mut Sketcher, text: &str, cx: f32, baseline: f32, style: &TextStyle) {
    let cap = style.px * CAP_RATIO;
    let opts = Stroke::new(style.color)
        .width(style.weight)
        .roughness(style.roughness)
        .bowing(0.6);
    let mut pen = cx - measure(text, style) / 2.0;
    for c in text.chars() {
        let c = c.to_ascii_uppercase();
        if c == ' ' {
            pen += SPACE_ADVANCE * cap;
            continue;
        }
        let g = glyph(c).unwrap_or(FALLBACK);
        for stroke in g.strokes {
            for pair in stroke.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let ax = pen + (a.0 + style.slant * (1.0 - a.1)) * cap;
                let ay = baseline - (1.0 - a.1) * cap;
                let bx = pen + (b.0 + style.slant * (1.0 - b.1)) * cap;
                let by = baseline - (1.0 - b.1) * cap;
                sk.line(ax, ay, bx, by, &opts);
            }
        }
        pen += (g.width + TRACKING) * cap;
    }
}

#[rustfmt::skip]
fn glyph(c: char) -> Option<Glyph> {
    let g = match c {
        'A' => Glyph { width: 0.70, strokes: &[
            &[(0.0, 1.0), (0.35, 0.0), (0.70, 1.0)],
            &[(0.14, 0.65), (0.56, 0.65)]] },
        'B' => Glyph { width: 0.60, strokes: &[
            &[(0.0, 0.0), (0.0, 1.0)],
            &[(0.0, 0.0), (0.42, 0.0), (0.52, 0.08), (0.52, 0.42), (0.42, 0.50), (0.0, 0.50)],
            &[(0.0, 0.50), (0.45, 0.50), (0.60, 0.60), (0.60, 0.90), (0.45, 1.0), (0.0, 1.0)]] },
        'C' => Glyph { width: 0.65, strokes: &[
            &[(0.65, 0.15), (0.50, 0.0), (0.20, 0.0), (0.0, 0.20), (0.0, 0.80), (0.20, 1.0), (0.50, 1.0), (0.65, 0.85)]] },
        'D' => Glyph { width: 0.65, strokes: &[
            &[(0.0, 0.0), (0.0, 1.0)],
            &[(0.0, 0.0), (0.40, 0.0), (0.65, 0.25), (0.65, 0.75), (0.40, 1.0), (0.0, 1.0)]] },
        'E' => Glyph { width: 0.55, strokes: &[
            &[(0.55, 0.0), (0.0, 0.0), (0.0, 1.0), (0.55, 1.0)],
            &[(0.0, 0.50), (0.42, 0.50)]] },
        'F' => Glyph { width: 0.55, strokes: &[
            &[(0.55, 0.0), (0.0, 0.0), (0.0, 1.0)],
            &[(0.0, 0.50), (0.40, 0.50)]] },
        'G' => Glyph { width: 0.70, strokes: &[
            &[(0.65, 0.15), (0.50, 0.0), (0.20, 0.0), (0.0, 0.20), (0.0, 0.80), (0.20, 1.0), (0.50, 1.0), (0.70, 0.85), (0.70, 0.55), (0.42, 0.55)]] },
        'H' => Glyph { width: 0.65, strokes: &[
            &[(0.0, 0.0), (0.0, 1.0)],
            &[(0.65, 0.0), (0.65, 1.0)],
            &[(0.0, 0.50), (0.65, 0.50)]] },
        'I' => Glyph { width: 0.30, strokes: &[
            &[(0.15, 0.0), (0.15, 1.0)],
            &[(0.0, 0.0), (0.30, 0.0)],
            &[(0.0, 1.0), (0.30, 1.0)]] },
        'J' => Glyph { width: 0.50, strokes: &[
            &[(0.50, 0.0), (0.50, 0.80), (0.35, 1.0), (0.12, 1.0), (0.0, 0.85)]] },
        'K' => Glyph { width: 0.65, strokes: &[
            &[(0.0, 0.0), (0.0, 1.0)],
            &[(0.60, 0.0), (0.0, 0.55)],
            &[(0.20, 0.42), (0.65, 1.0)]] },
        'L' => Glyph { width: 0.55, strokes: &[
            &[(0.0, 0.0), (0.0, 1.0), (0.55, 1.0)]] },
        'M' => Glyph { width: 0.80, strokes: &[
            &[(0.0, 1.0), (0.0, 0.0), (0.40, 0.55), (0.80, 0.0), (0.80, 1.0)]] },
        'N' => Glyph { width: 0.70, strokes: &[
            &[(0.0, 1.0), (0.0, 0.0), (0.70, 1.0), (0.70, 0.0)]] },
        'O' => Glyph { width: 0.70, strokes: &[
            &[(0.20, 0.0), (0.50, 0.0), (0.70, 0.20), (0.70, 0.80), (0.50, 1.0), (0.20, 1.0), (0.0, 0.80), (0.0, 0.20), (0.20, 0.0)]] },
        'P' => Glyph { width: 0.60, strokes: &[
            &[(0.0, 1.0), (0.0, 0.0), (0.45, 0.0), (0.60, 0.10), (0.60, 0.40), (0.45, 0.50), (0.0, 0.50)]] },
        'Q' => Glyph { width: 0.70, strokes: &[
            &[(0.20, 0.0), (0.50, 0.0), (0.70, 0.20), (0.70, 0.80), (0.50, 1.0), (0.20, 1.0), (0.0, 0.80), (0.0, 0.20), (0.20, 0.0)],
            &[(0.45, 0.75), (0.75, 1.05)]] },
        'R' => Glyph { width: 0.65, strokes: &[
            &[(0.0, 1.0), (0.0, 0.0), (0.45, 0.0), (0.60, 0.10), (0.60, 0.40), (0.45, 0.50), (0.0, 0.50)],
            &[(0.30, 0.50), (0.65, 1.0)]] },
        'S' => Glyph { width: 0.60, strokes: &[
            &[(0.60, 0.12), (0.45, 0.0), (0.15, 0.0), (0.0, 0.12), (0.0, 0.38), (0.15, 0.50), (0.45, 0.50), (0.60, 0.62), (0.60, 0.88), (0.45, 1.0), (0.15, 1.0), (0.0, 0.88)]] },
        'T' => Glyph { width: 0.60, strokes: &[
            &[(0.0, 0.0), (0.60, 0.0)],
            &[(0.30, 0.0), (0.30, 1.0)]] },
        'U' => Glyph { width: 0.65, strokes: &[
            &[(0.0, 0.0), (0.0, 0.80), (0.20, 1.0), (0.45, 1.0), (0.65, 0.80), (0.65, 0.0)]] },
        'V' => Glyph { width: 0.70, strokes: &[
            &[(0.0, 0.0), (0.35, 1.0), (0.70, 0.0)]] },
        'W' => Glyph { width: 0.90, strokes: &[
            &[(0.0, 0.0), (0.22, 1.0), (0.45, 0.45), (0.68, 1.0), (0.90, 0.0)]] },
        'X' => Glyph { width: 0.65, strokes: &[
            &[(0.0, 0.0), (0.65, 1.0)],
            &[(0.65, 0.0), (0.0, 1.0)]] },
        'Y' => Glyph { width: 0.65, strokes: &[
            &[(0.0, 0.0), (0.33, 0.50), (0.65, 0.0)],
            &[(0.33, 0.50), (0.33, 1.0)]] },
        'Z' => Glyph { width: 0.60, strokes: &[
            &[(0.0, 0.0), (0.60, 0.0), (0.0, 1.0), (0.60, 1.0)]] },
        '0' => Glyph { width: 0.60, strokes: &[
            &[(0.18, 0.0), (0.42, 0.0), (0.60, 0.20), (0.60, 0.80), (0.42, 1.0), (0.18, 1.0), (0.0, 0.80), (0.0, 0.20), (0.18, 0.0)]] },
        '1' => Glyph { width: 0.35, strokes: &[
            &[(0.0, 0.20), (0.20, 0.0), (0.20, 1.0)],
            &[(0.0, 1.0), (0.35, 1.0)]] },
        '2' => Glyph { width: 0.60, strokes: &[
            &[(0.0, 0.15), (0.12, 0.0), (0.45, 0.0), (0.60, 0.15), (0.60, 0.35), (0.0, 1.0), (0.60, 1.0)]] },
        '3' => Glyph { width: 0.60, strokes: &[
            &[(0.0, 0.10), (0.15, 0.0), (0.45, 0.0), (0.60, 0.12), (0.60, 0.38), (0.45, 0.50), (0.20, 0.50)],
            &[(0.45, 0.50), (0.60, 0.62), (0.60, 0.88), (0.45, 1.0), (0.12, 1.0), (0.0, 0.88)]] },
        '4' => Glyph { width: 0.65, strokes: &[
            &[(0.45, 1.0), (0.45, 0.0), (0.0, 0.70), (0.65, 0.70)]] },
        '5' => Glyph { width: 0.60, strokes: &[
            &[(0.55, 0.0), (0.0, 0.0), (0.0, 0.45), (0.40, 0.42), (0.60, 0.60), (0.60, 0.85), (0.42, 1.0), (0.10, 1.0), (0.0, 0.90)]] },
        '6' => Glyph { width: 0.60, strokes: &[
            &[(0.55, 0.10), (0.40, 0.0), (0.18, 0.0), (0.0, 0.25), (0.0, 0.80), (0.18, 1.0), (0.42, 1.0), (0.60, 0.80), (0.60, 0.60), (0.42, 0.48), (0.05, 0.52)]] },
        '7' => Glyph { width: 0.60, strokes: &[
            &[(0.0, 0.0), (0.60, 0.0), (0.25, 1.0)]] },
        '8' => Glyph { width: 0.60, strokes: &[
            &[(0.30, 0.0), (0.50, 0.06), (0.55, 0.20), (0.45, 0.42), (0.30, 0.50), (0.15, 0.42), (0.05, 0.20), (0.10, 0.06), (0.30, 0.0)],
            &[(0.30, 0.50), (0.52, 0.60), (0.60, 0.78), (0.50, 0.95), (0.30, 1.0), (0.10, 0.95), (0.0, 0.78), (0.08, 0.60), (0.30, 0.50)]] },
        '9' => Glyph { width: 0.60, strokes: &[
            &[(0.05, 0.90), (0.20, 1.0), (0.42, 1.0), (0.60, 0.75), (0.60, 0.20), (0.42, 0.0), (0.18, 0.0), (0.0, 0.20), (0.0, 0.40), (0.18, 0.52), (0.55, 0.48)]] },
        '&' => Glyph { width: 0.75, strokes: &[
            &[(0.65, 1.0), (0.15, 0.35), (0.10, 0.18), (0.20, 0.02), (0.38, 0.02), (0.48, 0.18), (0.42, 0.35), (0.05, 0.68), (0.05, 0.88), (0.20, 1.0), (0.40, 1.0), (0.62, 0.72)]] },
        '-' => Glyph { width: 0.45, strokes: &[
            &[(0.0, 0.55), (0.45, 0.55)]] },
        '.' => Glyph { width: 0.18, strokes: &[
            &[(0.04, 0.92), (0.14, 1.0)]] },
        ',' => Glyph { width: 0.18, strokes: &[
            &[(0.14, 0.90), (0.04, 1.12)]] },
        '\'' => Glyph { width: 0.15, strokes: &[
            &[(0.08, 0.0), (0.04, 0.22)]] },
        '!' => Glyph { width: 0.18, strokes: &[
            &[(0.09, 0.0), (0.09, 0.65)],
            &[(0.07, 0.92), (0.12, 1.0)]] },
        '?' => Glyph { width: 0.55, strokes: &[
            &[(0.0, 0.12), (0.12, 0.0), (0.42, 0.0), (0.55, 0.12), (0.55, 0.32), (0.28, 0.50), (0.28, 0.65)],
            &[(0.26, 0.92), (0.31, 1.0)]] },
        ':' => Glyph { width: 0.18, strokes: &[
            &[(0.07, 0.35), (0.12, 0.42)],
            &[(0.07, 0.92), (0.12, 1.0)]] },
        _ => return None,
    };
    Some(g)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::rng::SlugRng;

    const INK: Rgb = Rgb::new(0x44, 0x40, 0x3c);

    fn lettered(text: &str, width: u32, seed: &str) -> image::RgbImage {
        let mut canvas = image::RgbImage::from_pixel(width, 80, image::Rgb([255, 255, 255]));
        let mut rng = SlugRng::for_slug(seed);
        let mut sk = Sketcher::new(&mut canvas, &mut rng);
        draw_centered(&mut sk, text, width as f32 / 2.0, 60.0, &TextStyle::title(INK));
        canvas
    }

    fn ink_bounds(canvas: &image::RgbImage) -> Option<(u32, u32)> {
        let xs: Vec<u32> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != image::Rgb([255, 255, 255]))
            .map(|(x, _, _)| x)
            .collect();
        Some((*xs.iter().min()?, *xs.iter().max()?))
    }

    #[test]
    fn measure_grows_with_content() {
        let style = TextStyle::title(INK);
        assert_eq!(measure("", &style), 0.0);
        let one = measure("A", &style);
        let two = measure("AB", &style);
        assert!(one > 0.0);
        assert!(two > one);
        // Lowercase maps onto the same glyphs.
        assert_eq!(measure("ab", &style), measure("AB", &style));
    }

    #[test]
    fn drawn_text_is_centered() {
        let canvas = lettered("AI SCREENING", 400, "center");
        let (min_x, max_x) = ink_bounds(&canvas).expect("no ink");
        let mid = (min_x + max_x) as f32 / 2.0;
        assert!(
            (mid - 200.0).abs() < 8.0,
            "ink center {mid} too far from 200"
        );
    }

    #[test]
    fn every_title_character_has_ink() {
        for text in ["RESEARCH Q&A", "CLIMATE & HEALTH", "SMALL SAMPLES", "2024!"] {
            let canvas = lettered(text, 600, text);
            assert!(ink_bounds(&canvas).is_some(), "{text} left no ink");
        }
    }

    #[test]
    fn unknown_characters_fall_back_to_a_box() {
        let canvas = lettered("ß", 100, "fallback");
        let (min_x, max_x) = ink_bounds(&canvas).expect("fallback drew nothing");
        assert!(max_x > min_x + 5);
    }

    #[test]
    fn lettering_is_deterministic_per_seed() {
        let a = lettered("HYPOTHESIS TESTING", 500, "same-seed");
        let b = lettered("HYPOTHESIS TESTING", 500, "same-seed");
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
