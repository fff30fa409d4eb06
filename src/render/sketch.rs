//! The hand-drawn rendering style and its stroke engine.
//!
//! Every visible stroke is drawn as two passes of a jittered curve with
//! independent bounded offsets per pass; overlapping passes are what make
//! the output look penciled rather than plotted. Shape fills are hachure:
//! families of parallel lines at a fixed angle, clipped to the outline,
//! each drawn as a single rough pass. All jitter comes from the caller's
//! [`SlugRng`], so a given slug renders the same bytes every run.
//!
//! Layout and colors follow the card composition this tool exists to
//! produce: warm paper background with scattered grain dots, a loose
//! border, up to three themed icons joined by arrows, then a title line
//! and an author caption near the bottom edge.

use image::RgbImage;
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::config::{ConfigError, SiteConfig, ThemeEntry};
use crate::render::rng::SlugRng;
use crate::render::text::{self, TextStyle};
use crate::render::{CARD_HEIGHT, CARD_WIDTH, Canvas, Style, icons};
use crate::types::{Rgb, VisualKind};

// Warm gray ramp: paper, grain, border, arrows, title ink, caption ink.
const PAPER: Rgb = Rgb::new(0xfa, 0xfa, 0xf9);
const GRAIN: Rgb = Rgb::new(0xe7, 0xe5, 0xe4);
const BORDER_INK: Rgb = Rgb::new(0xd6, 0xd3, 0xd1);
const ARROW_INK: Rgb = Rgb::new(0xa8, 0xa2, 0x9e);
const TITLE_INK: Rgb = Rgb::new(0x44, 0x40, 0x3c);
const CAPTION_INK: Rgb = Rgb::new(0x78, 0x71, 0x6c);

const GRAIN_DOTS: usize = 100;
const BORDER_MARGIN: f32 = 20.0;

const ICON_SIZE: f32 = 120.0;
const ICON_START_X: f32 = 200.0;
const ICON_SPACING: f32 = 350.0;

/// Largest random offset applied to any stroke point, before the
/// roughness multiplier.
const MAX_OFFSET: f32 = 2.0;
const HACHURE_ANGLE_DEG: f32 = -41.0;

/// Stroke parameters, in the vocabulary of hand-drawn rendering:
/// `roughness` scales point jitter, `bowing` scales how far a nominally
/// straight line bellies away from its chord.
#[derive(Debug, Clone, Copy)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f32,
    pub roughness: f32,
    pub bowing: f32,
}

impl Stroke {
    pub fn new(color: Rgb) -> Stroke {
        Stroke {
            color,
            width: 1.0,
            roughness: 1.0,
            bowing: 1.0,
        }
    }

    pub fn width(mut self, width: f32) -> Stroke {
        self.width = width;
        self
    }

    pub fn roughness(mut self, roughness: f32) -> Stroke {
        self.roughness = roughness;
        self
    }

    pub fn bowing(mut self, bowing: f32) -> Stroke {
        self.bowing = bowing;
        self
    }
}

/// Draws jittered primitives onto a borrowed canvas.
///
/// Holds the canvas and the slug's RNG together so every call site
/// consumes randomness in document order; reordering draw calls changes
/// the output, adding a call after existing ones does not disturb them.
pub struct Sketcher<'a> {
    canvas: &'a mut RgbImage,
    rng: &'a mut SlugRng,
}

impl<'a> Sketcher<'a> {
    pub fn new(canvas: &'a mut RgbImage, rng: &'a mut SlugRng) -> Sketcher<'a> {
        Sketcher { canvas, rng }
    }

    /// A rough line: full-offset pass plus a tighter overlay pass.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, opts: &Stroke) {
        self.line_pass(x1, y1, x2, y2, opts, 1.0, opts.width);
        self.line_pass(x1, y1, x2, y2, opts, 0.5, opts.width);
    }

    /// One jittered pass: a cubic whose control points diverge from the
    /// chord by bowing plus noise, rasterized as a polyline.
    fn line_pass(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        opts: &Stroke,
        spread: f32,
        width: f32,
    ) {
        let (dx, dy) = (x2 - x1, y2 - y1);
        let len = (dx * dx + dy * dy).sqrt();
        if len < f32::EPSILON {
            return;
        }
        // Short strokes get proportionally less jitter or they dissolve.
        let max_off = if MAX_OFFSET * 10.0 > len {
            len / 10.0
        } else {
            MAX_OFFSET
        };
        let jit = max_off * opts.roughness * spread;
        let (nx, ny) = (-dy / len, dx / len);
        let bow = self.rng.offset(1.0) * opts.bowing * MAX_OFFSET * opts.roughness * len / 200.0;
        let t1 = self.rng.range(0.2, 0.4);
        let t2 = self.rng.range(0.6, 0.8);
        let p0 = (x1 + self.rng.offset(jit), y1 + self.rng.offset(jit));
        let p3 = (x2 + self.rng.offset(jit), y2 + self.rng.offset(jit));
        let c1 = (
            x1 + dx * t1 + nx * bow + self.rng.offset(jit),
            y1 + dy * t1 + ny * bow + self.rng.offset(jit),
        );
        let c2 = (
            x1 + dx * t2 + nx * bow + self.rng.offset(jit),
            y1 + dy * t2 + ny * bow + self.rng.offset(jit),
        );
        let pts = sample_cubic(p0, c1, c2, p3, segments_for(len));
        self.polyline(&pts, opts.color, width);
    }

    /// Rectangle outline as four rough lines.
    pub fn rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, opts: &Stroke) {
        self.line(x, y, x + w, y, opts);
        self.line(x + w, y, x + w, y + h, opts);
        self.line(x + w, y + h, x, y + h, opts);
        self.line(x, y + h, x, y, opts);
    }

    /// Closed polygon outline; each edge is a rough line.
    pub fn polygon(&mut self, pts: &[(f32, f32)], opts: &Stroke) {
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            self.line(a.0, a.1, b.0, b.1, opts);
        }
    }

    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, opts: &Stroke) {
        self.ellipse(cx, cy, r, r, opts);
    }

    /// Rough ellipse: two closed jittered rings.
    pub fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, opts: &Stroke) {
        self.ring_pass(cx, cy, rx, ry, opts, 1.0);
        self.ring_pass(cx, cy, rx, ry, opts, 0.6);
    }

    fn ring_pass(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, opts: &Stroke, spread: f32) {
        let steps = arc_steps(rx.max(ry), std::f32::consts::TAU);
        let jit = opts.roughness * MAX_OFFSET * 0.5 * spread;
        let mut pts = Vec::with_capacity(steps + 1);
        for i in 0..steps {
            let th = i as f32 / steps as f32 * std::f32::consts::TAU;
            pts.push((
                cx + rx * th.cos() + self.rng.offset(jit),
                cy + ry * th.sin() + self.rng.offset(jit),
            ));
        }
        if let Some(&first) = pts.first() {
            pts.push(first);
        }
        self.polyline(&pts, opts.color, opts.width);
    }

    /// Rough elliptical arc from `start` to `end` radians (y-down, so
    /// positive angles sweep clockwise on screen).
    pub fn arc(
        &mut self,
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        start: f32,
        end: f32,
        opts: &Stroke,
    ) {
        for spread in [1.0, 0.6] {
            let steps = arc_steps(rx.max(ry), (end - start).abs()).max(3);
            let jit = opts.roughness * MAX_OFFSET * 0.5 * spread;
            let mut pts = Vec::with_capacity(steps + 1);
            for i in 0..=steps {
                let th = start + (end - start) * i as f32 / steps as f32;
                pts.push((
                    cx + rx * th.cos() + self.rng.offset(jit),
                    cy + ry * th.sin() + self.rng.offset(jit),
                ));
            }
            self.polyline(&pts, opts.color, opts.width);
        }
    }

    /// Rough cubic bezier; control points are jittered per pass.
    pub fn bezier(
        &mut self,
        p0: (f32, f32),
        c1: (f32, f32),
        c2: (f32, f32),
        p3: (f32, f32),
        opts: &Stroke,
    ) {
        for spread in [1.0, 0.5] {
            let jit = MAX_OFFSET * opts.roughness * spread;
            let wobble = |p: (f32, f32), rng: &mut SlugRng| -> (f32, f32) {
                (p.0 + rng.offset(jit), p.1 + rng.offset(jit))
            };
            let q0 = wobble(p0, self.rng);
            let q1 = wobble(c1, self.rng);
            let q2 = wobble(c2, self.rng);
            let q3 = wobble(p3, self.rng);
            let pts = sample_cubic(q0, q1, q2, q3, 16);
            self.polyline(&pts, opts.color, opts.width);
        }
    }

    /// Hachure fill of a simple polygon: parallel lines at the fixed
    /// hachure angle, clipped to the outline by even-odd pairing, each
    /// drawn as a single rough pass at half the stroke weight.
    pub fn hachure_polygon(&mut self, outline: &[(f32, f32)], opts: &Stroke, gap: f32) {
        if outline.len() < 3 {
            return;
        }
        let gap = gap.max(1.0);
        let angle = HACHURE_ANGLE_DEG.to_radians();
        let (dx, dy) = (angle.cos(), angle.sin());
        let (nx, ny) = (-dy, dx);

        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for &(x, y) in outline {
            let p = x * nx + y * ny;
            lo = lo.min(p);
            hi = hi.max(p);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return;
        }

        let weight = (opts.width * 0.5).max(1.0);
        let mut offset = lo + gap * 0.5;
        while offset < hi {
            let mut hits: Vec<f32> = Vec::new();
            for i in 0..outline.len() {
                let a = outline[i];
                let b = outline[(i + 1) % outline.len()];
                let (ex, ey) = (b.0 - a.0, b.1 - a.1);
                let det = ex * dy - dx * ey;
                if det.abs() < 1e-6 {
                    continue;
                }
                let (wx, wy) = (a.0 - nx * offset, a.1 - ny * offset);
                let t = (ex * wy - ey * wx) / det;
                let u = (dx * wy - dy * wx) / det;
                // Half-open edge interval so a shared vertex hits once.
                if (0.0..1.0).contains(&u) {
                    hits.push(t);
                }
            }
            hits.sort_by(f32::total_cmp);
            for pair in hits.chunks_exact(2) {
                let (t0, t1) = (pair[0], pair[1]);
                if t1 - t0 < 0.5 {
                    continue;
                }
                let a = (nx * offset + dx * t0, ny * offset + dy * t0);
                let b = (nx * offset + dx * t1, ny * offset + dy * t1);
                self.line_pass(a.0, a.1, b.0, b.1, opts, 1.0, weight);
            }
            offset += gap;
        }
    }

    pub fn hachure_rect(&mut self, x: f32, y: f32, w: f32, h: f32, opts: &Stroke, gap: f32) {
        let corners = [(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
        self.hachure_polygon(&corners, opts, gap);
    }

    pub fn hachure_circle(&mut self, cx: f32, cy: f32, r: f32, opts: &Stroke, gap: f32) {
        self.hachure_polygon(&ellipse_outline(cx, cy, r, r), opts, gap);
    }

    pub fn hachure_ellipse(
        &mut self,
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        opts: &Stroke,
        gap: f32,
    ) {
        self.hachure_polygon(&ellipse_outline(cx, cy, rx, ry), opts, gap);
    }

    /// Solid dot, clipped to the canvas. Used for paper grain.
    pub fn dot(&mut self, x: f32, y: f32, r: f32, color: Rgb) {
        let (cx, cy) = (x.round() as i32, y.round() as i32);
        let radius = r.round() as i32;
        if radius <= 0 {
            if cx >= 0
                && cy >= 0
                && (cx as u32) < self.canvas.width()
                && (cy as u32) < self.canvas.height()
            {
                self.canvas.put_pixel(cx as u32, cy as u32, color.pixel());
            }
        } else {
            draw_filled_circle_mut(self.canvas, (cx, cy), radius, color.pixel());
        }
    }

    /// Scatters grain dots over the whole canvas.
    pub fn paper_grain(&mut self, count: usize, color: Rgb) {
        let (w, h) = (self.canvas.width() as f32, self.canvas.height() as f32);
        for _ in 0..count {
            let x = self.rng.range(0.0, w);
            let y = self.rng.range(0.0, h);
            let r = self.rng.range(0.0, 2.0);
            self.dot(x, y, r, color);
        }
    }

    /// Straight polyline with `width` emulated by parallel offset lanes.
    fn polyline(&mut self, pts: &[(f32, f32)], color: Rgb, width: f32) {
        let lanes = width.round().max(1.0) as i32;
        let px = color.pixel();
        for lane in 0..lanes {
            let shift = lane as f32 - (lanes - 1) as f32 / 2.0;
            for pair in pts.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let (dx, dy) = (b.0 - a.0, b.1 - a.1);
                let len = (dx * dx + dy * dy).sqrt();
                if len < f32::EPSILON {
                    continue;
                }
                let (ox, oy) = (-dy / len * shift, dx / len * shift);
                draw_line_segment_mut(
                    self.canvas,
                    (a.0 + ox, a.1 + oy),
                    (b.0 + ox, b.1 + oy),
                    px,
                );
            }
        }
    }
}

/// Evaluates a cubic bezier into `segments + 1` points.
pub(crate) fn sample_cubic(
    p0: (f32, f32),
    c1: (f32, f32),
    c2: (f32, f32),
    p3: (f32, f32),
    segments: usize,
) -> Vec<(f32, f32)> {
    let segments = segments.max(1);
    let mut pts = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        pts.push((
            b0 * p0.0 + b1 * c1.0 + b2 * c2.0 + b3 * p3.0,
            b0 * p0.1 + b1 * c1.1 + b2 * c2.1 + b3 * p3.1,
        ));
    }
    pts
}

/// Unjittered ellipse outline used as a hachure clip shape.
pub(crate) fn ellipse_outline(cx: f32, cy: f32, rx: f32, ry: f32) -> Vec<(f32, f32)> {
    const STEPS: usize = 24;
    (0..STEPS)
        .map(|i| {
            let th = i as f32 / STEPS as f32 * std::f32::consts::TAU;
            (cx + rx * th.cos(), cy + ry * th.sin())
        })
        .collect()
}

fn segments_for(len: f32) -> usize {
    ((len / 8.0).ceil() as usize).clamp(4, 24)
}

fn arc_steps(radius: f32, sweep: f32) -> usize {
    ((radius.abs() * sweep.abs() / 10.0).ceil() as usize).clamp(8, 32)
}

/// The default card style: paper grain, loose border, hand-drawn icons
/// with connecting arrows, hand-lettered title and caption.
pub struct SketchStyle;

impl Style for SketchStyle {
    fn name(&self) -> &'static str {
        "sketch"
    }

    fn render(
        &self,
        slug: &str,
        entry: &ThemeEntry,
        config: &SiteConfig,
    ) -> Result<Canvas, ConfigError> {
        let ink = config.theme_stroke(entry)?;
        let mut canvas = Canvas::from_pixel(CARD_WIDTH, CARD_HEIGHT, PAPER.pixel());
        let mut rng = SlugRng::for_slug(slug);
        let mut sk = Sketcher::new(&mut canvas, &mut rng);

        sk.paper_grain(GRAIN_DOTS, GRAIN);

        let (w, h) = (CARD_WIDTH as f32, CARD_HEIGHT as f32);
        sk.rectangle(
            BORDER_MARGIN,
            BORDER_MARGIN,
            w - 2.0 * BORDER_MARGIN,
            h - 2.0 * BORDER_MARGIN,
            &Stroke::new(BORDER_INK).roughness(2.0).bowing(3.0),
        );

        let icon_y = h / 2.0 - 30.0;
        let kinds: Vec<VisualKind> =
            entry.kinds.iter().map(|tag| VisualKind::parse(tag)).collect();
        for (i, kind) in kinds.iter().enumerate() {
            let x = ICON_START_X + i as f32 * ICON_SPACING;
            icons::draw(&mut sk, *kind, x, icon_y, ICON_SIZE, ink);
        }

        let arrow = Stroke::new(ARROW_INK).width(1.5).roughness(1.5);
        for i in 0..kinds.len().saturating_sub(1) {
            let from_x = ICON_START_X + i as f32 * ICON_SPACING + ICON_SIZE * 0.4;
            let to_x = ICON_START_X + (i + 1) as f32 * ICON_SPACING - ICON_SIZE * 0.4;
            sk.line(from_x, icon_y, to_x, icon_y, &arrow);
            sk.line(to_x - 15.0, icon_y - 10.0, to_x, icon_y, &arrow);
            sk.line(to_x - 15.0, icon_y + 10.0, to_x, icon_y, &arrow);
        }

        text::draw_centered(
            &mut sk,
            &entry.title,
            w / 2.0,
            h - 60.0,
            &TextStyle::title(TITLE_INK),
        );
        text::draw_centered(
            &mut sk,
            &config.site.author,
            w / 2.0,
            h - 30.0,
            &TextStyle::caption(CAPTION_INK),
        );

        Ok(canvas)
    }
}

// =============================================================================
// Tests
// =============================================================================
