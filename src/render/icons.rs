//! Drawing routines for each visual kind.
//!
//! Every routine draws relative to a center point and a size scalar,
//! stroking in the theme color; fills are hachure at a fixed gap. The
//! dispatch is an exhaustive match, and [`VisualKind::Generic`] gives
//! unknown tags a plain filled circle instead of an error.

use std::f32::consts::{PI, TAU};

use crate::render::sketch::{Sketcher, Stroke, sample_cubic};
use crate::types::{Rgb, VisualKind};

const FILL_GAP: f32 = 4.0;
const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Renders `kind` centered on `(x, y)` scaled by `size`, with the
/// hand-drawn stroke defaults.
pub fn draw(sk: &mut Sketcher, kind: VisualKind, x: f32, y: f32, size: f32, color: Rgb) {
    let opts = Stroke::new(color).width(2.0).roughness(1.5).bowing(2.0);
    draw_with(sk, kind, x, y, size, &opts);
}

/// Same routines under a caller-chosen stroke; zero roughness and bowing
/// yield the flat geometry the clean style wants.
pub fn draw_with(sk: &mut Sketcher, kind: VisualKind, x: f32, y: f32, size: f32, opts: &Stroke) {
    match kind {
        VisualKind::Magnifier => magnifier(sk, x, y, size, opts),
        VisualKind::Document => document(sk, x, y, size, opts),
        VisualKind::Checkmark => checkmark(sk, x, y, size, opts),
        VisualKind::Brain => brain(sk, x, y, size, opts),
        VisualKind::Heart => heart(sk, x, y, size, opts),
        VisualKind::Scale => scale(sk, x, y, size, opts),
        VisualKind::Database => database(sk, x, y, size, opts),
        VisualKind::Search => search(sk, x, y, size, opts),
        VisualKind::Lightbulb => lightbulb(sk, x, y, size, opts),
        VisualKind::Funnel => funnel(sk, x, y, size, opts),
        VisualKind::Papers => papers(sk, x, y, size, opts),
        VisualKind::Chart => chart(sk, x, y, size, opts),
        VisualKind::Robot => robot(sk, x, y, size, opts),
        VisualKind::Globe => globe(sk, x, y, size, opts),
        VisualKind::Thermometer => thermometer(sk, x, y, size, opts),
        VisualKind::Server => server(sk, x, y, size, opts),
        VisualKind::Map => map(sk, x, y, size, opts),
        VisualKind::Generic => generic(sk, x, y, size, opts),
    }
}

fn magnifier(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.circle(x, y, s * 0.3, opts);
    sk.line(x + s * 0.2, y + s * 0.2, x + s * 0.4, y + s * 0.4, opts);
}

fn document(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.rectangle(x - s * 0.25, y - s * 0.35, s * 0.5, s * 0.7, opts);
    sk.line(x - s * 0.15, y - s * 0.15, x + s * 0.15, y - s * 0.15, opts);
    sk.line(x - s * 0.15, y, x + s * 0.15, y, opts);
    sk.line(x - s * 0.15, y + s * 0.15, x + s * 0.1, y + s * 0.15, opts);
}

fn checkmark(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    let heavy = opts.width(3.0);
    sk.line(x - s * 0.2, y, x - s * 0.05, y + s * 0.2, &heavy);
    sk.line(x - s * 0.05, y + s * 0.2, x + s * 0.25, y - s * 0.2, &heavy);
}

fn brain(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.ellipse(x, y, s * 0.25, s * 0.3, opts);
    sk.arc(x - s * 0.1, y - s * 0.1, s * 0.15, s * 0.15, 0.0, PI, opts);
    sk.arc(x + s * 0.1, y + s * 0.05, s * 0.125, s * 0.125, PI, TAU, opts);
}

fn heart(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    let bottom = (x, y + s * 0.15);
    let top = (x, y - s * 0.1);
    let left = [
        bottom,
        (x - s * 0.25, y - s * 0.1),
        (x - s * 0.25, y - s * 0.25),
        top,
    ];
    let right = [
        top,
        (x + s * 0.25, y - s * 0.25),
        (x + s * 0.25, y - s * 0.1),
        bottom,
    ];
    // Fill clips against the sampled outline of both lobes.
    let mut outline = sample_cubic(left[0], left[1], left[2], left[3], 12);
    outline.extend(sample_cubic(right[0], right[1], right[2], right[3], 12));
    sk.hachure_polygon(&outline, opts, FILL_GAP);
    sk.bezier(left[0], left[1], left[2], left[3], opts);
    sk.bezier(right[0], right[1], right[2], right[3], opts);
}

fn scale(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.line(x, y - s * 0.3, x, y + s * 0.3, opts);
    sk.line(x - s * 0.3, y - s * 0.2, x + s * 0.3, y - s * 0.2, opts);
    sk.arc(x - s * 0.25, y - s * 0.1, s * 0.1, s * 0.075, 0.0, PI, opts);
    sk.arc(x + s * 0.25, y - s * 0.1, s * 0.1, s * 0.075, 0.0, PI, opts);
}

fn database(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.ellipse(x, y - s * 0.2, s * 0.25, s * 0.1, opts);
    sk.line(x - s * 0.25, y - s * 0.2, x - s * 0.25, y + s * 0.2, opts);
    sk.line(x + s * 0.25, y - s * 0.2, x + s * 0.25, y + s * 0.2, opts);
    sk.ellipse(x, y + s * 0.2, s * 0.25, s * 0.1, opts);
}

fn search(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.circle(x, y - s * 0.1, s * 0.2, opts);
    sk.line(x + s * 0.12, y + s * 0.05, x + s * 0.3, y + s * 0.25, opts);
}

fn lightbulb(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.hachure_circle(x, y - s * 0.1, s * 0.2, opts, FILL_GAP);
    sk.circle(x, y - s * 0.1, s * 0.2, opts);
    sk.rectangle(x - s * 0.1, y + s * 0.1, s * 0.2, s * 0.15, opts);
}

fn funnel(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.line(x - s * 0.3, y - s * 0.25, x + s * 0.3, y - s * 0.25, opts);
    sk.line(x - s * 0.3, y - s * 0.25, x - s * 0.05, y + s * 0.1, opts);
    sk.line(x + s * 0.3, y - s * 0.25, x + s * 0.05, y + s * 0.1, opts);
    sk.line(x - s * 0.05, y + s * 0.1, x - s * 0.05, y + s * 0.3, opts);
    sk.line(x + s * 0.05, y + s * 0.1, x + s * 0.05, y + s * 0.3, opts);
}

fn papers(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.rectangle(x - s * 0.2, y - s * 0.25, s * 0.4, s * 0.5, opts);
    // The sheet behind is drawn at half ink.
    let faded = Stroke {
        color: opts.color.mix(WHITE, 0.5),
        ..*opts
    };
    sk.rectangle(x - s * 0.25, y - s * 0.2, s * 0.4, s * 0.5, &faded);
}

fn chart(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.line(x - s * 0.25, y + s * 0.25, x - s * 0.25, y - s * 0.25, opts);
    sk.line(x - s * 0.25, y + s * 0.25, x + s * 0.25, y + s * 0.25, opts);
    for (bx, by, bw, bh) in [
        (x - s * 0.15, y, s * 0.1, s * 0.25),
        (x - s * 0.02, y - s * 0.15, s * 0.1, s * 0.4),
        (x + s * 0.1, y - s * 0.05, s * 0.1, s * 0.3),
    ] {
        sk.hachure_rect(bx, by, bw, bh, opts, FILL_GAP);
        sk.rectangle(bx, by, bw, bh, opts);
    }
}

fn robot(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.rectangle(x - s * 0.2, y - s * 0.2, s * 0.4, s * 0.35, opts);
    for ex in [x - s * 0.1, x + s * 0.1] {
        sk.hachure_circle(ex, y - s * 0.1, s * 0.05, opts, FILL_GAP);
        sk.circle(ex, y - s * 0.1, s * 0.05, opts);
    }
    sk.line(x, y - s * 0.35, x, y - s * 0.25, opts);
    sk.hachure_circle(x, y - s * 0.4, s * 0.04, opts, FILL_GAP);
    sk.circle(x, y - s * 0.4, s * 0.04, opts);
}

fn globe(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.circle(x, y, s * 0.25, opts);
    sk.ellipse(x, y, s * 0.1, s * 0.25, opts);
    sk.line(x - s * 0.25, y, x + s * 0.25, y, opts);
}

fn thermometer(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.hachure_circle(x, y + s * 0.2, s * 0.125, opts, FILL_GAP);
    sk.circle(x, y + s * 0.2, s * 0.125, opts);
    sk.rectangle(x - s * 0.08, y - s * 0.35, s * 0.16, s * 0.5, opts);
}

fn server(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.rectangle(x - s * 0.25, y - s * 0.3, s * 0.5, s * 0.2, opts);
    sk.rectangle(x - s * 0.25, y - s * 0.05, s * 0.5, s * 0.2, opts);
    sk.rectangle(x - s * 0.25, y + s * 0.2, s * 0.5, s * 0.2, opts);
    for ly in [y - s * 0.2, y + s * 0.05] {
        sk.hachure_circle(x + s * 0.15, ly, s * 0.03, opts, FILL_GAP);
        sk.circle(x + s * 0.15, ly, s * 0.03, opts);
    }
}

fn map(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.rectangle(x - s * 0.3, y - s * 0.25, s * 0.6, s * 0.5, opts);
    sk.line(x - s * 0.1, y - s * 0.25, x - s * 0.15, y + s * 0.25, opts);
    sk.line(x + s * 0.1, y - s * 0.25, x + s * 0.15, y + s * 0.25, opts);
}

fn generic(sk: &mut Sketcher, x: f32, y: f32, s: f32, opts: &Stroke) {
    sk.hachure_circle(x, y, s * 0.2, opts, FILL_GAP);
    sk.circle(x, y, s * 0.2, opts);
}
