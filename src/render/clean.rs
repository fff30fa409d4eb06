//! The clean rendering style: flat geometry over a palette gradient.
//!
//! Same icon routines as the sketch style, driven with zero roughness and
//! bowing so strokes land where they aim. The palette supplies a vertical
//! background gradient, a top accent bar, and primary/secondary ink. Like
//! the sketch style this is a pure function of (slug, entry, config).

use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::config::{ConfigError, SiteConfig, ThemeEntry};
use crate::render::rng::SlugRng;
use crate::render::sketch::{Sketcher, Stroke};
use crate::render::text::{self, TextStyle};
use crate::render::{CARD_HEIGHT, CARD_WIDTH, Canvas, Style, icons};
use crate::types::{Rgb, VisualKind};

const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
const ACCENT_BAR_HEIGHT: u32 = 14;
const MOTIF_SIZE: f32 = 260.0;
const SIDE_SIZE: f32 = 110.0;
const SIDE_OFFSET: f32 = 330.0;

pub struct CleanStyle;

impl Style for CleanStyle {
    fn name(&self) -> &'static str {
        "clean"
    }

    fn render(
        &self,
        slug: &str,
        entry: &ThemeEntry,
        config: &SiteConfig,
    ) -> Result<Canvas, ConfigError> {
        let palette = config.theme_palette(entry)?;
        let mut canvas = Canvas::new(CARD_WIDTH, CARD_HEIGHT);

        // Vertical wash from the palette background down to white.
        for y in 0..CARD_HEIGHT {
            let t = y as f32 / (CARD_HEIGHT - 1) as f32;
            let row = palette.background.mix(WHITE, t).pixel();
            for x in 0..CARD_WIDTH {
                canvas.put_pixel(x, y, row);
            }
        }

        draw_filled_rect_mut(
            &mut canvas,
            Rect::at(0, 0).of_size(CARD_WIDTH, ACCENT_BAR_HEIGHT),
            palette.primary.pixel(),
        );

        let mut rng = SlugRng::for_slug(slug);
        let mut sk = Sketcher::new(&mut canvas, &mut rng);
        let flat = |color: Rgb, width: f32| {
            Stroke::new(color).width(width).roughness(0.0).bowing(0.0)
        };

        // Corner flourish: two rings tucked against the top-right edge.
        let ring = flat(palette.secondary, 2.0);
        sk.circle(CARD_WIDTH as f32 - 80.0, 110.0, 36.0, &ring);
        sk.circle(CARD_WIDTH as f32 - 80.0, 110.0, 52.0, &ring);

        let (w, h) = (CARD_WIDTH as f32, CARD_HEIGHT as f32);
        let center_y = h / 2.0 - 40.0;
        let kinds: Vec<VisualKind> =
            entry.kinds.iter().map(|tag| VisualKind::parse(tag)).collect();
        let lead = kinds.first().copied().unwrap_or(VisualKind::Generic);
        icons::draw_with(
            &mut sk,
            lead,
            w / 2.0,
            center_y,
            MOTIF_SIZE,
            &flat(palette.primary, 3.0),
        );
        for (kind, x) in kinds
            .iter()
            .skip(1)
            .zip([w / 2.0 - SIDE_OFFSET, w / 2.0 + SIDE_OFFSET])
        {
            icons::draw_with(
                &mut sk,
                *kind,
                x,
                center_y,
                SIDE_SIZE,
                &flat(palette.secondary, 2.0),
            );
        }

        let mut title = TextStyle::title(palette.dark);
        title.roughness = 0.0;
        text::draw_centered(&mut sk, &entry.title, w / 2.0, h - 60.0, &title);
        let mut caption = TextStyle::caption(palette.dark.mix(WHITE, 0.35));
        caption.roughness = 0.0;
        text::draw_centered(&mut sk, &config.site.author, w / 2.0, h - 30.0, &caption);

        Ok(canvas)
    }
}
