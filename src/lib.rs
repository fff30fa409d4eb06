//! # Cardstock
//!
//! Hand-drawn social cards and an RSS feed for static blogs. One TOML
//! file maps post slugs to visual themes; cardstock turns that table
//! into 1200×630 PNG link previews, and turns the blog's front matter
//! into an RSS 2.0 document.
//!
//! # Architecture: Two Independent Pipelines
//!
//! ```text
//! thumbs   [themes.*] table   →  public/images/blog/{slug}.png
//! feed     content/*.md       →  public/rss.xml
//! ```
//!
//! `build` runs both. The pipelines share the config file and nothing
//! else: cards never read content files, and the feed never draws. Each
//! is a function from its inputs to bytes on disk, so either can be
//! rerun alone and unit tests can exercise one without the other.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `cardstock.toml` loading, validation, theme and palette tables |
//! | [`content`] | Walks the content directory, parses YAML front matter into records |
//! | [`render`] | Card drawing: seeded jitter, stroke styles, icon routines, lettering |
//! | [`thumbs`] | Batch driver that renders theme entries in parallel, isolating failures |
//! | [`feed`] | RSS 2.0 serialization with CDATA prose and entity-escaped structure |
//! | [`output`] | CLI output formatting and the `check` report |
//! | [`types`] | Shared primitives (`Rgb`, `Palette`, `VisualKind`, `ContentRecord`) |
//!
//! # Design Decisions
//!
//! ## Per-Slug Seeded Jitter
//!
//! The sketch style's wobble comes from a small PRNG seeded with a hash
//! of the slug ([`render::rng::SlugRng`]). Rendering the same entry
//! always produces the same bytes regardless of batch order or when the
//! build runs, so reruns are diffable and a regenerated site only
//! changes the cards whose themes changed.
//!
//! ## Built-In Stroke Lettering
//!
//! Titles and captions are drawn as polyline glyphs ([`render::text`])
//! through the same jittered stroke engine as the shapes, not rasterized
//! from a font file. There is nothing to ship next to the binary and no
//! system font lookup to vary between machines, which is what keeps the
//! determinism guarantee honest. The trade-off is a deliberately small
//! alphabet: uppercase lettering with digits and common punctuation,
//! which is all a card title needs.
//!
//! ## Two Escaping Regimes in the Feed
//!
//! Post titles and descriptions are authored prose and pass through as
//! CDATA, byte for byte. Links, dates, and categories are structural
//! values and get entity escaping. Mixing the two regimes per element is
//! what lets a title like `Notes & <Results>` survive without
//! double-escaping artifacts in readers.
//!
//! ## Closed-Set Tags With a Fallback
//!
//! Theme tags map to drawing routines through one exhaustive enum match
//! ([`types::VisualKind`]). A tag without a routine draws the generic
//! shape instead of failing the card: theme tables evolve faster than
//! drawing code, and a published page with a plain card beats a build
//! error. `cardstock check` lists which tags are falling back.

pub mod config;
pub mod content;
pub mod feed;
pub mod output;
pub mod render;
pub mod thumbs;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
