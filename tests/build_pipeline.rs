//! End-to-end pipeline test: config + content in, cards + feed out.
//!
//! Exercises the same path as `cardstock build` against a temp project:
//! load `cardstock.toml`, render the card batch, load content, and
//! serialize the feed.
//!
//! Run with: cargo test --test build_pipeline

use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use cardstock::{config, content, feed, thumbs};

const CONFIG: &str = r##"
[site]
title = "Field Notes"
description = "Notes on evidence, methods, and tooling."
root = "https://notes.example.org"
author = "Casey Reader"
email = "casey@example.org"

[feed]
out_dir = "public"

[thumbs]
out_dir = "public/images/blog"

[themes.small-samples]
title = "Small Samples"
kinds = ["chart", "magnifier", "checkmark"]
color = "#059669"

[themes.mapping-institutions]
title = "Institution Mapping"
kinds = ["globe", "pins", "network"]
color = "#2563eb"
"##;

fn write_post(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn setup_project(root: &Path) -> config::SiteConfig {
    fs::write(root.join("cardstock.toml"), CONFIG).unwrap();

    let content_dir = root.join("content");
    fs::create_dir_all(&content_dir).unwrap();
    write_post(
        &content_dir,
        "small-samples.md",
        "---\n\
         title: \"Small Samples, Big <Claims>\"\n\
         summary: \"Effect sizes & replication\"\n\
         date: 2025-03-02\n\
         tags: [statistics, replication]\n\
         ---\n\
         Body text.\n",
    );
    write_post(
        &content_dir,
        "mapping-institutions.md",
        "---\ntitle: Mapping Institutions\ndate: 2025-01-05\n---\n",
    );
    write_post(
        &content_dir,
        "unfinished.md",
        "---\ntitle: Unfinished Draft\ndate: 2025-04-01\ndraft: true\n---\n",
    );

    config::load_config(&root.join("cardstock.toml")).unwrap()
}

#[test]
fn full_build_produces_cards_and_feed() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let config = setup_project(root);

    // Cards: one PNG per theme entry, correct dimensions.
    let out_dir = root.join(&config.thumbs.out_dir);
    let summary = thumbs::generate_cards(&config, &out_dir, None).unwrap();
    assert_eq!(summary.generated, 2);
    assert_eq!(summary.failed, 0);
    for slug in ["small-samples", "mapping-institutions"] {
        let path = out_dir.join(format!("{slug}.png"));
        assert!(path.exists(), "missing {}", path.display());
        assert_eq!(image::image_dimensions(&path).unwrap(), (1200, 630));
    }

    // Feed: drafts out, newest first, prose preserved.
    let records = content::load_content(&root.join("content")).unwrap();
    assert_eq!(records.len(), 3);

    let build_time = Utc.with_ymd_and_hms(2025, 6, 15, 8, 30, 0).unwrap();
    let xml = feed::serialize(&config, &records, build_time).unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<![CDATA[Small Samples, Big <Claims>]]>"));
    assert!(xml.contains("<![CDATA[Effect sizes & replication]]>"));
    assert!(!xml.contains("Unfinished Draft"));

    let newest = xml.find("Small Samples").unwrap();
    let older = xml.find("Mapping Institutions").unwrap();
    assert!(newest < older, "newest post must come first");

    assert!(xml.contains("<link>https://notes.example.org/blog/small-samples/</link>"));
    assert!(xml.contains("<pubDate>Sun, 02 Mar 2025 00:00:00 GMT</pubDate>"));
    assert!(xml.contains("<category>statistics</category>"));

    // Written where the build command puts it.
    let feed_path = root.join(config.feed_file());
    fs::create_dir_all(feed_path.parent().unwrap()).unwrap();
    fs::write(&feed_path, &xml).unwrap();
    assert!(root.join("public/rss.xml").exists());
}

#[test]
fn rebuilding_cards_is_byte_stable() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let config = setup_project(root);

    let first_dir = root.join("first");
    let second_dir = root.join("second");
    thumbs::generate_cards(&config, &first_dir, None).unwrap();
    thumbs::generate_cards(&config, &second_dir, None).unwrap();

    for slug in ["small-samples", "mapping-institutions"] {
        let first = fs::read(first_dir.join(format!("{slug}.png"))).unwrap();
        let second = fs::read(second_dir.join(format!("{slug}.png"))).unwrap();
        assert_eq!(first, second, "card bytes for {slug} changed between runs");
    }
}

#[test]
fn style_override_changes_the_rendering() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let mut config = setup_project(root);

    let sketch_dir = root.join("sketch");
    thumbs::generate_cards(&config, &sketch_dir, None).unwrap();

    config.thumbs.style = "clean".to_string();
    let clean_dir = root.join("clean");
    thumbs::generate_cards(&config, &clean_dir, None).unwrap();

    let sketch = fs::read(sketch_dir.join("small-samples.png")).unwrap();
    let clean = fs::read(clean_dir.join("small-samples.png")).unwrap();
    assert_ne!(sketch, clean, "styles must not render identically");
}
