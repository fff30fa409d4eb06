//! RSS feed serialization module.
//!
//! Turns the loaded content records into an RSS 2.0 document. Drafts are
//! filtered out, the rest sorted newest-first, and each post becomes an
//! `<item>` whose permalink doubles as its guid.
//!
//! Escaping follows two regimes. Titles and descriptions are authored
//! prose and go out as CDATA sections, byte for byte (a literal `]]>` is
//! split across two sections). Everything else is entity-escaped text,
//! which quick-xml handles when writing `Text` events.
//!
//! [`serialize`] takes the build timestamp as a parameter so output is a
//! pure function of its inputs.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use thiserror::Error;

use crate::config::SiteConfig;
use crate::types::ContentRecord;

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("feed text is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

type XmlWriter = Writer<Vec<u8>>;

/// RFC 2822 rendering of a post date, pinned to UTC midnight.
fn pub_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), FeedError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_cdata_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), FeedError> {
    // A literal "]]>" would terminate the section early, so split it
    // across two sections that reassemble on parse.
    let safe = text.replace("]]>", "]]]]><![CDATA[>");
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::CData(BytesCData::new(safe)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_item(
    writer: &mut XmlWriter,
    config: &SiteConfig,
    post: &ContentRecord,
) -> Result<(), FeedError> {
    let link = config.permalink(&post.slug);

    writer.write_event(Event::Start(BytesStart::new("item")))?;
    write_cdata_element(writer, "title", &post.title)?;
    write_text_element(writer, "link", &link)?;

    let mut guid = BytesStart::new("guid");
    guid.push_attribute(("isPermaLink", "true"));
    writer.write_event(Event::Start(guid))?;
    writer.write_event(Event::Text(BytesText::new(&link)))?;
    writer.write_event(Event::End(BytesEnd::new("guid")))?;

    write_text_element(writer, "pubDate", &pub_date(post.date))?;
    write_cdata_element(writer, "description", post.description())?;
    for tag in &post.tags {
        write_text_element(writer, "category", tag)?;
    }
    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

/// Serialize the RSS 2.0 document for the given posts.
///
/// Drafts are excluded. The remaining posts are sorted by date, newest
/// first; posts sharing a date keep their input order. `build_time`
/// becomes the channel's `lastBuildDate`.
pub fn serialize(
    config: &SiteConfig,
    posts: &[ContentRecord],
    build_time: DateTime<Utc>,
) -> Result<String, FeedError> {
    let mut published: Vec<&ContentRecord> = posts.iter().filter(|p| !p.draft).collect();
    published.sort_by(|a, b| b.date.cmp(&a.date));

    let site = &config.site;
    let mut writer = Writer::new(Vec::with_capacity(4096));
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    rss.push_attribute(("xmlns:atom", ATOM_NS));
    rss.push_attribute(("xmlns:content", CONTENT_NS));
    writer.write_event(Event::Start(rss))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut writer, "title", &site.title)?;
    write_text_element(&mut writer, "description", &site.description)?;
    write_text_element(&mut writer, "link", &site.root)?;

    let mut self_link = BytesStart::new("atom:link");
    self_link.push_attribute(("href", config.feed_url().as_str()));
    self_link.push_attribute(("rel", "self"));
    self_link.push_attribute(("type", "application/rss+xml"));
    writer.write_event(Event::Empty(self_link))?;

    write_text_element(&mut writer, "language", &site.language)?;
    write_text_element(
        &mut writer,
        "lastBuildDate",
        &build_time.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
    )?;
    if !site.email.is_empty() {
        let contact = if site.author.is_empty() {
            site.email.clone()
        } else {
            format!("{} ({})", site.email, site.author)
        };
        write_text_element(&mut writer, "managingEditor", &contact)?;
        write_text_element(&mut writer, "webMaster", &contact)?;
    }

    writer.write_event(Event::Start(BytesStart::new("image")))?;
    write_text_element(&mut writer, "url", &config.feed_image_url())?;
    let image_title = if site.author.is_empty() {
        &site.title
    } else {
        &site.author
    };
    write_text_element(&mut writer, "title", image_title)?;
    write_text_element(&mut writer, "link", &site.root)?;
    writer.write_event(Event::End(BytesEnd::new("image")))?;

    for post in published {
        write_item(&mut writer, config, post)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}
