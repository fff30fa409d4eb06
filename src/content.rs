//! Content loading module.
//!
//! Walks the content root for Markdown files and parses their YAML front
//! matter into [`ContentRecord`]s for the feed. A content file looks like:
//!
//! ```markdown
//! ---
//! title: "Small Samples, Big Claims"
//! subtitle: "What effect sizes survive replication"
//! date: 2025-03-02
//! tags: [statistics, replication]
//! draft: false
//! ---
//!
//! Body text is ignored here; the feed describes posts from front
//! matter alone.
//! ```
//!
//! The slug is the file stem, so `content/small-samples.md` becomes
//! `small-samples`. Unknown front matter keys are ignored (content files
//! often carry layout hints for other tools), but a missing or
//! unparseable `date` is an error: feed ordering depends on it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use thiserror::Error;
use walkdir::WalkDir;

use crate::types::ContentRecord;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("content root {} does not exist", .0.display())]
    MissingRoot(PathBuf),
    #[error("{}: missing front matter fence", .path.display())]
    Unfenced { path: PathBuf },
    #[error("{}: {source}", .path.display())]
    FrontMatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("{}: missing date", .path.display())]
    MissingDate { path: PathBuf },
    #[error("{}: unparseable date {value:?}", .path.display())]
    BadDate { path: PathBuf, value: String },
}

/// Raw front matter as it appears in a file. Dates stay strings here;
/// [`parse_record`] turns them into calendar dates with path context.
#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    draft: bool,
}

/// Extract the YAML between the opening `---` fence and the closing one.
///
/// The opening fence must be the very first line. Returns `None` when
/// either fence is missing.
fn front_matter(source: &str) -> Option<&str> {
    let body = source.strip_prefix("---")?;
    let body = body.strip_prefix("\r\n").or_else(|| body.strip_prefix('\n'))?;

    let mut offset = 0;
    while let Some(nl) = body[offset..].find('\n') {
        let line_end = offset + nl;
        if body[offset..line_end].trim_end() == "---" {
            return Some(&body[..offset]);
        }
        offset = line_end + 1;
    }
    if body[offset..].trim_end() == "---" {
        return Some(&body[..offset]);
    }
    None
}

/// Accepts plain dates (`2025-03-02`) and RFC 3339 timestamps
/// (`2025-03-02T09:30:00Z`), keeping the calendar date of either.
fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Parse one content file's text into a record. `path` is used for the
/// slug (file stem) and for error messages.
pub fn parse_record(path: &Path, source: &str) -> Result<ContentRecord, ContentError> {
    let yaml = front_matter(source).ok_or_else(|| ContentError::Unfenced {
        path: path.to_path_buf(),
    })?;
    let fm: FrontMatter =
        serde_yaml::from_str(yaml).map_err(|source| ContentError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?;

    let raw_date = fm.date.ok_or_else(|| ContentError::MissingDate {
        path: path.to_path_buf(),
    })?;
    let date = parse_date(&raw_date).ok_or_else(|| ContentError::BadDate {
        path: path.to_path_buf(),
        value: raw_date,
    })?;

    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ContentRecord {
        slug,
        title: fm.title,
        subtitle: fm.subtitle,
        summary: fm.summary,
        date,
        tags: fm.tags,
        categories: fm.categories,
        featured: fm.featured,
        draft: fm.draft,
    })
}

/// Load every `.md`/`.mdx` file under `root`, in stable path order.
///
/// Drafts are loaded too; the feed filters them at serialization time so
/// `check` can still report on them.
pub fn load_content(root: &Path) -> Result<Vec<ContentRecord>, ContentError> {
    if !root.is_dir() {
        return Err(ContentError::MissingRoot(root.to_path_buf()));
    }

    let mut records = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_markdown = path
            .extension()
            .is_some_and(|ext| ext == "md" || ext == "mdx");
        if !is_markdown {
            continue;
        }
        let source = fs::read_to_string(path)?;
        records.push(parse_record(path, &source)?);
    }
    Ok(records)
}
