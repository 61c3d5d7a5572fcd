//! Content collection loading.
//!
//! Reads the collection the pipeline selects from. Only metadata is read:
//! markdown bodies are never parsed, rendered, or validated.
//!
//! ## Sources
//!
//! - **Directory**: every `*.md` file below it (recursively, dot-directories
//!   skipped), in file-name order. Each file starts with a TOML front matter
//!   block between `+++` lines:
//!
//!   ```text
//!   +++
//!   title = "Winter light"
//!   date = 2024-01-10
//!   categories = ["Featured", "Photo"]
//!   sticky = 1
//!   +++
//!   Body text is ignored.
//!   ```
//!
//!   Files without front matter are skipped with a warning. The slug
//!   defaults to the file stem.
//! - **File**: a JSON array of items (see [`crate::types`]).
//! - **Missing path**: no collection at all, which is not an error.

use crate::types::ContentItem;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid content JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid front matter in {}: {message}", path.display())]
    FrontMatter { path: PathBuf, message: String },
}

/// Load the content collection at `path`.
///
/// Returns `Ok(None)` when nothing exists at `path`.
pub fn load_collection(path: &Path) -> Result<Option<Vec<ContentItem>>, ContentError> {
    if !path.exists() {
        tracing::debug!("No content collection at {}", path.display());
        return Ok(None);
    }
    let items = if path.is_dir() {
        load_directory(path)?
    } else {
        load_json(path)?
    };
    tracing::debug!("Loaded {} content items from {}", items.len(), path.display());
    Ok(Some(items))
}

fn load_json(path: &Path) -> Result<Vec<ContentItem>, ContentError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn load_directory(root: &Path) -> Result<Vec<ContentItem>, ContentError> {
    let mut items = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_dot_entry(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }
        let text = fs::read_to_string(entry.path())?;
        match split_front_matter(&text) {
            Some(front_matter) => items.push(parse_front_matter(entry.path(), front_matter)?),
            None => tracing::warn!("Skipping {}: no +++ front matter", entry.path().display()),
        }
    }
    Ok(items)
}

fn is_dot_entry(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
}

/// Return the text between an opening `+++` line at the very top of the file
/// and the next `+++` line.
fn split_front_matter(text: &str) -> Option<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != "+++" {
        return None;
    }
    let start = first.len();
    let mut end = start;
    for line in lines {
        if line.trim_end() == "+++" {
            return Some(&text[start..end]);
        }
        end += line.len();
    }
    None
}

fn parse_front_matter(path: &Path, front_matter: &str) -> Result<ContentItem, ContentError> {
    let invalid = |message: String| ContentError::FrontMatter {
        path: path.to_path_buf(),
        message,
    };
    let value: toml::Value = toml::from_str(front_matter).map_err(|e| invalid(e.to_string()))?;
    let mut item: ContentItem =
        serde_json::from_value(toml_to_json(value)).map_err(|e| invalid(e.to_string()))?;
    if item.slug.is_empty() {
        item.slug = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    Ok(item)
}

/// Convert front matter to JSON so items deserialize through one code path.
///
/// TOML datetimes become their RFC 3339 string form, which
/// [`crate::types::parse_date`] understands. That holds for custom fields too:
/// [`ContentItem::field`] reads them back as dates, so offsets are respected
/// when ordering.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    use serde_json::Value;
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}
