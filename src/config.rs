//! Section configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by the user's file; the merged result is validated and resolved
//! into a [`ListingConfig`], the explicit value the pipeline runs with.
//!
//! ## Configuration Options
//!
//! ```toml
//! [section]
//! category = "Featured"       # Required. Exact, case-sensitive category name
//! path_base = "featured/"     # Address of page 1 (default: "<category slug>/")
//! layouts = ["featured", "index"]  # Template fallback chain
//!                                  # (default: ["<category slug>", "index"])
//!
//! [section.extra]             # Attached verbatim to every page
//! __index = true
//! subtitle = "Featured"
//!
//! [pagination]
//! order_by = "-date"          # Field name, "-" prefix for descending
//! per_page = 10               # Positive integer
//! page_dir = "page"           # featured/page/2/, featured/page/3/, ...
//! ```
//!
//! Unknown keys are rejected to catch typos early. Invalid values are never
//! coerced: `per_page = 0` is an error, not "everything on one page".

use crate::order::{OrderBy, OrderError};
use crate::types::FieldMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Config validation error: {0}")]
    Order(#[from] OrderError),
}

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Which section to list and how its pages are presented.
    pub section: SectionConfig,
    /// Ordering and page size.
    pub pagination: PaginationConfig,
}

/// The section being listed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionConfig {
    /// Target category name. Required.
    pub category: String,
    /// Address of the first page. Defaults to `<category slug>/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_base: Option<String>,
    /// Template fallback chain. Defaults to `[<category slug>, "index"]`.
    pub layouts: Vec<String>,
    /// Fixed key/value pairs attached to every page.
    pub extra: FieldMap,
}

/// Ordering and page size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    /// Ordering field, `-` prefix for descending.
    pub order_by: String,
    /// Items per page. Signed so that negative values reach validation
    /// instead of failing as a type error.
    pub per_page: i64,
    /// Path segment inserted before the page number on pages 2+.
    pub page_dir: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            order_by: "-date".to_string(),
            per_page: 10,
            page_dir: "page".to_string(),
        }
    }
}

impl PaginationConfig {
    pub fn order(&self) -> Result<OrderBy, ConfigError> {
        Ok(self.order_by.parse()?)
    }

    pub fn page_size(&self) -> Result<NonZeroUsize, ConfigError> {
        usize::try_from(self.per_page)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "pagination.per_page must be a positive integer, got {}",
                    self.per_page
                ))
            })
    }
}

/// Fully resolved configuration for one pipeline invocation.
///
/// Built by [`SiteConfig::listing`]; every value here has already been
/// validated and every default filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingConfig {
    pub category: String,
    pub order_by: OrderBy,
    pub per_page: NonZeroUsize,
    pub path_base: String,
    pub page_dir: String,
    pub layouts: Vec<String>,
    pub extra_data: FieldMap,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.section.category.trim().is_empty() {
            return Err(ConfigError::Validation(
                "section.category must not be empty".into(),
            ));
        }
        self.pagination.page_size()?;
        self.pagination.order()?;
        Ok(())
    }

    /// Validate and resolve into the explicit pipeline configuration.
    pub fn listing(&self) -> Result<ListingConfig, ConfigError> {
        self.validate()?;
        let slug = category_slug(&self.section.category);
        let layouts = if self.section.layouts.is_empty() {
            vec![slug.clone(), "index".to_string()]
        } else {
            self.section.layouts.clone()
        };
        let path_base = self
            .section
            .path_base
            .clone()
            .unwrap_or_else(|| format!("{slug}/"));

        Ok(ListingConfig {
            category: self.section.category.clone(),
            order_by: self.pagination.order()?,
            per_page: self.pagination.page_size()?,
            path_base,
            page_dir: self.pagination.page_dir.clone(),
            layouts,
            extra_data: self.section.extra.clone(),
        })
    }
}

/// Lowercase the category and join its words with `-`.
///
/// `"Featured Work"` → `"featured-work"`.
pub fn category_slug(category: &str) -> String {
    category
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a TOML file as a raw value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(config_path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults,
/// which fail validation because no category is set.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(&root.join("config.toml"))?;
    resolve_config(stock_defaults_value(), overlay)
}

/// Load config from an explicit file path. The file must exist.
pub fn load_config_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay =
        load_raw_config(path)?.ok_or_else(|| ConfigError::NotFound(path.to_path_buf()))?;
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Directory whose `config.toml` applies to a content source.
///
/// A content file uses its parent directory. A directory, or a path that
/// does not exist yet, is used as is.
pub fn config_dir(source: &Path) -> &Path {
    if source.is_file() {
        match source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    } else {
        source
    }
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# section-pager configuration
# ===========================
# Everything except section.category is optional.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Section
# ---------------------------------------------------------------------------
[section]
# Category whose items are listed. Matched exactly and case-sensitively:
# "Featured" does not match an item filed under "featured".
category = "Featured"

# Address of the first listing page. Later pages live below it.
# Default: the category lowercased with spaces replaced by dashes, plus "/".
# path_base = "featured/"

# Template names tried in order by the renderer; the first that exists wins.
# Default: [<category slug>, "index"]
# layouts = ["featured", "index"]

# Key/value pairs attached to every page, passed through to templates.
[section.extra]
# __index = true
# subtitle = "Featured"

# ---------------------------------------------------------------------------
# Pagination
# ---------------------------------------------------------------------------
[pagination]
# Field to order by, "-" prefix for descending. Built-in fields: date,
# updated, title, slug, sticky, hidden. Any other front matter key works too.
# Items with a higher `sticky` value are always moved to the front afterwards.
order_by = "-date"

# Items per page. Must be a positive integer.
per_page = 10

# Path segment for pages after the first: featured/page/2/, featured/page/3/, ...
page_dir = "page"
"##
}
