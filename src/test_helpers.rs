//! Shared test utilities for the section-pager test suite.
//!
//! Provides item builders, fixture setup, and extractors that turn pipeline
//! output back into plain title lists for readable assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let items = vec![
//!     item("A", "2024-03-01").category("Featured").build(),
//!     item("B", "2024-02-01").category("Featured").sticky(1).build(),
//! ];
//! let pages = run(Some(items.as_slice()), &listing("Featured")).unwrap();
//! assert_eq!(page_titles(&pages), vec![vec!["B", "A"]]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::ListingConfig;
use crate::emit::Page;
use crate::order::OrderBy;
use crate::types::{Category, ContentItem, FieldMap, parse_date};

// =========================================================================
// Item builder
// =========================================================================

pub struct ItemBuilder {
    item: ContentItem,
}

/// Start building an item with a title and a `YYYY-MM-DD` date.
pub fn item(title: &str, date: &str) -> ItemBuilder {
    ItemBuilder {
        item: ContentItem {
            title: title.to_string(),
            slug: title.to_lowercase(),
            categories: Vec::new(),
            date: parse_date(date).unwrap_or_else(|| panic!("bad test date {date:?}")),
            updated: None,
            sticky: None,
            hidden: false,
            extra: FieldMap::new(),
        },
    }
}

impl ItemBuilder {
    pub fn category(mut self, name: &str) -> Self {
        self.item.categories.push(Category::new(name));
        self
    }

    pub fn sticky(mut self, sticky: impl Into<f64>) -> Self {
        self.item.sticky = Some(sticky.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.item.hidden = true;
        self
    }

    pub fn field(mut self, name: &str, value: serde_json::Value) -> Self {
        self.item.extra.insert(name.to_string(), value);
        self
    }

    pub fn build(self) -> ContentItem {
        self.item
    }
}

/// `n` items in `category` with strictly decreasing dates, titled `1..=n`.
pub fn numbered_items(n: usize, category: &str) -> Vec<ContentItem> {
    (1..=n)
        .map(|i| {
            let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                - chrono::Duration::days(i as i64);
            item(&i.to_string(), &date.format("%Y-%m-%d").to_string())
                .category(category)
                .build()
        })
        .collect()
}

/// A listing config for `category` with every other setting at its default.
pub fn listing(category: &str) -> ListingConfig {
    ListingConfig {
        category: category.to_string(),
        order_by: OrderBy::default(),
        per_page: std::num::NonZeroUsize::new(10).unwrap(),
        path_base: "featured/".to_string(),
        page_dir: "page".to_string(),
        layouts: vec!["featured".to_string(), "index".to_string()],
        extra_data: FieldMap::new(),
    }
}

// =========================================================================
// Extractors
// =========================================================================

pub fn titles<'a>(items: &[&'a ContentItem]) -> Vec<&'a str> {
    items.iter().map(|i| i.title.as_str()).collect()
}

/// Titles per page, in page order.
pub fn page_titles<'a>(pages: &[Page<'a>]) -> Vec<Vec<&'a str>> {
    pages.iter().map(|p| titles(&p.items)).collect()
}

pub fn page_paths(pages: &[Page<'_>]) -> Vec<String> {
    pages.iter().map(|p| p.path.clone()).collect()
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}
