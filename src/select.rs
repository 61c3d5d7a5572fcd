//! Section selection.
//!
//! First stage of the listing pipeline: narrow the full content collection
//! down to the items filed under one target category.
//!
//! Matching is exact and case-sensitive. `"Featured"` does not select an
//! item filed under `"featured"`; a casing mismatch yields fewer (or no)
//! items rather than an error. Hidden items are eligible: a section listing
//! is an explicit curation, not a regular index.

use crate::types::ContentItem;

/// Items with at least one category named exactly `category`, in input order.
pub fn select<'a>(items: &'a [ContentItem], category: &str) -> Vec<&'a ContentItem> {
    items.iter().filter(|item| item.in_category(category)).collect()
}
