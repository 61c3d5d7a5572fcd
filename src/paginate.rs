//! Pagination and page addressing.
//!
//! Partitions the ordered item sequence into consecutive chunks of at most
//! `per_page` items and gives each chunk its 1-based index and address.
//!
//! ## Addressing
//!
//! All page addresses come from [`page_path`]:
//!
//! ```text
//! index 1   featured/               (path_base, unmodified)
//! index 2   featured/page/2/
//! index 3   featured/page/3/
//! ```
//!
//! The first page carries no page-number suffix so the canonical listing
//! URL stays stable no matter how many pages follow it.

use crate::types::ContentItem;
use serde::Serialize;
use std::num::NonZeroUsize;

/// Index and address of a neighbouring page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub index: usize,
    pub path: String,
}

/// One chunk of the ordered sequence, addressed and linked to its neighbours.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<'a> {
    pub index: usize,
    pub total_pages: usize,
    pub path: String,
    pub prev: Option<PageLink>,
    pub next: Option<PageLink>,
    pub items: Vec<&'a ContentItem>,
}

/// `ceil(item_count / per_page)`; zero for an empty sequence.
pub fn total_pages(item_count: usize, per_page: NonZeroUsize) -> usize {
    item_count.div_ceil(per_page.get())
}

/// Address of the page at 1-based `index`.
///
/// - Index 1 returns `path_base` unmodified.
/// - Later pages append `page_dir` and the index, each followed by `/`,
///   inserting a `/` after `path_base` when it is non-empty and lacks one.
///   Slashes around `page_dir` are ignored; an empty `page_dir` is omitted.
pub fn page_path(path_base: &str, page_dir: &str, index: usize) -> String {
    if index <= 1 {
        return path_base.to_string();
    }
    let mut path = path_base.to_string();
    if !path.is_empty() && !path.ends_with('/') {
        path.push('/');
    }
    let dir = page_dir.trim_matches('/');
    if !dir.is_empty() {
        path.push_str(dir);
        path.push('/');
    }
    path.push_str(&index.to_string());
    path.push('/');
    path
}

/// Split `items` into addressed pages of at most `per_page` items each.
///
/// Returns no pages for an empty sequence.
pub fn paginate<'a>(
    items: Vec<&'a ContentItem>,
    per_page: NonZeroUsize,
    path_base: &str,
    page_dir: &str,
) -> Vec<PageSlice<'a>> {
    let total = total_pages(items.len(), per_page);
    let link = |index: usize| PageLink {
        index,
        path: page_path(path_base, page_dir, index),
    };

    items
        .chunks(per_page.get())
        .enumerate()
        .map(|(i, chunk)| {
            let index = i + 1;
            PageSlice {
                index,
                total_pages: total,
                path: page_path(path_base, page_dir, index),
                prev: (index > 1).then(|| link(index - 1)),
                next: (index < total).then(|| link(index + 1)),
                items: chunk.to_vec(),
            }
        })
        .collect()
}
