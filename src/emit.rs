//! Page descriptor assembly.
//!
//! Last pipeline stage. Wraps each [`PageSlice`] into the [`Page`] descriptor
//! handed to the renderer, attaching the layout fallback chain and the extra
//! data configured for the section. Pure structural assembly: no decisions
//! are made here and nothing can fail.

use crate::paginate::{PageLink, PageSlice};
use crate::types::{ContentItem, FieldMap};
use serde::Serialize;

/// A listing page ready for rendering.
///
/// `layout_candidates` is an ordered fallback chain; the renderer uses the
/// first template that exists. `extra_data` is identical on every page of
/// the section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    pub index: usize,
    pub total_pages: usize,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
    pub layout_candidates: Vec<String>,
    pub extra_data: FieldMap,
    pub items: Vec<&'a ContentItem>,
}

/// The `pages.json` hand-off written by the CLI.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub category: &'a str,
    pub total_items: usize,
    pub pages: &'a [Page<'a>],
}

impl<'a> Manifest<'a> {
    pub fn new(category: &'a str, pages: &'a [Page<'a>]) -> Self {
        Self {
            category,
            total_items: pages.iter().map(|p| p.items.len()).sum(),
            pages,
        }
    }
}

pub fn emit<'a>(
    slices: Vec<PageSlice<'a>>,
    layouts: &[String],
    extra_data: &FieldMap,
) -> Vec<Page<'a>> {
    slices
        .into_iter()
        .map(|slice| Page {
            index: slice.index,
            total_pages: slice.total_pages,
            path: slice.path,
            prev: slice.prev,
            next: slice.next,
            layout_candidates: layouts.to_vec(),
            extra_data: extra_data.clone(),
            items: slice.items,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginate::paginate;
    use crate::test_helpers::*;
    use serde_json::json;
    use std::num::NonZeroUsize;

    #[test]
    fn every_page_gets_layouts_and_extra_data() {
        let items = numbered_items(15, "Featured");
        let slices = paginate(
            items.iter().collect(),
            NonZeroUsize::new(5).unwrap(),
            "f/",
            "page",
        );
        let layouts = vec!["featured".to_string(), "index".to_string()];
        let mut extra = FieldMap::new();
        extra.insert("__index".into(), json!(true));
        extra.insert("subtitle".into(), json!("Featured"));

        let pages = emit(slices, &layouts, &extra);

        assert_eq!(pages.len(), 3);
        for page in &pages {
            assert_eq!(page.layout_candidates, layouts);
            assert_eq!(page.extra_data, extra);
            assert_eq!(page.total_pages, 3);
        }
    }

    #[test]
    fn slice_fields_carried_through() {
        let items = numbered_items(3, "Featured");
        let slices = paginate(
            items.iter().collect(),
            NonZeroUsize::new(2).unwrap(),
            "f/",
            "page",
        );
        let expected = slices.clone();

        let pages = emit(slices, &[], &FieldMap::new());

        for (page, slice) in pages.iter().zip(&expected) {
            assert_eq!(page.index, slice.index);
            assert_eq!(page.path, slice.path);
            assert_eq!(page.prev, slice.prev);
            assert_eq!(page.next, slice.next);
            assert_eq!(page.items, slice.items);
        }
    }

    #[test]
    fn manifest_counts_items_across_pages() {
        let items = numbered_items(7, "Featured");
        let slices = paginate(
            items.iter().collect(),
            NonZeroUsize::new(3).unwrap(),
            "f/",
            "page",
        );
        let pages = emit(slices, &[], &FieldMap::new());
        let manifest = Manifest::new("Featured", &pages);

        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["category"], json!("Featured"));
        assert_eq!(value["total_items"], json!(7));
        assert_eq!(value["pages"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn empty_slices_emit_nothing() {
        assert!(emit(Vec::new(), &["index".to_string()], &FieldMap::new()).is_empty());
    }

    #[test]
    fn serializes_for_the_renderer() {
        let items = vec![item("Hello", "2024-01-05").category("Featured").build()];
        let slices = paginate(
            items.iter().collect(),
            NonZeroUsize::new(10).unwrap(),
            "f/",
            "page",
        );
        let pages = emit(slices, &["index".to_string()], &FieldMap::new());

        let value = serde_json::to_value(&pages[0]).unwrap();
        assert_eq!(value["index"], json!(1));
        assert_eq!(value["total_pages"], json!(1));
        assert_eq!(value["path"], json!("f/"));
        assert_eq!(value["layout_candidates"], json!(["index"]));
        assert_eq!(value["items"][0]["title"], json!("Hello"));
        assert!(value.get("prev").is_none());
        assert!(value.get("next").is_none());
    }
}
