//! CLI output formatting.
//!
//! Output is **information-centric**: each page leads with its position and
//! address, and each item with its position on the page and its title.
//! Pin priority and hidden status are shown as trailing context because they
//! explain why an item sits where it does.
//!
//! ```text
//! Featured: 3 items on 2 pages
//! 001 featured/ (2 items)
//!     001 Harbour at dusk [sticky 1]
//!     002 Studio visit [hidden]
//! 002 featured/page/2/ (1 item)
//!     001 Winter light
//! ```
//!
//! Format functions return `Vec<String>` and are pure; `print_*` wrappers
//! write to stdout.

use crate::emit::Page;
use crate::types::ContentItem;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Format an item line: position, title (or slug if untitled), then flags.
///
/// ```text
/// 001 Harbour at dusk [sticky 1]
/// 002 (studio-visit) [hidden]
/// ```
fn item_line(index: usize, item: &ContentItem) -> String {
    let mut line = if item.title.is_empty() {
        format!("{} ({})", format_index(index), item.slug)
    } else {
        format!("{} {}", format_index(index), item.title)
    };
    if item.sticky() != 0.0 {
        line.push_str(&format!(" [sticky {}]", item.sticky()));
    }
    if item.hidden {
        line.push_str(" [hidden]");
    }
    line
}

/// Format the produced pages for one section.
pub fn format_listing_output(category: &str, pages: &[Page<'_>]) -> Vec<String> {
    let total_items: usize = pages.iter().map(|p| p.items.len()).sum();
    if pages.is_empty() {
        return vec![format!("{category}: no items, no pages")];
    }

    let mut lines = vec![format!(
        "{category}: {} on {}",
        plural(total_items, "item", "items"),
        plural(pages.len(), "page", "pages"),
    )];
    for page in pages {
        let path = if page.path.is_empty() { "/" } else { page.path.as_str() };
        lines.push(format!(
            "{} {} ({})",
            format_index(page.index),
            path,
            plural(page.items.len(), "item", "items")
        ));
        for (i, item) in page.items.iter().enumerate() {
            lines.push(format!("{}{}", indent(1), item_line(i + 1, item)));
        }
    }
    lines
}

/// Print listing output to stdout.
pub fn print_listing_output(category: &str, pages: &[Page<'_>]) {
    for line in format_listing_output(category, pages) {
        println!("{}", line);
    }
}
