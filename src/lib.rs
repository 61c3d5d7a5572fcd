//! # Section Pager
//!
//! Builds the paginated listing pages for one curated section of a static
//! site. Every content item filed under the section's category is selected,
//! put in display order, and split into fixed-size pages with stable
//! addresses. The page descriptors are handed to a renderer; this crate never
//! renders markup itself.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Select    collection  →  section items      (exact category match)
//! 2. Order     items       →  ordered items      (field sort, then sticky sort)
//! 3. Paginate  ordered     →  page slices        (chunks, indices, addresses)
//! 4. Emit      slices      →  page descriptors   (layouts + extra data attached)
//! ```
//!
//! Each stage is a pure function from one sequence of `&ContentItem` to the
//! next, so the whole pipeline ([`pipeline::run`]) can be tested without
//! touching the filesystem. Loading content and configuration, and writing
//! `pages.json`, happen around the pipeline in the binary.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `ContentItem`, `Category`, and orderable `FieldValue`s |
//! | [`select`] | Stage 1 — category selection |
//! | [`order`] | Stage 2 — `order_by` field sort and sticky pin sort |
//! | [`paginate`] | Stage 3 — chunking and the page addressing rule |
//! | [`emit`] | Stage 4 — `Page` descriptors and the `pages.json` manifest |
//! | [`pipeline`] | Wires the four stages together; the single entry point |
//! | [`config`] | `config.toml` loading, merging, validation, stock config |
//! | [`content`] | Loads the collection from front matter or a JSON file |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Two Stable Sorts Instead of One Comparator
//!
//! Sticky items must float to the front, but items with the same sticky
//! priority must keep the configured order among themselves. Sorting by the
//! configured field first and then stably by sticky priority gives exactly
//! that, and each pass stays simple enough to test on its own.
//!
//! ## Explicit Configuration
//!
//! The pipeline reads nothing ambient. [`config::SiteConfig::listing`]
//! validates the user's settings and fills in defaults once, producing a
//! [`config::ListingConfig`] that is passed to [`pipeline::run`]. Invalid
//! settings (`per_page = 0`, an unknown `order_by` field) fail the run; they
//! are never silently replaced with something that works.
//!
//! ## Empty Is Not an Error
//!
//! A missing collection or a category with no items yields zero pages. The
//! renderer receives an empty list and has nothing to do.
//!
//! ## Case-Sensitive Categories
//!
//! `"Featured"` and `"featured"` are different categories. A casing mismatch
//! silently selects fewer items; guessing at a looser match would make the
//! listing depend on which spelling happened to win.

pub mod config;
pub mod content;
pub mod emit;
pub mod order;
pub mod output;
pub mod paginate;
pub mod pipeline;
pub mod select;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
