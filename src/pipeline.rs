//! The listing pipeline: select → order → paginate → emit.
//!
//! [`run`] is the single entry point. It is a pure function of the content
//! collection and a [`ListingConfig`]: no I/O, no global state, nothing
//! cached between calls. Each stage consumes the previous stage's output
//! and returns a new sequence of references into the caller's collection.
//!
//! ## Outcomes
//!
//! | Input | Result |
//! |-------|--------|
//! | no collection (`None`) | `Ok(vec![])` |
//! | nothing in the category | `Ok(vec![])` |
//! | order field absent on every selected item | `Err(PipelineError::Order)` |
//! | order field with mixed value types | `Err(PipelineError::Order)` |
//! | otherwise | `Ok(pages)`, one per `per_page` chunk |
//!
//! An empty page list is a complete, valid result; the renderer has nothing
//! to do.

use crate::config::ListingConfig;
use crate::emit::{Page, emit};
use crate::order::{OrderError, order_by_field, pin_sticky};
use crate::paginate::paginate;
use crate::select::select;
use crate::types::ContentItem;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PipelineError {
    #[error("Ordering error: {0}")]
    Order(#[from] OrderError),
}

pub fn run<'a>(
    collection: Option<&'a [ContentItem]>,
    config: &ListingConfig,
) -> Result<Vec<Page<'a>>, PipelineError> {
    let Some(collection) = collection else {
        tracing::debug!("No content collection; nothing to list");
        return Ok(Vec::new());
    };

    let selected = select(collection, &config.category);
    tracing::debug!(
        category = %config.category,
        total = collection.len(),
        selected = selected.len(),
        "Selected section items"
    );
    if selected.is_empty() {
        return Ok(Vec::new());
    }

    let ordered = pin_sticky(order_by_field(selected, &config.order_by)?);
    tracing::debug!(order_by = %config.order_by, "Ordered section items");

    let slices = paginate(
        ordered,
        config.per_page,
        &config.path_base,
        &config.page_dir,
    );
    tracing::debug!(
        pages = slices.len(),
        per_page = config.per_page.get(),
        "Paginated section items"
    );

    Ok(emit(slices, &config.layouts, &config.extra_data))
}
