//! Listing order.
//!
//! Two stable passes, applied in sequence:
//!
//! 1. [`order_by_field`] sorts by the configured field (`-date` by default):
//!    dates chronologically, numbers numerically, strings lexically,
//!    `false` before `true`.
//! 2. [`pin_sticky`] sorts by sticky priority, highest first.
//!
//! Because the second pass is stable, pinned items float to the front while
//! items with equal priority keep the order established by the first pass.
//! A single combined comparator would have to encode "sticky first, then
//! field" up front; staging the passes keeps each one trivially correct.
//!
//! Both passes take ownership of a reference vector and return a new one.
//! The referenced items are never touched.

use crate::types::{ContentItem, FieldKind};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("order_by must name a field")]
    EmptyField,
    #[error("order_by field '{0}' does not exist on any selected item")]
    UnknownField(String),
    #[error("order_by field '{0}' holds values of different types across items")]
    MixedFieldTypes(String),
}

/// A parsed `order_by` setting: field name plus direction.
///
/// The string form is the field name, prefixed with `-` for descending:
/// `"-date"`, `"title"`, `"-rating"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub descending: bool,
}

impl Default for OrderBy {
    fn default() -> Self {
        Self {
            field: "date".to_string(),
            descending: true,
        }
    }
}

impl FromStr for OrderBy {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (field, descending) = match s.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        if field.is_empty() {
            return Err(OrderError::EmptyField);
        }
        Ok(Self {
            field: field.to_string(),
            descending,
        })
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            f.write_str(&self.field)
        }
    }
}

impl Serialize for OrderBy {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OrderBy {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Stable sort by the field named in `order`.
///
/// Items lacking the field sort below every item that has it (first when
/// ascending, last when descending). Fails when no item has the field, or
/// when the field holds values of different kinds.
pub fn order_by_field<'a>(
    items: Vec<&'a ContentItem>,
    order: &OrderBy,
) -> Result<Vec<&'a ContentItem>, OrderError> {
    if items.is_empty() {
        return Ok(items);
    }

    let mut keyed: Vec<_> = items
        .into_iter()
        .map(|item| (item.field(&order.field), item))
        .collect();

    let mut kind: Option<FieldKind> = None;
    for value in keyed.iter().filter_map(|(v, _)| v.as_ref()) {
        match kind {
            None => kind = Some(value.kind()),
            Some(k) if k != value.kind() => {
                return Err(OrderError::MixedFieldTypes(order.field.clone()));
            }
            Some(_) => {}
        }
    }
    if kind.is_none() {
        return Err(OrderError::UnknownField(order.field.clone()));
    }

    // slice::sort_by is stable; reversing the comparator keeps ties equal.
    keyed.sort_by(|(a, _), (b, _)| {
        let ord = match (a, b) {
            (Some(a), Some(b)) => a.natural_cmp(b).unwrap_or(Ordering::Equal),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        if order.descending { ord.reverse() } else { ord }
    });

    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

/// Stable sort by sticky priority, highest first (missing counts as 0).
pub fn pin_sticky(mut items: Vec<&ContentItem>) -> Vec<&ContentItem> {
    items.sort_by(|a, b| b.sticky().total_cmp(&a.sticky()));
    items
}
