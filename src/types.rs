//! Content data model shared by the loader and every pipeline stage.
//!
//! A [`ContentItem`] is owned by whoever loaded the collection. The pipeline
//! only ever holds `&ContentItem` references, reorders them, and hands them
//! to the emitted pages; it never mutates an item.
//!
//! ## Input Shape
//!
//! Items deserialize from JSON (or from TOML front matter converted to JSON):
//!
//! ```json
//! {
//!   "title": "Winter light",
//!   "date": "2024-01-05",
//!   "categories": ["Featured", { "name": "Travel", "color": "blue" }],
//!   "sticky": 2,
//!   "hidden": false,
//!   "rating": 4
//! }
//! ```
//!
//! Any key that is not a known field lands in [`ContentItem::extra`] and can
//! still be used as an ordering key.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;

pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// A named tag attached to a content item.
///
/// Deserializes from either a bare string (`"Featured"`) or a table with a
/// required `name` plus arbitrary metadata. Equality of categories for
/// selection purposes is exact, case-sensitive equality of `name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    #[serde(flatten)]
    pub meta: FieldMap,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: FieldMap::new(),
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Table {
            name: String,
            #[serde(flatten)]
            meta: FieldMap,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Table(Table),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Name(name) => Category::new(name),
            Repr::Table(t) => Category {
                name: t.name,
                meta: t.meta,
            },
        })
    }
}

/// One publishable entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(with = "date_format")]
    pub date: NaiveDateTime,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated: Option<NaiveDateTime>,
    /// Pin priority, any number. Absent is equivalent to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky: Option<f64>,
    /// Hidden from regular listings. Has no effect on section selection.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    /// Every other field, opaque to the pipeline except as an ordering key.
    #[serde(flatten)]
    pub extra: FieldMap,
}

impl ContentItem {
    /// Effective pin priority (missing → 0).
    pub fn sticky(&self) -> f64 {
        self.sticky.unwrap_or(0.0)
    }

    /// Whether any category name equals `name` exactly.
    pub fn in_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Look up a field by name for ordering.
    ///
    /// Built-in fields resolve to their typed values. Anything else is read
    /// from [`extra`](Self::extra): strings that parse as dates compare
    /// chronologically, other strings as text. JSON null, arrays and objects
    /// have no natural order and count as missing.
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "date" => Some(FieldValue::Date(self.date)),
            "updated" => self.updated.map(FieldValue::Date),
            "title" => Some(FieldValue::Text(&self.title)),
            "slug" => Some(FieldValue::Text(&self.slug)),
            "sticky" => Some(FieldValue::Number(self.sticky())),
            "hidden" => Some(FieldValue::Bool(self.hidden)),
            _ => match self.extra.get(name)? {
                serde_json::Value::Number(n) => n.as_f64().map(FieldValue::Number),
                serde_json::Value::String(s) => Some(
                    parse_date(s)
                        .map(FieldValue::Date)
                        .unwrap_or(FieldValue::Text(s)),
                ),
                serde_json::Value::Bool(b) => Some(FieldValue::Bool(*b)),
                _ => None,
            },
        }
    }
}

/// A field value with a natural order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Date(NaiveDateTime),
    Number(f64),
    Text(&'a str),
    Bool(bool),
}

/// Discriminant of a [`FieldValue`], used to reject mixed-kind ordering keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    Number,
    Text,
    Bool,
}

impl FieldValue<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Date(_) => FieldKind::Date,
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Bool(_) => FieldKind::Bool,
        }
    }

    /// Natural order between two values of the same kind.
    ///
    /// Returns `None` for values of different kinds; callers check kinds
    /// up front so this never happens during a sort.
    pub fn natural_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            (FieldValue::Number(a), FieldValue::Number(b)) => Some(a.total_cmp(b)),
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Parse a date or date-time in any of the accepted input formats.
///
/// - RFC 3339 with offset (converted to UTC)
/// - `YYYY-MM-DDTHH:MM:SS[.f]` and `YYYY-MM-DD HH:MM:SS[.f]`
/// - `YYYY-MM-DD` (midnight)
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

mod date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw:?}")))
    }

    pub mod option {
        use chrono::NaiveDateTime;
        use serde::{Deserialize, Deserializer, Serializer, de::Error};

        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDateTime>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(d) => super::serialize(d, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<NaiveDateTime>, D::Error> {
            match Option::<String>::deserialize(d)? {
                Some(raw) => super::super::parse_date(&raw)
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("invalid date: {raw:?}"))),
                None => Ok(None),
            }
        }
    }
}
