// src/table.rs
//
// Presentation pipeline for the result table. Everything here is pure:
// column derivation, sorting, per-cell classification, header cosmetics.
// The GUI composes these; export reuses the column derivation.

use std::borrow::Cow;
use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::store::Record;

/* ---------------- Columns ---------------- */

/// Column schema: the key order of the first record. Later records never
/// widen or reorder the schema; rows missing a field render as empty.
pub fn derive_columns(records: &[Record]) -> Vec<String> {
    match records.first() {
        Some(first) => first.keys().cloned().collect(),
        None => Vec::new(),
    }
}

/// Cosmetic header text: `first_name` → `First Name`. The raw key stays
/// the identifier for sorting and export.
pub fn capitalize_header(column: &str) -> String {
    column
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                None => s!(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/* ---------------- Sorting ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Transient UI sort state. Never persisted.
#[derive(Clone, Debug, Default)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header-click state machine: same column toggles direction, a new
    /// column starts over at ascending.
    pub fn click(&mut self, column: &str) {
        let direction = if self.key.as_deref() == Some(column)
            && self.direction == SortDirection::Asc
        {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.key = Some(s!(column));
        self.direction = direction;
    }
}

/// Text a value sorts as. Missing and null order as the empty string.
fn sort_text(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Number(n)) => Cow::Owned(n.to_string()),
        Some(Value::Bool(b)) => Cow::Owned(b.to_string()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

fn cmp_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    // Numeric columns compare numerically; everything else falls back to
    // native string ordering (null/missing as empty).
    if let (Some(Value::Number(x)), Some(Value::Number(y))) = (a, b) {
        let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    sort_text(a).cmp(&sort_text(b))
}

/// Produce a sorted copy; the stored record order is never mutated.
/// Tie order is unspecified.
pub fn sort_records(records: &[Record], sort: &SortState) -> Vec<Record> {
    let mut out = records.to_vec();
    if let Some(key) = sort.key.as_deref() {
        out.sort_unstable_by(|a, b| {
            let ord = cmp_values(a.get(key), b.get(key));
            match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
    out
}

/* ---------------- Cell classification ---------------- */

/// Semantic type of a cell, for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Raw,
    Email,
    Phone,
    Link,
    Text,
}

/// What the table actually draws: display text plus an optional link target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub kind: CellKind,
    pub text: String,
    pub href: Option<String>,
}

pub const EMPTY_PLACEHOLDER: &str = "—";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});
// Optional leading +, 10-15 digits total
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d{10,15}$").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(https?://|www\.).+").unwrap());

/// One link-producing classifier: a pattern plus a target formatter.
/// Ordered; first match wins. Adding a kind means adding a row here,
/// the rendering side only sees `CellView`.
struct Classifier {
    kind: CellKind,
    pattern: &'static Lazy<Regex>,
    href: fn(&str) -> String,
}

static CLASSIFIERS: &[Classifier] = &[
    Classifier { kind: CellKind::Email, pattern: &EMAIL_RE, href: |s| format!("mailto:{s}") },
    Classifier { kind: CellKind::Phone, pattern: &PHONE_RE, href: |s| format!("tel:{s}") },
    Classifier {
        kind: CellKind::Link,
        pattern: &LINK_RE,
        // Visible text keeps the original; only the target gains a scheme.
        href: |s| if s.starts_with("http") { s!(s) } else { format!("https://{s}") },
    },
];

/// Classify a single cell value. Applied per cell, not per column: an
/// irregular column may mix kinds row to row.
pub fn classify(value: Option<&Value>) -> CellView {
    let text = match value {
        None | Some(Value::Null) => {
            return CellView { kind: CellKind::Empty, text: s!(EMPTY_PLACEHOLDER), href: None };
        }
        Some(Value::String(s)) => s!(s.trim()),
        // Numbers run through the same patterns: a bare 11-digit number is
        // a phone number as far as the table is concerned.
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => {
            return CellView { kind: CellKind::Raw, text: other.to_string(), href: None };
        }
    };

    for c in CLASSIFIERS {
        if c.pattern.is_match(&text) {
            let href = (c.href)(&text);
            return CellView { kind: c.kind, text, href: Some(href) };
        }
    }
    CellView { kind: CellKind::Text, text, href: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_compare_numerically() {
        let (a, b) = (json!(9), json!(10));
        assert_eq!(cmp_values(Some(&a), Some(&b)), Ordering::Less);
    }

    #[test]
    fn null_and_missing_order_as_empty() {
        let v = json!("x");
        assert_eq!(cmp_values(None, Some(&v)), Ordering::Less);
        assert_eq!(cmp_values(Some(&Value::Null), None), Ordering::Equal);
    }

    #[test]
    fn mixed_types_fall_back_to_string_order() {
        let (a, b) = (json!(2), json!("10"));
        // "2" > "10" as strings; no cross-type coercion
        assert_eq!(cmp_values(Some(&a), Some(&b)), Ordering::Greater);
    }
}
