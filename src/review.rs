//! Review records and the ingestion adapter.
//!
//! Upstream sources hand over reviews either as bare strings or as JSON
//! objects whose text lives under one of several field names. Everything is
//! normalised into [`Review`] here, before it reaches the analysis core.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use utoipa::ToSchema;

/// Text fields checked in order; the first non-empty one wins.
pub const TEXT_FIELDS: [&str; 5] = ["review_text", "review", "text", "body", "content"];

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());
static HANDLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[@#]\w+").unwrap());
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[a-zA-Z/!][^>]*>").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Review {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rating: None,
            reviewer: None,
            date: None,
            source: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Normalises one upstream record. Returns `None` for anything that has
    /// no usable text: missing or non-string text fields, or text that is
    /// empty after cleanup.
    pub fn from_value(value: &Value) -> Option<Review> {
        match value {
            Value::String(s) => {
                let text = clean_text(s);
                (!text.is_empty()).then(|| Review::new(text))
            }
            Value::Object(map) => {
                let raw = TEXT_FIELDS
                    .iter()
                    .filter_map(|field| map.get(*field))
                    .find(|v| !is_blank(v))?;
                let text = clean_text(raw.as_str()?);
                if text.is_empty() {
                    return None;
                }

                Some(Review {
                    text,
                    rating: map.get("rating").and_then(parse_rating),
                    reviewer: map.get("reviewer").and_then(non_empty_string),
                    date: map.get("date").and_then(parse_date),
                    source: map.get("source").and_then(non_empty_string),
                })
            }
            _ => None,
        }
    }
}

/// Normalises a batch, silently dropping malformed records.
pub fn ingest(values: &[Value]) -> Vec<Review> {
    let reviews: Vec<Review> = values.iter().filter_map(Review::from_value).collect();
    let dropped = values.len() - reviews.len();
    if dropped > 0 {
        warn!("Dropped {} of {} review records without usable text", dropped, values.len());
    }
    reviews
}

/// Strips markup, URLs, `@mentions` and `#hashtags`, then collapses
/// whitespace.
pub fn clean_text(raw: &str) -> String {
    let text = if TAG_RE.is_match(raw) {
        let fragment = Html::parse_fragment(raw);
        fragment.root_element().text().collect::<Vec<_>>().join(" ")
    } else {
        raw.to_string()
    };
    let text = URL_RE.replace_all(&text, "");
    let text = HANDLE_RE.replace_all(&text, "");
    SPACE_RE.replace_all(&text, " ").trim().to_string()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Accepts numbers and strings such as `"4.5"` or `"4 out of 5"`.
fn parse_rating(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => NUMBER_RE.find(s).and_then(|m| m.as_str().parse().ok()),
        _ => None,
    }
}

fn parse_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}
