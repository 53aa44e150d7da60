//! Rendering of backend-supplied lists (news, horses, reviews).
//!
//! The payload shapes belong to the backend, so items are read leniently:
//! the payload is either an array or an object with an `items` array, and
//! each item contributes a heading and a body from the first field present.

use crate::api::ApiError;
use crate::metrics::SiteMetrics;
use maud::{html, Markup};
use serde_json::Value;
use tracing::warn;

const HEADING_KEYS: [&str; 3] = ["title", "name", "author"];
const BODY_KEYS: [&str; 5] = ["summary", "body", "text", "content", "description"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub heading: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    Items(Vec<FeedItem>),
    /// The fetch failed; the page shows a localized note instead
    Unavailable,
}

fn first_str(item: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| item.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

fn to_item(value: &Value) -> Option<FeedItem> {
    let item = match value {
        Value::String(text) if !text.trim().is_empty() => FeedItem {
            heading: None,
            body: Some(text.trim().to_string()),
        },
        Value::Object(_) => FeedItem {
            heading: first_str(value, &HEADING_KEYS),
            body: first_str(value, &BODY_KEYS),
        },
        _ => return None,
    };

    if item.heading.is_none() && item.body.is_none() {
        return None;
    }
    Some(item)
}

impl Feed {
    /// Items of a payload; anything unrecognized yields no items.
    pub fn from_payload(payload: Option<&Value>) -> Self {
        let entries = match payload {
            Some(Value::Array(entries)) => entries.as_slice(),
            Some(object) if object.is_object() => object
                .get("items")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default(),
            _ => &[],
        };

        Feed::Items(entries.iter().filter_map(to_item).collect())
    }

    /// Feed from a backend call; failures are logged and counted.
    pub fn from_result(result: Result<Option<Value>, ApiError>, source: &str) -> Self {
        match result {
            Ok(payload) => Self::from_payload(payload.as_ref()),
            Err(e) => {
                warn!("Failed to fetch {}: {}", source, e);
                SiteMetrics::global().record_content_fetch_failure();
                Feed::Unavailable
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Feed::Items(items) if items.is_empty())
    }

    /// The feed as a list. `empty` is shown when there are no items; when it
    /// is `None` an empty feed renders nothing.
    pub fn render(&self, unavailable: &str, empty: Option<&str>) -> Markup {
        match self {
            Feed::Unavailable => html! {
                p class="feed-unavailable text-slate-500" { (unavailable) }
            },
            Feed::Items(items) if items.is_empty() => html! {
                @if let Some(empty) = empty {
                    p class="feed-empty" { (empty) }
                }
            },
            Feed::Items(items) => html! {
                ul class="feed grid md:grid-cols-2 gap-4" {
                    @for item in items {
                        li class="p-5 rounded-xl bg-white shadow" {
                            @if let Some(heading) = &item.heading {
                                div class="font-medium mb-1" { (heading) }
                            }
                            @if let Some(body) = &item.body {
                                p class="text-sm text-slate-600" { (body) }
                            }
                        }
                    }
                }
            },
        }
    }
}
