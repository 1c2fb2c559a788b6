//! Parsing helpers for catalog entries written by the assistant.
//!
//! Responses were produced by a language model and are only mostly JSON, so parsing
//! falls back to repairing the most common mistakes before giving up.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::server::util::text::slugify;

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").expect("valid regex"));
static SINGLE_QUOTED_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([A-Za-z0-9_]+)'\s*:").expect("valid regex"));
static SINGLE_QUOTED_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*'([^']*)'").expect("valid regex"));
static CAPITALIZED_TRUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bTrue\b").expect("valid regex"));
static CAPITALIZED_FALSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bFalse\b").expect("valid regex"));
static CAPITALIZED_NONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bNone\b").expect("valid regex"));

/// Patterns tried in order against each free-text field when looking for an inventory number.
static INVENTORY_NUMBER_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // Labelled: "Inventario: GX-0042", "nº 1234/B"
        Regex::new(r"(?i)(?:inventario|n[ºo]|num(?:ero)?)[\s:\-]*([A-Z0-9][A-Z0-9\-_/]{2,})")
            .expect("valid regex"),
        // Code: "ABC-1234"
        Regex::new(r"\b([A-Z]{2,5}-\d{2,6})\b").expect("valid regex"),
        // Long digit run
        Regex::new(r"\b(\d{4,})\b").expect("valid regex"),
    ]
});

/// Free-text fields searched for an inventory number, in order.
const INVENTORY_NUMBER_FIELDS: [&str; 4] = [
    "descripcion_breve",
    "observaciones",
    "name",
    "descripcion_detallada",
];

/// Publication status of an imported item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Draft,
    Published,
    Approved,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Approved => "approved",
        }
    }
}

/// Repairs common JSON mistakes
///
/// Replaces typographic quotes, drops a byte order mark and trailing commas, and
/// rewrites single-quoted keys and values as double-quoted ones. Capitalized `True`,
/// `False` and `None` become their JSON literals. Returns `None` for blank input.
pub fn sanitize_json(input: &str) -> Option<String> {
    let s = input.trim_start_matches('\u{feff}').trim();
    if s.is_empty() {
        return None;
    }

    let s = s
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201c}', '\u{201d}'], "\"");
    let s = TRAILING_COMMA.replace_all(&s, "$1");
    let s = SINGLE_QUOTED_KEY.replace_all(&s, "\"$1\":");
    let s = SINGLE_QUOTED_VALUE.replace_all(&s, ": \"$1\"");
    let s = CAPITALIZED_TRUE.replace_all(&s, "true");
    let s = CAPITALIZED_FALSE.replace_all(&s, "false");
    let s = CAPITALIZED_NONE.replace_all(&s, "null");

    Some(s.into_owned())
}

/// Parses a stored response into a JSON object, repairing it when needed
pub fn parse_entry(response: Option<&str>) -> Option<Map<String, Value>> {
    let response = response?;

    let parsed = serde_json::from_str::<Value>(response).ok().or_else(|| {
        sanitize_json(response).and_then(|repaired| serde_json::from_str(&repaired).ok())
    });

    match parsed {
        Some(Value::Object(entry)) => Some(entry),
        _ => None,
    }
}

/// Whether a JSON value counts as present: not null, false, zero or an empty string
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(value)) => *value,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(value)) => !value.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Gets a field as trimmed text, `None` when missing or blank
pub fn text_field(entry: &Map<String, Value>, field: &str) -> Option<String> {
    let text = match entry.get(field)? {
        Value::Null => return None,
        Value::String(text) => text.trim().to_string(),
        other => other.to_string(),
    };

    (!text.is_empty()).then_some(text)
}

/// Derives the publication status of an entry
///
/// Approved entries need an image to stay approved and are published otherwise.
pub fn normalize_status(entry: &Map<String, Value>) -> ItemStatus {
    let status = entry
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase();

    let approved = is_truthy(entry.get("approved_at")) || status == "approved";
    let published = is_truthy(entry.get("published_at")) || status == "published";

    if approved && has_image(entry) {
        ItemStatus::Approved
    } else if approved || published {
        ItemStatus::Published
    } else {
        ItemStatus::Draft
    }
}

/// Whether the entry is visible once imported, drafts are not
pub fn passes_visibility(entry: &Map<String, Value>) -> bool {
    normalize_status(entry) != ItemStatus::Draft
}

pub fn has_image(entry: &Map<String, Value>) -> bool {
    text_field(entry, "image_url").is_some()
}

/// Finds the inventory number of an entry
///
/// Uses the explicit `inventory_number` field when present, otherwise the first pattern
/// match in the free-text fields, otherwise a stable synthetic number built from the
/// parish and the conversation ID.
pub fn extract_inventory_number(
    entry: &Map<String, Value>,
    conversation_id: Uuid,
    parish: &str,
) -> String {
    if let Some(number) = text_field(entry, "inventory_number") {
        return number;
    }

    for field in INVENTORY_NUMBER_FIELDS {
        let Some(text) = text_field(entry, field) else {
            continue;
        };

        for pattern in INVENTORY_NUMBER_PATTERNS.iter() {
            if let Some(number) = pattern.captures(&text).and_then(|c| c.get(1)) {
                return number.as_str().to_string();
            }
        }
    }

    let parish = match slugify(parish) {
        slug if slug.is_empty() => "sin-parroquia".to_string(),
        slug => slug,
    };
    let id: String = conversation_id.to_string().chars().take(8).collect();

    format!("AUTO-{parish}-{id}")
}
