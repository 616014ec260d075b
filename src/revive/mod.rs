//! Date revival for decoded JSON bodies.
//!
//! The API sends timestamps as ISO-8601 strings. [`revive`] walks a decoded
//! body and promotes every string shaped like `YYYY-MM-DD` or
//! `YYYY-MM-DD(T| )HH:MM:SS[.fff][Z|±HH[:MM]]` to a [`RevivedValue::Date`].
//! Anything else is returned untouched.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use once_cell::sync::OnceCell;
use regex::Regex;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

static ISO_DATE: OnceCell<Regex> = OnceCell::new();
static ISO_DATETIME: OnceCell<Regex> = OnceCell::new();
static TRAILING_OFFSET: OnceCell<Regex> = OnceCell::new();

fn iso_date() -> &'static Regex {
    ISO_DATE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"))
}

fn iso_datetime() -> &'static Regex {
    ISO_DATETIME.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}(?::?\d{2})?)?$")
            .expect("datetime pattern is valid")
    })
}

// Trailing numeric offset, minutes and colon optional: `+00`, `+0200`, `-05:00`.
fn trailing_offset() -> &'static Regex {
    TRAILING_OFFSET.get_or_init(|| {
        Regex::new(r"([+-])(\d{2}):?(\d{2})?$").expect("offset pattern is valid")
    })
}

/// A decoded JSON value in which date-shaped strings have become dates.
#[derive(Debug, Clone, PartialEq)]
pub enum RevivedValue {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number.
    Number(serde_json::Number),
    /// A string that is not date-shaped.
    String(String),
    /// A revived timestamp.
    Date(DateTime<Utc>),
    /// JSON array.
    Array(Vec<RevivedValue>),
    /// JSON object, in wire order.
    Object(Vec<(String, RevivedValue)>),
}

impl RevivedValue {
    /// An empty object, the result of a `204 No Content`.
    pub fn empty_object() -> Self {
        Self::Object(Vec::new())
    }

    /// Looks up a key of an object.
    pub fn get(&self, key: &str) -> Option<&RevivedValue> {
        match self {
            Self::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Returns the date if this value is one.
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Date(date) => Some(date),
            _ => None,
        }
    }

    /// Returns the string if this value is a plain string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this value is an array.
    pub fn as_array(&self) -> Option<&[RevivedValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Converts back into plain JSON, rendering dates as
    /// `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => serde_json::Value::Number(n.clone()),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Date(d) => serde_json::Value::String(render_date(d)),
            Self::Array(items) => {
                serde_json::Value::Array(items.iter().map(RevivedValue::to_json).collect())
            }
            Self::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for RevivedValue {
    /// Structural conversion only; no strings are promoted.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(RevivedValue::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, RevivedValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for RevivedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Date(d) => serializer.serialize_str(&render_date(d)),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

/// Canonical UTC rendering with millisecond precision.
pub fn render_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// True when `value` matches one of the two accepted ISO shapes.
pub fn is_iso_date_string(value: &str) -> bool {
    iso_date().is_match(value) || iso_datetime().is_match(value)
}

/// Parses a date-shaped string. Returns `None` when the string does not match
/// either shape or names an impossible date (e.g. month 13).
///
/// Date-only values and date-times without an offset are read as UTC.
pub fn parse_iso_date(value: &str) -> Option<DateTime<Utc>> {
    if iso_date().is_match(value) {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc());
    }

    if !iso_datetime().is_match(value) {
        return None;
    }

    let (normalized, has_offset) = normalize_datetime(value);

    if has_offset {
        DateTime::parse_from_rfc3339(&normalized)
            .ok()
            .map(|d| d.with_timezone(&Utc))
    } else {
        NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Revives a value: promotes date-shaped strings, recursing through arrays
/// and objects. Dates and non-string scalars pass through, so reviving twice
/// is the same as reviving once.
pub fn revive(value: RevivedValue) -> RevivedValue {
    match value {
        RevivedValue::String(s) => match parse_iso_date(&s) {
            Some(date) => RevivedValue::Date(date),
            None => RevivedValue::String(s),
        },
        RevivedValue::Array(items) => RevivedValue::Array(items.into_iter().map(revive).collect()),
        RevivedValue::Object(entries) => {
            RevivedValue::Object(entries.into_iter().map(|(k, v)| (k, revive(v))).collect())
        }
        other => other,
    }
}

/// Revives a freshly decoded JSON body.
pub fn revive_json(value: serde_json::Value) -> RevivedValue {
    revive(RevivedValue::from(value))
}

/// Space separator becomes `T`; a numeric offset is rewritten to `±HH:MM`.
/// Returns the normalized string and whether it carries an offset.
fn normalize_datetime(value: &str) -> (String, bool) {
    let value = value.replacen(' ', "T", 1);
    if value.ends_with('Z') {
        return (value, true);
    }

    match trailing_offset().captures(&value) {
        Some(caps) => {
            let start = caps.get(0).map(|m| m.start()).unwrap_or(value.len());
            let minutes = caps.get(3).map(|m| m.as_str()).unwrap_or("00");
            let normalized = format!("{}{}{}:{}", &value[..start], &caps[1], &caps[2], minutes);
            (normalized, true)
        }
        None => (value, false),
    }
}
