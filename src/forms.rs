//! Flat field-map decoding for the listing forms.
//!
//! The venue/artist forms post `genres` as repeated keys, so the body is kept
//! as a multimap rather than deserialized into a struct. The seeking checkbox
//! has deliberately quirky semantics carried over from the legacy forms: only
//! the literal value "y" means true, any other submitted string is stored
//! verbatim, and an absent field stays absent.

use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::error::{AppError, Result};

pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An urlencoded form body, with repeated keys preserved in order.
#[derive(Debug, Default, Clone)]
pub struct FormMap {
    pairs: Vec<(String, String)>,
}

impl FormMap {
    pub fn parse(body: &[u8]) -> Self {
        Self {
            pairs: form_urlencoded::parse(body)
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// First value for `key`, if the field was submitted.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, for repeated fields such as `genres`.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// First value for `key`, or a `Parse` error naming the missing field.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| AppError::Parse(format!("missing form field: {key}")))
    }
}

/// The tri-state seeking flag. Only the checkbox value "y" normalizes to
/// true; other submitted strings pass through unconverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seeking {
    Bool(bool),
    Raw(String),
    Absent,
}

impl Seeking {
    pub fn from_form(value: Option<&str>) -> Self {
        match value {
            Some("y") => Self::Bool(true),
            Some(other) => Self::Raw(other.to_string()),
            None => Self::Absent,
        }
    }

    pub fn from_column(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Bool(true),
            Some("false") => Self::Bool(false),
            Some(other) => Self::Raw(other.to_string()),
            None => Self::Absent,
        }
    }

    pub fn into_column(self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Raw(s) => Some(s),
            Self::Absent => None,
        }
    }

    /// Whether the flag reads as affirmative, for display purposes.
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Bool(true))
    }
}

/// Parse a show start time in the fixed `YYYY-MM-DD HH:MM:SS` format,
/// interpreted as UTC. Failure must prevent any insert.
pub fn parse_start_time(value: &str) -> Result<DateTimeWithTimeZone> {
    let naive = NaiveDateTime::parse_from_str(value, START_TIME_FORMAT)
        .map_err(|e| AppError::Parse(format!("invalid start_time {value:?}: {e}")))?;
    let utc: DateTime<Utc> = naive.and_utc();
    Ok(utc.fixed_offset())
}

/// Encode submitted genre values as the JSON array the entities store.
pub fn genres_to_json(values: &[&str]) -> serde_json::Value {
    serde_json::Value::Array(
        values
            .iter()
            .map(|v| serde_json::Value::String((*v).to_string()))
            .collect(),
    )
}
