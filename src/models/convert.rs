//! Field conversions shared by the typed models.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::{Result, WarfishError};
use crate::models::Limit;

fn invalid(field: &'static str, value: &str) -> WarfishError {
    WarfishError::InvalidField {
        field,
        value: value.to_string(),
    }
}

/// Parses a numeric string.
pub(crate) fn number<T: FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| invalid(field, value))
}

/// Parses an optional numeric string.
pub(crate) fn optional_number<T: FromStr>(
    field: &'static str,
    value: Option<&String>,
) -> Result<Option<T>> {
    value.map(|v| number(field, v)).transpose()
}

/// `"1"` is true, anything else false.
pub(crate) fn flag(value: &str) -> bool {
    value.trim() == "1"
}

/// Parses a comma-separated list of numbers; empty segments are skipped.
pub(crate) fn number_list<T: FromStr>(field: &'static str, value: &str) -> Result<Vec<T>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| number(field, part))
        .collect()
}

pub(crate) fn optional_number_list<T: FromStr>(
    field: &'static str,
    value: Option<&String>,
) -> Result<Option<Vec<T>>> {
    value.map(|v| number_list(field, v)).transpose()
}

/// `"-1"` means no limit.
pub(crate) fn limit(field: &'static str, value: &str) -> Result<Limit> {
    if value.trim() == "-1" {
        Ok(Limit::Unlimited)
    } else {
        number(field, value).map(Limit::Max)
    }
}

/// Unix seconds to a UTC timestamp.
pub(crate) fn timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    let secs: i64 = number(field, value)?;
    DateTime::from_timestamp(secs, 0).ok_or_else(|| invalid(field, value))
}
