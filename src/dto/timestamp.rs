//! Fixed-pattern rendering of wall-clock timestamps (`yyyy-MM-dd HH:mm:ss`).

use serde::Serializer;
use time::{PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::error::PayloadError;

/// Layout used for every timestamp exposed through the REST API.
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Render `value` as `yyyy-MM-dd HH:mm:ss`, dropping any sub-second component.
///
/// Years outside `0000..=9999` cannot be written with four digits and are rejected.
pub fn format_timestamp(value: PrimitiveDateTime) -> Result<String, PayloadError> {
    let value = truncate_to_seconds(value)?;
    value
        .format(TIMESTAMP_FORMAT)
        .map_err(|err| PayloadError::InvalidInput(format!("unformattable timestamp: {err}")))
}

/// Parse a `yyyy-MM-dd HH:mm:ss` string back into a timestamp.
pub fn parse_timestamp(value: &str) -> Result<PrimitiveDateTime, PayloadError> {
    PrimitiveDateTime::parse(value, TIMESTAMP_FORMAT)
        .map_err(|err| PayloadError::InvalidInput(format!("invalid timestamp `{value}`: {err}")))
}

/// Drop the sub-second part of `value`, failing when the year has no four-digit rendering.
pub fn truncate_to_seconds(value: PrimitiveDateTime) -> Result<PrimitiveDateTime, PayloadError> {
    let year = value.year();
    if !(0..=9999).contains(&year) {
        return Err(PayloadError::InvalidInput(format!(
            "timestamp year {year} cannot be represented as yyyy"
        )));
    }

    value
        .replace_nanosecond(0)
        .map_err(|err| PayloadError::InvalidInput(err.to_string()))
}

/// Serialize-only adapter for `#[serde(with = "...")]` on [`PrimitiveDateTime`] fields.
pub mod fixed_pattern {
    use super::*;

    /// Serialize using [`TIMESTAMP_FORMAT`].
    pub fn serialize<S>(value: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = format_timestamp(*value).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}
