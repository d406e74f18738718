#![deny(clippy::all, clippy::pedantic)]

use time::PrimitiveDateTime;
use time::macros::format_description;

use crate::client::CliError;

/// Accepts a local date-time as `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`
/// and returns it unchanged.
pub fn parse_local_datetime(raw: &str) -> Result<String, String> {
    let value = raw.trim();
    let minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    let seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    PrimitiveDateTime::parse(value, minutes)
        .or_else(|_| PrimitiveDateTime::parse(value, seconds))
        .map(|_| value.to_string())
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM[:SS]: {e}"))
}

/// A field that must be supplied when creating a record.
pub fn required<T>(value: Option<T>, flag: &'static str) -> Result<T, CliError> {
    value.ok_or(CliError::MissingField(flag))
}
