use chrono::{DateTime, FixedOffset};

use crate::types::time_field::TimeField;

// Chrono parsing patterns, tried in order: with fractional seconds first,
// then whole seconds. Both require a numeric UTC offset.
const FMT_FRACTION: &str = "%Y-%m-%dT%H:%M:%S.%f%z";
const FMT_WHOLE: &str = "%Y-%m-%dT%H:%M:%S%z";

pub(crate) fn from_raw(raw: &str) -> Option<TimeField> {
    // %z wants a numeric offset; a trailing 'Z' (already-UTC value) reads
    // as +0000 so canonical input parses the same way offset input does
    let parse_input: String = match raw.strip_suffix('Z') {
        Some(body) => format!("{body}+0000"),
        None => raw.to_string(),
    };

    // ordered attempt: fractional shape, then whole-second shape
    let value: DateTime<FixedOffset> = DateTime::parse_from_str(&parse_input, FMT_FRACTION)
        .or_else(|_| DateTime::parse_from_str(&parse_input, FMT_WHOLE))
        .ok()?;

    Some(TimeField {
        text: raw.to_string(),
        value,
    })
}
