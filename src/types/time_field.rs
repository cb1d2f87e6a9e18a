use chrono::{DateTime, FixedOffset, Utc};

/// Output pattern shared by every rewritten field.
const CANONICAL_FMT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Represents one `<time>` value captured from a GPX document.
///
/// `TimeField` keeps both the raw textual representation (`text`) and the
/// parsed value as a `DateTime<FixedOffset>` (`value`). The offset is taken
/// **literally** from the source text (a fixed number of minutes east or
/// west of UTC); no timezone-database semantics are attached, so the value
/// should not be used for DST-sensitive computations.
///
/// A `TimeField` only exists for text that matched one of the two
/// recognized shapes, so `value` is always populated.
///
/// # Fields
/// - `text`: The raw value exactly as captured between the tags (e.g.
///   `"2023-08-26T13:14:31.012000+0200"`).
/// - `value`: The parsed instant carrying that literal offset.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeField {
    pub text: String,
    pub value: DateTime<FixedOffset>,
}

impl TimeField {
    /// Formats this field's instant as canonical UTC, `YYYY-MM-DDTHH:MM:SSZ`.
    ///
    /// The literal offset is folded into the wall-clock time (including
    /// date rollover across day/month/year boundaries) and any sub-second
    /// fraction is truncated, never rounded.
    pub fn canonical_utc(&self) -> String {
        self.value
            .with_timezone(&Utc)
            .format(CANONICAL_FMT)
            .to_string()
    }
}
