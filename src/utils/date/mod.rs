// Date key utility functions
// Parsing for the 8-digit YYYYMMDD keys the week view addresses columns by

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse an 8-digit `YYYYMMDD` date key.
///
/// Returns `None` when the key is not numerically well-formed or names an
/// impossible date. Callers must not lean on this for validation; upstream
/// keys are assumed to be produced by `format_date_key`.
pub fn parse_date_key(ymd: &str) -> Option<NaiveDate> {
    let year: i32 = ymd.get(0..4)?.parse().ok()?;
    let month: u32 = ymd.get(4..6)?.parse().ok()?;
    let day: u32 = ymd.get(6..8)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Local midnight for a date key.
pub fn date_key_start(ymd: &str) -> Option<NaiveDateTime> {
    parse_date_key(ymd).map(|date| date.and_time(NaiveTime::MIN))
}

/// Format a date back into the 8-digit key form.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
