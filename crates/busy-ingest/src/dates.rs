//! Date parsing for the flat file's date columns.

use chrono::{NaiveDate, NaiveDateTime};

/// Formats accepted for date-only cells, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Formats accepted for cells carrying a (midnight) time component.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a date cell.
///
/// Accepts ISO dates, the `MM/DD/YYYY` spreadsheet form and timestamps,
/// whose time part is discarded. Returns `None` for anything else.
///
/// # Examples
/// ```
/// use busy_ingest::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 10);
/// assert_eq!(parse_date("2024-03-10"), expected);
/// assert_eq!(parse_date("03/10/2024"), expected);
/// assert_eq!(parse_date("2024-03-10 00:00:00"), expected);
/// assert_eq!(parse_date("next week"), None);
/// ```
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}
