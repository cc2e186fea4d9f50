//! Field names and value parsers for the tabular input contract.
//!
//! The column names are the Dutch headers the source systems export;
//! matching is case-insensitive (see [`Record`](super::Record)) but the
//! canonical, lowercase spellings live here. Value parsing is lenient by
//! policy: a value that cannot be read becomes `None` at the caller,
//! never a failed load.

use chrono::{NaiveDate, NaiveDateTime};

/// Room code column (`ruimte`), in both the location and schedule tables.
pub const ROOM: &str = "ruimte";
/// Room capacity column (`capaciteit`) in the location table.
pub const CAPACITY: &str = "capaciteit";
/// Activity label column (`activiteit`) in the schedule table.
pub const ACTIVITY: &str = "activiteit";
/// Activity start date column (`startdatum`) in the schedule table.
pub const START_DATE: &str = "startdatum";
/// Activity end date column (`einddatum`) in the schedule table.
pub const END_DATE: &str = "einddatum";
/// Group size column (`groepgrootte`) in the schedule table.
pub const GROUP_SIZE: &str = "groepgrootte";

/// The schedule columns the loader understands, in export order.
pub const SCHEDULE_COLUMNS: [&str; 5] = [ACTIVITY, ROOM, START_DATE, END_DATE, GROUP_SIZE];

/// Date-only formats tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d"];

/// Datetime formats tried when no date-only format matches; the time part
/// is dropped.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%d-%m-%Y %H:%M"];

/// Parses a calendar date from one of the accepted textual forms.
///
/// Accepts ISO dates, the day-first forms common in Dutch exports, and a
/// few datetime shapes whose time component is discarded. Returns `None`
/// for anything else.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_impact::ingest::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// assert_eq!(parse_date("2025-09-01"), Some(expected));
/// assert_eq!(parse_date("01-09-2025"), Some(expected));
/// assert_eq!(parse_date("2025-09-01 09:30:00"), Some(expected));
/// assert_eq!(parse_date("soon"), None);
/// ```
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Parses a non-negative count (capacity, group size).
///
/// Plain integers are read directly; floating-point spellings such as
/// `"25.0"` are accepted when the value is integral, since numeric columns
/// round-trip through spreadsheet tools as floats. Negative, fractional
/// and non-numeric values return `None`.
pub fn parse_count(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(count) = value.parse::<u32>() {
        return Some(count);
    }
    let number: f64 = value.parse().ok()?;
    if number.is_finite() && number >= 0.0 && number.fract() == 0.0 && number <= u32::MAX as f64 {
        Some(number as u32)
    } else {
        None
    }
}
