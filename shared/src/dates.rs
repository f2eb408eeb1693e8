use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{
    DATE_FORMAT, DISPLAY_DATE_FORMAT, DISPLAY_DATE_SHORT_FORMAT, INVALID_DATE, MONTH_KEY_FORMAT,
    MONTH_LABEL_FORMAT, UNKNOWN_TIME,
};

// ASCII digits only; `\d` would also accept other Unicode digits
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Returns the part of `value` before the first `T`, so ISO timestamps
/// reduce to their calendar date.
pub fn extract_date_string(value: &str) -> &str {
    match value.split_once('T') {
        Some((date, _)) => date,
        None => value,
    }
}

/// Builds a date from the explicit year/month/day components of a
/// `YYYY-MM-DD` string. Never goes through a timezone.
pub fn parse_date_string(value: &str) -> Option<NaiveDate> {
    if !DATE_PATTERN.is_match(value) {
        return None;
    }

    let mut parts = value.splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;

    // from_ymd_opt rejects Feb 29 on non-leap years, April 31, month 13...
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn is_valid_date_string(value: &str) -> bool {
    parse_date_string(value).is_some()
}

fn parse_trip_date(value: &str) -> Option<NaiveDate> {
    let date = parse_date_string(extract_date_string(value));
    if date.is_none() {
        warn!("Invalid date string: {:?}", value);
    }
    date
}

/// Formats a trip date as `Jan 15, 2024`. Accepts a bare date or an ISO
/// timestamp; anything else renders as `Invalid Date`.
pub fn format_trip_date(value: &str) -> String {
    match parse_trip_date(value) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

pub fn format_trip_date_relative(value: &str) -> String {
    format_trip_date_relative_on(value, Local::now().date_naive())
}

/// Same as [`format_trip_date_relative`] with an explicit "today".
pub fn format_trip_date_relative_on(value: &str, today: NaiveDate) -> String {
    let Some(date) = parse_trip_date(value) else {
        return INVALID_DATE.to_string();
    };

    if date == today {
        return "Today".to_string();
    }
    if today.pred_opt() == Some(date) {
        return "Yesterday".to_string();
    }

    if date.year() == today.year() {
        date.format(DISPLAY_DATE_SHORT_FORMAT).to_string()
    } else {
        date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// Parses RFC 3339 timestamps, offset-less ISO timestamps (read as UTC) and
/// bare dates (UTC midnight).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    parse_date_string(value)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn get_time_ago(timestamp: &str) -> String {
    get_time_ago_at(timestamp, Utc::now())
}

/// Coarse elapsed-time phrase. Weeks and months are whole 7 and 30 day
/// blocks, not calendar arithmetic.
pub fn get_time_ago_at(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(timestamp) else {
        return UNKNOWN_TIME.to_string();
    };

    // Timestamps slightly ahead of the local clock count as today
    let elapsed = now.signed_duration_since(then).num_milliseconds().max(0);
    let days = elapsed / MILLIS_PER_DAY;

    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=29 => format!("{} weeks ago", days / 7),
        _ => format!("{} months ago", days / 30),
    }
}

pub fn get_today_date_string() -> String {
    Utc::now().date_naive().format(DATE_FORMAT).to_string()
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM` bucket for a trip date, used to group monthly totals.
pub fn month_key(value: &str) -> Option<String> {
    parse_date_string(extract_date_string(value))
        .map(|date| date.format(MONTH_KEY_FORMAT).to_string())
}

/// Renders a `YYYY-MM` key as `January 2024`.
pub fn format_month_label(month: &str) -> String {
    match parse_date_string(&format!("{}-01", month)) {
        Some(date) => date.format(MONTH_LABEL_FORMAT).to_string(),
        None => {
            warn!("Invalid month key: {:?}", month);
            INVALID_DATE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_date_strings() {
        assert!(is_valid_date_string("2024-02-29"));
        assert!(is_valid_date_string("2024-01-15"));
        assert!(is_valid_date_string("2000-02-29"));
    }

    #[test]
    fn test_invalid_date_strings() {
        assert!(!is_valid_date_string("2023-02-29"));
        assert!(!is_valid_date_string("1900-02-29"));
        assert!(!is_valid_date_string("2024-04-31"));
        assert!(!is_valid_date_string("2024-1-15"));
        assert!(!is_valid_date_string("2024-01-5"));
        assert!(!is_valid_date_string("2024-13-01"));
        assert!(!is_valid_date_string("2024-00-10"));
        assert!(!is_valid_date_string("2024-01-15T10:00:00Z"));
        assert!(!is_valid_date_string("２０２４-01-15"));
        assert!(!is_valid_date_string(""));
    }

    #[test]
    fn test_extract_date_string() {
        assert_eq!(extract_date_string("2024-01-15T08:30:00Z"), "2024-01-15");
        assert_eq!(extract_date_string("2024-01-15"), "2024-01-15");
        assert_eq!(extract_date_string(""), "");
    }

    #[test]
    fn test_format_trip_date() {
        assert_eq!(format_trip_date("2024-01-15"), "Jan 15, 2024");
        assert_eq!(format_trip_date("2024-12-01"), "Dec 1, 2024");
        assert_eq!(format_trip_date("invalid-date"), "Invalid Date");
        assert_eq!(format_trip_date(""), "Invalid Date");
        assert_eq!(format_trip_date("2023-02-29"), "Invalid Date");
    }

    #[test]
    fn test_format_trip_date_keeps_calendar_day_of_timestamps() {
        // A late-evening UTC timestamp must not roll into the next day
        assert_eq!(format_trip_date("2024-01-15T23:59:59Z"), "Jan 15, 2024");
        assert_eq!(format_trip_date("2024-01-15T00:00:00-08:00"), "Jan 15, 2024");
    }

    #[test]
    fn test_relative_today_and_yesterday() {
        let today = date(2024, 3, 1);
        assert_eq!(format_trip_date_relative_on("2024-03-01", today), "Today");
        assert_eq!(format_trip_date_relative_on("2024-02-29", today), "Yesterday");
        assert_eq!(format_trip_date_relative_on("2024-02-29T12:00:00Z", today), "Yesterday");
    }

    #[test]
    fn test_relative_year_handling() {
        let today = date(2024, 6, 10);
        let same_year = format_trip_date_relative_on("2024-01-15", today);
        assert_eq!(same_year, "Jan 15");
        assert!(!same_year.contains("2024"));

        let prior_year = format_trip_date_relative_on("2023-12-31", today);
        assert_eq!(prior_year, "Dec 31, 2023");
        assert!(prior_year.contains("2023"));
    }

    #[test]
    fn test_relative_invalid_input() {
        assert_eq!(format_trip_date_relative_on("nope", date(2024, 1, 1)), "Invalid Date");
        assert_eq!(format_trip_date_relative(""), "Invalid Date");
    }

    #[test]
    fn test_relative_uses_local_today() {
        let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
        assert_eq!(format_trip_date_relative(&today), "Today");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap();
        let ago = |d: i64| (now - Duration::days(d)).to_rfc3339();

        assert_eq!(get_time_ago_at(&ago(0), now), "today");
        assert_eq!(get_time_ago_at(&ago(1), now), "yesterday");
        assert_eq!(get_time_ago_at(&ago(3), now), "3 days ago");
        assert_eq!(get_time_ago_at(&ago(6), now), "6 days ago");
        assert_eq!(get_time_ago_at(&ago(7), now), "1 weeks ago");
        assert_eq!(get_time_ago_at(&ago(14), now), "2 weeks ago");
        assert_eq!(get_time_ago_at(&ago(29), now), "4 weeks ago");
        assert_eq!(get_time_ago_at(&ago(30), now), "1 months ago");
        assert_eq!(get_time_ago_at(&ago(95), now), "3 months ago");
    }

    #[test]
    fn test_time_ago_partial_days_floor() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap();
        assert_eq!(get_time_ago_at("2024-05-19T13:00:00Z", now), "today");
        assert_eq!(get_time_ago_at("2024-05-18T13:00:00", now), "yesterday");
        assert_eq!(get_time_ago_at("2024-05-21T09:00:00Z", now), "today");
    }

    #[test]
    fn test_time_ago_unparsable() {
        assert_eq!(get_time_ago("not a timestamp"), "unknown time");
        assert_eq!(get_time_ago(""), "unknown time");
    }

    #[test]
    fn test_time_ago_against_wall_clock() {
        let three_days = (Utc::now() - Duration::days(3)).to_rfc3339();
        assert_eq!(get_time_ago(&three_days), "3 days ago");
        let two_weeks = (Utc::now() - Duration::days(14)).to_rfc3339();
        assert_eq!(get_time_ago(&two_weeks), "2 weeks ago");
    }

    #[test]
    fn test_today_string_is_valid() {
        assert!(is_valid_date_string(&get_today_date_string()));
    }

    #[test]
    fn test_month_helpers() {
        assert_eq!(month_key("2024-01-15").as_deref(), Some("2024-01"));
        assert_eq!(month_key("2024-01-15T10:00:00Z").as_deref(), Some("2024-01"));
        assert_eq!(month_key("bogus"), None);
        assert_eq!(format_month_label("2024-01"), "January 2024");
        assert_eq!(format_month_label("2024-13"), "Invalid Date");
    }
}
