use chrono::{Local, NaiveDate, Utc};

/// Canonical date format shared by plan filenames and every on-screen date.
pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's calendar date in local time. Plan records key on this.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Render a date in the store's canonical `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(STANDARD_DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string back into a date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, STANDARD_DATE_FORMAT).ok()
}

/// Age of an epoch-milliseconds stamp, in whole seconds.
pub fn how_many_seconds_ago(epoch_ms: i64) -> i64 {
    (Utc::now().timestamp_millis().saturating_sub(epoch_ms)) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_format_round_trip() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
        let text = format_date(date);
        assert_eq!(text, "2026-08-04");
        assert_eq!(parse_date(&text), Some(date));
    }

    #[test]
    fn test_parse_rejects_non_dates() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2026-13-01"), None);
        assert_eq!(parse_date(""), None);
    }
}
