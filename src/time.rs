//! Time related utils.

use chrono::Utc;

/// DateTime in UTC, the only timezone signing works with.
pub type DateTime = chrono::DateTime<Utc>;

/// Get the current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a time into the eight digit calendar date used in scopes.
///
/// e.g. `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a time into the compact ISO8601 form used in `X-Amz-Date`.
///
/// e.g. `20220301T165657Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format() {
        let t = Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap();
        assert_eq!(format_date(t), "20130524");
        assert_eq!(format_iso8601(t), "20130524T000000Z");
    }
}
