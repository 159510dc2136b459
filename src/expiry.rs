use chrono::{NaiveDate, NaiveTime, TimeDelta};

use crate::time::DateTime;

/// An expiry for a presigned URL, in any of the shapes callers naturally
/// hold: a number of seconds, a duration, a future point in time, or a
/// calendar date (interpreted as midnight UTC).
///
/// Everything normalizes to whole seconds relative to "now" through
/// [`to_seconds`][Expires::to_seconds]. Negative or zero results are not
/// rejected here; range validation is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expires {
    /// Already a number of seconds.
    Seconds(i64),
    /// A duration from now.
    Duration(TimeDelta),
    /// An absolute point in time.
    At(DateTime),
    /// A calendar date, expiring at midnight UTC.
    On(NaiveDate),
}

impl Expires {
    /// Normalize to seconds-until-expiry relative to `now`, truncating
    /// toward zero.
    pub fn to_seconds(self, now: DateTime) -> i64 {
        match self {
            Expires::Seconds(s) => s,
            Expires::Duration(d) => d.num_seconds(),
            Expires::At(t) => (t - now).num_seconds(),
            Expires::On(d) => (d.and_time(NaiveTime::MIN).and_utc() - now).num_seconds(),
        }
    }
}

impl From<i64> for Expires {
    fn from(value: i64) -> Self {
        Expires::Seconds(value)
    }
}

impl From<u64> for Expires {
    fn from(value: u64) -> Self {
        Expires::Seconds(value as i64)
    }
}

impl From<TimeDelta> for Expires {
    fn from(value: TimeDelta) -> Self {
        Expires::Duration(value)
    }
}

impl From<std::time::Duration> for Expires {
    fn from(value: std::time::Duration) -> Self {
        Expires::Duration(TimeDelta::from_std(value).unwrap_or(TimeDelta::MAX))
    }
}

impl From<DateTime> for Expires {
    fn from(value: DateTime) -> Self {
        Expires::At(value)
    }
}

impl From<NaiveDate> for Expires {
    fn from(value: NaiveDate) -> Self {
        Expires::On(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn frozen_now() -> DateTime {
        Utc.with_ymd_and_hms(2014, 1, 3, 17, 0, 0).unwrap()
    }

    #[test]
    fn test_seconds_pass_through() {
        assert_eq!(Expires::from(3600i64).to_seconds(frozen_now()), 3600);
    }

    #[test]
    fn test_duration() {
        let expires = Expires::from(TimeDelta::try_days(1).unwrap());
        assert_eq!(expires.to_seconds(frozen_now()), 86400);

        let expires = Expires::from(std::time::Duration::from_secs(3600));
        assert_eq!(expires.to_seconds(frozen_now()), 3600);
    }

    #[test]
    fn test_date_expires_at_midnight() {
        let expires = Expires::from(NaiveDate::from_ymd_opt(2014, 1, 5).unwrap());
        assert_eq!(expires.to_seconds(frozen_now()), 111600);
    }

    #[test]
    fn test_absolute_time() {
        let expires = Expires::from(Utc.with_ymd_and_hms(2014, 1, 5, 12, 0, 0).unwrap());
        assert_eq!(expires.to_seconds(frozen_now()), 154800);
    }

    #[test]
    fn test_past_time_goes_negative() {
        let expires = Expires::from(Utc.with_ymd_and_hms(2014, 1, 3, 16, 59, 50).unwrap());
        assert_eq!(expires.to_seconds(frozen_now()), -10);
    }
}
