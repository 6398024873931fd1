use std::fmt::Write as _;

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};

use log::warn;

use crate::{
    DateAdapter, JANUARY, MAX_MONTH, MIN_DAY,
    calendar::clamp_day,
};

/// [`DateAdapter`] over [`chrono::NaiveDateTime`].
///
/// Values are treated as UTC wall-clock time: [`now`](DateAdapter::now) reads
/// the UTC clock and epoch construction yields UTC fields. Arithmetic that
/// would leave chrono's supported range saturates at
/// [`NaiveDateTime::MIN`] / [`NaiveDateTime::MAX`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ChronoAdapter;

impl ChronoAdapter {
    pub const fn new() -> Self {
        Self
    }
}

const fn saturate(forward: bool) -> NaiveDateTime {
    if forward {
        NaiveDateTime::MAX
    } else {
        NaiveDateTime::MIN
    }
}

fn with_ymd(date: &NaiveDateTime, year: i32, month: u32) -> NaiveDateTime {
    let month = month.clamp(JANUARY, MAX_MONTH);
    let day = clamp_day(year, month, date.day());
    NaiveDate::from_ymd_opt(year, month, day)
        .map_or_else(|| saturate(year > date.year()), |d| d.and_time(date.time()))
}

impl DateAdapter for ChronoAdapter {
    type Date = NaiveDateTime;

    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    fn from_epoch_millis(&self, millis: i64) -> Option<NaiveDateTime> {
        DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
    }

    fn year(&self, date: &NaiveDateTime) -> i32 {
        date.year()
    }

    fn month(&self, date: &NaiveDateTime) -> u32 {
        date.month()
    }

    fn day(&self, date: &NaiveDateTime) -> u32 {
        date.day()
    }

    fn hours(&self, date: &NaiveDateTime) -> u32 {
        date.hour()
    }

    fn minutes(&self, date: &NaiveDateTime) -> u32 {
        date.minute()
    }

    fn seconds(&self, date: &NaiveDateTime) -> u32 {
        date.second()
    }

    fn set_year(&self, date: &NaiveDateTime, year: i32) -> NaiveDateTime {
        with_ymd(date, year, date.month())
    }

    fn set_month(&self, date: &NaiveDateTime, month: u32) -> NaiveDateTime {
        with_ymd(date, date.year(), month)
    }

    fn set_seconds(&self, date: &NaiveDateTime, seconds: u32) -> NaiveDateTime {
        // leap seconds are not representable through this setter
        date.with_second(seconds.min(59)).unwrap_or(*date)
    }

    fn add_days(&self, date: &NaiveDateTime, days: i64) -> NaiveDateTime {
        TimeDelta::try_days(days)
            .and_then(|delta| date.checked_add_signed(delta))
            .unwrap_or_else(|| saturate(days > 0))
    }

    fn add_months(&self, date: &NaiveDateTime, months: i32) -> NaiveDateTime {
        let delta = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            date.checked_add_months(delta)
        } else {
            date.checked_sub_months(delta)
        };
        shifted.unwrap_or_else(|| saturate(months > 0))
    }

    fn is_before(&self, date: &NaiveDateTime, other: &NaiveDateTime) -> bool {
        date < other
    }

    fn is_after(&self, date: &NaiveDateTime, other: &NaiveDateTime) -> bool {
        date > other
    }

    fn is_same_day(&self, date: &NaiveDateTime, other: &NaiveDateTime) -> bool {
        date.date() == other.date()
    }

    fn diff_millis(&self, date: &NaiveDateTime, other: &NaiveDateTime) -> i64 {
        date.signed_duration_since(*other).num_milliseconds()
    }

    fn start_of_month(&self, date: &NaiveDateTime) -> NaiveDateTime {
        date.date()
            .with_day(MIN_DAY)
            .unwrap_or_else(|| date.date())
            .and_time(NaiveTime::MIN)
    }

    fn merge_date_and_time(&self, date: &NaiveDateTime, time: &NaiveDateTime) -> NaiveDateTime {
        date.date()
            .and_hms_opt(time.hour(), time.minute(), 0)
            .unwrap_or(*date)
    }

    fn format(&self, date: &NaiveDateTime, pattern: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(pattern)).is_err() {
            warn!("invalid date format pattern {pattern:?}");
            out.clear();
        }
        out
    }
}
