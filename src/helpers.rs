use log::{debug, trace};

use crate::{
    DateAdapter, DateBounds, HourMinute, MILLIS_PER_DAY, MILLIS_PER_SECOND, MONTHS_PER_YEAR,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};

/// Error type for date helper operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HelperError {
    /// A minimum or maximum was requested over no dates.
    #[error("Cannot pick a bound from an empty list of dates")]
    EmptyDates,

    /// The adapter could not build a date for this many epoch milliseconds.
    #[error("Instant {0}ms since the Unix epoch is not representable")]
    UnrepresentableInstant(i64),
}

/// Calendar math and disabled-date rules for a date picker.
///
/// All primitive date work is delegated to the wrapped [`DateAdapter`]; the
/// helpers only combine those primitives. Nothing is cached between calls, so
/// a single instance can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateHelpers<A> {
    adapter: A,
}

impl<A: DateAdapter> DateHelpers<A> {
    pub const fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Returns the wrapped adapter
    pub const fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Seconds elapsed since midnight, ignoring sub-second precision.
    pub fn date_to_seconds(&self, date: &A::Date) -> u32 {
        let adapter = &self.adapter;
        adapter.seconds(date)
            + adapter.minutes(date) * SECONDS_PER_MINUTE
            + adapter.hours(date) * SECONDS_PER_HOUR
    }

    /// Converts seconds since midnight to an hour and minute.
    ///
    /// The value is turned into an epoch instant and read back through the
    /// adapter, so the result is only meaningful for adapters whose epoch
    /// construction yields UTC fields. Counts past one day wrap around.
    ///
    /// # Errors
    /// Returns `HelperError::UnrepresentableInstant` if the adapter cannot
    /// build the instant.
    pub fn seconds_to_hour_minute(&self, seconds: u32) -> Result<HourMinute, HelperError> {
        let millis = i64::from(seconds) * MILLIS_PER_SECOND;
        let date = self
            .adapter
            .from_epoch_millis(millis)
            .ok_or(HelperError::UnrepresentableInstant(millis))?;
        Ok(HourMinute::new(self.adapter.hours(&date), self.adapter.minutes(&date)))
    }

    #[allow(clippy::cast_possible_wrap)]
    fn month_index(&self, date: &A::Date) -> i32 {
        // month is always 1..=12
        self.adapter.year(date) * MONTHS_PER_YEAR + self.adapter.month(date) as i32
    }

    /// Number of month boundaries between `date` and `other`; day and time
    /// are ignored, so Jan 31 and Feb 1 are one month apart.
    pub fn difference_in_calendar_months(&self, date: &A::Date, other: &A::Date) -> i32 {
        self.month_index(date) - self.month_index(other)
    }

    /// `date - other` in days. Fractional when the two values differ in
    /// time of day.
    #[allow(clippy::cast_precision_loss)]
    pub fn difference_in_calendar_days(&self, date: &A::Date, other: &A::Date) -> f64 {
        self.adapter.diff_millis(date, other) as f64 / MILLIS_PER_DAY as f64
    }

    pub fn add_days(&self, date: &A::Date, days: i64) -> A::Date {
        self.adapter.add_days(date, days)
    }

    pub fn sub_days(&self, date: &A::Date, days: i64) -> A::Date {
        self.adapter.add_days(date, days.saturating_neg())
    }

    pub fn add_months(&self, date: &A::Date, months: i32) -> A::Date {
        self.adapter.add_months(date, months)
    }

    pub fn sub_months(&self, date: &A::Date, months: i32) -> A::Date {
        self.adapter.add_months(date, months.saturating_neg())
    }

    pub fn is_same_month(&self, date: &A::Date, other: &A::Date) -> bool {
        self.difference_in_calendar_months(date, other) == 0
    }

    pub fn is_same_year(&self, date: &A::Date, other: &A::Date) -> bool {
        self.adapter.year(date) == self.adapter.year(other)
    }

    pub fn format_date(&self, date: &A::Date, pattern: &str) -> String {
        self.adapter.format(date, pattern)
    }

    /// Earliest of `dates`. Among equal instants the first one wins.
    ///
    /// # Errors
    /// Returns `HelperError::EmptyDates` if `dates` yields nothing.
    pub fn min<'a, I>(&self, dates: I) -> Result<A::Date, HelperError>
    where
        I: IntoIterator<Item = &'a A::Date>,
        A::Date: 'a,
    {
        self.reduce(dates, |candidate, current| self.adapter.is_before(candidate, current))
    }

    /// Latest of `dates`. Among equal instants the first one wins.
    ///
    /// # Errors
    /// Returns `HelperError::EmptyDates` if `dates` yields nothing.
    pub fn max<'a, I>(&self, dates: I) -> Result<A::Date, HelperError>
    where
        I: IntoIterator<Item = &'a A::Date>,
        A::Date: 'a,
    {
        self.reduce(dates, |candidate, current| self.adapter.is_after(candidate, current))
    }

    fn reduce<'a, I, F>(&self, dates: I, replaces: F) -> Result<A::Date, HelperError>
    where
        I: IntoIterator<Item = &'a A::Date>,
        A::Date: 'a,
        F: Fn(&A::Date, &A::Date) -> bool,
    {
        let mut dates = dates.into_iter();
        let Some(first) = dates.next() else {
            trace!("no dates to reduce");
            return Err(HelperError::EmptyDates);
        };
        let best = dates.fold(first, |best, date| if replaces(date, best) { date } else { best });
        Ok(best.clone())
    }

    fn is_before_day(&self, date: &A::Date, other: &A::Date) -> bool {
        !self.adapter.is_same_day(date, other) && self.adapter.is_before(date, other)
    }

    fn is_after_day(&self, date: &A::Date, other: &A::Date) -> bool {
        !self.adapter.is_same_day(date, other) && self.adapter.is_after(date, other)
    }

    /// The first selectable instant once `min_date` and `include_dates` are
    /// reconciled.
    ///
    /// With both set, this is the earliest include date on or after the
    /// `min_date` day. With only a non-empty include list, it is that list's
    /// earliest entry; with only `min_date`, it is `min_date`. With neither,
    /// the adapter's current time is returned as a placeholder.
    ///
    /// # Errors
    /// Returns `HelperError::EmptyDates` when `min_date` is set and no include
    /// date falls on or after it.
    pub fn effective_min_date(&self, bounds: &DateBounds<A::Date>) -> Result<A::Date, HelperError> {
        match (&bounds.min_date, bounds.include_dates.as_deref()) {
            (Some(min_date), Some(include_dates)) => self.min(
                include_dates
                    .iter()
                    .filter(|date| !self.is_before_day(date, min_date)),
            ),
            (None, Some(include_dates)) if !include_dates.is_empty() => self.min(include_dates),
            (Some(min_date), None) => Ok(min_date.clone()),
            _ => {
                debug!("no minimum date or include dates given, falling back to now");
                Ok(self.adapter.now())
            }
        }
    }

    /// Mirror of [`effective_min_date`](Self::effective_min_date): the latest
    /// include date on or before the `max_date` day, the latest include date,
    /// `max_date`, or now.
    ///
    /// # Errors
    /// Returns `HelperError::EmptyDates` when `max_date` is set and no include
    /// date falls on or before it.
    pub fn effective_max_date(&self, bounds: &DateBounds<A::Date>) -> Result<A::Date, HelperError> {
        match (&bounds.max_date, bounds.include_dates.as_deref()) {
            (Some(max_date), Some(include_dates)) => self.max(
                include_dates
                    .iter()
                    .filter(|date| !self.is_after_day(date, max_date)),
            ),
            (None, Some(include_dates)) if !include_dates.is_empty() => self.max(include_dates),
            (Some(max_date), None) => Ok(max_date.clone()),
            _ => {
                debug!("no maximum date or include dates given, falling back to now");
                Ok(self.adapter.now())
            }
        }
    }

    /// Whether navigating from `day`'s month to the previous one would show
    /// nothing selectable: the previous month ends before `min_date`'s month,
    /// or every include date lies in a later month.
    pub fn month_disabled_before(&self, day: &A::Date, bounds: &DateBounds<A::Date>) -> bool {
        let previous_month = self.sub_months(day, 1);
        bounds
            .min_date
            .as_ref()
            .is_some_and(|min_date| self.difference_in_calendar_months(min_date, &previous_month) > 0)
            || bounds.include_dates.as_ref().is_some_and(|include_dates| {
                include_dates
                    .iter()
                    .all(|date| self.difference_in_calendar_months(date, &previous_month) > 0)
            })
    }

    /// Whether navigating from `day`'s month to the next one would show
    /// nothing selectable.
    pub fn month_disabled_after(&self, day: &A::Date, bounds: &DateBounds<A::Date>) -> bool {
        let next_month = self.add_months(day, 1);
        bounds
            .max_date
            .as_ref()
            .is_some_and(|max_date| self.difference_in_calendar_months(&next_month, max_date) > 0)
            || bounds.include_dates.as_ref().is_some_and(|include_dates| {
                include_dates
                    .iter()
                    .all(|date| self.difference_in_calendar_months(&next_month, date) > 0)
            })
    }

    /// Moves `date` to `day_number` (1-based) within its month, keeping the
    /// time of day down to the second.
    ///
    /// Day numbers past the end of the month spill into the next month and
    /// `0` lands on the last day of the previous month.
    pub fn set_date(&self, date: &A::Date, day_number: u32) -> A::Date {
        let adapter = &self.adapter;
        let start_of_month = adapter.start_of_month(date);
        let with_time = adapter.merge_date_and_time(&start_of_month, date);
        // merging may drop the seconds
        let with_seconds = adapter.set_seconds(&with_time, adapter.seconds(date));
        adapter.add_days(&with_seconds, i64::from(day_number) - 1)
    }

    /// Puts `time`'s time of day on `date`'s calendar day. Without a `time`,
    /// `date` is returned as is.
    pub fn apply_date_to_time(&self, time: Option<&A::Date>, date: &A::Date) -> A::Date {
        let Some(time) = time else {
            return date.clone();
        };
        let adapter = &self.adapter;
        let with_year = adapter.set_year(time, adapter.year(date));
        let with_month = adapter.set_month(&with_year, adapter.month(date));
        self.set_date(&with_month, adapter.day(date))
    }

    /// Whether `day` cannot be picked: it is out of bounds, excluded, missing
    /// from a given include list, or rejected by the filter.
    pub fn is_day_disabled(&self, day: &A::Date, bounds: &DateBounds<A::Date>) -> bool {
        self.is_out_of_bounds(day, bounds)
            || bounds.exclude_dates.as_ref().is_some_and(|exclude_dates| {
                exclude_dates
                    .iter()
                    .any(|date| self.adapter.is_same_day(day, date))
            })
            || bounds.include_dates.as_ref().is_some_and(|include_dates| {
                !include_dates
                    .iter()
                    .any(|date| self.adapter.is_same_day(day, date))
            })
            || !bounds.passes_filter(day)
    }

    /// Whether `day` falls on a calendar day strictly before `min_date` or
    /// strictly after `max_date`. The bound days themselves are in bounds
    /// whatever their time of day.
    pub fn is_out_of_bounds(&self, day: &A::Date, bounds: &DateBounds<A::Date>) -> bool {
        bounds
            .min_date
            .as_ref()
            .is_some_and(|min_date| self.is_before_day(day, min_date))
            || bounds
                .max_date
                .as_ref()
                .is_some_and(|max_date| self.is_after_day(day, max_date))
    }
}
