//! The capability set a date backend must provide to drive [`DateHelpers`].
//!
//! [`DateHelpers`]: crate::DateHelpers

/// Primitive date operations over an adapter-defined date type.
///
/// The helpers never construct or inspect a [`Date`](DateAdapter::Date)
/// directly; everything goes through these methods. Months are 1-based
/// (January is `1`), matching the day-of-month convention.
pub trait DateAdapter {
    /// The concrete date-time value.
    type Date: Clone;

    /// The current date-time.
    fn now(&self) -> Self::Date;

    /// Builds a date from milliseconds since the Unix epoch (UTC).
    ///
    /// Returns `None` when the instant is not representable.
    fn from_epoch_millis(&self, millis: i64) -> Option<Self::Date>;

    fn year(&self, date: &Self::Date) -> i32;
    fn month(&self, date: &Self::Date) -> u32;
    /// Day of the month, starting at 1.
    fn day(&self, date: &Self::Date) -> u32;
    fn hours(&self, date: &Self::Date) -> u32;
    fn minutes(&self, date: &Self::Date) -> u32;
    fn seconds(&self, date: &Self::Date) -> u32;

    /// Replaces the year, clamping the day-of-month if it no longer exists.
    fn set_year(&self, date: &Self::Date, year: i32) -> Self::Date;
    /// Replaces the month, clamping the day-of-month if it no longer exists.
    fn set_month(&self, date: &Self::Date, month: u32) -> Self::Date;
    fn set_seconds(&self, date: &Self::Date, seconds: u32) -> Self::Date;

    fn add_days(&self, date: &Self::Date, days: i64) -> Self::Date;
    /// Adds calendar months, landing on the last day of the target month
    /// when the day-of-month does not exist there.
    fn add_months(&self, date: &Self::Date, months: i32) -> Self::Date;

    /// `true` if `date` is strictly earlier than `other`.
    fn is_before(&self, date: &Self::Date, other: &Self::Date) -> bool;
    /// `true` if `date` is strictly later than `other`.
    fn is_after(&self, date: &Self::Date, other: &Self::Date) -> bool;
    /// `true` if both values fall on the same calendar day.
    fn is_same_day(&self, date: &Self::Date, other: &Self::Date) -> bool;

    /// `date - other` in milliseconds.
    fn diff_millis(&self, date: &Self::Date, other: &Self::Date) -> i64;

    /// Midnight on the first day of `date`'s month.
    fn start_of_month(&self, date: &Self::Date) -> Self::Date;

    /// Calendar fields from `date`, clock fields from `time`.
    ///
    /// Implementations may drop sub-minute precision.
    fn merge_date_and_time(&self, date: &Self::Date, time: &Self::Date) -> Self::Date;

    fn format(&self, date: &Self::Date, pattern: &str) -> String;
}
