/// Seconds in one minute
pub const SECONDS_PER_MINUTE: u32 = 60;
/// Seconds in one hour
pub const SECONDS_PER_HOUR: u32 = 3_600;

/// Milliseconds in one second
pub const MILLIS_PER_SECOND: i64 = 1_000;
/// Milliseconds in one (24 hour) day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Months in a calendar year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// First day of month
pub const MIN_DAY: u32 = 1;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
