//! Proleptic Gregorian calendar arithmetic.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    JANUARY, MAX_MONTH, MIN_DAY,
};

pub(crate) const fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Length of `month` in `year`, or `None` for a month outside `1..=12`.
pub(crate) const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if month < JANUARY || month > MAX_MONTH {
        None
    } else if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

/// Clamps `day` into `1..=days_in_month(year, month)`.
///
/// Replacing the year or month of a date keeps the day-of-month when it
/// exists in the target month and falls back to the month's last day when it
/// does not (Jan 31 -> Feb 28/29). An invalid month leaves `day` untouched.
pub(crate) const fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    let Some(last) = days_in_month(year, month) else {
        return day;
    };
    if day < MIN_DAY {
        MIN_DAY
    } else if day > last {
        last
    } else {
        day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative year divisible by 4",
            },
            TestCase {
                year: -100,
                is_leap: false,
                description: "negative century",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                Some(expected[month as usize]),
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), Some(29));
    }

    #[test]
    fn test_days_in_month_rejects_invalid_month() {
        assert_eq!(days_in_month(2020, 0), None);
        assert_eq!(days_in_month(2020, 13), None);
        assert_eq!(days_in_month(2020, u32::MAX), None);
    }

    #[test]
    fn test_clamp_day() {
        assert_eq!(clamp_day(2021, 2, 31), 28);
        assert_eq!(clamp_day(2020, 2, 31), 29);
        assert_eq!(clamp_day(2020, 4, 31), 30);
        assert_eq!(clamp_day(2020, 1, 15), 15);
        assert_eq!(clamp_day(2020, 1, 0), 1);
        assert_eq!(clamp_day(2020, 13, 31), 31);
        assert_eq!(clamp_day(2020, 0, 31), 31);
    }
}
