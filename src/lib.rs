//! Calendar math and disabled-date rules for date pickers.
//!
//! [`DateHelpers`] wraps a [`DateAdapter`] and answers the questions a
//! picker asks while rendering and navigating: which days may be selected
//! under a set of [`DateBounds`], whether the previous or next month has
//! anything to show, and how to move a selected time of day onto a new day.
//!
//! ```
//! use chrono::NaiveDate;
//! use datepicker_helpers::{ChronoAdapter, DateBounds, DateHelpers};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let helpers = DateHelpers::new(ChronoAdapter::new());
//! let bounds = DateBounds::new()
//!     .with_min_date(day(10))
//!     .with_include_dates([day(5), day(15), day(20)]);
//!
//! assert_eq!(helpers.effective_min_date(&bounds).unwrap(), day(15));
//! assert!(helpers.is_day_disabled(&day(5), &bounds));
//! assert!(!helpers.is_day_disabled(&day(20), &bounds));
//! ```

mod adapter;
mod bounds;
mod calendar;
mod chrono_adapter;
mod consts;
mod helpers;
mod prelude;
mod types;

pub use adapter::DateAdapter;
pub use bounds::{DateBounds, DateFilter};
pub use chrono_adapter::ChronoAdapter;
pub use consts::*;
pub use helpers::{DateHelpers, HelperError};
pub use types::HourMinute;
