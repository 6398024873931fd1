use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// Predicate deciding whether a single day may be selected.
pub type DateFilter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Selection constraints for a date picker.
///
/// Every field is optional. `include_dates` and `exclude_dates` are matched
/// by calendar day; when reduced to an effective bound their order only
/// decides which of two equal instants wins.
///
/// The data fields round-trip through serde using the widget's prop names
/// (`minDate`, `maxDate`, `excludeDates`, `includeDates`). The filter
/// predicate is never serialized.
#[derive(Clone, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct DateBounds<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date:      Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date:      Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_dates: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_dates: Option<Vec<T>>,
    #[serde(skip)]
    pub filter_date:   Option<DateFilter<T>>,
}

impl<T> Default for DateBounds<T> {
    fn default() -> Self {
        Self {
            min_date:      None,
            max_date:      None,
            exclude_dates: None,
            include_dates: None,
            filter_date:   None,
        }
    }
}

impl<T> DateBounds<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_date(mut self, date: T) -> Self {
        self.min_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_max_date(mut self, date: T) -> Self {
        self.max_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_exclude_dates(mut self, dates: impl IntoIterator<Item = T>) -> Self {
        self.exclude_dates = Some(dates.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_include_dates(mut self, dates: impl IntoIterator<Item = T>) -> Self {
        self.include_dates = Some(dates.into_iter().collect());
        self
    }

    /// Sets the predicate; days for which it returns `false` are disabled.
    #[must_use]
    pub fn with_filter_date<F>(mut self, filter: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter_date = Some(Arc::new(filter));
        self
    }

    /// Runs the filter predicate, treating a missing filter as "allowed".
    pub fn passes_filter(&self, date: &T) -> bool {
        self.filter_date.as_ref().is_none_or(|filter| filter(date))
    }
}

impl<T: fmt::Debug> fmt::Debug for DateBounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateBounds")
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .field("exclude_dates", &self.exclude_dates)
            .field("include_dates", &self.include_dates)
            .field("filter_date", &self.filter_date.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
