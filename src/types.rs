use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// An hour and minute of the day, as produced by
/// [`DateHelpers::seconds_to_hour_minute`](crate::DateHelpers::seconds_to_hour_minute).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[display(fmt = "{hour:02}:{minute:02}")]
pub struct HourMinute {
    pub hour:   u32,
    pub minute: u32,
}

impl HourMinute {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}
