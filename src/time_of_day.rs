//! Validated time-of-day values
//!
//! Wall-clock times arrive as `HH:MM:SS` strings. Instead of comparing
//! those strings lexicographically (which only works while the format
//! stays zero-padded), they are parsed once into [`TimeOfDay`] and
//! compared numerically. The derived ordering on `(hour, minute, second)`
//! is identical to the string ordering for well-formed input.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::constants::{HOUR_SECONDS, TIME_OF_DAY_FORMAT};
use crate::error::TimeError;

/// Wall-clock time of day with second precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeOfDay {
    /// Build a time of day, rejecting out-of-range components
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        if second > 59 {
            return Err(TimeError::SecondOutOfRange(second));
        }
        Ok(Self { hour, minute, second })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Seconds elapsed since local midnight
    pub fn seconds_into_day(&self) -> i64 {
        i64::from(self.hour) * HOUR_SECONDS + i64::from(self.minute) * 60 + i64::from(self.second)
    }

    /// Equivalent chrono time
    pub fn as_naive_time(&self) -> NaiveTime {
        // Components are range-checked at construction
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second).unwrap_or(NaiveTime::MIN)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    /// Parse the strict zero-padded `HH:MM:SS` form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // %H:%M:%S would also accept unpadded components like "9:05:30";
        // the length check pins the input to the 8-character form
        if s.len() != 8 {
            return Err(TimeError::MalformedTimeOfDay(s.to_string()));
        }
        let parsed = NaiveTime::parse_from_str(s, TIME_OF_DAY_FORMAT)
            .map_err(|_| TimeError::MalformedTimeOfDay(s.to_string()))?;
        // chrono maps :60 to a leap second on second 59; treat it as malformed
        if parsed.nanosecond() >= 1_000_000_000 {
            return Err(TimeError::MalformedTimeOfDay(s.to_string()));
        }
        Ok(Self::from(parsed))
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
