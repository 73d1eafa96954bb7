//! Constants used throughout the library
//!
//! This module centralizes unit sizes and format patterns so that every
//! computation agrees on the same values.

// Unit sizes
/// Seconds in one calendar day (ignoring DST transitions)
pub const DAY_SECONDS: i64 = 24 * 60 * 60;
/// Seconds in one hour
pub const HOUR_SECONDS: i64 = 60 * 60;
/// Seconds in one week
pub const WEEK_SECONDS: i64 = 7 * DAY_SECONDS;

// Format patterns (chrono strftime syntax)
/// Default pattern for rendering the current local date-time
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Pattern for time-of-day values
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";
/// Pattern for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";
