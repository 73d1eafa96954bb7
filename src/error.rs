//! Error types for argument validation
//!
//! Malformed inputs are rejected up front instead of being coerced into
//! wrapped or garbage timestamps.

/// Errors produced when an argument cannot describe a valid instant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("hour {0} is outside the 0-23 range")]
    HourOutOfRange(u32),

    #[error("minute {0} is outside the 0-59 range")]
    MinuteOutOfRange(u32),

    #[error("second {0} is outside the 0-59 range")]
    SecondOutOfRange(u32),

    #[error("malformed time of day '{0}', expected HH:MM:SS")]
    MalformedTimeOfDay(String),

    #[error("timestamp {0} cannot be represented as a local date-time")]
    TimestampOutOfRange(i64),

    #[error("no representable month {0} months before the anchor month")]
    MonthOutOfRange(u32),
}
