//! Calendar-day and month boundary computations
//!
//! Boundaries are derived from local calendar components (year, month,
//! day), never by truncating an epoch to a multiple of 86 400. That
//! shortcut is wrong in every timezone whose offset is not aligned to
//! UTC midnight.

use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::constants::{DATE_FORMAT, DAY_SECONDS};
use crate::error::TimeError;

/// Resolve a naive local date-time to an epoch timestamp.
///
/// DST gaps resolve to the earliest valid instant; date-times chrono
/// cannot place in the local zone at all fall back to their UTC reading.
pub(crate) fn local_timestamp(naive: NaiveDateTime) -> i64 {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
        .timestamp()
}

fn local_datetime_of(ts: i64) -> Result<DateTime<Local>, TimeError> {
    DateTime::from_timestamp(ts, 0)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or(TimeError::TimestampOutOfRange(ts))
}

/// Epoch timestamp of `00:00:00` on `day`
pub(crate) fn start_of(day: NaiveDate) -> i64 {
    local_timestamp(day.and_time(NaiveTime::MIN))
}

/// Epoch timestamp of `23:59:59` on `day`
pub(crate) fn end_of(day: NaiveDate) -> i64 {
    local_timestamp(day.and_time(NaiveTime::MIN) + Duration::seconds(DAY_SECONDS - 1))
}

/// Epoch timestamp of `00:00:00` on the local calendar day containing `ts`
pub fn day_start(ts: i64) -> Result<i64, TimeError> {
    Ok(start_of(local_datetime_of(ts)?.date_naive()))
}

/// Epoch timestamp of `23:59:59` on the local calendar day containing `ts`
pub fn day_end(ts: i64) -> Result<i64, TimeError> {
    Ok(end_of(local_datetime_of(ts)?.date_naive()))
}

/// First and last day of the month `months_ago` months before `anchor`
///
/// Returns `("YYYY-MM-DD 00:00:00", "YYYY-MM-DD 23:59:59")`. Month
/// lengths (28-31 days) and year rollover are handled by the calendar
/// arithmetic; `months_ago = 0` is the anchor's own month.
pub fn month_bounds(anchor: NaiveDate, months_ago: u32) -> Result<(String, String), TimeError> {
    let first = anchor
        .with_day(1)
        .and_then(|d| d.checked_sub_months(Months::new(months_ago)))
        .ok_or(TimeError::MonthOutOfRange(months_ago))?;
    let last = first
        .checked_add_months(Months::new(1))
        .map(|next_first| next_first - Duration::days(1))
        .ok_or(TimeError::MonthOutOfRange(months_ago))?;

    Ok((
        format!("{} 00:00:00", first.format(DATE_FORMAT)),
        format!("{} 23:59:59", last.format(DATE_FORMAT)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_bounds_bracket_the_timestamp() {
        let ts = Local.with_ymd_and_hms(2025, 1, 15, 12, 30, 45).single().unwrap().timestamp();
        let start = day_start(ts).unwrap();
        let end = day_end(ts).unwrap();
        assert!(start <= ts && ts <= end);
        assert_eq!(end - start, DAY_SECONDS - 1);
    }

    #[test]
    fn day_start_is_local_midnight() {
        let noon = Local.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).single().unwrap();
        let midnight = Local.with_ymd_and_hms(2025, 7, 15, 0, 0, 0).single().unwrap();
        assert_eq!(day_start(noon.timestamp()).unwrap(), midnight.timestamp());
    }

    #[test]
    fn day_start_rejects_unrepresentable_timestamps() {
        assert_eq!(
            day_start(i64::MAX),
            Err(TimeError::TimestampOutOfRange(i64::MAX))
        );
    }

    #[test]
    fn month_bounds_current_month() {
        let (first, last) = month_bounds(date(2025, 3, 15), 0).unwrap();
        assert_eq!(first, "2025-03-01 00:00:00");
        assert_eq!(last, "2025-03-31 23:59:59");
    }

    #[test]
    fn month_bounds_handles_leap_february() {
        let (first, last) = month_bounds(date(2024, 3, 31), 1).unwrap();
        assert_eq!(first, "2024-02-01 00:00:00");
        assert_eq!(last, "2024-02-29 23:59:59");
    }

    #[test]
    fn month_bounds_crosses_year_boundary() {
        let (first, last) = month_bounds(date(2025, 2, 10), 3).unwrap();
        assert_eq!(first, "2024-11-01 00:00:00");
        assert_eq!(last, "2024-11-30 23:59:59");
    }

    #[test]
    fn month_bounds_far_past_is_rejected() {
        assert!(month_bounds(date(2025, 1, 1), u32::MAX).is_err());
    }
}
