//! Daily-window resolution and countdown-to-boundary computations
//!
//! A recurring daily window is described by two [`TimeOfDay`] values.
//! When the start sorts after the end the window spans midnight, and the
//! concrete occurrence depends on where the current time-of-day falls:
//! the window may have opened today, opened yesterday, or not be open at
//! all. Resolution yields either a full pair of epoch timestamps or
//! nothing, never a pair with only one side set.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::constants::HOUR_SECONDS;
use crate::day::local_timestamp;
use crate::error::TimeError;
use crate::time_of_day::TimeOfDay;

/// Resolved occurrence of a recurring daily window, as epoch timestamps
///
/// Every value constructed by this crate satisfies `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// Window length in seconds
    pub fn duration_secs(&self) -> i64 {
        self.end - self.start
    }

    /// Whether `ts` falls inside the window, boundaries included
    pub fn contains(&self, ts: i64) -> bool {
        self.start <= ts && ts <= self.end
    }
}

/// Resolve the concrete occurrence of a daily window around `today`.
///
/// Boundary equality (`current` exactly at `start` or `end`) falls
/// through to `None`, as does a current time outside the window.
pub fn resolve_window(
    start: TimeOfDay,
    end: TimeOfDay,
    current: TimeOfDay,
    today: NaiveDate,
) -> Option<Interval> {
    let yesterday = today.pred_opt()?;
    let tomorrow = today.succ_opt()?;
    let at = |day: NaiveDate, tod: TimeOfDay| local_timestamp(day.and_time(tod.as_naive_time()));

    if start > end {
        if current > start && current > end {
            // opened today, closes tomorrow
            Some(Interval {
                start: at(today, start),
                end: at(tomorrow, end),
            })
        } else if current < end && current < start {
            // opened yesterday, closes today
            Some(Interval {
                start: at(yesterday, start),
                end: at(today, end),
            })
        } else {
            None
        }
    } else if start < current && current < end {
        Some(Interval {
            start: at(today, start),
            end: at(today, end),
        })
    } else {
        None
    }
}

/// Seconds from `now` until the target `:59:59` hour boundary.
///
/// The target hour is always even-numbered: the current hour when it is
/// even, the next hour when it is odd. Non-positive results (possible
/// around DST transitions) are floored at 1.
pub fn secs_to_even_hour_end(now: DateTime<Local>) -> i64 {
    let naive = now.naive_local();
    let hour = i64::from(naive.hour());
    let target = naive.date().and_time(NaiveTime::MIN)
        + Duration::hours(hour + hour % 2)
        + Duration::seconds(HOUR_SECONDS - 1);
    let remaining = local_timestamp(target) - now.timestamp();
    if remaining > 0 {
        remaining
    } else {
        log::warn!("even-hour countdown resolved to {remaining}s, flooring to 1");
        1
    }
}

/// Seconds until the daily window `[start_hour:00:00, end_hour:59:59]`
/// next opens.
///
/// Before today's window: seconds to its start. After it: seconds to
/// tomorrow's start. Inside it: `1`, meaning "already allowed".
pub fn secs_until_allowed(
    now: DateTime<Local>,
    allow_start_hour: u32,
    allow_end_hour: u32,
) -> Result<i64, TimeError> {
    if allow_start_hour > 23 {
        return Err(TimeError::HourOutOfRange(allow_start_hour));
    }
    if allow_end_hour > 23 {
        return Err(TimeError::HourOutOfRange(allow_end_hour));
    }

    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    let window_start = local_timestamp(midnight + Duration::hours(i64::from(allow_start_hour)));
    let window_end = local_timestamp(
        midnight + Duration::hours(i64::from(allow_end_hour) + 1) - Duration::seconds(1),
    );
    let now_ts = now.timestamp();

    if now_ts < window_start {
        Ok(window_start - now_ts)
    } else if now_ts > window_end {
        let next_start =
            local_timestamp(midnight + Duration::days(1) + Duration::hours(i64::from(allow_start_hour)));
        Ok(next_start - now_ts)
    } else {
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tod(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, s).single().unwrap()
    }

    #[test]
    fn boundary_equality_is_empty() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let start = tod("20:00:00");
        let end = tod("06:00:00");
        assert_eq!(resolve_window(start, end, start, today), None);
        assert_eq!(resolve_window(start, end, end, today), None);
    }

    #[test]
    fn between_end_and_start_is_empty() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(
            resolve_window(tod("20:00:00"), tod("06:00:00"), tod("12:00:00"), today),
            None
        );
    }

    #[test]
    fn degenerate_same_day_window_is_empty() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let noon = tod("12:00:00");
        assert_eq!(resolve_window(noon, noon, noon, today), None);
    }

    #[test]
    fn even_hour_targets_own_hour_end() {
        // 14:30:00 -> 14:59:59 is 29m59s away
        assert_eq!(secs_to_even_hour_end(local(2025, 1, 15, 14, 30, 0)), 1799);
    }

    #[test]
    fn odd_hour_targets_next_hour_end() {
        // 15:30:00 -> 16:59:59 is 1h29m59s away
        assert_eq!(secs_to_even_hour_end(local(2025, 1, 15, 15, 30, 0)), 5399);
    }

    #[test]
    fn hour_23_rolls_into_next_day() {
        // 23:30:00 -> 00:59:59 tomorrow
        assert_eq!(secs_to_even_hour_end(local(2025, 1, 15, 23, 30, 0)), 5399);
    }

    #[test]
    fn allowed_window_validates_hours() {
        let now = local(2025, 1, 15, 12, 0, 0);
        assert_eq!(
            secs_until_allowed(now, 24, 10),
            Err(TimeError::HourOutOfRange(24))
        );
        assert_eq!(
            secs_until_allowed(now, 10, 99),
            Err(TimeError::HourOutOfRange(99))
        );
    }

    #[test]
    fn allowed_window_branches() {
        let now = local(2025, 1, 15, 14, 30, 0);
        // inside [9:00:00, 17:59:59]
        assert_eq!(secs_until_allowed(now, 9, 17).unwrap(), 1);
        // before [16:00:00, 20:59:59]
        assert_eq!(secs_until_allowed(now, 16, 20).unwrap(), 5400);
        // after [6:00:00, 10:59:59] -> tomorrow 06:00:00
        assert_eq!(secs_until_allowed(now, 6, 10).unwrap(), 55_800);
    }
}
