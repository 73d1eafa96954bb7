//! Clock-reading front end over the pure date-time cores

use chrono::{DateTime, Local};

use crate::clock::{Clock, SystemClock};
use crate::constants::DEFAULT_DATETIME_FORMAT;
use crate::day;
use crate::error::TimeError;
use crate::time_of_day::TimeOfDay;
use crate::window::{self, Interval};

/// Entry point bundling every clock-dependent operation.
///
/// Generic over [`Clock`] so tests can pin the current instant with
/// [`FixedClock`](crate::clock::FixedClock); production code uses
/// [`TimeHelper::new`], which reads the system wall clock. The helper
/// holds no other state, so sharing one across threads needs no
/// synchronization.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeHelper<C: Clock = SystemClock> {
    clock: C,
}

impl TimeHelper<SystemClock> {
    /// Helper backed by the system wall clock
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> TimeHelper<C> {
    /// Helper backed by a caller-supplied clock
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Current instant in the local timezone
    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    /// Current local time rendered with
    /// [`DEFAULT_DATETIME_FORMAT`](crate::constants::DEFAULT_DATETIME_FORMAT)
    pub fn now_formatted(&self) -> String {
        self.now_formatted_as(DEFAULT_DATETIME_FORMAT)
    }

    /// Current local time rendered with a caller-supplied strftime pattern
    pub fn now_formatted_as(&self, pattern: &str) -> String {
        self.clock.now().format(pattern).to_string()
    }

    /// Epoch timestamp of `00:00:00` today
    pub fn today_start(&self) -> i64 {
        day::start_of(self.clock.now().date_naive())
    }

    /// Epoch timestamp of `23:59:59` today
    pub fn today_end(&self) -> i64 {
        day::end_of(self.clock.now().date_naive())
    }

    /// Epoch timestamp of `00:00:00` on the local day containing `ts`
    pub fn day_start(&self, ts: i64) -> Result<i64, TimeError> {
        day::day_start(ts)
    }

    /// Epoch timestamp of `23:59:59` on the local day containing `ts`
    pub fn day_end(&self, ts: i64) -> Result<i64, TimeError> {
        day::day_end(ts)
    }

    /// Seconds left in the current local day, always positive
    pub fn today_surplus(&self) -> i64 {
        let now = self.clock.now();
        let surplus = day::end_of(now.date_naive()) - now.timestamp();
        if surplus > 0 {
            surplus
        } else {
            log::warn!("day surplus resolved to {surplus}s, flooring to 1");
            1
        }
    }

    /// Resolve a daily window against the clock's current time-of-day
    pub fn interval(&self, start: TimeOfDay, end: TimeOfDay) -> Option<Interval> {
        let now = self.clock.now();
        window::resolve_window(start, end, TimeOfDay::from(now.time()), now.date_naive())
    }

    /// Resolve a daily window against an explicit current time-of-day
    pub fn interval_at(
        &self,
        start: TimeOfDay,
        end: TimeOfDay,
        current: TimeOfDay,
    ) -> Option<Interval> {
        window::resolve_window(start, end, current, self.clock.now().date_naive())
    }

    /// Seconds until the `:59:59` boundary of the nearest even-numbered
    /// hour (the current hour when even, the next one when odd).
    ///
    /// The "odd" in the name is a legacy of the countdown being armed
    /// from odd hours; the target hour itself is always even.
    pub fn odd_remain_seconds(&self) -> i64 {
        window::secs_to_even_hour_end(self.clock.now())
    }

    /// First and last day of the month `months_ago` months back, as
    /// `"YYYY-MM-DD 00:00:00"` / `"YYYY-MM-DD 23:59:59"` strings
    pub fn first_and_last_day_of_month(
        &self,
        months_ago: u32,
    ) -> Result<(String, String), TimeError> {
        day::month_bounds(self.clock.now().date_naive(), months_ago)
    }

    /// Seconds until the `[start:00:00, end:59:59]` daily window next
    /// opens; `1` when already inside it
    pub fn allow_seconds_later(
        &self,
        allow_start_hour: u32,
        allow_end_hour: u32,
    ) -> Result<i64, TimeError> {
        window::secs_until_allowed(self.clock.now(), allow_start_hour, allow_end_hour)
    }
}
