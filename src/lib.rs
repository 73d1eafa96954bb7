//! Timekit - clock-aware date/time convenience helpers
//!
//! This library bundles the small date-time computations that otherwise
//! get reimplemented ad hoc around scheduling code: day boundaries,
//! recurring daily windows with midnight rollover, countdowns to
//! scheduled boundaries, and compact human-readable duration rendering.
//! Everything operates on epoch timestamps (seconds since the Unix
//! epoch) interpreted in the process's local timezone, plus validated
//! `HH:MM:SS` time-of-day values.
//!
//! All operations are stateless; the only ambient input is the clock,
//! injected through the [`Clock`] trait so tests can pin the current
//! instant.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`clock`] - Clock capability trait and implementations
//! * [`constants`] - Unit sizes and format patterns
//! * [`day`] - Calendar-day and month boundary computations
//! * [`error`] - Argument validation errors
//! * [`format`] - Compact duration rendering
//! * [`helper`] - The clock-reading front end, [`TimeHelper`]
//! * [`time_of_day`] - Validated time-of-day values
//! * [`window`] - Daily-window resolution and boundary countdowns

/// Clock abstraction for reading (or pinning) the current instant
pub mod clock;

/// Process-wide unit sizes and format patterns
pub mod constants;

/// Calendar-day and month boundary computations
pub mod day;

/// Argument validation error types
pub mod error;

/// Compact human-readable duration rendering
pub mod format;

/// Clock-reading front end bundling every operation
pub mod helper;

/// Validated time-of-day values
pub mod time_of_day;

/// Daily-window resolution and boundary countdowns
pub mod window;

// Re-export the types callers touch most
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::TimeError;
pub use format::translate_secs;
pub use helper::TimeHelper;
pub use time_of_day::TimeOfDay;
pub use window::{resolve_window, Interval};
