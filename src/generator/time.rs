//! Time sources for Randflake generation
//!
//! Provides wall-clock time in whole seconds since the Unix epoch

use chrono::Utc;

/// A source of the current Unix time in seconds
///
/// Plug in the system clock, a fixed value or a stepped fake for tests. Any
/// `Fn() -> i64` closure is a time source.
pub trait TimeSource {
    /// Returns the current time in seconds since the Unix epoch
    fn current_secs(&self) -> i64;
}

/// Wall-clock time source backed by the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn current_secs(&self) -> i64 {
        Utc::now().timestamp()
    }
}

impl<F> TimeSource for F
where
    F: Fn() -> i64,
{
    #[inline(always)]
    fn current_secs(&self) -> i64 {
        self()
    }
}
