//! Clock snapshotter: the real-time clock view.

use super::{Snapshot, Snapshotter};
use chrono::{Local, NaiveDateTime};

/// `strftime` pattern used for every timestamp on screen.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the current local time. Never fails.
pub struct ClockSnapshotter<F = fn() -> NaiveDateTime> {
    now: F,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl ClockSnapshotter {
    /// Clock backed by the system's local time.
    pub fn new() -> Self {
        Self { now: local_now }
    }
}

impl Default for ClockSnapshotter {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FnMut() -> NaiveDateTime> ClockSnapshotter<F> {
    /// Clock backed by a custom time source.
    pub const fn with_source(now: F) -> Self {
        Self { now }
    }
}

impl<F: FnMut() -> NaiveDateTime> Snapshotter for ClockSnapshotter<F> {
    fn snapshot(&mut self) -> Snapshot {
        Snapshot::new((self.now)().format(TIMESTAMP_FORMAT).to_string())
    }
}
