//! Snapshot module: What a live view shows at each tick.
//!
//! This module contains:
//! - [`Snapshot`]: An immutable text frame plus a "complete" flag
//! - [`Snapshotter`]: The producer a refresh loop calls once per tick
//! - [`ClockSnapshotter`]: Current local time
//! - [`TaskManagerSnapshotter`]: Host statistics with per-field degradation
//! - [`StepSnapshotter`]: A finite, ordered list of frames (boot, countdown)
//! - [`format`]: Duration and byte-size formatting shared by the screens

mod clock;
pub mod format;
mod metrics;
mod steps;

pub use clock::{ClockSnapshotter, TIMESTAMP_FORMAT};
pub use metrics::{
    HostMetrics, HostSample, LoadAverage, MemoryUsage, MetricError, MetricResult,
    SysinfoMetrics, TaskManagerSnapshotter, UNAVAILABLE,
};
pub use steps::{StepMode, StepSnapshotter};

/// One frame of a live view.
///
/// Produced fresh on every tick and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    text: String,
    complete: bool,
}

impl Snapshot {
    /// A frame of an open-ended view.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            complete: false,
        }
    }

    /// The last frame of a bounded view.
    pub fn last(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            complete: true,
        }
    }

    /// The frame text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether no more frames follow this one.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Produces the frame for the current tick.
///
/// Called synchronously on the refresh loop's thread, so it must return
/// promptly. Sampling failures are folded into the returned text rather than
/// reported as errors.
pub trait Snapshotter {
    /// Build the frame for this tick.
    fn snapshot(&mut self) -> Snapshot;

    /// Frame shown once after the last complete snapshot, if any.
    fn completion(&self) -> Option<Snapshot> {
        None
    }
}

impl<F> Snapshotter for F
where
    F: FnMut() -> Snapshot,
{
    fn snapshot(&mut self) -> Snapshot {
        self()
    }
}
