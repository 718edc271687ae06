//! Refresh Loop: render, wait, repeat until cancelled or out of steps.

use crate::actor::{CancellationSignal, TickSource, Wake};
use crate::snapshot::{Snapshot, Snapshotter};
use crate::terminal::Screen;
use tracing::trace;

/// How a live view ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cancellation signal fired (user input or end of input).
    Cancelled,
    /// A bounded view showed its last step and its completion frame.
    Exhausted,
}

/// Drives one live view: snapshot, render, wait for the next tick.
///
/// The loop suspends only inside [`TickSource::wait`]. Snapshotting and
/// rendering run to completion before the signal is looked at again, so the
/// last frame on screen is always a whole one.
pub struct RefreshLoop<T, S> {
    /// Period source.
    ticks: T,
    /// Where frames go.
    screen: S,
    /// Frames rendered so far, completion frames included.
    frames: u64,
}

impl<T: TickSource, S: Screen> RefreshLoop<T, S> {
    /// Create a loop over a tick source and a screen.
    pub const fn new(ticks: T, screen: S) -> Self {
        Self {
            ticks,
            screen,
            frames: 0,
        }
    }

    /// Run until cancelled or until the snapshotter reports completion.
    ///
    /// - The first frame is rendered immediately, before any wait.
    /// - The signal is polled before every frame. A tick that arrives together
    ///   with the signal therefore never produces a frame.
    /// - When a snapshot is marked complete, the loop waits one more period,
    ///   renders the snapshotter's completion frame, and returns
    ///   [`Outcome::Exhausted`].
    pub fn run(&mut self, snapshotter: &mut dyn Snapshotter, signal: &CancellationSignal) -> Outcome {
        loop {
            if signal.is_fired() {
                return Outcome::Cancelled;
            }

            let snapshot = snapshotter.snapshot();
            self.draw(&snapshot);

            if snapshot.is_complete() {
                // Steps are done; cancellation can only shorten this pause
                let _ = self.ticks.wait(signal);
                if let Some(done) = snapshotter.completion() {
                    self.draw(&done);
                }
                return Outcome::Exhausted;
            }

            if let Wake::Cancelled = self.ticks.wait(signal) {
                return Outcome::Cancelled;
            }
        }
    }

    fn draw(&mut self, snapshot: &Snapshot) {
        self.screen.render(snapshot);
        self.frames += 1;
        trace!(frame = self.frames, complete = snapshot.is_complete(), "frame rendered");
    }

    /// Frames rendered so far.
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Get a reference to the screen.
    pub const fn screen(&self) -> &S {
        &self.screen
    }

    /// Get a reference to the tick source.
    pub const fn ticks(&self) -> &T {
        &self.ticks
    }
}
