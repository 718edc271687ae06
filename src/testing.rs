//! Test doubles: simulated time and a frame recorder.

use crate::actor::{CancellationSignal, Canceller, Tick, TickSource, Wake};
use crate::snapshot::Snapshot;
use crate::terminal::Screen;
use std::time::Duration;

/// A [`TickSource`] on simulated time.
///
/// Each wait advances the clock by one period. If a cancellation time falls
/// inside that period, the signal is fired at that instant and the wait
/// returns early. A cancellation exactly on a tick boundary fires the signal
/// and still reports the tick, so both are ready at once.
pub struct SimulatedTicks {
    period: Duration,
    now: Duration,
    frame: u64,
    cancel_at: Option<Duration>,
    canceller: Canceller,
}

impl SimulatedTicks {
    pub fn new(period: Duration, canceller: Canceller) -> Self {
        Self {
            period,
            now: Duration::ZERO,
            frame: 0,
            cancel_at: None,
            canceller,
        }
    }

    #[must_use]
    pub fn cancel_at(mut self, at: Duration) -> Self {
        self.cancel_at = Some(at);
        self
    }

    pub const fn now(&self) -> Duration {
        self.now
    }
}

impl TickSource for SimulatedTicks {
    fn wait(&mut self, signal: &CancellationSignal) -> Wake {
        if signal.is_fired() {
            return Wake::Cancelled;
        }

        let next = self.now + self.period;
        match self.cancel_at {
            Some(at) if at < next => {
                self.now = at.max(self.now);
                self.canceller.fire();
                return Wake::Cancelled;
            }
            Some(at) if at == next => {
                self.canceller.fire();
            }
            _ => {}
        }

        self.now = next;
        self.frame += 1;
        Wake::Tick(Tick {
            frame: self.frame,
            elapsed: next,
        })
    }
}

/// A [`Screen`] that keeps every frame's text.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub frames: Vec<String>,
}

impl Screen for RecordingScreen {
    fn render(&mut self, snapshot: &Snapshot) {
        self.frames.push(snapshot.text().to_string());
    }
}
