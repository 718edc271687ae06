//! Ticker Actor: Dedicated thread marking period boundaries.
//!
//! The refresh loop never sleeps on its own; it asks a [`TickSource`] to wait
//! for whichever comes first, the next boundary or the session's
//! cancellation.

use super::signal::CancellationSignal;
use crossbeam_channel::{bounded, select, Receiver, RecvTimeoutError, Sender, TrySendError};
use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// One period boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Boundary index: 1 for the first period, 2 for the second, and so on.
    pub frame: u64,
    /// Time since the ticker started.
    pub elapsed: Duration,
}

/// Why a wait returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// A period boundary was reached.
    Tick(Tick),
    /// The cancellation signal fired first.
    Cancelled,
}

/// Something the refresh loop can wait on between frames.
pub trait TickSource {
    /// Block until the next tick boundary or until `signal` fires,
    /// whichever happens first.
    fn wait(&mut self, signal: &CancellationSignal) -> Wake;
}

/// Boundaries anchored to a start instant.
///
/// Boundary `k` falls at `start + k * period`. A boundary that has already
/// passed when the previous one is delivered is skipped rather than queued.
#[derive(Debug)]
struct Schedule {
    start: Instant,
    period: Duration,
    frame: u64,
    due: Instant,
}

impl Schedule {
    fn new(period: Duration) -> Self {
        let start = Instant::now();
        Self {
            start,
            period,
            frame: 1,
            due: start + period,
        }
    }

    fn tick(&self, now: Instant) -> Tick {
        Tick {
            frame: self.frame,
            elapsed: now - self.start,
        }
    }

    fn advance(&mut self, now: Instant) {
        loop {
            self.due += self.period;
            self.frame += 1;
            if self.due > now {
                break;
            }
        }
    }
}

/// A thread that sends a [`Tick`] at every period boundary.
///
/// Dropping the actor stops the thread and waits for it.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Dropped to stop the thread.
    stop: Option<Sender<()>>,
    /// At most one undelivered tick.
    ticks: Receiver<Tick>,
}

impl TickerActor {
    /// Start ticking every `period`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a zero period, or the spawn error if the OS
    /// refuses the thread.
    pub fn spawn(period: Duration) -> io::Result<Self> {
        if period.is_zero() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "tick period must be positive",
            ));
        }

        let (stop_tx, stop_rx) = bounded::<()>(0);
        let (tick_tx, tick_rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("yajuws-ticker".to_string())
            .spawn(move || beat(&tick_tx, &stop_rx, period))?;

        Ok(Self {
            handle: Some(handle),
            stop: Some(stop_tx),
            ticks: tick_rx,
        })
    }

    /// The tick channel. Disconnects once the thread has stopped.
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.ticks
    }

    /// Stop the thread and wait for it to exit.
    pub fn shutdown(&mut self) {
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Ticker thread body. Returns when `stop` disconnects or nobody listens.
fn beat(ticks: &Sender<Tick>, stop: &Receiver<()>, period: Duration) {
    let mut schedule = Schedule::new(period);

    loop {
        match stop.recv_deadline(schedule.due) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
        }

        let now = Instant::now();
        // A full channel means the last tick is still unread; drop this one
        if let Err(TrySendError::Disconnected(_)) = ticks.try_send(schedule.tick(now)) {
            return;
        }
        schedule.advance(now);
    }
}

impl TickSource for TickerActor {
    fn wait(&mut self, signal: &CancellationSignal) -> Wake {
        select! {
            recv(signal.receiver()) -> _ => Wake::Cancelled,
            recv(self.ticks) -> tick => match tick {
                Ok(tick) => Wake::Tick(tick),
                // Ticker thread gone; nothing left to wait for
                Err(_) => Wake::Cancelled,
            },
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
