//! Cancellation Signal: A single-fire event shared between two threads.
//!
//! The signal is a "closed-once" channel. Nothing is ever sent on it; firing
//! drops the only sender, which disconnects every receiver at once. That makes
//! it observable three ways without locks on the read side:
//!
//! - [`CancellationSignal::is_fired`] for a non-blocking poll,
//! - [`CancellationSignal::receiver`] inside a `select!` alongside other channels,
//! - [`CancellationSignal::wait_timeout`] for a bounded blocking wait.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Uninhabited message type: the channel only ever disconnects.
#[derive(Debug)]
pub enum Never {}

/// State shared between the signal and its cancellers.
#[derive(Debug)]
struct Shared {
    /// Set by the first successful [`Canceller::fire`].
    fired: AtomicBool,
    /// Dropped exactly once, by whichever call wins the `fired` swap.
    trigger: Mutex<Option<Sender<Never>>>,
}

/// A one-shot, broadcast-once cancellation event.
///
/// Created fresh for every live-view session and dropped when the session
/// ends. Transitions from pending to fired exactly once.
#[derive(Debug)]
pub struct CancellationSignal {
    shared: Arc<Shared>,
    closed: Receiver<Never>,
}

/// Handle used by another thread to fire a [`CancellationSignal`].
///
/// Cloning is cheap. Firing through any clone, any number of times, has the
/// same effect as firing once.
#[derive(Debug, Clone)]
pub struct Canceller {
    shared: Arc<Shared>,
}

impl CancellationSignal {
    /// Create a new pending signal.
    pub fn new() -> Self {
        let (trigger, closed) = bounded(0);
        Self {
            shared: Arc::new(Shared {
                fired: AtomicBool::new(false),
                trigger: Mutex::new(Some(trigger)),
            }),
            closed,
        }
    }

    /// Get a handle that can fire this signal from another thread.
    pub fn canceller(&self) -> Canceller {
        Canceller {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Non-blocking check.
    #[inline]
    pub fn is_fired(&self) -> bool {
        self.shared.fired.load(Ordering::Acquire)
    }

    /// Receiver that becomes ready (disconnected) once the signal fires.
    ///
    /// Use this with `select!` to wait on the signal and a timer together:
    ///
    /// ```ignore
    /// select! {
    ///     recv(signal.receiver()) -> _ => return Outcome::Cancelled,
    ///     recv(ticks) -> tick => render(tick),
    /// }
    /// ```
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Never> {
        &self.closed
    }

    /// Block until the signal fires or `timeout` elapses.
    ///
    /// Returns `true` if the signal fired.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        match self.closed.recv_timeout(timeout) {
            Err(RecvTimeoutError::Disconnected) => true,
            Err(RecvTimeoutError::Timeout) => self.is_fired(),
            Ok(never) => match never {},
        }
    }
}

impl Default for CancellationSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl Canceller {
    /// Fire the signal.
    ///
    /// Returns `true` only for the call that performed the pending → fired
    /// transition. Every later call is a no-op returning `false`.
    pub fn fire(&self) -> bool {
        if self.shared.fired.swap(true, Ordering::AcqRel) {
            return false;
        }
        // Only the winner of the swap gets here, so the lock is uncontended.
        let sender = match self.shared.trigger.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        drop(sender);
        true
    }

    /// Whether the signal has already fired.
    pub fn is_fired(&self) -> bool {
        self.shared.fired.load(Ordering::Acquire)
    }
}
