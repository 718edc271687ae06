//! Session module: One live view from launch to return.
//!
//! A [`Session`] pairs a fresh [`CancellationSignal`] with a single
//! [`InputWatcher`] and hands the signal to a [`RefreshLoop`]. Sessions never
//! nest and never run concurrently, so at most one watcher reads the shared
//! input stream at any time.
//!
//! ```text
//! Idle ──run()──▶ Running ──signal──▶ Cancelled
//!                    │
//!                    └──last step──▶ Exhausted
//! ```

mod refresh;

pub use refresh::{Outcome, RefreshLoop};

use crate::actor::{CancellationSignal, Input, InputWatcher, TickSource, TickerActor, WatchOutcome};
use crate::error::{Result, ShellError};
use crate::snapshot::Snapshotter;
use crate::terminal::Screen;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Lifecycle of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed; the watcher has not been started.
    Idle,
    /// Watcher running, loop alternating render and wait.
    Running,
    /// Ended by the cancellation signal.
    Cancelled,
    /// Ended by running out of steps.
    Exhausted,
}

impl From<Outcome> for SessionState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Cancelled => Self::Cancelled,
            Outcome::Exhausted => Self::Exhausted,
        }
    }
}

/// One live view.
pub struct Session {
    /// Shared input stream; the watcher reads one line from it.
    input: Input,
    /// Fired by the watcher, observed by the loop.
    signal: CancellationSignal,
    /// The watcher, once started.
    watcher: Option<InputWatcher>,
    /// Current lifecycle state.
    state: SessionState,
}

impl Session {
    /// Create an idle session reading from `input`.
    pub fn new(input: Input) -> Self {
        Self {
            input,
            signal: CancellationSignal::new(),
            watcher: None,
            state: SessionState::Idle,
        }
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The session's cancellation signal.
    pub const fn signal(&self) -> &CancellationSignal {
        &self.signal
    }

    /// Start the watcher and run the loop until it ends.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::SessionReused`] if the session already ran, or an
    /// I/O error if the watcher thread cannot be spawned.
    pub fn run<T: TickSource, S: Screen>(
        &mut self,
        refresh: &mut RefreshLoop<T, S>,
        snapshotter: &mut dyn Snapshotter,
    ) -> Result<Outcome> {
        if self.state != SessionState::Idle {
            return Err(ShellError::SessionReused);
        }

        let watcher = InputWatcher::spawn(Arc::clone(&self.input), self.signal.canceller())?;
        self.watcher = Some(watcher);
        self.state = SessionState::Running;
        debug!("live view started");

        let outcome = refresh.run(snapshotter, &self.signal);
        self.state = outcome.into();
        debug!(?outcome, frames = refresh.frames(), "live view ended");

        Ok(outcome)
    }

    /// End the session, waiting for the watcher's read to complete.
    ///
    /// After a cancelled run this returns at once. After an exhausted run the
    /// watcher may still be waiting for its line; this blocks until it
    /// arrives, so the line never leaks into the next screen.
    pub fn finish(mut self) -> Option<WatchOutcome> {
        let outcome = self.watcher.take().and_then(InputWatcher::join);
        debug!(?outcome, "watcher joined");
        outcome
    }
}

/// Run one complete live view on a real ticker.
///
/// Spawns the ticker and the watcher, runs the loop, then stops the ticker and
/// joins the watcher.
pub fn run_live_view<S: Screen>(
    input: Input,
    tick_period: Duration,
    screen: S,
    snapshotter: &mut dyn Snapshotter,
) -> Result<Outcome> {
    let ticker = TickerActor::spawn(tick_period)?;
    let mut refresh = RefreshLoop::new(ticker, screen);
    let mut session = Session::new(input);

    let outcome = session.run(&mut refresh, snapshotter)?;

    // Stop ticking before blocking on the watcher
    drop(refresh);
    session.finish();

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{LineSource, SharedReader};
    use crate::snapshot::{Snapshot, StepSnapshotter};
    use crate::testing::{RecordingScreen, SimulatedTicks};
    use std::io::Cursor;

    fn script(text: &str) -> Arc<SharedReader<Cursor<Vec<u8>>>> {
        Arc::new(SharedReader::new(Cursor::new(text.as_bytes().to_vec())))
    }

    fn clock() -> impl FnMut() -> Snapshot {
        || Snapshot::new("tick")
    }

    #[test]
    fn test_session_cancelled_by_input_line() {
        let input = script("\nafter\n");
        let mut session = Session::new(input.clone());
        assert_eq!(session.state(), SessionState::Idle);

        // Real ticker with a long period: only the watcher can end this
        let ticker = TickerActor::spawn(Duration::from_secs(60)).unwrap();
        let mut refresh = RefreshLoop::new(ticker, RecordingScreen::default());

        let outcome = session.run(&mut refresh, &mut clock()).unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(session.state(), SessionState::Cancelled);
        assert!(refresh.frames() <= 1);
        assert_eq!(session.finish(), Some(WatchOutcome::Line));

        // Exactly one line consumed
        assert_eq!(input.read_line().unwrap().as_deref(), Some("after"));
    }

    #[test]
    fn test_session_cancelled_by_end_of_input() {
        let mut session = Session::new(script(""));
        let ticker = TickerActor::spawn(Duration::from_secs(60)).unwrap();
        let mut refresh = RefreshLoop::new(ticker, RecordingScreen::default());

        assert_eq!(session.run(&mut refresh, &mut clock()).unwrap(), Outcome::Cancelled);
        assert_eq!(session.finish(), Some(WatchOutcome::EndOfInput));
    }

    #[test]
    fn test_session_exhausted_then_joins_watcher() {
        let input = script("continue\nmenu\n");
        let mut session = Session::new(input.clone());
        let signal_probe = session.signal().canceller();

        // The watcher may fire before the steps run out; either way it
        // consumes exactly one line.
        let ticks = SimulatedTicks::new(Duration::from_secs(1), signal_probe);
        let mut refresh = RefreshLoop::new(ticks, RecordingScreen::default());
        let mut boot = StepSnapshotter::boot(["a", "b"], "done");

        let outcome = session.run(&mut refresh, &mut boot).unwrap();
        assert!(matches!(outcome, Outcome::Exhausted | Outcome::Cancelled));
        assert_eq!(session.finish(), Some(WatchOutcome::Line));

        assert_eq!(input.read_line().unwrap().as_deref(), Some("menu"));
    }

    #[test]
    fn test_session_cannot_run_twice() {
        let mut session = Session::new(script(""));
        let ticker = TickerActor::spawn(Duration::from_secs(60)).unwrap();
        let mut refresh = RefreshLoop::new(ticker, RecordingScreen::default());

        session.run(&mut refresh, &mut clock()).unwrap();
        assert!(matches!(
            session.run(&mut refresh, &mut clock()),
            Err(ShellError::SessionReused)
        ));
    }

    #[test]
    fn test_run_live_view_returns_on_input() {
        let mut screen = RecordingScreen::default();
        let outcome = run_live_view(
            script("\n"),
            Duration::from_secs(60),
            &mut screen,
            &mut clock(),
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(screen.frames.len() <= 1);
    }
}
