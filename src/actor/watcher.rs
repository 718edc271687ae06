//! Input Watcher: Dedicated thread for one blocking line read.
//!
//! The watcher runs in its own thread, performs exactly one read-a-line
//! operation on the shared input stream, and fires the session's
//! [`Canceller`] no matter how the read ends (a line, end-of-stream, or an
//! I/O error). It never retries.
//!
//! There is no timeout on the read. If the input never yields a line and is
//! never closed, the watcher thread stays blocked; joining it blocks too.

use super::signal::Canceller;
use std::io::{self, BufRead};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// A line-oriented input stream that several screens read in turn.
///
/// Implementations must consume exactly one line per call so that whoever
/// reads next sees the stream positioned right after it.
pub trait LineSource: Send + Sync {
    /// Read one line, without its trailing newline.
    ///
    /// Returns `Ok(None)` at end-of-stream.
    fn read_line(&self) -> io::Result<Option<String>>;
}

/// Shared handle to the program's input stream.
pub type Input = Arc<dyn LineSource>;

/// Process stdin. The standard library buffers it globally, so every reader
/// shares one stream position.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_newline(line)))
    }
}

/// Any buffered reader behind a mutex (pipes, files, in-memory scripts).
#[derive(Debug)]
pub struct SharedReader<R> {
    inner: Mutex<R>,
}

impl<R: BufRead + Send> SharedReader<R> {
    /// Wrap a reader.
    pub const fn new(reader: R) -> Self {
        Self {
            inner: Mutex::new(reader),
        }
    }
}

impl<R: BufRead + Send> LineSource for SharedReader<R> {
    fn read_line(&self) -> io::Result<Option<String>> {
        let mut reader = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("input reader lock poisoned"))?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_newline(line)))
    }
}

fn trim_newline(mut line: String) -> String {
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    line
}

/// How the watcher's single read ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchOutcome {
    /// A line was read (and discarded).
    Line,
    /// The input reached end-of-stream.
    EndOfInput,
    /// The read failed.
    Error(String),
}

/// Watcher thread handle.
#[derive(Debug)]
pub struct InputWatcher {
    /// Handle to the watcher thread.
    handle: Option<JoinHandle<WatchOutcome>>,
}

impl InputWatcher {
    /// Spawn the watcher thread.
    ///
    /// # Arguments
    ///
    /// * `input` - The shared input stream to read one line from.
    /// * `canceller` - Fired exactly once when the read completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the thread. The canceller is
    /// not fired in that case.
    pub fn spawn(input: Input, canceller: Canceller) -> io::Result<Self> {
        let handle = thread::Builder::new()
            .name("yajuws-watcher".to_string())
            .spawn(move || Self::watch(input.as_ref(), &canceller))?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Wait for the watcher thread to finish.
    ///
    /// Blocks until the pending read completes.
    pub fn join(mut self) -> Option<WatchOutcome> {
        self.handle.take().and_then(|handle| handle.join().ok())
    }

    /// The watcher body: one read, one fire.
    fn watch(input: &dyn LineSource, canceller: &Canceller) -> WatchOutcome {
        let outcome = match input.read_line() {
            Ok(Some(_)) => WatchOutcome::Line,
            Ok(None) => WatchOutcome::EndOfInput,
            Err(e) => {
                warn!(error = %e, "input watcher read failed");
                WatchOutcome::Error(e.to_string())
            }
        };

        let first = canceller.fire();
        debug!(?outcome, first, "input watcher finished");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::CancellationSignal;
    use std::io::{Cursor, Read};
    use std::time::Duration;

    fn script(text: &str) -> Arc<SharedReader<Cursor<Vec<u8>>>> {
        Arc::new(SharedReader::new(Cursor::new(text.as_bytes().to_vec())))
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    impl BufRead for FailingReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::other("boom"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn test_shared_reader_lines() {
        let source = script("one\r\ntwo\nthree");
        assert_eq!(source.read_line().unwrap().as_deref(), Some("one"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("two"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("three"));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn test_watcher_fires_on_line_and_consumes_one() {
        let source = script("stop\nnext\n");
        let signal = CancellationSignal::new();

        let watcher = InputWatcher::spawn(source.clone(), signal.canceller()).unwrap();
        assert!(signal.wait_timeout(Duration::from_secs(5)));
        assert_eq!(watcher.join(), Some(WatchOutcome::Line));

        // The next reader sees the stream right after the consumed line
        assert_eq!(source.read_line().unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn test_watcher_fires_on_end_of_input() {
        let signal = CancellationSignal::new();
        let watcher = InputWatcher::spawn(script(""), signal.canceller()).unwrap();

        assert!(signal.wait_timeout(Duration::from_secs(5)));
        assert_eq!(watcher.join(), Some(WatchOutcome::EndOfInput));
    }

    #[test]
    fn test_watcher_fires_on_read_error() {
        let signal = CancellationSignal::new();
        let source: Input = Arc::new(SharedReader::new(FailingReader));
        let watcher = InputWatcher::spawn(source, signal.canceller()).unwrap();

        assert!(signal.wait_timeout(Duration::from_secs(5)));
        assert!(matches!(watcher.join(), Some(WatchOutcome::Error(_))));
    }

    #[test]
    fn test_watcher_does_not_double_fire() {
        let signal = CancellationSignal::new();
        let canceller = signal.canceller();
        canceller.fire();

        // Completion path runs again after an earlier fire; still one transition
        let watcher = InputWatcher::spawn(script("x\n"), signal.canceller()).unwrap();
        watcher.join();
        assert!(signal.is_fired());
        assert!(!canceller.fire());
    }
}
