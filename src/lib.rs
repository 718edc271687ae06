//! # Yajuws
//!
//! A joke operating-system shell for the terminal.
//!
//! Menus are plain line-oriented screens. The live views (real-time clock,
//! task manager, boot sequence, countdown) redraw once per tick until the user
//! presses Enter, input ends, or a bounded sequence runs out of steps.
//!
//! ## Core Concepts
//!
//! - **Cancellation signal**: A single-fire, cross-thread stop flag
//! - **Input watcher**: A thread that blocks on one input line, then fires
//! - **Refresh loop**: Snapshot, render, wait for a tick or the signal
//! - **Snapshotters**: Clock, task-manager and step sequences producing frames
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use yajuws::{run_live_view, ClockSnapshotter, Palette, StdinSource, TerminalScreen};
//!
//! let mut screen = TerminalScreen::new(std::io::stdout(), Palette::default());
//! run_live_view(
//!     Arc::new(StdinSource),
//!     Duration::from_secs(1),
//!     &mut screen,
//!     &mut ClockSnapshotter::new(),
//! )?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod config;
pub mod error;
pub mod session;
pub mod shell;
pub mod snapshot;
pub mod terminal;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use actor::{CancellationSignal, Canceller, Input, InputWatcher, LineSource, StdinSource};
pub use config::{ShellConfig, Theme};
pub use error::{Result, ShellError};
pub use session::{run_live_view, Outcome, RefreshLoop, Session, SessionState};
pub use shell::Shell;
pub use snapshot::{ClockSnapshotter, Snapshot, Snapshotter, StepSnapshotter, TaskManagerSnapshotter};
pub use terminal::{Chrome, Palette, Screen, TerminalScreen};
