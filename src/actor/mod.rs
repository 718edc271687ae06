//! Actor Model: The two execution lines of a live view.
//!
//! Every live view runs on the caller's thread (the refresh loop) and on one
//! watcher thread. They share nothing but a [`CancellationSignal`]:
//! - **Input Watcher**: performs one blocking line read, then fires the signal
//! - **Ticker**: produces period boundaries for the refresh loop
//! - **Refresh Loop** (in `session`): waits on ticks and the signal together
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐      fire()       ┌──────────────────┐
//! │ Watcher Thread│ ────────────────▶ │CancellationSignal│
//! └───────────────┘                   └──────────────────┘
//!                                              │ select!
//! ┌───────────────┐       Tick        ┌──────────────────┐
//! │ Ticker Thread │ ────────────────▶ │   Refresh Loop   │
//! └───────────────┘                   └──────────────────┘
//! ```

mod signal;
mod ticker;
mod watcher;

pub use signal::{CancellationSignal, Canceller, Never};
pub use ticker::{Tick, TickSource, TickerActor, Wake};
pub use watcher::{Input, InputWatcher, LineSource, SharedReader, StdinSource, WatchOutcome};
