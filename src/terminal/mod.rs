//! Terminal module: Everything that touches the visible screen.
//!
//! - [`FrameBuffer`]: One frame's bytes, written in a single call
//! - [`TerminalScreen`]: Clear-and-redraw renderer with chrome
//! - [`Palette`] and [`boxed`]: Theme colours and boxed titles

mod chrome;
mod frame;
mod screen;

pub use chrome::{boxed, Chrome, Palette, BOX_WIDTH};
pub use frame::FrameBuffer;
pub use screen::{Screen, TerminalScreen};
