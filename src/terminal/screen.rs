//! Screen renderer: clear and redraw from a snapshot.

use super::chrome::{boxed, Chrome, Palette};
use super::frame::FrameBuffer;
use crate::snapshot::Snapshot;
use std::io::Write;
use tracing::debug;

/// Something a refresh loop can draw frames on.
///
/// Rendering is best effort: a failed write is not reported back and is not
/// retried.
pub trait Screen {
    /// Clear the visible region and draw `snapshot` with the current chrome.
    fn render(&mut self, snapshot: &Snapshot);
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn render(&mut self, snapshot: &Snapshot) {
        (**self).render(snapshot);
    }
}

/// A [`Screen`] on a real terminal (or any writer).
///
/// Each frame is built in a [`FrameBuffer`] and written with one call.
pub struct TerminalScreen<W: Write> {
    /// Destination, usually stdout.
    out: W,
    /// Reused frame bytes.
    frame: FrameBuffer,
    /// Title and footer for the current screen.
    chrome: Chrome,
    /// Theme colours for the chrome.
    palette: Palette,
}

impl<W: Write> TerminalScreen<W> {
    /// Create a screen writing to `out`.
    pub fn new(out: W, palette: Palette) -> Self {
        Self {
            out,
            frame: FrameBuffer::new(),
            chrome: Chrome::default(),
            palette,
        }
    }

    /// Replace the chrome for subsequent frames.
    pub fn set_chrome(&mut self, chrome: Chrome) {
        self.chrome = chrome;
    }

    /// Replace the palette (after a settings change).
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Get a reference to the underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the screen, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Clear and draw `text` inside the current chrome.
    pub fn show(&mut self, text: &str) {
        self.frame.begin_frame();

        if let Some(title) = &self.chrome.title {
            for line in boxed(title) {
                self.frame.push_line(&self.palette.paint(&line));
            }
            self.frame.push_line("");
        }

        self.frame.push_lines(text);

        if let Some(footer) = &self.chrome.footer {
            self.frame.push_line("");
            self.frame.push_lines(footer);
        }

        self.flush();
    }

    /// Append lines below whatever is on screen.
    pub fn print(&mut self, text: &str) {
        self.frame.begin_append();
        self.frame.push_lines(text);
        self.flush();
    }

    /// Write a prompt without a line break and flush it.
    pub fn prompt(&mut self, text: &str) {
        self.frame.begin_append();
        self.frame.push(text);
        self.flush();
    }

    fn flush(&mut self) {
        if let Err(e) = self.frame.write_to(&mut self.out) {
            debug!(error = %e, "screen write failed");
        }
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn render(&mut self, snapshot: &Snapshot) {
        self.show(snapshot.text());
    }
}
