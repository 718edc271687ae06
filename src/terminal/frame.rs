//! Frame buffer: one screen's worth of bytes, written in a single call.

use crossterm::{cursor, queue, terminal};
use std::io::{self, Write};

const CRLF: &[u8] = b"\r\n";

/// Bytes for one frame or one appended block.
///
/// A frame is assembled here and handed to the writer at once, so the
/// terminal never shows half of it.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    bytes: Vec<u8>,
}

impl FrameBuffer {
    /// Create an empty buffer sized for a typical screen.
    pub fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(4096),
        }
    }

    /// Start a full frame: discard pending bytes, clear the screen, home the
    /// cursor.
    pub fn begin_frame(&mut self) {
        self.bytes.clear();
        // Queueing into a Vec cannot fail
        let _ = queue!(
            self.bytes,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        );
    }

    /// Start a block appended below the current screen.
    pub fn begin_append(&mut self) {
        self.bytes.clear();
    }

    /// Raw text, no line break.
    pub fn push(&mut self, text: &str) {
        self.bytes.extend_from_slice(text.as_bytes());
    }

    /// One line, terminated with CRLF.
    ///
    /// CRLF keeps lines aligned whether or not the terminal translates LF.
    pub fn push_line(&mut self, line: &str) {
        self.push(line);
        self.bytes.extend_from_slice(CRLF);
    }

    /// Every line of `text`. Empty text is one empty line.
    pub fn push_lines(&mut self, text: &str) {
        if text.is_empty() {
            self.push_line("");
            return;
        }
        for line in text.lines() {
            self.push_line(line);
        }
    }

    /// Pending bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Write the pending bytes with one `write_all` and flush.
    ///
    /// # Errors
    ///
    /// Returns the writer's error.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.bytes)?;
        out.flush()
    }
}
