//! Step snapshotter: a finite, ordered sequence of frames.
//!
//! Used by the boot sequence (steps pile up like log lines) and by the
//! countdown timer (each step replaces the previous one).

use super::{Snapshot, Snapshotter};

/// How successive steps appear on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// Each frame shows every step so far, one per line.
    Accumulate,
    /// Each frame shows only the current step.
    Replace,
}

/// Yields one step per call and marks the final one complete.
#[derive(Debug, Clone)]
pub struct StepSnapshotter {
    steps: Vec<String>,
    shown: usize,
    mode: StepMode,
    completion: String,
}

impl StepSnapshotter {
    /// Create a step sequence.
    ///
    /// `completion` is appended below the final frame once every step has
    /// been shown.
    pub fn new<I, S>(steps: I, mode: StepMode, completion: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
            shown: 0,
            mode,
            completion: completion.into(),
        }
    }

    /// Boot-style sequence: steps accumulate.
    pub fn boot<I, S>(steps: I, completion: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(steps, StepMode::Accumulate, completion)
    }

    /// Countdown from `seconds` to zero, one frame per second.
    pub fn countdown(seconds: u32, completion: impl Into<String>) -> Self {
        let steps = (0..=seconds).rev().map(|left| format!("Remaining: {left} s"));
        Self::new(steps, StepMode::Replace, completion)
    }

    /// Total number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps already produced.
    pub const fn shown(&self) -> usize {
        self.shown
    }

    fn frame_text(&self) -> String {
        match self.mode {
            StepMode::Accumulate => self.steps[..self.shown].join("\n"),
            StepMode::Replace => self
                .shown
                .checked_sub(1)
                .and_then(|i| self.steps.get(i))
                .cloned()
                .unwrap_or_default(),
        }
    }
}

impl Snapshotter for StepSnapshotter {
    fn snapshot(&mut self) -> Snapshot {
        if self.shown < self.steps.len() {
            self.shown += 1;
        }
        let text = self.frame_text();
        if self.shown == self.steps.len() {
            Snapshot::last(text)
        } else {
            Snapshot::new(text)
        }
    }

    fn completion(&self) -> Option<Snapshot> {
        let frame = self.frame_text();
        let text = if frame.is_empty() {
            self.completion.clone()
        } else {
            format!("{frame}\n\n{}", self.completion)
        };
        Some(Snapshot::last(text))
    }
}
