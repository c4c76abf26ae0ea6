//! Copy-to-clipboard control with transient feedback.
//!
//! The control always writes the exact rendered block, never a re-escaped
//! display copy, which would corrupt embedded characters. After a copy
//! attempt the label shows confirmation or failure for [`FEEDBACK_WINDOW`],
//! then reverts to idle. Time is passed in by the caller so the revert is
//! deterministic under test; the UI collaborator feeds it `Instant::now()`
//! from its event loop.

use std::time::{Duration, Instant};

use crate::clipboard::{Clipboard, ClipboardError};

pub const IDLE_LABEL: &str = "Copy JSON-LD";
pub const COPIED_LABEL: &str = "Copied!";
pub const FAILED_LABEL: &str = "Failed to copy";

/// How long confirmation or failure feedback stays visible before the
/// control reverts to its idle label.
pub const FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Feedback {
    Idle,
    Copied { until: Instant },
    Failed { until: Instant },
}

/// State machine behind the copy button.
#[derive(Debug)]
pub struct CopyControl {
    feedback: Feedback,
}

impl Default for CopyControl {
    fn default() -> Self {
        CopyControl {
            feedback: Feedback::Idle,
        }
    }
}

impl CopyControl {
    #[must_use]
    pub fn new() -> Self {
        CopyControl::default()
    }

    /// Write `block` to the clipboard and record feedback state.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ClipboardError`] when the write fails. The
    /// failure is already reflected in the control's label, so callers only
    /// need the error for additional handling of their own.
    pub fn copy(
        &mut self,
        clipboard: &mut dyn Clipboard,
        block: &str,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        match clipboard.write_text(block) {
            Ok(()) => {
                self.feedback = Feedback::Copied {
                    until: now + FEEDBACK_WINDOW,
                };
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
                self.feedback = Feedback::Failed {
                    until: now + FEEDBACK_WINDOW,
                };
                Err(err)
            }
        }
    }

    /// Current button label. Feedback expires lazily: once `now` passes the
    /// feedback window the control reverts to idle.
    pub fn label(&mut self, now: Instant) -> &'static str {
        if let Feedback::Copied { until } | Feedback::Failed { until } = self.feedback {
            if now >= until {
                self.feedback = Feedback::Idle;
            }
        }
        match self.feedback {
            Feedback::Idle => IDLE_LABEL,
            Feedback::Copied { .. } => COPIED_LABEL,
            Feedback::Failed { .. } => FAILED_LABEL,
        }
    }
}
