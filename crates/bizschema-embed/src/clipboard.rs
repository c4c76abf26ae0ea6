//! Clipboard seam between the copy control and the UI collaborator.
//!
//! The core never talks to a platform clipboard directly; the UI layer
//! implements [`Clipboard`] with whatever its runtime provides and hands it
//! to [`crate::copy::CopyControl`]. Failures are recoverable; the rendered
//! block stays on screen for manual copying.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {reason}")]
    Write { reason: String },
}

/// Write access to the system clipboard.
pub trait Clipboard {
    /// Write `text` to the clipboard, replacing its current contents.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Write`] when the platform write fails.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
