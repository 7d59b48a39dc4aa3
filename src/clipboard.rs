//! Clipboard collaborator interface for copying quote breakdowns.

use crate::error::{ClipboardError, ClipboardResult};

/// Capability interface over the system clipboard; swappable for a test
/// double in headless environments.
pub trait Clipboard: Send {
    /// Write text to the clipboard.
    fn set_text(&mut self, text: &str) -> ClipboardResult<()>;

    /// Read text from the clipboard.
    fn get_text(&mut self) -> ClipboardResult<String>;
}

/// System clipboard adapter backed by `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Open the system clipboard. Fails in headless sessions or when the
    /// platform clipboard is inaccessible.
    pub fn new() -> ClipboardResult<Self> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }

    fn get_text(&mut self) -> ClipboardResult<String> {
        self.inner
            .get_text()
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }
}
