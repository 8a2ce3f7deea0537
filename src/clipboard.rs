//! Clipboard access for copying the generated summary.

use arboard::Clipboard;
use thiserror::Error;

/// A clipboard write failed (missing display server, platform restriction).
#[derive(Debug, Clone, Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Capability for writing text to the system clipboard.
///
/// Injected into the UI so it can be exercised without a real platform
/// clipboard. Only ever used from the UI thread.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// `ClipboardWriter` backed by the OS clipboard.
///
/// The underlying handle is created on first use so the app still starts on
/// headless platforms; failures surface per write as a transient notice.
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { clipboard: None }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?);
        }
        let Some(clipboard) = self.clipboard.as_mut() else {
            return Err(ClipboardError("clipboard unavailable".to_string()));
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError(e.to_string()))
    }
}
