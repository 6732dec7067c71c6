//! Clipboard access for copying the drafted reply.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to set clipboard text: {0}")]
    Write(String),
}

/// Destination for copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard, opened lazily on first write.
///
/// Opening can fail on headless machines; the failure is reported per write
/// so the form keeps working without a clipboard.
#[derive(Default)]
pub struct ClipboardHandler {
    clipboard: Option<Clipboard>,
}

impl ClipboardHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        let Some(clipboard) = self.clipboard.as_mut() else {
            return Err(ClipboardError::Unavailable("not initialized".to_string()));
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
