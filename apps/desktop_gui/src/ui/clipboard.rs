use client_core::{ClipboardBackend, ClipboardError};
use eframe::egui;

/// OS clipboard through arboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// `None` when no clipboard can be opened (e.g. headless session).
    pub fn open() -> Option<Self> {
        match arboard::Clipboard::new() {
            Ok(inner) => Some(Self { inner }),
            Err(err) => {
                tracing::warn!("system clipboard unavailable: {err}");
                None
            }
        }
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}

/// Hands the text to the egui integration, which places it on the window
/// system's clipboard at the end of the frame.
pub struct ContextClipboard<'a> {
    ctx: &'a egui::Context,
}

impl<'a> ContextClipboard<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl ClipboardBackend for ContextClipboard<'_> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx.copy_text(text.to_string());
        Ok(())
    }
}
