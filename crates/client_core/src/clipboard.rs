use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::{error::ClipboardError, page::ActionButton, text::UiText};

/// How long the copied/failed label stays before the idle label returns.
pub const COPY_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

pub trait ClipboardBackend {
    /// Whether this backend can be used right now.
    fn is_available(&self) -> bool {
        true
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy button behaviour: write the attached reading, flash a result label,
/// revert after [`COPY_FEEDBACK_DELAY`].
pub struct CopyAction {
    idle_label: String,
    done_label: String,
    failed_label: String,
    revert_at: Option<Instant>,
}

impl CopyAction {
    pub fn new(text: &UiText) -> Self {
        Self {
            idle_label: text.copy_idle.clone(),
            done_label: text.copy_done.clone(),
            failed_label: text.copy_failed.clone(),
            revert_at: None,
        }
    }

    /// Copies the button's content through `preferred` when it is available,
    /// otherwise through `fallback`. A failing write is not retried on the
    /// other backend.
    pub fn click(
        &mut self,
        button: &mut ActionButton,
        preferred: Option<&mut dyn ClipboardBackend>,
        fallback: &mut dyn ClipboardBackend,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        let text = button.content().to_string();
        let result = match preferred {
            Some(backend) if backend.is_available() => backend.write_text(&text),
            _ => {
                debug!("platform clipboard unavailable; using fallback copy");
                fallback.write_text(&text)
            }
        };

        match &result {
            Ok(()) => button.set_label(self.done_label.clone()),
            Err(err) => {
                warn!(error = %err, "copy to clipboard failed");
                button.set_label(self.failed_label.clone());
            }
        }
        self.revert_at = Some(now + COPY_FEEDBACK_DELAY);
        result
    }

    /// Restores the idle label once the delay has passed. Returns true when
    /// the label changed.
    pub fn tick(&mut self, button: &mut ActionButton, now: Instant) -> bool {
        match self.revert_at {
            Some(at) if now >= at => {
                self.revert_at = None;
                button.set_label(self.idle_label.clone());
                true
            }
            _ => false,
        }
    }

    pub fn pending_revert(&self) -> Option<Instant> {
        self.revert_at
    }
}

#[cfg(test)]
#[path = "tests/clipboard_tests.rs"]
mod tests;
