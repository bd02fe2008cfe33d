use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure body the reading endpoint sends with a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// The carried message, if it is present and not blank.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown page kind '{0}' (expected 'horoscope' or 'synastry')")]
pub struct UnknownPageKind(pub String);
