use std::{io, path::PathBuf};

use thiserror::Error;

use crate::text::UiText;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid server url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Why a submit cycle did not produce a reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Non-2xx status. `message` is the body's `error` field when the body
    /// decoded and carried one.
    #[error("server responded with status {status}")]
    Http { status: u16, message: Option<String> },
    /// 2xx status whose body carries an `error` field.
    #[error("server reported an error: {0}")]
    Application(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("response carried neither markdown nor error")]
    UnexpectedShape,
}

impl SubmitError {
    /// Text shown in the error box for this failure.
    pub fn display_message(&self, text: &UiText) -> String {
        match self {
            SubmitError::Application(message) => format!("{}{message}", text.error_prefix),
            SubmitError::Http {
                message: Some(message),
                ..
            } => format!("{}{message}", text.failure_prefix),
            SubmitError::Http { message: None, .. } => {
                format!("{}{}", text.failure_prefix, text.server_fallback)
            }
            SubmitError::Transport(detail) | SubmitError::Decode(detail) => {
                format!("{}{detail}", text.failure_prefix)
            }
            SubmitError::UnexpectedShape => {
                format!("{}{}", text.failure_prefix, text.unexpected_response)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ExamplesError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("examples asset responded with status {0}")]
    Status(u16),
    #[error("could not decode examples asset: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
