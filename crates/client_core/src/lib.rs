//! Client side of the reading service: normalizes the birth-data form, runs a
//! single `/generate` cycle per submit and drives the page elements, the copy
//! and download actions and the examples panel.

pub mod clipboard;
pub mod config;
pub mod controller;
pub mod download;
pub mod error;
pub mod examples;
pub mod form;
pub mod page;
pub mod text;
pub mod transport;

pub use clipboard::{ClipboardBackend, CopyAction, COPY_FEEDBACK_DELAY};
pub use config::{load_settings, ClientSettings};
pub use controller::{
    classify_generate_reply, fetch_reading, FormController, SubmitOutcome, SubmitPhase,
};
pub use download::{DirectorySink, DownloadAction, DownloadSink, MarkdownFile};
pub use error::{ClipboardError, DownloadError, ExamplesError, SubmitError, TransportError};
pub use examples::{fetch_examples, ExampleCard, ExamplesContent, ExamplesPanel};
pub use form::{FormInputSet, FormProfile, FormSnapshot};
pub use page::{ActionButton, PageElements, ResultContent};
pub use text::UiText;
pub use transport::{HttpReadingClient, HttpReply, ReadingService};
