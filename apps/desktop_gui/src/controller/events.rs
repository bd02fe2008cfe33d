//! Backend → UI events.

use client_core::{ExamplesError, SubmitOutcome};
use shared::protocol::ExamplesDocument;

pub enum UiEvent {
    GenerateFinished(SubmitOutcome),
    ExamplesLoaded(Result<ExamplesDocument, ExamplesError>),
    BackendFailed(String),
}
