//! Form submission controller: one normalized POST per submit, and the page
//! updates for each way the cycle can end.

use shared::{
    error::ErrorBody,
    protocol::{GenerateResponse, ResultPayload},
};
use tracing::{error, info, warn};

use crate::{
    error::{SubmitError, TransportError},
    form::{FormInputSet, FormProfile, FormSnapshot},
    page::PageElements,
    text::UiText,
    transport::{HttpReply, ReadingService},
};

/// Markdown reading on success.
pub type SubmitOutcome = Result<String, SubmitError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// Turns a finished `/generate` exchange into an outcome.
pub fn classify_generate_reply(reply: Result<HttpReply, TransportError>) -> SubmitOutcome {
    let reply = reply.map_err(|err| SubmitError::Transport(err.to_string()))?;

    if !reply.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&reply.body)
            .ok()
            .and_then(|body| body.message().map(str::to_string));
        return Err(SubmitError::Http {
            status: reply.status,
            message,
        });
    }

    let body: serde_json::Value =
        serde_json::from_str(&reply.body).map_err(|err| SubmitError::Decode(err.to_string()))?;
    if !body.is_object() {
        return Err(SubmitError::UnexpectedShape);
    }
    let response: GenerateResponse =
        serde_json::from_value(body).map_err(|err| SubmitError::Decode(err.to_string()))?;
    match response.into_payload() {
        Some(ResultPayload::Markdown(markdown)) => Ok(markdown),
        Some(ResultPayload::Error(message)) => Err(SubmitError::Application(message)),
        None => Err(SubmitError::UnexpectedShape),
    }
}

/// Runs the network half of a submit cycle.
pub async fn fetch_reading<S>(service: &S, input: &FormInputSet) -> SubmitOutcome
where
    S: ReadingService + ?Sized,
{
    classify_generate_reply(service.generate(input).await)
}

pub struct FormController {
    profile: FormProfile,
    text: UiText,
    elements: PageElements,
    phase: SubmitPhase,
}

impl FormController {
    pub fn new(profile: FormProfile, text: UiText, elements: PageElements) -> Self {
        Self {
            profile,
            text,
            elements,
            phase: SubmitPhase::Idle,
        }
    }

    /// Controller bound to every element of a reading page.
    pub fn bind_page(profile: FormProfile, text: UiText) -> Self {
        let elements = PageElements::full(&profile, &text);
        Self::new(profile, text, elements)
    }

    pub fn profile(&self) -> &FormProfile {
        &self.profile
    }

    pub fn text(&self) -> &UiText {
        &self.text
    }

    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut PageElements {
        &mut self.elements
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Enables or disables the hour/minute inputs tied to `unknown_flag`.
    pub fn set_time_unknown(&mut self, unknown_flag: &str, checked: bool) {
        if let Some(inputs) = self.elements.time_inputs_for_mut(unknown_flag) {
            inputs.set_disabled(checked);
        }
    }

    /// Enters `Submitting` and returns the fields to post.
    pub fn begin_submit(&mut self, snapshot: &FormSnapshot) -> FormInputSet {
        if let Some(error_box) = self.elements.error_box.as_mut() {
            error_box.clear();
        }

        let unknown_flags: Vec<(String, bool)> = self
            .profile
            .charts
            .iter()
            .map(|chart| (chart.time_unknown.clone(), snapshot.is_checked(&chart.time_unknown)))
            .collect();
        for (flag, checked) in &unknown_flags {
            self.set_time_unknown(flag, *checked);
        }

        let input = self.profile.build_input_set(snapshot);

        if let Some(result) = self.elements.result.as_mut() {
            result.show_placeholder(self.text.generating.clone());
        }
        self.toggle_loading(true);
        if self.phase == SubmitPhase::Submitting {
            warn!(page = %self.profile.page, "submit started while a request is in flight");
        }
        self.phase = SubmitPhase::Submitting;
        info!(page = %self.profile.page, fields = input.len(), "submitting reading request");
        input
    }

    /// Applies the outcome, then always returns to `Idle`.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            Ok(markdown) => self.show_reading(markdown),
            Err(err) => self.show_failure(err),
        }
        self.toggle_loading(false);
        self.phase = SubmitPhase::Idle;
    }

    /// A whole submit cycle against `service`.
    pub async fn submit<S>(&mut self, service: &S, snapshot: &FormSnapshot) -> SubmitOutcome
    where
        S: ReadingService + ?Sized,
    {
        let input = self.begin_submit(snapshot);
        let outcome = fetch_reading(service, &input).await;
        self.finish_submit(&outcome);
        outcome
    }

    fn show_reading(&mut self, markdown: &str) {
        info!(page = %self.profile.page, bytes = markdown.len(), "reading received");
        if let Some(result) = self.elements.result.as_mut() {
            result.show_preformatted(markdown);
        }
        for button in [
            self.elements.copy_button.as_mut(),
            self.elements.download_button.as_mut(),
        ]
        .into_iter()
        .flatten()
        {
            button.reveal_with(markdown);
        }
    }

    fn show_failure(&mut self, err: &SubmitError) {
        match err {
            SubmitError::Application(message) => {
                warn!(page = %self.profile.page, error = %message, "server rejected reading request");
            }
            other => error!(page = %self.profile.page, error = %other, "reading request failed"),
        }
        if let Some(result) = self.elements.result.as_mut() {
            result.clear();
        }
        if let Some(error_box) = self.elements.error_box.as_mut() {
            error_box.set_text(err.display_message(&self.text));
        }
        for button in [
            self.elements.copy_button.as_mut(),
            self.elements.download_button.as_mut(),
        ]
        .into_iter()
        .flatten()
        {
            button.hide();
        }
    }

    fn toggle_loading(&mut self, loading: bool) {
        let (Some(trigger), Some(indicator)) =
            (self.elements.trigger.as_mut(), self.elements.loading.as_mut())
        else {
            return;
        };
        trigger.set_busy(loading);
        indicator.set_visible(loading);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
