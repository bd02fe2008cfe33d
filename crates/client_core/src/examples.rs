//! Example question/answer cards fetched from the static examples asset.

use shared::protocol::{Example, ExamplesDocument};
use tracing::{info, warn};

use crate::{error::ExamplesError, text::UiText, transport::ReadingService};

pub const EXCERPT_MAX_CHARS: usize = 160;

/// Trimmed `text`, cut to `max_chars` characters plus `…` when longer.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        None => trimmed.to_string(),
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleCard {
    pub user_message: String,
    /// Collapsed header of the answer.
    pub summary: String,
    /// Full answer, shown when expanded.
    pub body: String,
}

impl ExampleCard {
    pub fn from_example(example: &Example, text: &UiText) -> Self {
        let answer = example.ai_response.as_deref().unwrap_or_default();
        let user_message = match example.user_message.as_deref() {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => text.question_placeholder.clone(),
        };
        Self {
            user_message,
            summary: excerpt(answer, EXCERPT_MAX_CHARS),
            body: answer.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamplesContent {
    Loading,
    Cards(Vec<ExampleCard>),
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplesPanel {
    badge: String,
    content: ExamplesContent,
}

impl ExamplesPanel {
    pub fn new(text: &UiText) -> Self {
        Self {
            badge: text.badge_placeholder.clone(),
            content: ExamplesContent::Loading,
        }
    }

    pub fn badge(&self) -> &str {
        &self.badge
    }

    pub fn content(&self) -> &ExamplesContent {
        &self.content
    }

    pub fn apply(&mut self, fetched: Result<ExamplesDocument, ExamplesError>, text: &UiText) {
        match fetched {
            Ok(document) => self.render(&document, text),
            Err(err) => {
                warn!(error = %err, "loading examples failed");
                self.fail(text);
            }
        }
    }

    /// Shows the load-failure message in place of the cards.
    pub fn fail(&mut self, text: &UiText) {
        self.content = ExamplesContent::Message(text.examples_failed.clone());
    }

    pub fn render(&mut self, document: &ExamplesDocument, text: &UiText) {
        if document.examples.is_empty() {
            self.content = ExamplesContent::Message(text.examples_empty.clone());
            return;
        }

        for example in &document.examples {
            let model = example.model.as_deref().unwrap_or_default();
            if self.badge == text.badge_placeholder && !model.is_empty() {
                self.badge = text.badge(model);
            }
        }
        let cards = document
            .examples
            .iter()
            .map(|example| ExampleCard::from_example(example, text))
            .collect::<Vec<_>>();
        info!(count = cards.len(), "examples loaded");
        self.content = ExamplesContent::Cards(cards);
    }
}

pub async fn fetch_examples<S>(service: &S) -> Result<ExamplesDocument, ExamplesError>
where
    S: ReadingService + ?Sized,
{
    let reply = service.examples().await?;
    if !reply.is_success() {
        return Err(ExamplesError::Status(reply.status));
    }
    Ok(ExamplesDocument::from_json(&reply.body)?)
}

#[cfg(test)]
#[path = "tests/examples_tests.rs"]
mod tests;
