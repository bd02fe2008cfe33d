use serde::{Deserialize, Serialize};

pub const GENERATE_PATH: &str = "/generate";
pub const EXAMPLES_PATH: &str = "/static/data/examples.json";
pub const MARKDOWN_MIME: &str = "text/markdown;charset=utf-8";

/// Raw shape of a `/generate` response body. Use [`GenerateResponse::into_payload`]
/// to get the tagged form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultPayload {
    Markdown(String),
    Error(String),
}

impl GenerateResponse {
    pub fn markdown(markdown: impl Into<String>) -> Self {
        Self {
            markdown: Some(markdown.into()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            markdown: None,
            error: Some(message.into()),
        }
    }

    /// `markdown` wins when a body carries both; `None` when it carries neither.
    pub fn into_payload(self) -> Option<ResultPayload> {
        match (self.markdown, self.error) {
            (Some(markdown), _) => Some(ResultPayload::Markdown(markdown)),
            (None, Some(error)) => Some(ResultPayload::Error(error)),
            (None, None) => None,
        }
    }
}

/// One question/answer pair from the static examples asset. Every field is
/// optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub user_message: Option<String>,
    #[serde(default)]
    pub ai_response: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamplesDocument {
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl ExamplesDocument {
    /// Lenient decode: a missing or non-array `examples` yields an empty list
    /// and entries that are not objects decode as empty examples.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        let examples = match value.get("examples") {
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .map(|item| serde_json::from_value::<Example>(item.clone()).unwrap_or_default())
                .collect(),
            _ => Vec::new(),
        };
        Ok(Self { examples })
    }
}
