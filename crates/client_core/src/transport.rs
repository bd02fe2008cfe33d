use async_trait::async_trait;
use reqwest::{header::CACHE_CONTROL, Client};
use tracing::debug;
use url::Url;

use crate::{config::ClientSettings, error::TransportError, form::FormInputSet};

/// Status and raw body of a completed HTTP exchange. Interpreting them is
/// left to the caller so every failure kind stays visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ReadingService: Send + Sync {
    /// One `POST /generate` carrying `input` form-encoded.
    async fn generate(&self, input: &FormInputSet) -> Result<HttpReply, TransportError>;
    /// `GET` of the static examples asset, bypassing caches.
    async fn examples(&self) -> Result<HttpReply, TransportError>;
}

pub struct HttpReadingClient {
    http: Client,
    generate_url: Url,
    examples_url: Url,
}

impl HttpReadingClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, TransportError> {
        Self::with_client(Client::new(), settings)
    }

    pub fn with_client(http: Client, settings: &ClientSettings) -> Result<Self, TransportError> {
        let base = parse_url(&settings.server_url)?;
        Ok(Self {
            http,
            generate_url: join_url(&base, &settings.generate_path)?,
            examples_url: join_url(&base, &settings.examples_path)?,
        })
    }

    pub fn generate_url(&self) -> &Url {
        &self.generate_url
    }

    pub fn examples_url(&self) -> &Url {
        &self.examples_url
    }
}

#[async_trait]
impl ReadingService for HttpReadingClient {
    async fn generate(&self, input: &FormInputSet) -> Result<HttpReply, TransportError> {
        debug!(url = %self.generate_url, fields = input.len(), "posting reading request");
        let response = self
            .http
            .post(self.generate_url.clone())
            .form(input.pairs())
            .send()
            .await
            .map_err(|source| request_error(&self.generate_url, source))?;
        read_reply(&self.generate_url, response).await
    }

    async fn examples(&self) -> Result<HttpReply, TransportError> {
        debug!(url = %self.examples_url, "fetching examples");
        let response = self
            .http
            .get(self.examples_url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|source| request_error(&self.examples_url, source))?;
        read_reply(&self.examples_url, response).await
    }
}

async fn read_reply(url: &Url, response: reqwest::Response) -> Result<HttpReply, TransportError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|source| request_error(url, source))?;
    debug!(url = %url, status, bytes = body.len(), "received reply");
    Ok(HttpReply { status, body })
}

fn request_error(url: &Url, source: reqwest::Error) -> TransportError {
    TransportError::Request {
        url: url.to_string(),
        source,
    }
}

fn parse_url(raw: &str) -> Result<Url, TransportError> {
    Url::parse(raw).map_err(|source| TransportError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

fn join_url(base: &Url, path: &str) -> Result<Url, TransportError> {
    base.join(path).map_err(|source| TransportError::InvalidUrl {
        url: format!("{base}{path}"),
        source,
    })
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
