//! HTTP client for the BuildCraft API.
//!
//! Thin wrapper over `reqwest`. No request timeout is set: a call resolves
//! when the server answers or the connection fails.

use serde::de::DeserializeOwned;

use crate::types::{ChatRequest, ChatResponse, ErrorBody, HealthResponse, SearchRequest, SearchResponse};

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

// =============================================================================
// API TRAIT
// =============================================================================

/// Backend seam for the chat session. Enables an in-process fake in tests.
#[async_trait::async_trait]
pub trait BuildApi: Send + Sync {
    /// Ask for a build suggestion.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport, status or decode failure.
    async fn request_build(&self, prompt: &str, game: &str) -> Result<ChatResponse, ClientError>;

    /// Search the game catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport, status or decode failure.
    async fn search(&self, query: &str) -> Result<SearchResponse, ClientError>;

    /// Probe the health endpoint.
    async fn health(&self) -> bool;
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status { status: status.as_u16(), message: error_message(&text) });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait::async_trait]
impl BuildApi for HttpApi {
    async fn request_build(&self, prompt: &str, game: &str) -> Result<ChatResponse, ClientError> {
        let body = ChatRequest { prompt: prompt.to_owned(), game: game.to_owned() };
        self.post_json("/api/chat", &body).await
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, ClientError> {
        let body = SearchRequest { query: query.to_owned(), category: None, limit: None };
        self.post_json("/api/search", &body).await
    }

    async fn health(&self) -> bool {
        let Ok(response) = self.http.get(self.url("/api/health")).send().await else {
            return false;
        };
        if !response.status().is_success() {
            return false;
        }
        response
            .json::<HealthResponse>()
            .await
            .is_ok_and(|h| h.status == "ok")
    }
}

/// Pull `error` out of a JSON error body, falling back to the raw text.
fn error_message(text: &str) -> String {
    serde_json::from_str::<ErrorBody>(text).map_or_else(|_| text.to_owned(), |b| b.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let api = HttpApi::new("http://localhost:3001/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:3001");
        assert_eq!(api.url("/api/chat"), "http://localhost:3001/api/chat");
    }

    #[test]
    fn error_message_prefers_json_error_field() {
        assert_eq!(error_message(r#"{"error":"Invalid prompt provided"}"#), "Invalid prompt provided");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }
}
