//! Chat session — the in-memory conversation and its single in-flight request.
//!
//! DESIGN
//! ======
//! The session is either `Idle` or `AwaitingResponse`. `send` flips it to
//! awaiting under the lock before the network call and a guard flips it back
//! when the call finishes, even if the future is dropped. A second `send`
//! during that window is rejected, not queued. Failures never propagate to
//! the caller: they become one canned AI message.

use std::sync::{Mutex, MutexGuard, PoisonError};

use time::OffsetDateTime;
use tracing::warn;
use uuid::Uuid;

use super::api::{BuildApi, ClientError};
use super::intent::{Intent, classify};
use crate::config::DEFAULT_GAME;
use crate::types::{BuildRecord, SearchResponse};

pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error processing your request. Please try again.";

// =============================================================================
// MESSAGES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

/// Structured payload rendered under an AI message.
#[derive(Debug, Clone, PartialEq)]
pub enum Attachment {
    Build(BuildRecord),
    Search(SearchResponse),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub timestamp: OffsetDateTime,
    pub attachment: Option<Attachment>,
}

impl ChatMessage {
    fn new(sender: Sender, content: String, attachment: Option<Attachment>) -> Self {
        Self { id: Uuid::new_v4(), content, sender, timestamp: OffsetDateTime::now_utc(), attachment }
    }

    #[must_use]
    pub fn build(&self) -> Option<&BuildRecord> {
        match &self.attachment {
            Some(Attachment::Build(b)) => Some(b),
            _ => None,
        }
    }
}

// =============================================================================
// SESSION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SendError {
    #[error("message is empty")]
    Empty,
    #[error("a request is already in flight")]
    Busy,
}

struct Inner {
    messages: Vec<ChatMessage>,
    state: SessionState,
}

pub struct ChatSession<A> {
    api: A,
    game: String,
    inner: Mutex<Inner>,
}

/// Returns the session to `Idle` on drop.
struct PendingGuard<'a> {
    inner: &'a Mutex<Inner>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        lock(self.inner).state = SessionState::Idle;
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<A: BuildApi> ChatSession<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self::with_game(api, DEFAULT_GAME)
    }

    #[must_use]
    pub fn with_game(api: A, game: &str) -> Self {
        Self {
            api,
            game: game.to_owned(),
            inner: Mutex::new(Inner { messages: Vec::new(), state: SessionState::Idle }),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        lock(&self.inner).state
    }

    /// Snapshot of the conversation, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        lock(&self.inner).messages.clone()
    }

    /// Drop every message. A reply still in flight is appended when it lands.
    pub fn clear(&self) {
        lock(&self.inner).messages.clear();
    }

    pub async fn health(&self) -> bool {
        self.api.health().await
    }

    /// Send one user line and wait for the reply. Returns the AI message that
    /// was appended, which is the fallback message if the request failed.
    ///
    /// # Errors
    ///
    /// [`SendError::Empty`] for blank text, [`SendError::Busy`] while another
    /// send is pending. Neither appends anything.
    pub async fn send(&self, text: &str) -> Result<ChatMessage, SendError> {
        if text.trim().is_empty() {
            return Err(SendError::Empty);
        }

        let guard = {
            let mut inner = lock(&self.inner);
            if inner.state == SessionState::AwaitingResponse {
                return Err(SendError::Busy);
            }
            inner.state = SessionState::AwaitingResponse;
            inner
                .messages
                .push(ChatMessage::new(Sender::User, text.to_owned(), None));
            PendingGuard { inner: &self.inner }
        };

        let reply = match self.request(text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "chat request failed");
                ChatMessage::new(Sender::Ai, FALLBACK_REPLY.to_owned(), None)
            }
        };

        lock(&self.inner).messages.push(reply.clone());
        drop(guard);
        Ok(reply)
    }

    async fn request(&self, text: &str) -> Result<ChatMessage, ClientError> {
        match classify(text) {
            Intent::Build => {
                let resp = self.api.request_build(text, &self.game).await?;
                Ok(ChatMessage::new(Sender::Ai, resp.message, Some(Attachment::Build(resp.build))))
            }
            Intent::Search => {
                let resp = self.api.search(text).await?;
                Ok(ChatMessage::new(Sender::Ai, resp.reasoning.clone(), Some(Attachment::Search(resp))))
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
