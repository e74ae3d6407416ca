//! Build suggestion route — `POST /api/chat` (also served at `/build`).

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use serde::Deserialize;
use tracing::{debug, info};

use super::error::ApiError;
use crate::services::{builds, games};
use crate::state::AppState;
use crate::types::ChatResponse;

/// Incoming body. Fields stay loosely typed so a wrong-typed prompt is a
/// 400 from validation rather than a deserializer rejection.
#[derive(Debug, Default, Deserialize)]
pub struct BuildBody {
    #[serde(default)]
    pub prompt: Option<serde_json::Value>,
    #[serde(default)]
    pub game: Option<serde_json::Value>,
}

/// Accept only a non-empty JSON string.
pub(crate) fn validate_prompt(raw: Option<&serde_json::Value>) -> Result<&str, ApiError> {
    match raw.and_then(serde_json::Value::as_str) {
        Some(prompt) if !prompt.is_empty() => Ok(prompt),
        _ => Err(ApiError::InvalidPrompt),
    }
}

/// The requested game id, or the configured default. Non-string ids are ignored.
pub(crate) fn resolve_game<'a>(raw: Option<&'a serde_json::Value>, default: &'a str) -> &'a str {
    raw.and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .unwrap_or(default)
}

/// `POST /api/chat` — pick a build for the prompt.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<BuildBody>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| {
        debug!(error = %e, "rejected chat body");
        ApiError::InvalidPrompt
    })?;
    let prompt = validate_prompt(body.prompt.as_ref())?;
    let game = resolve_game(body.game.as_ref(), state.default_game());

    if games::find(game).is_none_or(|g| g.status != games::GameStatus::Active) {
        debug!(%game, "no dedicated build table for game; using default table");
    }

    let build = builds::select_build(prompt);
    info!(%game, build = build.name, prompt_len = prompt.len(), "build selected");

    let delay = state.response_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    Ok(Json(ChatResponse { success: true, build: build.to_record(), message: builds::describe_build(build) }))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
