//! Liveness and game listing routes.

use axum::response::Json;

use crate::services::games::{GAMES, Game};
use crate::types::{HealthResponse, rfc3339_now};

/// `GET /api/health` — liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok".to_owned(), timestamp: rfc3339_now() })
}

/// `GET /api/games` — supported games and their availability.
pub async fn list_games() -> Json<&'static [Game]> {
    Json(GAMES.as_slice())
}
