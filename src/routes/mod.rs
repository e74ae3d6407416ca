//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the build, search, health and game endpoints.
//! The un-prefixed aliases (`/build`, `/search`, `/health`) keep older
//! clients working against the same handlers.

pub mod chat;
pub mod error;
pub mod health;
pub mod search;

use axum::Router;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let routes = Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/build", post(chat::chat))
        .route("/api/search", post(search::search))
        .route("/search", post(search::search))
        .route("/api/health", get(health::health))
        .route("/health", get(health::health))
        .route("/api/games", get(health::list_games));
    with_layers(routes).with_state(state)
}

/// Panic recovery, compression, CORS and request tracing, outermost last.
fn with_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
