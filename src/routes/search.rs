//! Catalog search route — `POST /api/search` (also served at `/search`).

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use serde::Deserialize;
use tracing::{debug, info};

use super::error::ApiError;
use crate::services::catalog;
use crate::services::search::{self, SearchQuery};
use crate::state::AppState;
use crate::types::SearchResponse;

#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub query: Option<serde_json::Value>,
    #[serde(default)]
    pub category: Option<serde_json::Value>,
    #[serde(default)]
    pub limit: Option<serde_json::Value>,
}

/// Any JSON number, or a string holding an integer. Fractions truncate;
/// anything else means "use the default".
#[allow(clippy::cast_possible_truncation)]
fn limit_from_value(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Validate a raw body into search parameters.
pub(crate) fn parse_search_body(body: &SearchBody) -> Result<SearchQuery, ApiError> {
    let query = match body.query.as_ref().and_then(serde_json::Value::as_str) {
        Some(q) if !q.trim().is_empty() => q,
        _ => return Err(ApiError::InvalidQuery),
    };
    let category = body.category.as_ref().and_then(serde_json::Value::as_str);
    let limit = body.limit.as_ref().and_then(limit_from_value);
    Ok(SearchQuery::new(query, category, limit))
}

/// `POST /api/search` — keyword search over the game catalog.
pub async fn search(
    State(_state): State<AppState>,
    payload: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| {
        debug!(error = %e, "rejected search body");
        ApiError::InvalidQuery
    })?;
    let query = parse_search_body(&body)?;
    let catalog = catalog::oblivion()?;

    let resp = search::search(catalog, &query);
    info!(
        category = query.category.as_deref().unwrap_or("*"),
        limit = query.limit,
        results = resp.results.len(),
        "catalog searched"
    );
    Ok(Json(resp))
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
