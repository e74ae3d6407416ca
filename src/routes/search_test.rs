use serde_json::json;

use super::*;
use crate::state::test_helpers;

fn body(value: serde_json::Value) -> SearchBody {
    serde_json::from_value(value).unwrap()
}

#[test]
fn parse_search_body_applies_defaults() {
    let q = parse_search_body(&body(json!({ "query": "fire" }))).unwrap();
    assert_eq!(q.query, "fire");
    assert!(q.category.is_none());
    assert_eq!(q.limit, crate::services::search::DEFAULT_LIMIT);
}

#[test]
fn parse_search_body_rejects_blank_or_missing_query() {
    for raw in [json!({}), json!({ "query": "   " }), json!({ "query": 3 })] {
        assert!(matches!(parse_search_body(&body(raw)), Err(ApiError::InvalidQuery)));
    }
}

#[tokio::test]
async fn search_returns_ranked_results() {
    let state = test_helpers::test_app_state();
    let payload = Ok(Json(body(json!({ "query": "bow", "category": "weapons", "limit": 3 }))));
    let Json(resp) = search(State(state), payload).await.unwrap();
    assert!(!resp.results.is_empty());
    assert!(resp.results.len() <= 3);
    assert!(resp.results.iter().all(|r| r.category == "weapons"));
    assert!(resp.results.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(resp.reasoning.contains("'bow'"));
    assert_eq!(resp.suggestions[0], "Try searching for armor to complement these weapons");
}

#[tokio::test]
async fn search_rejects_missing_query() {
    let state = test_helpers::test_app_state();
    let err = search(State(state), Ok(Json(body(json!({ "limit": 2 }))))).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidQuery));
}

#[test]
fn parse_search_body_accepts_any_numeric_limit() {
    let q = parse_search_body(&body(json!({ "query": "bow", "limit": 2.0 }))).unwrap();
    assert_eq!(q.limit, 2);
    let q = parse_search_body(&body(json!({ "query": "bow", "limit": 3.9 }))).unwrap();
    assert_eq!(q.limit, 3);
    let q = parse_search_body(&body(json!({ "query": "bow", "limit": "3" }))).unwrap();
    assert_eq!(q.limit, 3);
}

#[test]
fn parse_search_body_defaults_unusable_limit_and_category() {
    let q = parse_search_body(&body(json!({ "query": "bow", "limit": [1], "category": 5 }))).unwrap();
    assert_eq!(q.limit, crate::services::search::DEFAULT_LIMIT);
    assert!(q.category.is_none());
}

#[tokio::test]
async fn search_accepts_float_limit() {
    let state = test_helpers::test_app_state();
    let payload = Ok(Json(body(json!({ "query": "bow", "limit": 2.0 }))));
    let Json(resp) = search(State(state), payload).await.unwrap();
    assert!(!resp.results.is_empty());
    assert!(resp.results.len() <= 2);
}
