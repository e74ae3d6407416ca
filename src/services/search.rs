//! Search service — keyword scoring over the game data catalog.
//!
//! DESIGN
//! ======
//! The query is split into lower-cased word tokens. Each token contributes to
//! an entry's score once, at its best weight: an exact tag hit is worth 2, a
//! substring hit in the name, type or description is worth 1. The raw score
//! is normalized by the best possible score so results land in `[0, 1]`.
//! Ordering is by score, then catalog order.

use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, CatalogEntry, Properties};

pub const DEFAULT_LIMIT: usize = 5;
pub const MAX_LIMIT: usize = 25;
const MIN_TOKEN_LEN: usize = 2;
const TAG_WEIGHT: u32 = 2;
const TEXT_WEIGHT: u32 = 1;
const MAX_SUGGESTIONS: usize = 5;

const GENERAL_SUGGESTIONS: [&str; 3] =
    ["Search for build synergies", "Find equipment recommendations", "Look for advanced techniques"];

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: Properties,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub reasoning: String,
    pub suggestions: Vec<String>,
}

/// Validated search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub category: Option<String>,
    pub limit: usize,
}

impl SearchQuery {
    /// Normalize raw request parameters: category is lower-cased (blank means
    /// none) and limit is clamped to `1..=MAX_LIMIT`.
    #[must_use]
    pub fn new(query: &str, category: Option<&str>, limit: Option<i64>) -> Self {
        let category = category
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty());
        let limit = limit.map_or(DEFAULT_LIMIT, |n| usize::try_from(n).unwrap_or(1).clamp(1, MAX_LIMIT));
        Self { query: query.to_owned(), category, limit }
    }
}

// =============================================================================
// SCORING
// =============================================================================

/// Lower-cased alphanumeric tokens of at least two characters, deduplicated
/// in first-seen order.
#[must_use]
pub fn tokenize(query: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for word in query
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= MIN_TOKEN_LEN)
    {
        if !tokens.iter().any(|t| t == word) {
            tokens.push(word.to_owned());
        }
    }
    tokens
}

fn token_weight(entry: &CatalogEntry, token: &str) -> u32 {
    if entry.tags.iter().any(|t| t == token) {
        return TAG_WEIGHT;
    }
    let in_text = entry.name.to_lowercase().contains(token)
        || entry.kind.contains(token)
        || entry.description.to_lowercase().contains(token);
    if in_text { TEXT_WEIGHT } else { 0 }
}

/// Normalized relevance of an entry for a token set, in `[0, 1]`.
#[must_use]
pub fn score_entry(entry: &CatalogEntry, tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let raw: u32 = tokens.iter().map(|t| token_weight(entry, t)).sum();
    let best = TAG_WEIGHT * u32::try_from(tokens.len()).unwrap_or(u32::MAX);
    f64::from(raw) / f64::from(best)
}

// =============================================================================
// SEARCH
// =============================================================================

/// Run a search against a catalog.
#[must_use]
pub fn search(catalog: &Catalog, query: &SearchQuery) -> SearchResponse {
    let tokens = tokenize(&query.query);

    let mut scored: Vec<(f64, &CatalogEntry)> = catalog
        .entries
        .iter()
        .filter(|e| query.category.as_deref().is_none_or(|c| e.category == c))
        .map(|e| (score_entry(e, &tokens), e))
        .filter(|(score, _)| *score > 0.0)
        .collect();

    // Stable sort keeps catalog order among equal scores.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(query.limit);

    let results: Vec<SearchResult> = scored
        .into_iter()
        .map(|(score, e)| SearchResult {
            name: e.name.clone(),
            category: e.category.clone(),
            kind: e.kind.clone(),
            properties: e.properties.clone(),
            score,
        })
        .collect();

    let reasoning = format!("Found {} relevant items for '{}'", results.len(), query.query);
    let suggestions = suggestions_for(&results);

    SearchResponse { results, reasoning, suggestions }
}

/// Follow-up hints driven by the categories present in the results.
#[must_use]
pub fn suggestions_for(results: &[SearchResult]) -> Vec<String> {
    let has = |category: &str| results.iter().any(|r| r.category == category);

    let mut suggestions = Vec::new();
    if has("weapons") {
        suggestions.push("Try searching for armor to complement these weapons".to_owned());
    }
    if has("skills") {
        suggestions.push("Search for perks that enhance these skills".to_owned());
    }
    if has("spells") {
        suggestions.push("Look for items that reduce spell costs".to_owned());
    }
    suggestions.extend(GENERAL_SUGGESTIONS.iter().map(|s| (*s).to_owned()));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
