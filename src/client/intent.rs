//! Decide whether a chat line is a catalog search or a build request.

const SEARCH_MARKERS: &[&str] = &["search", "find", "what", "show me"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Search,
    Build,
}

/// Plain substring check, case-insensitive. Anything not a search is a build.
#[must_use]
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();
    if SEARCH_MARKERS.iter().any(|m| lower.contains(m)) { Intent::Search } else { Intent::Build }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_markers_classify_as_search() {
        for text in ["Search for bows", "FIND me armor", "what spells heal?", "show me daggers"] {
            assert_eq!(classify(text), Intent::Search, "text: {text}");
        }
    }

    #[test]
    fn other_text_classifies_as_build() {
        for text in ["stealthy archer", "a holy paladin", "show daggers"] {
            assert_eq!(classify(text), Intent::Build, "text: {text}");
        }
    }

    #[test]
    fn markers_match_inside_words() {
        assert_eq!(classify("pathfinder ranger"), Intent::Search);
    }
}
