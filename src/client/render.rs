//! Plain-text rendering of chat messages and their cards.

use std::fmt::Write as _;

use time::macros::format_description;

use super::session::{Attachment, ChatMessage, Sender};
use crate::services::catalog::PropertyValue;
use crate::types::{BuildRecord, SearchResponse};

/// One message bubble, followed by its card if it has one.
#[must_use]
pub fn render_message(message: &ChatMessage) -> String {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Ai => "buildcraft",
    };
    let clock = message
        .timestamp
        .format(format_description!("[hour]:[minute]"))
        .unwrap_or_default();

    let mut out = format!("[{clock}] {who}: {}\n", message.content);
    match &message.attachment {
        Some(Attachment::Build(build)) => out.push_str(&render_build_card(build)),
        Some(Attachment::Search(search)) => out.push_str(&render_search_card(search)),
        None => {}
    }
    out
}

#[must_use]
pub fn render_build_card(build: &BuildRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  +-- {} --", build.name);
    let _ = writeln!(out, "  | Playstyle: {}", build.playstyle);
    let _ = writeln!(out, "  | Skills:    {}", build.skills.join(", "));
    let _ = writeln!(out, "  | Key item:  {}", build.key_item);
    let _ = writeln!(out, "  | {}", build.description);
    out.push_str("  +--\n");
    out
}

#[must_use]
pub fn render_search_card(search: &SearchResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  +-- Search Results ({} items) --", search.results.len());
    for result in &search.results {
        let _ = writeln!(
            out,
            "  | {} [{} / {}] {:.0}%",
            result.name,
            result.category,
            result.kind,
            result.score * 100.0
        );
        let props: Vec<String> = result
            .properties
            .iter()
            .map(|(k, v)| format!("{k}={}", property_text(v)))
            .collect();
        if !props.is_empty() {
            let _ = writeln!(out, "  |     {}", props.join(", "));
        }
    }
    if !search.suggestions.is_empty() {
        out.push_str("  | Try next:\n");
        for suggestion in &search.suggestions {
            let _ = writeln!(out, "  |   - {suggestion}");
        }
    }
    out.push_str("  +--\n");
    out
}

fn property_text(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Flag(b) => b.to_string(),
        PropertyValue::Number(n) => n.to_string(),
        PropertyValue::Text(s) => s.clone(),
    }
}
