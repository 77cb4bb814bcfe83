//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use edit_assist::config::{AssistConfig, DEFAULT_SENTINEL};
use edit_assist::EditSession;

/// Create a session with given text and cursor offset, default config
pub fn session_at(text: &str, cursor: usize) -> EditSession {
    EditSession::from_text(text, &AssistConfig::default()).with_cursor(cursor)
}

/// Create a session with the cursor where `|` appears in `marked`
pub fn session_marked(marked: &str) -> EditSession {
    let cursor = marked
        .chars()
        .position(|c| c == '|')
        .expect("marked text needs a | cursor");
    session_at(&marked.replacen('|', "", 1), cursor)
}

/// Render the session text with `|` at the cursor
pub fn marked(session: &EditSession) -> String {
    let mut text: Vec<char> = session.text().chars().collect();
    text.insert(session.cursor(), '|');
    text.into_iter().collect()
}

/// The default sentinel as a string
pub fn sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}
