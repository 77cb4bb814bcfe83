//! EditSession - owns the buffer and cursor and runs every edit through the
//! assist pipeline.
//!
//! Each edit is processed in three steps:
//!
//! 1. The proposed text goes through the [`IndentEngine`] filter, which may
//!    substitute it.
//! 2. The resulting text is committed over the current selection.
//! 3. The [`BracketAutoCloser`] observes the committed change and may apply
//!    one follow-up mutation plus a cursor move.
//!
//! Follow-up mutations from step 3 are applied directly and never re-enter
//! the pipeline.

use std::ops::Range;

use crate::config::AssistConfig;
use crate::editable::{RopeBuffer, Selection, TextBufferMut};

use super::brackets::{AfterChange, BracketAutoCloser};
use super::event::{ChangeNotice, EditEvent};
use super::indent::IndentEngine;

/// Editable text with a cursor, wired to the indent filter and the bracket
/// observer.
#[derive(Debug, Clone)]
pub struct EditSession<B: TextBufferMut = RopeBuffer> {
    buffer: B,
    selection: Selection,
    indent: IndentEngine,
    closer: BracketAutoCloser,
}

impl EditSession<RopeBuffer> {
    /// Session over `text` with the cursor at the start
    pub fn from_text(text: &str, config: &AssistConfig) -> Self {
        Self::new(RopeBuffer::from_text(text), config)
    }
}

impl<B: TextBufferMut> EditSession<B> {
    pub fn new(buffer: B, config: &AssistConfig) -> Self {
        Self {
            buffer,
            selection: Selection::collapsed(0),
            indent: IndentEngine::from_config(config),
            closer: BracketAutoCloser::from_config(config),
        }
    }

    /// Builder-style cursor placement
    pub fn with_cursor(mut self, offset: usize) -> Self {
        self.set_selection(offset);
        self
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Cursor offset (selection head)
    pub fn cursor(&self) -> usize {
        self.selection.head
    }

    pub fn indent_engine(&self) -> &IndentEngine {
        &self.indent
    }

    pub fn bracket_closer(&self) -> &BracketAutoCloser {
        &self.closer
    }

    /// Collapse the selection to `offset`, clamped to the buffer
    pub fn set_selection(&mut self, offset: usize) {
        self.selection = Selection::collapsed(offset.min(self.buffer.len_chars()));
    }

    /// Select `anchor..head`, clamped to the buffer
    pub fn select(&mut self, anchor: usize, head: usize) {
        self.selection = Selection::new(anchor, head);
        self.selection.clamp(self.buffer.len_chars());
    }

    /// Type a single character at the cursor (replacing any selection)
    pub fn type_char(&mut self, ch: char) -> AfterChange {
        let mut utf8 = [0u8; 4];
        self.replace_selection(ch.encode_utf8(&mut utf8))
    }

    /// Type each character of `text` as its own keystroke
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.type_char(ch);
        }
    }

    /// Replace the current selection with `text`
    pub fn replace_selection(&mut self, text: &str) -> AfterChange {
        let range = self.selection.range();
        self.commit(range, text)
    }

    /// Apply a change that did not come from the cursor (paste, programmatic
    /// edit). The cursor ends up after the committed text.
    pub fn commit_external(&mut self, range: Range<usize>, text: &str) -> AfterChange {
        self.commit(range, text)
    }

    fn commit(&mut self, range: Range<usize>, text: &str) -> AfterChange {
        let len = self.buffer.len_chars();
        let range = range.start.min(len)..range.end.min(len);

        let replacement = EditEvent::replacing(text, &self.buffer, range.clone())
            .and_then(|event| self.indent.filter(&event))
            .unwrap_or_else(|| text.to_string());

        self.buffer.replace(range.clone(), &replacement);
        let count = replacement.chars().count();
        self.selection = Selection::collapsed(range.start + count);

        let notice = ChangeNotice {
            start: range.start,
            before: range.end - range.start,
            count,
        };
        let outcome = self.closer.after_change(&mut self.buffer, &notice);
        if let Some(cursor) = outcome.cursor() {
            self.set_selection(cursor);
        }

        tracing::trace!("committed {:?} at {:?}: {:?}", replacement, range, outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(text: &str, cursor: usize) -> EditSession {
        EditSession::from_text(text, &AssistConfig::default()).with_cursor(cursor)
    }

    #[test]
    fn test_type_plain_char() {
        let mut s = session("ac", 1);
        assert_eq!(s.type_char('b'), AfterChange::Unchanged);
        assert_eq!(s.text(), "abc");
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn test_type_bracket_parks_cursor_inside() {
        let mut s = session("foo", 3);
        let outcome = s.type_char('(');
        assert_eq!(outcome, AfterChange::ClosedBracket { cursor: 4 });
        assert_eq!(s.text(), "foo()");
        assert_eq!(s.cursor(), 4);
    }

    #[test]
    fn test_enter_between_braces() {
        let mut s = session("foo() {}", 7);
        let outcome = s.type_char('\n');
        assert_eq!(outcome, AfterChange::StrippedSentinel { cursor: 12 });
        assert_eq!(s.text(), "foo() {\n    \n}");
        assert_eq!(s.cursor(), 12);
    }

    #[test]
    fn test_enter_replaces_selection() {
        let mut s = session("    foo(bar)", 0);
        s.select(8, 11);
        s.type_char('\n');
        assert_eq!(s.text(), "    foo(\n        )");
        assert_eq!(s.cursor(), 17);
    }

    #[test]
    fn test_commit_external_strips_sentinel() {
        let mut s = session("ab", 0);
        let pasted = format!("x{}y", crate::config::DEFAULT_SENTINEL);
        let outcome = s.commit_external(1..1, &pasted);
        assert_eq!(outcome, AfterChange::StrippedSentinel { cursor: 2 });
        assert_eq!(s.text(), "axyb");
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn test_out_of_range_cursor_is_clamped() {
        let mut s = session("ab", 50);
        assert_eq!(s.cursor(), 2);
        s.type_char('c');
        assert_eq!(s.text(), "abc");
    }
}
