//! Bracket auto-closing and sentinel cleanup, run after every committed change.

use crate::config::AssistConfig;
use crate::editable::TextBufferMut;

use super::event::ChangeNotice;

/// Opening brackets and their closers
pub const BRACKET_PAIRS: [(char, char); 3] = [('(', ')'), ('{', '}'), ('[', ']')];

/// Closing counterpart of an opening bracket
pub fn closing_for(open: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|(_, close)| *close)
}

/// What the observer did with a committed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterChange {
    /// Buffer left as committed
    Unchanged,
    /// A closer was inserted; cursor parked between the pair
    ClosedBracket { cursor: usize },
    /// A sentinel was removed; cursor parked where it was
    StrippedSentinel { cursor: usize },
}

impl AfterChange {
    /// Cursor offset the host should apply, if any
    pub fn cursor(&self) -> Option<usize> {
        match self {
            AfterChange::Unchanged => None,
            AfterChange::ClosedBracket { cursor } | AfterChange::StrippedSentinel { cursor } => {
                Some(*cursor)
            }
        }
    }
}

/// Post-commit observer.
///
/// Performs at most one single-character mutation per notice and never
/// produces a further notice, so chaining it after the indent filter cannot
/// recurse.
#[derive(Debug, Clone)]
pub struct BracketAutoCloser {
    sentinel: char,
    enabled: bool,
}

impl BracketAutoCloser {
    pub fn new(sentinel: char) -> Self {
        Self {
            sentinel,
            enabled: true,
        }
    }

    pub fn from_config(config: &AssistConfig) -> Self {
        Self {
            sentinel: config.sentinel,
            enabled: config.auto_close_brackets,
        }
    }

    /// Turn bracket closing on or off. Sentinel cleanup always runs.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    /// React to a committed change in `buffer`.
    ///
    /// Mutation failures are logged and dropped: the buffer stays as committed
    /// and no cursor move is reported.
    pub fn after_change<B: TextBufferMut + ?Sized>(
        &self,
        buffer: &mut B,
        change: &ChangeNotice,
    ) -> AfterChange {
        if change.start >= buffer.len_chars() {
            return AfterChange::Unchanged;
        }

        if self.enabled && change.count == 1 {
            if let Some(close) = buffer.char_at(change.start).and_then(closing_for) {
                return self.insert_closer(buffer, change.start, close);
            }
        }

        self.strip_sentinel(buffer, change)
    }

    fn insert_closer<B: TextBufferMut + ?Sized>(
        &self,
        buffer: &mut B,
        open_at: usize,
        close: char,
    ) -> AfterChange {
        let mut utf8 = [0u8; 4];
        match buffer.try_insert(open_at + 1, close.encode_utf8(&mut utf8)) {
            Ok(()) => {
                tracing::debug!("auto-closed bracket at {} with {:?}", open_at, close);
                AfterChange::ClosedBracket {
                    cursor: open_at + 1,
                }
            }
            Err(e) => {
                tracing::debug!("skipping auto-close at {}: {}", open_at, e);
                AfterChange::Unchanged
            }
        }
    }

    fn strip_sentinel<B: TextBufferMut + ?Sized>(
        &self,
        buffer: &mut B,
        change: &ChangeNotice,
    ) -> AfterChange {
        let range = change.inserted_range();
        let end = range.end.min(buffer.len_chars());
        let Some(at) = (range.start..end).find(|&i| buffer.char_at(i) == Some(self.sentinel))
        else {
            return AfterChange::Unchanged;
        };

        match buffer.try_remove(at..at + 1) {
            Ok(()) => {
                tracing::debug!("stripped cursor sentinel at {}", at);
                AfterChange::StrippedSentinel { cursor: at }
            }
            Err(e) => {
                tracing::debug!("failed to strip sentinel at {}: {}", at, e);
                AfterChange::Unchanged
            }
        }
    }
}
