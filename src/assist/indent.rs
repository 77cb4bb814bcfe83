//! Auto-indent on Enter.
//!
//! The engine is a pre-commit filter: given a proposed single `'\n'`
//! insertion it returns the text to commit instead. It never touches the
//! buffer itself.
//!
//! The decision is made by rescanning the cursor's line on every Enter:
//!
//! 1. Walk backward from the cursor to the line start, keeping a balance.
//!    The nearest non-blank char counts -1 if it is a continuation token
//!    (`{ + - * / % ^ = [`); every `(` counts -1 and every `)` counts +1.
//! 2. Copy the line's leading blanks (and a `//` marker when Enter splits a
//!    line mid-way) as the new line's prefix.
//! 3. A negative balance adds one indent unit.
//! 4. Enter between an empty `{}` pair yields two lines: an indented body line
//!    tagged with the sentinel, and a line for `}` aligned with the opener.

use crate::config::AssistConfig;
use crate::editable::TextBuffer;
use crate::util::{is_continuation_token, is_indent_whitespace};

use super::event::EditEvent;

/// Replacement computed for a newline insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndentDecision {
    /// Prefix for the single new line
    Plain(String),
    /// Body line prefix, then a closing line prefix, split by the sentinel
    Split { body: String, close: String },
}

impl IndentDecision {
    /// Indentation of the line the cursor lands on
    pub fn body_indent(&self) -> &str {
        match self {
            IndentDecision::Plain(prefix) => prefix,
            IndentDecision::Split { body, .. } => body,
        }
    }

    /// Text to commit in place of the typed `newline`
    pub fn render(&self, newline: &str, sentinel: char) -> String {
        match self {
            IndentDecision::Plain(prefix) => format!("{newline}{prefix}"),
            IndentDecision::Split { body, close } => {
                format!("{newline}{body}{sentinel}\n{close}")
            }
        }
    }
}

/// Result of the backward scan over the cursor's line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineScan {
    /// Offset of the first char of the line holding the cursor
    pub line_start: usize,
    /// Negative when the line leaves a scope or expression open
    pub balance: i32,
}

/// Scan backward from `cursor` to the start of its line.
pub fn scan_balance<B: TextBuffer + ?Sized>(dest: &B, cursor: usize) -> LineScan {
    let mut pos = cursor.min(dest.len_chars());
    let mut balance = 0;
    let mut seen_text = false;

    while pos > 0 {
        let Some(ch) = dest.char_at(pos - 1) else {
            break;
        };
        if ch == '\n' {
            break;
        }
        if !is_indent_whitespace(ch) {
            if !seen_text {
                if is_continuation_token(ch) {
                    balance -= 1;
                }
                seen_text = true;
            }
            match ch {
                '(' => balance -= 1,
                ')' => balance += 1,
                _ => {}
            }
        }
        pos -= 1;
    }

    tracing::trace!("line scan from {}: start {}, balance {}", cursor, pos, balance);
    LineScan {
        line_start: pos,
        balance,
    }
}

/// Leading blanks of the line starting at `line_start`, read up to `limit`.
///
/// With `continue_comment`, a `//` found where the blanks end is kept too.
pub fn capture_prefix<B: TextBuffer + ?Sized>(
    dest: &B,
    line_start: usize,
    limit: usize,
    continue_comment: bool,
) -> String {
    let limit = limit.min(dest.len_chars());
    let mut end = line_start;
    while end < limit {
        let Some(ch) = dest.char_at(end) else {
            break;
        };
        if continue_comment && ch == '/' && end + 1 < limit && dest.char_at(end + 1) == Some('/') {
            end += 2;
            break;
        }
        if !is_indent_whitespace(ch) {
            break;
        }
        end += 1;
    }
    dest.slice(line_start..end)
}

/// Leading blanks of the line starting at `line_start`
pub fn leading_whitespace<B: TextBuffer + ?Sized>(dest: &B, line_start: usize) -> String {
    let mut end = line_start;
    while dest.char_at(end).is_some_and(is_indent_whitespace) {
        end += 1;
    }
    dest.slice(line_start..end)
}

/// Check if the edit sits inside an empty `{}` pair
fn splits_empty_braces<B: TextBuffer + ?Sized>(dest: &B, dstart: usize, dend: usize) -> bool {
    dstart > 0 && dest.char_at(dstart - 1) == Some('{') && dest.char_at(dend) == Some('}')
}

/// Pre-commit newline filter.
#[derive(Debug, Clone)]
pub struct IndentEngine {
    indent_unit: String,
    sentinel: char,
    enabled: bool,
}

impl IndentEngine {
    pub fn new(indent_unit: impl Into<String>, sentinel: char) -> Self {
        Self {
            indent_unit: indent_unit.into(),
            sentinel,
            enabled: true,
        }
    }

    pub fn from_config(config: &AssistConfig) -> Self {
        Self {
            indent_unit: config.indent_unit.clone(),
            sentinel: config.sentinel,
            enabled: config.auto_indent,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// Text to commit instead of the proposed edit, or `None` to pass it
    /// through unchanged.
    pub fn filter<B: TextBuffer + ?Sized>(&self, event: &EditEvent<'_, B>) -> Option<String> {
        let decision = self.decide(event)?;
        Some(decision.render(&event.inserted_text(), self.sentinel))
    }

    /// Decide the indentation for a newline insertion.
    ///
    /// Returns `None` unless exactly one `'\n'` is being inserted.
    pub fn decide<B: TextBuffer + ?Sized>(&self, event: &EditEvent<'_, B>) -> Option<IndentDecision> {
        if !self.enabled || event.inserted_char()? != '\n' {
            return None;
        }
        let dest = event.dest;
        if event.dstart > dest.len_chars() {
            return None;
        }

        let scan = scan_balance(dest, event.dstart);

        // Comment continuation only applies when Enter splits a line
        let continue_comment = dest
            .char_at(event.dstart)
            .is_some_and(|ch| !matches!(ch, '\n' | '\r'));
        let mut prefix = capture_prefix(dest, scan.line_start, event.dend, continue_comment);

        let indented = scan.balance < 0;
        if indented {
            prefix.push_str(&self.indent_unit);
        }

        let decision = if splits_empty_braces(dest, event.dstart, event.dend) {
            // The `{` is on the cursor's line, so its line start is already known
            let close = leading_whitespace(dest, scan.line_start);
            if !indented {
                prefix.push_str(&self.indent_unit);
            }
            IndentDecision::Split {
                body: prefix,
                close,
            }
        } else {
            IndentDecision::Plain(prefix)
        };

        tracing::debug!(
            "newline at {}: balance {}, decision {:?}",
            event.dstart,
            scan.balance,
            decision
        );
        Some(decision)
    }
}

impl Default for IndentEngine {
    fn default() -> Self {
        Self::from_config(&AssistConfig::default())
    }
}
