//! Edit descriptions passed to the pre-commit filter and post-commit observer.

use std::ops::Range;

use crate::editable::TextBuffer;

/// A proposed edit, seen before it is committed.
///
/// `source[start..end]` (char offsets) is the text about to replace
/// `dest[dstart..dend]`. `dest` is the buffer as it stood before the edit.
#[derive(Debug)]
pub struct EditEvent<'a, B: TextBuffer + ?Sized> {
    pub source: &'a str,
    pub start: usize,
    pub end: usize,
    pub dest: &'a B,
    pub dstart: usize,
    pub dend: usize,
}

impl<'a, B: TextBuffer + ?Sized> EditEvent<'a, B> {
    /// Build an event, or `None` if the offsets are inconsistent.
    pub fn new(
        source: &'a str,
        start: usize,
        end: usize,
        dest: &'a B,
        dstart: usize,
        dend: usize,
    ) -> Option<Self> {
        let source_len = source.chars().count();
        if start > end || end > source_len || dstart > dend || dend > dest.len_chars() {
            return None;
        }
        Some(Self {
            source,
            start,
            end,
            dest,
            dstart,
            dend,
        })
    }

    /// Event for `text` replacing `range` of `dest`
    pub fn replacing(text: &'a str, dest: &'a B, range: Range<usize>) -> Option<Self> {
        Self::new(text, 0, text.chars().count(), dest, range.start, range.end)
    }

    /// The inserted character, if exactly one is being inserted
    pub fn inserted_char(&self) -> Option<char> {
        if self.end - self.start != 1 {
            return None;
        }
        self.source.chars().nth(self.start)
    }

    /// The inserted span `source[start..end]`
    pub fn inserted_text(&self) -> String {
        self.source
            .chars()
            .skip(self.start)
            .take(self.end - self.start)
            .collect()
    }
}

/// A committed edit: `before` chars at `start` were replaced by `count` chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeNotice {
    pub start: usize,
    pub before: usize,
    pub count: usize,
}

impl ChangeNotice {
    pub fn inserted(start: usize, count: usize) -> Self {
        Self {
            start,
            before: 0,
            count,
        }
    }

    /// Offsets of the newly inserted text in the buffer after the commit
    pub fn inserted_range(&self) -> Range<usize> {
        self.start..self.start + self.count
    }
}
