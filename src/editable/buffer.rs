//! Text buffer traits and the rope-backed implementation.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits.
//! These are the capabilities a host editor hands to the assist pipeline:
//! length, per-offset character reads, slicing, line lookups and scoped
//! insert/remove. All offsets are character offsets, never bytes.

use ropey::Rope;
use std::ops::Range;
use thiserror::Error;

/// A buffer mutation that could not be applied.
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("offset {offset} is past the end of the buffer (length {len})")]
    OutOfBounds { offset: usize, len: usize },

    #[error("invalid range {start}..{end} for buffer of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("rope edit failed: {0}")]
    Rope(#[from] ropey::Error),
}

/// Read-only view into a text buffer.
pub trait TextBuffer {
    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Character at a char offset, None if out of bounds
    fn char_at(&self, offset: usize) -> Option<char>;

    /// Get slice of text as String (by character indices, clamped)
    fn slice(&self, range: Range<usize>) -> String;

    /// Get full content as String (may be expensive for large buffers)
    fn content(&self) -> String;

    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Char range of a line's content, excluding its line break
    fn line_range(&self, line: usize) -> Option<Range<usize>>;

    /// Line index holding a char offset (clamped to the buffer)
    fn offset_to_line(&self, offset: usize) -> usize;
}

/// Mutable buffer operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset (clamped to the buffer end)
    fn insert(&mut self, offset: usize, text: &str);

    /// Remove text in character range (clamped to the buffer)
    fn remove(&mut self, range: Range<usize>);

    /// Insert text, failing instead of clamping when the offset is invalid
    fn try_insert(&mut self, offset: usize, text: &str) -> Result<(), BufferError> {
        let len = self.len_chars();
        if offset > len {
            return Err(BufferError::OutOfBounds { offset, len });
        }
        self.insert(offset, text);
        Ok(())
    }

    /// Remove text, failing instead of clamping when the range is invalid
    fn try_remove(&mut self, range: Range<usize>) -> Result<(), BufferError> {
        let len = self.len_chars();
        if range.start > range.end || range.end > len {
            return Err(BufferError::InvalidRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        self.remove(range);
        Ok(())
    }

    /// Replace text in range with new text
    fn replace(&mut self, range: Range<usize>, text: &str) {
        self.remove(range.clone());
        self.insert(range.start, text);
    }
}

// =============================================================================
// RopeBuffer
// =============================================================================

/// TextBuffer implementation wrapping ropey::Rope.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a RopeBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Access the underlying Rope for rope-specific operations
    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl Default for RopeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Rope> for RopeBuffer {
    fn from(rope: Rope) -> Self {
        Self { rope }
    }
}

impl TextBuffer for RopeBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.rope.get_char(offset)
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    fn line_range(&self, line: usize) -> Option<Range<usize>> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let start = self.rope.line_to_char(line);
        let mut end = start + self.rope.line(line).len_chars();
        // Exclude trailing "\n" or "\r\n"
        if end > start && self.rope.char(end - 1) == '\n' {
            end -= 1;
        }
        if end > start && self.rope.char(end - 1) == '\r' {
            end -= 1;
        }
        Some(start..end)
    }

    fn offset_to_line(&self, offset: usize) -> usize {
        self.rope.char_to_line(offset.min(self.rope.len_chars()))
    }
}

impl TextBufferMut for RopeBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert(clamped, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }

    fn try_insert(&mut self, offset: usize, text: &str) -> Result<(), BufferError> {
        self.rope.try_insert(offset, text)?;
        Ok(())
    }

    fn try_remove(&mut self, range: Range<usize>) -> Result<(), BufferError> {
        if range.start > range.end {
            return Err(BufferError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.len_chars(),
            });
        }
        self.rope.try_remove(range)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rope_buffer_char_at() {
        let buf = RopeBuffer::from_text("héllo\nworld");
        assert_eq!(buf.len_chars(), 11);
        assert_eq!(buf.char_at(1), Some('é'));
        assert_eq!(buf.char_at(5), Some('\n'));
        assert_eq!(buf.char_at(11), None);
    }

    #[test]
    fn test_rope_buffer_line_range() {
        let buf = RopeBuffer::from_text("line1\r\nline2\nline3");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line_range(0), Some(0..5));
        assert_eq!(buf.line_range(1), Some(7..12));
        assert_eq!(buf.line_range(2), Some(13..18));
        assert_eq!(buf.line_range(3), None);
    }

    #[test]
    fn test_rope_buffer_trailing_newline_has_empty_last_line() {
        let buf = RopeBuffer::from_text("a\n");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_range(1), Some(2..2));
    }

    #[test]
    fn test_rope_buffer_offset_to_line() {
        let buf = RopeBuffer::from_text("hello\nworld");
        assert_eq!(buf.offset_to_line(0), 0);
        assert_eq!(buf.offset_to_line(5), 0);
        assert_eq!(buf.offset_to_line(6), 1);
        assert_eq!(buf.offset_to_line(100), 1);
    }

    #[test]
    fn test_rope_buffer_insert_and_remove() {
        let mut buf = RopeBuffer::from_text("hello\nworld");
        buf.insert(6, "beautiful ");
        assert_eq!(buf.content(), "hello\nbeautiful world");
        buf.remove(5..6);
        assert_eq!(buf.content(), "hellobeautiful world");
    }

    #[test]
    fn test_rope_buffer_slice_clamps() {
        let buf = RopeBuffer::from_text("hello world");
        assert_eq!(buf.slice(6..11), "world");
        assert_eq!(buf.slice(6..100), "world");
        assert_eq!(buf.slice(8..3), "");
    }

    #[test]
    fn test_try_insert_out_of_bounds() {
        let mut buf = RopeBuffer::from_text("abc");
        assert!(buf.try_insert(4, "x").is_err());
        assert_eq!(buf.content(), "abc");
        assert!(buf.try_insert(3, "x").is_ok());
        assert_eq!(buf.content(), "abcx");
    }

    #[test]
    fn test_try_remove_out_of_bounds() {
        let mut buf = RopeBuffer::from_text("abc");
        assert!(buf.try_remove(2..5).is_err());
        assert!(matches!(
            buf.try_remove(2..1),
            Err(BufferError::InvalidRange { .. })
        ));
        assert_eq!(buf.content(), "abc");
        assert!(buf.try_remove(1..2).is_ok());
        assert_eq!(buf.content(), "ac");
    }

    #[test]
    fn test_replace() {
        let mut buf = RopeBuffer::from_text("foo bar");
        buf.replace(4..7, "baz");
        assert_eq!(buf.content(), "foo baz");
    }
}
