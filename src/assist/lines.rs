//! Line and word lookups around the cursor.

use std::ops::Range;

use crate::editable::TextBuffer;
use crate::util::is_word_char;

/// Char range of the line above `line`, None on the first line
pub fn previous_line_range<B: TextBuffer + ?Sized>(buffer: &B, line: usize) -> Option<Range<usize>> {
    let previous = line.checked_sub(1)?;
    buffer.line_range(previous)
}

/// Char range of the line below `line`, None on the last line
pub fn next_line_range<B: TextBuffer + ?Sized>(buffer: &B, line: usize) -> Option<Range<usize>> {
    let next = line.checked_add(1)?;
    if next >= buffer.line_count() {
        return None;
    }
    buffer.line_range(next)
}

/// Text of the line above `line`
pub fn previous_line<B: TextBuffer + ?Sized>(buffer: &B, line: usize) -> Option<String> {
    previous_line_range(buffer, line).map(|range| buffer.slice(range))
}

/// Text of the line below `line`
pub fn next_line<B: TextBuffer + ?Sized>(buffer: &B, line: usize) -> Option<String> {
    next_line_range(buffer, line).map(|range| buffer.slice(range))
}

/// Maximal run of letters and digits touching `offset`.
///
/// Empty (`offset..offset`) when the cursor is not next to a word char.
pub fn word_range_at<B: TextBuffer + ?Sized>(buffer: &B, offset: usize) -> Range<usize> {
    let offset = offset.min(buffer.len_chars());

    let mut start = offset;
    while start > 0 && buffer.char_at(start - 1).is_some_and(is_word_char) {
        start -= 1;
    }

    let mut end = offset;
    while buffer.char_at(end).is_some_and(is_word_char) {
        end += 1;
    }

    start..end
}

/// The word under the cursor, empty if there is none
pub fn word_under_cursor<B: TextBuffer + ?Sized>(buffer: &B, offset: usize) -> String {
    buffer.slice(word_range_at(buffer, offset))
}
