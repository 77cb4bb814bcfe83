//! Character classification shared by the assist scans

/// Tokens that, as the last non-blank character before the cursor, open a
/// scope or continue an expression onto the next line.
pub const CONTINUATION_TOKENS: [char; 9] = ['{', '+', '-', '*', '/', '%', '^', '=', '['];

/// Horizontal whitespace that makes up an indentation run
pub fn is_indent_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Check if a character opens a scope or continues an expression
pub fn is_continuation_token(ch: char) -> bool {
    CONTINUATION_TOKENS.contains(&ch)
}

/// Letters and digits in any script
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}
