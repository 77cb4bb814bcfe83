//! Live typing assistance for code editing.
//!
//! Two stages run on every edit:
//!
//! - [`IndentEngine`]: pre-commit filter that rewrites a typed newline into a
//!   newline plus indentation, splitting an empty `{}` pair over two lines.
//! - [`BracketAutoCloser`]: post-commit observer that closes a typed opening
//!   bracket and strips the cursor sentinel the indent engine leaves behind.
//!
//! [`EditSession`] owns a buffer and cursor and chains the two.
//!
//! # Example
//!
//! ```
//! use edit_assist::assist::EditSession;
//! use edit_assist::AssistConfig;
//!
//! let mut session = EditSession::from_text("fn main() ", &AssistConfig::default())
//!     .with_cursor(10);
//! session.type_char('{');
//! session.type_char('\n');
//!
//! assert_eq!(session.text(), "fn main() {\n    \n}");
//! assert_eq!(session.cursor(), 16);
//! ```

mod brackets;
mod event;
mod indent;
mod lines;
mod session;

pub use brackets::{closing_for, AfterChange, BracketAutoCloser, BRACKET_PAIRS};
pub use event::{ChangeNotice, EditEvent};
pub use indent::{
    capture_prefix, leading_whitespace, scan_balance, IndentDecision, IndentEngine, LineScan,
};
pub use lines::{
    next_line, next_line_range, previous_line, previous_line_range, word_range_at,
    word_under_cursor,
};
pub use session::EditSession;
