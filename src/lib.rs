//! Edit Assist - bracket auto-closing and auto-indent for code editors
//!
//! This crate provides the text transformations a code editor widget applies
//! while the user types: closing brackets as they are opened, and indenting
//! the new line when Enter is pressed.

pub mod assist;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use assist::{AfterChange, BracketAutoCloser, EditSession, IndentDecision, IndentEngine};
pub use config::AssistConfig;
pub use editable::{RopeBuffer, TextBuffer, TextBufferMut};
